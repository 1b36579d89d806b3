// hanzi-search: Find dictionary words by their characters.
//
// Usage:
//   hanzi-search [-d DATA_PATH] [--only] [--json] [CHARS...]
//
// By default lists every headword containing any of the characters. With
// --only, lists headwords made of nothing but those characters.

use std::io::{self, Write};

use hanzi_dict::{HanziOptions, SearchMode};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = hanzi_cli::init_logging(&args);
    let (data_path, args) = hanzi_cli::parse_data_path(&args);

    if hanzi_cli::wants_help(&args) {
        println!("hanzi-search: Search dictionary headwords by character.");
        println!();
        println!("Usage: hanzi-search [-d DATA_PATH] [--only] [--json] [CHARS...]");
        println!();
        println!("If CHARS arguments are given, searches for each one.");
        println!("Otherwise reads queries from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing cedict_ts.u8");
        println!("  --only                 Headwords using only the given characters");
        println!("  --json                 Print one JSON array per query");
        println!("  -q, -v, -vv            Logging verbosity");
        println!("  -h, --help             Print this help");
        return;
    }

    let mode = if hanzi_cli::has_flag(&args, "--only") {
        SearchMode::Only
    } else {
        SearchMode::Any
    };
    let json = hanzi_cli::wants_json(&args);

    let options = HanziOptions {
        index_components: false,
        ..HanziOptions::default()
    };
    let handle = hanzi_cli::load_handle(data_path.as_deref(), options)
        .unwrap_or_else(|e| hanzi_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for query in hanzi_cli::inputs(&args) {
        let entries = handle.dictionary_search(&query, mode);
        if json {
            let _ = hanzi_cli::write_json(&mut out, &entries);
            continue;
        }
        if entries.is_empty() {
            let _ = writeln!(out, "{query}: (no matches)");
            continue;
        }
        let _ = writeln!(out, "{query}:");
        for entry in entries {
            let _ = writeln!(
                out,
                "  {} [{}] {}",
                entry.simplified, entry.pinyin, entry.definition
            );
        }
    }
}

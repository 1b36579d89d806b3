// hanzi-define: Dictionary definitions of words.
//
// Usage:
//   hanzi-define [-d DATA_PATH] [--simplified | --traditional] [--json] [WORD...]
//
// Without a script flag the simplified headwords are tried first, then the
// traditional ones.

use std::io::{self, Write};

use hanzi_dict::{HanziOptions, Script};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = hanzi_cli::init_logging(&args);
    let (data_path, args) = hanzi_cli::parse_data_path(&args);

    if hanzi_cli::wants_help(&args) {
        println!("hanzi-define: Look up CC-CEDICT definitions.");
        println!();
        println!("Usage: hanzi-define [-d DATA_PATH] [--simplified | --traditional] [--json] [WORD...]");
        println!();
        println!("If WORD arguments are given, looks up each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing cedict_ts.u8");
        println!("  --simplified           Only match simplified headwords");
        println!("  --traditional          Only match traditional headwords");
        println!("  --json                 Print one JSON array per word");
        println!("  -q, -v, -vv            Logging verbosity");
        println!("  -h, --help             Print this help");
        return;
    }

    let script = match (
        hanzi_cli::has_flag(&args, "--simplified"),
        hanzi_cli::has_flag(&args, "--traditional"),
    ) {
        (true, true) => hanzi_cli::fatal("--simplified and --traditional are exclusive"),
        (true, false) => Some(Script::Simplified),
        (false, true) => Some(Script::Traditional),
        (false, false) => None,
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

    for word in hanzi_cli::inputs(&args) {
        match handle.definition_lookup(&word, script) {
            Ok(entries) if json => {
                let _ = hanzi_cli::write_json(&mut out, &entries);
            }
            Ok(entries) => {
                for entry in entries {
                    let _ = writeln!(
                        out,
                        "{} {} [{}]",
                        entry.traditional, entry.simplified, entry.pinyin
                    );
                    for sense in entry.senses() {
                        let _ = writeln!(out, "  - {sense}");
                    }
                }
            }
            Err(e) => {
                let _ = writeln!(out, "{word}: {e}");
            }
        }
    }
}

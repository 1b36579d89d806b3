// hanzi-examples: Example words for a character, by word frequency.
//
// Usage:
//   hanzi-examples [-d DATA_PATH] [-n LIMIT] [--json] [CHAR...]

use std::io::{self, Write};

use hanzi_dict::{DictionaryEntry, HanziOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = hanzi_cli::init_logging(&args);
    let (data_path, args) = hanzi_cli::parse_data_path(&args);
    let (limit, args) = hanzi_cli::take_value(&args, "-n", "--limit");

    if hanzi_cli::wants_help(&args) {
        println!("hanzi-examples: Example words grouped by frequency.");
        println!();
        println!("Usage: hanzi-examples [-d DATA_PATH] [-n LIMIT] [--json] [CHAR...]");
        println!();
        println!("If CHAR arguments are given, lists examples for each one.");
        println!("Otherwise reads characters from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing cedict_ts.u8");
        println!("  -n, --limit N          At most N words per frequency group");
        println!("  --json                 Print one JSON object per character");
        println!("  -q, -v, -vv            Logging verbosity");
        println!("  -h, --help             Print this help");
        return;
    }

    let example_limit = limit.map(|n| {
        n.parse::<usize>()
            .unwrap_or_else(|_| hanzi_cli::fatal(&format!("invalid limit: {n}")))
    });
    let json = hanzi_cli::wants_json(&args);

    let options = HanziOptions {
        index_components: false,
        example_limit,
    };
    let handle = hanzi_cli::load_handle(data_path.as_deref(), options)
        .unwrap_or_else(|e| hanzi_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for character in hanzi_cli::inputs(&args) {
        let examples = handle.get_examples(&character);
        if json {
            let _ = hanzi_cli::write_json(&mut out, &examples);
            continue;
        }
        if examples.is_empty() {
            let _ = writeln!(out, "{character}: (no examples)");
            continue;
        }
        let _ = writeln!(out, "{character}:");
        print_group("high", &examples.high_frequency, &mut out);
        print_group("mid", &examples.mid_frequency, &mut out);
        print_group("low", &examples.low_frequency, &mut out);
    }
}

fn print_group<W: Write>(label: &str, words: &[&DictionaryEntry], out: &mut W) {
    if words.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {label}:");
    for entry in words {
        let _ = writeln!(out, "    {} [{}]", entry.simplified, entry.pinyin);
    }
}

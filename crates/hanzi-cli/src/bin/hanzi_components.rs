// hanzi-components: Find characters containing a component.
//
// For a radical, characters built from any radical sharing its meaning are
// listed too (氵 also finds characters indexed under 水).
//
// Usage:
//   hanzi-components [-d DATA_PATH] [--json] [COMPONENT...]

use std::io::{self, Write};

use hanzi_dict::HanziOptions;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = hanzi_cli::init_logging(&args);
    let (data_path, args) = hanzi_cli::parse_data_path(&args);

    if hanzi_cli::wants_help(&args) {
        println!("hanzi-components: List characters containing a component.");
        println!();
        println!("Usage: hanzi-components [-d DATA_PATH] [--json] [COMPONENT...]");
        println!();
        println!("If COMPONENT arguments are given, looks up each one.");
        println!("Otherwise reads components from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing cjk_decomp.txt");
        println!("  --json                 Print one JSON array per component");
        println!("  -q, -v, -vv            Logging verbosity");
        println!("  -h, --help             Print this help");
        return;
    }

    let json = hanzi_cli::wants_json(&args);
    let handle = hanzi_cli::load_handle(data_path.as_deref(), HanziOptions::default())
        .unwrap_or_else(|e| hanzi_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for component in hanzi_cli::inputs(&args) {
        let characters = handle.get_characters_with_component(&component);
        if json {
            let _ = hanzi_cli::write_json(&mut out, &characters);
            continue;
        }
        match characters {
            Some(list) if !list.is_empty() => {
                let meaning = handle
                    .get_radical_meaning(&component)
                    .map(|m| format!(" ({m})"))
                    .unwrap_or_default();
                let _ = writeln!(out, "{component}{meaning}: {}", list.join(""));
            }
            _ => {
                let _ = writeln!(out, "{component}: (no characters)");
            }
        }
    }
}

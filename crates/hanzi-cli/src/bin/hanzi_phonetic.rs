// hanzi-phonetic: Phonetic regularity of a character's components.
//
// For each reading of the character, prints every component with its own
// reading and a regularity score: 1 exact, 2 same syllable, 3 same initial,
// 4 same final, 0 unrelated.
//
// Usage:
//   hanzi-phonetic [-d DATA_PATH] [--json] [CHAR...]

use std::io::{self, Write};

use hanzi_dict::HanziOptions;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = hanzi_cli::init_logging(&args);
    let (data_path, args) = hanzi_cli::parse_data_path(&args);

    if hanzi_cli::wants_help(&args) {
        println!("hanzi-phonetic: Score how well components hint at pronunciation.");
        println!();
        println!("Usage: hanzi-phonetic [-d DATA_PATH] [--json] [CHAR...]");
        println!();
        println!("If CHAR arguments are given, scores each one.");
        println!("Otherwise reads characters from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing cedict_ts.u8");
        println!("  --json                 Print one JSON array per character");
        println!("  -q, -v, -vv            Logging verbosity");
        println!("  -h, --help             Print this help");
        return;
    }

    let json = hanzi_cli::wants_json(&args);
    let options = HanziOptions {
        index_components: false,
        ..HanziOptions::default()
    };
    let handle = hanzi_cli::load_handle(data_path.as_deref(), options)
        .unwrap_or_else(|e| hanzi_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for character in hanzi_cli::inputs(&args) {
        let readings = match handle.determine_phonetic_regularity(&character) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("{character}: {e}");
                continue;
            }
        };
        if json {
            let _ = hanzi_cli::write_json(&mut out, &readings);
            continue;
        }
        let Some(readings) = readings else {
            let _ = writeln!(out, "{character}: (no reading)");
            continue;
        };
        for reading in readings {
            let _ = writeln!(out, "{} [{}]:", reading.character, reading.pinyin);
            for row in &reading.components {
                let pinyin = row.phonetic_pinyin.as_deref().unwrap_or("-");
                let score = row
                    .regularity
                    .map(|r| r.score().to_string())
                    .unwrap_or_else(|| "-".to_string());
                let _ = writeln!(out, "  {} {} {}", row.component, pinyin, score);
            }
        }
    }
}

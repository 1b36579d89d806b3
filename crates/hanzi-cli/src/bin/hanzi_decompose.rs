// hanzi-decompose: Decompose characters into their components.
//
// Reads characters or phrases from the arguments, or from stdin (one per
// line), and prints their decompositions. A single character gets every view
// (or the one picked with --mode); a longer phrase is decomposed character by
// character.
//
// Usage:
//   hanzi-decompose [-d DATA_PATH] [-m MODE] [--json] [TEXT...]
//
// Options:
//   -d, --data-path PATH   Data directory containing cjk_decomp.txt
//   -m, --mode MODE        once, radical, graphical or radical_up
//   --json                 Print one JSON object per input
//   -q, -v, -vv            Logging verbosity
//   -h, --help             Print help

use std::io::{self, Write};

use hanzi_dict::{DecompositionMode, DecompositionResult, HanziHandle, HanziOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = hanzi_cli::init_logging(&args);
    let (data_path, args) = hanzi_cli::parse_data_path(&args);
    let (mode, args) = hanzi_cli::take_value(&args, "-m", "--mode");

    if hanzi_cli::wants_help(&args) {
        println!("hanzi-decompose: Decompose Chinese characters into components.");
        println!();
        println!("Usage: hanzi-decompose [-d DATA_PATH] [-m MODE] [--json] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, decomposes each one.");
        println!("Otherwise reads text from stdin (one item per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing cjk_decomp.txt");
        println!("  -m, --mode MODE        once, radical, graphical or radical_up");
        println!("  --json                 Print one JSON object per input");
        println!("  -q, -v, -vv            Logging verbosity");
        println!("  -h, --help             Print this help");
        return;
    }

    let mode: Option<DecompositionMode> = mode.map(|m| {
        m.parse()
            .unwrap_or_else(|e: hanzi_dict::HanziError| hanzi_cli::fatal(&e.to_string()))
    });
    let json = hanzi_cli::wants_json(&args);

    // Component lookups are not needed here.
    let options = HanziOptions {
        index_components: false,
        ..HanziOptions::default()
    };
    let handle =
        hanzi_cli::load_handle(data_path.as_deref(), options).unwrap_or_else(|e| hanzi_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for item in hanzi_cli::inputs(&args) {
        decompose_item(&handle, &item, mode, json, &mut out);
    }
}

fn decompose_item<W: Write>(
    handle: &HanziHandle,
    item: &str,
    mode: Option<DecompositionMode>,
    json: bool,
    out: &mut W,
) {
    if item.chars().count() == 1 {
        match handle.decompose(item, mode) {
            Ok(result) if json => {
                let _ = hanzi_cli::write_json(out, &result);
            }
            Ok(result) => print_result(&result, out),
            Err(e) => eprintln!("{item}: {e}"),
        }
        return;
    }

    match handle.decompose_many(item, mode) {
        Ok(map) if json => {
            let _ = hanzi_cli::write_json(out, &map);
        }
        Ok(map) => {
            for (_, result) in map.iter() {
                print_result(result, out);
            }
        }
        Err(e) => eprintln!("{item}: {e}"),
    }
}

fn print_result<W: Write>(result: &DecompositionResult, out: &mut W) {
    match result {
        DecompositionResult::Full(d) => {
            let _ = writeln!(out, "{}:", d.character);
            for mode in DecompositionMode::ALL {
                let _ = writeln!(out, "  {}: {}", mode, d.view(mode).join(" "));
            }
        }
        DecompositionResult::Single(list) => {
            let _ = writeln!(
                out,
                "{} ({}): {}",
                list.character,
                list.mode,
                list.components.join(" ")
            );
        }
    }
}

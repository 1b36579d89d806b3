// hanzi-frequency: Character frequency statistics.
//
// Usage:
//   hanzi-frequency [-d DATA_PATH] [--json] [CHAR...]
//   hanzi-frequency [-d DATA_PATH] [--json] --rank N

use std::io::{self, Write};

use hanzi_dict::{FrequencyRecord, HanziOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = hanzi_cli::init_logging(&args);
    let (data_path, args) = hanzi_cli::parse_data_path(&args);
    let (rank, args) = hanzi_cli::take_value(&args, "-r", "--rank");

    if hanzi_cli::wants_help(&args) {
        println!("hanzi-frequency: Corpus frequency of Chinese characters.");
        println!();
        println!("Usage: hanzi-frequency [-d DATA_PATH] [--json] [CHAR...]");
        println!("       hanzi-frequency [-d DATA_PATH] [--json] --rank N");
        println!();
        println!("If CHAR arguments are given, prints statistics for each one.");
        println!("Otherwise reads characters from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing leiden_freq_variants_removed.txt");
        println!("  -r, --rank N           Character at 1-based frequency rank N");
        println!("  --json                 Print one JSON object per character");
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

    if let Some(rank) = rank {
        let position = rank
            .parse::<usize>()
            .unwrap_or_else(|_| hanzi_cli::fatal(&format!("invalid rank: {rank}")));
        match handle.get_character_in_frequency_list_by_position(position) {
            Ok(record) => print_record(record, json, &mut out),
            Err(e) => hanzi_cli::fatal(&e.to_string()),
        }
        return;
    }

    for character in hanzi_cli::inputs(&args) {
        match handle.get_character_frequency(&character) {
            Ok(record) => print_record(record, json, &mut out),
            Err(e) => {
                let _ = writeln!(out, "{character}: {e}");
            }
        }
    }
}

fn print_record<W: Write>(record: &FrequencyRecord, json: bool, out: &mut W) {
    if json {
        let _ = hanzi_cli::write_json(out, record);
        return;
    }
    let _ = writeln!(
        out,
        "{}\t#{}\t{}\t{:.4}%\t{}\t{}",
        record.character,
        record.number,
        record.count,
        record.percentage,
        record.pinyin,
        record.meaning
    );
}

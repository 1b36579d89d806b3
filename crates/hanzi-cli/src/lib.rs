// hanzi-cli: shared utilities for CLI tools.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use env_logger::Builder;
use log::{LevelFilter, debug};
use serde::Serialize;

use hanzi_core::HanziError;
use hanzi_dict::{DataSources, HanziHandle, HanziOptions};

/// Environment variable naming the data directory.
pub const DATA_PATH_ENV: &str = "HANZI_DATA_PATH";

/// Decomposition table file name; its presence marks a data directory.
const DECOMPOSITION_FILE: &str = "cjk_decomp.txt";
const RADICALS_FILE: &str = "radical_with_meanings.json";
const DICTIONARY_FILE: &str = "cedict_ts.u8";
const CHARACTER_FREQUENCY_FILE: &str = "leiden_freq_variants_removed.txt";
const WORD_FREQUENCY_FILE: &str = "leiden_freq_data.txt";
const IRREGULAR_PHONETICS_FILE: &str = "irregular_phonetics.txt";
const INDEX_CORPUS_FILE: &str = "chinese_charfreq_simpl_trad.csv";

/// Owned contents of one data directory.
struct DataFiles {
    decomposition: String,
    radicals: String,
    dictionary: String,
    character_frequency: String,
    word_frequency: String,
    irregular_phonetics: Option<String>,
    index_corpus: Option<String>,
}

impl DataFiles {
    fn read(dir: &Path) -> Result<Self, HanziError> {
        Ok(Self {
            decomposition: read_required(dir, DECOMPOSITION_FILE)?,
            radicals: read_required(dir, RADICALS_FILE)?,
            dictionary: read_required(dir, DICTIONARY_FILE)?,
            character_frequency: read_required(dir, CHARACTER_FREQUENCY_FILE)?,
            word_frequency: read_required(dir, WORD_FREQUENCY_FILE)?,
            irregular_phonetics: read_optional(dir, IRREGULAR_PHONETICS_FILE)?,
            index_corpus: read_optional(dir, INDEX_CORPUS_FILE)?,
        })
    }

    fn sources(&self) -> DataSources<'_> {
        DataSources {
            decomposition: &self.decomposition,
            radicals: &self.radicals,
            dictionary: &self.dictionary,
            character_frequency: &self.character_frequency,
            word_frequency: &self.word_frequency,
            irregular_phonetics: self.irregular_phonetics.as_deref(),
            index_corpus: self.index_corpus.as_deref(),
        }
    }
}

fn read_required(dir: &Path, name: &str) -> Result<String, HanziError> {
    let path = dir.join(name);
    std::fs::read_to_string(&path).map_err(|source| HanziError::Io { path, source })
}

fn read_optional(dir: &Path, name: &str) -> Result<Option<String>, HanziError> {
    let path = dir.join(name);
    if !path.is_file() {
        debug!("{} not present", path.display());
        return Ok(None);
    }
    std::fs::read_to_string(&path)
        .map(Some)
        .map_err(|source| HanziError::Io { path, source })
}

/// Search for the data directory and load a HanziHandle.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `HANZI_DATA_PATH` environment variable
/// 3. `~/.hanzi/data`
/// 4. `/usr/share/hanzi`
/// 5. `./data`, then the current directory
pub fn load_handle(data_path: Option<&str>, options: HanziOptions) -> Result<HanziHandle, String> {
    let search_paths = build_search_paths(data_path);

    for dir in &search_paths {
        if !dir.join(DECOMPOSITION_FILE).is_file() {
            continue;
        }
        debug!("loading data from {}", dir.display());
        let files = DataFiles::read(dir).map_err(|e| e.to_string())?;
        return HanziHandle::with_options(&files.sources(), options)
            .map_err(|e| format!("failed to load data from {}: {e}", dir.display()));
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DECOMPOSITION_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for data files.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".hanzi").join("data"));
    }

    paths.push(PathBuf::from("/usr/share/hanzi"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("data"));
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--data-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_value(args, "-d", "--data-path")
}

/// Remove an option that takes a value (`-x VALUE`, `--long VALUE` or
/// `--long=VALUE`) from `args`. The last occurrence wins.
pub fn take_value(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let inline = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&inline) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Check if a plain flag is in the args.
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Install the stderr logger and strip the verbosity flags from `args`.
///
/// `-q` logs errors only, the default is warnings, `-v` adds info and `-vv`
/// (or `-v -v`) adds debug output.
pub fn init_logging(args: &[String]) -> Vec<String> {
    let mut verbosity: i32 = 1;
    let mut remaining = Vec::new();
    for arg in args {
        match arg.as_str() {
            "-q" | "--quiet" => verbosity = 0,
            "-v" | "--verbose" => verbosity += 1,
            "-vv" => verbosity += 2,
            _ => remaining.push(arg.clone()),
        }
    }

    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    remaining
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if `--json` is in the args.
pub fn wants_json(args: &[String]) -> bool {
    has_flag(args, "--json")
}

/// Positional (non-flag) arguments, or the non-empty lines of stdin when
/// there are none.
pub fn inputs(args: &[String]) -> Vec<String> {
    let positional: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();
    if !positional.is_empty() {
        return positional;
    }

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        match line {
            Ok(l) => {
                let l = l.trim();
                if !l.is_empty() {
                    lines.push(l.to_string());
                }
            }
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
    }
    lines
}

/// Write `value` as one line of JSON.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value).map_err(io::Error::other)?;
    writeln!(out)
}

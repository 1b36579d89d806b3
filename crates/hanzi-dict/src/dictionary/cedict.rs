// CC-CEDICT line parser
//
//   國 国 [guo2] /country/nation/state/
//
// Comment lines start with '#'.

use hanzi_core::entry::DictionaryEntry;
use hanzi_core::{HanziError, Result};

const ORIGIN: &str = "dictionary";

/// Parse every entry of a CC-CEDICT source, in file order.
pub fn parse(source: &str) -> Result<Vec<DictionaryEntry>> {
    let mut entries = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        entries.push(parse_line(line, idx + 1)?);
    }
    Ok(entries)
}

/// Split one `TRAD SIMP [PINYIN] /SENSE/SENSE/` line.
pub fn parse_line(line: &str, line_no: usize) -> Result<DictionaryEntry> {
    let malformed = |reason: &str| HanziError::malformed(ORIGIN, line_no, reason);

    let (traditional, rest) = line
        .split_once(' ')
        .ok_or_else(|| malformed("missing simplified headword"))?;
    let (simplified, rest) = rest
        .trim_start()
        .split_once(' ')
        .ok_or_else(|| malformed("missing pinyin"))?;

    let open = rest.find('[').ok_or_else(|| malformed("missing '['"))?;
    let close = rest[open..]
        .find(']')
        .map(|i| open + i)
        .ok_or_else(|| malformed("missing ']'"))?;
    let pinyin = rest[open + 1..close].trim();

    let senses = &rest[close + 1..];
    let first = senses.find('/').ok_or_else(|| malformed("missing definition"))?;
    let last = senses.rfind('/').unwrap_or(first);
    if last == first {
        return Err(malformed("unterminated definition"));
    }

    Ok(DictionaryEntry {
        traditional: traditional.to_string(),
        simplified: simplified.to_string(),
        pinyin: pinyin.to_string(),
        definition: senses[first + 1..last].to_string(),
    })
}

// Frequency list readers
//
// Character lists: rank, character, count, percentage, pinyin, meaning,
// tab- or comma-separated. Index corpora: rank, character, anything else
// ignored. Word lists: word,count.
//
// Comma sources follow CSV quoting. Tab sources are read unquoted, since
// meanings in them may hold bare quote characters.

use csv::{ReaderBuilder, StringRecord};

use hanzi_core::entry::FrequencyRecord;
use hanzi_core::{HanziError, Result};

const CHARACTER_ORIGIN: &str = "character frequency";
const CORPUS_ORIGIN: &str = "index corpus";
const WORD_ORIGIN: &str = "word frequency";

/// Build a headerless, flexible reader for `source`. The delimiter is a tab
/// when the first non-blank line holds one, else a comma.
fn reader(source: &str) -> csv::Reader<&[u8]> {
    let tabbed = source
        .lines()
        .find(|l| !l.trim().is_empty())
        .is_some_and(|l| l.contains('\t'));
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    if tabbed {
        builder.delimiter(b'\t').quoting(false);
    }
    builder.from_reader(source.as_bytes())
}

fn line_of(record: &StringRecord) -> usize {
    record.position().map_or(0, |p| p.line() as usize)
}

fn read_error(origin: &'static str, err: csv::Error) -> HanziError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    HanziError::malformed(origin, line, err.to_string())
}

/// Every non-blank record paired with its 1-based line. A first record whose
/// rank field is not a number is a header and is dropped.
fn ranked_rows(source: &str, origin: &'static str) -> Result<Vec<(usize, StringRecord)>> {
    let mut rows = Vec::new();
    let mut first = true;
    for result in reader(source).into_records() {
        let record = result.map_err(|e| read_error(origin, e))?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        if first {
            first = false;
            if record.get(0).unwrap_or("").trim().parse::<u32>().is_err() {
                continue;
            }
        }
        rows.push((line_of(&record), record));
    }
    Ok(rows)
}

/// Rank and character, the two fields every ranked list must carry.
fn rank_and_character<'r>(
    record: &'r StringRecord,
    line_no: usize,
    origin: &'static str,
) -> Result<(u32, &'r str)> {
    let number = record
        .get(0)
        .unwrap_or("")
        .trim()
        .parse::<u32>()
        .map_err(|e| HanziError::malformed(origin, line_no, format!("rank: {e}")))?;
    let character = record.get(1).unwrap_or("").trim();
    if character.is_empty() {
        return Err(HanziError::malformed(origin, line_no, "missing character"));
    }
    Ok((number, character))
}

/// Parse a character frequency source. Records come back in source order.
pub fn parse_characters(source: &str) -> Result<Vec<FrequencyRecord>> {
    ranked_rows(source, CHARACTER_ORIGIN)?
        .iter()
        .map(|(line_no, record)| character_record(record, *line_no))
        .collect()
}

fn character_record(record: &StringRecord, line_no: usize) -> Result<FrequencyRecord> {
    let field = |i: usize| record.get(i).map(str::trim).unwrap_or("");
    let (number, character) = rank_and_character(record, line_no, CHARACTER_ORIGIN)?;

    // Counts may carry thousands separators inside a quoted field.
    let count = match field(2).replace(',', "").as_str() {
        "" => 0,
        s => s.parse::<u64>().map_err(|e| {
            HanziError::malformed(CHARACTER_ORIGIN, line_no, format!("count: {e}"))
        })?,
    };
    let percentage = match field(3) {
        "" => 0.0,
        s => s.parse::<f64>().map_err(|e| {
            HanziError::malformed(CHARACTER_ORIGIN, line_no, format!("percentage: {e}"))
        })?,
    };

    // An unquoted meaning may itself contain commas.
    let meaning = record.iter().skip(5).collect::<Vec<_>>().join(",");

    Ok(FrequencyRecord {
        number,
        character: character.to_string(),
        count,
        percentage,
        pinyin: field(4).to_string(),
        meaning: meaning.trim().to_string(),
    })
}

/// Parse a ranked corpus for the component index: `(rank, character)` pairs
/// in source order. Columns after the character are not read.
pub fn parse_corpus(source: &str) -> Result<Vec<(u32, String)>> {
    ranked_rows(source, CORPUS_ORIGIN)?
        .iter()
        .map(|(line_no, record)| {
            rank_and_character(record, *line_no, CORPUS_ORIGIN)
                .map(|(rank, character)| (rank, character.to_string()))
        })
        .collect()
}

/// Parse a `word,count` source into pairs, in source order.
pub fn parse_words(source: &str) -> Result<Vec<(String, u64)>> {
    let mut words = Vec::new();
    for result in reader(source).into_records() {
        let record = result.map_err(|e| read_error(WORD_ORIGIN, e))?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let line_no = line_of(&record);
        let (Some(word), Some(count)) = (record.get(0), record.get(1)) else {
            return Err(HanziError::malformed(WORD_ORIGIN, line_no, "expected word,count"));
        };
        let count = count.trim().replace(',', "").parse::<u64>().map_err(|e| {
            HanziError::malformed(WORD_ORIGIN, line_no, format!("count: {e}"))
        })?;
        words.push((word.trim().to_string(), count));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_separated_record() {
        let records = parse_characters("2\t是\t3114767\t1.609666067649\tshi4\tis, are, am\n").unwrap();
        let r = &records[0];
        assert_eq!(r.number, 2);
        assert_eq!(r.character, "是");
        assert_eq!(r.count, 3114767);
        assert!((r.percentage - 1.609666067649).abs() < 1e-12);
        assert_eq!(r.pinyin, "shi4");
        assert_eq!(r.meaning, "is, are, am");
    }

    #[test]
    fn tab_meanings_keep_bare_quotes() {
        let records = parse_characters("1\t的\t10\t1.0\tde5\t\"of\" (possessive)\n").unwrap();
        assert_eq!(records[0].meaning, "\"of\" (possessive)");
    }

    #[test]
    fn parses_comma_separated_with_header() {
        let src = "Num,Char,Count,Pct,Pinyin,Meaning\n1,的,7922684,4.09,de/di2,of, really\n2,是\n";
        let records = parse_characters(src).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].meaning, "of, really");
        assert_eq!(records[1].character, "是");
        assert_eq!(records[1].count, 0);
        assert_eq!(records[1].pinyin, "");
    }

    #[test]
    fn quoted_meaning_loses_its_quotes() {
        let src = "Num,Char,Count,Pct,Pinyin,Meaning\n1,的,100,1.0,de5,\"of, really\"\n";
        let records = parse_characters(src).unwrap();
        assert_eq!(records[0].meaning, "of, really");
        assert_eq!(records[0].pinyin, "de5");
    }

    #[test]
    fn quoted_count_with_separator() {
        let records = parse_characters("Num,Char,Count\n1,的,\"1,234\"\n").unwrap();
        assert_eq!(records[0].count, 1234);
        assert_eq!(records[0].character, "的");
    }

    #[test]
    fn only_first_line_may_be_a_header() {
        let err = parse_characters("1\t的\nrank\tchar\n").unwrap_err();
        assert!(matches!(err, HanziError::MalformedData { line: 2, .. }));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(parse_characters("1\t的\tmany\n").is_err());
        assert!(parse_characters("1\t的\t5\tpct\n").is_err());
        assert!(parse_characters("1\t\t5\n").is_err());
    }

    #[test]
    fn corpus_reads_rank_and_character_only() {
        let src = "Num,Char,Freq,Note\n1,的,lots,\"any, text\"\n2,是,n/a\n";
        let rows = parse_corpus(src).unwrap();
        assert_eq!(rows, [(1, "的".to_string()), (2, "是".to_string())]);

        let err = parse_corpus("Num,Char\n1,的\nx,是\n").unwrap_err();
        assert!(matches!(err, HanziError::MalformedData { line: 3, .. }));
    }

    #[test]
    fn parses_word_counts() {
        let words = parse_words("一句,120\r\n\n句子,900\n\"國家\",\"1,200\"\n").unwrap();
        assert_eq!(
            words,
            [
                ("一句".to_string(), 120),
                ("句子".to_string(), 900),
                ("國家".to_string(), 1200)
            ]
        );
    }

    #[test]
    fn rejects_bad_word_lines() {
        let err = parse_words("一句,120\n句子").unwrap_err();
        assert!(matches!(err, HanziError::MalformedData { line: 2, .. }));
        assert!(parse_words("一句,lots").is_err());
    }
}

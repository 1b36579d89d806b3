// Character and word frequency tables

pub mod parser;

use hashbrown::{HashMap, HashSet};
use log::{info, warn};

use hanzi_core::entry::FrequencyRecord;
use hanzi_core::enums::LookupSource;
use hanzi_core::{HanziError, Result};

/// Rank-ordered character frequency records.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    records: Vec<FrequencyRecord>,
    by_character: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn parse(source: &str) -> Result<Self> {
        let table = Self::from_records(parser::parse_characters(source)?);
        info!("character frequency list loaded: {} records", table.len());
        Ok(table)
    }

    /// Order records by rank (stable for equal ranks) and index them. A
    /// character listed twice keeps only its better-ranked record, so
    /// positions count distinct characters.
    pub fn from_records(mut records: Vec<FrequencyRecord>) -> Self {
        records.sort_by_key(|r| r.number);
        let mut by_character = HashMap::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if by_character.contains_key(record.character.as_str()) {
                warn!(
                    "{} listed again at rank {}, keeping the first record",
                    record.character, record.number
                );
                continue;
            }
            by_character.insert(record.character.clone(), kept.len());
            kept.push(record);
        }
        Self {
            records: kept,
            by_character,
        }
    }

    pub fn get(&self, character: &str) -> Option<&FrequencyRecord> {
        self.by_character
            .get(character)
            .map(|&idx| &self.records[idx])
    }

    /// The record at 1-based `position` in rank order.
    pub fn by_position(&self, position: usize) -> Result<&FrequencyRecord> {
        if position == 0 {
            return Err(HanziError::InvalidInput(
                "frequency positions start at 1".to_string(),
            ));
        }
        self.records
            .get(position - 1)
            .ok_or_else(|| HanziError::unknown(position.to_string(), LookupSource::FrequencyRank))
    }

    /// Characters in rank order.
    pub fn characters(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.character.as_str())
    }

    pub fn records(&self) -> &[FrequencyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Characters of a ranked index corpus, in rank order, each listed once.
pub fn ranked_characters(source: &str) -> Result<Vec<String>> {
    let mut rows = parser::parse_corpus(source)?;
    rows.sort_by_key(|(rank, _)| *rank);
    let mut seen = HashSet::with_capacity(rows.len());
    let characters: Vec<String> = rows
        .into_iter()
        .filter_map(|(_, character)| seen.insert(character.clone()).then_some(character))
        .collect();
    info!("index corpus loaded: {} characters", characters.len());
    Ok(characters)
}

/// Corpus counts of whole words.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    counts: HashMap<String, u64>,
}

impl WordFrequency {
    /// Parse a `word,count` source. A later line for the same word wins.
    pub fn parse(source: &str) -> Result<Self> {
        let counts: HashMap<String, u64> = parser::parse_words(source)?.into_iter().collect();
        info!("word frequency list loaded: {} words", counts.len());
        Ok(Self { counts })
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

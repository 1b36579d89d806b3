// Dictionary and frequency records

use serde::Serialize;

/// One CC-CEDICT sense group: a headword pair with its reading and senses.
///
/// `definition` keeps every `/`-separated sense joined by `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    pub definition: String,
}

impl DictionaryEntry {
    /// Iterate the individual senses of the definition.
    pub fn senses(&self) -> impl Iterator<Item = &str> {
        self.definition.split('/').filter(|s| !s.is_empty())
    }

    /// Iterate the space-separated pinyin syllables.
    pub fn syllables(&self) -> impl Iterator<Item = &str> {
        self.pinyin.split_whitespace()
    }
}

/// Character frequency statistics from a ranked corpus list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRecord {
    /// 1-based rank; lower is more frequent.
    pub number: u32,
    pub character: String,
    pub count: u64,
    pub percentage: f64,
    pub pinyin: String,
    pub meaning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senses_split_on_slash() {
        let e = DictionaryEntry {
            traditional: "句".to_string(),
            simplified: "句".to_string(),
            pinyin: "ju4".to_string(),
            definition: "sentence/clause/phrase".to_string(),
        };
        assert_eq!(e.senses().collect::<Vec<_>>(), ["sentence", "clause", "phrase"]);
        assert_eq!(e.syllables().collect::<Vec<_>>(), ["ju4"]);
    }
}

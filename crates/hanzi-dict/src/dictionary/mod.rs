// DictionaryStore: simplified and traditional indexes over CC-CEDICT entries
//
// Entries are stored once, in file order. Both indexes map a headword to the
// positions of its entries, so homographs keep their source order. Headword
// order (first appearance) is kept separately for deterministic search.

pub mod cedict;

use hashbrown::{HashMap, HashSet};
use log::{debug, info, warn};

use hanzi_core::character::{contains_hanzi, strip_whitespace};
use hanzi_core::entry::DictionaryEntry;
use hanzi_core::enums::{LookupSource, Script, SearchMode};
use hanzi_core::{HanziError, Result};

use crate::phonetics::PinyinSource;

const IRREGULAR_ORIGIN: &str = "irregular phonetics";

/// One script's headword index.
#[derive(Debug, Clone, Default)]
struct HeadwordIndex {
    positions: HashMap<String, Vec<usize>>,
    order: Vec<String>,
}

impl HeadwordIndex {
    fn insert(&mut self, headword: &str, position: usize) {
        match self.positions.get_mut(headword) {
            Some(list) => list.push(position),
            None => {
                self.positions.insert(headword.to_string(), vec![position]);
                self.order.push(headword.to_string());
            }
        }
    }

    fn get(&self, headword: &str) -> Option<&[usize]> {
        self.positions.get(headword).map(Vec::as_slice)
    }

    fn contains(&self, headword: &str) -> bool {
        self.positions.contains_key(headword)
    }
}

/// Read-only bilingual dictionary with an optional irregular-reading table.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    entries: Vec<DictionaryEntry>,
    simplified: HeadwordIndex,
    traditional: HeadwordIndex,
    irregular: HashMap<String, String>,
}

impl DictionaryStore {
    /// Parse a CC-CEDICT source.
    pub fn parse(source: &str) -> Result<Self> {
        let store = Self::from_entries(cedict::parse(source)?);
        info!(
            "dictionary loaded: {} entries, {} simplified headwords, {} traditional headwords",
            store.entries.len(),
            store.simplified.order.len(),
            store.traditional.order.len()
        );
        Ok(store)
    }

    /// Index already-parsed entries, keeping their order.
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        let mut simplified = HeadwordIndex::default();
        let mut traditional = HeadwordIndex::default();
        for (position, entry) in entries.iter().enumerate() {
            simplified.insert(&entry.simplified, position);
            traditional.insert(&entry.traditional, position);
        }
        Self {
            entries,
            simplified,
            traditional,
            irregular: HashMap::new(),
        }
    }

    /// Attach the `glyph:pinyin` table of readings for components that have
    /// no dictionary entry. A later line for the same glyph wins.
    pub fn with_irregular_phonetics(mut self, source: &str) -> Result<Self> {
        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let (glyph, pinyin) = line
                .split_once(':')
                .map(|(g, p)| (g.trim(), p.trim()))
                .filter(|(g, p)| !g.is_empty() && !p.is_empty())
                .ok_or_else(|| {
                    HanziError::malformed(IRREGULAR_ORIGIN, idx + 1, "expected glyph:pinyin")
                })?;
            if self
                .irregular
                .insert(glyph.to_string(), pinyin.to_string())
                .is_some()
            {
                warn!("irregular reading for {glyph} redefined at line {}", idx + 1);
            }
        }
        debug!("{} irregular readings loaded", self.irregular.len());
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry in file order.
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Entries under one script's headword, in file order.
    pub fn entries_for(&self, word: &str, script: Script) -> Option<Vec<&DictionaryEntry>> {
        let index = match script {
            Script::Simplified => &self.simplified,
            Script::Traditional => &self.traditional,
        };
        index.get(word).map(|positions| self.resolve(positions))
    }

    /// Entries for `word` as a simplified headword, else as a traditional
    /// one. Empty when the word is in neither index.
    pub fn lookup(&self, word: &str) -> Vec<&DictionaryEntry> {
        self.entries_for(word, Script::Simplified)
            .or_else(|| self.entries_for(word, Script::Traditional))
            .unwrap_or_default()
    }

    /// Look up the definitions of `word`.
    ///
    /// Without a script, a simplified headword is preferred and any other
    /// word is looked up as traditional. A miss names the index searched.
    pub fn definition_lookup(
        &self,
        word: &str,
        script: Option<Script>,
    ) -> Result<Vec<&DictionaryEntry>> {
        if !contains_hanzi(word) {
            return Err(HanziError::NotHanziCharacter(word.to_string()));
        }
        let word = word.trim();
        let script = script.unwrap_or(match self.determine_if_simplified(word) {
            Some(true) => Script::Simplified,
            _ => Script::Traditional,
        });
        self.entries_for(word, script)
            .ok_or_else(|| HanziError::unknown(word, LookupSource::from(script)))
    }

    /// `Some(true)` for a simplified headword, `Some(false)` for a word that
    /// is only a traditional headword, `None` when unknown.
    pub fn determine_if_simplified(&self, word: &str) -> Option<bool> {
        if self.simplified.contains(word) {
            Some(true)
        } else if self.traditional.contains(word) {
            Some(false)
        } else {
            None
        }
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Find every entry whose headword matches `characters`.
    ///
    /// `SearchMode::Any` matches headwords containing at least one of the
    /// characters; `SearchMode::Only` matches headwords made up entirely of
    /// them. Simplified headwords are searched first, in first-appearance
    /// order. Traditional headwords are searched only when that finds nothing.
    pub fn dictionary_search(&self, characters: &str, mode: SearchMode) -> Vec<&DictionaryEntry> {
        let wanted: HashSet<char> = strip_whitespace(characters).chars().collect();
        if wanted.is_empty() {
            return Vec::new();
        }
        let matches = |word: &str| match mode {
            SearchMode::Any => word.chars().any(|c| wanted.contains(&c)),
            SearchMode::Only => word.chars().all(|c| wanted.contains(&c)),
        };

        let result = self.search_index(&self.simplified, &matches);
        if !result.is_empty() {
            return result;
        }
        debug!("no simplified headword matches {characters}, trying traditional");
        self.search_index(&self.traditional, &matches)
    }

    fn search_index<F>(&self, index: &HeadwordIndex, matches: &F) -> Vec<&DictionaryEntry>
    where
        F: Fn(&str) -> bool,
    {
        index
            .order
            .iter()
            .filter(|word| matches(word.as_str()))
            .filter_map(|word| index.get(word))
            .flat_map(|positions| self.resolve(positions))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Readings
    // -----------------------------------------------------------------------

    /// Distinct readings of `character`, from the simplified index, then the
    /// traditional index, then the irregular table.
    pub fn get_pinyin(&self, character: &str) -> Option<Vec<&str>> {
        let character = character.trim();
        let entries = self
            .entries_for(character, Script::Simplified)
            .or_else(|| self.entries_for(character, Script::Traditional));
        if let Some(entries) = entries {
            let mut readings: Vec<&str> = Vec::with_capacity(entries.len());
            for entry in entries {
                if !readings.contains(&entry.pinyin.as_str()) {
                    readings.push(&entry.pinyin);
                }
            }
            return Some(readings);
        }
        self.irregular.get(character).map(|p| vec![p.as_str()])
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&DictionaryEntry> {
        positions.iter().filter_map(|&p| self.entries.get(p)).collect()
    }
}

impl PinyinSource for DictionaryStore {
    fn readings(&self, glyph: &str) -> Option<Vec<&str>> {
        self.get_pinyin(glyph)
    }
}

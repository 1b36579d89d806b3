// HanziHandle: the immutable context owning every table
//
// Built once from the textual data sources. Loading parses the decomposition
// and radical tables, the dictionary and both frequency lists, then builds the
// component index over the frequency-ranked corpus. Every query afterwards is
// a read through `&self`, so one handle can be shared across threads.

use log::{debug, info};

use hanzi_core::character::contains_hanzi;
use hanzi_core::decomposition::{DecompositionMap, DecompositionResult};
use hanzi_core::entry::{DictionaryEntry, FrequencyRecord};
use hanzi_core::enums::{DecompositionMode, LookupSource, Script, SearchMode};
use hanzi_core::{HanziError, Result};
use hanzi_decomp::{ComponentIndex, DecompositionEngine};

use crate::dictionary::DictionaryStore;
use crate::example_words::{self, FrequencyCategories};
use crate::frequency::{self, FrequencyTable, WordFrequency};
use crate::phonetics::{self, PhoneticRegularity};

/// Construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanziOptions {
    /// Build the component index at load time. When off, component queries
    /// find nothing.
    pub index_components: bool,
    /// Cap on the length of each example-word category.
    pub example_limit: Option<usize>,
}

impl Default for HanziOptions {
    fn default() -> Self {
        Self {
            index_components: true,
            example_limit: None,
        }
    }
}

/// Contents of every data source.
#[derive(Debug, Clone, Copy)]
pub struct DataSources<'a> {
    /// `cjk_decomp.txt`
    pub decomposition: &'a str,
    /// `radical_with_meanings.json`
    pub radicals: &'a str,
    /// `cedict_ts.u8`
    pub dictionary: &'a str,
    /// `leiden_freq_variants_removed.txt`
    pub character_frequency: &'a str,
    /// `leiden_freq_data.txt`
    pub word_frequency: &'a str,
    /// `irregular_phonetics.txt`
    pub irregular_phonetics: Option<&'a str>,
    /// Ranked corpus for the component index (`chinese_charfreq_simpl_trad.csv`).
    /// The character frequency list is used when absent.
    pub index_corpus: Option<&'a str>,
}

/// Decomposition, dictionary, frequency and phonetic queries over one set of
/// loaded tables.
#[derive(Debug, Clone)]
pub struct HanziHandle {
    engine: DecompositionEngine,
    index: ComponentIndex,
    dictionary: DictionaryStore,
    characters: FrequencyTable,
    words: WordFrequency,
    options: HanziOptions,
}

impl HanziHandle {
    /// Load every table with default options.
    pub fn from_sources(sources: &DataSources<'_>) -> Result<Self> {
        Self::with_options(sources, HanziOptions::default())
    }

    /// Load every table. Any malformed source fails the whole load.
    pub fn with_options(sources: &DataSources<'_>, options: HanziOptions) -> Result<Self> {
        debug!("loading decomposition data");
        let engine = DecompositionEngine::from_sources(sources.decomposition, sources.radicals)?;

        debug!("loading dictionary data");
        let mut dictionary = DictionaryStore::parse(sources.dictionary)?;
        if let Some(irregular) = sources.irregular_phonetics {
            dictionary = dictionary.with_irregular_phonetics(irregular)?;
        }

        debug!("loading frequency data");
        let characters = FrequencyTable::parse(sources.character_frequency)?;
        let words = WordFrequency::parse(sources.word_frequency)?;

        let index = if !options.index_components {
            debug!("component index disabled");
            ComponentIndex::empty()
        } else if let Some(corpus) = sources.index_corpus {
            ComponentIndex::build(frequency::ranked_characters(corpus)?, &engine)?
        } else {
            ComponentIndex::build(characters.characters(), &engine)?
        };

        info!("hanzi data ready");
        Ok(Self {
            engine,
            index,
            dictionary,
            characters,
            words,
            options,
        })
    }

    pub fn options(&self) -> &HanziOptions {
        &self.options
    }

    pub fn engine(&self) -> &DecompositionEngine {
        &self.engine
    }

    pub fn component_index(&self) -> &ComponentIndex {
        &self.index
    }

    pub fn dictionary(&self) -> &DictionaryStore {
        &self.dictionary
    }

    pub fn frequency_table(&self) -> &FrequencyTable {
        &self.characters
    }

    // =======================================================================
    // Decomposition
    // =======================================================================

    pub fn decompose(
        &self,
        character: &str,
        mode: Option<DecompositionMode>,
    ) -> Result<DecompositionResult> {
        self.engine.decompose(character, mode)
    }

    pub fn decompose_many(
        &self,
        text: &str,
        mode: Option<DecompositionMode>,
    ) -> Result<DecompositionMap> {
        self.engine.decompose_many(text, mode)
    }

    pub fn is_radical(&self, character: &str) -> bool {
        self.engine.is_radical(character)
    }

    pub fn get_radical_meaning(&self, character: &str) -> Option<&str> {
        self.engine.get_radical_meaning(character)
    }

    pub fn get_components<'a>(&'a self, character: &'a str) -> Vec<&'a str> {
        self.engine.get_components(character)
    }

    /// Characters containing `component`; see
    /// [`ComponentIndex::get_characters_with_component`].
    pub fn get_characters_with_component(&self, component: &str) -> Option<Vec<&str>> {
        self.index
            .get_characters_with_component(component.trim(), self.engine.radicals())
    }

    // =======================================================================
    // Dictionary
    // =======================================================================

    pub fn definition_lookup(
        &self,
        word: &str,
        script: Option<Script>,
    ) -> Result<Vec<&DictionaryEntry>> {
        self.dictionary.definition_lookup(word, script)
    }

    pub fn dictionary_search(&self, characters: &str, mode: SearchMode) -> Vec<&DictionaryEntry> {
        self.dictionary.dictionary_search(characters, mode)
    }

    pub fn determine_if_simplified(&self, character: &str) -> Option<bool> {
        self.dictionary.determine_if_simplified(character.trim())
    }

    /// Dictionary words containing `character`, split into frequency
    /// categories.
    pub fn get_examples(&self, character: &str) -> FrequencyCategories<'_> {
        let candidates = self.dictionary.dictionary_search(character, SearchMode::Any);
        example_words::categorize(&candidates, &self.words, self.options.example_limit)
    }

    pub fn get_pinyin(&self, character: &str) -> Option<Vec<&str>> {
        self.dictionary.get_pinyin(character)
    }

    // =======================================================================
    // Phonetics
    // =======================================================================

    /// Score the components of `character` against each of its readings.
    ///
    /// `Ok(None)` when the character has no known reading.
    pub fn determine_phonetic_regularity(
        &self,
        character: &str,
    ) -> Result<Option<Vec<PhoneticRegularity>>> {
        let decomposition = match self.engine.decompose(character, None)? {
            DecompositionResult::Full(d) => d,
            DecompositionResult::Single(list) => {
                return Err(HanziError::InvalidInput(format!(
                    "expected a full decomposition of {}",
                    list.character
                )));
            }
        };
        Ok(phonetics::determine_phonetic_regularity(
            &decomposition,
            &self.dictionary,
        ))
    }

    // =======================================================================
    // Frequency
    // =======================================================================

    /// Frequency statistics for `character`.
    ///
    /// A dictionary entry's simplified form is preferred, so a traditional
    /// character reports the record of its simplified counterpart.
    pub fn get_character_frequency(&self, character: &str) -> Result<&FrequencyRecord> {
        if !contains_hanzi(character) {
            return Err(HanziError::NotHanziCharacter(character.to_string()));
        }
        let character = character.trim();
        let simplified = self
            .dictionary
            .lookup(character)
            .first()
            .and_then(|entry| self.characters.get(&entry.simplified));
        simplified
            .or_else(|| self.characters.get(character))
            .ok_or_else(|| HanziError::unknown(character, LookupSource::Frequency))
    }

    /// Frequency statistics of the character at 1-based rank `position`.
    pub fn get_character_in_frequency_list_by_position(
        &self,
        position: usize,
    ) -> Result<&FrequencyRecord> {
        let record = self.characters.by_position(position)?;
        self.get_character_frequency(&record.character)
    }

    pub fn word_frequency(&self, word: &str) -> Option<u64> {
        self.words.get(word.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECOMP: &str = include_str!("../../../test-data/cjk_decomp.txt");
    const RADICALS: &str = include_str!("../../../test-data/radical_with_meanings.json");
    const CEDICT: &str = include_str!("../../../test-data/cedict_ts.u8");
    const CHARACTERS: &str = include_str!("../../../test-data/leiden_freq_variants_removed.txt");
    const WORDS: &str = include_str!("../../../test-data/leiden_freq_data.txt");
    const IRREGULAR: &str = include_str!("../../../test-data/irregular_phonetics.txt");

    fn sources() -> DataSources<'static> {
        DataSources {
            decomposition: DECOMP,
            radicals: RADICALS,
            dictionary: CEDICT,
            character_frequency: CHARACTERS,
            word_frequency: WORDS,
            irregular_phonetics: Some(IRREGULAR),
            index_corpus: None,
        }
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HanziHandle>();
    }

    #[test]
    fn index_can_be_disabled() {
        let options = HanziOptions {
            index_components: false,
            ..HanziOptions::default()
        };
        let handle = HanziHandle::with_options(&sources(), options).unwrap();
        assert!(handle.component_index().is_empty());
        assert!(handle.get_characters_with_component("𤴓").is_none());
        assert_eq!(handle.decompose("是", None).unwrap().character(), "是");
    }

    #[test]
    fn separate_index_corpus() {
        let sources = DataSources {
            index_corpus: Some("Num,Char,Simplified,Note\n1,回,yes,\"loop, return\"\n2,四,n/a,\n"),
            ..sources()
        };
        let handle = HanziHandle::from_sources(&sources).unwrap();
        assert_eq!(handle.get_characters_with_component("囗").unwrap(), ["回", "四"]);
    }

    #[test]
    fn traditional_character_reports_simplified_record() {
        let handle = HanziHandle::from_sources(&sources()).unwrap();
        assert_eq!(handle.get_character_frequency("國").unwrap().character, "国");
        assert_eq!(handle.get_character_frequency("的").unwrap().number, 1);
    }

    #[test]
    fn frequency_errors() {
        let handle = HanziHandle::from_sources(&sources()).unwrap();
        assert!(matches!(
            handle.get_character_frequency("abc"),
            Err(HanziError::NotHanziCharacter(_))
        ));
        assert!(matches!(
            handle.get_character_frequency("龘"),
            Err(HanziError::UnknownEntry { index: LookupSource::Frequency, .. })
        ));
        assert!(matches!(
            handle.get_character_in_frequency_list_by_position(0),
            Err(HanziError::InvalidInput(_))
        ));
    }

    #[test]
    fn by_position_goes_through_character_lookup() {
        let handle = HanziHandle::from_sources(&sources()).unwrap();
        let record = handle.get_character_in_frequency_list_by_position(2).unwrap();
        assert_eq!(record.character, "是");
    }

    #[test]
    fn malformed_source_fails_load() {
        let sources = DataSources {
            decomposition: "是d(日,𤴓)",
            ..sources()
        };
        assert!(matches!(
            HanziHandle::from_sources(&sources),
            Err(HanziError::MalformedData { origin: "decomposition", .. })
        ));
    }

    #[test]
    fn example_limit_applies() {
        let options = HanziOptions {
            example_limit: Some(1),
            ..HanziOptions::default()
        };
        let handle = HanziHandle::with_options(&sources(), options).unwrap();
        let examples = handle.get_examples("句");
        assert_eq!(examples.mid_frequency.len(), 1);
        assert_eq!(examples.mid_frequency[0].simplified, "一句");
    }
}

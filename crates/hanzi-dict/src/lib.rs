//! Hanzi dictionary, frequency statistics and phonetic regularity.
//!
//! [`HanziHandle`] is the single entry point: it owns the decomposition
//! engine and component index from `hanzi-decomp` together with the tables
//! defined here, and answers every query through `&self`.
//!
//! # Architecture
//!
//! - [`dictionary`] -- CC-CEDICT parsing, simplified/traditional lookup and search
//! - [`frequency`] -- Character and word frequency lists
//! - [`phonetics`] -- Pinyin syllables and phonetic regularity scoring
//! - [`example_words`] -- High / mid / low frequency example words
//! - [`handle`] -- The top-level handle and its options

pub mod dictionary;
pub mod example_words;
pub mod frequency;
pub mod handle;
pub mod phonetics;

pub use dictionary::DictionaryStore;
pub use example_words::FrequencyCategories;
pub use frequency::{FrequencyTable, WordFrequency};
pub use handle::{DataSources, HanziHandle, HanziOptions};
pub use phonetics::{ComponentReading, PhoneticRegularity, PinyinSource, PinyinSyllable, Regularity};

// Re-exported so callers need only this crate.
pub use hanzi_core::{HanziError, Result};
pub use hanzi_core::decomposition::{Decomposition, DecompositionMap, DecompositionResult, NO_GLYPH};
pub use hanzi_core::entry::{DictionaryEntry, FrequencyRecord};
pub use hanzi_core::enums::{DecompositionMode, LookupSource, Script, SearchMode};

//! Structural decomposition of Chinese characters.
//!
//! The decomposition table maps each character to a structure code and up to
//! two component tokens. Tokens are glyphs or decimal back-references to other
//! table entries that have no glyph of their own. The engine walks this table
//! to produce four views of a character, and the component index inverts those
//! views across a frequency-ranked corpus.
//!
//! # Architecture
//!
//! - [`table`] -- Decomposition table parsing and cycle validation
//! - [`radicals`] -- Radical glyph to meaning table
//! - [`engine`] -- The once / radical / graphical / radical-up walks
//! - [`index`] -- Component to containing-characters index

pub mod engine;
pub mod index;
pub mod radicals;
pub mod table;

pub use engine::DecompositionEngine;
pub use index::ComponentIndex;
pub use radicals::RadicalTable;
pub use table::{DecompositionEntry, DecompositionKind, DecompositionTable};

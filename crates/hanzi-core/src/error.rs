// Error type shared by every Hanzi crate.

use std::path::PathBuf;

use crate::enums::LookupSource;

/// The error type for decomposition, dictionary and frequency operations.
#[derive(Debug, thiserror::Error)]
pub enum HanziError {
    /// The input contains no character in the CJK Unified Ideographs block.
    #[error("{0} is not a Hanzi character")]
    NotHanziCharacter(String),

    /// The input is empty after whitespace removal, or otherwise unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A lookup missed the named index.
    #[error("{entry} not available in {index}")]
    UnknownEntry { entry: String, index: LookupSource },

    /// A component reference chain leads back to a token being expanded.
    #[error("cyclic decomposition through {0}")]
    CyclicDecomposition(String),

    /// A data source line could not be parsed.
    #[error("malformed {origin} data at line {line}: {reason}")]
    MalformedData {
        origin: &'static str,
        line: usize,
        reason: String,
    },

    /// A data file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HanziError {
    /// Build a [`HanziError::MalformedData`] for a 1-based source line.
    pub fn malformed(origin: &'static str, line: usize, reason: impl Into<String>) -> Self {
        HanziError::MalformedData {
            origin,
            line,
            reason: reason.into(),
        }
    }

    /// Build a [`HanziError::UnknownEntry`].
    pub fn unknown(entry: impl Into<String>, index: LookupSource) -> Self {
        HanziError::UnknownEntry {
            entry: entry.into(),
            index,
        }
    }
}

/// A convenience `Result` alias using [`HanziError`].
pub type Result<T> = std::result::Result<T, HanziError>;

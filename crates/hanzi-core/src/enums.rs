// Shared enums: DecompositionMode, Script, LookupSource, SearchMode

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::HanziError;

/// The four decomposition views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecompositionMode {
    /// Immediate components only, numeric references masked.
    Once,
    /// Descend until a radical or an atomic component.
    Radical,
    /// Descend to atomic leaves, numeric references resolved.
    Graphical,
    /// Radical descent that also emits every intermediate compound.
    RadicalUp,
}

impl DecompositionMode {
    pub const ALL: [DecompositionMode; 4] = [
        DecompositionMode::Once,
        DecompositionMode::Radical,
        DecompositionMode::Graphical,
        DecompositionMode::RadicalUp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DecompositionMode::Once => "once",
            DecompositionMode::Radical => "radical",
            DecompositionMode::Graphical => "graphical",
            DecompositionMode::RadicalUp => "radical_up",
        }
    }
}

impl fmt::Display for DecompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses mode names, plus the numeric aliases 1-4 used by older callers.
impl FromStr for DecompositionMode {
    type Err = HanziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" | "1" => Ok(DecompositionMode::Once),
            "radical" | "2" => Ok(DecompositionMode::Radical),
            "graphical" | "3" => Ok(DecompositionMode::Graphical),
            "radical_up" | "radical-up" | "4" => Ok(DecompositionMode::RadicalUp),
            other => Err(HanziError::InvalidInput(format!(
                "unknown decomposition mode: {other}"
            ))),
        }
    }
}

/// Chinese script variant used to pick a dictionary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Simplified,
    Traditional,
}

/// The index a lookup was made against. Carried by
/// [`HanziError::UnknownEntry`](crate::error::HanziError::UnknownEntry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupSource {
    Simplified,
    Traditional,
    Frequency,
    FrequencyRank,
}

impl From<Script> for LookupSource {
    fn from(script: Script) -> Self {
        match script {
            Script::Simplified => LookupSource::Simplified,
            Script::Traditional => LookupSource::Traditional,
        }
    }
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LookupSource::Simplified => "simplified dictionary",
            LookupSource::Traditional => "traditional dictionary",
            LookupSource::Frequency => "frequency list",
            LookupSource::FrequencyRank => "frequency ranking",
        })
    }
}

/// Dictionary search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// Headwords containing any of the query characters.
    #[default]
    Any,
    /// Headwords made exclusively of the query characters.
    Only,
}

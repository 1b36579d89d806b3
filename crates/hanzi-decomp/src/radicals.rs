// Radical table: radical glyph -> English meaning
//
// Source is a JSON object such as `{"一": "one", "亻": "man", "人": "man"}`.
// Several glyphs may share a meaning (graphical variants); source order is
// kept because it orders same-meaning expansion.

use std::fmt;

use hashbrown::HashMap;
use log::info;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use hanzi_core::{HanziError, Result};

const ORIGIN: &str = "radical";

/// A radical glyph with its meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radical {
    pub glyph: String,
    pub meaning: String,
}

/// Read-only, source-ordered radical table.
#[derive(Debug, Clone, Default)]
pub struct RadicalTable {
    radicals: Vec<Radical>,
    by_glyph: HashMap<String, usize>,
}

impl RadicalTable {
    /// Parse the JSON object source.
    pub fn from_json(source: &str) -> Result<Self> {
        let RadicalEntries(pairs) = serde_json::from_str(source)
            .map_err(|e| HanziError::malformed(ORIGIN, e.line(), e.to_string()))?;
        let table = Self::from_pairs(pairs);
        info!("radical table loaded: {} radicals", table.len());
        Ok(table)
    }

    /// Build from `(glyph, meaning)` pairs. A repeated glyph keeps its first
    /// position and takes the later meaning.
    pub fn from_pairs<I, G, M>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (G, M)>,
        G: Into<String>,
        M: Into<String>,
    {
        let mut table = Self::default();
        for (glyph, meaning) in pairs {
            let glyph = glyph.into();
            let meaning = meaning.into();
            match table.by_glyph.get(&glyph) {
                Some(&idx) => table.radicals[idx].meaning = meaning,
                None => {
                    table.by_glyph.insert(glyph.clone(), table.radicals.len());
                    table.radicals.push(Radical { glyph, meaning });
                }
            }
        }
        table
    }

    pub fn is_radical(&self, glyph: &str) -> bool {
        self.by_glyph.contains_key(glyph)
    }

    pub fn meaning(&self, glyph: &str) -> Option<&str> {
        self.by_glyph
            .get(glyph)
            .map(|&idx| self.radicals[idx].meaning.as_str())
    }

    /// Every radical sharing the meaning of `glyph`, in source order, the
    /// glyph itself included. Empty when `glyph` is not a radical.
    pub fn same_meaning(&self, glyph: &str) -> Vec<&str> {
        match self.meaning(glyph) {
            Some(meaning) => self.with_meaning(meaning),
            None => Vec::new(),
        }
    }

    /// Every radical whose meaning is exactly `meaning`, in source order.
    pub fn with_meaning(&self, meaning: &str) -> Vec<&str> {
        self.radicals
            .iter()
            .filter(|r| r.meaning == meaning)
            .map(|r| r.glyph.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Radical> {
        self.radicals.iter()
    }

    pub fn len(&self) -> usize {
        self.radicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radicals.is_empty()
    }
}

/// Object entries in document order.
struct RadicalEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for RadicalEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RadicalEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping radical glyphs to meanings")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(RadicalEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

// Decomposition result types

use hashbrown::HashMap;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::enums::DecompositionMode;

/// Sentinel emitted in place of a numeric back-reference that has no glyph.
pub const NO_GLYPH: &str = "No glyph available";

/// All four decomposition views of one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    pub character: String,
    pub once: Vec<String>,
    pub radical: Vec<String>,
    pub graphical: Vec<String>,
    pub radical_up: Vec<String>,
}

impl Decomposition {
    /// Return the components of a single view.
    pub fn view(&self, mode: DecompositionMode) -> &[String] {
        match mode {
            DecompositionMode::Once => &self.once,
            DecompositionMode::Radical => &self.radical,
            DecompositionMode::Graphical => &self.graphical,
            DecompositionMode::RadicalUp => &self.radical_up,
        }
    }
}

/// One decomposition view of one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentList {
    pub character: String,
    pub mode: DecompositionMode,
    pub components: Vec<String>,
}

/// Result of a decomposition query: every view, or only the requested one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DecompositionResult {
    Full(Decomposition),
    Single(ComponentList),
}

impl DecompositionResult {
    pub fn character(&self) -> &str {
        match self {
            DecompositionResult::Full(d) => &d.character,
            DecompositionResult::Single(c) => &c.character,
        }
    }

    /// Components for `mode`, or `None` when this result holds another view.
    pub fn components(&self, mode: DecompositionMode) -> Option<&[String]> {
        match self {
            DecompositionResult::Full(d) => Some(d.view(mode)),
            DecompositionResult::Single(c) if c.mode == mode => Some(&c.components),
            DecompositionResult::Single(_) => None,
        }
    }

    /// The full decomposition, if every view was computed.
    pub fn as_full(&self) -> Option<&Decomposition> {
        match self {
            DecompositionResult::Full(d) => Some(d),
            DecompositionResult::Single(_) => None,
        }
    }
}

/// Insertion-ordered map from character to its decomposition.
///
/// Serializes as a JSON-style object whose keys keep first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecompositionMap {
    entries: Vec<(String, DecompositionResult)>,
    positions: HashMap<String, usize>,
}

impl DecompositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `result` under `key` unless the key is already present.
    /// Returns `true` if the entry was inserted.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, result: DecompositionResult) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, result));
        true
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&DecompositionResult> {
        self.positions.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DecompositionResult)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for DecompositionMap {
    type Item = (String, DecompositionResult);
    type IntoIter = std::vec::IntoIter<(String, DecompositionResult)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for DecompositionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(character: &str, mode: DecompositionMode, components: &[&str]) -> DecompositionResult {
        DecompositionResult::Single(ComponentList {
            character: character.to_string(),
            mode,
            components: components.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn view_selects_field() {
        let d = Decomposition {
            character: "是".to_string(),
            once: vec!["日".into(), "𤴓".into()],
            radical: vec!["日".into(), "一".into(), "龰".into()],
            graphical: vec!["口".into(), "一".into(), "一".into(), "龰".into()],
            radical_up: vec!["日".into(), "𤴓".into(), "一".into(), "龰".into()],
        };
        assert_eq!(d.view(DecompositionMode::Once), ["日", "𤴓"]);
        assert_eq!(d.view(DecompositionMode::Graphical).len(), 4);
    }

    #[test]
    fn single_result_only_answers_its_mode() {
        let r = list("是", DecompositionMode::Once, &["日", "𤴓"]);
        assert_eq!(r.character(), "是");
        assert!(r.components(DecompositionMode::Once).is_some());
        assert!(r.components(DecompositionMode::Radical).is_none());
        assert!(r.as_full().is_none());
    }

    #[test]
    fn map_keeps_first_insertion() {
        let mut map = DecompositionMap::new();
        assert!(map.insert_if_absent("是", list("是", DecompositionMode::Once, &["日"])));
        assert!(map.insert_if_absent("的", list("的", DecompositionMode::Once, &["白"])));
        assert!(!map.insert_if_absent("是", list("是", DecompositionMode::Once, &["X"])));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["是", "的"]);
        assert_eq!(
            map.get("是").and_then(|r| r.components(DecompositionMode::Once)),
            Some(&["日".to_string()][..])
        );
        assert_eq!(
            map.get("的").and_then(|r| r.components(DecompositionMode::Once)),
            Some(&["白".to_string()][..])
        );
        assert!(map.get("国").is_none());
    }

    #[test]
    fn map_lookup_over_many_keys() {
        let mut map = DecompositionMap::new();
        let keys: Vec<String> = ('\u{4E00}'..='\u{4FFF}').map(String::from).collect();
        for key in &keys {
            map.insert_if_absent(key.as_str(), list(key, DecompositionMode::Once, &[key.as_str()]));
        }
        assert_eq!(map.len(), keys.len());
        for key in &keys {
            assert!(map.contains_key(key));
            assert_eq!(map.get(key).map(DecompositionResult::character), Some(key.as_str()));
        }
        assert_eq!(map.keys().next(), Some("\u{4E00}"));
    }
}

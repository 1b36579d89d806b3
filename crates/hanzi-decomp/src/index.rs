// Component index: component -> characters containing it
//
// Built once by running the `once` and `radical` views over a frequency-ranked
// corpus, so each list is ordered by corpus rank. Frozen after build.

use hashbrown::{HashMap, HashSet};
use log::{debug, info};

use hanzi_core::Result;
use hanzi_core::character::is_basic_stroke;
use hanzi_core::decomposition::NO_GLYPH;

use crate::engine::DecompositionEngine;
use crate::radicals::RadicalTable;

/// Inverted index from component token to containing characters.
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    characters: HashMap<String, Vec<String>>,
}

impl ComponentIndex {
    /// An index with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index every character of `corpus`, in iteration order.
    ///
    /// A character is listed under each component of its `once` view and
    /// each component of its `radical` view, at most once per component.
    /// The missing-glyph sentinel is never indexed, and radical components
    /// containing a basic stroke are left out.
    pub fn build<I, S>(corpus: I, engine: &DecompositionEngine) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut characters: HashMap<String, Vec<String>> = HashMap::new();
        let mut seen: HashSet<String> = HashSet::new();

        for item in corpus {
            let character = item.as_ref();
            if !seen.insert(character.to_string()) {
                debug!("skipping repeated corpus character {character}");
                continue;
            }

            let once = engine.once_decomposition(character);
            let radical = engine.radical_decomposition(character)?;

            let mut components: Vec<&str> = Vec::with_capacity(once.len() + radical.len());
            let from_once = once.iter().filter(|c| c.as_str() != NO_GLYPH);
            let from_radical = radical
                .iter()
                .filter(|c| c.as_str() != NO_GLYPH && !c.chars().any(is_basic_stroke));
            for component in from_once.chain(from_radical) {
                if !components.contains(&component.as_str()) {
                    components.push(component);
                }
            }

            for component in components {
                characters
                    .entry(component.to_string())
                    .or_default()
                    .push(character.to_string());
            }
        }

        info!(
            "component index built: {} characters, {} components",
            seen.len(),
            characters.len()
        );
        Ok(Self { characters })
    }

    /// Characters containing `component`.
    ///
    /// A radical expands to every radical with the same meaning, in radical
    /// table order, and their lists are concatenated; radicals that were never
    /// indexed contribute nothing. Any other component is looked up directly.
    /// `None` means the component is neither a radical nor indexed.
    pub fn get_characters_with_component(
        &self,
        component: &str,
        radicals: &RadicalTable,
    ) -> Option<Vec<&str>> {
        if radicals.is_radical(component) {
            let characters = radicals
                .same_meaning(component)
                .into_iter()
                .filter_map(|radical| self.get(radical))
                .flatten()
                .map(String::as_str)
                .collect();
            return Some(characters);
        }
        self.get(component)
            .map(|list| list.iter().map(String::as_str).collect())
    }

    /// The raw list for one component, without radical expansion.
    pub fn get(&self, component: &str) -> Option<&[String]> {
        self.characters.get(component).map(Vec::as_slice)
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.characters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECOMP: &str = include_str!("../../../test-data/cjk_decomp.txt");
    const RADICALS: &str = include_str!("../../../test-data/radical_with_meanings.json");
    const FREQUENCY: &str = include_str!("../../../test-data/leiden_freq_variants_removed.txt");

    fn corpus() -> Vec<&'static str> {
        FREQUENCY
            .lines()
            .filter_map(|line| line.split('\t').nth(1))
            .collect()
    }

    fn setup() -> (DecompositionEngine, ComponentIndex) {
        let engine = DecompositionEngine::from_sources(DECOMP, RADICALS).unwrap();
        let index = ComponentIndex::build(corpus(), &engine).unwrap();
        (engine, index)
    }

    #[test]
    fn enclosure_lists_in_rank_order() {
        let (engine, index) = setup();
        assert_eq!(
            index.get_characters_with_component("囗", engine.radicals()).unwrap(),
            ["国", "回", "四"]
        );
    }

    #[test]
    fn radical_expands_to_same_meaning_variants() {
        let (engine, index) = setup();
        let expected = ["人", "你", "他", "休"];
        assert_eq!(
            index.get_characters_with_component("人", engine.radicals()).unwrap(),
            expected
        );
        assert_eq!(
            index.get_characters_with_component("亻", engine.radicals()).unwrap(),
            expected
        );
    }

    #[test]
    fn unindexed_radical_variant_is_skipped() {
        let (engine, index) = setup();
        assert!(index.get("王").is_none());
        assert_eq!(
            index.get_characters_with_component("王", engine.radicals()).unwrap(),
            ["国"]
        );
    }

    #[test]
    fn non_radical_component_direct_lookup() {
        let (engine, index) = setup();
        assert_eq!(
            index.get_characters_with_component("𤴓", engine.radicals()).unwrap(),
            ["是"]
        );
        assert_eq!(
            index.get_characters_with_component("勺", engine.radicals()).unwrap(),
            ["的"]
        );
    }

    #[test]
    fn unknown_component_is_none() {
        let (engine, index) = setup();
        assert!(index.get_characters_with_component("龘", engine.radicals()).is_none());
        assert!(index.get_characters_with_component("", engine.radicals()).is_none());
    }

    #[test]
    fn sentinel_is_never_indexed() {
        let (_, index) = setup();
        assert!(index.get(NO_GLYPH).is_none());
    }

    #[test]
    fn basic_strokes_only_indexed_through_once_view() {
        let (_, index) = setup();
        // 天 lists 一 as an immediate component; 是 only reaches it by radical descent.
        assert_eq!(index.get("一").unwrap(), ["天"]);
    }

    #[test]
    fn repeated_components_list_character_once() {
        let (_, index) = setup();
        assert_eq!(index.get("木").unwrap(), ["林", "休"]);
    }

    #[test]
    fn repeated_corpus_characters_are_skipped() {
        let engine = DecompositionEngine::from_sources(DECOMP, RADICALS).unwrap();
        let index = ComponentIndex::build(["回", "四", "回"], &engine).unwrap();
        assert_eq!(index.get("囗").unwrap(), ["回", "四"]);
    }

    #[test]
    fn every_indexed_character_contains_its_component() {
        let (engine, index) = setup();
        assert!(!index.is_empty());
        for component in index.components() {
            for character in index.get(component).unwrap() {
                let once = engine.once_decomposition(character);
                let radical = engine.radical_decomposition(character).unwrap();
                assert!(
                    once.iter().chain(&radical).any(|c| c == component),
                    "{character} indexed under {component}"
                );
            }
        }
    }

    #[test]
    fn empty_index() {
        let index = ComponentIndex::empty();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        let radicals = RadicalTable::from_pairs([("口", "mouth")]);
        assert_eq!(
            index.get_characters_with_component("口", &radicals),
            Some(Vec::new())
        );
    }
}

//! End-to-end tests over the fixture data in `test-data/`.
//!
//! The `full_data_*` tests also run against a complete data directory when
//! HANZI_DATA_PATH points at one, and are skipped otherwise.
//!
//! Run: HANZI_DATA_PATH=/path/to/data cargo test -p hanzi-dict --test fixture_data

use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use hanzi_dict::{
    DataSources, DecompositionMode, HanziError, HanziHandle, NO_GLYPH, Script, SearchMode,
};

// ---------------------------------------------------------------------------
// Helpers: load data directories
// ---------------------------------------------------------------------------

/// Contents of one data directory, owned so a handle can borrow them.
struct DataDir {
    decomposition: String,
    radicals: String,
    dictionary: String,
    character_frequency: String,
    word_frequency: String,
    irregular_phonetics: Option<String>,
    index_corpus: Option<String>,
}

impl DataDir {
    fn read(dir: &Path) -> Self {
        let required = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
        };
        let optional = |name: &str| std::fs::read_to_string(dir.join(name)).ok();
        Self {
            decomposition: required("cjk_decomp.txt"),
            radicals: required("radical_with_meanings.json"),
            dictionary: required("cedict_ts.u8"),
            character_frequency: required("leiden_freq_variants_removed.txt"),
            word_frequency: required("leiden_freq_data.txt"),
            irregular_phonetics: optional("irregular_phonetics.txt"),
            index_corpus: optional("chinese_charfreq_simpl_trad.csv"),
        }
    }

    fn sources(&self) -> DataSources<'_> {
        DataSources {
            decomposition: &self.decomposition,
            radicals: &self.radicals,
            dictionary: &self.dictionary,
            character_frequency: &self.character_frequency,
            word_frequency: &self.word_frequency,
            irregular_phonetics: self.irregular_phonetics.as_deref(),
            index_corpus: self.index_corpus.as_deref(),
        }
    }
}

fn fixture_handle() -> HanziHandle {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data");
    let data = DataDir::read(&dir);
    HanziHandle::from_sources(&data.sources())
        .unwrap_or_else(|e| panic!("failed to load fixture data: {}", e))
}

/// A handle over HANZI_DATA_PATH, or `None` to skip.
fn full_data_handle() -> Option<HanziHandle> {
    let Ok(dir) = std::env::var("HANZI_DATA_PATH") else {
        eprintln!("SKIP: HANZI_DATA_PATH not set");
        return None;
    };
    let data = DataDir::read(Path::new(&dir));
    let handle = HanziHandle::from_sources(&data.sources())
        .unwrap_or_else(|e| panic!("failed to load {}: {}", dir, e));
    Some(handle)
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| panic!("serialization failed: {}", e))
}

// ---------------------------------------------------------------------------
// Decomposition
// ---------------------------------------------------------------------------

#[test]
fn decompose_shi_json_shape() {
    let handle = fixture_handle();
    let result = handle.decompose("是", None).unwrap();
    assert_eq!(
        to_json(&result),
        json!({
            "character": "是",
            "once": ["日", "𤴓"],
            "radical": ["日", "一", "龰"],
            "graphical": ["口", "一", "一", "龰"],
            "radical_up": ["日", "𤴓", "一", "龰"],
        })
    );
}

#[test]
fn decompose_single_mode_json_shape() {
    let handle = fixture_handle();
    let result = handle.decompose("爱", Some(DecompositionMode::Once)).unwrap();
    assert_eq!(
        to_json(&result),
        json!({ "character": "爱", "mode": "once", "components": ["爫", NO_GLYPH] })
    );
}

#[test]
fn masking_versus_resolving() {
    let handle = fixture_handle();
    let result = handle.decompose("爱", None).unwrap();
    let d = result.as_full().unwrap();
    assert!(d.once.iter().any(|c| c == NO_GLYPH));
    assert_eq!(d.graphical, ["爫", "冖", "𠂇", "又"]);
}

#[test]
fn decompose_many_keeps_first_occurrence_order() {
    let handle = fixture_handle();
    let map = handle
        .decompose_many("你好, 你是 hello", Some(DecompositionMode::Radical))
        .unwrap();
    let hanzi: Vec<&str> = map
        .keys()
        .filter(|k| k.chars().all(|c| ('\u{4E00}'..='\u{9FFF}').contains(&c)))
        .collect();
    assert_eq!(hanzi, ["你", "好", "是"]);

    let json = to_json(&map);
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), map.len());
}

#[test]
fn decompose_many_rejects_non_hanzi() {
    let handle = fixture_handle();
    for text in ["test phrase", "한글"] {
        assert!(matches!(
            handle.decompose_many(text, None),
            Err(HanziError::NotHanziCharacter(_))
        ));
    }
}

#[test]
fn radicals_and_components() {
    let handle = fixture_handle();
    assert!(handle.is_radical("口"));
    assert_eq!(handle.get_radical_meaning("氵"), Some("water"));
    assert_eq!(handle.get_components("江"), ["氵", "工"]);
    assert_eq!(handle.get_characters_with_component("囗").unwrap(), ["国", "回", "四"]);
    // 氵 and 水 share a meaning.
    assert_eq!(handle.get_characters_with_component("氵").unwrap(), ["水", "江"]);
    assert!(handle.get_characters_with_component("龘").is_none());
}

#[test]
fn component_index_agrees_with_engine() {
    let handle = fixture_handle();
    let index = handle.component_index();
    for component in index.components() {
        for character in index.get(component).unwrap() {
            let result = handle.decompose(character, None).unwrap();
            let d = result.as_full().unwrap();
            assert!(
                d.once.iter().chain(&d.radical).any(|c| c == component),
                "{character} listed under {component}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

#[test]
fn definition_lookup_json_shape() {
    let handle = fixture_handle();
    let entries = handle.definition_lookup("爱", Some(Script::Simplified)).unwrap();
    assert_eq!(
        to_json(&entries),
        json!([{
            "traditional": "愛",
            "simplified": "爱",
            "pinyin": "ai4",
            "definition": "to love/affection",
        }])
    );
}

#[test]
fn dictionary_search_modes() {
    let handle = fixture_handle();
    let any: Vec<&str> = handle
        .dictionary_search("句", SearchMode::Any)
        .iter()
        .map(|e| e.simplified.as_str())
        .collect();
    assert_eq!(any, ["一句", "一句话", "句", "句", "句子", "例句"]);

    let only: Vec<&str> = handle
        .dictionary_search("句子", SearchMode::Only)
        .iter()
        .map(|e| e.simplified.as_str())
        .collect();
    assert_eq!(only, ["句", "句", "句子", "子"]);
}

#[test]
fn examples_by_frequency() {
    let handle = fixture_handle();
    let examples = handle.get_examples("句");
    let words = |list: &[&hanzi_dict::DictionaryEntry]| {
        list.iter()
            .map(|e| e.simplified.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(words(&examples.high_frequency), ["句子"]);
    assert_eq!(words(&examples.mid_frequency), ["一句", "句", "句"]);
    assert_eq!(words(&examples.low_frequency), ["一句话", "例句"]);

    let json = to_json(&examples);
    assert!(json["high_frequency"].is_array());
    assert_eq!(json["low_frequency"][1]["pinyin"], "li4 ju4");
}

#[test]
fn examples_for_unknown_character_are_empty() {
    let handle = fixture_handle();
    assert!(handle.get_examples("龘").is_empty());
}

// ---------------------------------------------------------------------------
// Phonetics and frequency
// ---------------------------------------------------------------------------

#[test]
fn phonetic_regularity_of_gou() {
    let handle = fixture_handle();
    let result = handle.determine_phonetic_regularity("句").unwrap().unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].pinyin, "gou1");
    assert_eq!(result[0].scores(), [Some(0), Some(4), Some(0), Some(4)]);
    assert_eq!(result[1].pinyin, "ju4");
    assert_eq!(result[1].scores(), [Some(0), Some(0), Some(0), Some(0)]);

    let json = to_json(&result[0]);
    assert_eq!(json["components"][1]["component"], "口");
    assert_eq!(json["components"][1]["phonetic_pinyin"], "kou3");
    assert_eq!(json["components"][1]["regularity"], 4);
}

#[test]
fn phonetic_regularity_uses_irregular_readings() {
    let handle = fixture_handle();
    let result = handle.determine_phonetic_regularity("是").unwrap().unwrap();
    // 是 -> 日, 𤴓 (once) then 日, 一, 龰 (radical); only 𤴓 lacks a reading.
    let rows = &result[0].components;
    let missing: Vec<&str> = rows
        .iter()
        .filter(|r| r.phonetic_pinyin.is_none())
        .map(|r| r.component.as_str())
        .collect();
    assert_eq!(missing, ["𤴓"]);
    let zhi = rows.iter().find(|r| r.component == "龰").unwrap();
    assert_eq!(zhi.phonetic_pinyin.as_deref(), Some("zhi3"));
}

#[test]
fn phonetic_regularity_without_reading_is_none() {
    let handle = fixture_handle();
    assert!(handle.determine_phonetic_regularity("龘").unwrap().is_none());
    assert!(matches!(
        handle.determine_phonetic_regularity(""),
        Err(HanziError::InvalidInput(_))
    ));
}

#[test]
fn character_frequency_json_shape() {
    let handle = fixture_handle();
    let record = handle.get_character_frequency("国").unwrap();
    let json = to_json(record);
    assert_eq!(json["number"], 3);
    assert_eq!(json["character"], "国");
    assert_eq!(json["count"], 1340706);
    assert_eq!(json["pinyin"], "guo2");
    assert_eq!(
        handle.get_character_in_frequency_list_by_position(1).unwrap().character,
        "的"
    );
    assert_eq!(handle.word_frequency("句子"), Some(900));
}

// ---------------------------------------------------------------------------
// Full data (optional)
// ---------------------------------------------------------------------------

#[test]
fn full_data_documented_examples() {
    let Some(handle) = full_data_handle() else {
        return;
    };
    let result = handle.decompose("是", None).unwrap();
    let d = result.as_full().unwrap();
    assert_eq!(d.once, ["日", "𤴓"]);
    assert_eq!(d.radical, ["日", "一", "龰"]);
    assert_eq!(d.graphical, ["口", "一", "一", "龰"]);

    let regularity = handle.determine_phonetic_regularity("句").unwrap().unwrap();
    let gou = regularity.iter().find(|r| r.pinyin == "gou1").unwrap();
    assert_eq!(gou.scores(), [Some(0), Some(4), Some(0), Some(4)]);
}

#[test]
fn full_data_component_index_agrees_with_engine() {
    let Some(handle) = full_data_handle() else {
        return;
    };
    let index = handle.component_index();
    for component in index.components().take(500) {
        for character in index.get(component).unwrap() {
            let result = handle.decompose(character, None).unwrap();
            let d = result.as_full().unwrap();
            assert!(d.once.iter().chain(&d.radical).any(|c| c == component));
        }
    }
}

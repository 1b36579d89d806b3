// Phonetic regularity between a character and its components
//
// A character's reading is compared with every reading of every component in
// its `once` and `radical` views, and each pair is scored on a five-point
// scale.

pub mod syllable;

use serde::{Serialize, Serializer};

use hanzi_core::decomposition::Decomposition;

pub use syllable::PinyinSyllable;

/// Anything that can list the pinyin readings of a glyph.
pub trait PinyinSource {
    /// Distinct readings of `glyph` in source order, or `None` when unknown.
    fn readings(&self, glyph: &str) -> Option<Vec<&str>>;
}

/// How closely a component's reading matches the character's reading.
///
/// Serialized as its numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Regularity {
    /// No relation.
    None = 0,
    /// Same syllable and same tone.
    Exact = 1,
    /// Same syllable, different tone.
    Syllable = 2,
    /// Same initial.
    Initial = 3,
    /// Same final.
    Final = 4,
}

impl Regularity {
    pub fn score(self) -> u8 {
        self as u8
    }
}

impl Serialize for Regularity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.score())
    }
}

/// Score a component reading against a character reading.
///
/// Syllable equality is checked first (exact when the tone matches too);
/// otherwise a shared final outranks a shared initial.
pub fn regularity(char_pinyin: &str, component_pinyin: &str) -> Regularity {
    let character = PinyinSyllable::new(char_pinyin);
    let component = PinyinSyllable::new(component_pinyin);

    if character.syllable() == component.syllable() {
        if character.raw() == component.raw() {
            return Regularity::Exact;
        }
        return Regularity::Syllable;
    }
    if character.final_() == component.final_() {
        return Regularity::Final;
    }
    if character.initial() == component.initial() {
        return Regularity::Initial;
    }
    Regularity::None
}

/// One scored component reading. `phonetic_pinyin` and `regularity` are
/// empty when the component has no known reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentReading {
    pub component: String,
    pub phonetic_pinyin: Option<String>,
    pub regularity: Option<Regularity>,
}

/// Every component reading scored against one reading of the character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneticRegularity {
    pub character: String,
    pub pinyin: String,
    pub components: Vec<ComponentReading>,
}

impl PhoneticRegularity {
    /// The scores in component order, `None` where no reading was known.
    pub fn scores(&self) -> Vec<Option<u8>> {
        self.components
            .iter()
            .map(|c| c.regularity.map(Regularity::score))
            .collect()
    }
}

/// Score the `once` then `radical` components of `decomposition` against
/// each distinct reading of its character.
///
/// Returns `None` when the character itself has no reading.
pub fn determine_phonetic_regularity<P>(
    decomposition: &Decomposition,
    source: &P,
) -> Option<Vec<PhoneticRegularity>>
where
    P: PinyinSource + ?Sized,
{
    let readings = source.readings(&decomposition.character)?;
    if readings.is_empty() {
        return None;
    }

    let components: Vec<(&str, Option<Vec<&str>>)> = decomposition
        .once
        .iter()
        .chain(&decomposition.radical)
        .map(|c| (c.as_str(), source.readings(c).filter(|r| !r.is_empty())))
        .collect();

    let result = readings
        .into_iter()
        .map(|pinyin| {
            let mut rows = Vec::new();
            for (component, component_readings) in &components {
                match component_readings {
                    Some(list) => {
                        for &phonetic in list {
                            rows.push(ComponentReading {
                                component: component.to_string(),
                                phonetic_pinyin: Some(phonetic.to_string()),
                                regularity: Some(regularity(pinyin, phonetic)),
                            });
                        }
                    }
                    None => rows.push(ComponentReading {
                        component: component.to_string(),
                        phonetic_pinyin: None,
                        regularity: None,
                    }),
                }
            }
            PhoneticRegularity {
                character: decomposition.character.clone(),
                pinyin: pinyin.to_string(),
                components: rows,
            }
        })
        .collect();
    Some(result)
}

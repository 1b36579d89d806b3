// Numbered-tone pinyin syllable split into initial and final

use std::fmt;

/// One numbered-tone pinyin syllable such as `zhong1`.
///
/// The raw text is lowercased on construction. The initial is the two-letter
/// cluster when the second letter is `h` (`zh`, `ch`, `sh`), otherwise the
/// first letter; the final is whatever follows the initial.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PinyinSyllable {
    raw: String,
}

impl PinyinSyllable {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.trim().to_lowercase(),
        }
    }

    /// The lowercased syllable including its tone digit.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The syllable without its tone digit.
    pub fn syllable(&self) -> &str {
        match self.raw.char_indices().last() {
            Some((idx, c)) if c.is_ascii_digit() => &self.raw[..idx],
            _ => &self.raw,
        }
    }

    /// The tone number, when the syllable carries one.
    pub fn tone(&self) -> Option<u8> {
        self.raw
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
    }

    pub fn initial(&self) -> &str {
        let syllable = self.syllable();
        let mut chars = syllable.char_indices();
        let Some((_, first)) = chars.next() else {
            return "";
        };
        match chars.next() {
            Some((idx, 'h')) => &syllable[..idx + 1],
            _ => &syllable[..first.len_utf8()],
        }
    }

    /// The rhyme: the toneless syllable after the initial.
    pub fn final_(&self) -> &str {
        let syllable = self.syllable();
        syllable.strip_prefix(self.initial()).unwrap_or(syllable)
    }
}

impl fmt::Display for PinyinSyllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

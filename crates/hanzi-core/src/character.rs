// CJK character classification and input normalization

// ---------------------------------------------------------------------------
// CJK Unified Ideographs
// ---------------------------------------------------------------------------

/// First code point of the CJK Unified Ideographs block.
pub const CJK_UNIFIED_FIRST: char = '\u{4E00}';

/// Last code point of the CJK Unified Ideographs block.
pub const CJK_UNIFIED_LAST: char = '\u{9FFF}';

/// Check whether a character lies in the CJK Unified Ideographs block
/// (U+4E00..=U+9FFF).
///
/// This is the only Hanzi-validity gate used by the lookup paths. Extension
/// blocks, radical supplements and stroke glyphs fall outside it:
/// they occur as components but are not accepted as query text.
pub fn is_hanzi(c: char) -> bool {
    (CJK_UNIFIED_FIRST..=CJK_UNIFIED_LAST).contains(&c)
}

/// Check whether a string contains at least one Hanzi.
pub fn contains_hanzi(s: &str) -> bool {
    s.chars().any(is_hanzi)
}

// ---------------------------------------------------------------------------
// Basic strokes
// ---------------------------------------------------------------------------

/// Check whether a glyph is one of the single-stroke radicals that the
/// component index leaves out of its radical view.
///
/// These strokes appear in nearly every character, so indexing them would
/// produce lists that say nothing about the containing character.
pub fn is_basic_stroke(c: char) -> bool {
    matches!(
        c,
        '一' | '丨'
            | '丶'
            | '\u{2E80}' // ⺀
            | '丿'
            | '乙'
            | '\u{2E83}' // ⺃
            | '乚'
            | '\u{2E84}' // ⺄
            | '亅'
            | '丷'
    )
}

// ---------------------------------------------------------------------------
// Tokens and input
// ---------------------------------------------------------------------------

/// Check whether a component token is a numeric back-reference
/// (a non-empty run of ASCII digits).
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Remove every whitespace character from the input.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Return the only character of `s`, or `None` when `s` is empty or holds
/// more than one code point.
pub fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let first = chars.next()?;
    match chars.next() {
        Some(_) => None,
        None => Some(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hanzi_block_bounds() {
        assert!(is_hanzi('\u{4E00}'));
        assert!(is_hanzi('是'));
        assert!(is_hanzi('\u{9FFF}'));
        assert!(!is_hanzi('\u{4DFF}'));
        assert!(!is_hanzi('\u{A000}'));
    }

    #[test]
    fn components_outside_block_are_not_hanzi() {
        assert!(!is_hanzi('𤴓')); // Extension B
        assert!(!is_hanzi('⺀')); // CJK radicals supplement
        assert!(!is_hanzi('㇒')); // CJK strokes
    }

    #[test]
    fn contains_hanzi_mixed_text() {
        assert!(contains_hanzi("abc是def"));
        assert!(!contains_hanzi("test phrase"));
        assert!(!contains_hanzi("한글"));
        assert!(!contains_hanzi(""));
    }

    #[test]
    fn basic_strokes() {
        for c in ['一', '丨', '丶', '⺀', '丿', '乙', '⺃', '乚', '⺄', '亅', '丷'] {
            assert!(is_basic_stroke(c), "{c} should be a basic stroke");
        }
        assert!(!is_basic_stroke('口'));
        assert!(!is_basic_stroke('㇒'));
    }

    #[test]
    fn numeric_tokens() {
        assert!(is_numeric_token("092345"));
        assert!(is_numeric_token("7"));
        assert!(!is_numeric_token(""));
        assert!(!is_numeric_token("12a"));
        assert!(!is_numeric_token("口"));
    }

    #[test]
    fn whitespace_is_removed_everywhere() {
        assert_eq!(strip_whitespace(" 是 的\t\n"), "是的");
        assert_eq!(strip_whitespace("\u{3000}是"), "是"); // ideographic space
        assert_eq!(strip_whitespace("   "), "");
    }

    #[test]
    fn single_char_rejects_runs() {
        assert_eq!(single_char("是"), Some('是'));
        assert_eq!(single_char("𤴓"), Some('𤴓'));
        assert_eq!(single_char(""), None);
        assert_eq!(single_char("是的"), None);
    }
}

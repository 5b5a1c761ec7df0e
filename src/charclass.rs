//! Character classes shared by the normalizers and the segmenter adapter.
//!
//! Two precompiled matchers are exported for callers that prefer a
//! [`Regex`], alongside plain `char` predicates for hot loops.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a single CJK Unified Ideograph (U+4E00 to U+9FA5).
pub static CHINESE_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{4E00}-\u{9FA5}]").unwrap());

/// Matches a single full-width form of a printable ASCII character.
///
/// See <https://www.unicode.org/charts/PDF/UFF00.pdf>.
pub static FULL_WIDTH_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{FF01}-\u{FF5E}]").unwrap());

/// Maximal run of CJK Unified Ideographs, the unit handed to the segmenter.
pub(crate) static CHINESE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{4E00}-\u{9FA5}]+").unwrap());

/// Check if character is a CJK Unified Ideograph in the segmented range
pub fn is_chinese_character(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// Check if character is a full-width ASCII variant (！ to ～)
pub fn is_full_width_character(c: char) -> bool {
    ('\u{FF01}'..='\u{FF5E}').contains(&c)
}

/// Returns true if the text contains at least one Chinese character.
pub fn contains_chinese(text: &str) -> bool {
    text.chars().any(is_chinese_character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_character_range() {
        assert!(is_chinese_character('一')); // U+4E00
        assert!(is_chinese_character('龥')); // U+9FA5
        assert!(is_chinese_character('你'));
        assert!(!is_chinese_character('\u{9FA6}'));
        assert!(!is_chinese_character('\u{3400}')); // Extension A is not segmented
        assert!(!is_chinese_character('가'));
        assert!(!is_chinese_character('a'));
    }

    #[test]
    fn test_full_width_range() {
        assert!(is_full_width_character('！'));
        assert!(is_full_width_character('～'));
        assert!(is_full_width_character('Ａ'));
        assert!(!is_full_width_character('\u{3000}')); // Ideographic space
        assert!(!is_full_width_character('!'));
    }

    #[test]
    fn test_regex_matchers_agree_with_predicates() {
        for c in ['你', '一', '龥', 'a', '！', '가', '\u{9FA6}'] {
            let s = c.to_string();
            assert_eq!(CHINESE_CHARACTER.is_match(&s), is_chinese_character(c));
            assert_eq!(FULL_WIDTH_CHARACTER.is_match(&s), is_full_width_character(c));
        }
    }

    #[test]
    fn test_contains_chinese() {
        assert!(contains_chinese("hello 世界"));
        assert!(!contains_chinese("hello world"));
        assert!(!contains_chinese(""));
    }

    #[test]
    fn test_chinese_run_is_maximal() {
        let runs: Vec<&str> = CHINESE_RUN
            .find_iter("我爱<noun>北京天安门!")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(runs, vec!["我爱", "北京天安门"]);
    }
}

//! Placeholder tag normalization.
//!
//! Upstream templates embed part-of-speech markers such as `<noun>` or
//! `<entities2>` directly in chat text. Before Chinese runs are handed to the
//! segmenter every marker is padded with single spaces so it is never glued
//! to a neighbouring character.

use regex::Regex;
use std::sync::LazyLock;

/// Tag names recognized inside angle brackets.
pub const TAG_NAMES: &[&str] = &[
    "cap",
    "name",
    "noun",
    "adverb",
    "verb",
    "pronoun",
    "adjective",
    "entity",
    "entities",
];

/// A placeholder tag: tag name, optional plural `s` or numeric index.
///
/// `entities` is accepted as a base name so that `<entities2>` is a tag.
pub static PLACEHOLDER_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"<(?:cap|name|noun|adverb|verb|pronoun|adjective|entity|entities|entitie)(?:s|[0-9]+)?>",
    )
    .unwrap()
});

/// Returns true if `text` is exactly one placeholder tag.
pub fn is_placeholder_tag(text: &str) -> bool {
    PLACEHOLDER_TAG
        .find(text)
        .is_some_and(|m| m.start() == 0 && m.end() == text.len())
}

/// Pads every placeholder tag with one space on each side that touches a
/// non-whitespace character.
///
/// Tags are scanned left to right without overlap. The left neighbour is
/// taken from the text produced so far, so two adjacent tags end up with a
/// single space between them and the function is idempotent.
///
/// # Example
///
/// ```
/// use hancut::placeholder::fix_parts_of_speech;
///
/// assert_eq!(fix_parts_of_speech("我的<noun>很好"), "我的 <noun> 很好");
/// assert_eq!(fix_parts_of_speech("<noun><verb2>"), "<noun> <verb2>");
/// ```
pub fn fix_parts_of_speech(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 8);
    let mut last = 0;

    for tag in PLACEHOLDER_TAG.find_iter(text) {
        result.push_str(&text[last..tag.start()]);

        if result.chars().next_back().is_some_and(|c| !c.is_whitespace()) {
            result.push(' ');
        }

        result.push_str(tag.as_str());

        if text[tag.end()..]
            .chars()
            .next()
            .is_some_and(|c| !c.is_whitespace())
        {
            result.push(' ');
        }

        last = tag.end();
    }

    result.push_str(&text[last..]);
    result
}

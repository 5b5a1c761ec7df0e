//! Word segmentation.
//!
//! The engine itself is an external capability behind the [`Segmenter`]
//! trait; [`JiebaSegmenter`] is the bundled adapter. On top of it sits the
//! boundary-aware [`cut`] pipeline, which segments only the Chinese runs of
//! a message and keeps placeholder tags and bracket structure intact.

mod jieba;
mod options;

pub use jieba::JiebaSegmenter;
pub use options::{CutMode, CutOptions, ExtractOptions, KeywordMethod, DEFAULT_TOP_K};

use crate::charclass::{contains_chinese, CHINESE_RUN};
use crate::error::Result;
use crate::placeholder::fix_parts_of_speech;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// A token paired with its part-of-speech label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// A keyword with its ranking weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub weight: f64,
}

/// A word segmentation engine.
///
/// Results and failures are entirely the engine's; callers propagate errors
/// unchanged.
pub trait Segmenter: Send + Sync {
    /// Splits text into ordered tokens.
    fn cut(&self, text: &str, options: CutOptions) -> Result<Vec<String>>;

    /// Splits text into tokens labelled with their part of speech.
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;

    /// Returns the highest-weighted keywords of the text.
    fn extract(&self, text: &str, options: &ExtractOptions) -> Result<Vec<Keyword>>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn cut(&self, text: &str, options: CutOptions) -> Result<Vec<String>> {
        (**self).cut(text, options)
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        (**self).tag(text)
    }

    fn extract(&self, text: &str, options: &ExtractOptions) -> Result<Vec<Keyword>> {
        (**self).extract(text, options)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn cut(&self, text: &str, options: CutOptions) -> Result<Vec<String>> {
        (**self).cut(text, options)
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        (**self).tag(text)
    }

    fn extract(&self, text: &str, options: &ExtractOptions) -> Result<Vec<Keyword>> {
        (**self).extract(text, options)
    }
}

static DEFAULT_SEGMENTER: LazyLock<JiebaSegmenter> = LazyLock::new(JiebaSegmenter::new);

/// Returns the process-wide jieba segmenter, loading its dictionary on first
/// use.
pub fn default_segmenter() -> &'static JiebaSegmenter {
    &DEFAULT_SEGMENTER
}

/// Whether a segmented run needs a leading space after `prev`.
fn needs_space_before(prev: Option<char>) -> bool {
    prev.is_some_and(|c| !matches!(c, ' ' | '|' | '(' | '['))
}

/// Whether a segmented run needs a trailing space before `next`.
fn needs_space_after(next: Option<char>) -> bool {
    next.is_some_and(|c| !matches!(c, ' ' | '|' | ')' | ']'))
}

/// Segments the Chinese runs of a message with the default jieba engine.
///
/// See [`cut_with`].
///
/// # Example
///
/// ```no_run
/// let tokens = hancut::cut("你好<noun>世界")?;
/// assert_eq!(tokens, "你好 <noun> 世界");
/// # Ok::<(), hancut::Error>(())
/// ```
pub fn cut(text: &str) -> Result<String> {
    cut_with(default_segmenter(), text)
}

/// Segments the Chinese runs of a message with the given engine.
///
/// - Text without any Chinese character is returned unchanged and the engine
///   is never called.
/// - Placeholder tags are padded with spaces first, so they never end up
///   inside a run.
/// - Every maximal run of U+4E00..U+9FA5 is cut in precise mode with HMM and
///   its tokens joined with single spaces, so removing the spaces gives back
///   the run.
/// - A run touching a preceding character other than space, `|`, `(` or `[`
///   gets a leading space; one touching a following character other than
///   space, `|`, `)` or `]` gets a trailing space. The message edges need
///   neither.
pub fn cut_with<S: Segmenter + ?Sized>(segmenter: &S, text: &str) -> Result<String> {
    if !contains_chinese(text) {
        return Ok(text.to_string());
    }

    let origin = fix_parts_of_speech(text);
    let mut cutted = String::with_capacity(origin.len() * 2);
    let mut last = 0;

    for run in CHINESE_RUN.find_iter(&origin) {
        cutted.push_str(&origin[last..run.start()]);

        let mut tokens = segmenter.cut(run.as_str(), CutOptions::default())?;

        if needs_space_before(origin[..run.start()].chars().next_back()) {
            tokens.insert(0, String::new());
        }

        if needs_space_after(origin[run.end()..].chars().next()) {
            tokens.push(String::new());
        }

        cutted.push_str(&tokens.join(" "));
        last = run.end();
    }

    cutted.push_str(&origin[last..]);

    debug!(target: "hancut::segment", %origin, "origin");
    debug!(target: "hancut::segment", %cutted, "cutted");

    Ok(cutted)
}

/// Cuts text with the default engine and returns the raw tokens.
pub fn jieba_cut(text: &str, options: CutOptions) -> Result<Vec<String>> {
    default_segmenter().cut(text, options)
}

/// Tags text with the default engine.
pub fn jieba_tag(text: &str) -> Result<Vec<TaggedToken>> {
    default_segmenter().tag(text)
}

/// Extracts the top [`DEFAULT_TOP_K`] keywords with the default engine.
pub fn jieba_extract(text: &str) -> Result<Vec<String>> {
    Ok(jieba_extract_with(text, &ExtractOptions::default())?
        .into_iter()
        .map(|k| k.keyword)
        .collect())
}

/// Extracts weighted keywords with the default engine.
pub fn jieba_extract_with(text: &str, options: &ExtractOptions) -> Result<Vec<Keyword>> {
    default_segmenter().extract(text, options)
}

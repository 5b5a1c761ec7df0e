//! # hancut
//!
//! Normalization and word segmentation of Chinese chat messages for
//! downstream NLP stages.
//!
//! ## Units
//!
//! - **Full-width conversion**: [`convert_full_width_char`]
//! - **Message cleaning**: [`clean_message`], an ordered punctuation rule table
//! - **Placeholder tags**: [`fix_parts_of_speech`] pads `<noun>`-style markers
//! - **Segmentation**: [`cut`] splits Chinese runs into space-delimited tokens
//!   without disturbing tags, brackets or pipes
//! - **Raw engine access**: [`jieba_cut`], [`jieba_tag`], [`jieba_extract`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use hancut::{clean_message, convert_full_width_char, cut};
//!
//! fn main() -> hancut::Result<()> {
//!     let message = convert_full_width_char("我喜欢<noun>！");
//!     let message = clean_message(&message);
//!     println!("{}", cut(&message)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `python`: Python bindings via pyo3

pub mod charclass;
pub mod clean;
pub mod error;
pub mod fullwidth;
pub mod pipeline;
pub mod placeholder;
pub mod segment;

#[cfg(feature = "python")]
pub mod python;

// Re-exports
pub use charclass::{
    is_chinese_character, is_full_width_character, CHINESE_CHARACTER, FULL_WIDTH_CHARACTER,
};
pub use clean::{clean_message, CleanRule, CLEAN_RULES};
pub use error::{Error, Result};
pub use fullwidth::convert_full_width_char;
pub use pipeline::{process_message, process_message_with, ProcessOptions};
pub use placeholder::fix_parts_of_speech;
pub use segment::{
    cut, cut_with, jieba_cut, jieba_extract, jieba_extract_with, jieba_tag, CutMode, CutOptions,
    ExtractOptions, JiebaSegmenter, Keyword, KeywordMethod, Segmenter, TaggedToken,
};

use std::path::{Path, PathBuf};

/// Directory where message-processing plugins are expected to live.
///
/// Consumed by an external plugin loader; nothing here reads it.
pub const MESSAGE_PLUGIN_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/plugins/message");

/// Returns [`MESSAGE_PLUGIN_DIR`] as a path.
pub fn message_plugin_dir() -> PathBuf {
    PathBuf::from(MESSAGE_PLUGIN_DIR)
}

/// Builder for processing messages with a chosen engine and stages.
///
/// # Example
///
/// ```no_run
/// use hancut::Hancut;
///
/// let tokens = Hancut::new()
///     .with_user_dict("userdict.txt")?
///     .with_clean(true)
///     .process("今天天气不错, 对吧?")?;
/// # Ok::<(), hancut::Error>(())
/// ```
pub struct Hancut {
    segmenter: Option<Box<dyn Segmenter>>,
    options: ProcessOptions,
}

impl Default for Hancut {
    fn default() -> Self {
        Self::new()
    }
}

impl Hancut {
    /// Creates a new builder with the default jieba engine and options.
    pub fn new() -> Self {
        Self {
            segmenter: None,
            options: ProcessOptions::default(),
        }
    }

    /// Uses a custom segmentation engine.
    pub fn with_segmenter(mut self, segmenter: impl Segmenter + 'static) -> Self {
        self.segmenter = Some(Box::new(segmenter));
        self
    }

    /// Uses a jieba engine extended with a user dictionary file.
    pub fn with_user_dict(self, path: impl AsRef<Path>) -> Result<Self> {
        Ok(self.with_segmenter(JiebaSegmenter::with_user_dict(path)?))
    }

    /// Replaces the stage selection.
    pub fn with_options(mut self, options: ProcessOptions) -> Self {
        self.options = options;
        self
    }

    /// Enables or disables full-width conversion.
    pub fn with_full_width(mut self, enabled: bool) -> Self {
        self.options = self.options.with_full_width(enabled);
        self
    }

    /// Enables or disables message cleaning.
    pub fn with_clean(mut self, enabled: bool) -> Self {
        self.options = self.options.with_clean(enabled);
        self
    }

    /// Returns the configured stages.
    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    /// Returns the engine in use.
    pub fn segmenter(&self) -> &dyn Segmenter {
        match self.segmenter.as_deref() {
            Some(segmenter) => segmenter,
            None => segment::default_segmenter(),
        }
    }

    /// Runs the configured stages over a message.
    pub fn process(&self, message: &str) -> Result<String> {
        process_message_with(self.segmenter(), message, &self.options)
    }

    /// Boundary-aware segmentation only.
    pub fn cut(&self, text: &str) -> Result<String> {
        cut_with(self.segmenter(), text)
    }

    /// Raw tokens from the engine.
    pub fn tokens(&self, text: &str, options: CutOptions) -> Result<Vec<String>> {
        self.segmenter().cut(text, options)
    }

    /// Part-of-speech tagged tokens from the engine.
    pub fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        self.segmenter().tag(text)
    }

    /// Weighted keywords from the engine.
    pub fn extract(&self, text: &str, options: &ExtractOptions) -> Result<Vec<Keyword>> {
        self.segmenter().extract(text, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::testing::CharSegmenter;

    #[test]
    fn test_message_plugin_dir() {
        assert!(MESSAGE_PLUGIN_DIR.ends_with("/plugins/message"));
        assert!(message_plugin_dir().ends_with("plugins/message"));
        assert!(message_plugin_dir().is_absolute());
    }

    #[test]
    fn test_builder_defaults() {
        let hancut = Hancut::new();
        assert_eq!(*hancut.options(), ProcessOptions::default());
    }

    #[test]
    fn test_builder_stage_toggles() {
        let hancut = Hancut::new().with_clean(true).with_full_width(false);
        assert!(hancut.options().clean);
        assert!(!hancut.options().convert_full_width);

        let hancut = hancut.with_options(ProcessOptions::minimal());
        assert_eq!(*hancut.options(), ProcessOptions::minimal());
    }

    #[test]
    fn test_builder_custom_segmenter() {
        let hancut = Hancut::new()
            .with_segmenter(CharSegmenter::default())
            .with_clean(true);

        // the comma after a Latin letter is dropped by the cleaner
        assert_eq!(hancut.process("ｏｋ，你好！").unwrap(), "ok 你 好 ");
        assert_eq!(hancut.cut("a你b").unwrap(), "a 你 b");
        assert_eq!(
            hancut.tokens("你好", CutOptions::default()).unwrap(),
            vec!["你", "好"]
        );
        assert_eq!(hancut.tag("你").unwrap(), vec![TaggedToken::new("你", "x")]);
        assert_eq!(
            hancut
                .extract("你好世界", &ExtractOptions::new().with_top_k(2))
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn test_builder_missing_user_dict() {
        let result = Hancut::new().with_user_dict("/nonexistent/hancut/userdict.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_reexported_matchers() {
        assert!(CHINESE_CHARACTER.is_match("中"));
        assert!(FULL_WIDTH_CHARACTER.is_match("Ａ"));
        assert!(is_chinese_character('中'));
        assert!(is_full_width_character('Ａ'));
        assert_eq!(CLEAN_RULES.len(), 12);
    }
}

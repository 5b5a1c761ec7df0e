//! [`Segmenter`] adapter backed by the `jieba-rs` engine.

use super::{CutMode, CutOptions, ExtractOptions, Keyword, KeywordMethod, Segmenter, TaggedToken};
use crate::error::Result;
use jieba_rs::{Jieba, KeywordExtract, TextRank, TfIdf};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Jieba segmentation engine with its keyword extractors.
pub struct JiebaSegmenter {
    jieba: Jieba,
    tfidf: TfIdf,
    textrank: TextRank,
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl JiebaSegmenter {
    /// Creates a segmenter with jieba's bundled dictionary.
    pub fn new() -> Self {
        Self::from_jieba(Jieba::new())
    }

    /// Wraps an already configured [`Jieba`] instance.
    pub fn from_jieba(jieba: Jieba) -> Self {
        Self {
            jieba,
            tfidf: TfIdf::default(),
            textrank: TextRank::default(),
        }
    }

    /// Creates a segmenter with the bundled dictionary plus a user dictionary
    /// file (one `word [freq] [tag]` entry per line).
    pub fn with_user_dict(path: impl AsRef<Path>) -> Result<Self> {
        let mut segmenter = Self::new();
        segmenter.load_user_dict(path)?;
        Ok(segmenter)
    }

    /// Adds the entries of a user dictionary file.
    pub fn load_user_dict(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading user dictionary");

        let mut reader = BufReader::new(File::open(path)?);
        self.load_user_dict_reader(&mut reader)
    }

    /// Adds user dictionary entries from any buffered reader.
    pub fn load_user_dict_reader<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        self.jieba.load_dict(reader)?;
        Ok(())
    }

    /// Adds a single word to the dictionary.
    pub fn add_word(&mut self, word: &str, freq: Option<usize>, tag: Option<&str>) {
        self.jieba.add_word(word, freq, tag);
    }

    /// Returns the underlying engine.
    pub fn jieba(&self) -> &Jieba {
        &self.jieba
    }
}

impl Segmenter for JiebaSegmenter {
    fn cut(&self, text: &str, options: CutOptions) -> Result<Vec<String>> {
        let words = match options.mode {
            CutMode::Precise => self.jieba.cut(text, options.hmm),
            CutMode::Search => self.jieba.cut_for_search(text, options.hmm),
            CutMode::All => self.jieba.cut_all(text),
        };

        Ok(words.into_iter().map(str::to_owned).collect())
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        Ok(self
            .jieba
            .tag(text, true)
            .into_iter()
            .map(|t| TaggedToken::new(t.word, t.tag))
            .collect())
    }

    fn extract(&self, text: &str, options: &ExtractOptions) -> Result<Vec<Keyword>> {
        let allowed_pos = options.allowed_pos.clone();
        let keywords = match options.method {
            KeywordMethod::TfIdf => {
                self.tfidf
                    .extract_keywords(&self.jieba, text, options.top_k, allowed_pos)
            }
            KeywordMethod::TextRank => {
                self.textrank
                    .extract_keywords(&self.jieba, text, options.top_k, allowed_pos)
            }
        };

        Ok(keywords
            .into_iter()
            .map(|k| Keyword {
                keyword: k.keyword,
                weight: k.weight,
            })
            .collect())
    }
}

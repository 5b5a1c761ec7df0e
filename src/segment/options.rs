//! Options for the segmentation engine calls.

use serde::{Deserialize, Serialize};

/// Default number of keywords returned by extraction.
pub const DEFAULT_TOP_K: usize = 5;

/// Segmentation granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutMode {
    /// Most likely segmentation, one token per word.
    #[default]
    Precise,
    /// Precise segmentation plus the shorter dictionary words inside long
    /// words (tokens may overlap).
    Search,
    /// Every dictionary word found anywhere in the text.
    All,
}

/// Options for a single cut call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutOptions {
    /// Segmentation granularity.
    pub mode: CutMode,
    /// Use the HMM model to discover words missing from the dictionary.
    /// Ignored in [`CutMode::All`].
    pub hmm: bool,
}

impl Default for CutOptions {
    fn default() -> Self {
        Self {
            mode: CutMode::Precise,
            hmm: true,
        }
    }
}

impl CutOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search mode with HMM enabled.
    pub fn search() -> Self {
        Self {
            mode: CutMode::Search,
            hmm: true,
        }
    }

    /// Sets the segmentation mode.
    pub fn with_mode(mut self, mode: CutMode) -> Self {
        self.mode = mode;
        self
    }

    /// Disables HMM new-word discovery.
    pub fn without_hmm(mut self) -> Self {
        self.hmm = false;
        self
    }
}

/// Keyword ranking algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordMethod {
    /// Term frequency weighted by inverse document frequency.
    #[default]
    TfIdf,
    /// Graph ranking over co-occurring words.
    TextRank,
}

/// Options for keyword extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Maximum number of keywords returned.
    pub top_k: usize,
    /// Only keep words with these part-of-speech tags (empty = keep all).
    pub allowed_pos: Vec<String>,
    /// Ranking algorithm.
    pub method: KeywordMethod,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            allowed_pos: Vec::new(),
            method: KeywordMethod::TfIdf,
        }
    }
}

impl ExtractOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of keywords.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Restricts keywords to the given part-of-speech tags.
    pub fn with_allowed_pos<I, S>(mut self, pos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_pos = pos.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the ranking algorithm.
    pub fn with_method(mut self, method: KeywordMethod) -> Self {
        self.method = method;
        self
    }
}

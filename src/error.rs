//! Error types for hancut library.

use std::io;
use thiserror::Error;

/// Result type alias for hancut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hancut library.
///
/// Text normalization never fails; only calls into a segmentation engine
/// (and loading its dictionaries) can produce an error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a dictionary file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The segmentation engine rejected a user dictionary.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Any other failure reported by a segmentation engine.
    #[error("Segmenter error: {0}")]
    Segmenter(String),
}

impl From<jieba_rs::Error> for Error {
    fn from(err: jieba_rs::Error) -> Self {
        Error::Dictionary(err.to_string())
    }
}

//! Conventional composition of the normalizers and the segmenter.
//!
//! The units stay independently callable; this only fixes the usual order:
//! full-width conversion, then message cleaning, then segmentation.

use crate::clean::clean_message;
use crate::error::Result;
use crate::fullwidth::convert_full_width_char;
use crate::segment::{cut_with, default_segmenter, Segmenter};

/// Which stages [`process_message`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Convert full-width forms and CJK quotes to ASCII.
    pub convert_full_width: bool,
    /// Apply the punctuation rules of the message cleaner.
    pub clean: bool,
    /// Segment Chinese runs.
    pub segment: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            convert_full_width: true,
            clean: false,
            segment: true,
        }
    }
}

impl ProcessOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Segmentation only.
    pub fn minimal() -> Self {
        Self {
            convert_full_width: false,
            clean: false,
            segment: true,
        }
    }

    /// Every stage enabled.
    pub fn full() -> Self {
        Self {
            convert_full_width: true,
            clean: true,
            segment: true,
        }
    }

    /// Enables or disables full-width conversion.
    pub fn with_full_width(mut self, enabled: bool) -> Self {
        self.convert_full_width = enabled;
        self
    }

    /// Enables or disables message cleaning.
    pub fn with_clean(mut self, enabled: bool) -> Self {
        self.clean = enabled;
        self
    }

    /// Enables or disables segmentation.
    pub fn with_segment(mut self, enabled: bool) -> Self {
        self.segment = enabled;
        self
    }
}

/// Runs the enabled stages with the default jieba engine.
pub fn process_message(message: &str, options: &ProcessOptions) -> Result<String> {
    process_message_with(default_segmenter(), message, options)
}

/// Runs the enabled stages with the given engine.
pub fn process_message_with<S: Segmenter + ?Sized>(
    segmenter: &S,
    message: &str,
    options: &ProcessOptions,
) -> Result<String> {
    let mut result = message.to_string();

    if options.convert_full_width {
        result = convert_full_width_char(&result);
    }

    if options.clean {
        result = clean_message(&result);
    }

    if options.segment {
        result = cut_with(segmenter, &result)?;
    }

    Ok(result)
}

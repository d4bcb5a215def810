use thiserror::Error;

use crate::types::FormatTag;

/// Malformed text for the declared format.
///
/// `snippet` is an optional structured excerpt of the offending region
/// (source line plus a caret marker). When present it takes precedence over
/// the generic message for display.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ConvertError {
    pub message: String,
    pub snippet: Option<String>,
}

impl ConvertError {
    pub fn new(message: impl Into<String>) -> Self {
        ConvertError {
            message: message.into(),
            snippet: None,
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn unsupported(format: FormatTag) -> Self {
        ConvertError::new(format!("No converter registered for format: {format}"))
    }

    /// The most specific text available for display.
    pub fn display_message(&self) -> &str {
        self.snippet.as_deref().unwrap_or(&self.message)
    }
}

/// Bidirectional conversion between canonical JSON text and format-specific
/// text. Implementations must be pure with respect to the document: same
/// inputs, same outputs, no store access.
pub trait FormatConverter {
    fn to_canonical_json(&self, text: &str, format: FormatTag) -> Result<String, ConvertError>;

    fn from_canonical_json(&self, json: &str, format: FormatTag) -> Result<String, ConvertError>;
}

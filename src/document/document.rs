use serde::{Deserialize, Serialize};

use crate::types::{FileMeta, FormatTag};

/// Built-in example content used at startup and as the resolution fallback.
const DEFAULT_DOCUMENT: &str = r#"{
  "squadName": "Super hero squad",
  "homeTown": "Metro City",
  "formed": 2016,
  "active": true,
  "members": [
    {
      "name": "Molecule Man",
      "age": 29,
      "powers": ["Radiation resistance", "Turning tiny", "Radiation blast"]
    },
    {
      "name": "Madame Uppercut",
      "age": 39,
      "powers": ["Million tonne punch", "Damage resistance", "Superhuman reflexes"]
    }
  ]
}"#;

pub fn default_document() -> String {
    DEFAULT_DOCUMENT.to_string()
}

/// The single in-memory document the store owns.
///
/// Canonical JSON derived from `(raw_text, format)` is deliberately NOT a
/// field here: it is produced on demand and handed to the debounced sync,
/// so the content has exactly one source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// User-visible content, in `format`'s syntax.
    pub raw_text: String,
    pub format: FormatTag,
    /// Last conversion/fetch error message, if any.
    pub error: Option<String>,
    /// True once content diverges from the last-persisted/original state.
    pub has_changes: bool,
    /// Optional user-supplied schema, opaque to the core.
    pub schema: Option<serde_json::Value>,
    /// Present when the document was loaded from a named source.
    pub source_meta: Option<FileMeta>,
    /// Operation token. Bumped by every content-setting operation; multi-step
    /// operations capture it and discard a result the token outran.
    pub revision: u64,
}

impl Document {
    pub fn with_default_content() -> Self {
        Document {
            raw_text: default_document(),
            format: FormatTag::Json,
            error: None,
            has_changes: false,
            schema: None,
            source_meta: None,
            revision: 0,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::with_default_content()
    }
}

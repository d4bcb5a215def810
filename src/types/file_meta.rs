use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::format::FormatTag;

/// Metadata of a named source. Immutable once attached to a document;
/// replaced wholesale when a new named source is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    pub id: String,
    pub name: String,
    pub owner_email: String,
    pub views: u64,
    pub private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named source as handed to `ContentStore::set_file`: metadata plus the
/// stored content and its declared format (JSON when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    pub meta: FileMeta,
    pub format: Option<FormatTag>,
    pub content: String,
}

pub mod document;

pub use document::{default_document, Document};
pub use crate::types::{FileMeta, SourceFile};

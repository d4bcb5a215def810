pub mod file_meta;
pub mod format;

pub use file_meta::{FileMeta, SourceFile};
pub use format::{FormatTag, FormatTagParseError};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serialization format of a document's raw text. JSON is the canonical
/// format every other format converts through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    #[default]
    Json,
    Yaml,
    Toml,
    Xml,
    Csv,
}

#[derive(Debug, Error)]
#[error("Unknown format tag: {0}")]
pub struct FormatTagParseError(String);

impl FormatTag {
    pub const ALL: [FormatTag; 5] = [
        FormatTag::Json,
        FormatTag::Yaml,
        FormatTag::Toml,
        FormatTag::Xml,
        FormatTag::Csv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Json => "json",
            FormatTag::Yaml => "yaml",
            FormatTag::Toml => "toml",
            FormatTag::Xml => "xml",
            FormatTag::Csv => "csv",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatTag {
    type Err = FormatTagParseError;

    /// Parse the persisted string form. Must stay the inverse of `as_str`
    /// for session round-trips.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(FormatTag::Json),
            "yaml" => Ok(FormatTag::Yaml),
            "toml" => Ok(FormatTag::Toml),
            "xml" => Ok(FormatTag::Xml),
            "csv" => Ok(FormatTag::Csv),
            other => Err(FormatTagParseError(other.to_string())),
        }
    }
}

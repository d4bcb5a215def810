use crate::types::FormatTag;

use super::contract::{ConvertError, FormatConverter};

/// Converter for the canonical format itself: validates the text as JSON and
/// re-serializes it pretty-printed. Any other tag is rejected; textual
/// converters for the remaining formats live outside this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl JsonConverter {
    fn normalize(text: &str) -> Result<String, ConvertError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|err| syntax_error(text, &err))?;
        serde_json::to_string_pretty(&value).map_err(|err| ConvertError::new(err.to_string()))
    }
}

impl FormatConverter for JsonConverter {
    fn to_canonical_json(&self, text: &str, format: FormatTag) -> Result<String, ConvertError> {
        if format != FormatTag::Json {
            return Err(ConvertError::unsupported(format));
        }
        Self::normalize(text)
    }

    fn from_canonical_json(&self, json: &str, format: FormatTag) -> Result<String, ConvertError> {
        if format != FormatTag::Json {
            return Err(ConvertError::unsupported(format));
        }
        Self::normalize(json)
    }
}

fn syntax_error(text: &str, err: &serde_json::Error) -> ConvertError {
    let error = ConvertError::new(err.to_string());
    match syntax_snippet(text, err.line(), err.column()) {
        Some(snippet) => error.with_snippet(snippet),
        None => error,
    }
}

/// Offending source line with a caret under the reported column.
fn syntax_snippet(text: &str, line: usize, column: usize) -> Option<String> {
    let source = text.lines().nth(line.checked_sub(1)?)?;
    let caret = format!("{}^", " ".repeat(column.saturating_sub(1)));
    Some(format!("{source}\n{caret}"))
}

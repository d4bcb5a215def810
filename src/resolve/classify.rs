use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Scheme-qualified or bare `www.`-prefixed host, followed by at least two
/// non-whitespace characters after the dot. Unanchored: a token that merely
/// contains a URL counts as URL-shaped.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://(?:www\.)?|www\.)[A-Za-z0-9][A-Za-z0-9-]*\.\S{2,}")
        .expect("URL pattern is a valid regex")
});

/// Outcome of classifying the startup input token. First match wins, and a
/// token that is both URL-shaped and JSON-literal-shaped resolves as a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Fetch this URL and use the response body.
    RemoteUrl(String),
    /// A percent-decoded, validated JSON literal; use it directly.
    InlineLiteral(String),
    /// Neither shape matched; fall back to the saved session or the default.
    Fallback,
}

/// Classify an ambiguous startup token. Pure: no fetching, no store access.
///
/// A token that is JSON-shaped but does not parse degrades to `Fallback`
/// with a diagnostic; it never fails the resolution.
pub fn classify(token: Option<&str>) -> Classified {
    let Some(token) = token else {
        return Classified::Fallback;
    };
    if token.is_empty() {
        return Classified::Fallback;
    }

    if URL_PATTERN.is_match(token) {
        return Classified::RemoteUrl(token.to_string());
    }

    let Some(decoded) = percent_decode(token) else {
        debug!(token, "startup token is not percent-decodable");
        return Classified::Fallback;
    };

    let trimmed = decoded.trim();
    let bracket_delimited = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if bracket_delimited {
        match serde_json::from_str::<serde_json::Value>(&decoded) {
            Ok(_) => return Classified::InlineLiteral(decoded),
            Err(err) => {
                debug!(%err, "startup token is JSON-shaped but does not parse")
            }
        }
    }

    Classified::Fallback
}

/// Decode `%XX` escapes. Returns None on a truncated or non-hex escape, or
/// when the decoded bytes are not UTF-8. `+` is left as-is.
fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = hex_digit(*bytes.get(i + 1)?)?;
            let lo = hex_digit(*bytes.get(i + 2)?)?;
            out.push(hi * 16 + lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

use thiserror::Error;
use tracing::warn;

use crate::document::default_document;
use crate::store::{ContentStore, ContentUpdate};

use super::classify::{classify, Classified};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Transport(String),
    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Network collaborator: one fetch returning the response body as text.
pub trait Fetcher {
    fn fetch(&mut self, url: &str) -> Result<String, FetchError>;
}

/// Transient user notification sink.
pub trait Notifier {
    fn notify_error(&mut self, message: &str);
}

/// Startup input token supplied by the host, typically a URL query value.
/// Only the first element of a list is used.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StartupInput {
    #[default]
    None,
    Token(String),
    Tokens(Vec<String>),
}

impl StartupInput {
    pub fn first(&self) -> Option<&str> {
        match self {
            StartupInput::None => None,
            StartupInput::Token(token) => Some(token),
            StartupInput::Tokens(tokens) => tokens.first().map(String::as_str),
        }
    }
}

impl From<Option<String>> for StartupInput {
    fn from(token: Option<String>) -> Self {
        match token {
            Some(token) => StartupInput::Token(token),
            None => StartupInput::None,
        }
    }
}

impl From<&str> for StartupInput {
    fn from(token: &str) -> Self {
        StartupInput::Token(token.to_string())
    }
}

impl From<Vec<String>> for StartupInput {
    fn from(tokens: Vec<String>) -> Self {
        StartupInput::Tokens(tokens)
    }
}

/// Resolves the startup input into the document's initial content.
///
/// Runs once at startup and drives the store: remote URL, inline JSON
/// literal, then saved session or built-in default, first match wins.
pub struct SourceResolver<F, N> {
    fetcher: F,
    notifier: N,
}

impl<F, N> SourceResolver<F, N>
where
    F: Fetcher,
    N: Notifier,
{
    pub fn new(fetcher: F, notifier: N) -> Self {
        SourceResolver { fetcher, notifier }
    }

    pub fn resolve(&mut self, store: &mut ContentStore, input: &StartupInput, widget_mode: bool) {
        match classify(input.first()) {
            Classified::RemoteUrl(url) => self.load_remote(store, &url),
            Classified::InlineLiteral(text) => {
                store.set_contents(ContentUpdate::with_text(text).clean());
            }
            Classified::Fallback => Self::load_fallback(store, widget_mode),
        }
    }

    /// Fetch, parse as JSON, pretty-print. Failure clears the document and
    /// raises a transient notice; no further fallback is attempted.
    fn load_remote(&mut self, store: &mut ContentStore, url: &str) {
        let fetched = self.fetcher.fetch(url).and_then(|body| {
            let value: serde_json::Value = serde_json::from_str(&body)?;
            serde_json::to_string_pretty(&value).map_err(FetchError::from)
        });
        match fetched {
            Ok(text) => store.set_contents(ContentUpdate::with_text(text)),
            Err(err) => {
                warn!(%err, url, "remote document could not be loaded");
                store.clear();
                self.notifier.notify_error("Failed to fetch document from URL!");
            }
        }
    }

    fn load_fallback(store: &mut ContentStore, widget_mode: bool) {
        let saved = store.restored_session();
        let update = match saved {
            Some(session) if !widget_mode => {
                ContentUpdate::with_text(session.text).in_format(session.format)
            }
            _ => ContentUpdate::with_text(default_document()),
        };
        store.set_contents(update.clean());
    }

    pub fn into_parts(self) -> (F, N) {
        (self.fetcher, self.notifier)
    }
}

use tracing::debug;

use crate::types::FormatTag;

use super::storage::SessionStorage;

pub const CONTENT_KEY: &str = "content";
pub const FORMAT_KEY: &str = "format";

/// Documents at or above this many characters are not persisted.
pub const PERSIST_LIMIT: usize = 80_000;

/// What the host runtime knows about where and how it is running.
pub trait Environment {
    /// True inside a restrictive embedded frame where persistent storage
    /// access is disallowed or untrustworthy.
    fn is_embedded_frame(&self) -> bool;

    /// True when the current navigation carries explicit query parameters.
    /// A query-driven load is transient and must not overwrite session state.
    fn has_query_params(&self) -> bool;
}

/// A top-level host with a plain navigation context.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandaloneEnvironment;

impl Environment for StandaloneEnvironment {
    fn is_embedded_frame(&self) -> bool {
        false
    }

    fn has_query_params(&self) -> bool {
        false
    }
}

/// A previously saved `(text, format)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedSession {
    pub text: String,
    pub format: FormatTag,
}

/// Best-effort durability of `(raw_text, format)` within one client session.
///
/// Saves are silently skipped when the content is too large, the runtime is
/// embedded, or the navigation is query-driven. Storage failures are absorbed
/// in both directions and never surfaced to the user.
pub struct SessionPersistence {
    storage: Box<dyn SessionStorage>,
    env: Box<dyn Environment>,
    limit: usize,
}

impl SessionPersistence {
    pub fn new(storage: Box<dyn SessionStorage>, env: Box<dyn Environment>) -> Self {
        SessionPersistence {
            storage,
            env,
            limit: PERSIST_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn save(&mut self, text: &str, format: FormatTag) {
        if text.chars().count() >= self.limit {
            return;
        }
        if self.env.is_embedded_frame() || self.env.has_query_params() {
            return;
        }
        let written = self
            .storage
            .set(CONTENT_KEY, text)
            .and_then(|()| self.storage.set(FORMAT_KEY, format.as_str()));
        if let Err(err) = written {
            debug!(%err, "session save skipped");
        }
    }

    /// The saved pair, or None when nothing usable is stored. A missing or
    /// unparseable format tag invalidates the whole pair.
    pub fn restore(&self) -> Option<SavedSession> {
        let text = self.storage.get(CONTENT_KEY).ok().flatten()?;
        let format = self.storage.get(FORMAT_KEY).ok().flatten()?;
        let format = match format.parse::<FormatTag>() {
            Ok(format) => format,
            Err(err) => {
                debug!(%err, "discarding saved session");
                return None;
            }
        };
        Some(SavedSession { text, format })
    }
}

impl std::fmt::Debug for SessionPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionPersistence")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

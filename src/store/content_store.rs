use tracing::{debug, warn};

use crate::convert::FormatConverter;
use crate::document::Document;
use crate::session::{SavedSession, SessionPersistence};
use crate::sync::{Clock, Consumer, DebouncedSync};
use crate::types::{FileMeta, FormatTag, SourceFile};

use super::config::StoreConfig;

/// Arguments to `ContentStore::set_contents`. `text` and `format` omitted
/// means "re-validate what is already there".
#[derive(Debug, Clone, PartialEq)]
pub struct ContentUpdate {
    pub text: Option<String>,
    pub has_changes: bool,
    pub skip_downstream: bool,
    pub format: Option<FormatTag>,
}

impl Default for ContentUpdate {
    fn default() -> Self {
        ContentUpdate {
            text: None,
            has_changes: true,
            skip_downstream: false,
            format: None,
        }
    }
}

impl ContentUpdate {
    pub fn with_text(text: impl Into<String>) -> Self {
        ContentUpdate {
            text: Some(text.into()),
            ..ContentUpdate::default()
        }
    }

    /// Mark the update as a fresh load: the document starts "clean".
    pub fn clean(mut self) -> Self {
        self.has_changes = false;
        self
    }

    pub fn in_format(mut self, format: FormatTag) -> Self {
        self.format = Some(format);
        self
    }

    pub fn skipping_downstream(mut self) -> Self {
        self.skip_downstream = true;
        self
    }
}

/// Owner of the document and the only mutation path to it.
///
/// Every content or format change flows through here: the store invokes the
/// converter, persists the session best-effort, and schedules the debounced
/// downstream update. Conversion errors are always recovered locally; no
/// operation returns a failure to the caller or leaves the document in a
/// mixed `raw_text`/`format` state.
pub struct ContentStore {
    document: Document,
    converter: Box<dyn FormatConverter>,
    sync: DebouncedSync,
    session: SessionPersistence,
    clock: Box<dyn Clock>,
    config: StoreConfig,
}

impl ContentStore {
    pub fn new(
        converter: Box<dyn FormatConverter>,
        consumer: Box<dyn Consumer>,
        session: SessionPersistence,
        clock: Box<dyn Clock>,
        config: StoreConfig,
    ) -> Self {
        let sync = DebouncedSync::new(consumer, config.debounce_window);
        ContentStore {
            document: Document::with_default_content(),
            converter,
            sync,
            session,
            clock,
            config,
        }
    }

    /// Apply a content and/or format update.
    ///
    /// On conversion success the error field is cleared, the session is
    /// persisted (subject to the session layer's gates), and canonical JSON
    /// is handed to the debouncer. On failure the previous valid state is
    /// restored, the error is surfaced, and the consumer's loading flag is
    /// reset directly.
    pub fn set_contents(&mut self, update: ContentUpdate) {
        let prev_text = self.document.raw_text.clone();
        let prev_format = self.document.format;
        let prev_changes = self.document.has_changes;

        if let Some(text) = update.text {
            self.document.raw_text = text;
        }
        if let Some(format) = update.format {
            self.document.format = format;
        }
        self.document.error = None;
        self.document.has_changes = update.has_changes;
        self.document.revision += 1;

        let converted = self
            .converter
            .to_canonical_json(&self.document.raw_text, self.document.format);

        match converted {
            Ok(json) => {
                if self.document.has_changes {
                    self.session
                        .save(&self.document.raw_text, self.document.format);
                }
                if update.skip_downstream && !self.config.live_convert {
                    return;
                }
                self.sync.schedule(json, self.clock.now());
            }
            Err(err) => {
                self.document.raw_text = prev_text;
                self.document.format = prev_format;
                self.document.has_changes = prev_changes;
                self.document.error = Some(err.display_message().to_string());
                self.sync.finish_loading();
            }
        }
    }

    /// Change the document's format, converting the content along.
    ///
    /// All-or-nothing: on any conversion failure the entire document is
    /// cleared rather than left with text in one format and the tag in
    /// another. The requested format is kept either way.
    pub fn set_format(&mut self, format: FormatTag) {
        let prev_format = self.document.format;
        self.document.format = format;

        let revision = self.document.revision;
        let converted = self
            .converter
            .to_canonical_json(&self.document.raw_text, prev_format)
            .and_then(|json| self.converter.from_canonical_json(&json, format));

        if self.document.revision != revision {
            debug!("format change superseded by a newer operation; discarding result");
            return;
        }

        match converted {
            Ok(text) => {
                self.set_contents(ContentUpdate::with_text(text));
                if self.document.error.is_some() {
                    warn!("converted content failed re-validation; clearing document");
                    self.clear();
                    self.document.error = None;
                }
            }
            Err(err) => {
                warn!(error = %err, "content could not be converted, so it was cleared instead");
                self.clear();
            }
        }
    }

    /// Replace the document wholesale with a named source. A freshly loaded
    /// named document starts clean.
    pub fn set_file(&mut self, file: SourceFile) {
        let SourceFile {
            meta,
            format,
            content,
        } = file;
        self.document.source_meta = Some(meta);
        self.set_contents(
            ContentUpdate::with_text(content)
                .in_format(format.unwrap_or_default())
                .clean(),
        );
    }

    /// Empty the raw text and clear the canonical side downstream. Format
    /// and source metadata are kept.
    pub fn clear(&mut self) {
        self.document.raw_text.clear();
        self.document.revision += 1;
        self.sync.reset();
    }

    pub fn set_json_schema(&mut self, schema: Option<serde_json::Value>) {
        self.document.schema = schema;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.document.error = error;
    }

    pub fn set_has_changes(&mut self, has_changes: bool) {
        self.document.has_changes = has_changes;
    }

    /// Drive the debounce timer. The host's event loop calls this; a pending
    /// canonical update is delivered once its quiet window has elapsed.
    pub fn pump(&mut self) -> bool {
        self.sync.poll(self.clock.now())
    }

    pub(crate) fn restored_session(&self) -> Option<SavedSession> {
        self.session.restore()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn contents(&self) -> &str {
        &self.document.raw_text
    }

    pub fn format(&self) -> FormatTag {
        self.document.format
    }

    pub fn has_changes(&self) -> bool {
        self.document.has_changes
    }

    pub fn error(&self) -> Option<&str> {
        self.document.error.as_deref()
    }

    pub fn schema(&self) -> Option<&serde_json::Value> {
        self.document.schema.as_ref()
    }

    pub fn source_meta(&self) -> Option<&FileMeta> {
        self.document.source_meta.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.document.revision
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("document", &self.document)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

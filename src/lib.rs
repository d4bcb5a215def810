//! Document content lifecycle engine for format-aware editors.
//!
//! `content-core` owns a single in-memory document: it resolves the initial
//! content from ambiguous startup input (remote URL, inline JSON literal,
//! restored session), keeps raw text and format consistent through edits and
//! format changes, and propagates canonical JSON to a downstream renderer
//! under a debounced, error-tolerant protocol. Conversion and fetch failures
//! degrade to a consistent document state; they never escape to the caller.
//!
//! See <https://github.com/contentenginehq/content-engine> for the full platform.

pub mod convert;
pub mod document;
pub mod resolve;
pub mod session;
pub mod store;
pub mod sync;
pub mod types;

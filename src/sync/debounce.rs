use tracing::trace;

use super::consumer::Consumer;

/// Default quiet window, in clock ticks.
pub const DEFAULT_QUIET_WINDOW: u64 = 400;

/// Trailing-edge debounce between the store and the consumer.
///
/// `schedule` flips the consumer's loading flag true synchronously and arms
/// (or rearms) the quiet window; `poll` delivers once the window has elapsed
/// with no newer schedule. At most one value is ever pending: a later
/// schedule supersedes an earlier one, it is never queued behind it, so
/// deliveries are strictly ordered by schedule time.
pub struct DebouncedSync {
    consumer: Box<dyn Consumer>,
    window: u64,
    pending: Option<String>,
    due_at: Option<u64>,
}

impl DebouncedSync {
    pub fn new(consumer: Box<dyn Consumer>, window: u64) -> Self {
        DebouncedSync {
            consumer,
            window,
            pending: None,
            due_at: None,
        }
    }

    pub fn schedule(&mut self, json: String, now: u64) {
        self.consumer.set_loading(true);
        if self.pending.is_some() {
            trace!("superseding pending canonical update");
        }
        self.pending = Some(json);
        self.due_at = Some(now + self.window);
    }

    /// Deliver the pending value if its window has elapsed. Returns whether
    /// a delivery happened.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.due_at {
            Some(due) if now >= due => {
                self.due_at = None;
                match self.pending.take() {
                    Some(json) => {
                        self.consumer.set_canonical_json(&json);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Reset the loading flag directly, bypassing the window. Used on the
    /// conversion-failure path so the UI is never left spinning.
    pub fn finish_loading(&mut self) {
        self.consumer.set_loading(false);
    }

    /// Drop any pending value and clear the canonical side downstream.
    pub fn reset(&mut self) {
        self.pending = None;
        self.due_at = None;
        self.consumer.set_canonical_json("");
        self.consumer.set_loading(false);
    }
}

impl std::fmt::Debug for DebouncedSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncedSync")
            .field("window", &self.window)
            .field("pending", &self.pending.is_some())
            .field("due_at", &self.due_at)
            .finish_non_exhaustive()
    }
}

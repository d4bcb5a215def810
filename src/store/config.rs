use crate::sync::DEFAULT_QUIET_WINDOW;

/// Host-tunable knobs for the store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoreConfig {
    /// Quiet window for downstream propagation, in clock ticks.
    pub debounce_window: u64,
    /// While enabled, every successful conversion reaches the consumer even
    /// when the caller asked to skip the downstream update.
    pub live_convert: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            debounce_window: DEFAULT_QUIET_WINDOW,
            live_convert: true,
        }
    }
}

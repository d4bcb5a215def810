pub mod clock;
pub mod consumer;
pub mod debounce;

pub use clock::{Clock, TickClock};
pub use consumer::Consumer;
pub use debounce::{DebouncedSync, DEFAULT_QUIET_WINDOW};

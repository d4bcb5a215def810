use std::time::Instant;

/// Monotonic tick source for the debounce window. Injected so tests can
/// drive time deterministically.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Wall-clock ticks (milliseconds since construction).
#[derive(Debug)]
pub struct TickClock {
    started: Instant,
}

impl TickClock {
    pub fn new() -> Self {
        TickClock {
            started: Instant::now(),
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        TickClock::new()
    }
}

impl Clock for TickClock {
    fn now(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

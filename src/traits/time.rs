/// Abstraction over time sources.
/// Implementations: SystemTimeProvider (production), MockTimeProvider (testing).
pub trait TimeProvider {
    /// Milliseconds elapsed since the provider's origin (the kit's load event).
    fn now_ms(&self) -> u64;
}

/// Wall clock anchored at construction time.
pub struct SystemTimeProvider {
    origin: std::time::Instant,
}

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }

    /// Move the origin to now. Called right before the load event.
    pub fn rebase(&mut self) {
        self.origin = std::time::Instant::now();
    }
}

impl Default for SystemTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for SystemTimeProvider {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock for deterministic testing.
pub struct MockTimeProvider {
    current_ms: std::cell::Cell<u64>,
}

impl MockTimeProvider {
    pub fn new() -> Self {
        Self {
            current_ms: std::cell::Cell::new(0),
        }
    }

    pub fn set_time(&self, ms: u64) {
        self.current_ms.set(ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.current_ms.set(self.current_ms.get() + delta_ms);
    }
}

impl Default for MockTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_ms(&self) -> u64 {
        self.current_ms.get()
    }
}

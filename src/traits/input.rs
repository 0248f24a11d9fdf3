use crate::kit::KeyCode;

/// A key-down delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: KeyCode,
    /// Timestamp in milliseconds from load.
    pub time_ms: u64,
}

impl KeyEvent {
    pub fn new(key_code: KeyCode, time_ms: u64) -> Self {
        Self { key_code, time_ms }
    }
}

/// Abstraction over input sources.
/// Implementations: KeyboardInput (macroquad), ScriptedInput (testing).
pub trait InputProvider {
    /// Key-down events that happened at or before `now_ms` and were not yet returned.
    fn poll_events(&mut self, now_ms: u64) -> Vec<KeyEvent>;

    /// Whether the host asked to close the kit.
    fn quit_requested(&self) -> bool {
        false
    }
}

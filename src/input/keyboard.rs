use macroquad::prelude::{KeyCode as NativeKey, get_keys_pressed, is_key_pressed, is_quit_requested};

use super::key_map::key_code;
use crate::traits::input::{InputProvider, KeyEvent};

/// Keyboard input handler using macroquad.
pub struct KeyboardInput;

impl KeyboardInput {
    /// Create a new keyboard input handler.
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for KeyboardInput {
    /// Keys pressed since the previous frame, in no meaningful order (see
    /// `frame_events`). Auto-repeat of a held key is not reported.
    fn poll_events(&mut self, now_ms: u64) -> Vec<KeyEvent> {
        frame_events(get_keys_pressed(), now_ms)
    }

    /// Escape, or the window's close button when `prevent_quit` is active.
    fn quit_requested(&self) -> bool {
        is_key_pressed(NativeKey::Escape) || is_quit_requested()
    }
}

/// Key-downs for one frame. The input set carries no press order, so the
/// result is sorted by key code. Escape is reserved for quitting.
fn frame_events(keys: impl IntoIterator<Item = NativeKey>, now_ms: u64) -> Vec<KeyEvent> {
    let mut events: Vec<KeyEvent> = keys
        .into_iter()
        .filter(|key| *key != NativeKey::Escape)
        .filter_map(key_code)
        .map(|code| KeyEvent::new(code, now_ms))
        .collect();
    events.sort_by_key(|e| e.key_code);
    events
}

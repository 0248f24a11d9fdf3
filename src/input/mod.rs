//! Keyboard input using macroquad.
//!
//! This module provides:
//! - [`KeyboardInput`]: Window key-downs as [`KeyEvent`](crate::traits::input::KeyEvent)s
//! - [`key_code`]: Window key to numeric key code translation

mod key_map;
mod keyboard;

pub use key_map::key_code;
pub use keyboard::KeyboardInput;

//! Seams between the drum kit logic and its host.
//!
//! Each trait has a production implementation and a test double:
//! - [`audio::AudioBackend`]: `AudioDriver` (kira), `MockAudio` (testing)
//! - [`input::InputProvider`]: `KeyboardInput` (macroquad), `ScriptedInput` (testing)
//! - [`time::TimeProvider`]: `SystemTimeProvider`, `MockTimeProvider`

pub mod audio;
pub mod input;
pub mod time;

//! Drum kit core: bindings, indicators, timers and the two behaviors.
//!
//! This module provides:
//! - [`KitDefinition`]: Declarative list of sounds and pads, loaded from JSON
//! - [`KitRegistry`]: Key code to {sound, indicator} lookup built once at startup
//! - [`IndicatorBoard`]: Ordered pad indicators with highlight/visible markers
//! - [`TimerQueue`]: Cancellable one-shot timers fired by the frame loop
//! - [`KeyPressPlayer`]: Plays the sample and pulses the pad on key-down
//! - [`EntranceAnimator`]: Reveals pads one after another on load

mod animator;
mod definition;
mod error;
mod indicator;
mod key_code;
mod player;
mod registry;
mod timer;

pub use animator::{AnimatorState, EntranceAnimator};
pub use definition::{KitDefinition, PadSpec, SoundSpec};
pub use error::KitError;
pub use indicator::{Indicator, IndicatorBoard, IndicatorId};
pub use key_code::KeyCode;
pub use player::{KeyOutcome, KeyPressPlayer};
pub use registry::{KitRegistry, MappingPolicy, PadEntry, SoundSlot};
pub use timer::{TimerAction, TimerId, TimerQueue};

/// Highlight pulse length in milliseconds.
pub const DEFAULT_HIGHLIGHT_MS: u64 = 100;
/// Delay between two entrance reveals in milliseconds.
pub const DEFAULT_REVEAL_STEP_MS: u64 = 100;
/// Fixed startup delay before key-downs are handled.
pub const DEFAULT_INPUT_DELAY_MS: u64 = 1200;

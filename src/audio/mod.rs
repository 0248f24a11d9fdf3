//! Audio subsystem using kira.
//!
//! This module provides:
//! - [`AudioDriver`]: kira-backed [`AudioBackend`](crate::traits::audio::AudioBackend)
//! - [`SoundPool`]: Caches loaded samples by path
//! - [`AudioConfig`]: Volume settings

mod audio_config;
mod audio_driver;
mod sound_pool;

pub use audio_config::AudioConfig;
pub use audio_driver::AudioDriver;
pub use sound_pool::SoundPool;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::AudioConfig;
use crate::kit::{
    DEFAULT_HIGHLIGHT_MS, DEFAULT_INPUT_DELAY_MS, DEFAULT_REVEAL_STEP_MS, EntranceAnimator,
    MappingPolicy,
};

pub const CONFIG_FILE: &str = "drumkit.json";

/// When key-downs start being handled after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputDelay {
    /// Immediately.
    None,
    /// After a constant number of milliseconds.
    Fixed(u64),
    /// After the entrance animation: pad count × reveal step.
    Derived,
}

impl Default for InputDelay {
    fn default() -> Self {
        Self::Fixed(DEFAULT_INPUT_DELAY_MS)
    }
}

impl InputDelay {
    /// Delay after load, or `None` when input is enabled at load.
    pub fn delay_ms(self, pad_count: usize, reveal_step_ms: u64) -> Option<u64> {
        match self {
            Self::None => None,
            Self::Fixed(ms) => Some(ms),
            Self::Derived => Some(EntranceAnimator::total_duration_ms(
                pad_count,
                reveal_step_ms,
            )),
        }
    }
}

/// Timing and mapping knobs consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KitSettings {
    pub highlight_ms: u64,
    pub reveal_step_ms: u64,
    pub input_delay: InputDelay,
    pub mapping_policy: MappingPolicy,
    pub volume: f32,
}

impl Default for KitSettings {
    fn default() -> Self {
        AppConfig::default().kit_settings()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub fullscreen: bool,
    /// Kit definition file; the built-in kit is used when absent.
    pub kit_path: Option<PathBuf>,
    pub highlight_ms: u64,
    pub reveal_step_ms: u64,
    /// Fade-in length of a revealed pad (drawing only).
    pub fade_ms: u64,
    pub input_delay: InputDelay,
    pub mapping_policy: MappingPolicy,
    pub audio: AudioConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fullscreen: false,
            kit_path: None,
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
            reveal_step_ms: DEFAULT_REVEAL_STEP_MS,
            fade_ms: 400,
            input_delay: InputDelay::default(),
            mapping_policy: MappingPolicy::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads config from the default config file.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads config from a specified path.
    /// Returns default config if file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Saves config to a specified path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn kit_settings(&self) -> KitSettings {
        KitSettings {
            highlight_ms: self.highlight_ms,
            reveal_step_ms: self.reveal_step_ms,
            input_delay: self.input_delay,
            mapping_policy: self.mapping_policy,
            volume: self.audio.volume(),
        }
    }
}

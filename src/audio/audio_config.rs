use serde::{Deserialize, Serialize};

/// Audio system configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Master volume (0.0 - 1.0) applied to every sample.
    pub master_volume: f32,
}

impl AudioConfig {
    /// Master volume clamped into range.
    pub fn volume(&self) -> f32 {
        self.master_volume.clamp(0.0, 1.0)
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { master_volume: 1.0 }
    }
}

//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};

use anyhow::Result;
use drumkit::traits::audio::{AudioBackend, SoundId};

/// Audio backend recording which sample was restarted when.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    paths: Vec<PathBuf>,
    pub restarts: Vec<SoundId>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name(&self, id: SoundId) -> Option<String> {
        self.paths
            .get(id.0 as usize)
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }

    pub fn restarted_files(&self) -> Vec<String> {
        self.restarts
            .iter()
            .filter_map(|id| self.file_name(*id))
            .collect()
    }
}

impl AudioBackend for RecordingAudio {
    fn load_sound(&mut self, path: &Path) -> Result<SoundId> {
        self.paths.push(path.to_path_buf());
        Ok(SoundId(self.paths.len() as u64 - 1))
    }

    fn instance(&mut self, id: SoundId) -> Result<SoundId> {
        let path = self.paths[id.0 as usize].clone();
        self.load_sound(&path)
    }

    fn restart(&mut self, id: SoundId) -> Result<()> {
        self.restarts.push(id);
        Ok(())
    }

    fn stop(&mut self, _id: SoundId) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, _id: SoundId, _volume: f32) -> Result<()> {
        Ok(())
    }

    fn dispose(&mut self) -> Result<()> {
        Ok(())
    }
}

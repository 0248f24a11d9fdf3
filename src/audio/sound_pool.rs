use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::Result;

use crate::traits::audio::{AudioBackend, SoundId};

/// Caches loaded samples by their file path so two keys sharing a sample
/// load it once. Wraps an AudioBackend.
pub struct SoundPool<A: AudioBackend> {
    backend: A,
    /// Cache from canonical path string to SoundId.
    cache: HashMap<String, SoundId>,
    /// Cached IDs already handed out by `load_instance`.
    claimed: HashSet<SoundId>,
}

impl<A: AudioBackend> SoundPool<A> {
    /// Create a new SoundPool wrapping the given backend.
    pub fn new(backend: A) -> Self {
        Self {
            backend,
            cache: HashMap::new(),
            claimed: HashSet::new(),
        }
    }

    /// Load a sample, returning the cached ID if already loaded.
    pub fn load(&mut self, path: &Path) -> Result<SoundId> {
        let key = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf())
            .to_string_lossy()
            .to_string();
        if let Some(&id) = self.cache.get(&key) {
            return Ok(id);
        }
        let id = self.backend.load_sound(path)?;
        self.cache.insert(key, id);
        Ok(id)
    }

    /// Load a sample for a single key. Keys using the same file share the
    /// decoded data but each gets its own handle.
    pub fn load_instance(&mut self, path: &Path) -> Result<SoundId> {
        let shared = self.load(path)?;
        if self.claimed.insert(shared) {
            return Ok(shared);
        }
        self.backend.instance(shared)
    }

    /// Play a loaded sample from offset zero.
    pub fn restart(&mut self, id: SoundId) -> Result<()> {
        self.backend.restart(id)
    }

    pub fn stop(&mut self, id: SoundId) -> Result<()> {
        self.backend.stop(id)
    }

    pub fn set_volume(&mut self, id: SoundId, volume: f32) -> Result<()> {
        self.backend.set_volume(id, volume)
    }

    /// Number of cached samples.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Clear all cached samples and dispose the backend.
    pub fn dispose(&mut self) -> Result<()> {
        self.cache.clear();
        self.claimed.clear();
        self.backend.dispose()
    }

    /// Get a reference to the underlying backend.
    pub fn backend(&self) -> &A {
        &self.backend
    }
}

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Result, anyhow};
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::{AudioManager, AudioManagerSettings, Decibels, DefaultBackend, Tween};

use crate::traits::audio::{AudioBackend, SoundId};

/// Below this level kira treats a sound as silent.
const SILENCE_DB: f32 = -60.0;

/// Audio driver backed by kira for low-latency playback.
pub struct AudioDriver {
    manager: AudioManager<DefaultBackend>,
    /// Loaded sound data keyed by SoundId.
    sounds: HashMap<u64, StaticSoundData>,
    /// Playback volume (0.0..=1.0) keyed by SoundId.
    volumes: HashMap<u64, f32>,
    /// The latest playback instance of each sound.
    handles: HashMap<u64, StaticSoundHandle>,
    /// Next sound ID to assign.
    next_id: u64,
}

impl AudioDriver {
    /// Create a new audio driver on the default output device.
    pub fn new() -> Result<Self> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| anyhow!("Failed to create audio manager: {e}"))?;
        Ok(Self {
            manager,
            sounds: HashMap::new(),
            volumes: HashMap::new(),
            handles: HashMap::new(),
            next_id: 1,
        })
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn immediately() -> Tween {
    Tween {
        duration: Duration::ZERO,
        ..Default::default()
    }
}

/// Linear amplitude (0.0..=1.0) to decibels.
fn amplitude_to_db(volume: f32) -> f32 {
    if volume <= 0.0 {
        SILENCE_DB
    } else {
        (20.0 * volume.log10()).max(SILENCE_DB)
    }
}

impl AudioBackend for AudioDriver {
    fn load_sound(&mut self, path: &Path) -> Result<SoundId> {
        let data = StaticSoundData::from_file(path)
            .map_err(|e| anyhow!("Failed to load sound {}: {e}", path.display()))?;
        let id = self.alloc_id();
        self.sounds.insert(id, data);
        Ok(SoundId(id))
    }

    fn instance(&mut self, id: SoundId) -> Result<SoundId> {
        // StaticSoundData clones share their frames.
        let data = self
            .sounds
            .get(&id.0)
            .ok_or_else(|| anyhow!("Sound not found: {:?}", id))?
            .clone();
        let instance = self.alloc_id();
        self.sounds.insert(instance, data);
        Ok(SoundId(instance))
    }

    fn restart(&mut self, id: SoundId) -> Result<()> {
        let data = self
            .sounds
            .get(&id.0)
            .ok_or_else(|| anyhow!("Sound not found: {:?}", id))?
            .clone();
        if let Some(mut previous) = self.handles.remove(&id.0) {
            previous.stop(immediately());
        }
        let volume = self.volumes.get(&id.0).copied().unwrap_or(1.0);
        let handle = self
            .manager
            .play(data.volume(Decibels(amplitude_to_db(volume))))
            .map_err(|e| anyhow!("Failed to play sound: {e}"))?;
        self.handles.insert(id.0, handle);
        Ok(())
    }

    fn stop(&mut self, id: SoundId) -> Result<()> {
        if let Some(mut handle) = self.handles.remove(&id.0) {
            handle.stop(Default::default());
        }
        Ok(())
    }

    fn set_volume(&mut self, id: SoundId, volume: f32) -> Result<()> {
        if !self.sounds.contains_key(&id.0) {
            return Err(anyhow!("Sound not found: {:?}", id));
        }
        self.volumes.insert(id.0, volume.clamp(0.0, 1.0));
        Ok(())
    }

    fn dispose(&mut self) -> Result<()> {
        for (_, mut handle) in self.handles.drain() {
            handle.stop(Default::default());
        }
        self.sounds.clear();
        self.volumes.clear();
        Ok(())
    }
}

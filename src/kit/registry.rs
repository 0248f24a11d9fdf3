use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Indicator, IndicatorBoard, IndicatorId, KeyCode, KitDefinition, KitError};
use crate::audio::SoundPool;
use crate::traits::audio::{AudioBackend, SoundId};

/// What to do when a sound has no pad or a pad has no sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingPolicy {
    /// Refuse to start.
    #[default]
    Strict,
    /// Warn once at startup and skip the missing half at runtime.
    Lenient,
}

/// A sample bound to a key. `sound` stays `None` if the file failed to load.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundSlot {
    pub path: PathBuf,
    pub sound: Option<SoundId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PadEntry {
    pub sound: Option<SoundSlot>,
    pub indicator: Option<IndicatorId>,
}

/// Key code -> {sound, indicator}, built once from a [`KitDefinition`].
#[derive(Debug, Clone, Default)]
pub struct KitRegistry {
    entries: BTreeMap<KeyCode, PadEntry>,
}

impl KitRegistry {
    /// Validate the definition and build the registry together with the
    /// indicator board it points into.
    pub fn build(
        kit: &KitDefinition,
        policy: MappingPolicy,
    ) -> Result<(Self, IndicatorBoard), KitError> {
        let mut board = IndicatorBoard::new();
        let mut entries: BTreeMap<KeyCode, PadEntry> = BTreeMap::new();

        for pad in &kit.pads {
            match entries.entry(pad.key_code) {
                Entry::Occupied(_) => {
                    return Err(KitError::DuplicatePad {
                        key_code: pad.key_code,
                    });
                }
                Entry::Vacant(slot) => {
                    let id = board.push(Indicator::new(pad));
                    slot.insert(PadEntry {
                        sound: None,
                        indicator: Some(id),
                    });
                }
            }
        }

        for sound in &kit.sounds {
            let entry = entries.entry(sound.key_code).or_default();
            if entry.sound.is_some() {
                return Err(KitError::DuplicateSound {
                    key_code: sound.key_code,
                });
            }
            entry.sound = Some(SoundSlot {
                path: kit.sample_path(sound),
                sound: None,
            });
        }

        for (&key_code, entry) in &entries {
            match (&entry.sound, entry.indicator) {
                (Some(_), None) => match policy {
                    MappingPolicy::Strict => return Err(KitError::SoundWithoutPad { key_code }),
                    MappingPolicy::Lenient => {
                        warn!("Sound for key {} has no pad; it will play without a flash", key_code)
                    }
                },
                (None, Some(_)) => match policy {
                    MappingPolicy::Strict => return Err(KitError::PadWithoutSound { key_code }),
                    MappingPolicy::Lenient => {
                        warn!("Pad for key {} has no sound; the key will be ignored", key_code)
                    }
                },
                _ => {}
            }
        }

        debug!(
            "Kit registry built: {} keys, {} pads",
            entries.len(),
            board.len()
        );
        Ok((Self { entries }, board))
    }

    /// Load every sample through the pool. Each key gets its own handle even
    /// when files are shared. Failures are logged and leave the slot silent.
    /// Returns the number of slots with a sample.
    pub fn load_sounds<A: AudioBackend>(&mut self, pool: &mut SoundPool<A>, volume: f32) -> usize {
        let mut loaded = 0;
        for (key_code, entry) in &mut self.entries {
            let Some(slot) = entry.sound.as_mut() else {
                continue;
            };
            match pool.load_instance(&slot.path) {
                Ok(id) => {
                    if let Err(e) = pool.set_volume(id, volume) {
                        warn!("Failed to set volume for key {}: {:#}", key_code, e);
                    }
                    slot.sound = Some(id);
                    loaded += 1;
                }
                Err(e) => {
                    warn!(
                        "Failed to load sample for key {} ({}): {:#}",
                        key_code,
                        slot.path.display(),
                        e
                    );
                }
            }
        }
        loaded
    }

    pub fn lookup(&self, key_code: KeyCode) -> Option<&PadEntry> {
        self.entries.get(&key_code)
    }

    pub fn key_codes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.entries.keys().copied()
    }

    /// Number of keys that have a sound.
    pub fn sound_count(&self) -> usize {
        self.entries.values().filter(|e| e.sound.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

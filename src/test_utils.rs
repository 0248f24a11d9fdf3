//! Test utilities: a recording audio backend, scripted input and kit builders.

#[cfg(test)]
pub mod mock_audio {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    use anyhow::{Result, anyhow};

    use crate::traits::audio::{AudioBackend, SoundId};

    /// Audio backend that records every call instead of making noise.
    #[derive(Debug, Default)]
    pub struct MockAudio {
        next_id: u64,
        paths: HashMap<SoundId, PathBuf>,
        volumes: HashMap<SoundId, f32>,
        decoded: usize,
        restarts: Vec<SoundId>,
        stopped: Vec<SoundId>,
        failing_files: Vec<String>,
        fail_playback: bool,
        disposed: bool,
    }

    impl MockAudio {
        pub fn new() -> Self {
            Self {
                next_id: 1,
                ..Default::default()
            }
        }

        /// Make `load_sound` fail for paths ending with `file_name`.
        pub fn failing_on(mut self, file_name: &str) -> Self {
            self.failing_files.push(file_name.to_string());
            self
        }

        /// Make every `restart` fail.
        pub fn failing_playback(mut self) -> Self {
            self.fail_playback = true;
            self
        }

        pub fn restarts(&self) -> &[SoundId] {
            &self.restarts
        }

        pub fn restart_count(&self) -> usize {
            self.restarts.len()
        }

        pub fn stopped(&self) -> &[SoundId] {
            &self.stopped
        }

        pub fn volume_of(&self, id: SoundId) -> Option<f32> {
            self.volumes.get(&id).copied()
        }

        pub fn path_of(&self, id: SoundId) -> Option<&Path> {
            self.paths.get(&id).map(PathBuf::as_path)
        }

        /// Number of files decoded; instances are not counted.
        pub fn loaded_count(&self) -> usize {
            self.decoded
        }

        pub fn is_disposed(&self) -> bool {
            self.disposed
        }
    }

    impl AudioBackend for MockAudio {
        fn load_sound(&mut self, path: &Path) -> Result<SoundId> {
            if self.failing_files.iter().any(|f| path.ends_with(f)) {
                return Err(anyhow!("Failed to load sound {}", path.display()));
            }
            let id = SoundId(self.next_id);
            self.next_id += 1;
            self.paths.insert(id, path.to_path_buf());
            self.decoded += 1;
            Ok(id)
        }

        fn instance(&mut self, id: SoundId) -> Result<SoundId> {
            let path = self
                .paths
                .get(&id)
                .cloned()
                .ok_or_else(|| anyhow!("Sound not found: {:?}", id))?;
            let instance = SoundId(self.next_id);
            self.next_id += 1;
            self.paths.insert(instance, path);
            Ok(instance)
        }

        fn restart(&mut self, id: SoundId) -> Result<()> {
            if self.fail_playback {
                return Err(anyhow!("No output device"));
            }
            self.restarts.push(id);
            Ok(())
        }

        fn stop(&mut self, id: SoundId) -> Result<()> {
            self.stopped.push(id);
            Ok(())
        }

        fn set_volume(&mut self, id: SoundId, volume: f32) -> Result<()> {
            self.volumes.insert(id, volume);
            Ok(())
        }

        fn dispose(&mut self) -> Result<()> {
            self.disposed = true;
            Ok(())
        }
    }
}

#[cfg(test)]
pub mod input_sim {
    use crate::kit::KeyCode;
    use crate::traits::input::{InputProvider, KeyEvent};

    /// Input source replaying a fixed list of key-downs.
    #[derive(Debug, Default)]
    pub struct ScriptedInput {
        events: Vec<KeyEvent>,
        cursor: usize,
        quit_at_ms: Option<u64>,
        last_poll_ms: u64,
    }

    impl ScriptedInput {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a key-down at `time_ms`.
        pub fn press(mut self, key_code: u32, time_ms: u64) -> Self {
            self.events.push(KeyEvent::new(KeyCode(key_code), time_ms));
            self.events.sort_by_key(|e| e.time_ms);
            self
        }

        pub fn quit_at(mut self, time_ms: u64) -> Self {
            self.quit_at_ms = Some(time_ms);
            self
        }

        pub fn remaining(&self) -> usize {
            self.events.len() - self.cursor
        }
    }

    impl InputProvider for ScriptedInput {
        fn poll_events(&mut self, now_ms: u64) -> Vec<KeyEvent> {
            self.last_poll_ms = now_ms;
            let start = self.cursor;
            while self.cursor < self.events.len() && self.events[self.cursor].time_ms <= now_ms {
                self.cursor += 1;
            }
            self.events[start..self.cursor].to_vec()
        }

        fn quit_requested(&self) -> bool {
            self.quit_at_ms.is_some_and(|t| self.last_poll_ms >= t)
        }
    }
}

#[cfg(test)]
pub mod builders {
    use std::path::PathBuf;

    use crate::kit::{KeyCode, KitDefinition, PadSpec, SoundSpec};

    /// Fluent builder for kit definitions.
    #[derive(Debug, Default)]
    pub struct KitBuilder {
        kit: KitDefinition,
    }

    impl KitBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a sound and a pad sharing `key_code`.
        pub fn pad(self, key_code: u32, name: &str) -> Self {
            self.sound_only(key_code, name).pad_only(key_code, name)
        }

        pub fn sound_only(self, key_code: u32, name: &str) -> Self {
            self.sound_file(key_code, &format!("{name}.wav"))
        }

        /// Add a sound and a pad sharing `key_code`, playing `file`.
        pub fn pad_with_file(self, key_code: u32, name: &str, file: &str) -> Self {
            self.sound_file(key_code, file).pad_only(key_code, name)
        }

        fn sound_file(mut self, key_code: u32, file: &str) -> Self {
            self.kit.sounds.push(SoundSpec {
                key_code: KeyCode(key_code),
                file: PathBuf::from(file),
            });
            self
        }

        pub fn pad_only(mut self, key_code: u32, name: &str) -> Self {
            self.kit.pads.push(PadSpec {
                key_code: KeyCode(key_code),
                label: None,
                name: name.to_string(),
            });
            self
        }

        pub fn build(self) -> KitDefinition {
            self.kit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::builders::*;
    use super::input_sim::*;
    use crate::kit::KeyCode;
    use crate::traits::input::InputProvider;

    #[test]
    fn test_kit_builder() {
        let kit = KitBuilder::new()
            .pad(65, "clap")
            .sound_only(83, "hihat")
            .pad_only(68, "kick")
            .build();
        assert_eq!(kit.sounds.len(), 2);
        assert_eq!(kit.pads.len(), 2);
        assert_eq!(kit.sounds[1].key_code, KeyCode(83));
    }

    #[test]
    fn test_scripted_input() {
        let mut input = ScriptedInput::new()
            .press(83, 200)
            .press(65, 100)
            .quit_at(500);

        assert!(input.poll_events(50).is_empty());
        let events = input.poll_events(150);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].key_code, KeyCode(65));
        assert!(!input.quit_requested());
        assert_eq!(input.poll_events(500).len(), 1);
        assert_eq!(input.remaining(), 0);
        assert!(input.quit_requested());
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{KeyCode, KitError};

/// One playable sample bound to a key code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoundSpec {
    pub key_code: KeyCode,
    /// Sample file, relative to the kit file's directory unless absolute.
    pub file: PathBuf,
}

/// One on-screen pad bound to a key code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PadSpec {
    pub key_code: KeyCode,
    /// Caption; defaults to the key's label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Sound name shown under the caption.
    #[serde(default)]
    pub name: String,
}

impl PadSpec {
    pub fn caption(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.key_code.label())
    }
}

/// Declarative kit: the sounds and the pads, each tagged with a key code.
/// Pad order is the on-screen left-to-right order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KitDefinition {
    #[serde(default)]
    pub sounds: Vec<SoundSpec>,
    #[serde(default)]
    pub pads: Vec<PadSpec>,
    /// Directory sample paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

const BUILTIN_KIT: [(char, &str); 9] = [
    ('A', "clap"),
    ('S', "hihat"),
    ('D', "kick"),
    ('F', "openhat"),
    ('G', "boom"),
    ('H', "ride"),
    ('J', "snare"),
    ('K', "tom"),
    ('L', "tink"),
];

impl KitDefinition {
    /// Nine pads on the home row, samples under `sounds/`.
    pub fn builtin() -> Self {
        let mut kit = Self::default();
        for (c, name) in BUILTIN_KIT {
            let key_code = KeyCode(c as u32);
            kit.sounds.push(SoundSpec {
                key_code,
                file: PathBuf::from("sounds").join(format!("{name}.wav")),
            });
            kit.pads.push(PadSpec {
                key_code,
                label: None,
                name: name.to_string(),
            });
        }
        kit
    }

    /// Load a kit from a JSON file. Sample paths resolve against the file's directory.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, KitError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| KitError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut kit: Self = serde_json::from_str(&content).map_err(|source| KitError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        kit.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(kit)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn sample_path(&self, sound: &SoundSpec) -> PathBuf {
        if sound.file.is_absolute() {
            sound.file.clone()
        } else {
            self.base_dir.join(&sound.file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_kit_is_paired() {
        let kit = KitDefinition::builtin();
        assert_eq!(kit.sounds.len(), 9);
        assert_eq!(kit.pads.len(), 9);
        for (sound, pad) in kit.sounds.iter().zip(&kit.pads) {
            assert_eq!(sound.key_code, pad.key_code);
        }
        assert_eq!(kit.pads[0].key_code, KeyCode(65));
        assert_eq!(kit.pads[0].caption(), "A");
        assert_eq!(kit.sample_path(&kit.sounds[0]), PathBuf::from("sounds/clap.wav"));
    }

    #[test]
    fn load_resolves_samples_against_kit_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kit.json");
        fs::write(
            &path,
            r#"{
                "sounds": [{ "key_code": 65, "file": "clap.wav" }],
                "pads": [{ "key_code": 65, "label": "key-65", "name": "clap" }]
            }"#,
        )
        .unwrap();

        let kit = KitDefinition::load_from(&path).unwrap();
        assert_eq!(kit.pads[0].caption(), "key-65");
        assert_eq!(kit.sample_path(&kit.sounds[0]), dir.path().join("clap.wav"));
    }

    #[test]
    fn save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kit.json");
        let kit = KitDefinition::builtin();
        kit.save_to(&path).unwrap();

        let loaded = KitDefinition::load_from(&path).unwrap();
        assert_eq!(loaded.sounds, kit.sounds);
        assert_eq!(loaded.pads, kit.pads);
        assert_eq!(loaded.base_dir, dir.path());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let err = KitDefinition::load_from(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, KitError::FileRead { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kit.json");
        fs::write(&path, "{ not json").unwrap();
        let err = KitDefinition::load_from(&path).unwrap_err();
        assert!(matches!(err, KitError::Parse { .. }));
    }
}

use std::path::PathBuf;
use thiserror::Error;

use super::KeyCode;

#[derive(Debug, Error)]
pub enum KitError {
    #[error("Failed to read kit file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse kit file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Key code {key_code} has more than one sound")]
    DuplicateSound { key_code: KeyCode },

    #[error("Key code {key_code} has more than one pad")]
    DuplicatePad { key_code: KeyCode },

    #[error("Sound for key code {key_code} has no pad")]
    SoundWithoutPad { key_code: KeyCode },

    #[error("Pad for key code {key_code} has no sound")]
    PadWithoutSound { key_code: KeyCode },
}

use std::path::Path;

/// User-friendly error messages for startup failures.
pub struct UserError;

impl UserError {
    /// Get user-friendly message for an unreadable or invalid kit file.
    pub fn kit_load_error(path: &Path) -> String {
        format!(
            "Could not load kit file: {}\nCheck that it exists and is valid JSON.",
            path.display()
        )
    }

    /// Get user-friendly message for a kit whose sounds and pads do not pair up.
    pub fn kit_mapping_error() -> &'static str {
        "Every sound needs a pad with the same key code, and every pad a sound.\nSet \"mapping_policy\": \"lenient\" to start anyway."
    }

    /// Get user-friendly message for an invalid config file.
    pub fn config_error(path: &Path) -> String {
        format!("Could not read config file: {}", path.display())
    }

    /// Get user-friendly message for audio system initialization error.
    pub fn audio_init_error() -> &'static str {
        "Failed to initialize audio output. Is a sound device available?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_kit_load_error() {
        let msg = UserError::kit_load_error(Path::new("/kits/808.json"));
        assert!(msg.contains("Could not load kit file"));
        assert!(msg.contains("/kits/808.json"));
    }

    #[test]
    fn test_mapping_error_mentions_policy() {
        assert!(UserError::kit_mapping_error().contains("lenient"));
    }

    #[test]
    fn test_config_error() {
        let msg = UserError::config_error(Path::new("drumkit.json"));
        assert!(msg.contains("drumkit.json"));
    }
}

use anyhow::Result;

/// Handle for referencing loaded sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u64);

/// Abstraction over audio backends.
/// Implementations: AudioDriver (kira), MockAudio (testing).
pub trait AudioBackend {
    fn load_sound(&mut self, path: &std::path::Path) -> Result<SoundId>;

    /// New handle over the decoded data of `id`. It has its own playback
    /// instance and volume, so restarting one handle never cuts off the other.
    fn instance(&mut self, id: SoundId) -> Result<SoundId>;

    /// Rewind the sound to offset zero and start it. An instance that is still
    /// playing is cut off, so repeated calls never overlap.
    fn restart(&mut self, id: SoundId) -> Result<()>;
    fn stop(&mut self, id: SoundId) -> Result<()>;

    /// Set volume (0.0..=1.0) used for subsequent playback.
    fn set_volume(&mut self, id: SoundId, volume: f32) -> Result<()>;

    fn dispose(&mut self) -> Result<()>;
}

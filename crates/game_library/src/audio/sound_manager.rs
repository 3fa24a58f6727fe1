//! Sound effect settings
//!
//! Pitch and volume are clamped here before reaching the backend.

use super::backend::AudioBackend;

/// Sound effect manager
#[derive(Debug, Clone, PartialEq)]
pub struct SoundManager {
    pitch: f32,
    volume: f32,
}

impl SoundManager {
    /// Create a manager with neutral pitch and full volume
    pub fn new() -> Self {
        Self {
            pitch: 0.0,
            volume: 1.0,
        }
    }

    /// Current pitch shift
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the pitch shift, clamped to `[-1, 1]`
    pub fn set_pitch(&mut self, pitch: f32, backend: &mut dyn AudioBackend) {
        let clamped = if pitch.is_nan() { 0.0 } else { pitch.clamp(-1.0, 1.0) };
        if clamped != pitch {
            log::trace!("Pitch {} clamped to {}", pitch, clamped);
        }
        self.pitch = clamped;
        backend.set_pitch(clamped);
    }

    /// Current effect volume
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the effect volume, clamped to `[0, 1]`
    pub fn set_volume(&mut self, volume: f32, backend: &mut dyn AudioBackend) {
        self.volume = volume.clamp(0.0, 1.0);
        backend.set_effect_volume(self.volume);
    }
}

impl Default for SoundManager {
    fn default() -> Self {
        Self::new()
    }
}

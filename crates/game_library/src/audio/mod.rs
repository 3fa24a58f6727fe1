//! Audio system
//!
//! [`Audio`] bundles the injected backend with the sound and music
//! managers so callers never have to thread the backend through by hand.

pub mod backend;
pub mod music;
pub mod sound_manager;

pub use backend::{AudioBackend, MemoryAudioBackend};
pub use music::{MusicManager, MusicState, Song};
pub use sound_manager::SoundManager;

use crate::config::AudioConfig;
use thiserror::Error;

/// Audio errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// A song key is already registered
    #[error("Song already registered: {0}")]
    DuplicateSong(String),

    /// The backend refused to play
    #[error("Playback failed: {0}")]
    Playback(String),
}

/// Backend plus managers
pub struct Audio {
    backend: Box<dyn AudioBackend>,
    sound: SoundManager,
    music: MusicManager,
}

impl Audio {
    /// Wrap a backend and apply the configured volumes
    pub fn new(backend: Box<dyn AudioBackend>, config: &AudioConfig) -> Self {
        let mut audio = Self {
            backend,
            sound: SoundManager::new(),
            music: MusicManager::new(),
        };
        audio.set_effect_volume(config.effect_volume);
        audio.set_music_volume(config.music_volume);
        audio.set_repeating(config.repeat_music);
        audio
    }

    /// Audio with a [`MemoryAudioBackend`] and default settings
    pub fn silent() -> Self {
        Self::new(Box::new(MemoryAudioBackend::new()), &AudioConfig::default())
    }

    /// The injected backend
    pub fn backend(&self) -> &dyn AudioBackend {
        self.backend.as_ref()
    }

    /// Sound effect settings
    pub fn sound(&self) -> &SoundManager {
        &self.sound
    }

    /// Music registry
    pub fn music(&self) -> &MusicManager {
        &self.music
    }

    /// Current effect pitch
    pub fn pitch(&self) -> f32 {
        self.sound.pitch()
    }

    /// Set the effect pitch (clamped to `[-1, 1]`)
    pub fn set_pitch(&mut self, pitch: f32) {
        self.sound.set_pitch(pitch, self.backend.as_mut());
    }

    /// Set the effect volume (clamped to `[0, 1]`)
    pub fn set_effect_volume(&mut self, volume: f32) {
        self.sound.set_volume(volume, self.backend.as_mut());
    }

    /// Register a song
    pub fn add_song(&mut self, key: impl Into<String>, song: Song) -> Result<(), AudioError> {
        self.music.add_song(key, song)
    }

    /// Forget a song
    pub fn remove_song(&mut self, key: &str) -> Option<Song> {
        self.music.remove_song(key)
    }

    /// Play a registered song; unknown keys are ignored
    pub fn play_song(&mut self, key: &str) -> Result<bool, AudioError> {
        self.music.play_song(key, self.backend.as_mut())
    }

    /// Pause music
    pub fn pause(&mut self) {
        self.music.pause(self.backend.as_mut());
    }

    /// Resume music
    pub fn resume(&mut self) {
        self.music.resume(self.backend.as_mut());
    }

    /// Stop music
    pub fn stop(&mut self) {
        self.music.stop(self.backend.as_mut());
    }

    /// Whether music is playing
    pub fn is_playing(&self) -> bool {
        self.music.is_playing(self.backend.as_ref())
    }

    /// Current music volume
    pub fn music_volume(&self) -> f32 {
        self.music.volume()
    }

    /// Set the music volume (clamped to `[0, 1]`)
    pub fn set_music_volume(&mut self, volume: f32) {
        self.music.set_volume(volume, self.backend.as_mut());
    }

    /// Whether songs loop
    pub fn is_repeating(&self) -> bool {
        self.music.is_repeating()
    }

    /// Set whether songs loop
    pub fn set_repeating(&mut self, repeating: bool) {
        self.music.set_repeating(repeating, self.backend.as_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = Audio::silent();
        audio.set_music_volume(1.7);
        assert_eq!(audio.music_volume(), 1.0);
        audio.set_music_volume(-3.0);
        assert_eq!(audio.music_volume(), 0.0);
        audio.set_effect_volume(0.25);
        assert_eq!(audio.sound().volume(), 0.25);
    }

    #[test]
    fn test_pitch_is_clamped_and_forwarded() {
        let mut audio = Audio::silent();
        audio.set_pitch(1.0);
        assert_eq!(audio.backend().pitch(), 1.0);
        audio.set_pitch(9.0);
        assert_eq!(audio.pitch(), 1.0);
        audio.set_pitch(-0.5);
        assert_eq!(audio.backend().pitch(), -0.5);
    }

    #[test]
    fn test_song_playback_cycle() {
        let mut audio = Audio::silent();
        audio.add_song("title", Song::new("Title Theme")).unwrap();
        assert!(matches!(
            audio.add_song("title", Song::new("Again")),
            Err(AudioError::DuplicateSong(_))
        ));

        assert!(!audio.play_song("missing").unwrap());
        assert!(!audio.is_playing());

        assert!(audio.play_song("title").unwrap());
        assert!(audio.is_playing());
        audio.pause();
        assert!(!audio.is_playing());
        assert_eq!(audio.backend().music_state(), MusicState::Paused);
        audio.resume();
        assert!(audio.is_playing());
        audio.stop();
        assert_eq!(audio.backend().music_state(), MusicState::Stopped);

        assert!(audio.remove_song("title").is_some());
        assert!(!audio.play_song("title").unwrap());
    }

    #[test]
    fn test_repeat_flag_from_config() {
        let config = AudioConfig {
            repeat_music: false,
            ..Default::default()
        };
        let mut audio = Audio::new(Box::new(MemoryAudioBackend::new()), &config);
        assert!(!audio.is_repeating());
        audio.set_repeating(true);
        assert!(audio.is_repeating());
    }
}

//! Music system
//!
//! Keyed registry of songs with simple playback control.

use super::backend::AudioBackend;
use super::AudioError;
use crate::content::AssetHandle;
use std::collections::HashMap;

/// A registered song
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Display name
    pub name: String,
    /// Loaded audio data, if the song came from content
    pub asset: Option<AssetHandle>,
}

impl Song {
    /// Create a song without asset data
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset: None,
        }
    }

    /// Create a song backed by a loaded asset
    pub fn from_asset(name: impl Into<String>, asset: AssetHandle) -> Self {
        Self {
            name: name.into(),
            asset: Some(asset),
        }
    }
}

/// Music playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicState {
    /// No music is playing
    #[default]
    Stopped,

    /// Music is playing normally
    Playing,

    /// Music is paused
    Paused,
}

/// Background music manager
pub struct MusicManager {
    songs: HashMap<String, Song>,
    volume: f32,
    repeating: bool,
}

impl MusicManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            songs: HashMap::new(),
            volume: 1.0,
            repeating: false,
        }
    }

    /// Register a song under `key`
    pub fn add_song(&mut self, key: impl Into<String>, song: Song) -> Result<(), AudioError> {
        let key = key.into();
        if self.songs.contains_key(&key) {
            return Err(AudioError::DuplicateSong(key));
        }
        self.songs.insert(key, song);
        Ok(())
    }

    /// Forget a song; returns it if it was registered
    pub fn remove_song(&mut self, key: &str) -> Option<Song> {
        self.songs.remove(key)
    }

    /// Whether a song is registered under `key`
    pub fn has_song(&self, key: &str) -> bool {
        self.songs.contains_key(key)
    }

    /// Play the song registered under `key`
    ///
    /// Unknown keys are ignored; returns whether playback started.
    pub fn play_song(&mut self, key: &str, backend: &mut dyn AudioBackend) -> Result<bool, AudioError> {
        let Some(song) = self.songs.get(key) else {
            log::debug!("No song registered under '{}'", key);
            return Ok(false);
        };
        backend.play_music(song)?;
        Ok(true)
    }

    /// Pause playback
    pub fn pause(&self, backend: &mut dyn AudioBackend) {
        backend.pause_music();
    }

    /// Resume playback
    pub fn resume(&self, backend: &mut dyn AudioBackend) {
        backend.resume_music();
    }

    /// Stop playback
    pub fn stop(&self, backend: &mut dyn AudioBackend) {
        backend.stop_music();
    }

    /// Whether music is currently playing
    pub fn is_playing(&self, backend: &dyn AudioBackend) -> bool {
        backend.music_state() == MusicState::Playing
    }

    /// Current music volume
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the music volume, clamped to `[0, 1]`
    pub fn set_volume(&mut self, volume: f32, backend: &mut dyn AudioBackend) {
        self.volume = volume.clamp(0.0, 1.0);
        backend.set_music_volume(self.volume);
    }

    /// Whether songs loop
    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    /// Set whether songs loop
    pub fn set_repeating(&mut self, repeating: bool, backend: &mut dyn AudioBackend) {
        self.repeating = repeating;
        backend.set_music_repeating(repeating);
    }
}

impl Default for MusicManager {
    fn default() -> Self {
        Self::new()
    }
}

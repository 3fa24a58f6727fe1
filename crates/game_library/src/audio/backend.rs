//! Audio backend abstraction
//!
//! Platform-independent surface the sound and music managers drive. The
//! library ships only [`MemoryAudioBackend`], which keeps playback state in
//! memory; hosts with a real mixer implement the trait themselves.

use super::{AudioError, MusicState, Song};

/// Audio backend trait for platform abstraction
///
/// Not `Send + Sync`: audio is driven from the game-loop thread.
pub trait AudioBackend {
    /// Set the global pitch shift applied to sound effects, in `[-1, 1]`
    fn set_pitch(&mut self, pitch: f32);

    /// Current pitch shift
    fn pitch(&self) -> f32;

    /// Set the sound effect volume, in `[0, 1]`
    fn set_effect_volume(&mut self, volume: f32);

    /// Start playing a song from the beginning
    fn play_music(&mut self, song: &Song) -> Result<(), AudioError>;

    /// Pause the current song
    fn pause_music(&mut self);

    /// Resume a paused song
    fn resume_music(&mut self);

    /// Stop the current song
    fn stop_music(&mut self);

    /// Playback state of the music channel
    fn music_state(&self) -> MusicState;

    /// Set the music volume, in `[0, 1]`
    fn set_music_volume(&mut self, volume: f32);

    /// Whether the current song loops when it ends
    fn set_music_repeating(&mut self, repeating: bool);
}

/// Backend that tracks playback state without producing sound
#[derive(Debug, Default)]
pub struct MemoryAudioBackend {
    pitch: f32,
    effect_volume: f32,
    music_volume: f32,
    repeating: bool,
    state: MusicState,
    current_song: Option<String>,
}

impl MemoryAudioBackend {
    /// Create a silent backend
    pub fn new() -> Self {
        Self {
            effect_volume: 1.0,
            music_volume: 1.0,
            ..Default::default()
        }
    }

    /// Name of the song last started, if any
    pub fn current_song(&self) -> Option<&str> {
        self.current_song.as_deref()
    }

    /// Last music volume pushed by the manager
    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    /// Last effect volume pushed by the manager
    pub fn effect_volume(&self) -> f32 {
        self.effect_volume
    }

    /// Last repeat flag pushed by the manager
    pub fn is_repeating(&self) -> bool {
        self.repeating
    }
}

impl AudioBackend for MemoryAudioBackend {
    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    fn pitch(&self) -> f32 {
        self.pitch
    }

    fn set_effect_volume(&mut self, volume: f32) {
        self.effect_volume = volume;
    }

    fn play_music(&mut self, song: &Song) -> Result<(), AudioError> {
        self.current_song = Some(song.name.clone());
        self.state = MusicState::Playing;
        Ok(())
    }

    fn pause_music(&mut self) {
        if self.state == MusicState::Playing {
            self.state = MusicState::Paused;
        }
    }

    fn resume_music(&mut self) {
        if self.state == MusicState::Paused {
            self.state = MusicState::Playing;
        }
    }

    fn stop_music(&mut self) {
        self.state = MusicState::Stopped;
    }

    fn music_state(&self) -> MusicState {
        self.state
    }

    fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = volume;
    }

    fn set_music_repeating(&mut self, repeating: bool) {
        self.repeating = repeating;
    }
}

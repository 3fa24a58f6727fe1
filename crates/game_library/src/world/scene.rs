//! Mutable state shared with systems

use crate::audio::Audio;
use crate::debug::DebugDraw;
use crate::ecs::EntityStore;
use crate::foundation::time::FrameTime;
use crate::physics::PhysicsEngine;
use crate::render::{Camera2D, SpriteBatch};

/// Everything a system may read or modify during a frame
///
/// The world owns the scene and lends it to systems and hooks one call at
/// a time.
pub struct Scene {
    /// Entities and their components
    pub entities: EntityStore,
    /// Rigid bodies
    pub physics: PhysicsEngine,
    /// View transform
    pub camera: Camera2D,
    /// Draw command sink
    pub sprite_batch: SpriteBatch,
    /// Sound effects and music
    pub audio: Audio,
    /// Present only while debug drawing is enabled and content is loaded
    pub debug_draw: Option<DebugDraw>,
    /// Speed-scaled frame delta in whole milliseconds
    pub delta: i32,
    /// Unscaled time of the current frame
    pub frame: FrameTime,
}

impl Scene {
    /// Scene around the given collaborators
    pub fn new(physics: PhysicsEngine, camera: Camera2D, audio: Audio) -> Self {
        Self {
            entities: EntityStore::new(),
            physics,
            camera,
            sprite_batch: SpriteBatch::new(),
            audio,
            debug_draw: None,
            delta: 0,
            frame: FrameTime::default(),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(PhysicsEngine::default(), Camera2D::default(), Audio::silent())
    }
}

//! System trait and the identifiers used to schedule systems

use crate::content::ContentSource;
use crate::world::Scene;
use std::fmt;
use thiserror::Error;

/// When in the frame a system runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExecutionPhase {
    /// Game logic; driven by `World::update`
    Update,
    /// Rendering; driven by `World::draw`
    Draw,
}

/// Slot a system occupies in the manager
///
/// At most one system is registered per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemKey {
    /// Particle movement
    Movement,
    /// Sprite rendering
    Render,
    /// Sprite animation
    Animation,
    /// Debug overlay
    Debug,
    /// Game-specific system
    Custom(&'static str),
}

impl fmt::Display for SystemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movement => f.write_str("movement"),
            Self::Render => f.write_str("render"),
            Self::Animation => f.write_str("animation"),
            Self::Debug => f.write_str("debug"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

/// Errors raised from inside a system
#[derive(Error, Debug)]
pub enum SystemError {
    /// A system's one-time setup failed
    #[error("System '{key}' failed to initialize: {reason}")]
    Initialization {
        /// Failing system
        key: SystemKey,
        /// Cause
        reason: String,
    },

    /// A system failed while processing a frame
    #[error("System '{key}' failed while processing: {reason}")]
    Processing {
        /// Failing system
        key: SystemKey,
        /// Cause
        reason: String,
    },

    /// A system could not load its content
    #[error("System '{key}' failed to load content: {source}")]
    Content {
        /// Failing system
        key: SystemKey,
        /// Underlying content error
        #[source]
        source: crate::content::ContentError,
    },
}

/// Processor invoked once per frame in its registered phase
///
/// Systems run synchronously on the game-loop thread and are never
/// re-entered. An error aborts the rest of the phase.
pub trait System {
    /// Slot this system occupies
    fn key(&self) -> SystemKey;

    /// One-time setup, called from `SystemManager::initialize_all`
    fn initialize(&mut self, _scene: &mut Scene) -> Result<(), SystemError> {
        Ok(())
    }

    /// Load content this system needs before the first frame
    fn load_content(&mut self, _content: &mut dyn ContentSource) -> Result<(), SystemError> {
        Ok(())
    }

    /// Process one frame
    fn process(&mut self, scene: &mut Scene) -> Result<(), SystemError>;

    /// Release resources; called at most once when the world exits
    fn dispose(&mut self) {}
}

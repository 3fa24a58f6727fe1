//! World error type

use crate::audio::AudioError;
use crate::config::ConfigError;
use crate::content::ContentError;
use crate::ecs::{SystemError, SystemKey};
use crate::physics::PhysicsError;
use thiserror::Error;

/// Errors surfaced by the world and its system manager
#[derive(Error, Debug)]
pub enum WorldError {
    /// A caller-supplied value was out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A lifecycle call arrived out of order
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A strict registration hit an occupied slot
    #[error("System '{0}' is already registered")]
    DuplicateSystem(SystemKey),

    /// A system failed; propagated unchanged
    #[error(transparent)]
    System(#[from] SystemError),

    /// Physics stepping failed
    #[error("Physics error: {0}")]
    Physics(#[from] PhysicsError),

    /// Content could not be loaded
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Configuration was invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Audio backend failure
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),
}

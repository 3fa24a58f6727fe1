//! Rendering collaborators
//!
//! The camera view transform and the sprite batch the render system fills.

pub mod camera;
pub mod sprite_batch;

pub use camera::Camera2D;
pub use sprite_batch::{DrawCommand, SpriteBatch};

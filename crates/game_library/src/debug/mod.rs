//! Debug module for visualization and debugging tools

pub mod draw;

pub use draw::{Color, DebugDraw, DebugShape};

//! Physics module
//!
//! A small 2D rigid-body integrator. The world treats it as a black box
//! that can be stepped and whose body list can be inspected and pruned.

pub mod body;
pub mod damping;
pub mod engine;

pub use body::{Body, BodyDef, BodyHandle, BodyType};
pub use damping::Damping;
pub use engine::{PhysicsEngine, PhysicsError};

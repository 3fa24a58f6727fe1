//! Systems provided by the library

pub mod animation;
pub mod debug;
pub mod movement;
pub mod render;

pub use animation::AnimationSystem;
pub use debug::DebugSystem;
pub use movement::ParticleMovementSystem;
pub use render::RenderSystem;

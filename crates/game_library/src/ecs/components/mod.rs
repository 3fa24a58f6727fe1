//! Components provided by the library

pub mod animation;
pub mod damping;
pub mod particle;
pub mod sprite;
pub mod transform;

pub use animation::Animation;
pub use damping::DampingComponent;
pub use particle::Particle;
pub use sprite::Sprite;
pub use transform::Transform2D;

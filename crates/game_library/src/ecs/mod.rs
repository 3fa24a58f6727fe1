//! Entity-Component-System implementation
//!
//! Entities are plain identities held by the [`EntityStore`]; systems are
//! scheduled per [`ExecutionPhase`] by the [`SystemManager`].

pub mod component;
pub mod components;
pub mod entity;
pub mod scheduler;
pub mod store;
pub mod system;
pub mod systems;

pub use component::Component;
pub use entity::Entity;
pub use scheduler::{SystemHandle, SystemManager};
pub use store::EntityStore;
pub use system::{ExecutionPhase, System, SystemError, SystemKey};

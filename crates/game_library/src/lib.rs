//! # Game Library
//!
//! A 2D game-world runtime: an entity-component-system with a priority
//! scheduled system manager, a small rigid-body integrator, and a
//! [`World`] that keeps the two in sync frame after frame.
//!
//! ## Features
//!
//! - **Deterministic scheduling**: systems run per phase by priority, ties
//!   broken by registration order
//! - **Body reconciliation**: physics bodies whose owning entity is gone
//!   are swept after every step
//! - **Speed scaling**: one multiplier scales logic and physics time and
//!   retunes the sound pitch
//! - **Injected collaborators**: audio backend and content source are
//!   supplied by the host
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use game_library::prelude::*;
//! use std::time::Duration;
//!
//! fn main() -> Result<(), WorldError> {
//!     let world = World::new(HostContext::headless(), WorldConfig::default())?;
//!     let mut runner = GameRunner::new(world);
//!     runner.start(&mut MemoryContent::new(), &())?;
//!     runner.run_frames(60, Duration::from_millis(16))?;
//!     runner.exit();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod audio;
pub mod config;
pub mod content;
pub mod debug;
pub mod ecs;
pub mod foundation;
pub mod physics;
pub mod render;
pub mod world;

mod driver;

pub use driver::GameRunner;
pub use world::{HostContext, World, WorldError, WorldHooks};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        audio::{Audio, AudioBackend, MemoryAudioBackend, Song},
        config::{Config, WorldConfig},
        content::{AssetHandle, ContentManager, ContentSource, MemoryContent},
        ecs::{
            components::{Animation, DampingComponent, Particle, Sprite, Transform2D},
            Component, Entity, EntityStore, ExecutionPhase, System, SystemError, SystemKey,
            SystemManager,
        },
        foundation::{
            math::{Point2, Vec2},
            time::{FrameTime, Stopwatch, Timer},
        },
        physics::{Body, BodyDef, BodyType, Damping, PhysicsEngine},
        render::Camera2D,
        world::{HostContext, NoHooks, ReconcileReport, Scene, World, WorldError, WorldHooks},
        GameRunner,
    };
}

//! # World
//!
//! Root aggregate that owns the entity store, the system manager and the
//! physics engine, and keeps them consistent frame after frame.
//!
//! ## Frame order
//!
//! `update` runs, in order: the `loop_start` hook, the `Update` phase, one
//! physics step scaled by the world speed, the camera update (unscaled),
//! and finally the body/entity reconciliation sweep. `draw` only runs the
//! `Draw` phase.
//!
//! ## Lifecycle
//!
//! `initialize` → `load_content` → repeated `update`/`draw` → `on_exit`.
//! Calls out of this order return [`WorldError::InvalidState`].

mod error;
mod hooks;
mod reconcile;
mod scene;

#[cfg(test)]
mod tests;

pub use error::WorldError;
pub use hooks::{NoHooks, WorldHooks};
pub use reconcile::{orphan_reason, purge_orphaned_bodies, OrphanReason, ReconcileReport};
pub use scene::Scene;

use crate::audio::{Audio, AudioBackend, MemoryAudioBackend};
use crate::config::WorldConfig;
use crate::content::ContentSource;
use crate::debug::DebugDraw;
use crate::ecs::systems::{AnimationSystem, DebugSystem, ParticleMovementSystem, RenderSystem};
use crate::ecs::{EntityStore, ExecutionPhase, SystemKey, SystemManager};
use crate::foundation::math::Vec2;
use crate::foundation::time::FrameTime;
use crate::physics::PhysicsEngine;
use crate::render::Camera2D;

/// Services supplied by the host platform
pub struct HostContext {
    /// Sound output
    pub audio_backend: Box<dyn AudioBackend>,
    /// Viewport override; `None` uses the configured viewport
    pub viewport: Option<Vec2>,
}

impl HostContext {
    /// Context with the given audio backend
    pub fn new(audio_backend: Box<dyn AudioBackend>) -> Self {
        Self {
            audio_backend,
            viewport: None,
        }
    }

    /// Context without real audio, for tools and tests
    pub fn headless() -> Self {
        Self::new(Box::new(MemoryAudioBackend::new()))
    }

    /// Builder-style viewport override
    pub fn with_viewport(mut self, viewport: Vec2) -> Self {
        self.viewport = Some(viewport);
        self
    }
}

/// Where the world is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed; systems not yet built
    Created,
    /// Systems built and initialized
    Initialized,
    /// Content loaded; frames may run
    Running,
    /// `on_exit` has run
    Exited,
}

/// The game world
pub struct World<H: WorldHooks = NoHooks> {
    config: WorldConfig,
    hooks: H,
    scene: Scene,
    systems: SystemManager,
    speed: f32,
    debug_enabled: bool,
    state: LifecycleState,
    last_reconcile: ReconcileReport,
}

impl World<NoHooks> {
    /// World with gravity taken from `config`
    pub fn new(host: HostContext, config: WorldConfig) -> Result<Self, WorldError> {
        Self::with_hooks(host, config, NoHooks)
    }

    /// World with default configuration and the given gravity
    pub fn with_gravity(host: HostContext, gravity: Vec2) -> Result<Self, WorldError> {
        Self::new(host, WorldConfig::default().with_gravity(gravity))
    }
}

impl<H: WorldHooks> World<H> {
    /// World driven by game-specific hooks
    pub fn with_hooks(host: HostContext, config: WorldConfig, hooks: H) -> Result<Self, WorldError> {
        config.validate()?;

        let physics = PhysicsEngine::new(config.gravity()).with_max_step(config.physics.max_step);
        let mut camera = Camera2D::from_config(&config.camera);
        if let Some(viewport) = host.viewport {
            camera.viewport = viewport;
        }
        let audio = Audio::new(host.audio_backend, &config.audio);

        let mut world = Self {
            debug_enabled: config.debug.enabled,
            scene: Scene::new(physics, camera, audio),
            systems: SystemManager::new(),
            hooks,
            speed: 1.0,
            state: LifecycleState::Created,
            last_reconcile: ReconcileReport::default(),
            config,
        };
        world.set_speed(world.config.speed)?;

        log::info!(
            "Created world '{}' (debug {})",
            world.name(),
            if world.debug_enabled { "on" } else { "off" }
        );
        Ok(world)
    }

    /// Build the default systems plus the game's, then initialize them all
    ///
    /// On failure every registration is discarded, including systems added
    /// through [`World::systems_mut`] beforehand, and the world stays
    /// `Created` so a corrected retry starts from an empty manager.
    pub fn initialize(&mut self) -> Result<(), WorldError> {
        self.expect_state(LifecycleState::Created, "initialize")?;

        if let Err(error) = self.build_and_initialize_systems() {
            self.systems = SystemManager::new();
            log::error!("World '{}' failed to initialize: {}", self.name(), error);
            return Err(error);
        }

        self.state = LifecycleState::Initialized;
        log::info!("World '{}' initialized with {} systems", self.name(), self.systems.len());
        Ok(())
    }

    /// Create debug resources and let the game build templates and entities
    pub fn load_content(
        &mut self,
        content: &mut dyn ContentSource,
        args: &H::Args,
    ) -> Result<(), WorldError> {
        self.expect_state(LifecycleState::Initialized, "load_content")?;

        if self.debug_enabled {
            self.scene.debug_draw = Some(DebugDraw::new(self.config.debug.shape_duration));
            self.systems.load_content(SystemKey::Debug, content)?;
        }

        self.hooks.build_templates(&mut self.scene, content, args)?;
        self.hooks.build_entities(&mut self.scene, args)?;

        self.state = LifecycleState::Running;
        log::info!(
            "World '{}' content loaded: {} entities, {} bodies",
            self.name(),
            self.scene.entities.len(),
            self.scene.physics.body_count()
        );
        Ok(())
    }

    /// Advance the simulation by one frame
    pub fn update(&mut self, frame: &FrameTime) -> Result<(), WorldError> {
        self.expect_state(LifecycleState::Running, "update")?;

        self.scene.frame = *frame;
        self.hooks.loop_start(&mut self.scene, frame)?;

        self.scene.delta = (frame.elapsed_millis() / f64::from(self.speed)) as i32;
        self.systems.run_phase(ExecutionPhase::Update, &mut self.scene)?;

        self.scene.physics.step(frame.elapsed_secs() / self.speed)?;
        self.scene.camera.update(frame);

        self.last_reconcile = purge_orphaned_bodies(
            &mut self.scene.physics,
            &self.scene.entities,
            self.config.physics.purge_unowned_bodies,
        );
        log::trace!(
            "Frame: delta {} ms, {} bodies, {} removed",
            self.scene.delta,
            self.scene.physics.body_count(),
            self.last_reconcile.removed()
        );
        Ok(())
    }

    /// Run the draw phase
    pub fn draw(&mut self, frame: &FrameTime) -> Result<(), WorldError> {
        self.expect_state(LifecycleState::Running, "draw")?;
        self.scene.frame = *frame;
        self.systems.run_phase(ExecutionPhase::Draw, &mut self.scene)
    }

    /// Shut down: run the exit hook and release debug resources
    ///
    /// Safe to call from any state; only the first call has an effect.
    pub fn on_exit(&mut self) {
        if self.state == LifecycleState::Exited {
            return;
        }

        self.hooks.on_exit(&mut self.scene);
        if let Some(draw) = self.scene.debug_draw.as_mut() {
            draw.dispose();
        }
        self.systems.dispose(SystemKey::Debug);

        self.state = LifecycleState::Exited;
        log::info!("World '{}' exited", self.name());
    }

    /// Simulation speed multiplier
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Change the speed multiplier and retune the effect pitch to match
    pub fn set_speed(&mut self, speed: f32) -> Result<(), WorldError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(WorldError::InvalidArgument(format!(
                "speed must be a positive finite number, got {}",
                speed
            )));
        }
        self.speed = speed;
        self.scene.audio.set_pitch(1.0 / speed - 1.0);
        log::debug!("World speed set to {} (pitch {})", speed, self.scene.audio.pitch());
        Ok(())
    }

    /// Speed-scaled delta of the last update, in milliseconds
    pub fn delta(&self) -> i32 {
        self.scene.delta
    }

    /// Display label
    pub fn name(&self) -> &str {
        self.hooks.name().unwrap_or(self.config.name.as_str())
    }

    /// Lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether the debug system and its resources exist
    pub fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// Result of the most recent reconciliation sweep
    pub fn last_reconcile(&self) -> ReconcileReport {
        self.last_reconcile
    }

    /// Configuration the world was built from
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Shared frame state
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable shared frame state
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Entity store
    pub fn entities(&self) -> &EntityStore {
        &self.scene.entities
    }

    /// Mutable entity store
    pub fn entities_mut(&mut self) -> &mut EntityStore {
        &mut self.scene.entities
    }

    /// Physics engine
    pub fn physics(&self) -> &PhysicsEngine {
        &self.scene.physics
    }

    /// Mutable physics engine
    pub fn physics_mut(&mut self) -> &mut PhysicsEngine {
        &mut self.scene.physics
    }

    /// Camera
    pub fn camera(&self) -> &Camera2D {
        &self.scene.camera
    }

    /// Mutable camera
    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.scene.camera
    }

    /// Audio managers
    pub fn audio(&self) -> &Audio {
        &self.scene.audio
    }

    /// Mutable audio managers
    pub fn audio_mut(&mut self) -> &mut Audio {
        &mut self.scene.audio
    }

    /// Debug draw resources, if created
    pub fn debug_draw(&self) -> Option<&DebugDraw> {
        self.scene.debug_draw.as_ref()
    }

    /// System manager
    pub fn systems(&self) -> &SystemManager {
        &self.systems
    }

    /// Mutable system manager; registration is rejected after `initialize`
    pub fn systems_mut(&mut self) -> &mut SystemManager {
        &mut self.systems
    }

    /// Game hooks
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable game hooks
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    fn build_and_initialize_systems(&mut self) -> Result<(), WorldError> {
        self.systems
            .set_system(ParticleMovementSystem::new(), ExecutionPhase::Update, 0)?;
        self.systems.set_system(RenderSystem::new(), ExecutionPhase::Draw, 0)?;
        self.systems.set_system(AnimationSystem::new(), ExecutionPhase::Update, 0)?;
        if self.debug_enabled {
            let mut debug = DebugSystem::new();
            if let Some(font) = &self.config.debug.font {
                debug = debug.with_font(font.clone());
            }
            self.systems.set_system(debug, ExecutionPhase::Draw, 1)?;
        }

        self.hooks.build_systems(&mut self.systems)?;
        self.systems.initialize_all(&mut self.scene)
    }

    fn expect_state(&self, expected: LifecycleState, operation: &str) -> Result<(), WorldError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(WorldError::InvalidState(format!(
                "{} requires {:?} state, world is {:?}",
                operation, expected, self.state
            )))
        }
    }
}

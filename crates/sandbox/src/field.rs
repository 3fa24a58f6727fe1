//! Asteroid field demo hooks
//!
//! Spawns rocks with physics bodies and short-lived spark particles, then
//! destroys rocks at random so the world has orphaned bodies to sweep.

use crate::components::{BodyLink, BodySyncSystem, Rock};
use game_library::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Arguments for building the field
#[derive(Debug, Clone)]
pub struct FieldArgs {
    /// Rocks spawned at start
    pub rocks: u32,
    /// Chance per frame that one rock is destroyed
    pub destroy_chance: f64,
    /// Sparks emitted per destroyed rock
    pub sparks_per_rock: u32,
}

impl Default for FieldArgs {
    fn default() -> Self {
        Self {
            rocks: 24,
            destroy_chance: 0.1,
            sparks_per_rock: 6,
        }
    }
}

/// Hooks driving the demo
pub struct AsteroidField {
    rng: StdRng,
    destroy_chance: f64,
    sparks_per_rock: u32,
    rock_texture: Option<AssetHandle>,
    destroyed: u32,
    bodies_swept: usize,
}

impl AsteroidField {
    /// Deterministic field from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            destroy_chance: 0.0,
            sparks_per_rock: 0,
            rock_texture: None,
            destroyed: 0,
            bodies_swept: 0,
        }
    }

    /// Rocks destroyed so far
    pub fn destroyed(&self) -> u32 {
        self.destroyed
    }

    /// Add the bodies removed by one reconciliation sweep
    pub fn record_sweep(&mut self, report: ReconcileReport) {
        self.bodies_swept += report.removed();
    }

    /// Bodies the world removed in total
    pub fn bodies_swept(&self) -> usize {
        self.bodies_swept
    }

    fn spawn_rock(&mut self, scene: &mut Scene) {
        let position = Vec2::new(self.rng.gen_range(-600.0..600.0), self.rng.gen_range(-340.0..340.0));
        let velocity = Vec2::new(self.rng.gen_range(-40.0..40.0), self.rng.gen_range(-40.0..40.0));
        let size: u8 = self.rng.gen_range(1..=3);

        let entity = scene.entities.create_entity();
        let mut def = BodyDef::dynamic(position).owned_by(entity).with_velocity(velocity);
        def.radius = f32::from(size) * 12.0;
        def.angular_velocity = self.rng.gen_range(-1.0..1.0);
        let handle = scene.physics.create_body(def);

        scene.entities.add_component(entity, Transform2D::from_position(position));
        scene.entities.add_component(entity, Sprite::new(self.rock_texture, 1));
        scene.entities.add_component(entity, BodyLink(handle));
        scene.entities.add_component(entity, Rock { size });
    }

    fn shatter(&mut self, scene: &mut Scene, rock: Entity) {
        let origin = scene
            .entities
            .get_component::<Transform2D>(rock)
            .map_or_else(Vec2::zeros, |transform| transform.position);

        for _ in 0..self.sparks_per_rock {
            let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = self.rng.gen_range(60.0..160.0);
            let spark = scene.entities.create_entity();
            scene.entities.add_component(spark, Transform2D::from_position(origin));
            scene.entities.add_component(
                spark,
                Particle::with_velocity(Vec2::new(angle.cos(), angle.sin()) * speed)
                    .expiring_after(self.rng.gen_range(200..600)),
            );
            scene.entities.add_component(spark, DampingComponent::new(2.0, 0.0));
            scene.entities.add_component(spark, Sprite::new(None, 2));
            scene.entities.add_component(spark, Animation::new(4, 50, false));
        }

        // The rock's body stays behind until the world sweeps it.
        scene.entities.destroy_entity(rock);
        self.destroyed += 1;
    }
}

impl WorldHooks for AsteroidField {
    type Args = FieldArgs;

    fn name(&self) -> Option<&str> {
        Some("Asteroid Field")
    }

    fn build_systems(&mut self, systems: &mut SystemManager) -> Result<(), WorldError> {
        systems.add_system(BodySyncSystem, ExecutionPhase::Update, -1)?;
        Ok(())
    }

    fn build_templates(
        &mut self,
        scene: &mut Scene,
        content: &mut dyn ContentSource,
        args: &FieldArgs,
    ) -> Result<(), WorldError> {
        self.destroy_chance = args.destroy_chance.clamp(0.0, 1.0);
        self.sparks_per_rock = args.sparks_per_rock;
        self.rock_texture = Some(content.load("rock.png")?);

        let theme = content.load("theme.ogg")?;
        scene.audio.add_song("theme", Song::from_asset("Theme", theme))?;
        scene.audio.play_song("theme")?;
        Ok(())
    }

    fn build_entities(&mut self, scene: &mut Scene, args: &FieldArgs) -> Result<(), WorldError> {
        for _ in 0..args.rocks {
            self.spawn_rock(scene);
        }
        Ok(())
    }

    fn loop_start(&mut self, scene: &mut Scene, _frame: &FrameTime) -> Result<(), WorldError> {
        if !self.rng.gen_bool(self.destroy_chance) {
            return Ok(());
        }
        let rocks = scene.entities.with_component::<Rock>();
        if rocks.is_empty() {
            return Ok(());
        }
        let rock = rocks[self.rng.gen_range(0..rocks.len())];
        self.shatter(scene, rock);
        Ok(())
    }

    fn on_exit(&mut self, scene: &mut Scene) {
        scene.audio.stop();
        log::info!(
            "Field closed: {} rocks destroyed, {} bodies left, {} entities left",
            self.destroyed,
            scene.physics.body_count(),
            scene.entities.len()
        );
    }
}

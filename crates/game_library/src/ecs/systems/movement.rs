//! Particle movement system
//!
//! Integrates every `Particle` into its `Transform2D` using the world's
//! speed-scaled delta, applies optional `DampingComponent` slowdown, and
//! destroys particles that outlived their lifetime.

use crate::ecs::components::{DampingComponent, Particle, Transform2D};
use crate::ecs::system::{System, SystemError, SystemKey};
use crate::foundation::math::utils::wrap_angle;
use crate::physics::damping::{damping_factor, Damping};
use crate::world::Scene;

/// Moves particles by their velocity
#[derive(Debug, Default)]
pub struct ParticleMovementSystem {
    expired_total: u64,
}

impl ParticleMovementSystem {
    /// Create the system
    pub fn new() -> Self {
        Self::default()
    }

    /// Particles destroyed for outliving their lifetime so far
    pub fn expired_total(&self) -> u64 {
        self.expired_total
    }
}

impl System for ParticleMovementSystem {
    fn key(&self) -> SystemKey {
        SystemKey::Movement
    }

    fn process(&mut self, scene: &mut Scene) -> Result<(), SystemError> {
        let delta = scene.delta;
        let dt = delta as f32 / 1000.0;
        let mut expired = Vec::new();

        for entity in scene.entities.with_component::<Particle>() {
            let damping = scene.entities.get_component::<DampingComponent>(entity).copied();
            let Some(particle) = scene.entities.get_component_mut::<Particle>(entity) else {
                continue;
            };

            particle.age = particle.age.saturating_add(delta);
            if particle.is_expired() {
                expired.push(entity);
                continue;
            }
            if let Some(damping) = damping {
                particle.velocity *= damping_factor(damping.linear_damping(), dt);
                particle.angular_velocity *= damping_factor(damping.angular_damping(), dt);
            }
            let particle = *particle;

            if let Some(transform) = scene.entities.get_component_mut::<Transform2D>(entity) {
                transform.position += particle.velocity * dt;
                transform.rotation = wrap_angle(transform.rotation + particle.angular_velocity * dt);
            }
        }

        for entity in expired {
            log::trace!("Particle {} expired", entity);
            if scene.entities.destroy_entity(entity) {
                self.expired_total += 1;
            }
        }
        Ok(())
    }
}

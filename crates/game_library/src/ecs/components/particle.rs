//! Particle component
//!
//! Free-moving entity driven by the movement system rather than physics.

use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// Velocity and optional lifetime of a free-moving entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Linear velocity in units per second
    pub velocity: Vec2,

    /// Angular velocity in radians per second
    pub angular_velocity: f32,

    /// Time lived so far, in milliseconds
    pub age: i32,

    /// Total lifetime in milliseconds; `None` lives forever
    pub lifetime: Option<i32>,
}

impl Component for Particle {}

impl Default for Particle {
    fn default() -> Self {
        Self {
            velocity: Vec2::zeros(),
            angular_velocity: 0.0,
            age: 0,
            lifetime: None,
        }
    }
}

impl Particle {
    /// Particle moving with `velocity`
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            ..Default::default()
        }
    }

    /// Limit the particle's lifetime
    pub fn expiring_after(mut self, lifetime_millis: i32) -> Self {
        self.lifetime = Some(lifetime_millis);
        self
    }

    /// Whether the particle has outlived its lifetime
    pub fn is_expired(&self) -> bool {
        self.lifetime.is_some_and(|lifetime| self.age >= lifetime)
    }

    /// Remaining lifetime in milliseconds
    pub fn remaining(&self) -> Option<i32> {
        self.lifetime.map(|lifetime| (lifetime - self.age).max(0))
    }
}

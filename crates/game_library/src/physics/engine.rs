//! Physics engine: the ordered body list and the integrator

use super::body::{Body, BodyDef, BodyHandle, BodyType};
use super::damping::{damping_factor, Damping};
use crate::foundation::math::Vec2;
use thiserror::Error;

/// Physics errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Step size was negative or not finite
    #[error("Invalid time step: {0}")]
    InvalidTimeStep(f32),
}

/// Owns every body and advances them through time
///
/// Bodies keep their insertion order; removing one never reorders the rest.
pub struct PhysicsEngine {
    gravity: Vec2,
    bodies: Vec<Body>,
    next_handle: u64,
    max_step: f32,
}

impl PhysicsEngine {
    /// Create an engine with the given gravity
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            bodies: Vec::new(),
            next_handle: 0,
            max_step: 0.0,
        }
    }

    /// Clamp every step to at most `max_step` seconds (0 disables clamping)
    pub fn with_max_step(mut self, max_step: f32) -> Self {
        self.max_step = max_step.max(0.0);
        self
    }

    /// Current gravity
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Add a body and return its handle
    pub fn create_body(&mut self, def: BodyDef) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        self.bodies.push(Body::from_def(handle, def));
        handle
    }

    /// Remove a body, returning it if it existed
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<Body> {
        let index = self.index_of(handle)?;
        Some(self.bodies.remove(index))
    }

    /// Body list in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Look up a body
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.index_of(handle).map(|index| &self.bodies[index])
    }

    /// Look up a body mutably
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        let index = self.index_of(handle)?;
        Some(&mut self.bodies[index])
    }

    /// Number of bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Keep only the bodies for which `keep` returns true, preserving order
    pub fn retain_bodies(&mut self, keep: impl FnMut(&Body) -> bool) {
        self.bodies.retain(keep);
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) -> Result<(), PhysicsError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }
        if dt == 0.0 {
            return Ok(());
        }
        let dt = if self.max_step > 0.0 { dt.min(self.max_step) } else { dt };

        for body in &mut self.bodies {
            match body.body_type {
                BodyType::Static => continue,
                BodyType::Kinematic => {}
                BodyType::Dynamic => {
                    body.linear_velocity += self.gravity * dt;
                    body.linear_velocity *= damping_factor(body.linear_damping(), dt);
                    body.angular_velocity *= damping_factor(body.angular_damping(), dt);
                }
            }
            body.position += body.linear_velocity * dt;
            body.rotation += body.angular_velocity * dt;
        }
        Ok(())
    }

    fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        // Handles are issued in increasing order and removal keeps order,
        // so the list stays sorted by handle.
        self.bodies
            .binary_search_by_key(&handle, |body| body.handle())
            .ok()
    }
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new(Vec2::zeros())
    }
}

//! Rigid bodies and their owner tags

use super::damping::Damping;
use crate::ecs::Entity;
use crate::foundation::math::Vec2;

/// Stable identifier of a body inside one `PhysicsEngine`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(super) u64);

impl BodyHandle {
    /// Raw handle value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// How the integrator treats a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    /// Never moves
    Static,
    /// Moves with its velocity; ignores gravity and damping
    Kinematic,
    /// Fully simulated
    #[default]
    Dynamic,
}

/// Description used to create a body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDef {
    /// Integration mode
    pub body_type: BodyType,
    /// Initial position
    pub position: Vec2,
    /// Initial rotation in radians
    pub rotation: f32,
    /// Initial linear velocity
    pub linear_velocity: Vec2,
    /// Initial angular velocity in radians per second
    pub angular_velocity: f32,
    /// Linear damping coefficient
    pub linear_damping: f32,
    /// Angular damping coefficient
    pub angular_damping: f32,
    /// Bounding radius, used for debug outlines
    pub radius: f32,
    /// Owning entity, if any
    pub user_data: Option<Entity>,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec2::zeros(),
            rotation: 0.0,
            linear_velocity: Vec2::zeros(),
            angular_velocity: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            radius: 1.0,
            user_data: None,
        }
    }
}

impl BodyDef {
    /// Dynamic body at `position`
    pub fn dynamic(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Static body at `position`
    pub fn fixed(position: Vec2) -> Self {
        Self {
            body_type: BodyType::Static,
            position,
            ..Default::default()
        }
    }

    /// Tag the body with its owning entity
    pub fn owned_by(mut self, entity: Entity) -> Self {
        self.user_data = Some(entity);
        self
    }

    /// Set the initial linear velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.linear_velocity = velocity;
        self
    }
}

/// A simulated rigid body
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    handle: BodyHandle,
    /// Integration mode
    pub body_type: BodyType,
    /// Position in world units
    pub position: Vec2,
    /// Rotation in radians
    pub rotation: f32,
    /// Linear velocity in world units per second
    pub linear_velocity: Vec2,
    /// Angular velocity in radians per second
    pub angular_velocity: f32,
    linear_damping: f32,
    angular_damping: f32,
    /// Bounding radius
    pub radius: f32,
    /// Weak back-reference to the owning entity
    pub user_data: Option<Entity>,
}

impl Body {
    pub(super) fn from_def(handle: BodyHandle, def: BodyDef) -> Self {
        Self {
            handle,
            body_type: def.body_type,
            position: def.position,
            rotation: def.rotation,
            linear_velocity: def.linear_velocity,
            angular_velocity: def.angular_velocity,
            linear_damping: def.linear_damping.max(0.0),
            angular_damping: def.angular_damping.max(0.0),
            radius: def.radius,
            user_data: def.user_data,
        }
    }

    /// Handle identifying this body
    pub fn handle(&self) -> BodyHandle {
        self.handle
    }

    /// Owning entity, if tagged
    pub fn owner(&self) -> Option<Entity> {
        self.user_data
    }
}

impl Damping for Body {
    fn linear_damping(&self) -> f32 {
        self.linear_damping
    }

    fn set_linear_damping(&mut self, damping: f32) {
        self.linear_damping = damping.max(0.0);
    }

    fn angular_damping(&self) -> f32 {
        self.angular_damping
    }

    fn set_angular_damping(&mut self, damping: f32) {
        self.angular_damping = damping.max(0.0);
    }
}

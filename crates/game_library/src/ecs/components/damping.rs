//! Damping component for entities that slow down without a physics body

use crate::ecs::Component;
use crate::physics::Damping;

/// Linear and angular damping coefficients
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DampingComponent {
    linear: f32,
    angular: f32,
}

impl Component for DampingComponent {}

impl DampingComponent {
    /// Component with the given coefficients (negative values become 0)
    pub fn new(linear: f32, angular: f32) -> Self {
        let mut component = Self::default();
        component.set_linear_damping(linear);
        component.set_angular_damping(angular);
        component
    }
}

impl Damping for DampingComponent {
    fn linear_damping(&self) -> f32 {
        self.linear
    }

    fn set_linear_damping(&mut self, damping: f32) {
        self.linear = damping.max(0.0);
    }

    fn angular_damping(&self) -> f32 {
        self.angular
    }

    fn set_angular_damping(&mut self, damping: f32) {
        self.angular = damping.max(0.0);
    }
}

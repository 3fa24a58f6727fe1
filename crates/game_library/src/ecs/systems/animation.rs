//! Animation system: advances frame strips by the world delta

use crate::ecs::components::Animation;
use crate::ecs::system::{System, SystemError, SystemKey};
use crate::world::Scene;

/// Advances every `Animation` component
#[derive(Debug, Default)]
pub struct AnimationSystem;

impl AnimationSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }
}

impl System for AnimationSystem {
    fn key(&self) -> SystemKey {
        SystemKey::Animation
    }

    fn process(&mut self, scene: &mut Scene) -> Result<(), SystemError> {
        let delta = scene.delta;
        for entity in scene.entities.with_component::<Animation>() {
            if let Some(animation) = scene.entities.get_component_mut::<Animation>(entity) {
                animation.advance(delta);
            }
        }
        Ok(())
    }
}

//! Sandbox-specific components and systems

use game_library::ecs::{Component, System, SystemError, SystemKey};
use game_library::physics::BodyHandle;
use game_library::prelude::Transform2D;
use game_library::world::Scene;

/// Links an entity to the physics body that moves it
#[derive(Debug, Clone, Copy)]
pub struct BodyLink(pub BodyHandle);

impl Component for BodyLink {}

/// Marks an asteroid and its size class
#[derive(Debug, Clone, Copy)]
pub struct Rock {
    /// 3 = large, 1 = small
    pub size: u8,
}

impl Component for Rock {}

/// Copies body positions into entity transforms
#[derive(Debug, Default)]
pub struct BodySyncSystem;

impl System for BodySyncSystem {
    fn key(&self) -> SystemKey {
        SystemKey::Custom("body_sync")
    }

    fn process(&mut self, scene: &mut Scene) -> Result<(), SystemError> {
        for entity in scene.entities.with_component::<BodyLink>() {
            let Some(BodyLink(handle)) = scene.entities.get_component::<BodyLink>(entity).copied() else {
                continue;
            };
            let Some(body) = scene.physics.body(handle) else {
                return Err(SystemError::Processing {
                    key: self.key(),
                    reason: format!("{} links to a missing body", entity),
                });
            };
            let (position, rotation) = (body.position, body.rotation);
            if let Some(transform) = scene.entities.get_component_mut::<Transform2D>(entity) {
                transform.position = position;
                transform.rotation = rotation;
            }
        }
        Ok(())
    }
}

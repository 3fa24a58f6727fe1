//! Sprite render system
//!
//! Fills the scene's sprite batch from every visible entity that has both a
//! `Sprite` and a `Transform2D`, using the camera's view transform.

use crate::ecs::components::{Animation, Sprite, Transform2D};
use crate::ecs::system::{System, SystemError, SystemKey};
use crate::foundation::math::Point2;
use crate::render::DrawCommand;
use crate::world::Scene;

/// Submits sprites to the batch each draw
#[derive(Debug, Default)]
pub struct RenderSystem {
    frames_drawn: u64,
}

impl RenderSystem {
    /// Create the system
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of batches submitted
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl System for RenderSystem {
    fn key(&self) -> SystemKey {
        SystemKey::Render
    }

    fn process(&mut self, scene: &mut Scene) -> Result<(), SystemError> {
        scene.sprite_batch.begin(scene.camera.view_matrix());

        for entity in scene.entities.with_component::<Sprite>() {
            let (Some(sprite), Some(transform)) = (
                scene.entities.get_component::<Sprite>(entity),
                scene.entities.get_component::<Transform2D>(entity),
            ) else {
                continue;
            };
            if !sprite.visible {
                continue;
            }

            let frame = scene
                .entities
                .get_component::<Animation>(entity)
                .map_or(0, Animation::current_frame);

            scene.sprite_batch.draw(DrawCommand {
                texture: sprite.texture,
                position: Point2::from(transform.position),
                rotation: transform.rotation,
                scale: transform.scale,
                frame,
                layer: sprite.layer,
            });
        }

        scene.sprite_batch.end();
        self.frames_drawn += 1;
        Ok(())
    }
}

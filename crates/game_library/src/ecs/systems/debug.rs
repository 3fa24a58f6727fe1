//! Debug overlay system
//!
//! Outlines every physics body into the scene's debug draw resources and
//! keeps persistent markers on the world origin and the camera's follow
//! target. Only registered when debug drawing is enabled in the world
//! configuration.

use crate::content::{AssetHandle, ContentSource};
use crate::debug::{Color, DebugShape};
use crate::ecs::system::{System, SystemError, SystemKey};
use crate::foundation::math::Vec2;
use crate::physics::BodyType;
use crate::world::Scene;

const ORIGIN_MARKER: &str = "origin";
const CAMERA_TARGET_MARKER: &str = "camera_target";

/// Draws physics body outlines and velocities
pub struct DebugSystem {
    font_name: Option<String>,
    font: Option<AssetHandle>,
    disposed: bool,
}

impl DebugSystem {
    /// Debug system with no overlay font
    pub fn new() -> Self {
        Self {
            font_name: None,
            font: None,
            disposed: false,
        }
    }

    /// Load the named asset as the overlay font during content loading
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    /// Handle of the loaded overlay font
    pub fn font(&self) -> Option<AssetHandle> {
        self.font
    }

    /// Whether `dispose` has run
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn body_color(body_type: BodyType, owned: bool) -> Color {
        match (body_type, owned) {
            (BodyType::Static, _) => Color::new(0.5, 0.5, 0.5, 1.0),
            (BodyType::Kinematic, _) => Color::new(0.2, 0.4, 1.0, 1.0),
            (BodyType::Dynamic, true) => Color::new(0.2, 1.0, 0.2, 1.0),
            (BodyType::Dynamic, false) => Color::new(1.0, 0.6, 0.0, 1.0),
        }
    }
}

impl Default for DebugSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for DebugSystem {
    fn key(&self) -> SystemKey {
        SystemKey::Debug
    }

    fn load_content(&mut self, content: &mut dyn ContentSource) -> Result<(), SystemError> {
        if let Some(name) = &self.font_name {
            let handle = content.load(name).map_err(|source| SystemError::Content {
                key: SystemKey::Debug,
                source,
            })?;
            self.font = Some(handle);
        }
        Ok(())
    }

    fn process(&mut self, scene: &mut Scene) -> Result<(), SystemError> {
        if self.disposed {
            return Ok(());
        }
        let Some(draw) = scene.debug_draw.as_mut() else {
            return Ok(());
        };

        draw.update(scene.frame.elapsed_secs());
        draw.draw_persistent(
            ORIGIN_MARKER,
            DebugShape::Point {
                position: Vec2::zeros(),
                color: Color::new(1.0, 1.0, 1.0, 1.0),
                size: 4.0,
                duration: f32::INFINITY,
            },
        );
        match scene.camera.target {
            Some(target) => draw.draw_persistent(
                CAMERA_TARGET_MARKER,
                DebugShape::Point {
                    position: target,
                    color: Color::new(1.0, 0.0, 1.0, 1.0),
                    size: 6.0,
                    duration: f32::INFINITY,
                },
            ),
            None => draw.clear_persistent(CAMERA_TARGET_MARKER),
        }

        let velocity_color = Color::new(1.0, 1.0, 0.0, 1.0);
        for body in scene.physics.bodies() {
            draw.draw_circle(
                body.position,
                body.radius,
                Self::body_color(body.body_type, body.owner().is_some()),
            );
            if body.linear_velocity.norm_squared() > 0.0 {
                draw.draw_line(body.position, body.position + body.linear_velocity, velocity_color);
            }
        }
        Ok(())
    }

    fn dispose(&mut self) {
        self.font = None;
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryContent;
    use crate::debug::DebugDraw;
    use crate::physics::BodyDef;

    #[test]
    fn test_bodies_are_outlined_each_draw() {
        let mut scene = Scene::default();
        scene.debug_draw = Some(DebugDraw::new(0.0));
        scene.physics.create_body(BodyDef::fixed(Vec2::new(1.0, 2.0)));
        scene
            .physics
            .create_body(BodyDef::dynamic(Vec2::zeros()).with_velocity(Vec2::new(3.0, 0.0)));
        scene.frame = crate::foundation::time::FrameTime::from_millis(16);

        let mut system = DebugSystem::new();
        system.process(&mut scene).unwrap();
        let draw = scene.debug_draw.as_ref().unwrap();
        assert_eq!(draw.shape_count(), 4);

        // Shapes from the previous draw expire before new ones are added.
        system.process(&mut scene).unwrap();
        let draw = scene.debug_draw.as_ref().unwrap();
        assert_eq!(draw.shape_count(), 4);
        assert!(draw
            .shapes()
            .iter()
            .any(|shape| matches!(shape, DebugShape::Circle { center, .. } if *center == Vec2::new(1.0, 2.0))));
    }

    #[test]
    fn test_camera_target_marker_follows_camera() {
        let mut scene = Scene::default();
        scene.debug_draw = Some(DebugDraw::new(0.0));
        let mut system = DebugSystem::new();

        scene.camera.follow(Vec2::new(5.0, -2.0));
        system.process(&mut scene).unwrap();
        let markers: Vec<Vec2> = scene
            .debug_draw
            .as_ref()
            .unwrap()
            .shapes()
            .iter()
            .filter_map(|shape| match shape {
                DebugShape::Point { position, .. } => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(markers.len(), 2);
        assert!(markers.contains(&Vec2::zeros()));
        assert!(markers.contains(&Vec2::new(5.0, -2.0)));

        scene.camera.target = None;
        system.process(&mut scene).unwrap();
        assert_eq!(scene.debug_draw.as_ref().unwrap().shape_count(), 1);
    }

    #[test]
    fn test_without_resources_nothing_is_drawn() {
        let mut scene = Scene::default();
        scene.physics.create_body(BodyDef::default());
        DebugSystem::new().process(&mut scene).unwrap();
        assert!(scene.debug_draw.is_none());
    }

    #[test]
    fn test_font_loading_and_disposal() {
        let mut content = MemoryContent::new().with_asset("debug_font", b"glyphs".to_vec());
        let mut system = DebugSystem::new().with_font("debug_font");
        system.load_content(&mut content).unwrap();
        assert!(system.font().is_some());

        system.dispose();
        assert!(system.is_disposed());
        assert!(system.font().is_none());

        let mut missing = DebugSystem::new().with_font("nope");
        assert!(matches!(
            missing.load_content(&mut MemoryContent::new()),
            Err(SystemError::Content { key: SystemKey::Debug, .. })
        ));
    }
}

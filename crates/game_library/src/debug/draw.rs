//! Debug drawing primitives
//!
//! Shapes are queued during the draw phase and read back by the host's
//! overlay renderer. Temporary shapes expire after their duration; a
//! duration of zero means "this frame only".

use crate::foundation::math::{Vec2, Vec4};
use std::collections::HashMap;

/// RGBA color in `[0, 1]`
pub type Color = Vec4;

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        /// Start point
        start: Vec2,
        /// End point
        end: Vec2,
        /// Color
        color: Color,
        /// Remaining lifetime in seconds
        duration: f32,
    },

    /// Circle outline
    Circle {
        /// Center
        center: Vec2,
        /// Radius
        radius: f32,
        /// Color
        color: Color,
        /// Remaining lifetime in seconds
        duration: f32,
    },

    /// Point at position
    Point {
        /// Position
        position: Vec2,
        /// Color
        color: Color,
        /// Size in pixels
        size: f32,
        /// Remaining lifetime in seconds
        duration: f32,
    },
}

impl DebugShape {
    fn duration_mut(&mut self) -> &mut f32 {
        match self {
            DebugShape::Line { duration, .. }
            | DebugShape::Circle { duration, .. }
            | DebugShape::Point { duration, .. } => duration,
        }
    }

    /// Decrease duration by `delta_time`, returns true if expired
    pub fn tick(&mut self, delta_time: f32) -> bool {
        let duration = self.duration_mut();
        *duration -= delta_time;
        *duration <= 0.0
    }
}

/// Debug draw resources, created when content loads and disposed on exit
pub struct DebugDraw {
    temporary_shapes: Vec<DebugShape>,
    persistent_shapes: HashMap<String, DebugShape>,
    default_duration: f32,
    disposed: bool,
}

impl DebugDraw {
    /// Create debug draw resources
    pub fn new(default_duration: f32) -> Self {
        Self {
            temporary_shapes: Vec::new(),
            persistent_shapes: HashMap::new(),
            default_duration: default_duration.max(0.0),
            disposed: false,
        }
    }

    /// Draw a line segment (temporary)
    pub fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        let duration = self.default_duration;
        self.push(DebugShape::Line { start, end, color, duration });
    }

    /// Draw a circle outline (temporary)
    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let duration = self.default_duration;
        self.push(DebugShape::Circle { center, radius, color, duration });
    }

    /// Draw a point (temporary)
    pub fn draw_point(&mut self, position: Vec2, color: Color, size: f32) {
        let duration = self.default_duration;
        self.push(DebugShape::Point { position, color, size, duration });
    }

    /// Draw a persistent shape that remains until explicitly removed
    pub fn draw_persistent(&mut self, id: impl Into<String>, shape: DebugShape) {
        if self.disposed {
            return;
        }
        self.persistent_shapes.insert(id.into(), shape);
    }

    /// Remove a persistent shape
    pub fn clear_persistent(&mut self, id: &str) {
        self.persistent_shapes.remove(id);
    }

    /// Age temporary shapes and drop the expired ones
    pub fn update(&mut self, delta_time: f32) {
        self.temporary_shapes.retain_mut(|shape| !shape.tick(delta_time));
    }

    /// All live shapes, temporary first
    pub fn shapes(&self) -> Vec<&DebugShape> {
        self.temporary_shapes
            .iter()
            .chain(self.persistent_shapes.values())
            .collect()
    }

    /// Get the number of active shapes
    pub fn shape_count(&self) -> usize {
        self.temporary_shapes.len() + self.persistent_shapes.len()
    }

    /// Release every shape; further drawing is ignored
    pub fn dispose(&mut self) {
        self.temporary_shapes.clear();
        self.persistent_shapes.clear();
        self.disposed = true;
    }

    /// Whether `dispose` has run
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn push(&mut self, shape: DebugShape) {
        if !self.disposed {
            self.temporary_shapes.push(shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new(1.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_temporary_shape_expiration() {
        let mut draw = DebugDraw::new(1.0);
        draw.draw_circle(Vec2::zeros(), 1.0, red());
        assert_eq!(draw.shape_count(), 1);

        draw.update(0.5);
        assert_eq!(draw.shape_count(), 1);

        draw.update(0.6);
        assert_eq!(draw.shape_count(), 0);
    }

    #[test]
    fn test_zero_duration_lasts_one_update() {
        let mut draw = DebugDraw::new(0.0);
        draw.draw_point(Vec2::zeros(), red(), 2.0);
        assert_eq!(draw.shapes().len(), 1);
        draw.update(0.016);
        assert_eq!(draw.shape_count(), 0);
    }

    #[test]
    fn test_persistent_shapes_survive_updates() {
        let mut draw = DebugDraw::new(0.0);
        draw.draw_persistent(
            "origin",
            DebugShape::Circle {
                center: Vec2::zeros(),
                radius: 1.0,
                color: red(),
                duration: f32::INFINITY,
            },
        );
        for _ in 0..10 {
            draw.update(1.0);
        }
        assert_eq!(draw.shape_count(), 1);
        draw.clear_persistent("origin");
        assert_eq!(draw.shape_count(), 0);
    }

    #[test]
    fn test_dispose_drops_and_blocks_shapes() {
        let mut draw = DebugDraw::new(1.0);
        draw.draw_line(Vec2::zeros(), Vec2::new(1.0, 1.0), red());
        draw.dispose();
        assert!(draw.is_disposed());
        assert_eq!(draw.shape_count(), 0);

        draw.draw_line(Vec2::zeros(), Vec2::new(1.0, 1.0), red());
        assert_eq!(draw.shape_count(), 0);
    }
}

//! Math utilities and types
//!
//! Provides the 2D math types used by the world, physics and camera.

pub use nalgebra::{Matrix3, Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (colors)
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type (2D affine transforms)
pub type Mat3 = Matrix3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// 2D transform: position, rotation (radians) and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Position in world units
    pub position: Vec2,

    /// Rotation in radians, counter-clockwise
    pub rotation: f32,

    /// Scale factors
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform2D {
    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a homogeneous transformation matrix
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::new_translation(&self.position)
            * Mat3::new_rotation(self.rotation)
            * Mat3::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point2) -> Point2 {
        self.to_matrix().transform_point(&point)
    }
}

/// Mathematical utility functions
pub mod utils {
    /// Wrap an angle into `(-PI, PI]`
    pub fn wrap_angle(radians: f32) -> f32 {
        let two_pi = std::f32::consts::TAU;
        let mut wrapped = radians % two_pi;
        if wrapped <= -std::f32::consts::PI {
            wrapped += two_pi;
        } else if wrapped > std::f32::consts::PI {
            wrapped -= two_pi;
        }
        wrapped
    }
}

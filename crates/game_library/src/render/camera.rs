//! # 2D Camera
//!
//! Passive view transform updated once per frame after physics stepping.
//! The camera eases toward its target, scaled by the real (unscaled) frame
//! time so that changing the world speed never changes camera feel.

use crate::config::CameraConfig;
use crate::foundation::math::{Mat3, Point2, Vec2};
use crate::foundation::time::FrameTime;

/// 2D camera with position, zoom and rotation
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Center of the view in world space
    pub position: Vec2,

    /// World-space point the camera eases toward, if following
    pub target: Option<Vec2>,

    /// Zoom factor (> 0)
    zoom: f32,

    /// View rotation in radians
    pub rotation: f32,

    /// Viewport size in pixels
    pub viewport: Vec2,

    /// Fraction of the remaining distance covered per 1/60 s
    follow_smoothing: f32,

    frames: u64,
}

impl Camera2D {
    /// Create a camera centered on the origin
    pub fn new(viewport: Vec2) -> Self {
        Self {
            position: Vec2::zeros(),
            target: None,
            zoom: 1.0,
            rotation: 0.0,
            viewport,
            follow_smoothing: 1.0,
            frames: 0,
        }
    }

    /// Create a camera from configuration
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self::new(Vec2::new(config.viewport[0], config.viewport[1]));
        camera.set_zoom(config.zoom);
        camera.follow_smoothing = config.follow_smoothing.clamp(0.0, 1.0);
        camera
    }

    /// Current zoom
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom; non-positive values are ignored
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom > 0.0 && zoom.is_finite() {
            self.zoom = zoom;
        } else {
            log::warn!("Ignoring invalid camera zoom {}", zoom);
        }
    }

    /// Start easing toward `target`
    pub fn follow(&mut self, target: Vec2) {
        self.target = Some(target);
    }

    /// Number of `update` calls so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance the camera by one frame of real time
    pub fn update(&mut self, frame: &FrameTime) {
        self.frames += 1;
        let Some(target) = self.target else {
            return;
        };

        // Frame-rate independent exponential approach.
        let steps = frame.elapsed_secs() * 60.0;
        let remaining = (1.0 - self.follow_smoothing).powf(steps);
        self.position = target + (self.position - target) * remaining;
    }

    /// World-to-screen transform
    pub fn view_matrix(&self) -> Mat3 {
        let half_viewport = self.viewport * 0.5;
        Mat3::new_translation(&half_viewport)
            * Mat3::new_scaling(self.zoom)
            * Mat3::new_rotation(-self.rotation)
            * Mat3::new_translation(&(-self.position))
    }

    /// Project a world point to screen space
    pub fn world_to_screen(&self, point: Point2) -> Point2 {
        self.view_matrix().transform_point(&point)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

//! World configuration
//!
//! Everything a host needs to construct a [`crate::World`]: gravity, the
//! initial speed multiplier, whether the debug overlay exists at all, and
//! the tuning knobs of the camera, physics and audio collaborators.

use super::{Config, ConfigError};
use crate::foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// Top-level world configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Display label used in logs when no hooks override it
    pub name: String,

    /// Initial simulation speed multiplier (must be > 0)
    pub speed: f32,

    /// Gravity vector in world units per second squared
    pub gravity: [f32; 2],

    /// Debug overlay settings
    pub debug: DebugConfig,

    /// Physics settings
    pub physics: PhysicsConfig,

    /// Camera settings
    pub camera: CameraConfig,

    /// Audio settings
    pub audio: AudioConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: "GameLibrary".to_string(),
            speed: 1.0,
            gravity: [0.0, 0.0],
            debug: DebugConfig::default(),
            physics: PhysicsConfig::default(),
            camera: CameraConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Gravity as a vector
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity[0], self.gravity[1])
    }

    /// Builder-style gravity override
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = [gravity.x, gravity.y];
        self
    }

    /// Builder-style debug overlay toggle
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug.enabled = enabled;
        self
    }

    /// Check ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "speed",
                reason: format!("must be a positive finite number, got {}", self.speed),
            });
        }
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(ConfigError::InvalidValue {
                field: "gravity",
                reason: "components must be finite".to_string(),
            });
        }
        if self.camera.zoom <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "camera.zoom",
                reason: format!("must be positive, got {}", self.camera.zoom),
            });
        }
        if !(0.0..=1.0).contains(&self.camera.follow_smoothing) {
            return Err(ConfigError::InvalidValue {
                field: "camera.follow_smoothing",
                reason: "must be within [0, 1]".to_string(),
            });
        }
        Ok(())
    }
}

impl Config for WorldConfig {}

/// Debug overlay configuration, evaluated once when the world is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Register the debug system and create its draw resources
    pub enabled: bool,

    /// Seconds a body outline stays visible
    pub shape_duration: f32,

    /// Asset loaded as the overlay font, if any
    pub font: Option<String>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
            shape_duration: 0.0,
            font: None,
        }
    }
}

/// Physics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Also purge bodies that carry no owner at all during reconciliation
    pub purge_unowned_bodies: bool,

    /// Upper bound on a single step, in seconds (0 = unbounded)
    pub max_step: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            purge_unowned_bodies: false,
            max_step: 0.0,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Viewport size in pixels
    pub viewport: [f32; 2],

    /// Initial zoom factor
    pub zoom: f32,

    /// Fraction of the remaining distance to the target covered per 1/60 s
    pub follow_smoothing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport: [1280.0, 720.0],
            zoom: 1.0,
            follow_smoothing: 1.0,
        }
    }
}

/// Audio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Initial music volume (clamped to [0, 1])
    pub music_volume: f32,

    /// Initial effect volume (clamped to [0, 1])
    pub effect_volume: f32,

    /// Whether music loops by default
    pub repeat_music: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_volume: 1.0,
            effect_volume: 1.0,
            repeat_music: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gravity(), Vec2::zeros());
        assert_eq!(config.name, "GameLibrary");
    }

    #[test]
    fn test_validate_rejects_non_positive_speed() {
        let mut config = WorldConfig::default();
        config.speed = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "speed", .. })
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let text = "speed = 0.5\ngravity = [0.0, 9.8]\n\n[debug]\nenabled = false\n";
        let config = WorldConfig::from_str_with_format(text, "world.toml").unwrap();

        assert_eq!(config.speed, 0.5);
        assert_eq!(config.gravity(), Vec2::new(0.0, 9.8));
        assert!(!config.debug.enabled);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_ron_round_trip() {
        let config = WorldConfig::default().with_debug(true).with_gravity(Vec2::new(1.0, -2.0));
        let text = ron::ser::to_string(&config).unwrap();
        let parsed = WorldConfig::from_str_with_format(&text, "world.ron").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = WorldConfig::from_str_with_format("", "world.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}

//! Physics configuration.
//!
//! Every tunable constant of the simulation lives in [`PhysicsConfig`].
//! Units are pixels and frames: velocities are pixels per frame, rotation
//! speeds are degrees per frame, gravity is pixels per frame².
//!
//! The JSON form is camelCase and every field is optional, so a host can
//! override just the values it cares about:
//!
//! ```
//! use glyph_drop_engine::PhysicsConfig;
//!
//! let config = PhysicsConfig::from_json(r#"{ "gravity": 0.5, "maxBodies": 200 }"#).unwrap();
//! assert_eq!(config.gravity, 0.5);
//! assert_eq!(config.max_bodies, Some(200));
//! assert_eq!(config.bounce_factor, 0.5);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::palette::{default_palette, DEFAULT_GLYPH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsConfig {
    /// Downward acceleration added to `vy` every frame
    pub gravity: f32,
    /// Multiplier applied to `vx` and rotation speed on floor contact
    pub floor_friction: f32,
    /// Restitution against the floor, walls and ceiling
    pub bounce_factor: f32,
    /// Restitution between two bodies
    pub body_restitution: f32,

    /// `|vy|` below which a body near the floor may come to rest.
    /// Horizontal speed must drop below half of this.
    pub settle_velocity: f32,
    /// Distance from the floor (pixels) still counted as resting on it
    pub settle_distance: f32,
    /// `|rotation_speed|` below which spin is zeroed when settling
    pub settle_rotation_speed: f32,

    pub vx_min: f32,
    pub vx_max: f32,
    /// Spawned bodies start with `vy` in `[0, spawn_vy_max)`
    pub spawn_vy_max: f32,
    pub rotation_speed_min: f32,
    pub rotation_speed_max: f32,
    pub size_min: f32,
    pub size_max: f32,

    /// Per-axis velocity (and rotation speed) cap
    pub max_speed: f32,
    /// Width of the random spin kick applied on body contact
    pub collision_spin: f32,
    /// Render opacity of settled bodies
    pub settled_opacity: f32,

    pub glyph: char,
    pub palette: Vec<String>,

    /// Spawn refusal threshold. `None` keeps the collection unbounded.
    pub max_bodies: Option<usize>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.25,
            floor_friction: 0.96,
            bounce_factor: 0.5,
            body_restitution: 0.7,
            settle_velocity: 0.4,
            settle_distance: 1.0,
            settle_rotation_speed: 0.1,
            vx_min: -1.5,
            vx_max: 1.5,
            spawn_vy_max: 2.0,
            rotation_speed_min: -2.5,
            rotation_speed_max: 2.5,
            size_min: 28.0,
            size_max: 56.0,
            max_speed: 15.0,
            collision_spin: 0.2,
            settled_opacity: 0.7,
            glyph: DEFAULT_GLYPH,
            palette: default_palette(),
            max_bodies: None,
        }
    }
}

impl PhysicsConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn palette_json(&self) -> String {
        serde_json::to_string(&self.palette).unwrap_or_else(|_| "[]".to_string())
    }

    #[inline]
    pub fn settle_horizontal_velocity(&self) -> f32 {
        self.settle_velocity * 0.5
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("gravity", self.gravity),
            ("floorFriction", self.floor_friction),
            ("bounceFactor", self.bounce_factor),
            ("bodyRestitution", self.body_restitution),
            ("settleVelocity", self.settle_velocity),
            ("settleDistance", self.settle_distance),
            ("settleRotationSpeed", self.settle_rotation_speed),
            ("vxMin", self.vx_min),
            ("vxMax", self.vx_max),
            ("spawnVyMax", self.spawn_vy_max),
            ("rotationSpeedMin", self.rotation_speed_min),
            ("rotationSpeedMax", self.rotation_speed_max),
            ("sizeMin", self.size_min),
            ("sizeMax", self.size_max),
            ("maxSpeed", self.max_speed),
            ("collisionSpin", self.collision_spin),
            ("settledOpacity", self.settled_opacity),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        for (field, value) in [
            ("floorFriction", self.floor_friction),
            ("bounceFactor", self.bounce_factor),
            ("bodyRestitution", self.body_restitution),
            ("settledOpacity", self.settled_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { field, value });
            }
        }

        for (field, value) in [("sizeMin", self.size_min), ("maxSpeed", self.max_speed)] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("settleVelocity", self.settle_velocity),
            ("settleDistance", self.settle_distance),
            ("settleRotationSpeed", self.settle_rotation_speed),
            ("spawnVyMax", self.spawn_vy_max),
            ("collisionSpin", self.collision_spin),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        for (min_field, min, max_field, max) in [
            ("vxMin", self.vx_min, "vxMax", self.vx_max),
            (
                "rotationSpeedMin",
                self.rotation_speed_min,
                "rotationSpeedMax",
                self.rotation_speed_max,
            ),
            ("sizeMin", self.size_min, "sizeMax", self.size_max),
        ] {
            if min > max {
                return Err(ConfigError::InvertedRange {
                    min_field,
                    min,
                    max_field,
                    max,
                });
            }
        }

        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.max_bodies == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }

        Ok(())
    }
}

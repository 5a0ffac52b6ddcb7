//! Game configuration.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CAMERA_HEADROOM, FRAGMENT_MASS, GRAVITY, MOVE_SPEED, ORIGINAL_BLOCK_SIZE, PHYSICS_DT,
    PLAY_FIELD_LIMIT, SPAWN_OFFSET,
};
use crate::error::{Error, Result};

/// Tunable gameplay parameters.
///
/// Defaults reproduce the classic game: a 3×3 base, constant speed, and
/// layers sliding in from ten units off-stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the base block.
    pub block_size: f32,
    /// Distance the moving layer travels per frame. Also used as the camera
    /// climb rate.
    pub speed: f32,
    /// Coordinate along the new movement axis where layers spawn.
    pub spawn_offset: f32,
    /// The moving layer is lost once its position passes this value.
    pub play_field_limit: f32,
    /// Camera height kept above the top placed layer.
    pub camera_headroom: f32,
    /// Camera position at session start and after restart.
    pub camera_start: Vec3,
    /// Fixed physics step in seconds.
    pub physics_dt: f32,
    /// Vertical gravity acceleration used by physics backends.
    pub gravity: f32,
    /// Mass given to falling debris.
    pub fragment_mass: f32,
    /// Turn a fully missed layer into falling debris instead of leaving it
    /// frozen in place.
    pub drop_missed_layer: bool,
    /// Maximum number of live overhang fragments. `None` keeps all of them.
    pub max_overhangs: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            block_size: ORIGINAL_BLOCK_SIZE,
            speed: MOVE_SPEED,
            spawn_offset: SPAWN_OFFSET,
            play_field_limit: PLAY_FIELD_LIMIT,
            camera_headroom: CAMERA_HEADROOM,
            camera_start: Vec3::splat(10.0),
            physics_dt: PHYSICS_DT,
            gravity: GRAVITY,
            fragment_mass: FRAGMENT_MASS,
            drop_missed_layer: true,
            max_overhangs: None,
        }
    }
}

impl GameConfig {
    /// Set the moving layer speed.
    #[must_use]
    pub const fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the base block size.
    #[must_use]
    pub const fn with_block_size(mut self, size: f32) -> Self {
        self.block_size = size;
        self
    }

    /// Choose whether missed layers fall as debris.
    #[must_use]
    pub const fn with_drop_missed_layer(mut self, drop: bool) -> Self {
        self.drop_missed_layer = drop;
        self
    }

    /// Cap the number of live overhang fragments.
    #[must_use]
    pub const fn with_max_overhangs(mut self, max: usize) -> Self {
        self.max_overhangs = Some(max);
        self
    }

    /// Check that every parameter is usable.
    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN must fail
    pub fn validate(&self) -> Result<()> {
        if !(self.block_size > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "block_size must be positive, got {}",
                self.block_size
            )));
        }
        if !(self.speed > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        if !(self.physics_dt > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "physics_dt must be positive, got {}",
                self.physics_dt
            )));
        }
        if !(self.fragment_mass > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "fragment_mass must be positive, got {}",
                self.fragment_mass
            )));
        }
        if !self.spawn_offset.is_finite() || !self.play_field_limit.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "spawn_offset ({}) and play_field_limit ({}) must be finite",
                self.spawn_offset, self.play_field_limit
            )));
        }
        if !(self.spawn_offset < self.play_field_limit) {
            return Err(Error::InvalidConfig(format!(
                "spawn_offset ({}) must be below play_field_limit ({})",
                self.spawn_offset, self.play_field_limit
            )));
        }
        if !self.camera_headroom.is_finite() || !self.camera_start.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "camera_headroom ({}) and camera_start ({}) must be finite",
                self.camera_headroom, self.camera_start
            )));
        }
        if !self.gravity.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if self.max_overhangs == Some(0) {
            return Err(Error::InvalidConfig(
                "max_overhangs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(GameConfig::default().with_speed(0.0).validate().is_err());
        assert!(GameConfig::default().with_speed(f32::NAN).validate().is_err());
        assert!(GameConfig::default().with_block_size(-1.0).validate().is_err());
        assert!(GameConfig::default().with_max_overhangs(0).validate().is_err());

        let config = GameConfig {
            spawn_offset: 12.0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_finite_values() {
        let cases = [
            GameConfig {
                play_field_limit: f32::NAN,
                ..GameConfig::default()
            },
            GameConfig {
                play_field_limit: f32::INFINITY,
                ..GameConfig::default()
            },
            GameConfig {
                spawn_offset: f32::NEG_INFINITY,
                ..GameConfig::default()
            },
            GameConfig {
                camera_headroom: f32::NAN,
                ..GameConfig::default()
            },
            GameConfig {
                camera_start: Vec3::new(10.0, f32::INFINITY, 10.0),
                ..GameConfig::default()
            },
            GameConfig {
                gravity: f32::NAN,
                ..GameConfig::default()
            },
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_massless_fragments() {
        for mass in [0.0, -5.0, f32::NAN] {
            let config = GameConfig {
                fragment_mass: mass,
                ..GameConfig::default()
            };
            assert!(config.validate().is_err());
        }
    }
}

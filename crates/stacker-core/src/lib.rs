//! Core types, constants, and collaborator traits for Stacker.
//!
//! This crate provides the foundational pieces shared by every other crate:
//! - Layer and fragment geometry types
//! - Movement axes and the derived per-layer values (height, color)
//! - The [`Gateway`] and [`Hud`] traits the game core calls into
//! - Game configuration and error types

pub mod config;
pub mod error;
pub mod gateway;
pub mod math;
pub mod types;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use gateway::{BodyDesc, BodyHandle, BodyKind, CameraView, Gateway, Hud, Pose, Projection};
pub use types::{layer_color, layer_y, Axis, Extent};

/// Game-wide constants, matching the defaults of [`GameConfig`].
pub mod constants {
    /// Side length of the base block (and the first moving block).
    pub const ORIGINAL_BLOCK_SIZE: f32 = 3.0;
    /// Height of every block.
    pub const BOX_HEIGHT: f32 = 1.0;
    /// Distance the moving block travels per frame.
    pub const MOVE_SPEED: f32 = 0.15;
    /// Off-stage coordinate new layers slide in from.
    pub const SPAWN_OFFSET: f32 = -10.0;
    /// Position along the movement axis past which the moving block is lost.
    pub const PLAY_FIELD_LIMIT: f32 = 10.0;
    /// Camera height kept above the top placed layer.
    pub const CAMERA_HEADROOM: f32 = 8.0;
    /// Fixed physics time step in seconds.
    pub const PHYSICS_DT: f32 = 1.0 / 60.0;
    /// Vertical gravity acceleration.
    pub const GRAVITY: f32 = -10.0;
    /// Mass of falling debris.
    pub const FRAGMENT_MASS: f32 = 5.0;
    /// Hue of the base layer in degrees.
    pub const BASE_HUE: f32 = 30.0;
    /// Hue shift per layer in degrees.
    pub const HUE_STEP: f32 = 4.0;
    /// Visible world width on portrait (or square) viewports.
    pub const VIEW_WIDTH_PORTRAIT: f32 = 10.0;
    /// Visible world width on landscape viewports.
    pub const VIEW_WIDTH_LANDSCAPE: f32 = 15.0;
    /// Near clip distance of the camera.
    pub const CAMERA_NEAR: f32 = 1.0;
    /// Far clip distance of the camera.
    pub const CAMERA_FAR: f32 = 100.0;
}

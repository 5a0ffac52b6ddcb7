//! Test doubles for Stacker.
//!
//! Provides collaborators that record every call so game logic can be
//! verified without a physics engine or a window.

pub mod gateway;
pub mod hud;

pub use gateway::RecordingGateway;
pub use hud::{HudCall, RecordingHud};

//! Gameplay for Stacker.
//!
//! A moving block slides back and forth over the tower; activating drops
//! it. Whatever hangs past the block beneath is cut off and falls away, and
//! the next block keeps only the part that landed. Missing the tower
//! entirely, or letting the block slide off the play field, ends the game.
//!
//! # Core Types
//!
//! - [`Session`]: the state machine and per-frame loop
//! - [`LayerStack`]: the tower, base first
//! - [`OverhangRegistry`]: cut-off fragments handed to physics
//! - [`align`]: pure overlap computation between two layers
//! - [`CameraRig`]: camera that climbs with the tower
//! - [`AutoPlayer`]: scripted player for demos
//!
//! # Usage
//!
//! ```ignore
//! use stacker_core::GameConfig;
//! use stacker_game::{GameEvent, Session};
//!
//! let mut session = Session::new(GameConfig::default(), gateway, hud)?;
//!
//! // From the input handler
//! session.enqueue(GameEvent::Activate);
//!
//! // Once per rendered frame
//! session.frame();
//! ```

pub mod alignment;
pub mod autoplay;
pub mod camera;
pub mod overhang;
pub mod session;
pub mod stack;

pub use alignment::{align, Alignment, Cut, OverhangSlice};
pub use autoplay::AutoPlayer;
pub use camera::CameraRig;
pub use overhang::{Fragment, OverhangRegistry};
pub use session::{EventOutcome, FrameOutcome, GameEvent, GameState, Session, SessionSnapshot};
pub use stack::{Layer, LayerStack};

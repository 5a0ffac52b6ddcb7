//! Windowed application framework for Stacker.
//!
//! Handles the boilerplate around a game window:
//! - Logging initialization
//! - Window creation
//! - Event loop handling and frame pacing
//!
//! Rendering and physics live behind the game's gateway, so an app only
//! updates its session once per frame.
//!
//! # Example
//!
//! ```no_run
//! use stacker_app::{run_app, AppConfig, AppContext, FrameContext, GameApp};
//!
//! struct MyApp;
//!
//! impl GameApp for MyApp {
//!     fn init(_ctx: &mut AppContext) -> anyhow::Result<Self> {
//!         Ok(MyApp)
//!     }
//!
//!     fn update(&mut self, _ctx: &AppContext, _frame: &FrameContext) {}
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     run_app::<MyApp>(AppConfig::default())
//! }
//! ```

mod app;
mod context;
mod frame;
mod logging;
mod runner;

pub use app::GameApp;
pub use context::AppContext;
pub use frame::{FrameContext, FrameStats};
pub use logging::init_logging;
pub use runner::{run_app, AppConfig};

// Re-export commonly used types for convenience
pub use winit::event::WindowEvent;

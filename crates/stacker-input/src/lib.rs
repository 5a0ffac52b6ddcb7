//! Input handling for Stacker.
//!
//! Window events from winit are mapped to [`GameEvent`]s through an
//! [`ActionMap`]. By default a left click or a touch activates when it is
//! released, Space activates on press, and R or Enter restarts.
//!
//! # Usage
//!
//! ```ignore
//! use stacker_input::InputManager;
//!
//! let mut input = InputManager::new();
//!
//! // In event handler
//! input.process_window_event(&event);
//!
//! // Once per frame
//! for event in input.drain_events() {
//!     session.enqueue(event);
//! }
//! ```
//!
//! [`GameEvent`]: stacker_game::GameEvent

mod action;
mod button_state;
mod input;

pub use action::{ActionMap, ActionMapBuilder, Binding, InputBinding, Trigger};
pub use button_state::ButtonState;
pub use input::InputManager;

// Re-export winit types commonly used with input
pub use winit::event::{MouseButton, WindowEvent};
pub use winit::keyboard::KeyCode;

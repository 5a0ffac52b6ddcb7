//! `GameApp` trait definition.

use winit::event::WindowEvent;

use crate::context::AppContext;
use crate::frame::FrameContext;

/// Trait for Stacker applications.
///
/// The framework owns the window and the event loop and calls back into
/// the app once per frame.
pub trait GameApp: Sized {
    /// Initialize the application.
    ///
    /// Called once after the window has been created.
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self>;

    /// Advance the game by one frame.
    ///
    /// # Arguments
    /// * `ctx` - Application context with window access
    /// * `frame` - Timing for this frame
    fn update(&mut self, ctx: &AppContext, frame: &FrameContext);

    /// Handle window events.
    ///
    /// Return `true` if the event was handled and should not be processed
    /// further. Default implementation returns `false`.
    #[allow(unused_variables)]
    fn on_event(&mut self, event: &WindowEvent) -> bool {
        false
    }

    /// Handle window resize. Default implementation does nothing.
    #[allow(unused_variables)]
    fn on_resize(&mut self, ctx: &mut AppContext, width: u32, height: u32) {}

    /// Called when the application is about to exit.
    #[allow(unused_variables)]
    fn cleanup(&mut self, ctx: &mut AppContext) {}
}

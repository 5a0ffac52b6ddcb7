//! Application context.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

/// Application context shared across all app methods.
pub struct AppContext {
    /// The window handle.
    pub window: Arc<Window>,
    /// Total frames run.
    pub frame_count: u64,
    /// Time of last frame (for delta time calculation).
    pub(crate) last_frame_time: Instant,
}

impl AppContext {
    pub(crate) fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            frame_count: 0,
            last_frame_time: Instant::now(),
        }
    }
}

//! Application runner and event loop.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::app::GameApp;
use crate::context::AppContext;
use crate::frame::{FrameContext, FrameStats};
use crate::logging::init_logging;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial window width.
    pub width: u32,
    /// Initial window height.
    pub height: u32,
    /// Target frames per second (None for unlimited).
    pub target_fps: Option<u32>,
    /// `RUST_LOG` fallback.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Stacker".to_string(),
            width: 720,
            height: 960,
            target_fps: Some(60),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new config with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window dimensions.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the target FPS. Zero means unlimited.
    #[must_use]
    pub const fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = if fps == 0 { None } else { Some(fps) };
        self
    }

    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Duration of one frame at the target rate.
    #[must_use]
    pub fn target_frame_time(&self) -> Option<Duration> {
        self.target_fps
            .map(|fps| Duration::from_nanos(1_000_000_000 / u64::from(fps)))
    }
}

/// Run a `GameApp` with the given configuration.
///
/// Initializes logging, creates the window, and runs the event loop until
/// the window is closed.
pub fn run_app<A: GameApp + 'static>(config: AppConfig) -> anyhow::Result<()> {
    init_logging(&config.log_filter);

    info!("{} starting...", config.title);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = AppRunner::<A> {
        config,
        state: None,
    };

    event_loop.run_app(&mut runner)?;
    Ok(())
}

/// Internal application runner that implements winit's `ApplicationHandler`.
struct AppRunner<A: GameApp> {
    config: AppConfig,
    state: Option<AppState<A>>,
}

struct AppState<A: GameApp> {
    ctx: AppContext,
    app: A,
    target_frame_time: Option<Duration>,
    stats: FrameStats,
}

impl<A: GameApp + 'static> ApplicationHandler for AppRunner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match self.create_state(event_loop) {
            Ok(state) => {
                self.state = Some(state);
                info!("Application ready!");
            }
            Err(e) => {
                error!("Failed to initialize application: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Let the app handle the event first
        if let Some(state) = &mut self.state {
            if state.app.on_event(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested");
                if let Some(mut state) = self.state.take() {
                    state.cleanup();
                }
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Some(state) = &mut self.state {
                    state.run_frame();
                    state.ctx.window.request_redraw();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    if size.width > 0 && size.height > 0 {
                        state.app.on_resize(&mut state.ctx, size.width, size.height);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.ctx.window.request_redraw();
        }
    }
}

impl<A: GameApp + 'static> AppRunner<A> {
    fn create_state(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<AppState<A>> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let mut ctx = AppContext::new(window);
        let app = A::init(&mut ctx)?;

        Ok(AppState {
            ctx,
            app,
            target_frame_time: self.config.target_frame_time(),
            stats: FrameStats::default(),
        })
    }
}

impl<A: GameApp> AppState<A> {
    fn run_frame(&mut self) {
        let frame_start = Instant::now();

        let dt = frame_start
            .duration_since(self.ctx.last_frame_time)
            .as_secs_f32();
        self.ctx.last_frame_time = frame_start;
        self.stats.record(dt);

        let frame = FrameContext::new(dt, self.ctx.frame_count);
        self.app.update(&self.ctx, &frame);
        self.ctx.frame_count += 1;

        // Frame pacing
        if let Some(target) = self.target_frame_time {
            let elapsed = frame_start.elapsed();
            if elapsed < target {
                thread::sleep(target - elapsed);
            }
        }
    }

    fn cleanup(&mut self) {
        if let (Some(min), Some(max), Some(avg)) =
            (self.stats.min(), self.stats.max(), self.stats.average())
        {
            info!("FPS Statistics:");
            info!("  Min: {min:.1}");
            info!("  Max: {max:.1}");
            info!("  Avg: {avg:.1}");
            info!("  Total frames: {}", self.ctx.frame_count);
        }

        self.app.cleanup(&mut self.ctx);
        info!("Cleanup complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_paces_at_sixty() {
        let config = AppConfig::default();
        assert_eq!(config.target_fps, Some(60));
        assert_eq!(
            config.target_frame_time(),
            Some(Duration::from_nanos(16_666_666))
        );
    }

    #[test]
    fn zero_fps_is_unlimited() {
        let config = AppConfig::new("test").with_target_fps(0).with_size(100, 200);
        assert!(config.target_frame_time().is_none());
        assert_eq!(config.title, "test");
        assert_eq!((config.width, config.height), (100, 200));
    }
}

//! Getting finished frames on screen.

use std::num::NonZeroU32;
use std::sync::Arc;

use softbuffer::{Context, Surface};
use tracing::debug;
use winit::window::Window;

use crate::error::{RenderError, Result};
use crate::raster::Framebuffer;

/// Destination for rendered frames.
pub trait Presenter {
    /// Called when the output size changes.
    fn resize(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    /// Show a finished frame.
    fn present(&mut self, frame: &Framebuffer) -> Result<()>;
}

/// Presents frames into a winit window through `softbuffer`.
pub struct WindowPresenter {
    surface: Surface<Arc<Window>, Arc<Window>>,
    size: Option<(NonZeroU32, NonZeroU32)>,
    _context: Context<Arc<Window>>,
}

impl WindowPresenter {
    /// Create a presenter for `window`, sized to its current inner size.
    pub fn new(window: Arc<Window>) -> Result<Self> {
        let context = Context::new(window.clone())?;
        let surface = Surface::new(&context, window.clone())?;
        let mut presenter = Self {
            surface,
            size: None,
            _context: context,
        };

        let size = window.inner_size();
        presenter.resize(size.width, size.height)?;
        Ok(presenter)
    }
}

impl Presenter for WindowPresenter {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        // A minimized window has no surface to draw into
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            self.size = None;
            return Ok(());
        };

        self.surface.resize(w, h)?;
        self.size = Some((w, h));
        debug!(width, height, "surface resized");
        Ok(())
    }

    fn present(&mut self, frame: &Framebuffer) -> Result<()> {
        let Some((w, h)) = self.size else {
            return Ok(());
        };

        let mut buffer = self.surface.buffer_mut()?;
        let surface_len = w.get() as usize * h.get() as usize;
        if frame.pixels().len() != surface_len || buffer.len() != surface_len {
            return Err(RenderError::SizeMismatch {
                frame_len: frame.pixels().len(),
                surface_len,
            });
        }

        buffer.copy_from_slice(frame.pixels());
        buffer.present()?;
        Ok(())
    }
}

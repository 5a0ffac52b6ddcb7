//! Per-frame timing.

/// Context for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Delta time since last frame in seconds.
    pub dt: f32,
    /// Current frame number.
    pub frame_number: u64,
}

impl FrameContext {
    pub(crate) const fn new(dt: f32, frame_number: u64) -> Self {
        Self { dt, frame_number }
    }
}

/// Running min/max/average frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    min_fps: f64,
    max_fps: f64,
    fps_sum: f64,
    samples: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            min_fps: f64::MAX,
            max_fps: 0.0,
            fps_sum: 0.0,
            samples: 0,
        }
    }
}

impl FrameStats {
    /// Record one frame. Zero-length frames are skipped.
    pub fn record(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let fps = 1.0 / f64::from(dt);
        self.min_fps = self.min_fps.min(fps);
        self.max_fps = self.max_fps.max(fps);
        self.fps_sum += fps;
        self.samples += 1;
    }

    #[must_use]
    pub const fn samples(&self) -> u64 {
        self.samples
    }

    #[must_use]
    pub fn min(&self) -> Option<f64> {
        (self.samples > 0).then_some(self.min_fps)
    }

    #[must_use]
    pub fn max(&self) -> Option<f64> {
        (self.samples > 0).then_some(self.max_fps)
    }

    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.samples > 0).then(|| self.fps_sum / self.samples as f64)
    }
}

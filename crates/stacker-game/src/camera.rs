//! Camera that climbs with the tower.

use glam::Vec3;
use stacker_core::constants::BOX_HEIGHT;
use stacker_core::math::approach;
use stacker_core::{CameraView, Projection};

/// Camera following the top of the tower.
///
/// The camera keeps its starting direction toward the origin and only ever
/// moves up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    start: Vec3,
    position: Vec3,
    headroom: f32,
    projection: Projection,
}

impl CameraRig {
    /// Create a camera at `start` looking at the origin, staying `headroom`
    /// above the top placed layer.
    #[must_use]
    pub fn new(start: Vec3, headroom: f32) -> Self {
        Self {
            start,
            position: start,
            headroom,
            projection: Projection::default(),
        }
    }

    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Height the camera climbs toward for a stack of `stack_len` layers.
    #[must_use]
    pub fn target_height(&self, stack_len: usize) -> f32 {
        BOX_HEIGHT.mul_add(stack_len.saturating_sub(1) as f32, self.headroom)
    }

    /// Climb toward the target height by at most `speed`.
    pub fn advance(&mut self, stack_len: usize, speed: f32) {
        self.position.y = approach(self.position.y, self.target_height(stack_len), speed);
    }

    #[must_use]
    pub const fn projection(&self) -> Projection {
        self.projection
    }

    /// Fit the frustum to a viewport of `width` x `height` pixels.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.projection = Projection::for_viewport(width, height);
    }

    /// Return to the starting position. The viewport is kept.
    pub fn reset(&mut self) {
        self.position = self.start;
    }

    /// Current view for the renderer.
    #[must_use]
    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            target: Vec3::new(0.0, self.position.y - self.start.y, 0.0),
            projection: self.projection,
        }
    }
}

//! Core geometry types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{BASE_HUE, BOX_HEIGHT, HUE_STEP};
use crate::math::hsl_to_rgb;

/// Horizontal axis a layer slides along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// The perpendicular horizontal axis.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Z,
            Self::Z => Self::X,
        }
    }

    /// Read this axis' component of a position.
    #[inline]
    #[must_use]
    pub const fn component(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Z => v.z,
        }
    }

    /// Overwrite this axis' component of a position.
    #[inline]
    pub fn set_component(self, v: &mut Vec3, value: f32) {
        match self {
            Self::X => v.x = value,
            Self::Z => v.z = value,
        }
    }

    /// Unit vector along this axis.
    #[inline]
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Z => Vec3::Z,
        }
    }
}

/// Horizontal footprint of a block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Size along x
    pub width: f32,
    /// Size along z
    pub depth: f32,
}

impl Extent {
    #[inline]
    #[must_use]
    pub const fn new(width: f32, depth: f32) -> Self {
        Self { width, depth }
    }

    /// Size along the given axis.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Z => self.depth,
        }
    }

    /// Copy with the size along `axis` replaced.
    #[inline]
    #[must_use]
    pub const fn with_along(self, axis: Axis, size: f32) -> Self {
        match axis {
            Axis::X => Self::new(size, self.depth),
            Axis::Z => Self::new(self.width, size),
        }
    }

    /// Full 3D box size for a block of the given height.
    #[inline]
    #[must_use]
    pub const fn to_size(self, height: f32) -> Vec3 {
        Vec3::new(self.width, height, self.depth)
    }

    /// Returns true if both sides are strictly positive.
    #[inline]
    #[must_use]
    pub fn is_solid(self) -> bool {
        self.width > 0.0 && self.depth > 0.0
    }
}

/// Height of the layer at `index` in the stack.
#[inline]
#[must_use]
pub fn layer_y(index: usize) -> f32 {
    BOX_HEIGHT * index as f32
}

/// sRGB color of the layer at `index`.
///
/// The hue walks from orange upward by a fixed step per layer.
#[must_use]
pub fn layer_color(index: usize) -> [f32; 3] {
    hsl_to_rgb(HUE_STEP.mul_add(index as f32, BASE_HUE), 1.0, 0.5)
}

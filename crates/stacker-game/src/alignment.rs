//! Overlap computation between the moving layer and the layer beneath it.
//!
//! [`align`] is pure: it reads two layers and describes the outcome. The
//! session applies a [`Cut`] to the stack and overhang registry.
//!
//! ```text
//!            delta
//!          |<----->|
//!          +-------+-------+---+     moving layer (size along axis)
//!          | kept (overlap)| cut|
//!  +-------+-------+-------+---+
//!  |     layer beneath     |
//!  +-----------------------+
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};
use stacker_core::math::sign;
use stacker_core::{Axis, Extent};

use crate::stack::Layer;

/// The part of a layer that hangs past the layer beneath and is cut off.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverhangSlice {
    pub position: Vec3,
    pub extent: Extent,
}

/// A successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    /// Axis the layer was moving along.
    pub axis: Axis,
    /// Offset of the moving layer from the layer beneath, along `axis`.
    pub delta: f32,
    /// Surviving size along `axis`. Always positive.
    pub overlap: f32,
    /// Center of the trimmed layer.
    pub position: Vec3,
    /// Footprint of the trimmed layer.
    pub extent: Extent,
    /// Cut-off piece, `None` on a perfect placement.
    pub overhang: Option<OverhangSlice>,
    /// Horizontal spawn point `(x, z)` of the next moving layer.
    pub next_spawn: (f32, f32),
    /// Axis the next layer moves along.
    pub next_axis: Axis,
}

/// Outcome of dropping the moving layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Alignment {
    Hit(Cut),
    /// No overlap left. `overlap` is zero or negative.
    Miss { delta: f32, overlap: f32 },
}

impl Alignment {
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }
}

/// Compute where the moving `top` layer lands on `below`.
///
/// An overlap of exactly zero is a miss. New layers spawn at `spawn_offset`
/// along the next axis.
///
/// # Panics
/// Panics if `top` has no movement axis (it is the base layer).
#[must_use]
pub fn align(top: &Layer, below: &Layer, spawn_offset: f32) -> Alignment {
    let axis = top.axis.expect("aligning a layer without a movement axis");

    let delta = axis.component(top.position) - axis.component(below.position);
    let overhang_size = delta.abs();
    let size = top.extent.along(axis);
    let overlap = size - overhang_size;

    if overlap <= 0.0 {
        return Alignment::Miss { delta, overlap };
    }

    let extent = top.extent.with_along(axis, overlap);
    let mut position = top.position;
    axis.set_component(&mut position, axis.component(top.position) - delta / 2.0);

    let overhang = (overhang_size > 0.0).then(|| {
        let shift = sign(delta) * (overlap / 2.0 + overhang_size / 2.0);
        OverhangSlice {
            position: position + axis.unit() * shift,
            extent: extent.with_along(axis, overhang_size),
        }
    });

    let next_axis = axis.other();
    let mut next = position;
    next_axis.set_component(&mut next, spawn_offset);

    Alignment::Hit(Cut {
        axis,
        delta,
        overlap,
        position,
        extent,
        overhang,
        next_spawn: (next.x, next.z),
        next_axis,
    })
}

//! Collaborator traits the game core calls into.
//!
//! The core never builds meshes or integrates rigid bodies itself. It
//! describes boxes through [`BodyDesc`] and asks a [`Gateway`] to create,
//! move, simulate, and draw them; score and game-over presentation go
//! through a [`Hud`].

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{CAMERA_FAR, CAMERA_NEAR, VIEW_WIDTH_LANDSCAPE, VIEW_WIDTH_PORTRAIT};

/// Opaque handle to a body created by a [`Gateway`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BodyHandle(pub u32);

/// How a body participates in the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// Placed layers: never move, other bodies collide with them.
    Static,
    /// The moving layer: positioned by the game each frame.
    Kinematic,
    /// Debris: falls under gravity.
    Dynamic,
}

/// Description of a box to create.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyDesc {
    /// Center of the box
    pub position: Vec3,
    /// Full size of the box along each axis
    pub size: Vec3,
    pub kind: BodyKind,
    /// Mass, only meaningful for dynamic bodies
    pub mass: f32,
    /// sRGB color
    pub color: [f32; 3],
}

impl BodyDesc {
    /// Describe a box of the given kind with zero mass and white color.
    #[must_use]
    pub const fn new(position: Vec3, size: Vec3, kind: BodyKind) -> Self {
        Self {
            position,
            size,
            kind,
            mass: 0.0,
            color: [1.0, 1.0, 1.0],
        }
    }

    #[must_use]
    pub const fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Returns true if the body falls under gravity.
    #[inline]
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self.kind, BodyKind::Dynamic)
    }
}

/// Simulated pose of a body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    #[must_use]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }
}

/// Orthographic frustum centered on the view axis, in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub width: f32,
    pub height: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// Frustum for a viewport of `width` x `height` pixels.
    ///
    /// Portrait and square viewports show 10 world units across, landscape
    /// ones 15. The visible height follows the aspect ratio.
    #[must_use]
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let aspect = height.max(1) as f32 / width.max(1) as f32;
        let view_width = if aspect >= 1.0 {
            VIEW_WIDTH_PORTRAIT
        } else {
            VIEW_WIDTH_LANDSCAPE
        };
        Self {
            width: view_width,
            height: view_width * aspect,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    /// Projection matrix mapping view space to clip space, depth in `0..=1`.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let (hw, hh) = (self.width * 0.5, self.height * 0.5);
        Mat4::orthographic_rh(-hw, hw, -hh, hh, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::for_viewport(1, 1)
    }
}

/// Camera placement handed to the renderer each frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vec3,
    pub target: Vec3,
    pub projection: Projection,
}

impl CameraView {
    /// View from `position` toward `target` with a square viewport.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            projection: Projection::default(),
        }
    }

    #[must_use]
    pub const fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Unit vector the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// World to clip space, y up.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection.matrix() * Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

/// Physics and rendering backend.
///
/// Implementations own every visual and physical representation. The
/// session holds only [`BodyHandle`]s.
pub trait Gateway {
    /// Create a box and return its handle.
    fn create_body(&mut self, desc: &BodyDesc) -> BodyHandle;

    /// Move a body to a new translation. Used for the kinematic moving layer.
    fn set_body_translation(&mut self, handle: BodyHandle, position: Vec3);

    /// Remove a body and its visual. Unknown handles are ignored.
    fn remove_body(&mut self, handle: BodyHandle);

    /// Advance the simulation by `dt` seconds.
    fn step_simulation(&mut self, dt: f32);

    /// Current pose of a body, or `None` if the handle is unknown.
    fn body_pose(&self, handle: BodyHandle) -> Option<Pose>;

    /// Draw the current scene.
    fn render_frame(&mut self, camera: &CameraView);

    /// Remove every body and visual.
    fn clear_visuals(&mut self);
}

/// Score and game-over presentation.
pub trait Hud {
    fn set_score(&mut self, score: u32);

    fn set_game_over_visible(&mut self, visible: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_desc_builder() {
        let desc = BodyDesc::new(Vec3::ZERO, Vec3::ONE, BodyKind::Dynamic)
            .with_mass(5.0)
            .with_color([0.5, 0.25, 0.0]);

        assert!(desc.is_dynamic());
        assert_eq!(desc.mass, 5.0);
        assert_eq!(desc.color, [0.5, 0.25, 0.0]);
        assert!(!BodyDesc::new(Vec3::ZERO, Vec3::ONE, BodyKind::Static).is_dynamic());
    }

    #[test]
    fn projection_follows_aspect_ratio() {
        let portrait = Projection::for_viewport(720, 960);
        assert_eq!(portrait.width, 10.0);
        assert!((portrait.height - 40.0 / 3.0).abs() < 1e-5);

        let landscape = Projection::for_viewport(1280, 720);
        assert_eq!(landscape.width, 15.0);
        assert!((landscape.height - 8.4375).abs() < 1e-5);

        let square = Projection::default();
        assert_eq!((square.width, square.height), (10.0, 10.0));
        assert_eq!((square.near, square.far), (1.0, 100.0));

        // Degenerate sizes still give a usable frustum
        assert!(Projection::for_viewport(0, 0).height > 0.0);
    }

    #[test]
    fn look_target_lands_in_the_middle() {
        let camera = CameraView::new(Vec3::splat(10.0), Vec3::ZERO);
        let ndc = camera.view_projection().project_point3(Vec3::ZERO);

        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);

        // Up in the world is up on screen
        let above = camera.view_projection().project_point3(Vec3::Y);
        assert!(above.y > 0.0);
    }

    #[test]
    fn points_behind_the_near_plane_are_clipped() {
        let camera = CameraView::new(Vec3::splat(10.0), Vec3::ZERO);
        let ndc = camera.view_projection().project_point3(Vec3::splat(10.0));
        assert!(ndc.z < 0.0);
    }
}

//! Gateway that records bodies instead of simulating them.

use glam::Vec3;
use hashbrown::HashMap;
use stacker_core::{BodyDesc, BodyHandle, CameraView, Gateway, Pose};

/// A body as seen by the recording gateway.
#[derive(Debug, Clone, Copy)]
struct RecordedBody {
    desc: BodyDesc,
    translation: Vec3,
    pose: Option<Pose>,
}

/// Gateway double.
///
/// Bodies never move on their own. Tests drive poses with
/// [`RecordingGateway::set_pose`] and inspect what the game asked for.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    bodies: HashMap<BodyHandle, RecordedBody>,
    next_handle: u32,
    created: usize,
    steps: usize,
    simulated_time: f32,
    frames_rendered: usize,
    clears: usize,
    last_camera: Option<CameraView>,
}

impl RecordingGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Description a live body was created with, `None` once removed.
    #[must_use]
    pub fn desc(&self, handle: BodyHandle) -> Option<BodyDesc> {
        self.bodies.get(&handle).map(|b| b.desc)
    }

    /// Last translation set for a live body.
    #[must_use]
    pub fn translation(&self, handle: BodyHandle) -> Option<Vec3> {
        self.bodies.get(&handle).map(|b| b.translation)
    }

    /// Override the pose reported for a body.
    pub fn set_pose(&mut self, handle: BodyHandle, pose: Pose) {
        if let Some(body) = self.bodies.get_mut(&handle) {
            body.pose = Some(pose);
        }
    }

    /// Number of live bodies.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of bodies ever created.
    #[must_use]
    pub const fn created(&self) -> usize {
        self.created
    }

    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Sum of every `dt` passed to [`Gateway::step_simulation`].
    #[must_use]
    pub const fn simulated_time(&self) -> f32 {
        self.simulated_time
    }

    #[must_use]
    pub const fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    #[must_use]
    pub const fn clears(&self) -> usize {
        self.clears
    }

    #[must_use]
    pub const fn last_camera(&self) -> Option<CameraView> {
        self.last_camera
    }
}

impl Gateway for RecordingGateway {
    fn create_body(&mut self, desc: &BodyDesc) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        self.created += 1;
        self.bodies.insert(
            handle,
            RecordedBody {
                desc: *desc,
                translation: desc.position,
                pose: None,
            },
        );
        handle
    }

    fn set_body_translation(&mut self, handle: BodyHandle, position: Vec3) {
        if let Some(body) = self.bodies.get_mut(&handle) {
            body.translation = position;
        }
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        self.bodies.remove(&handle);
    }

    fn step_simulation(&mut self, dt: f32) {
        self.steps += 1;
        self.simulated_time += dt;
    }

    fn body_pose(&self, handle: BodyHandle) -> Option<Pose> {
        self.bodies.get(&handle).map(|b| {
            b.pose
                .unwrap_or_else(|| Pose::from_position(b.translation))
        })
    }

    fn render_frame(&mut self, camera: &CameraView) {
        self.frames_rendered += 1;
        self.last_camera = Some(*camera);
    }

    fn clear_visuals(&mut self) {
        self.bodies.clear();
        self.clears += 1;
    }
}

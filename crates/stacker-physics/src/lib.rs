//! Rigid-body physics for Stacker.
//!
//! [`RapierGateway`] implements the core [`Gateway`] on top of Rapier's
//! physics pipeline. Placed layers are fixed bodies, the moving layer is a
//! kinematic body, and cut-off fragments are dynamic boxes that tumble off
//! the tower.

use glam::{Quat, Vec3};
use hashbrown::HashMap;
use rapier3d::prelude::*;
use stacker_core::{BodyDesc, BodyHandle, BodyKind, CameraView, Gateway, Pose};
use tracing::{debug, trace};

pub use rapier3d;

/// A body as tracked by the gateway.
#[derive(Debug, Clone, Copy)]
pub struct BodyVisual {
    /// Full box size.
    pub size: Vec3,
    /// sRGB color.
    pub color: [f32; 3],
    pub kind: BodyKind,
    rigid_body: RigidBodyHandle,
}

/// Physics gateway backed by Rapier.
///
/// Rendering is limited to bookkeeping: each rendered frame records the
/// camera and is counted. [`RapierGateway::visuals`] exposes everything a
/// renderer needs to draw the scene; `stacker-render` wraps this gateway to
/// put it on screen.
pub struct RapierGateway {
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    gravity: Vector<Real>,
    bodies: HashMap<BodyHandle, BodyVisual>,
    next_handle: u32,
    frames_rendered: u64,
    last_camera: Option<CameraView>,
}

impl RapierGateway {
    /// Create an empty world with vertical gravity `gravity_y`.
    pub fn new(gravity_y: f32) -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            gravity: vector![0.0, gravity_y, 0.0],
            bodies: HashMap::new(),
            next_handle: 0,
            frames_rendered: 0,
            last_camera: None,
        }
    }

    /// Number of live bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of frames rendered since creation.
    pub const fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Camera used by the most recent rendered frame.
    pub const fn last_camera(&self) -> Option<CameraView> {
        self.last_camera
    }

    /// Iterate all bodies with their current pose.
    pub fn visuals(&self) -> impl Iterator<Item = (BodyHandle, &BodyVisual, Pose)> + '_ {
        self.bodies.iter().filter_map(|(handle, visual)| {
            self.pose_of(visual.rigid_body)
                .map(|pose| (*handle, visual, pose))
        })
    }

    fn pose_of(&self, handle: RigidBodyHandle) -> Option<Pose> {
        self.rigid_body_set.get(handle).map(|body| {
            let t = body.translation();
            let r = body.rotation();
            Pose {
                position: Vec3::new(t.x, t.y, t.z),
                orientation: Quat::from_xyzw(r.i, r.j, r.k, r.w),
            }
        })
    }
}

impl Default for RapierGateway {
    fn default() -> Self {
        Self::new(stacker_core::constants::GRAVITY)
    }
}

impl Gateway for RapierGateway {
    fn create_body(&mut self, desc: &BodyDesc) -> BodyHandle {
        let translation = vector![desc.position.x, desc.position.y, desc.position.z];
        let builder = match desc.kind {
            BodyKind::Static => RigidBodyBuilder::fixed(),
            BodyKind::Kinematic => RigidBodyBuilder::kinematic_position_based(),
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
        };
        let rigid_body = self
            .rigid_body_set
            .insert(builder.translation(translation).build());

        let half = desc.size * 0.5;
        let mut collider = ColliderBuilder::cuboid(half.x, half.y, half.z);
        if desc.is_dynamic() && desc.mass > 0.0 {
            collider = collider.mass(desc.mass);
        }
        self.collider_set
            .insert_with_parent(collider.build(), rigid_body, &mut self.rigid_body_set);

        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        self.bodies.insert(
            handle,
            BodyVisual {
                size: desc.size,
                color: desc.color,
                kind: desc.kind,
                rigid_body,
            },
        );

        trace!(?handle, kind = ?desc.kind, position = ?desc.position, size = ?desc.size, "body created");
        handle
    }

    fn set_body_translation(&mut self, handle: BodyHandle, position: Vec3) {
        let Some(visual) = self.bodies.get(&handle) else {
            return;
        };
        let Some(body) = self.rigid_body_set.get_mut(visual.rigid_body) else {
            return;
        };
        let translation = vector![position.x, position.y, position.z];
        if body.is_kinematic() {
            body.set_next_kinematic_translation(translation);
        } else {
            body.set_translation(translation, true);
        }
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        if let Some(visual) = self.bodies.remove(&handle) {
            self.rigid_body_set.remove(
                visual.rigid_body,
                &mut self.island_manager,
                &mut self.collider_set,
                &mut self.impulse_joint_set,
                &mut self.multibody_joint_set,
                true,
            );
        }
    }

    fn step_simulation(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    fn body_pose(&self, handle: BodyHandle) -> Option<Pose> {
        self.bodies
            .get(&handle)
            .and_then(|visual| self.pose_of(visual.rigid_body))
    }

    fn render_frame(&mut self, camera: &CameraView) {
        self.frames_rendered += 1;
        self.last_camera = Some(*camera);
        trace!(
            frame = self.frames_rendered,
            bodies = self.bodies.len(),
            camera_y = camera.position.y,
            "frame rendered"
        );
    }

    fn clear_visuals(&mut self) {
        debug!(bodies = self.bodies.len(), "clearing physics world");
        self.bodies.clear();
        self.rigid_body_set = RigidBodySet::new();
        self.collider_set = ColliderSet::new();
        self.impulse_joint_set = ImpulseJointSet::new();
        self.multibody_joint_set = MultibodyJointSet::new();
        self.island_manager = IslandManager::new();
        self.broad_phase = DefaultBroadPhase::new();
        self.narrow_phase = NarrowPhase::new();
        self.ccd_solver = CCDSolver::new();
    }
}

//! Cut-off fragments falling away from the tower.

use std::collections::VecDeque;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use stacker_core::constants::BOX_HEIGHT;
use stacker_core::{BodyDesc, BodyHandle, BodyKind, Extent, Gateway, Pose};
use tracing::trace;

/// A trimmed-off piece of a layer, simulated as a free body.
///
/// `position` and `extent` are fixed at the cut. `pose` mirrors the
/// simulation and is refreshed by [`OverhangRegistry::sync_all`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub position: Vec3,
    pub extent: Extent,
    pub body: BodyHandle,
    pub pose: Pose,
}

/// Every fragment spawned during a session, oldest first.
#[derive(Debug, Clone)]
pub struct OverhangRegistry {
    fragments: VecDeque<Fragment>,
    mass: f32,
    cap: Option<usize>,
}

impl OverhangRegistry {
    /// Create a registry giving each fragment `mass`.
    ///
    /// With a `cap`, the oldest fragment is despawned once more than `cap`
    /// are alive.
    #[must_use]
    pub const fn new(mass: f32, cap: Option<usize>) -> Self {
        Self {
            fragments: VecDeque::new(),
            mass,
            cap,
        }
    }

    /// Spawn a dynamic fragment centered at `position`.
    pub fn add_overhang<G: Gateway + ?Sized>(
        &mut self,
        gateway: &mut G,
        position: Vec3,
        extent: Extent,
        color: [f32; 3],
    ) -> &Fragment {
        let body = gateway.create_body(
            &BodyDesc::new(position, extent.to_size(BOX_HEIGHT), BodyKind::Dynamic)
                .with_mass(self.mass)
                .with_color(color),
        );
        trace!(?position, ?extent, "overhang spawned");

        self.fragments.push_back(Fragment {
            position,
            extent,
            body,
            pose: Pose::from_position(position),
        });

        if let Some(cap) = self.cap {
            while self.fragments.len() > cap {
                if let Some(old) = self.fragments.pop_front() {
                    gateway.remove_body(old.body);
                }
            }
        }

        self.fragments
            .back()
            .expect("fragment was just pushed")
    }

    /// Copy each fragment's simulated pose from the gateway.
    pub fn sync_all<G: Gateway + ?Sized>(&mut self, gateway: &G) {
        for fragment in &mut self.fragments {
            if let Some(pose) = gateway.body_pose(fragment.body) {
                fragment.pose = pose;
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    /// Forget every fragment. Bodies are cleared separately by the gateway.
    pub fn clear(&mut self) {
        self.fragments.clear();
    }
}

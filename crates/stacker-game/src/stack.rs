//! The tower of placed layers.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use stacker_core::constants::BOX_HEIGHT;
use stacker_core::{layer_color, layer_y, Axis, BodyDesc, BodyHandle, BodyKind, Extent, Gateway};
use tracing::trace;

/// One block of the tower.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Center of the block. `y` never changes after creation.
    pub position: Vec3,
    pub extent: Extent,
    /// Axis the layer slides along. `None` for the base.
    pub axis: Option<Axis>,
    /// Whether the layer has been dropped and is now fixed.
    pub placed: bool,
    pub body: BodyHandle,
}

impl Layer {
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.extent.width
    }

    #[inline]
    #[must_use]
    pub const fn depth(&self) -> f32 {
        self.extent.depth
    }

    /// Returns true while the layer is still sliding.
    #[inline]
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        self.axis.is_some() && !self.placed
    }

    /// Full box size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Vec3 {
        self.extent.to_size(BOX_HEIGHT)
    }
}

/// Ordered sequence of layers; index 0 is the base.
#[derive(Debug, Default, Clone)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append a layer on top of the tower.
    ///
    /// The layer's height and color derive from its index. A layer with an
    /// axis is the new moving layer and gets a kinematic body; the base gets
    /// a static one.
    pub fn add_layer<G: Gateway + ?Sized>(
        &mut self,
        gateway: &mut G,
        x: f32,
        z: f32,
        extent: Extent,
        axis: Option<Axis>,
    ) -> &Layer {
        debug_assert!(extent.is_solid(), "layer extent must be positive");

        let index = self.layers.len();
        let position = Vec3::new(x, layer_y(index), z);
        let kind = if axis.is_some() {
            BodyKind::Kinematic
        } else {
            BodyKind::Static
        };
        let body = gateway.create_body(
            &BodyDesc::new(position, extent.to_size(BOX_HEIGHT), kind)
                .with_color(layer_color(index)),
        );

        trace!(index, ?position, ?extent, ?axis, "layer added");
        self.layers.push(Layer {
            position,
            extent,
            axis,
            placed: axis.is_none(),
            body,
        });
        &self.layers[index]
    }

    /// Fix the top layer in place with a new footprint.
    ///
    /// The old body is replaced by a static one of the trimmed size.
    pub fn place_top<G: Gateway + ?Sized>(&mut self, gateway: &mut G, position: Vec3, extent: Extent) {
        let index = self.layers.len() - 1;
        let top = self.top_mut();
        debug_assert_eq!(top.position.y, position.y, "placement must keep layer height");

        gateway.remove_body(top.body);
        top.body = gateway.create_body(
            &BodyDesc::new(position, extent.to_size(BOX_HEIGHT), BodyKind::Static)
                .with_color(layer_color(index)),
        );
        top.position = position;
        top.extent = extent;
        top.placed = true;
    }

    /// Remove and return the top layer. Its body is left to the caller.
    pub fn pop(&mut self) -> Option<Layer> {
        self.layers.pop()
    }

    /// The top layer.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    #[must_use]
    pub fn top(&self) -> &Layer {
        self.layers.last().expect("layer stack is empty")
    }

    /// The top layer, mutably.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn top_mut(&mut self) -> &mut Layer {
        self.layers.last_mut().expect("layer stack is empty")
    }

    /// The layer directly beneath the top.
    ///
    /// # Panics
    /// Panics if the stack has fewer than two layers.
    #[must_use]
    pub fn second_from_top(&self) -> &Layer {
        let len = self.layers.len();
        assert!(len >= 2, "layer stack has {len} layers, need at least 2");
        &self.layers[len - 2]
    }

    /// Number of layers, base included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Layer] {
        &self.layers
    }

    /// Drop every layer. Bodies are cleared separately by the gateway.
    pub fn clear(&mut self) {
        self.layers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacker_test::RecordingGateway;

    #[test]
    fn layers_stack_upward() {
        let mut gateway = RecordingGateway::new();
        let mut stack = LayerStack::new();

        stack.add_layer(&mut gateway, 0.0, 0.0, Extent::new(3.0, 3.0), None);
        stack.add_layer(&mut gateway, -10.0, 0.0, Extent::new(3.0, 3.0), Some(Axis::X));
        stack.add_layer(&mut gateway, 0.0, -10.0, Extent::new(2.0, 3.0), Some(Axis::Z));

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top().position, Vec3::new(0.0, 2.0, -10.0));
        assert_eq!(stack.second_from_top().position, Vec3::new(-10.0, 1.0, 0.0));
        assert_eq!(stack.top().width(), 2.0);
    }

    #[test]
    fn base_is_static_and_moving_layer_kinematic() {
        let mut gateway = RecordingGateway::new();
        let mut stack = LayerStack::new();

        let base = *stack.add_layer(&mut gateway, 0.0, 0.0, Extent::new(3.0, 3.0), None);
        let moving = *stack.add_layer(&mut gateway, -10.0, 0.0, Extent::new(3.0, 3.0), Some(Axis::X));

        assert!(!base.is_moving());
        assert!(moving.is_moving());
        assert_eq!(gateway.desc(base.body).unwrap().kind, BodyKind::Static);
        assert_eq!(gateway.desc(moving.body).unwrap().kind, BodyKind::Kinematic);
    }

    #[test]
    fn place_top_regenerates_body() {
        let mut gateway = RecordingGateway::new();
        let mut stack = LayerStack::new();
        stack.add_layer(&mut gateway, 0.0, 0.0, Extent::new(3.0, 3.0), None);
        let old = stack
            .add_layer(&mut gateway, 2.0, 0.0, Extent::new(3.0, 3.0), Some(Axis::X))
            .body;

        stack.place_top(&mut gateway, Vec3::new(1.0, 1.0, 0.0), Extent::new(1.0, 3.0));

        let top = stack.top();
        assert!(top.placed);
        assert!(!top.is_moving());
        assert_ne!(top.body, old);
        assert!(gateway.desc(old).is_none());

        let desc = gateway.desc(top.body).unwrap();
        assert_eq!(desc.kind, BodyKind::Static);
        assert_eq!(desc.size, Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(desc.position, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "need at least 2")]
    fn second_from_top_on_base_only_panics() {
        let mut gateway = RecordingGateway::new();
        let mut stack = LayerStack::new();
        stack.add_layer(&mut gateway, 0.0, 0.0, Extent::new(3.0, 3.0), None);

        let _ = stack.second_from_top();
    }

    #[test]
    fn clear_empties_stack() {
        let mut gateway = RecordingGateway::new();
        let mut stack = LayerStack::new();
        stack.add_layer(&mut gateway, 0.0, 0.0, Extent::new(3.0, 3.0), None);

        stack.clear();
        assert!(stack.is_empty());
    }
}

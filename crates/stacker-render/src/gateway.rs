//! Physics gateway that draws what it simulates.

use glam::Vec3;
use stacker_core::{BodyDesc, BodyHandle, CameraView, Gateway, Pose};
use stacker_physics::RapierGateway;
use tracing::{debug, warn};

use crate::error::Result;
use crate::presenter::Presenter;
use crate::raster::Framebuffer;
use crate::scene::{DrawBox, SceneRenderer};

/// Wraps a [`RapierGateway`] and draws its bodies on every rendered frame.
///
/// Body calls go straight to the physics world. `render_frame` rasterizes
/// every body at its simulated pose and hands the frame to the presenter.
pub struct RenderGateway<P> {
    physics: RapierGateway,
    renderer: SceneRenderer,
    framebuffer: Framebuffer,
    presenter: P,
    frames_presented: u64,
}

impl<P: Presenter> RenderGateway<P> {
    #[must_use]
    pub fn new(physics: RapierGateway, presenter: P, width: u32, height: u32) -> Self {
        Self {
            physics,
            renderer: SceneRenderer::new(),
            framebuffer: Framebuffer::new(width, height),
            presenter,
            frames_presented: 0,
        }
    }

    /// Resize the framebuffer and the presenter's output.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        debug!(width, height, "render target resized");
        self.framebuffer.resize(width, height);
        self.presenter.resize(width, height)
    }

    pub const fn physics(&self) -> &RapierGateway {
        &self.physics
    }

    /// The most recently drawn frame.
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub const fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl<P: Presenter> Gateway for RenderGateway<P> {
    fn create_body(&mut self, desc: &BodyDesc) -> BodyHandle {
        self.physics.create_body(desc)
    }

    fn set_body_translation(&mut self, handle: BodyHandle, position: Vec3) {
        self.physics.set_body_translation(handle, position);
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        self.physics.remove_body(handle);
    }

    fn step_simulation(&mut self, dt: f32) {
        self.physics.step_simulation(dt);
    }

    fn body_pose(&self, handle: BodyHandle) -> Option<Pose> {
        self.physics.body_pose(handle)
    }

    fn render_frame(&mut self, camera: &CameraView) {
        self.physics.render_frame(camera);

        let boxes = self.physics.visuals().map(|(_, visual, pose)| DrawBox {
            position: pose.position,
            orientation: pose.orientation,
            size: visual.size,
            color: visual.color,
        });
        self.renderer.render(&mut self.framebuffer, camera, boxes);

        match self.presenter.present(&self.framebuffer) {
            Ok(()) => self.frames_presented += 1,
            Err(err) => warn!(%err, "failed to present frame"),
        }
    }

    fn clear_visuals(&mut self) {
        self.physics.clear_visuals();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::pack_rgb;
    use crate::scene::BACKGROUND;
    use stacker_core::BodyKind;

    #[derive(Default)]
    struct CapturePresenter {
        frames: Vec<Vec<u32>>,
        resized: Vec<(u32, u32)>,
    }

    impl Presenter for CapturePresenter {
        fn resize(&mut self, width: u32, height: u32) -> Result<()> {
            self.resized.push((width, height));
            Ok(())
        }

        fn present(&mut self, frame: &Framebuffer) -> Result<()> {
            self.frames.push(frame.pixels().to_vec());
            Ok(())
        }
    }

    fn gateway() -> RenderGateway<CapturePresenter> {
        RenderGateway::new(RapierGateway::default(), CapturePresenter::default(), 64, 64)
    }

    fn camera() -> CameraView {
        CameraView::new(Vec3::splat(10.0), Vec3::ZERO)
    }

    const COLOR: [f32; 3] = [0.9, 0.5, 0.1];

    fn base(gateway: &mut RenderGateway<CapturePresenter>) -> BodyHandle {
        gateway.create_body(
            &BodyDesc::new(Vec3::ZERO, Vec3::new(3.0, 1.0, 3.0), BodyKind::Static)
                .with_color(COLOR),
        )
    }

    #[test]
    fn draws_bodies_and_presents() {
        let mut gateway = gateway();
        base(&mut gateway);

        gateway.render_frame(&camera());

        let presenter = gateway.presenter();
        assert_eq!(presenter.frames.len(), 1);
        assert_eq!(presenter.frames[0][32 * 64 + 32], pack_rgb(COLOR));
        assert_eq!(presenter.frames[0][0], BACKGROUND);
        assert_eq!(gateway.frames_presented(), 1);
        assert_eq!(gateway.physics().frames_rendered(), 1);
        assert_eq!(gateway.physics().last_camera(), Some(camera()));
    }

    #[test]
    fn empty_scene_is_background() {
        let mut gateway = gateway();
        gateway.render_frame(&camera());

        assert!(gateway.framebuffer().pixels().iter().all(|&p| p == BACKGROUND));
    }

    #[test]
    fn cleared_world_draws_nothing() {
        let mut gateway = gateway();
        let handle = base(&mut gateway);
        gateway.render_frame(&camera());

        gateway.clear_visuals();
        gateway.render_frame(&camera());

        assert!(gateway.body_pose(handle).is_none());
        assert!(gateway.framebuffer().pixels().iter().all(|&p| p == BACKGROUND));
        assert_eq!(gateway.frames_presented(), 2);
    }

    #[test]
    fn resize_reaches_the_presenter() {
        let mut gateway = gateway();
        gateway.resize(40, 30).unwrap();
        gateway.render_frame(&camera());

        assert_eq!(gateway.presenter().resized, vec![(40, 30)]);
        assert_eq!(gateway.presenter().frames[0].len(), 40 * 30);
    }

    #[test]
    fn moved_body_is_drawn_where_it_went() {
        let mut gateway = gateway();
        let handle = gateway.create_body(
            &BodyDesc::new(Vec3::ZERO, Vec3::new(3.0, 1.0, 3.0), BodyKind::Kinematic)
                .with_color(COLOR),
        );
        gateway.set_body_translation(handle, Vec3::new(0.0, -20.0, 0.0));
        gateway.step_simulation(1.0 / 60.0);
        gateway.render_frame(&camera());

        assert_eq!(gateway.framebuffer().pixel(32, 32), Some(BACKGROUND));
    }
}

//! Box scene drawing.

use glam::{Quat, Vec3};
use stacker_core::CameraView;

use crate::raster::{pack_rgb, Framebuffer};

/// Clear color behind the tower.
pub const BACKGROUND: u32 = 0x0000_0000;

/// A box to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawBox {
    /// Center of the box
    pub position: Vec3,
    pub orientation: Quat,
    /// Full size along each local axis
    pub size: Vec3,
    /// sRGB color
    pub color: [f32; 3],
}

/// White ambient light plus one white directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub directional: f32,
    /// Unit vector pointing toward the directional light.
    pub direction: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.6,
            directional: 0.6,
            direction: Vec3::new(10.0, 20.0, 0.0).normalize(),
        }
    }
}

impl Lighting {
    /// Brightness of a surface with unit normal `normal`, at most 1.
    #[must_use]
    pub fn intensity(&self, normal: Vec3) -> f32 {
        self.directional
            .mul_add(normal.dot(self.direction).max(0.0), self.ambient)
            .min(1.0)
    }
}

/// Corner indices of each face, counter-clockwise seen from outside, with
/// the face's local normal. Bit 0 of a corner index picks +x, bit 1 +y and
/// bit 2 +z.
const FACES: [([usize; 4], Vec3); 6] = [
    ([1, 3, 7, 5], Vec3::X),
    ([0, 4, 6, 2], Vec3::NEG_X),
    ([2, 6, 7, 3], Vec3::Y),
    ([0, 1, 5, 4], Vec3::NEG_Y),
    ([4, 5, 7, 6], Vec3::Z),
    ([0, 2, 3, 1], Vec3::NEG_Z),
];

/// Draws lit boxes into a [`Framebuffer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneRenderer {
    pub lighting: Lighting,
}

impl SceneRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear `target` and draw `boxes` as seen from `camera`.
    pub fn render(
        &self,
        target: &mut Framebuffer,
        camera: &CameraView,
        boxes: impl IntoIterator<Item = DrawBox>,
    ) {
        target.clear(BACKGROUND);

        let view_projection = camera.view_projection();
        let forward = camera.forward();
        let (width, height) = (target.width() as f32, target.height() as f32);
        let to_screen = |world: Vec3| {
            let ndc = view_projection.project_point3(world);
            Vec3::new(
                (ndc.x + 1.0) * 0.5 * width,
                (1.0 - ndc.y) * 0.5 * height,
                ndc.z,
            )
        };

        for draw in boxes {
            let half = draw.size * 0.5;
            let corners: [Vec3; 8] = std::array::from_fn(|i| {
                let local = Vec3::new(
                    if i & 1 == 0 { -half.x } else { half.x },
                    if i & 2 == 0 { -half.y } else { half.y },
                    if i & 4 == 0 { -half.z } else { half.z },
                );
                to_screen(draw.position + draw.orientation * local)
            });

            for (quad, local_normal) in FACES {
                let normal = draw.orientation * local_normal;
                if normal.dot(forward) >= 0.0 {
                    continue;
                }

                let shade = self.lighting.intensity(normal);
                let color = pack_rgb(draw.color.map(|c| c * shade));
                let [a, b, c, d] = quad.map(|i| corners[i]);
                target.fill_triangle(a, b, c, color);
                target.fill_triangle(a, c, d, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> CameraView {
        CameraView::new(Vec3::splat(10.0), Vec3::ZERO)
    }

    fn slab(position: Vec3, color: [f32; 3]) -> DrawBox {
        DrawBox {
            position,
            orientation: Quat::IDENTITY,
            size: Vec3::new(3.0, 1.0, 3.0),
            color,
        }
    }

    #[test]
    fn light_from_above_saturates_top_faces() {
        let lighting = Lighting::default();

        assert_relative_eq!(lighting.intensity(Vec3::Y), 1.0);
        assert_relative_eq!(lighting.intensity(Vec3::Z), 0.6);
        assert_relative_eq!(lighting.intensity(Vec3::NEG_Y), 0.6);
        assert!(lighting.intensity(Vec3::X) > 0.6);
        assert!(lighting.intensity(Vec3::X) < 1.0);
    }

    #[test]
    fn box_at_the_look_target_fills_the_center() {
        let mut fb = Framebuffer::new(64, 64);
        let color = [0.2, 0.4, 0.8];
        SceneRenderer::new().render(&mut fb, &camera(), [slab(Vec3::ZERO, color)]);

        // The view axis enters the slab through its top face
        assert_eq!(fb.pixel(32, 32), Some(pack_rgb(color)));
        assert_eq!(fb.pixel(0, 0), Some(BACKGROUND));
        assert_eq!(fb.pixel(63, 63), Some(BACKGROUND));
    }

    #[test]
    fn sides_are_darker_than_the_top() {
        let mut fb = Framebuffer::new(64, 64);
        let color = [1.0, 1.0, 1.0];
        SceneRenderer::new().render(&mut fb, &camera(), [slab(Vec3::ZERO, color)]);

        assert!(fb.pixels().contains(&pack_rgb(color)));
        // +Z faces get no direct light
        assert!(fb.pixels().contains(&pack_rgb([0.6, 0.6, 0.6])));
    }

    #[test]
    fn nearer_box_hides_the_one_behind() {
        let mut fb = Framebuffer::new(64, 64);
        let near = [1.0, 0.0, 0.0];
        let far = [0.0, 0.0, 1.0];
        SceneRenderer::new().render(
            &mut fb,
            &camera(),
            [slab(Vec3::new(0.0, -2.0, 0.0), far), slab(Vec3::ZERO, near)],
        );

        assert_eq!(fb.pixel(32, 32), Some(pack_rgb(near)));
    }

    #[test]
    fn boxes_outside_the_frustum_are_not_drawn() {
        let mut fb = Framebuffer::new(32, 32);
        SceneRenderer::new().render(
            &mut fb,
            &camera(),
            [slab(Vec3::new(40.0, 0.0, -40.0), [1.0, 1.0, 1.0])],
        );

        assert!(fb.pixels().iter().all(|&p| p == BACKGROUND));
    }
}

//! Color and depth buffers.

use glam::{Vec2, Vec3};

/// Pack an sRGB color into `0x00RRGGBB`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pack_rgb(color: [f32; 3]) -> u32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (channel(color[0]) << 16) | (channel(color[1]) << 8) | channel(color[2])
}

/// CPU framebuffer with a depth buffer.
///
/// Depth is in `0..=1`, smaller is closer. Pixels outside that range are
/// clipped.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    color: Vec<u32>,
    depth: Vec<f32>,
}

impl Framebuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            color: vec![0; len],
            depth: vec![f32::INFINITY; len],
        }
    }

    /// Resize, discarding the contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            *self = Self::new(width, height);
        }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major `0x00RRGGBB` pixels.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.color
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        (x < self.width && y < self.height)
            .then(|| self.color[y as usize * self.width as usize + x as usize])
    }

    /// Fill with `color` and reset depth.
    pub fn clear(&mut self, color: u32) {
        self.color.fill(color);
        self.depth.fill(f32::INFINITY);
    }

    /// Fill a triangle given in screen space: `x`/`y` in pixels, `z` depth.
    ///
    /// Either winding is accepted. Pixels are covered when their center is
    /// inside the triangle.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fill_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, color: u32) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let area = edge(a.truncate(), b.truncate(), c.truncate());
        if area.abs() < f32::EPSILON {
            return;
        }

        let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as u32;
        let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as u32;
        let max_x = (a.x.max(b.x).max(c.x).ceil().max(0.0) as u32).min(self.width - 1);
        let max_y = (a.y.max(b.y).max(c.y).ceil().max(0.0) as u32).min(self.height - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let wa = edge(b.truncate(), c.truncate(), p) / area;
                let wb = edge(c.truncate(), a.truncate(), p) / area;
                let wc = edge(a.truncate(), b.truncate(), p) / area;
                if wa < 0.0 || wb < 0.0 || wc < 0.0 {
                    continue;
                }

                let z = wa * a.z + wb * b.z + wc * c.z;
                let index = y as usize * self.width as usize + x as usize;
                if (0.0..=1.0).contains(&z) && z < self.depth[index] {
                    self.depth[index] = z;
                    self.color[index] = color;
                }
            }
        }
    }
}

/// Twice the signed area of `(a, b, p)`.
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_channels() {
        assert_eq!(pack_rgb([1.0, 0.0, 0.0]), 0x00FF_0000);
        assert_eq!(pack_rgb([0.0, 1.0, 0.5]), 0x0000_FF80);
        assert_eq!(pack_rgb([2.0, -1.0, 0.0]), 0x00FF_0000);
    }

    #[test]
    fn fills_inside_only() {
        let mut fb = Framebuffer::new(8, 8);
        fb.fill_triangle(
            Vec3::new(0.0, 0.0, 0.5),
            Vec3::new(8.0, 0.0, 0.5),
            Vec3::new(0.0, 8.0, 0.5),
            7,
        );

        assert_eq!(fb.pixel(1, 1), Some(7));
        assert_eq!(fb.pixel(7, 7), Some(0));
        assert_eq!(fb.pixel(8, 0), None);
    }

    #[test]
    fn winding_does_not_matter() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_triangle(
            Vec3::new(0.0, 0.0, 0.5),
            Vec3::new(0.0, 4.0, 0.5),
            Vec3::new(4.0, 0.0, 0.5),
            3,
        );
        assert_eq!(fb.pixel(0, 0), Some(3));
    }

    #[test]
    fn nearer_triangle_wins() {
        let mut fb = Framebuffer::new(4, 4);
        let (a, b, c) = (Vec2::ZERO, Vec2::new(8.0, 0.0), Vec2::new(0.0, 8.0));

        fb.fill_triangle(a.extend(0.2), b.extend(0.2), c.extend(0.2), 1);
        fb.fill_triangle(a.extend(0.6), b.extend(0.6), c.extend(0.6), 2);
        assert_eq!(fb.pixel(1, 1), Some(1));

        fb.clear(0);
        fb.fill_triangle(a.extend(0.6), b.extend(0.6), c.extend(0.6), 2);
        assert_eq!(fb.pixel(1, 1), Some(2));
    }

    #[test]
    fn depth_outside_range_is_clipped() {
        let mut fb = Framebuffer::new(4, 4);
        let (a, b, c) = (Vec2::ZERO, Vec2::new(8.0, 0.0), Vec2::new(0.0, 8.0));
        fb.fill_triangle(a.extend(-0.1), b.extend(-0.1), c.extend(-0.1), 5);
        fb.fill_triangle(a.extend(1.5), b.extend(1.5), c.extend(1.5), 5);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn resize_discards_contents() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(9);
        fb.resize(3, 1);
        assert_eq!(fb.pixels(), &[0, 0, 0]);
        assert_eq!((fb.width(), fb.height()), (3, 1));
    }
}

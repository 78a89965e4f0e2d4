//! Frame driver.
//!
//! Casts one primary ray per pixel and collects the traced radiance into an
//! [`ImageBuffer`]. Radiance stays unclamped inside the buffer; clamping to
//! `[0, 1]` happens only when the image is handed out for display or saving.

use std::path::Path;
use std::time::Instant;

use crate::{trace, Camera, OcclusionTest, Scene, SpecularScaling};
use prism_math::{Color, Interval, EPSILON};

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Deepest recursion level that is still shaded; deeper calls return
    /// the ambient radiance
    pub max_depth: u32,
    /// Offset applied to secondary ray origins along the surface normal
    pub epsilon: f32,
    /// Shadow ray occlusion rule
    pub occlusion: OcclusionTest,
    /// Light intensity used for rough-surface highlights
    pub specular: SpecularScaling,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            epsilon: EPSILON,
            occlusion: OcclusionTest::default(),
            specular: SpecularScaling::default(),
        }
    }
}

/// Convert a radiance value to 8-bit RGB.
///
/// Channels are clamped to `[0, 1]` and scaled linearly; no gamma is applied.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Radiance seen through pixel (x, y).
#[inline]
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    trace(scene, &camera.primary_ray(x, y), 0, config)
}

/// Row-major buffer of per-pixel radiance.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Pixels with every channel clamped to `[0, 1]`, row-major.
    pub fn clamped(&self) -> Vec<Color> {
        self.pixels
            .iter()
            .map(|c| c.clamp(Color::ZERO, Color::ONE))
            .collect()
    }

    /// Convert to an 8-bit RGB image.
    pub fn to_rgb8(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb8(self.get(x, y)))
        })
    }

    /// Save as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        self.to_rgb8()
            .save_with_format(path, image::ImageFormat::Png)
    }
}

/// Render the entire scene to an image buffer on the calling thread.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, scene, x, y, config);
            image.set(x, y, color);
        }
    }

    log::info!(
        "Rendered {}x{} in {:.2?}",
        image.width,
        image.height,
        start.elapsed()
    );
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::SceneDescription;
    use prism_math::Vec3;

    fn small_cornell_box() -> (Camera, Scene) {
        let desc = SceneDescription::cornell_box();
        let camera = Camera::from_description(&desc.camera).with_resolution(16, 12);
        let scene = Scene::from_description(&desc).unwrap();
        (camera, scene)
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::new(2.0, -1.0, 0.5)), [255, 0, 127]);
    }

    #[test]
    fn test_clamp_happens_at_hand_off_only() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.5, -0.2, 0.3));
        image.set(1, 0, Color::splat(0.25));

        // Stored radiance keeps its range
        assert_eq!(image.get(0, 0), Color::new(1.5, -0.2, 0.3));

        let clamped = image.clamped();
        assert_eq!(clamped[0], Color::new(1.0, 0.0, 0.3));
        assert_eq!(clamped[1], Color::splat(0.25));
    }

    #[test]
    fn test_pixel_index_beyond_u32() {
        let image = ImageBuffer {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(69_999, 69_999), 70_000 * 70_000 - 1);
        assert_eq!(image.index(5, 1), 70_005);
    }

    #[test]
    fn test_to_rgb8_dimensions() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::ONE);

        let rgb = image.to_rgb8();
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(rgb.get_pixel(2, 1).0, [255, 255, 255]);
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_render_pixel_matches_trace() {
        let (camera, scene) = small_cornell_box();
        let config = RenderConfig::default();

        let expected = trace(&scene, &camera.primary_ray(8, 6), 0, &config);
        assert_eq!(render_pixel(&camera, &scene, 8, 6, &config), expected);
    }

    #[test]
    fn test_render_cornell_box() {
        let (camera, scene) = small_cornell_box();
        let image = render(&camera, &scene, &RenderConfig::default());

        assert_eq!(image.pixels.len(), 16 * 12);
        assert!(image.pixels.iter().all(|c| c.is_finite()));
        // Every camera ray ends on a wall, sphere or light; none escape
        assert!(image.pixels.iter().all(|c| *c != Vec3::splat(0.4)));
        assert!(image
            .clamped()
            .iter()
            .all(|c| c.min_element() >= 0.0 && c.max_element() <= 1.0));
    }
}

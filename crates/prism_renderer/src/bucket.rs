//! Tiled parallel rendering.
//!
//! The frame is cut into square buckets that rayon renders independently,
//! nearest the image centre first. Pixels share no mutable state, so the
//! result matches the single-threaded [`render`](crate::render) exactly.

use std::time::Instant;

use rayon::prelude::*;

use crate::renderer::render_pixel;
use crate::{Camera, ImageBuffer, RenderConfig, Scene};
use prism_math::Color;

/// Default bucket edge length in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// A block of pixels covering columns `x0..x1` and rows `y0..y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Bucket {
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Pixel coordinates inside the bucket, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        let Bucket { x0, y0, x1, y1 } = *self;
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }

    fn distance_sq_to(&self, cx: f32, cy: f32) -> f32 {
        let mx = (self.x0 as f32 + self.x1 as f32) * 0.5 - cx;
        let my = (self.y0 as f32 + self.y1 as f32) * 0.5 - cy;
        mx * mx + my * my
    }
}

/// Tile a `width` x `height` image, ordered from the centre outward.
///
/// Edge buckets are cropped to the image. Buckets at equal distance from
/// the centre keep row-major order.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);
    let step = size as usize;

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(step)
        .flat_map(move |y0| {
            (0..width).step_by(step).map(move |x0| Bucket {
                x0,
                y0,
                x1: x0.saturating_add(size).min(width),
                y1: y0.saturating_add(size).min(height),
            })
        })
        .collect();

    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    buckets.sort_by(|a, b| a.distance_sq_to(cx, cy).total_cmp(&b.distance_sq_to(cx, cy)));
    buckets
}

/// Radiance for every pixel of `bucket`, in [`Bucket::pixels`] order.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Vec<Color> {
    bucket
        .pixels()
        .map(|(x, y)| render_pixel(camera, scene, x, y, config))
        .collect()
}

/// Render the entire scene, one bucket per rayon task.
pub fn render_parallel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    bucket_size: u32,
) -> ImageBuffer {
    let start = Instant::now();
    let buckets = generate_buckets(camera.image_width, camera.image_height, bucket_size);
    log::debug!(
        "Rendering {} buckets of up to {}px on {} threads",
        buckets.len(),
        bucket_size,
        rayon::current_num_threads()
    );

    let tiles: Vec<(Bucket, Vec<Color>)> = buckets
        .par_iter()
        .map(|bucket| (*bucket, render_bucket(bucket, camera, scene, config)))
        .collect();

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for (bucket, pixels) in &tiles {
        for ((x, y), color) in bucket.pixels().zip(pixels) {
            image.set(x, y, *color);
        }
    }

    log::info!(
        "Rendered {}x{} in {} buckets in {:.2?}",
        image.width,
        image.height,
        tiles.len(),
        start.elapsed()
    );
    image
}

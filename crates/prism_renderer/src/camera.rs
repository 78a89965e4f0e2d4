//! Pinhole camera for primary ray generation.

use prism_core::CameraDesc;
use prism_math::{Ray, Vec3};

/// A pinhole camera looking down -Z with +Y up.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    position: Vec3,
    /// Full field of view in degrees
    fov: f32,
    /// tan(fov / 2), cached
    half_angle_tan: f32,
}

impl Camera {
    /// Create a camera at `position` with a 40 degree field of view and a
    /// 1024x768 image.
    pub fn new(position: Vec3) -> Self {
        Self {
            image_width: 1024,
            image_height: 768,
            position,
            fov: 40.0,
            half_angle_tan: half_angle_tan(40.0),
        }
    }

    /// Create a camera from a scene description.
    pub fn from_description(desc: &CameraDesc) -> Self {
        Self::new(desc.position)
            .with_resolution(desc.width, desc.height)
            .with_fov(desc.fov)
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self.half_angle_tan = half_angle_tan(fov);
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Ray from the eye through the centre of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let ndc_x = 2.0 * ((x as f32 + 0.5) / self.image_width as f32) - 1.0;
        let ndc_y = 1.0 - 2.0 * ((y as f32 + 0.5) / self.image_height as f32);

        let direction = Vec3::new(
            ndc_x * self.half_angle_tan * self.aspect_ratio(),
            ndc_y * self.half_angle_tan,
            -1.0,
        );

        Ray::new(self.position, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_description(&CameraDesc::default())
    }
}

fn half_angle_tan(fov_degrees: f32) -> f32 {
    (0.5 * fov_degrees).to_radians().tan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 4.0)).with_resolution(101, 101);
        let ray = camera.primary_ray(50, 50);

        assert_eq!(ray.origin(), Vec3::new(0.0, 0.0, 4.0));
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_top_left_pixel() {
        let camera = Camera::default();
        let ray = camera.primary_ray(0, 0);

        assert!(ray.direction().x < 0.0);
        assert!(ray.direction().y > 0.0);
        assert!(ray.direction().z < 0.0);
        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mirror_symmetry() {
        let camera = Camera::new(Vec3::ZERO).with_resolution(64, 48);
        let left = camera.primary_ray(0, 10).direction();
        let right = camera.primary_ray(63, 10).direction();

        assert!((left.x + right.x).abs() < 1e-6);
        assert!((left.y - right.y).abs() < 1e-6);
    }

    #[test]
    fn test_field_of_view() {
        // 90 degrees on a square image: the edge of the image plane sits at
        // 45 degrees, so pixel centres stay just inside it.
        let camera = Camera::new(Vec3::ZERO)
            .with_resolution(1000, 1000)
            .with_fov(90.0);
        let edge = camera.primary_ray(999, 500).direction();
        let angle = edge.x.atan2(-edge.z).to_degrees();

        assert!(angle < 45.0 && angle > 44.9);
    }

    #[test]
    fn test_aspect_ratio_widens_horizontally() {
        let camera = Camera::new(Vec3::ZERO).with_resolution(200, 100);
        assert_eq!(camera.aspect_ratio(), 2.0);

        let right = camera.primary_ray(199, 50).direction();
        let bottom = camera.primary_ray(100, 99).direction();
        assert!(right.x / -right.z > 1.9 * (-bottom.y / -bottom.z));
    }

    #[test]
    fn test_from_description() {
        let camera = Camera::from_description(&CameraDesc::default());
        assert_eq!(camera.image_width, 1024);
        assert_eq!(camera.image_height, 768);
        assert_eq!(camera.fov(), 40.0);
        assert!(camera.position().z < 4.0);
    }
}

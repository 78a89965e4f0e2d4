//! Infinite plane primitive.

use std::sync::Arc;

use crate::{
    hittable::{Hit, Hittable},
    Material,
};
use prism_math::{Ray, Vec3};

/// An infinite plane in point-normal form: `normal · (p - point) = 0`.
///
/// Both faces are intersectable. The reported normal is always the stored
/// one, regardless of which side the ray arrives from.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. `normal` is normalized before it is stored.
    pub fn new(point: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let denom = ray.direction().dot(self.normal);
        if denom == 0.0 {
            return None; // ray parallel to plane
        }

        let t = (self.normal.dot(self.point) - self.normal.dot(ray.origin())) / denom;
        if t <= 0.0 {
            return None;
        }

        Some(Hit {
            t,
            position: ray.at(t),
            normal: self.normal,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Arc::new(Material::rough(Vec3::splat(0.5), Vec3::splat(0.2), 10.0)),
        )
    }

    #[test]
    fn test_plane_hit_from_above() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.5, 1.0, 0.0), Vec3::NEG_Y);
        let hit = plane.intersect(&ray).unwrap();

        assert_eq!(hit.t, 2.0);
        assert_eq!(hit.position, Vec3::new(0.5, -1.0, 0.0));
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_hit_from_below() {
        // Planes are two-sided
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y);
        let hit = plane.intersect(&ray).unwrap();

        assert_eq!(hit.t, 2.0);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let plane = floor();
        for dir in [Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, 1.0)] {
            let ray = Ray::new(Vec3::ZERO, dir);
            assert!(plane.intersect(&ray).is_none());
        }
        // Even when the ray lies in the plane
        let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::X);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_origin() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(floor().intersect(&ray).is_none());
    }

    #[test]
    fn test_ray_starting_on_plane_misses() {
        let plane = floor();
        for dir in [Vec3::Y, Vec3::NEG_Y, Vec3::new(1.0, 1.0, 0.0)] {
            let ray = Ray::new(Vec3::new(0.3, -1.0, 0.7), dir);
            assert!(plane.intersect(&ray).is_none());
        }
    }

    #[test]
    fn test_normal_stored_normalized() {
        let plane = Plane::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 5.0),
            Arc::new(Material::reflective(Vec3::ONE, Vec3::ZERO)),
        );
        assert_eq!(plane.normal(), Vec3::Z);

        let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::NEG_Z);
        let hit = plane.intersect(&ray).unwrap();
        assert_eq!(hit.normal, Vec3::Z);
        assert_eq!(hit.t, 2.0);
    }
}

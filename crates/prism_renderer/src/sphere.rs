//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{Hit, Hittable},
    Material,
};
use prism_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let dist = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * dist.dot(ray.direction());
        let c = dist.dot(dist) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let far = (-b + sqrtd) / 2.0 / a;
        let near = (-b - sqrtd) / 2.0 / a;

        // Both roots behind the origin
        if far <= 0.0 {
            return None;
        }

        // Origin may be inside the sphere, in which case only `far` is ahead
        let t = if near > 0.0 { near } else { far };
        let position = ray.at(t);

        Some(Hit {
            t,
            position,
            normal: (position - self.center) / self.radius,
            material: &self.material,
        })
    }
}

//! Hittable trait and Hit record for ray-surface intersection.

use crate::Material;
use prism_math::{Ray, Vec3};

/// Record of a forward ray-surface intersection.
///
/// Lives only as long as the intersection query that produced it; the
/// material is borrowed from the primitive that was hit.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Distance along the ray, always > 0
    pub t: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal (outward for spheres, as stored for planes)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

/// Trait for surfaces that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Intersect the ray with this surface.
    ///
    /// Returns `None` when there is no intersection in front of the ray
    /// origin.
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>>;
}

/// A slice of surfaces hits at its nearest member.
///
/// Every element is tested; ties keep the first surface seen.
impl<T: Hittable> Hittable for [T] {
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;

        for object in self {
            if let Some(hit) = object.intersect(ray) {
                if hit.t > 0.0 && nearest.map_or(true, |n| hit.t < n.t) {
                    nearest = Some(hit);
                }
            }
        }

        nearest
    }
}

//! Closed set of scene surfaces.

use std::sync::Arc;

use crate::{Hit, Hittable, Material, Plane, Sphere};
use prism_math::Ray;

/// Any surface the tracer can intersect.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// The shared material of this surface.
    pub fn material(&self) -> &Arc<Material> {
        match self {
            Primitive::Sphere(sphere) => sphere.material(),
            Primitive::Plane(plane) => plane.material(),
        }
    }
}

impl Hittable for Primitive {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Plane(plane) => plane.intersect(ray),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

//! Vector algebra for the prism ray tracer.
//!
//! `Vec3` comes straight from glam and doubles as the RGB radiance type
//! (see [`Color`]). On top of it this crate adds a [`Ray`] whose direction
//! is always unit length and a small [`Interval`] helper.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// RGB radiance triple. Same representation as a geometric vector.
pub type Color = Vec3;

/// Offset used to push secondary ray origins off the surface they start on.
pub const EPSILON: f32 = 1e-4;

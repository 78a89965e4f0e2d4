//! Square area lights and soft-shadow sampling.
//!
//! A light is a horizontal square approximated by a regular grid of point
//! samples. The fraction of samples that can see a shading point gives a
//! continuous penumbra instead of a hard shadow edge.

use crate::{Hit, Hittable};
use prism_math::{Color, Interval, Ray, Vec3};

/// Number of samples along each side of a light's square.
pub const LIGHT_SUBDIVISIONS: u32 = 10;

/// How a shadow ray decides that a hit lies between light and point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcclusionTest {
    /// The hit's x coordinate lies strictly between the x coordinates of
    /// the light sample and the shading point. Misses occluders when the
    /// two endpoints share an x coordinate.
    #[default]
    XSignChange,
    /// The hit distance lies in `(0, |S - P| - epsilon)`.
    Parametric,
}

impl OcclusionTest {
    /// Does `hit`, found on the shadow ray from `start` toward `target`,
    /// block the light?
    #[inline]
    pub fn blocks(self, hit: &Hit<'_>, start: Vec3, target: Vec3, epsilon: f32) -> bool {
        match self {
            OcclusionTest::XSignChange => {
                (hit.position.x - target.x) * (hit.position.x - start.x) < 0.0
            }
            OcclusionTest::Parametric => {
                Interval::new(0.0, start.distance(target) - epsilon).surrounds(hit.t)
            }
        }
    }
}

/// A finite square light in the plane `y = position.y`.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaLight {
    position: Vec3,
    intensity: Color,
    sample_intensity: Color,
    half_extent: f32,
}

impl AreaLight {
    /// Create a light centred at `position` emitting `intensity` in total.
    pub fn new(position: Vec3, intensity: Color, half_extent: f32) -> Self {
        let samples = (LIGHT_SUBDIVISIONS * LIGHT_SUBDIVISIONS) as f32;
        Self {
            position,
            intensity,
            sample_intensity: intensity / samples,
            half_extent,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Total intensity; what a camera sees when looking straight at the light.
    pub fn intensity(&self) -> Color {
        self.intensity
    }

    /// Contribution of a single sample.
    pub fn sample_intensity(&self) -> Color {
        self.sample_intensity
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Sample positions, row by row.
    ///
    /// Offsets are `-h/2 + h/n * i` on both horizontal axes for `i` in
    /// `0..n`, where `h` is the half extent.
    pub fn sample_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        let step = self.half_extent / LIGHT_SUBDIVISIONS as f32;
        let first = -self.half_extent / 2.0;

        (0..LIGHT_SUBDIVISIONS).flat_map(move |i| {
            (0..LIGHT_SUBDIVISIONS).map(move |j| {
                let offset = Vec3::new(first + step * i as f32, 0.0, first + step * j as f32);
                self.position + offset
            })
        })
    }

    /// Intensity from this light that reaches `point`.
    ///
    /// Every sample casts a shadow ray toward `point` and is tested against
    /// every occluder. Unblocked samples each add `sample_intensity()`, so
    /// the result is zero when fully shadowed and the total intensity when
    /// fully lit.
    pub fn received_intensity<T: Hittable>(
        &self,
        point: Vec3,
        occluders: &[T],
        test: OcclusionTest,
        epsilon: f32,
    ) -> Color {
        let mut received = Color::ZERO;

        for start in self.sample_points() {
            let shadow_ray = Ray::new(start, point - start);
            let blocked = occluders.iter().any(|occluder| {
                occluder
                    .intersect(&shadow_ray)
                    .is_some_and(|hit| hit.t > 0.0 && test.blocks(&hit, start, point, epsilon))
            });

            if !blocked {
                received += self.sample_intensity;
            }
        }

        received
    }

    /// Distance along `ray` to this light's square, if the ray passes
    /// through it going forward.
    ///
    /// A ray parallel to the light's plane divides by zero; the resulting
    /// non-finite values fail every comparison and report a miss.
    pub fn hit_distance(&self, ray: &Ray) -> Option<f32> {
        let origin = ray.origin();
        let dir = ray.direction();

        let t = (self.position.y - origin.y) / dir.y;
        if !(t > 0.0) {
            return None;
        }

        let x = origin.x + t * dir.x;
        let z = origin.z + t * dir.z;
        if (x - self.position.x).abs() < self.half_extent
            && (z - self.position.z).abs() < self.half_extent
        {
            Some(t)
        } else {
            None
        }
    }
}

//! Surface materials.
//!
//! A closed set of three response models. Materials are immutable after
//! construction and shared between primitives through `Arc<Material>`.

use prism_math::{Color, Vec3};
use std::f32::consts::PI;

/// How a surface responds to incoming light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Phong-like diffuse + specular surface. Terminates recursion.
    Rough {
        /// Ambient coefficient, `kd * PI`
        ka: Color,
        kd: Color,
        ks: Color,
        shininess: f32,
    },
    /// Mirror-like conductor. Spawns a reflected ray.
    Reflective {
        /// Normal-incidence reflectance
        f0: Color,
    },
    /// Transparent dielectric. Spawns reflected and refracted rays.
    Refractive {
        /// Normal-incidence reflectance
        f0: Color,
        /// Mean of the per-channel refractive index
        ior: f32,
    },
}

impl Material {
    /// Create a rough material. The ambient coefficient is derived as `kd * PI`.
    pub fn rough(kd: Color, ks: Color, shininess: f32) -> Self {
        Material::Rough {
            ka: kd * PI,
            kd,
            ks,
            shininess,
        }
    }

    /// Create a reflective material from a complex refractive index.
    ///
    /// - `n`: real part of the refractive index, per channel
    /// - `kappa`: extinction coefficient, per channel
    pub fn reflective(n: Vec3, kappa: Vec3) -> Self {
        Material::Reflective {
            f0: normal_reflectance(n, kappa),
        }
    }

    /// Create a refractive material. Extinction is taken as zero and the
    /// scalar index of refraction is the mean of the three channels.
    pub fn refractive(n: Vec3) -> Self {
        Material::Refractive {
            f0: normal_reflectance(n, Vec3::ZERO),
            ior: (n.x + n.y + n.z) / 3.0,
        }
    }

    /// Normal-incidence reflectance, or `None` for rough surfaces.
    pub fn f0(&self) -> Option<Color> {
        match *self {
            Material::Rough { .. } => None,
            Material::Reflective { f0 } | Material::Refractive { f0, .. } => Some(f0),
        }
    }
}

/// Fresnel reflectance at normal incidence for index `n + i*kappa`:
/// `((n-1)^2 + kappa^2) / ((n+1)^2 + kappa^2)`, per channel.
pub fn normal_reflectance(n: Vec3, kappa: Vec3) -> Color {
    let kappa2 = kappa * kappa;
    let below = (n - Vec3::ONE) * (n - Vec3::ONE) + kappa2;
    let above = (n + Vec3::ONE) * (n + Vec3::ONE) + kappa2;
    below / above
}

/// Schlick's approximation: `F0 + (1 - F0) * (1 - cos)^5`, per channel.
#[inline]
pub fn schlick(f0: Color, cos_incidence: f32) -> Color {
    f0 + (Vec3::ONE - f0) * (1.0 - cos_incidence).powi(5)
}

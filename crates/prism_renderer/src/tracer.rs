//! Recursive Whitted-style tracer.
//!
//! `trace` finds the nearest surface along a ray, checks whether one of the
//! area lights is seen first, and then shades by material:
//! - rough surfaces get ambient + soft-shadowed Phong terms and stop
//! - reflective surfaces recurse along the mirror direction
//! - refractive surfaces additionally recurse along the transmitted
//!   direction unless total internal reflection occurs
//!
//! Fresnel weighting uses Schlick's approximation. Recursion stops past
//! `RenderConfig::max_depth`, returning the ambient radiance.

use crate::material::schlick;
use crate::{Hit, Hittable, Material, RenderConfig, Scene};
use prism_math::{Color, Ray, Vec3};

/// Which light intensity feeds the specular highlight of rough surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecularScaling {
    /// A single light sample's intensity, independent of shadowing.
    #[default]
    PerSample,
    /// The shadowed intensity actually received, like the diffuse term.
    Received,
}

/// Radiance arriving along `ray`.
///
/// `depth` counts recursion levels and starts at 0 for camera rays.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return scene.ambient();
    }

    let nearest = scene.primitives().intersect(ray);
    let nearest_t = nearest.map_or(f32::INFINITY, |hit| hit.t);

    // Lights are visible as flat emitters; the first one struck before
    // any surface wins.
    if let Some(light) = scene
        .lights()
        .iter()
        .find(|light| light.hit_distance(ray).is_some_and(|t| t < nearest_t))
    {
        return light.intensity();
    }

    let Some(hit) = nearest else {
        return scene.ambient();
    };

    match *hit.material {
        Material::Rough {
            ka,
            kd,
            ks,
            shininess,
        } => shade_rough(scene, ray, &hit, ka, kd, ks, shininess, config),
        Material::Reflective { f0 } => shade_specular(scene, ray, &hit, f0, None, depth, config),
        Material::Refractive { f0, ior } => {
            shade_specular(scene, ray, &hit, f0, Some(ior), depth, config)
        }
    }
}

/// Ambient plus per-light diffuse and Blinn-Phong specular terms.
#[allow(clippy::too_many_arguments)]
fn shade_rough(
    scene: &Scene,
    ray: &Ray,
    hit: &Hit<'_>,
    ka: Color,
    kd: Color,
    ks: Color,
    shininess: f32,
    config: &RenderConfig,
) -> Color {
    let mut radiance = ka * scene.ambient();

    for light in scene.lights() {
        let received = light.received_intensity(
            hit.position,
            scene.primitives(),
            config.occlusion,
            config.epsilon,
        );

        let to_light = (light.position() - hit.position).normalize();
        let cos_theta = hit.normal.dot(to_light);
        if cos_theta <= 0.0 || received == Color::ZERO {
            continue;
        }

        radiance += received * kd * cos_theta;

        let halfway = (-ray.direction() + to_light).normalize();
        let cos_delta = hit.normal.dot(halfway);
        if cos_delta > 0.0 {
            let incoming = match config.specular {
                SpecularScaling::PerSample => light.sample_intensity(),
                SpecularScaling::Received => received,
            };
            radiance += incoming * ks * cos_delta.powf(shininess);
        }
    }

    radiance
}

/// Fresnel-weighted reflection, plus refraction when `ior` is given.
fn shade_specular(
    scene: &Scene,
    ray: &Ray,
    hit: &Hit<'_>,
    f0: Color,
    ior: Option<f32>,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    let dir = ray.direction();
    let cos_incidence = -dir.dot(hit.normal);
    let fresnel = schlick(f0, cos_incidence);

    let reflected = Ray::new(
        hit.position + hit.normal * config.epsilon,
        reflect(dir, hit.normal),
    );
    let mut radiance = trace(scene, &reflected, depth + 1, config) * fresnel;

    if let Some(ior) = ior {
        if let Some(transmitted) = refract(dir, hit.normal, cos_incidence, ior) {
            let refracted = Ray::new(hit.position - hit.normal * config.epsilon, transmitted);
            radiance += trace(scene, &refracted, depth + 1, config) * (Vec3::ONE - fresnel);
        }
    }

    radiance
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * n.dot(v))
}

/// Transmitted direction through a surface with relative index `ior`, or
/// `None` on total internal reflection.
#[inline]
fn refract(v: Vec3, n: Vec3, cos_incidence: f32, ior: f32) -> Option<Vec3> {
    let disc = 1.0 - (1.0 - cos_incidence * cos_incidence) / ior / ior;
    if disc < 0.0 {
        return None;
    }
    Some(v / ior + n * (cos_incidence / ior - disc.sqrt()))
}

//! Prism Renderer - recursive CPU ray tracing.
//!
//! A Whitted-style tracer for small analytic scenes: spheres and infinite
//! planes lit by square area lights. Rough surfaces use a Phong-like local
//! model with soft shadows from a 10x10 grid of light samples; mirrors and
//! glass recurse with Schlick-weighted reflection and refraction.

mod bucket;
mod camera;
mod hittable;
mod light;
mod material;
mod plane;
mod primitive;
mod renderer;
mod scene;
mod sphere;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{Hit, Hittable};
pub use light::{AreaLight, OcclusionTest, LIGHT_SUBDIVISIONS};
pub use material::{normal_reflectance, schlick, Material};
pub use plane::Plane;
pub use primitive::Primitive;
pub use renderer::{color_to_rgb8, render, render_pixel, ImageBuffer, RenderConfig};
pub use scene::Scene;
pub use sphere::Sphere;
pub use tracer::{trace, SpecularScaling};

/// Re-export math types from prism_math
pub use prism_math::{Color, Interval, Ray, Vec3};

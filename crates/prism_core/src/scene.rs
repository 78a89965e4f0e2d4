//! Scene description types.
//!
//! These types describe *what* is in a scene without committing to how it
//! is rendered. They deserialize from JSON (vectors are `[x, y, z]` arrays)
//! and are turned into renderer objects by `prism_renderer::Scene`.

use std::collections::HashSet;

use prism_math::{Vec3, EPSILON};
use serde::{Deserialize, Serialize};

use crate::loader::{SceneError, SceneResult};

/// Pinhole camera placement and output resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDesc {
    /// Eye position. The camera always looks down -Z with +Y up.
    pub position: Vec3,
    /// Full field of view in degrees.
    pub fov: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 4.0 - EPSILON),
            fov: 40.0,
            width: 1024,
            height: 768,
        }
    }
}

/// Surface response model, tagged by `"type"` in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialModel {
    /// Phong-like diffuse + specular surface.
    Rough { kd: Vec3, ks: Vec3, shininess: f32 },
    /// Conductor with complex refractive index `n + i*kappa`.
    Reflective { n: Vec3, kappa: Vec3 },
    /// Dielectric with refractive index `n` (no extinction).
    Refractive { n: Vec3 },
}

/// A named material that primitives refer to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDesc {
    pub name: String,
    pub model: MaterialModel,
}

impl MaterialDesc {
    pub fn new(name: impl Into<String>, model: MaterialModel) -> Self {
        Self {
            name: name.into(),
            model,
        }
    }
}

/// A square area light lying in the horizontal plane `y = position.y`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDesc {
    /// Centre of the square.
    pub position: Vec3,
    /// Total emitted intensity, split evenly across the light's samples.
    pub intensity: Vec3,
    /// Half the side length of the square.
    pub half_extent: f32,
}

/// Geometric primitive, tagged by `"type"` in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDesc {
    Sphere {
        center: Vec3,
        radius: f32,
        material: String,
    },
    Plane {
        point: Vec3,
        normal: Vec3,
        material: String,
    },
}

impl PrimitiveDesc {
    /// Name of the material this primitive uses.
    pub fn material(&self) -> &str {
        match self {
            PrimitiveDesc::Sphere { material, .. } | PrimitiveDesc::Plane { material, .. } => {
                material
            }
        }
    }
}

/// A complete scene: camera, ambient term, materials, lights and surfaces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDesc,
    /// Radiance returned for rays that escape the scene.
    pub ambient: Vec3,
    #[serde(default)]
    pub materials: Vec<MaterialDesc>,
    #[serde(default)]
    pub lights: Vec<LightDesc>,
    #[serde(default)]
    pub primitives: Vec<PrimitiveDesc>,
}

impl SceneDescription {
    /// Check the description for input the renderer cannot handle.
    ///
    /// Rays themselves are never validated; only the scene data is.
    pub fn validate(&self) -> SceneResult<()> {
        let camera = &self.camera;
        if camera.width == 0 || camera.height == 0 {
            return Err(SceneError::InvalidCamera(format!(
                "resolution {}x{} has no pixels",
                camera.width, camera.height
            )));
        }
        if !(camera.fov > 0.0 && camera.fov < 180.0) {
            return Err(SceneError::InvalidCamera(format!(
                "field of view {} must be between 0 and 180 degrees",
                camera.fov
            )));
        }

        let mut names = HashSet::new();
        for material in &self.materials {
            if !names.insert(material.name.as_str()) {
                return Err(SceneError::DuplicateMaterial(material.name.clone()));
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !(light.half_extent >= 0.0) {
                return Err(SceneError::InvalidLight {
                    index,
                    reason: format!("half extent {} is negative", light.half_extent),
                });
            }
        }

        for (index, primitive) in self.primitives.iter().enumerate() {
            if !names.contains(primitive.material()) {
                return Err(SceneError::UnknownMaterial {
                    index,
                    name: primitive.material().to_string(),
                });
            }

            match primitive {
                PrimitiveDesc::Sphere { radius, .. } => {
                    if !(radius.is_finite() && *radius > 0.0) {
                        return Err(SceneError::InvalidGeometry {
                            index,
                            reason: format!("sphere radius {} must be positive", radius),
                        });
                    }
                }
                PrimitiveDesc::Plane { normal, .. } => {
                    let length = normal.length();
                    if !(length.is_finite() && length > 0.0) {
                        return Err(SceneError::InvalidGeometry {
                            index,
                            reason: "plane normal has zero length".to_string(),
                        });
                    }
                    if (length - 1.0).abs() > 1e-3 {
                        log::warn!(
                            "Plane {} normal {:?} is not unit length, it will be normalized",
                            index,
                            normal
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// The built-in scene: a closed box with coloured walls, a handful of
    /// rough and mirror spheres and two square lights under the ceiling.
    pub fn cornell_box() -> Self {
        let grey_specular = Vec3::splat(0.2);
        let rough = |kd: Vec3| MaterialModel::Rough {
            kd,
            ks: grey_specular,
            shininess: 10.0,
        };

        let materials = vec![
            MaterialDesc::new("yellow", rough(Vec3::new(0.3, 0.2, 0.1))),
            MaterialDesc::new("blue", rough(Vec3::new(0.1, 0.2, 0.3))),
            MaterialDesc::new("pink", rough(Vec3::new(3.0, 0.0, 0.2))),
            MaterialDesc::new("red", rough(Vec3::new(0.3, 0.0, 0.0))),
            MaterialDesc::new(
                "mirror",
                MaterialModel::Reflective {
                    n: Vec3::new(0.14, 0.16, 0.13),
                    kappa: Vec3::new(4.1, 2.3, 3.1),
                },
            ),
        ];

        let lights = vec![
            LightDesc {
                position: Vec3::new(0.3, 1.0 - 0.05, -0.3),
                intensity: Vec3::splat(1.5),
                half_extent: 0.2,
            },
            LightDesc {
                position: Vec3::new(-0.2, 1.0 - 0.05, 0.4),
                intensity: Vec3::splat(2.0),
                half_extent: 0.3,
            },
        ];

        let plane = |point: Vec3, normal: Vec3, material: &str| PrimitiveDesc::Plane {
            point,
            normal,
            material: material.to_string(),
        };
        let sphere = |center: Vec3, radius: f32, material: &str| PrimitiveDesc::Sphere {
            center,
            radius,
            material: material.to_string(),
        };

        let primitives = vec![
            // Walls: back, ceiling, floor, right, left
            plane(Vec3::new(0.0, 0.0, -1.0), Vec3::Z, "yellow"),
            plane(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, "blue"),
            plane(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, "blue"),
            plane(Vec3::new(1.0, 0.0, 0.0), Vec3::NEG_X, "pink"),
            plane(Vec3::new(-1.0, 0.0, 0.0), Vec3::X, "pink"),
            sphere(Vec3::new(0.5, -0.7, 0.5), 0.3, "yellow"),
            sphere(Vec3::new(-0.6, -0.4, 0.6), 0.3, "blue"),
            sphere(Vec3::new(0.0, -0.3, 0.6), 0.2, "red"),
            sphere(Vec3::new(-0.4, -0.75, 0.3), 0.2, "pink"),
            sphere(Vec3::new(-0.65, 0.3, 0.0), 0.2, "mirror"),
            sphere(Vec3::new(0.0, -0.6, 1.0), 0.1, "mirror"),
        ];

        Self {
            camera: CameraDesc::default(),
            ambient: Vec3::splat(0.4),
            materials,
            lights,
            primitives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_sphere(radius: f32, material: &str) -> SceneDescription {
        SceneDescription {
            camera: CameraDesc::default(),
            ambient: Vec3::ZERO,
            materials: vec![MaterialDesc::new(
                "grey",
                MaterialModel::Refractive {
                    n: Vec3::splat(1.5),
                },
            )],
            lights: Vec::new(),
            primitives: vec![PrimitiveDesc::Sphere {
                center: Vec3::ZERO,
                radius,
                material: material.to_string(),
            }],
        }
    }

    #[test]
    fn test_cornell_box_is_valid() {
        let scene = SceneDescription::cornell_box();
        scene.validate().unwrap();

        assert_eq!(scene.primitives.len(), 11);
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.ambient, Vec3::splat(0.4));
        assert_eq!(scene.camera.width, 1024);
        assert_eq!(scene.camera.height, 768);
    }

    #[test]
    fn test_unknown_material() {
        let scene = single_sphere(1.0, "gold");
        match scene.validate() {
            Err(SceneError::UnknownMaterial { index, name }) => {
                assert_eq!(index, 0);
                assert_eq!(name, "gold");
            }
            other => panic!("expected UnknownMaterial, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_radius() {
        assert!(matches!(
            single_sphere(0.0, "grey").validate(),
            Err(SceneError::InvalidGeometry { index: 0, .. })
        ));
        assert!(matches!(
            single_sphere(f32::NAN, "grey").validate(),
            Err(SceneError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_zero_plane_normal() {
        let mut scene = single_sphere(1.0, "grey");
        scene.primitives.push(PrimitiveDesc::Plane {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: "grey".to_string(),
        });
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidGeometry { index: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_material() {
        let mut scene = single_sphere(1.0, "grey");
        let duplicate = scene.materials[0].clone();
        scene.materials.push(duplicate);
        assert!(matches!(
            scene.validate(),
            Err(SceneError::DuplicateMaterial(name)) if name == "grey"
        ));
    }

    #[test]
    fn test_invalid_camera() {
        let mut scene = single_sphere(1.0, "grey");
        scene.camera.width = 0;
        assert!(matches!(scene.validate(), Err(SceneError::InvalidCamera(_))));

        let mut scene = single_sphere(1.0, "grey");
        scene.camera.fov = 180.0;
        assert!(matches!(scene.validate(), Err(SceneError::InvalidCamera(_))));
    }
}

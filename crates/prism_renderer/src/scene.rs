//! Renderable scene: surfaces, lights and the ambient term.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{AreaLight, Material, Plane, Primitive, Sphere};
use prism_core::{MaterialModel, PrimitiveDesc, SceneDescription, SceneError, SceneResult};
use prism_math::Color;

/// An immutable collection of primitives and lights.
///
/// Built once before rendering and only read afterwards, so a `&Scene` can
/// be shared freely across render threads.
#[derive(Debug, Clone)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<AreaLight>,
    ambient: Color,
}

impl Scene {
    /// Create an empty scene with the given ambient radiance.
    pub fn new(ambient: Color) -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            ambient,
        }
    }

    /// Add a primitive.
    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Add a light.
    pub fn add_light(&mut self, light: AreaLight) {
        self.lights.push(light);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[AreaLight] {
        &self.lights
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Build a scene from a description.
    ///
    /// Each named material is constructed once and shared by every
    /// primitive that references it.
    pub fn from_description(desc: &SceneDescription) -> SceneResult<Self> {
        desc.validate()?;

        let materials: HashMap<&str, Arc<Material>> = desc
            .materials
            .iter()
            .map(|m| (m.name.as_str(), Arc::new(build_material(&m.model))))
            .collect();

        let mut scene = Scene::new(desc.ambient);

        for (index, primitive) in desc.primitives.iter().enumerate() {
            let material = materials
                .get(primitive.material())
                .cloned()
                .ok_or_else(|| SceneError::UnknownMaterial {
                    index,
                    name: primitive.material().to_string(),
                })?;

            match primitive {
                PrimitiveDesc::Sphere { center, radius, .. } => {
                    scene.add_primitive(Sphere::new(*center, *radius, material));
                }
                PrimitiveDesc::Plane { point, normal, .. } => {
                    scene.add_primitive(Plane::new(*point, *normal, material));
                }
            }
        }

        for light in &desc.lights {
            scene.add_light(AreaLight::new(light.position, light.intensity, light.half_extent));
        }

        log::debug!(
            "Built scene: {} primitives, {} lights, {} shared materials",
            scene.primitives.len(),
            scene.lights.len(),
            materials.len()
        );

        Ok(scene)
    }
}

fn build_material(model: &MaterialModel) -> Material {
    match *model {
        MaterialModel::Rough { kd, ks, shininess } => Material::rough(kd, ks, shininess),
        MaterialModel::Reflective { n, kappa } => Material::reflective(n, kappa),
        MaterialModel::Refractive { n } => Material::refractive(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::MaterialDesc;
    use prism_math::Vec3;

    #[test]
    fn test_cornell_box_builds() {
        let scene = Scene::from_description(&SceneDescription::cornell_box()).unwrap();

        assert_eq!(scene.primitives().len(), 11);
        assert_eq!(scene.lights().len(), 2);
        assert_eq!(scene.ambient(), Vec3::splat(0.4));
        assert_eq!(scene.lights()[1].sample_intensity(), Vec3::splat(2.0) / 100.0);
    }

    #[test]
    fn test_materials_are_shared() {
        let scene = Scene::from_description(&SceneDescription::cornell_box()).unwrap();
        let primitives = scene.primitives();

        // Back wall and first sphere are both "yellow"
        assert!(Arc::ptr_eq(primitives[0].material(), primitives[5].material()));
        // Ceiling and floor are both "blue"
        assert!(Arc::ptr_eq(primitives[1].material(), primitives[2].material()));
        assert!(!Arc::ptr_eq(primitives[0].material(), primitives[1].material()));
    }

    #[test]
    fn test_material_models_map_to_variants() {
        let desc = SceneDescription {
            camera: Default::default(),
            ambient: Vec3::ZERO,
            materials: vec![
                MaterialDesc::new("glass", MaterialModel::Refractive { n: Vec3::splat(1.5) }),
            ],
            lights: Vec::new(),
            primitives: vec![PrimitiveDesc::Sphere {
                center: Vec3::ZERO,
                radius: 1.0,
                material: "glass".to_string(),
            }],
        };

        let scene = Scene::from_description(&desc).unwrap();
        assert!(matches!(
            **scene.primitives()[0].material(),
            Material::Refractive { .. }
        ));
    }

    #[test]
    fn test_invalid_description_is_rejected() {
        let mut desc = SceneDescription::cornell_box();
        desc.primitives.push(PrimitiveDesc::Sphere {
            center: Vec3::ZERO,
            radius: 0.1,
            material: "chrome".to_string(),
        });

        assert!(matches!(
            Scene::from_description(&desc),
            Err(SceneError::UnknownMaterial { index: 11, .. })
        ));
    }
}

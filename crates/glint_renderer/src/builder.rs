//! Turning a [`SceneDescription`] into a renderable [`Scene`].
//!
//! Meshes are loaded and flattened into triangles here, and texture paths
//! are resolved and decoded once through a shared [`TextureCache`].

use std::path::{Path, PathBuf};

use glint_core::{
    load_obj, MaterialDescription, MeshError, SceneDescription, ShapeDescription,
    SurfaceDescription, TextureCache, TextureError,
};
use thiserror::Error;

use crate::{Light, Material, Object, Plane, Primitive, Quad, Scene, Sphere, Triangle, View};

/// Errors that can occur while building a scene.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Object {index}: material needs a color or a texture")]
    MissingSurface { index: usize },
}

/// Result type for scene building.
pub type BuildResult<T> = Result<T, BuildError>;

/// Builds scenes from descriptions, resolving relative asset paths against
/// a base directory (normally the scene file's directory).
pub struct SceneBuilder {
    base_dir: PathBuf,
    textures: TextureCache,
}

impl SceneBuilder {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            textures: TextureCache::with_base_dir(base_dir.clone()),
            base_dir,
        }
    }

    /// Textures loaded so far.
    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    pub fn textures_mut(&mut self) -> &mut TextureCache {
        &mut self.textures
    }

    /// Build a scene: objects in description order (a mesh contributes one
    /// object per triangle), then lights, eye, view and settings.
    pub fn build(&mut self, desc: &SceneDescription) -> BuildResult<Scene> {
        let mut scene = Scene::new();

        for (index, object) in desc.objects.iter().enumerate() {
            let material = self.material(index, &object.material)?;
            for primitive in self.primitives(&object.shape)? {
                scene.add_object(Object::new(primitive, material.clone()));
            }
        }

        for light in &desc.lights {
            scene.add_light(Light::new(light.position, light.color));
        }

        scene.set_eye(desc.eye);
        if let Some(camera) = &desc.camera {
            scene.set_view(View::Perspective {
                look_at: camera.look_at,
                up: camera.up,
                vfov: camera.fov,
            });
        }
        scene.set_has_shadows(desc.shadows);
        scene.set_super_sampling_factor(desc.super_sampling_factor);
        scene.set_max_recursion_depth(desc.max_recursion_depth);

        log::info!(
            "Built scene: {} primitives from {} objects, {} lights, {} textures",
            scene.object_count(),
            desc.objects.len(),
            scene.light_count(),
            self.textures.len()
        );

        Ok(scene)
    }

    fn material(&mut self, index: usize, desc: &MaterialDescription) -> BuildResult<Material> {
        let (ka, kd, ks, n) = (desc.ka, desc.kd, desc.ks, desc.n);
        match desc.surface() {
            Some(SurfaceDescription::Flat(color)) => Ok(Material::flat(color, ka, kd, ks, n)),
            Some(SurfaceDescription::Textured(path)) => {
                let texture = self.textures.load(&path)?;
                Ok(Material::textured(texture, ka, kd, ks, n))
            }
            None => Err(BuildError::MissingSurface { index }),
        }
    }

    fn primitives(&self, shape: &ShapeDescription) -> BuildResult<Vec<Primitive>> {
        let primitives = match shape {
            ShapeDescription::Sphere {
                position,
                radius,
                rotation,
                angle,
            } => vec![Sphere::new(*position, *radius)
                .with_orientation(*rotation, *angle)
                .into()],
            ShapeDescription::Triangle {
                point_a,
                point_b,
                point_c,
            } => vec![Triangle::new(*point_a, *point_b, *point_c).into()],
            ShapeDescription::Plane { point_a, normal } => vec![Plane::new(*point_a, *normal).into()],
            ShapeDescription::Quad {
                point_a,
                point_b,
                point_c,
                point_d,
            } => vec![Quad::new(*point_a, *point_b, *point_c, *point_d).into()],
            ShapeDescription::Mesh {
                model,
                scale,
                offset,
            } => {
                let path = self.resolve(model);
                let mesh = load_obj(&path)?.transformed(*scale, *offset);
                log::debug!(
                    "Flattened mesh {} into {} triangles",
                    path.display(),
                    mesh.triangle_count()
                );
                mesh.extract_triangle_vertices()
                    .into_iter()
                    .map(|[a, b, c]| Triangle::new(a, b, c).into())
                    .collect()
            }
        };
        Ok(primitives)
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_relative() {
            self.base_dir.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new(".")
    }
}

//! JSON scene loading.
//!
//! Parses a scene file into a [`SceneDescription`] and rejects scenes the
//! renderer cannot build: materials without a surface source, degenerate
//! spheres, zero-sized images. Render settings are not rejected here;
//! out-of-range values are clamped by the renderer when applied.

use std::path::Path;

use thiserror::Error;

use crate::scene::{SceneDescription, ShapeDescription};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object {index} ({kind}): material needs a color or a texture")]
    MissingSurface { index: usize, kind: &'static str },

    #[error("Object {index} ({kind}): {reason}")]
    InvalidObject {
        index: usize,
        kind: &'static str,
        reason: String,
    },

    #[error("Invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a JSON scene file.
///
/// # Example
///
/// ```ignore
/// use glint_core::loader::load_scene;
///
/// let scene = load_scene("scene.json")?;
/// println!("Loaded {} objects", scene.objects.len());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&text)?;

    log::info!(
        "Loaded scene {}: {} objects, {} lights",
        path.display(),
        scene.objects.len(),
        scene.lights.len()
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    validate(&scene)?;
    Ok(scene)
}

fn validate(scene: &SceneDescription) -> LoadResult<()> {
    let (width, height) = scene.image_size();
    if width == 0 || height == 0 {
        return Err(LoadError::InvalidSize { width, height });
    }

    for (index, object) in scene.objects.iter().enumerate() {
        let kind = object.shape.type_name();

        if object.material.surface().is_none() {
            return Err(LoadError::MissingSurface { index, kind });
        }

        match &object.shape {
            ShapeDescription::Sphere { radius, .. } if !(*radius > 0.0) => {
                return Err(LoadError::InvalidObject {
                    index,
                    kind,
                    reason: format!("radius must be positive, got {}", radius),
                });
            }
            ShapeDescription::Plane { normal, .. } if normal.length_squared() == 0.0 => {
                return Err(LoadError::InvalidObject {
                    index,
                    kind,
                    reason: "normal must be non-zero".to_string(),
                });
            }
            ShapeDescription::Mesh { model, .. } if model.is_empty() => {
                return Err(LoadError::InvalidObject {
                    index,
                    kind,
                    reason: "model path is empty".to_string(),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Point;

    const SCENE: &str = r#"{
        "Eye": [200, 200, 1000],
        "Shadows": true,
        "SuperSamplingFactor": 2,
        "MaxRecursionDepth": 3,
        "Lights": [
            { "position": [-200, 600, 1500], "color": [1, 1, 1] }
        ],
        "Objects": [
            { "type": "sphere", "position": [90, 320, 100], "radius": 50,
              "material": { "color": [0, 0, 1], "ka": 0.2, "kd": 0.7, "ks": 0.5, "n": 64 } },
            { "type": "plane", "point_a": [0, 0, 0], "normal": [0, 0, 1],
              "material": { "color": [1, 1, 1], "ka": 0.2, "kd": 0.8, "ks": 0, "n": 1 } }
        ]
    }"#;

    #[test]
    fn test_load_scene_from_str() {
        let scene = load_scene_from_str(SCENE).unwrap();

        assert_eq!(scene.eye, Point::new(200.0, 200.0, 1000.0));
        assert!(scene.shadows);
        assert_eq!(scene.super_sampling_factor, 2);
        assert_eq!(scene.max_recursion_depth, 3);
        assert_eq!(scene.lights.len(), 1);
        assert_eq!(scene.objects.len(), 2);
    }

    #[test]
    fn test_missing_surface_is_rejected() {
        let json = r#"{ "Eye": [0, 0, 0], "Objects": [
            { "type": "triangle", "point_a": [0, 0, 0], "point_b": [1, 0, 0], "point_c": [0, 1, 0],
              "material": { "ka": 0.2, "kd": 0.8, "ks": 0, "n": 1 } } ] }"#;

        match load_scene_from_str(json) {
            Err(LoadError::MissingSurface { index, kind }) => {
                assert_eq!(index, 0);
                assert_eq!(kind, "triangle");
            }
            other => panic!("expected MissingSurface, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_sphere_radius_is_rejected() {
        let json = r#"{ "Eye": [0, 0, 0], "Objects": [
            { "type": "sphere", "position": [0, 0, 0], "radius": 0,
              "material": { "color": [1, 1, 1], "ka": 0.2, "kd": 0.8, "ks": 0, "n": 1 } } ] }"#;

        assert!(matches!(
            load_scene_from_str(json),
            Err(LoadError::InvalidObject { index: 0, .. })
        ));
    }

    #[test]
    fn test_missing_eye_is_rejected() {
        assert!(matches!(
            load_scene_from_str(r#"{ "Lights": [] }"#),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_out_of_range_settings_load_as_read() {
        let json = r#"{ "Eye": [0, 0, 0], "SuperSamplingFactor": 0, "MaxRecursionDepth": -2 }"#;
        let scene = load_scene_from_str(json).unwrap();
        assert_eq!(scene.super_sampling_factor, 0);
        assert_eq!(scene.max_recursion_depth, -2);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let json = r#"{ "Eye": [0, 0, 0], "Size": [0, 10] }"#;
        assert!(matches!(
            load_scene_from_str(json),
            Err(LoadError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_load_scene_missing_file() {
        let result = load_scene("/definitely/not/here/scene.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_bundled_scene_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../scenes/spheres.json");
        let scene = load_scene(path).unwrap();
        assert_eq!(scene.objects.len(), 6);
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.image_size(), (400, 400));
    }
}

//! Scene description types for Glint.
//!
//! These mirror the JSON scene format one-to-one and stay renderer-agnostic:
//! a description says *what* is in the scene, `glint_renderer` decides how
//! to intersect and shade it. Vectors and colors are written as
//! three-element arrays.

use glint_math::{Color, Point, Vector};
use serde::Deserialize;

/// Default image size when a scene does not specify one.
pub const DEFAULT_SIZE: [u32; 2] = [400, 400];

/// Default uniform scale applied to mesh vertices.
pub const DEFAULT_MESH_SCALE: f64 = 60.0;

/// Default translation applied to mesh vertices after scaling.
pub const DEFAULT_MESH_OFFSET: Point = Point::new(300.0, 300.0, 100.0);

/// A complete scene: eye, lights, objects and render settings.
#[derive(Clone, Debug, Deserialize)]
pub struct SceneDescription {
    /// Eye (camera) position
    #[serde(rename = "Eye")]
    pub eye: Point,

    /// Whether lights can be occluded
    #[serde(rename = "Shadows", default)]
    pub shadows: bool,

    /// Sub-samples per pixel axis
    #[serde(rename = "SuperSamplingFactor", default = "default_super_sampling")]
    pub super_sampling_factor: i32,

    /// Mirror bounces followed after the primary hit
    #[serde(rename = "MaxRecursionDepth", default = "default_recursion_depth")]
    pub max_recursion_depth: i32,

    /// Point lights
    #[serde(rename = "Lights", default)]
    pub lights: Vec<LightDescription>,

    /// Geometric objects, each with its own material
    #[serde(rename = "Objects", default)]
    pub objects: Vec<ObjectDescription>,

    /// Output image size as `[width, height]`
    #[serde(rename = "Size", default)]
    pub size: Option<[u32; 2]>,

    /// Perspective camera; without one, pixels map onto the z = 0 plane
    #[serde(rename = "Camera", default)]
    pub camera: Option<CameraDescription>,
}

fn default_super_sampling() -> i32 {
    1
}

fn default_recursion_depth() -> i32 {
    1
}

impl SceneDescription {
    /// Create an empty scene seen from `eye` with default settings.
    pub fn new(eye: Point) -> Self {
        Self {
            eye,
            shadows: false,
            super_sampling_factor: default_super_sampling(),
            max_recursion_depth: default_recursion_depth(),
            lights: Vec::new(),
            objects: Vec::new(),
            size: None,
            camera: None,
        }
    }

    /// Image size, falling back to [`DEFAULT_SIZE`].
    pub fn image_size(&self) -> (u32, u32) {
        let [width, height] = self.size.unwrap_or(DEFAULT_SIZE);
        (width, height)
    }
}

/// A point light.
#[derive(Clone, Debug, Deserialize)]
pub struct LightDescription {
    pub position: Point,
    pub color: Color,
}

/// Pinhole camera settings.
#[derive(Clone, Debug, Deserialize)]
pub struct CameraDescription {
    /// Point the camera looks at
    pub look_at: Point,

    /// Approximate up direction
    #[serde(default = "default_up")]
    pub up: Vector,

    /// Vertical field of view in degrees
    #[serde(default = "default_fov")]
    pub fov: f64,
}

fn default_up() -> Vector {
    Vector::Y
}

fn default_fov() -> f64 {
    60.0
}

/// One entry of the `Objects` list.
#[derive(Clone, Debug, Deserialize)]
pub struct ObjectDescription {
    #[serde(flatten)]
    pub shape: ShapeDescription,
    pub material: MaterialDescription,
}

/// Geometry of an object, selected by its `type` tag.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDescription {
    Sphere {
        position: Point,
        radius: f64,
        /// Pole of the texture mapping
        #[serde(default = "default_pole")]
        rotation: Vector,
        /// Texture spin about the pole, in degrees
        #[serde(default)]
        angle: f64,
    },
    Triangle {
        point_a: Point,
        point_b: Point,
        point_c: Point,
    },
    Plane {
        point_a: Point,
        normal: Vector,
    },
    Quad {
        point_a: Point,
        point_b: Point,
        point_c: Point,
        point_d: Point,
    },
    Mesh {
        /// Path to a Wavefront OBJ file
        model: String,
        #[serde(default = "default_mesh_scale")]
        scale: f64,
        #[serde(default = "default_mesh_offset")]
        offset: Point,
    },
}

fn default_pole() -> Vector {
    Vector::Z
}

fn default_mesh_scale() -> f64 {
    DEFAULT_MESH_SCALE
}

fn default_mesh_offset() -> Point {
    DEFAULT_MESH_OFFSET
}

impl ShapeDescription {
    /// The `type` tag this shape was parsed from.
    pub fn type_name(&self) -> &'static str {
        match self {
            ShapeDescription::Sphere { .. } => "sphere",
            ShapeDescription::Triangle { .. } => "triangle",
            ShapeDescription::Plane { .. } => "plane",
            ShapeDescription::Quad { .. } => "quad",
            ShapeDescription::Mesh { .. } => "mesh",
        }
    }
}

/// Phong shading parameters plus either a color or a texture path.
#[derive(Clone, Debug, Deserialize)]
pub struct MaterialDescription {
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub texture: Option<String>,
    /// Ambient intensity
    pub ka: f64,
    /// Diffuse intensity
    pub kd: f64,
    /// Specular intensity, also the mirror reflectance
    pub ks: f64,
    /// Specular exponent
    pub n: f64,
}

/// Where a material's surface color comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceDescription {
    Flat(Color),
    Textured(String),
}

impl MaterialDescription {
    /// Create a flat-colored material.
    pub fn flat(color: Color, ka: f64, kd: f64, ks: f64, n: f64) -> Self {
        Self {
            color: Some(color),
            texture: None,
            ka,
            kd,
            ks,
            n,
        }
    }

    /// Create a textured material.
    pub fn textured(texture: impl Into<String>, ka: f64, kd: f64, ks: f64, n: f64) -> Self {
        Self {
            color: None,
            texture: Some(texture.into()),
            ka,
            kd,
            ks,
            n,
        }
    }

    /// Resolve the surface source. A non-empty texture wins over a color.
    pub fn surface(&self) -> Option<SurfaceDescription> {
        match (&self.texture, self.color) {
            (Some(texture), _) if !texture.is_empty() => {
                Some(SurfaceDescription::Textured(texture.clone()))
            }
            (_, Some(color)) => Some(SurfaceDescription::Flat(color)),
            _ => None,
        }
    }
}

//! Glint Renderer - Whitted-style CPU ray tracing
//!
//! Fires rays through every pixel, finds the nearest surface, shades it with
//! ambient, diffuse and specular terms per point light (with optional hard
//! shadows) and follows mirror reflections up to a fixed depth.
//!
//! The scene is built once (by hand or from a `glint_core` description via
//! [`SceneBuilder`]) and is read-only while [`Scene::render`] runs, which
//! lets buckets of pixels render in parallel.

mod builder;
mod bucket;
mod camera;
mod hit;
mod light;
mod material;
mod plane;
mod primitive;
mod quad;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use builder::{BuildError, BuildResult, SceneBuilder};
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, View};
pub use hit::Hit;
pub use light::Light;
pub use material::{Material, Surface};
pub use plane::Plane;
pub use primitive::{Object, Primitive};
pub use quad::Quad;
pub use renderer::{clamp_color, color_to_rgb, ImageBuffer};
pub use scene::{RenderSettings, Scene, DEFAULT_SHADOW_EPSILON};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export the math types from glint_math
pub use glint_math::{Color, Interval, Point, Ray, Vector};

/// Threshold below which a ray counts as parallel to a plane.
pub const PARALLEL_EPSILON: f64 = 1e-5;

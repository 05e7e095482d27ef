//! Glint Core - Scene descriptions and asset loading for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `ObjectDescription`,
//!   `MaterialDescription`, deserialized from JSON scene files
//! - **Mesh support**: Wavefront OBJ loading into triangle lists
//! - **Textures**: image decoding and a path-keyed texture cache
//!
//! Nothing here knows how to trace a ray; `glint_renderer` turns a
//! description into a renderable scene.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scenes/spheres.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.objects.len(),
//!     scene.lights.len());
//! ```

pub mod loader;
pub mod mesh;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use mesh::{load_obj, Mesh, MeshError, MeshResult};
pub use scene::{
    CameraDescription, LightDescription, MaterialDescription, ObjectDescription,
    SceneDescription, ShapeDescription, SurfaceDescription,
};
pub use texture::{Texture, TextureCache, TextureError, TextureResult};

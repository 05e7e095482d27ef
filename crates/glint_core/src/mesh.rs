//! Triangle mesh geometry.
//!
//! Meshes exist only at load time: the renderer flattens each one into
//! independent triangles, so this type keeps just what that needs.

use std::path::Path;

use glint_math::Point;
use thiserror::Error;

/// Errors that can occur while loading a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Failed to load OBJ {path}: {source}")]
    Obj {
        path: String,
        #[source]
        source: tobj::LoadError,
    },

    #[error("No triangles found in {0}")]
    Empty(String),
}

pub type MeshResult<T> = Result<T, MeshError>;

/// A mesh consisting of vertex positions and triangle indices.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<Point>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh from positions and indices.
    pub fn new(positions: Vec<Point>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Scale every vertex uniformly, then translate it by `offset`.
    pub fn transformed(&self, scale: f64, offset: Point) -> Mesh {
        Mesh {
            positions: self.positions.iter().map(|p| *p * scale + offset).collect(),
            indices: self.indices.clone(),
        }
    }

    /// Extract triangle vertices as `[a, b, c]` triplets in index order.
    ///
    /// Triangles referencing a vertex that does not exist are skipped.
    pub fn extract_triangle_vertices(&self) -> Vec<[Point; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());

        for chunk in self.indices.chunks_exact(3) {
            let i0 = chunk[0] as usize;
            let i1 = chunk[1] as usize;
            let i2 = chunk[2] as usize;

            if i0 >= self.positions.len()
                || i1 >= self.positions.len()
                || i2 >= self.positions.len()
            {
                log::warn!(
                    "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                    i0,
                    i1,
                    i2,
                    self.positions.len()
                );
                continue;
            }

            triangles.push([self.positions[i0], self.positions[i1], self.positions[i2]]);
        }

        triangles
    }
}

/// Load every model of an OBJ file into one triangulated mesh.
pub fn load_obj<P: AsRef<Path>>(path: P) -> MeshResult<Mesh> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
    )
    .map_err(|source| MeshError::Obj {
        path: path.display().to_string(),
        source,
    })?;

    let mut mesh = Mesh::default();
    for model in &models {
        let base = mesh.positions.len() as u32;
        mesh.positions.extend(
            model
                .mesh
                .positions
                .chunks_exact(3)
                .map(|p| Point::new(p[0] as f64, p[1] as f64, p[2] as f64)),
        );
        mesh.indices
            .extend(model.mesh.indices.iter().map(|i| base + *i));
    }

    if mesh.triangle_count() == 0 {
        return Err(MeshError::Empty(path.display().to_string()));
    }

    log::debug!(
        "Loaded mesh {}: {} models, {} vertices, {} triangles",
        path.display(),
        models.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

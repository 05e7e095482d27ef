//! Infinite plane primitive.

use crate::{Hit, Point, Ray, Vector, PARALLEL_EPSILON};

/// Default edge length, in world units, of one texture tile on a plane.
pub const DEFAULT_TILE_SIZE: f64 = 100.0;

/// An infinite plane through `point` with the given normal.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Point,
    normal: Vector,
    /// Tangent basis used for texture tiling
    tangent: Vector,
    bitangent: Vector,
    tile_size: f64,
}

impl Plane {
    /// Create a new plane. The normal is normalized; a zero normal gives a
    /// plane that no ray hits.
    pub fn new(point: Point, normal: Vector) -> Self {
        let normal = normal.normalize_or_zero();
        let (tangent, bitangent) = if normal == Vector::ZERO {
            (Vector::X, Vector::Y)
        } else {
            let tangent = normal.any_orthonormal_vector();
            (tangent, normal.cross(tangent))
        };

        Self {
            point,
            normal,
            tangent,
            bitangent,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }

    /// Set how many world units one texture repetition spans.
    pub fn with_tile_size(mut self, tile_size: f64) -> Self {
        if tile_size > 0.0 {
            self.tile_size = tile_size;
        }
        self
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Same plane test as a triangle, without the edge checks.
    pub fn intersect(&self, ray: &Ray) -> Hit {
        let denominator = self.normal.dot(ray.direction);
        if denominator.abs() < PARALLEL_EPSILON {
            return Hit::NONE;
        }

        let t = self.normal.dot(self.point - ray.origin) / denominator;
        if t < 0.0 {
            return Hit::NONE;
        }

        Hit::facing(t, self.normal, ray)
    }

    /// Planar projection onto the tangent basis, one unit per tile.
    /// Not wrapped; texture sampling repeats it.
    pub fn texture_uv(&self, p: Point) -> (f64, f64) {
        let offset = p - self.point;
        (
            offset.dot(self.tangent) / self.tile_size,
            offset.dot(self.bitangent) / self.tile_size,
        )
    }
}

//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then checks that the plane hit
//! lies on the inner side of all three edges.

use crate::{Hit, Point, Ray, Vector, PARALLEL_EPSILON};

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    a: Point,
    b: Point,
    c: Point,
    /// Unit plane normal from the winding (b - a) × (c - a); zero if degenerate
    normal: Vector,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        Self { a, b, c, normal }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The winding normal (unit length, or zero for a degenerate triangle).
    pub fn normal(&self) -> Vector {
        self.normal
    }

    pub fn intersect(&self, ray: &Ray) -> Hit {
        let denominator = self.normal.dot(ray.direction);

        // Parallel to the plane (or degenerate)
        if denominator.abs() < PARALLEL_EPSILON {
            return Hit::NONE;
        }

        let t = self.normal.dot(self.a - ray.origin) / denominator;
        if t < 0.0 {
            return Hit::NONE;
        }

        if !self.contains(ray.at(t)) {
            return Hit::NONE;
        }

        Hit::facing(t, self.normal, ray)
    }

    /// Whether a point of the supporting plane lies inside the triangle
    /// (edges included).
    pub fn contains(&self, p: Point) -> bool {
        left_of(p - self.a, self.b - self.a, self.normal)
            && left_of(p - self.b, self.c - self.b, self.normal)
            && left_of(p - self.c, self.a - self.c, self.normal)
    }

    /// Coordinates of `p` in the frame spanned by `b - a` and `c - a`.
    ///
    /// Inside the triangle both are non-negative and sum to at most 1.
    pub fn texture_uv(&self, p: Point) -> (f64, f64) {
        affine_coordinates(p - self.a, self.b - self.a, self.c - self.a)
    }
}

/// Whether `p` lies to the left of edge `e` when viewed against `normal`.
#[inline]
fn left_of(p: Vector, e: Vector, normal: Vector) -> bool {
    normal.dot(e.cross(p)) >= 0.0
}

/// Solve `w = s * e1 + t * e2` in the least-squares sense.
pub(crate) fn affine_coordinates(w: Vector, e1: Vector, e2: Vector) -> (f64, f64) {
    let d11 = e1.dot(e1);
    let d12 = e1.dot(e2);
    let d22 = e2.dot(e2);
    let denominator = d11 * d22 - d12 * d12;
    if denominator.abs() < f64::EPSILON {
        return (0.0, 0.0);
    }

    let w1 = w.dot(e1);
    let w2 = w.dot(e2);
    let s = (d22 * w1 - d12 * w2) / denominator;
    let t = (d11 * w2 - d12 * w1) / denominator;
    (s, t)
}

//! Quad primitive: two triangles sharing the b-c diagonal.

use crate::triangle::affine_coordinates;
use crate::{Hit, Point, Ray, Triangle};

/// A four-sided primitive with corners `a`, `b`, `c`, `d`, where `b` and `c`
/// are the ends of the shared diagonal (so `a`-`b`-`d`-`c` walks the outline).
#[derive(Debug, Clone)]
pub struct Quad {
    first: Triangle,
    second: Triangle,
}

impl Quad {
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Self {
        Self {
            first: Triangle::new(a, b, c),
            second: Triangle::new(c, b, d),
        }
    }

    /// The two halves, `(a, b, c)` and `(c, b, d)`.
    pub fn triangles(&self) -> (&Triangle, &Triangle) {
        (&self.first, &self.second)
    }

    /// The closer of the two triangle hits.
    pub fn intersect(&self, ray: &Ray) -> Hit {
        self.first.intersect(ray).closer(self.second.intersect(ray))
    }

    /// Coordinates of `p` along `b - a` and `c - a`, so the four corners map
    /// to (0,0), (1,0), (0,1) and, for a parallelogram, (1,1).
    pub fn texture_uv(&self, p: Point) -> (f64, f64) {
        let [a, b, c] = self.first.vertices();
        affine_coordinates(p - a, b - a, c - a)
    }
}

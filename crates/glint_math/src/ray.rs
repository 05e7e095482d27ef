use crate::{Point, Vector};

/// A ray in 3D space with an origin and a direction.
///
/// Intersection routines assume `direction` is unit length; build rays
/// with [`Ray::normalized`] unless the direction is already normalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray, storing the direction as given.
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Create a new ray with a unit-length direction.
    pub fn normalized(origin: Point, direction: Vector) -> Self {
        Self::new(origin, direction.normalize())
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Point::new(1.0, 2.0, 3.0);
        let direction = Vector::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point::ZERO, Vector::X);

        assert_eq!(ray.at(0.0), Point::ZERO);
        assert_eq!(ray.at(1.0), Point::X);
        assert_eq!(ray.at(2.0), Point::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Point::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_normalized() {
        let ray = Ray::normalized(Point::ZERO, Vector::new(0.0, 3.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-12);
        assert!((ray.at(5.0) - Point::new(0.0, 3.0, 4.0)).length() < 1e-12);
    }
}

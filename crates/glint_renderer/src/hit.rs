//! Ray-primitive intersection results.

use crate::{Ray, Vector};

/// Distance and surface normal of a ray-primitive intersection.
///
/// A miss is [`Hit::NONE`], whose `t` is positive infinity, so picking the
/// closest of several results is a plain `<` comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the intersection
    pub t: f64,
    /// Unit surface normal, facing the incoming ray
    pub normal: Vector,
}

impl Hit {
    /// The "no hit" sentinel.
    pub const NONE: Hit = Hit {
        t: f64::INFINITY,
        normal: Vector::ZERO,
    };

    /// Create a hit from a distance and a unit normal.
    pub fn new(t: f64, normal: Vector) -> Self {
        Self { t, normal }
    }

    /// Create a hit whose normal is flipped, if needed, to face the ray.
    pub fn facing(t: f64, outward_normal: Vector, ray: &Ray) -> Self {
        let normal = if outward_normal.dot(ray.direction) > 0.0 {
            -outward_normal
        } else {
            outward_normal
        };
        Self { t, normal }
    }

    /// Whether this is an actual intersection.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.t < f64::INFINITY
    }

    /// The closer of two hits. Ties keep `self`.
    #[inline]
    pub fn closer(self, other: Hit) -> Hit {
        if other.t < self.t {
            other
        } else {
            self
        }
    }
}

impl Default for Hit {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn test_none_is_not_a_hit() {
        assert!(!Hit::NONE.is_hit());
        assert!(Hit::new(0.0, Vector::Z).is_hit());
        assert_eq!(Hit::default(), Hit::NONE);
    }

    #[test]
    fn test_facing_flips_normal() {
        let ray = Ray::new(Point::ZERO, -Vector::Z);

        let front = Hit::facing(1.0, Vector::Z, &ray);
        assert_eq!(front.normal, Vector::Z);

        let back = Hit::facing(1.0, -Vector::Z, &ray);
        assert_eq!(back.normal, Vector::Z);
    }

    #[test]
    fn test_closer() {
        let near = Hit::new(1.0, Vector::X);
        let far = Hit::new(2.0, Vector::Y);

        assert_eq!(near.closer(far), near);
        assert_eq!(far.closer(near), near);
        assert_eq!(Hit::NONE.closer(far), far);
        assert_eq!(far.closer(Hit::NONE), far);

        // Ties keep the first
        let tie = Hit::new(1.0, Vector::Z);
        assert_eq!(near.closer(tie), near);
    }
}

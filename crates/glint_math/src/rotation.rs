//! Rodrigues rotation with precomputed terms.
//!
//! Used to orient spherical texture mappings: the rotation is built once per
//! primitive and then applied to every shaded point.

use crate::Vector;

/// A rotation about a unit axis, stored as the axis plus the cosine and
/// sine of the angle so that applying it costs no trigonometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    axis: Vector,
    cos: f64,
    sin: f64,
}

impl Rotation {
    /// The rotation that leaves every vector unchanged.
    pub const IDENTITY: Rotation = Rotation {
        axis: Vector::Z,
        cos: 1.0,
        sin: 0.0,
    };

    /// Rotation by `angle` radians about `axis` (right-handed).
    ///
    /// A zero-length axis yields the identity.
    pub fn from_axis_angle(axis: Vector, angle: f64) -> Self {
        let axis = axis.normalize_or_zero();
        if axis == Vector::ZERO {
            return Self::IDENTITY;
        }
        Self {
            axis,
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    /// The shortest rotation that carries the direction `from` onto `to`.
    ///
    /// Opposite directions are related by a half turn about any axis
    /// perpendicular to `to`.
    pub fn aligning(from: Vector, to: Vector) -> Self {
        let from = from.normalize_or_zero();
        let to = to.normalize_or_zero();
        if from == Vector::ZERO || to == Vector::ZERO {
            return Self::IDENTITY;
        }

        let cross = from.cross(to);
        let sin = cross.length();
        let cos = from.dot(to);

        if sin < 1e-12 {
            if cos > 0.0 {
                return Self::IDENTITY;
            }
            return Self {
                axis: to.any_orthonormal_vector(),
                cos: -1.0,
                sin: 0.0,
            };
        }

        Self {
            axis: cross / sin,
            cos,
            sin,
        }
    }

    /// Check whether this rotation is the identity.
    pub fn is_identity(&self) -> bool {
        self.sin == 0.0 && self.cos == 1.0
    }

    /// Rotate `v` using Rodrigues' formula:
    /// `v cos + (k × v) sin + k (k·v)(1 - cos)`.
    #[inline]
    pub fn apply(&self, v: Vector) -> Vector {
        if self.is_identity() {
            return v;
        }
        v * self.cos
            + self.axis.cross(v) * self.sin
            + self.axis * self.axis.dot(v) * (1.0 - self.cos)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Vector, b: Vector) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let rot = Rotation::from_axis_angle(Vector::Z, FRAC_PI_2);
        assert!(close(rot.apply(Vector::X), Vector::Y));
        assert!(close(rot.apply(Vector::Z), Vector::Z));
    }

    #[test]
    fn test_aligning_maps_pole_onto_target() {
        let pole = Vector::new(1.0, 1.0, 0.0);
        let rot = Rotation::aligning(pole, Vector::Z);
        assert!(close(rot.apply(pole.normalize()), Vector::Z));

        // Lengths are preserved
        let v = Vector::new(0.3, -2.0, 5.0);
        assert!((rot.apply(v).length() - v.length()).abs() < 1e-9);
    }

    #[test]
    fn test_aligning_same_direction_is_identity() {
        let rot = Rotation::aligning(Vector::new(0.0, 0.0, 3.0), Vector::Z);
        assert!(rot.is_identity());
        assert_eq!(rot.apply(Vector::X), Vector::X);
    }

    #[test]
    fn test_aligning_opposite_direction_is_half_turn() {
        let rot = Rotation::aligning(-Vector::Z, Vector::Z);
        assert!(close(rot.apply(-Vector::Z), Vector::Z));
    }

    #[test]
    fn test_zero_axis_is_identity() {
        let rot = Rotation::from_axis_angle(Vector::ZERO, 1.0);
        assert!(rot.is_identity());
    }
}

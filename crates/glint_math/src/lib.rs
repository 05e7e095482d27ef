// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;
mod rotation;

pub use interval::Interval;
pub use ray::Ray;
pub use rotation::Rotation;

/// A position in world space.
pub type Point = DVec3;

/// A direction or displacement in world space.
pub type Vector = DVec3;

/// Linear RGB color. Channels are unbounded until the final pixel write.
pub type Color = DVec3;

/// Mirror `v` about the unit normal `n`.
///
/// Both vectors point away from the surface, so the result does too:
/// `2 (v·n) n - v`.
#[inline]
pub fn reflect(v: Vector, n: Vector) -> Vector {
    2.0 * v.dot(n) * n - v
}

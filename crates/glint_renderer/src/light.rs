//! Point lights.

use crate::{Color, Point};

/// A point light. Immutable once added to a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point,
    pub color: Color,
}

impl Light {
    pub fn new(position: Point, color: Color) -> Self {
        Self { position, color }
    }

    /// White light of unit intensity.
    pub fn white(position: Point) -> Self {
        Self::new(position, Color::ONE)
    }
}

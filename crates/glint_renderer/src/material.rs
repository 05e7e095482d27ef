//! Surface shading parameters.

use std::sync::Arc;

use glint_core::Texture;

use crate::Color;

/// Where the base color of a surface comes from.
#[derive(Debug, Clone)]
pub enum Surface {
    /// One color over the whole primitive.
    Flat(Color),
    /// A texture sampled at the primitive's UV coordinates.
    Textured(Arc<Texture>),
}

/// Phong-style material: base color source plus the ambient, diffuse and
/// specular weights and the specular exponent.
#[derive(Debug, Clone)]
pub struct Material {
    pub surface: Surface,
    /// Ambient coefficient
    pub ka: f64,
    /// Diffuse coefficient
    pub kd: f64,
    /// Specular coefficient, also the weight of the mirror reflection
    pub ks: f64,
    /// Specular exponent
    pub n: f64,
}

impl Material {
    pub fn new(surface: Surface, ka: f64, kd: f64, ks: f64, n: f64) -> Self {
        Self {
            surface,
            ka,
            kd,
            ks,
            n,
        }
    }

    /// Create a material with a single color.
    pub fn flat(color: Color, ka: f64, kd: f64, ks: f64, n: f64) -> Self {
        Self::new(Surface::Flat(color), ka, kd, ks, n)
    }

    /// Create a material that samples `texture`.
    pub fn textured(texture: Arc<Texture>, ka: f64, kd: f64, ks: f64, n: f64) -> Self {
        Self::new(Surface::Textured(texture), ka, kd, ks, n)
    }

    pub fn is_textured(&self) -> bool {
        matches!(self.surface, Surface::Textured(_))
    }

    /// Base color for a surface point.
    ///
    /// `uv` is only evaluated for textured materials.
    pub fn color_at<F>(&self, uv: F) -> Color
    where
        F: FnOnce() -> (f64, f64),
    {
        match &self.surface {
            Surface::Flat(color) => *color,
            Surface::Textured(texture) => {
                let (u, v) = uv();
                texture.sample(u, v)
            }
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::flat(Color::ONE, 0.1, 0.8, 0.0, 1.0)
    }
}

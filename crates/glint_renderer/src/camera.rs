//! Primary ray generation.
//!
//! Pixel positions are given in screen space: `sx` grows to the right and
//! `sy` grows upward from the bottom edge of the image, both in pixel units,
//! so `(x + 0.5, y + 0.5)` is the center of pixel column `x`, row `y`
//! counted from the bottom.

use crate::{Point, Ray, Vector};

/// How screen space maps into the world.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum View {
    /// The image lies on the z = 0 plane with one world unit per pixel:
    /// screen position `(sx, sy)` is the world point `(sx, sy, 0)`.
    #[default]
    ScreenPlane,

    /// Pinhole camera looking from the eye towards `look_at`.
    Perspective {
        look_at: Point,
        up: Vector,
        /// Vertical field of view in degrees
        vfov: f64,
    },
}

/// Camera for generating primary rays from the eye.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Point,
    /// World position of screen position (0, 0)
    lower_left: Point,
    /// World offset of one pixel to the right
    delta_u: Vector,
    /// World offset of one pixel up
    delta_v: Vector,
}

impl Camera {
    pub fn new(eye: Point, view: &View, width: u32, height: u32) -> Self {
        match *view {
            View::ScreenPlane => Self {
                eye,
                lower_left: Point::ZERO,
                delta_u: Vector::X,
                delta_v: Vector::Y,
            },
            View::Perspective { look_at, up, vfov } => {
                Self::perspective(eye, look_at, up, vfov, width.max(1), height.max(1))
            }
        }
    }

    fn perspective(eye: Point, look_at: Point, up: Vector, vfov: f64, width: u32, height: u32) -> Self {
        // Viewport on the plane one unit in front of the eye
        let h = (vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * (width as f64 / height as f64);

        // Camera basis
        let w = (eye - look_at).try_normalize().unwrap_or_else(|| {
            log::warn!("Camera looks at its own position, facing -Z");
            Vector::Z
        });
        let u = up
            .cross(w)
            .try_normalize()
            .unwrap_or_else(|| w.any_orthonormal_vector());
        let v = w.cross(u);

        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * v;

        Self {
            eye,
            lower_left: eye - w - viewport_u / 2.0 - viewport_v / 2.0,
            delta_u: viewport_u / width as f64,
            delta_v: viewport_v / height as f64,
        }
    }

    pub fn eye(&self) -> Point {
        self.eye
    }

    /// World point for a screen position.
    pub fn screen_point(&self, sx: f64, sy: f64) -> Point {
        self.lower_left + sx * self.delta_u + sy * self.delta_v
    }

    /// Normalized ray from the eye through a screen position.
    pub fn ray_through(&self, sx: f64, sy: f64) -> Ray {
        Ray::normalized(self.eye, self.screen_point(sx, sy) - self.eye)
    }
}

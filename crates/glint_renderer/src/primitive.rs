//! Closed set of renderable shapes and their pairing with a material.

use crate::{Color, Hit, Material, Plane, Point, Quad, Ray, Sphere, Triangle};

/// Every shape the tracer can intersect.
///
/// Meshes are not a variant: they are flattened into triangles when the
/// scene is built.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
    Quad(Quad),
    Plane(Plane),
}

impl Primitive {
    /// Intersect a ray with the primitive; [`Hit::NONE`] on a miss.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Hit {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Triangle(triangle) => triangle.intersect(ray),
            Primitive::Quad(quad) => quad.intersect(ray),
            Primitive::Plane(plane) => plane.intersect(ray),
        }
    }

    /// Texture coordinates of a surface point.
    pub fn texture_uv(&self, p: Point) -> (f64, f64) {
        match self {
            Primitive::Sphere(sphere) => sphere.texture_uv(p),
            Primitive::Triangle(triangle) => triangle.texture_uv(p),
            Primitive::Quad(quad) => quad.texture_uv(p),
            Primitive::Plane(plane) => plane.texture_uv(p),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Triangle(_) => "triangle",
            Primitive::Quad(_) => "quad",
            Primitive::Plane(_) => "plane",
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

impl From<Quad> for Primitive {
    fn from(quad: Quad) -> Self {
        Primitive::Quad(quad)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

/// A primitive with its assigned material, as stored in a scene.
#[derive(Debug, Clone)]
pub struct Object {
    pub primitive: Primitive,
    pub material: Material,
}

impl Object {
    pub fn new(primitive: impl Into<Primitive>, material: Material) -> Self {
        Self {
            primitive: primitive.into(),
            material,
        }
    }

    /// Surface color at `p`: the flat color, or the texture sampled at the
    /// primitive's UV for that point.
    pub fn surface_color(&self, p: Point) -> Color {
        self.material.color_at(|| self.primitive.texture_uv(p))
    }
}

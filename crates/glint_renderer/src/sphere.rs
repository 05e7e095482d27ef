//! Sphere primitive for ray tracing.

use std::f64::consts::{PI, TAU};

use glint_math::Rotation;

use crate::{Hit, Point, Ray, Vector};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point,
    radius: f64,
    /// Carries the texture pole onto +Z
    orientation: Rotation,
    /// Texture spin about the pole, in radians
    spin: f64,
}

impl Sphere {
    /// Create a new sphere with the texture pole along +Z.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            orientation: Rotation::IDENTITY,
            spin: 0.0,
        }
    }

    /// Orient the texture mapping: the texture wraps around `pole` and is
    /// turned `angle_degrees` about it.
    pub fn with_orientation(mut self, pole: Vector, angle_degrees: f64) -> Self {
        self.orientation = Rotation::aligning(pole, Vector::Z);
        self.spin = angle_degrees.to_radians();
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Solve `|O + tD - C|² = r²` and keep the nearest root in front of the origin.
    pub fn intersect(&self, ray: &Ray) -> Hit {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 || a == 0.0 {
            return Hit::NONE;
        }

        let sqrtd = discriminant.sqrt();
        let mut t = (-b - sqrtd) / (2.0 * a);
        if t < 0.0 {
            // Origin inside the sphere, try the far root
            t = (-b + sqrtd) / (2.0 * a);
            if t < 0.0 {
                return Hit::NONE;
            }
        }

        let outward_normal = (ray.at(t) - self.center).normalize();
        Hit::facing(t, outward_normal, ray)
    }

    /// Spherical texture coordinates of a point on the surface.
    ///
    /// The offset from the center is rotated into texture space first;
    /// `u` runs around the pole, `v` from the pole (0) to its antipode (1).
    pub fn texture_uv(&self, p: Point) -> (f64, f64) {
        let local = self.orientation.apply(p - self.center);
        let length = local.length();
        if length == 0.0 {
            return (0.0, 0.0);
        }

        let theta = (-local.z / length).clamp(-1.0, 1.0).acos();
        let phi = (local.y.atan2(local.x) - self.spin).rem_euclid(TAU);

        let u = phi / TAU;
        let v = (PI - theta) / PI;
        (u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_ahead() -> Sphere {
        Sphere::new(Point::new(0.0, 0.0, -5.0), 1.0)
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point::ZERO, -Vector::Z);

        let hit = sphere.intersect(&ray);
        assert!((hit.t - 4.0).abs() < 1e-9);
        assert!((hit.normal - Vector::Z).length() < 1e-9);
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = unit_sphere_ahead();

        for direction in [Vector::Z, Vector::X, -Vector::Y, Vector::new(1.0, 1.0, 1.0)] {
            let ray = Ray::normalized(Point::ZERO, direction);
            assert!(!sphere.intersect(&ray).is_hit(), "direction {:?}", direction);
        }
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point::new(0.0, 0.0, -10.0), -Vector::Z);
        assert_eq!(sphere.intersect(&ray), Hit::NONE);
    }

    #[test]
    fn test_ray_through_center_picks_near_root() {
        let sphere = Sphere::new(Point::new(2.0, 3.0, -7.0), 1.5);
        let origin = Point::new(-1.0, 0.5, 4.0);
        let ray = Ray::normalized(origin, sphere.center() - origin);

        let distance = (sphere.center() - origin).length();
        let hit = sphere.intersect(&ray);

        // Roots bracket the center; the near one is taken
        assert!((hit.t - (distance - 1.5)).abs() < 1e-9);
        assert!((hit.normal.length() - 1.0).abs() < 1e-9);
        // Normal points back toward the ray origin
        assert!(hit.normal.dot(ray.direction) < 0.0);
    }

    #[test]
    fn test_origin_inside_uses_far_root_with_flipped_normal() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(sphere.center(), Vector::X);

        let hit = sphere.intersect(&ray);
        assert!((hit.t - 1.0).abs() < 1e-9);
        // Faces the ray, i.e. inward
        assert!((hit.normal + Vector::X).length() < 1e-9);
    }

    #[test]
    fn test_grazing_ray() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point::new(0.0, 1.0, 0.0), -Vector::Z);
        let hit = sphere.intersect(&ray);
        assert!(hit.is_hit());
        assert!((hit.t - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_texture_uv_poles_and_range() {
        let sphere = Sphere::new(Point::ZERO, 2.0);

        let (_, v_pole) = sphere.texture_uv(Point::new(0.0, 0.0, 2.0));
        let (_, v_antipode) = sphere.texture_uv(Point::new(0.0, 0.0, -2.0));
        assert!(v_pole.abs() < 1e-9);
        assert!((v_antipode - 1.0).abs() < 1e-9);

        for p in [
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, -2.0, 0.0),
            Point::new(-1.0, -1.0, 1.0),
        ] {
            let (u, v) = sphere.texture_uv(p);
            assert!((0.0..1.0).contains(&u), "u = {}", u);
            assert!((0.0..=1.0).contains(&v), "v = {}", v);
        }
    }

    #[test]
    fn test_texture_spin_shifts_u() {
        let plain = Sphere::new(Point::ZERO, 1.0);
        let spun = Sphere::new(Point::ZERO, 1.0).with_orientation(Vector::Z, 90.0);

        let p = Point::new(0.0, 1.0, 0.0);
        let (u_plain, _) = plain.texture_uv(p);
        let (u_spun, _) = spun.texture_uv(p);
        assert!((u_plain - 0.25).abs() < 1e-9);
        assert!(u_spun.abs() < 1e-9);
    }

    #[test]
    fn test_texture_pole_orientation() {
        // With the pole along +X, the +X point maps to v = 0
        let sphere = Sphere::new(Point::ZERO, 1.0).with_orientation(Vector::X, 0.0);
        let (_, v) = sphere.texture_uv(Point::new(1.0, 0.0, 0.0));
        assert!(v.abs() < 1e-9);
        let (_, v) = sphere.texture_uv(Point::new(-1.0, 0.0, 0.0));
        assert!((v - 1.0).abs() < 1e-9);
    }
}

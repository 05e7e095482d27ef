//! The renderable scene: primitives, lights, eye and render settings.
//!
//! Besides ownership of the scene contents this module implements the two
//! queries the renderer is built on: the nearest-intersection scan
//! ([`Scene::first_intersect`]) and recursive Whitted shading
//! ([`Scene::trace`]).

use glint_math::reflect;

use crate::{Camera, Color, Hit, Interval, Light, Object, Point, Ray, Vector, View};

/// Default minimum distance along a shadow ray before a blocker counts.
pub const DEFAULT_SHADOW_EPSILON: f64 = 1e-4;

/// Scalar render parameters. Fixed before rendering starts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Test shadow rays for occlusion
    pub has_shadows: bool,
    /// Sub-samples per pixel axis (always at least 1)
    pub super_sampling_factor: u32,
    /// Number of mirror bounces followed after the first hit
    pub max_recursion_depth: u32,
    /// Blockers closer than this to the shaded point are ignored
    pub shadow_epsilon: f64,
    /// Color of rays that hit nothing
    pub background: Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            has_shadows: false,
            super_sampling_factor: 1,
            max_recursion_depth: 1,
            shadow_epsilon: DEFAULT_SHADOW_EPSILON,
            background: Color::ZERO,
        }
    }
}

/// A scene ready for rendering.
///
/// Objects and lights are kept in insertion order; an object's index is its
/// identity during tracing (see `ignore` in [`Scene::first_intersect`]).
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<Light>,
    eye: Point,
    view: View,
    settings: RenderSettings,
}

impl Scene {
    /// Create an empty scene with the eye at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and return its index.
    pub fn add_object(&mut self, object: Object) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn set_eye(&mut self, eye: Point) {
        self.eye = eye;
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn set_has_shadows(&mut self, has_shadows: bool) {
        self.settings.has_shadows = has_shadows;
    }

    /// Set the number of sub-samples per pixel axis. Values below 1 are
    /// clamped to 1.
    pub fn set_super_sampling_factor(&mut self, factor: i32) {
        if factor < 1 {
            log::warn!("Super sampling factor {} is not positive, using 1", factor);
        }
        self.settings.super_sampling_factor = factor.max(1) as u32;
    }

    /// Set the maximum number of reflection bounces. Negative values are
    /// clamped to 0.
    pub fn set_max_recursion_depth(&mut self, depth: i32) {
        if depth < 0 {
            log::warn!("Max recursion depth {} is negative, using 0", depth);
        }
        self.settings.max_recursion_depth = depth.max(0) as u32;
    }

    pub fn set_shadow_epsilon(&mut self, epsilon: f64) {
        self.settings.shadow_epsilon = epsilon.max(0.0);
    }

    pub fn set_background(&mut self, background: Color) {
        self.settings.background = background;
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn eye(&self) -> Point {
        self.eye
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Camera for an image of the given size.
    pub fn camera(&self, width: u32, height: u32) -> Camera {
        Camera::new(self.eye, &self.view, width, height)
    }

    /// Nearest intersection along `ray`, skipping the object at `ignore`.
    ///
    /// Returns [`Hit::NONE`] and `None` when nothing is hit. On equal
    /// distances the object inserted first wins.
    pub fn first_intersect(&self, ray: &Ray, ignore: Option<usize>) -> (Hit, Option<usize>) {
        self.first_intersect_within(ray, Interval::new(f64::NEG_INFINITY, f64::INFINITY), ignore)
    }

    /// Like [`Scene::first_intersect`], but only hits with `t` strictly
    /// inside `range` are considered.
    pub fn first_intersect_within(
        &self,
        ray: &Ray,
        range: Interval,
        ignore: Option<usize>,
    ) -> (Hit, Option<usize>) {
        let mut nearest = Hit::NONE;
        let mut index = None;

        for (idx, object) in self.objects.iter().enumerate() {
            if Some(idx) == ignore {
                continue;
            }

            let hit = object.primitive.intersect(ray);
            if range.surrounds(hit.t) && hit.t < nearest.t {
                nearest = hit;
                index = Some(idx);
            }
        }

        (nearest, index)
    }

    /// Color seen along `ray`.
    ///
    /// The hit is shaded with an ambient term plus diffuse and specular
    /// terms per unoccluded light. While `depth` is above zero, the mirror
    /// reflection is traced with `depth - 1` and added, weighted by the
    /// material's `ks`. Rays that hit nothing return the background.
    pub fn trace(&self, ray: &Ray, depth: u32, ignore: Option<usize>) -> Color {
        let (hit, index) = self.first_intersect(ray, ignore);
        let Some(index) = index else {
            return self.settings.background;
        };

        let object = &self.objects[index];
        let material = &object.material;
        let point = ray.at(hit.t);
        let normal = hit.normal;
        let view = -ray.direction.normalize_or_zero();

        let color = object.surface_color(point);

        let mut diffuse = Color::ZERO;
        let mut specular = Color::ZERO;

        for light in &self.lights {
            let to_light = light.position - point;
            let distance = to_light.length();
            let Some(l) = to_light.try_normalize() else {
                continue;
            };

            if self.settings.has_shadows && self.occluded(point, l, distance, index) {
                continue;
            }

            let r = reflect(l, normal);
            diffuse += normal.dot(l).max(0.0) * light.color * material.kd * color;
            specular += r.dot(view).max(0.0).powf(material.n) * light.color * material.ks;
        }

        let ambient = color * material.ka;

        let mut result = diffuse + ambient + specular;

        // Reflection contributes nothing when ks is zero
        if depth > 0 && material.ks != 0.0 {
            let direction = reflect(view, normal).normalize_or_zero();
            let reflected = self.trace(&Ray::new(point, direction), depth - 1, Some(index));
            result += reflected * material.ks;
        }

        result
    }

    /// Whether something other than object `index` blocks the segment from
    /// `point` towards a light `distance` away in direction `l`.
    ///
    /// Hits closer than the shadow epsilon are skipped, so a neighbour
    /// touching the shaded point cannot hide a blocker farther along.
    fn occluded(&self, point: Point, l: Vector, distance: f64, index: usize) -> bool {
        let window = Interval::new(self.settings.shadow_epsilon, distance);
        let (_, blocker) = self.first_intersect_within(&Ray::new(point, l), window, Some(index));
        blocker.is_some()
    }
}

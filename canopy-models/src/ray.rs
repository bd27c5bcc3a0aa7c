use glam::{Mat4, Vec3, Vec4Swizzles};

use crate::{RayHit, Triangle};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Default lower bound for triangle hits; filters out self-intersections
    /// of rays spawned from a surface.
    pub const MIN_DISTANCE: f32 = 1e-3;

    /// Creates a new ray.
    ///
    /// `direction` is not normalized here - box and sphere tests work with
    /// any non-zero direction, but `t` of triangle hits is expressed in
    /// multiples of `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Casts a ray from the camera through given (sub-)pixel of the
    /// viewport.
    pub fn at_pixel(
        x: f32,
        y: f32,
        view_inv: Mat4,
        proj_inv: Mat4,
        width: f32,
        height: f32,
        camera_pos: Vec3,
    ) -> Self {
        let ndc_x = (2.0 * x) / width - 1.0;
        let ndc_y = 1.0 - (2.0 * y) / height;

        let camera_space = proj_inv * glam::vec4(ndc_x, ndc_y, -1.0, 1.0);
        let world_space = view_inv * camera_space;
        let world_space = world_space.xyz() / world_space.w;

        Self::new(camera_pos, (world_space - camera_pos).normalize())
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Like [`Self::intersect_triangle()`], but using the default distance
    /// range of `[MIN_DISTANCE, inf]`.
    pub fn intersect_triangle_default(
        &self,
        triangle: &Triangle,
    ) -> Option<RayHit> {
        self.intersect_triangle(triangle, Self::MIN_DISTANCE, f32::INFINITY)
    }

    /// Intersects this ray with given triangle.
    ///
    /// The test is one-sided: the face normal is `(p2 - p0) x (p1 - p0)`
    /// and triangles whose normal doesn't point against the ray are culled,
    /// same as degenerate ones. Hits with `t` outside of
    /// `min_dist ..= max_dist` are discarded.
    pub fn intersect_triangle(
        &self,
        triangle: &Triangle,
        min_dist: f32,
        max_dist: f32,
    ) -> Option<RayHit> {
        let [p0, p1, p2] = triangle.positions;
        let edge1 = p1 - p0;
        let edge2 = p2 - p0;

        let normal = edge2.cross(edge1);

        if normal.length_squared() == 0.0 {
            return None;
        }

        if normal.normalize().dot(self.direction) >= 0.0 {
            return None;
        }

        // ---

        let pvec = self.direction.cross(edge2);
        let det = edge1.dot(pvec);
        let inv_det = 1.0 / det;

        if !inv_det.is_finite() {
            return None;
        }

        let tvec = self.origin - p0;
        let b1 = tvec.dot(pvec) * inv_det;
        let qvec = tvec.cross(edge1);
        let b2 = self.direction.dot(qvec) * inv_det;
        let b0 = 1.0 - b1 - b2;
        let t = edge2.dot(qvec) * inv_det;

        if (b0 < 0.0) | (b1 < 0.0) | (b2 < 0.0) {
            return None;
        }

        if (t < min_dist) | (t > max_dist) {
            return None;
        }

        Some(RayHit::new(b0, b1, b2, t))
    }

    /// Returns whether the line carrying this ray passes through given
    /// sphere.
    ///
    /// This is a culling test, not a root solve: it answers whether an
    /// intersection exists and doesn't reject spheres laying behind the
    /// origin.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let sphere_to_ray = self.origin - center;

        let a = self.direction.length_squared();
        let b = 2.0 * self.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.length_squared() - radius * radius;

        b * b - 4.0 * a * c >= 0.0
    }

    /// Returns whether this ray hits given box (slab method).
    ///
    /// Axis-aligned rays are handled through IEEE-754 infinities coming out
    /// of `1.0 / 0.0`; a NaN produced by an origin laying exactly on a slab's
    /// plane is swallowed by `min()` / `max()`, which keeps the test
    /// conservative.
    pub fn intersects_box(&self, min: Vec3, max: Vec3) -> bool {
        let inv_direction = 1.0 / self.direction;

        let hit_min = (min - self.origin) * inv_direction;
        let hit_max = (max - self.origin) * inv_direction;

        let t_min = hit_min.min(hit_max).max_element();
        let t_max = hit_min.max(hit_max).min_element();

        t_max >= t_min.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;

    fn triangle() -> Triangle {
        Triangle::new(
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn intersect_triangle_hit() {
        let ray = Ray::new(vec3(0.25, 0.25, -1.0), vec3(0.0, 0.0, 1.0));
        let hit = ray.intersect_triangle_default(&triangle()).unwrap();

        assert_relative_eq!(1.0, hit.b0 + hit.b1 + hit.b2);
        assert_relative_eq!(0.5, hit.b0);
        assert_relative_eq!(0.25, hit.b1);
        assert_relative_eq!(0.25, hit.b2);
        assert_relative_eq!(1.0, hit.t);
        assert_eq!(vec3(0.25, 0.25, 0.0), hit.position(&triangle()));
    }

    #[test]
    fn intersect_triangle_normal_faces_ray() {
        let ray = Ray::new(vec3(0.25, 0.25, -1.0), vec3(0.0, 0.0, 1.0));
        let hit = ray.intersect_triangle_default(&triangle()).unwrap();
        let normal = hit.normal(&triangle());

        assert_eq!(Vec3::NEG_Z, normal);
        assert!(normal.dot(ray.direction()) < 0.0);
    }

    #[test]
    fn intersect_triangle_behind_origin() {
        let ray = Ray::new(vec3(0.25, 0.25, 1.0), vec3(0.0, 0.0, 1.0));

        assert_eq!(None, ray.intersect_triangle_default(&triangle()));
    }

    #[test]
    fn intersect_triangle_culled_face() {
        let ray = Ray::new(vec3(0.25, 0.25, 1.0), vec3(0.0, 0.0, -1.0));

        assert_eq!(None, ray.intersect_triangle_default(&triangle()));
    }

    #[test]
    fn intersect_triangle_outside() {
        let ray = Ray::new(vec3(0.75, 0.75, -1.0), vec3(0.0, 0.0, 1.0));

        assert_eq!(None, ray.intersect_triangle_default(&triangle()));
    }

    #[test]
    fn intersect_triangle_degenerate() {
        let triangle = Triangle::new(
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(2.0, 0.0, 0.0),
        );

        let ray = Ray::new(vec3(0.5, 0.0, -1.0), vec3(0.0, 0.0, 1.0));

        assert_eq!(None, ray.intersect_triangle_default(&triangle));
    }

    #[test]
    fn intersect_triangle_distance_range() {
        let ray = Ray::new(vec3(0.25, 0.25, -1.0), vec3(0.0, 0.0, 1.0));

        assert!(ray.intersect_triangle(&triangle(), 0.0, 1.5).is_some());
        assert!(ray.intersect_triangle(&triangle(), 0.0, 0.5).is_none());
        assert!(ray.intersect_triangle(&triangle(), 1.5, 5.0).is_none());
    }

    #[test]
    fn intersects_box() {
        let min = Vec3::splat(-0.5);
        let max = Vec3::splat(0.5);

        // Aimed at the center
        let ray = Ray::new(vec3(3.0, 2.0, 1.0), vec3(-3.0, -2.0, -1.0));
        assert!(ray.intersects_box(min, max));

        // Axis-aligned, passing through
        let ray = Ray::new(vec3(0.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0));
        assert!(ray.intersects_box(min, max));

        // Axis-aligned, offset past a face
        let ray = Ray::new(vec3(0.0, 0.75, -5.0), vec3(0.0, 0.0, 1.0));
        assert!(!ray.intersects_box(min, max));

        // Pointing away
        let ray = Ray::new(vec3(0.0, 0.0, -5.0), vec3(0.0, 0.0, -1.0));
        assert!(!ray.intersects_box(min, max));

        // Starting inside
        let ray = Ray::new(Vec3::ZERO, vec3(1.0, 2.0, 3.0));
        assert!(ray.intersects_box(min, max));
    }

    #[test]
    fn intersects_sphere() {
        let ray = Ray::new(vec3(0.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0));

        assert!(ray.intersects_sphere(Vec3::ZERO, 1.0));
        assert!(ray.intersects_sphere(vec3(0.9, 0.0, 0.0), 1.0));
        assert!(!ray.intersects_sphere(vec3(1.1, 0.0, 0.0), 1.0));
        assert!(!ray.intersects_sphere(vec3(0.0, 3.0, 3.0), 2.0));
    }

    #[test]
    fn at_pixel() {
        let camera_pos = vec3(0.0, 0.0, 5.0);
        let view = Mat4::look_at_rh(camera_pos, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh_gl(1.0, 1.0, 0.1, 100.0);

        let ray = Ray::at_pixel(
            50.0,
            50.0,
            view.inverse(),
            proj.inverse(),
            100.0,
            100.0,
            camera_pos,
        );

        assert_eq!(camera_pos, ray.origin());
        assert_relative_eq!(0.0, ray.direction().x, epsilon = 1e-5);
        assert_relative_eq!(0.0, ray.direction().y, epsilon = 1e-5);
        assert_relative_eq!(-1.0, ray.direction().z, epsilon = 1e-5);

        // Top-left corner looks up and to the left
        let ray = Ray::at_pixel(
            0.0,
            0.0,
            view.inverse(),
            proj.inverse(),
            100.0,
            100.0,
            camera_pos,
        );

        assert!(ray.direction().x < 0.0);
        assert!(ray.direction().y > 0.0);
        assert_relative_eq!(1.0, ray.direction().length(), epsilon = 1e-5);
    }
}

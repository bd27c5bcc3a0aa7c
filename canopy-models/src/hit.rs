use glam::{vec3, Vec2, Vec3, Vec4};

use crate::{Triangle, TriangleId};

/// A single ray-triangle intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Barycentric weight of the first vertex
    pub b0: f32,

    /// Barycentric weight of the second vertex
    pub b1: f32,

    /// Barycentric weight of the third vertex
    pub b2: f32,

    /// Parametric distance along the ray
    pub t: f32,

    /// Distance between the hit point and the point of view; infinite until
    /// stamped with [`Self::set_distance_to()`]
    pub distance: f32,

    pub triangle_id: TriangleId,
}

impl RayHit {
    pub fn new(b0: f32, b1: f32, b2: f32, t: f32) -> Self {
        Self {
            b0,
            b1,
            b2,
            t,
            distance: f32::INFINITY,
            triangle_id: Default::default(),
        }
    }

    pub fn barycentrics(&self) -> Vec3 {
        vec3(self.b0, self.b1, self.b2)
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn with_triangle_id(mut self, triangle_id: TriangleId) -> Self {
        self.triangle_id = triangle_id;
        self
    }

    /// Stamps this hit with its distance to given point of view (usually the
    /// camera's position).
    pub fn set_distance_to(&mut self, pov: Vec3, triangle: &Triangle) {
        self.distance = self.position(triangle).distance(pov);
    }

    pub fn position(&self, triangle: &Triangle) -> Vec3 {
        self.interpolate(triangle.positions)
    }

    pub fn normal(&self, triangle: &Triangle) -> Vec3 {
        self.interpolate(triangle.normals).normalize_or_zero()
    }

    pub fn color(&self, triangle: &Triangle) -> Vec4 {
        let [c0, c1, c2] = triangle.colors;

        self.b0 * c0 + self.b1 * c1 + self.b2 * c2
    }

    pub fn uv(&self, triangle: &Triangle) -> Vec2 {
        let [uv0, uv1, uv2] = triangle.uvs;

        self.b0 * uv0 + self.b1 * uv1 + self.b2 * uv2
    }

    fn interpolate(&self, [v0, v1, v2]: [Vec3; 3]) -> Vec3 {
        self.b0 * v0 + self.b1 * v1 + self.b2 * v2
    }
}

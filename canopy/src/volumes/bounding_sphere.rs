use glam::Vec3;

use crate::{BoundingBox, Result, Triangle};

/// A sphere derived from an axis-aligned bounding box.
///
/// The radius is half of the box's dominant extent, which is cheap but not
/// conservative - corners of non-cubical boxes stick out of the sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingSphere {
    center: Vec3,
    radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn from_aabb(aabb: &BoundingBox) -> Self {
        Self::new(aabb.center(), aabb.extent(aabb.dominant_axis()) / 2.0)
    }

    pub fn from_triangles(triangles: &[Triangle]) -> Result<Self> {
        BoundingBox::from_triangles(triangles)
            .map(|aabb| Self::from_aabb(&aabb))
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        self.center.distance(point) <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn from_aabb() {
        let aabb = BoundingBox::new(vec3(-1.0, 0.0, 2.0), vec3(3.0, 1.0, 3.0));
        let target = BoundingSphere::from_aabb(&aabb);

        assert_eq!(vec3(1.0, 0.5, 2.5), target.center());
        assert_eq!(2.0, target.radius());
        assert!(aabb.contains_point(target.center()));
        assert!(target.contains_point(vec3(1.0, 2.5, 2.5)));
        assert!(!target.contains_point(vec3(3.0, 1.0, 3.0)));
    }

    #[test]
    fn from_flat_aabb() {
        let aabb = BoundingBox::from_point(vec3(1.0, 2.0, 3.0));
        let target = BoundingSphere::from_aabb(&aabb);

        assert_eq!(vec3(1.0, 2.0, 3.0), target.center());
        assert_eq!(0.0, target.radius());
    }

    #[test]
    fn from_triangles() {
        let triangles = [Triangle::new(
            vec3(0.0, 0.0, 0.0),
            vec3(2.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
        )];

        let target = BoundingSphere::from_triangles(&triangles).unwrap();

        assert_eq!(vec3(1.0, 0.5, 0.0), target.center());
        assert_eq!(1.0, target.radius());
        assert!(target.radius() >= 0.0);
        assert!(BoundingSphere::from_triangles(&[]).is_err());
    }
}

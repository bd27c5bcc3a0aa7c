use std::ops::AddAssign;

use glam::Vec3;

use crate::{error, Axis, Error, Result, Triangle};

/// An axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a zero-sized box located at `point`.
    pub fn from_point(point: Vec3) -> Self {
        Self::new(point, point)
    }

    /// Bounds all three vertices of every given triangle.
    pub fn from_triangles(triangles: &[Triangle]) -> Result<Self> {
        if triangles.is_empty() {
            return Err(error::fatal(Error::bad_value(
                "can't bound an empty triangle list",
            )));
        }

        Ok(triangles
            .iter()
            .flat_map(|triangle| triangle.positions)
            .collect())
    }

    pub fn merge(a: Self, b: Self) -> Self {
        Self::new(a.min.min(b.min), a.max.max(b.max))
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Returns size of this box along given axis.
    pub fn extent(&self, axis: Axis) -> f32 {
        self.max[axis] - self.min[axis]
    }

    pub fn diagonal_length(&self) -> f32 {
        (self.max - self.min).length()
    }

    /// Returns the axis along which this box is the largest; ties go to X,
    /// then Y, then Z.
    pub fn dominant_axis(&self) -> Axis {
        let x = self.extent(Axis::X);
        let y = self.extent(Axis::Y);
        let z = self.extent(Axis::Z);

        if x >= y && x >= z {
            Axis::X
        } else if y >= z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Returns normal of the plane splitting this box across its dominant
    /// axis.
    pub fn dominant_axis_plane_normal(&self) -> Vec3 {
        self.dominant_axis().unit()
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vec3::MAX, Vec3::MIN)
    }
}

impl AddAssign<Vec3> for BoundingBox {
    fn add_assign(&mut self, rhs: Vec3) {
        self.min = self.min.min(rhs);
        self.max = self.max.max(rhs);
    }
}

impl FromIterator<Vec3> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Vec3>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}

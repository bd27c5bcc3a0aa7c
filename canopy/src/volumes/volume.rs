use std::fmt::Debug;

use glam::{vec4, Vec3, Vec4};

use crate::{BoundingBox, BoundingSphere, Ray};

/// A bounding volume a hierarchy can be keyed on.
pub trait Volume
where
    Self: Clone + Copy + Debug + Default + PartialEq,
{
    /// Whether a child's volume is guaranteed to fit inside its parent's.
    const NESTED: bool;

    /// Number of `Vec4`s written by [`Self::serialize_internal()`].
    const INTERNAL_NODE_LEN: usize;

    fn from_aabb(aabb: &BoundingBox) -> Self;

    fn center(&self) -> Vec3;

    /// Returns whether given ray might hit anything inside this volume.
    fn is_hit_by(&self, ray: &Ray) -> bool;

    fn contains(&self, other: &Self) -> bool;

    /// Writes an internal node's header: both children's volumes, op-code
    /// and the pointer to the right child.
    ///
    /// `buffer` is exactly [`Self::INTERNAL_NODE_LEN`] items long.
    fn serialize_internal(
        left: &Self,
        right: &Self,
        op: u32,
        right_ptr: u32,
        buffer: &mut [Vec4],
    );
}

impl Volume for BoundingBox {
    const NESTED: bool = true;
    const INTERNAL_NODE_LEN: usize = 4;

    fn from_aabb(aabb: &BoundingBox) -> Self {
        *aabb
    }

    fn center(&self) -> Vec3 {
        BoundingBox::center(self)
    }

    fn is_hit_by(&self, ray: &Ray) -> bool {
        ray.intersects_box(self.min(), self.max())
    }

    fn contains(&self, other: &Self) -> bool {
        BoundingBox::contains(self, other)
    }

    fn serialize_internal(
        left: &Self,
        right: &Self,
        op: u32,
        right_ptr: u32,
        buffer: &mut [Vec4],
    ) {
        buffer[0] = left.min().extend(f32::from_bits(op));
        buffer[1] = left.max().extend(f32::from_bits(right_ptr));
        buffer[2] = right.min().extend(Default::default());
        buffer[3] = right.max().extend(Default::default());
    }
}

/// Spheres are fitted to each node's own box with a non-conservative radius,
/// so a child sphere may stick out of its parent's one - hence `NESTED` is
/// false.
impl Volume for BoundingSphere {
    const NESTED: bool = false;
    const INTERNAL_NODE_LEN: usize = 3;

    fn from_aabb(aabb: &BoundingBox) -> Self {
        BoundingSphere::from_aabb(aabb)
    }

    fn center(&self) -> Vec3 {
        BoundingSphere::center(self)
    }

    fn is_hit_by(&self, ray: &Ray) -> bool {
        ray.intersects_sphere(self.center(), self.radius())
    }

    fn contains(&self, other: &Self) -> bool {
        self.center().distance(other.center()) + other.radius()
            <= self.radius()
    }

    fn serialize_internal(
        left: &Self,
        right: &Self,
        op: u32,
        right_ptr: u32,
        buffer: &mut [Vec4],
    ) {
        buffer[0] = vec4(
            f32::from_bits(right_ptr),
            Default::default(),
            Default::default(),
            f32::from_bits(op),
        );

        buffer[1] = left.center().extend(left.radius());
        buffer[2] = right.center().extend(right.radius());
    }
}

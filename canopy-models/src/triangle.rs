use glam::{Vec2, Vec3, Vec4};

/// A world-space triangle.
///
/// Positions drive intersection and bounding; normals, colors and UVs are
/// only consulted when interpolating a hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub positions: [Vec3; 3],
    pub normals: [Vec3; 3],
    pub colors: [Vec4; 3],
    pub uvs: [Vec2; 3],
}

impl Triangle {
    /// Creates a white, flat-shaded triangle.
    ///
    /// The normal is `(p2 - p0) x (p1 - p0)`, i.e. it points out of the face
    /// [`crate::Ray::intersect_triangle()`] treats as the front one.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        let normal = (p2 - p0).cross(p1 - p0).normalize_or_zero();

        Self {
            positions: [p0, p1, p2],
            normals: [normal; 3],
            colors: [Vec4::ONE; 3],
            uvs: [Vec2::ZERO; 3],
        }
    }

    pub fn with_colors(mut self, colors: [Vec4; 3]) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_normals(mut self, normals: [Vec3; 3]) -> Self {
        self.normals = normals;
        self
    }

    pub fn with_uvs(mut self, uvs: [Vec2; 3]) -> Self {
        self.uvs = uvs;
        self
    }

    pub fn position0(&self) -> Vec3 {
        self.positions[0]
    }

    pub fn position1(&self) -> Vec3 {
        self.positions[1]
    }

    pub fn position2(&self) -> Vec3 {
        self.positions[2]
    }

    pub fn center(&self) -> Vec3 {
        self.positions.into_iter().sum::<Vec3>() / 3.0
    }

    /// Returns whether the first vertex lays on the negative side of the
    /// plane passing through `plane_pos` with normal `plane_normal`.
    pub fn is_p0_left_of_plane(
        &self,
        plane_pos: Vec3,
        plane_normal: Vec3,
    ) -> bool {
        (self.position0() - plane_pos).dot(plane_normal) < 0.0
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleId(u32);

impl TriangleId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn get_mut(&mut self) -> &mut u32 {
        &mut self.0
    }
}

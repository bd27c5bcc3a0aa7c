use glam::Vec3;

use crate::{
    BoundingBox, BoundingCone, Light, LightCutsConfig, LightExt, LightId,
    LightKind,
};

/// A cluster of lights, standing in for all of them through its
/// representative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightNode {
    /// Sum of intensities of all lights in this cluster
    pub intensity: f32,

    /// Sum of colors of all lights in this cluster
    pub color: Vec3,

    pub bounds: BoundingBox,
    pub cone: BoundingCone,

    /// Light chosen to represent this cluster
    pub representative: LightId,

    /// Kind of the representative light
    pub kind: LightKind,

    /// Whether the representative came from the left child; always `false`
    /// for leaves
    pub is_left_representative: bool,

    pub children: Option<(LightNodeId, LightNodeId)>,
}

impl LightNode {
    pub fn leaf(id: LightId, light: &Light) -> Self {
        Self {
            intensity: light.intensity(),
            color: light.color(),
            bounds: light.bounds(),
            cone: light.bounding_cone(),
            representative: id,
            kind: light.kind(),
            is_left_representative: false,
            children: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Returns how costly it is to treat this cluster as a single light:
    /// `I² * (d² + c² * (1 - cos(half_angle))²)`, where `d` is the diagonal
    /// of the cluster's box.
    pub fn size_metric(&self, config: &LightCutsConfig) -> f32 {
        let scaling = if self.kind == LightKind::Oriented {
            config.oriented_scaling
        } else {
            config.scaling
        };

        let diagonal = self.bounds.diagonal_length();
        let spread = 1.0 - self.cone.half_angle().cos();

        self.intensity.powi(2)
            * (diagonal.powi(2) + scaling.powi(2) * spread.powi(2))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LightNodeId(u32);

impl LightNodeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

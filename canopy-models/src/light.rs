use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Point {
        position: Vec3,
        color: Vec3,
        intensity: f32,
    },

    Directional {
        direction: Vec3,
        color: Vec3,
        intensity: f32,
    },

    Oriented {
        position: Vec3,
        direction: Vec3,
        color: Vec3,
        intensity: f32,

        /// Full opening angle of the emission cone, in radians
        angle: f32,
    },
}

impl Light {
    pub fn point(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Light::Point {
            position,
            color,
            intensity,
        }
    }

    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Light::Directional {
            direction,
            color,
            intensity,
        }
    }

    pub fn oriented(
        position: Vec3,
        direction: Vec3,
        color: Vec3,
        intensity: f32,
        angle: f32,
    ) -> Self {
        Light::Oriented {
            position,
            direction,
            color,
            intensity,
            angle,
        }
    }

    pub fn kind(&self) -> LightKind {
        match self {
            Light::Point { .. } => LightKind::Point,
            Light::Directional { .. } => LightKind::Directional,
            Light::Oriented { .. } => LightKind::Oriented,
        }
    }

    pub fn color(&self) -> Vec3 {
        match self {
            Light::Point { color, .. }
            | Light::Directional { color, .. }
            | Light::Oriented { color, .. } => *color,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Point { intensity, .. }
            | Light::Directional { intensity, .. }
            | Light::Oriented { intensity, .. } => *intensity,
        }
    }

    /// Returns the point used to place this light in space.
    ///
    /// Directional lights have no position - their direction stands in for
    /// it, so that clustering groups lights shining the same way.
    pub fn anchor(&self) -> Vec3 {
        match self {
            Light::Point { position, .. }
            | Light::Oriented { position, .. } => *position,
            Light::Directional { direction, .. } => *direction,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightKind {
    Point,
    Directional,
    Oriented,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightId(u32);

impl LightId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

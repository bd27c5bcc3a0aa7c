use glam::Vec3;

/// A cone bounding the emission directions of a light cluster.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingCone {
    pub tip: Vec3,
    pub axis: Vec3,

    /// Full opening angle, in radians
    pub angular_span: f32,
}

impl BoundingCone {
    pub fn new(tip: Vec3, axis: Vec3, angular_span: f32) -> Self {
        Self {
            tip,
            axis,
            angular_span,
        }
    }

    pub fn half_angle(&self) -> f32 {
        self.angular_span / 2.0
    }

    /// Merges two cones by keeping the wider one.
    ///
    /// This is a coarse approximation - the result doesn't necessarily bound
    /// both inputs.
    pub fn merge(a: Self, b: Self) -> Self {
        if a.angular_span > b.angular_span {
            a
        } else {
            b
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge() {
        let narrow = BoundingCone::new(Vec3::ZERO, Vec3::Y, 0.5);
        let wide = BoundingCone::new(Vec3::ONE, Vec3::X, 1.5);

        assert_eq!(wide, BoundingCone::merge(narrow, wide));
        assert_eq!(wide, BoundingCone::merge(wide, narrow));
        assert_eq!(0.75, wide.half_angle());
    }
}

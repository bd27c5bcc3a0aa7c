use crate::{BoundingBox, BoundingCone, Light};

pub trait LightExt {
    /// Returns the spatial bounds of this light.
    fn bounds(&self) -> BoundingBox;

    /// Returns the cone bounding directions this light emits towards; only
    /// oriented lights have a non-degenerate one.
    fn bounding_cone(&self) -> BoundingCone;
}

impl LightExt for Light {
    fn bounds(&self) -> BoundingBox {
        BoundingBox::from_point(self.anchor())
    }

    fn bounding_cone(&self) -> BoundingCone {
        match self {
            Light::Point { .. } | Light::Directional { .. } => {
                BoundingCone::default()
            }

            Light::Oriented {
                position,
                direction,
                angle,
                ..
            } => BoundingCone::new(
                *position,
                direction.normalize_or_zero(),
                *angle,
            ),
        }
    }
}

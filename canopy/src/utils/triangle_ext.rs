use crate::{BoundingBox, Triangle};

pub trait TriangleExt {
    fn bounds(&self) -> BoundingBox;
}

impl TriangleExt for Triangle {
    fn bounds(&self) -> BoundingBox {
        self.positions.iter().copied().collect()
    }
}

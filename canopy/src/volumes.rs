mod bounding_box;
mod bounding_cone;
mod bounding_sphere;
mod volume;

pub use self::bounding_box::*;
pub use self::bounding_cone::*;
pub use self::bounding_sphere::*;
pub use self::volume::*;

mod light_ext;
mod metrics;
mod triangle_ext;

pub use self::light_ext::*;
pub(crate) use self::metrics::*;
pub use self::triangle_ext::*;

//! Plain data structures and per-primitive math shared by Canopy's
//! acceleration structures and their consumers.

#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]

mod axis;
mod hit;
mod light;
mod ray;
mod triangle;

pub use self::axis::*;
pub use self::hit::*;
pub use self::light::*;
pub use self::ray::*;
pub use self::triangle::*;

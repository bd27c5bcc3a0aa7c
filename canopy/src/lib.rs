//! Canopy: ray-tracing acceleration structures (BVH and BSH) and the
//! light-clustering tree used for many-light shading.
//!
//! Everything here is synchronous and allocation-owning; a built structure is
//! plain data and can be shared between threads freely.

#![allow(clippy::len_without_is_empty)]

mod bvh;
mod config;
pub mod error;
mod geometry;
mod light_cuts;
mod lights;
mod ray_hits;
mod utils;
mod volumes;

pub use canopy_models::*;

pub use self::bvh::*;
pub use self::config::*;
pub use self::error::{Error, Result, Severity};
pub use self::geometry::*;
pub use self::light_cuts::*;
pub use self::lights::*;
pub use self::ray_hits::*;
pub use self::utils::*;
pub use self::volumes::*;

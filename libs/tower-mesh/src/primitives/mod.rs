//! # Primitives
//!
//! Canonical solids (cylinder, box) and the oriented primitives built from
//! them (tube, box beam, half cylinder).
//!
//! Oriented primitives return `Option<Mesh>`: `None` is "no geometry" for a
//! zero-length span and is meant to be filtered out by the caller.

pub mod beam;
pub mod cube;
pub mod cylinder;
pub mod half_cylinder;
pub mod tube;

pub use beam::box_beam;
pub use cube::create_box;
pub use cylinder::create_cylinder;
pub use half_cylinder::half_cylinder;
pub use tube::tube;

//! # Tower Mesh
//!
//! Triangle mesh storage and the oriented primitive solids a lattice tower
//! is assembled from.
//!
//! ## Architecture
//!
//! ```text
//! align (rotation between directions)
//!       ↓
//! primitives (cylinder, box → tube, box_beam, half_cylinder)
//!       ↓
//! Mesh (concatenated by tower-builder, encoded by tower-export)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use tower_mesh::primitives::tube;
//!
//! let part = tube(DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0), 0.1, 24).unwrap();
//! let mesh = part.expect("non-degenerate span");
//! let (min, max) = mesh.bounding_box();
//! assert!(min.z.abs() < 1e-9);
//! assert!((max.z - 2.0).abs() < 1e-9);
//! ```

pub mod align;
pub mod error;
pub mod mesh;
pub mod primitives;

pub use align::align;
pub use error::MeshError;
pub use mesh::Mesh;

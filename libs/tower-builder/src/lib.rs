//! # Tower Builder
//!
//! Procedural construction of a triangular lattice tower with sector
//! antennas, from a handful of scalar parameters.
//!
//! ## Architecture
//!
//! ```text
//! TowerConfig (JSON) → DerivedDimensions
//!       ↓
//! levels (pole, top rings, lower levels) ┐
//! antennas (per-sector shells)           ┴→ scene (concatenate, Y-up) → TowerModel
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tower_builder::{build_tower, TowerConfig};
//!
//! let config = TowerConfig::from_json_str(r#"{
//!     "pole_height": 20, "pole_radius": 0.1,
//!     "antenna_distance_from_pole": 1.4, "antenna_height": 0.2,
//!     "antennas": {"A": 2, "B": 0, "C": 5}
//! }"#).unwrap();
//! let model = build_tower(&config).unwrap();
//! println!("{}", model.summary);
//! ```

pub mod antennas;
pub mod dimensions;
pub mod error;
pub mod labels;
pub mod layout;
pub mod levels;
pub mod params;
pub mod scene;

pub use dimensions::DerivedDimensions;
pub use error::{BuildError, BuildResult};
pub use params::{Sector, SectorCounts, TowerConfig};
pub use scene::{build_tower, PlacementSummary, TowerModel};

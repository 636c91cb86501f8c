//! # Config Crate
//!
//! Centralized configuration constants for the tower mesh pipeline.
//! All magic numbers and tunable parameters are defined here so the
//! primitive, builder and export crates agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEGENERATE_LENGTH, TUBE_RADIUS_FACTOR};
//!
//! let pole_radius = 0.1;
//! let tube_radius = pole_radius * TUBE_RADIUS_FACTOR;
//! assert!((tube_radius - 0.04).abs() < 1e-12);
//!
//! let span: f64 = 1e-12;
//! assert!(span < DEGENERATE_LENGTH);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Unit-free**: Factors are relative to the configured pole dimensions
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

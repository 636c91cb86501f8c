//! # Configuration Constants
//!
//! Centralized constants for the tower mesh pipeline. All dimension factors,
//! tessellation parameters, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters (sections per circle)
//! - **Dimensions**: Factors deriving secondary sizes from the pole
//! - **Layout**: Triangle vertex angles and level shrink rates
//! - **Defaults**: Input defaults and output file names

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum span length for a tube or beam.
///
/// Spans shorter than this are treated as "no geometry" rather than an
/// error, so coincident endpoints are silently skipped.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_LENGTH;
///
/// let length: f64 = 0.0;
/// assert!(length < DEGENERATE_LENGTH);
/// ```
pub const DEGENERATE_LENGTH: f64 = 1e-9;

/// Tolerance on local x used when halving a cylinder.
///
/// A face is kept when any of its vertices has `x >= -HALF_CYLINDER_EPSILON`.
pub const HALF_CYLINDER_EPSILON: f64 = 1e-6;

/// Tolerance used by the lower-level skip rule.
///
/// A level at height `z` is omitted when `z >= ring1_height - LEVEL_SKIP_EPSILON`.
pub const LEVEL_SKIP_EPSILON: f64 = 1e-6;

/// Cross-product norm below which two directions count as (anti)parallel.
///
/// # Example
///
/// ```rust
/// use config::constants::PARALLEL_EPSILON;
///
/// assert!(PARALLEL_EPSILON < 1e-9);
/// ```
pub const PARALLEL_EPSILON: f64 = 1e-12;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Radial sections used for structural tubes and the central pole.
pub const TUBE_SECTIONS: u32 = 24;

/// Radial sections used for antenna half-cylinders.
pub const ANTENNA_SECTIONS: u32 = 32;

/// Minimum number of sections for any circular shape.
///
/// # Example
///
/// ```rust
/// use config::constants::{MIN_SECTIONS, TUBE_SECTIONS};
///
/// assert!(TUBE_SECTIONS >= MIN_SECTIONS);
/// ```
pub const MIN_SECTIONS: u32 = 3;

// =============================================================================
// DIMENSION FACTORS (relative to pole radius / pole height)
// =============================================================================

/// Tube radius as a fraction of the pole radius.
pub const TUBE_RADIUS_FACTOR: f64 = 0.40;

/// Box beam vertical thickness as a fraction of the pole radius.
pub const BEAM_THICKNESS_Z_FACTOR: f64 = 0.70;

/// Box beam horizontal thickness as a fraction of the pole radius.
pub const BEAM_THICKNESS_Y_FACTOR: f64 = 0.08;

/// Antenna half-cylinder radius as a fraction of the pole radius.
pub const ANTENNA_RADIUS_FACTOR: f64 = 0.15;

/// Gap between ring0 and ring1 as a fraction of the antenna height.
///
/// # Example
///
/// ```rust
/// use config::constants::GAP_TOP_FACTOR;
///
/// let antenna_height = 0.2;
/// let gap = GAP_TOP_FACTOR * antenna_height;
/// assert!((gap - 0.12).abs() < 1e-12);
/// ```
pub const GAP_TOP_FACTOR: f64 = 0.6;

/// Vertical spacing between lower levels as a fraction of the pole height.
pub const LEVEL_SPACING_FACTOR: f64 = 0.15;

/// Inner triangle radius of the first level as a multiple of the pole radius.
pub const BASE_INNER_RADIUS_FACTOR: f64 = 3.0;

/// Spoke and radial strut radius as a fraction of the tube radius.
pub const SPOKE_RADIUS_FACTOR: f64 = 0.8;

/// Vertical ring0-to-ring1 strut radius as a fraction of the tube radius.
pub const STRUT_RADIUS_FACTOR: f64 = 0.7;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Angles (degrees, counter-clockwise from +X) of the triangle vertices.
///
/// The increasing order makes the triangle counter-clockwise seen from +Z,
/// which is what turns `edge × Z` into an outward normal.
pub const TRIANGLE_ANGLES_DEG: [f64; 3] = [30.0, 150.0, 270.0];

/// Inner radius shrink per level (`r_in = base * (1 - rate * lvl)`).
pub const INNER_SHRINK_PER_LEVEL: f64 = 0.10;

/// Outer radius shrink per level (`r_out = top * (1 - rate * lvl)`).
pub const OUTER_SHRINK_PER_LEVEL: f64 = 0.05;

/// Rotation (degrees, about +X) converting Z-up construction space to Y-up.
pub const Y_UP_ROTATION_DEG: f64 = -90.0;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default number of levels when the configuration omits `num_levels`.
pub const DEFAULT_NUM_LEVELS: u32 = 4;

/// Default output path for the exported model.
pub const DEFAULT_OUTPUT_FILE: &str = "tower.glb";

/// Default directory for configurations generated from label files.
pub const DEFAULT_CONFIG_DIR: &str = "tower_configs";

/// File name prefix for configurations generated from label files.
pub const CONFIG_FILE_PREFIX: &str = "TOWER_CONFIG_";

/// Default pole height used for configurations generated from label files.
pub const DEFAULT_POLE_HEIGHT: f64 = 20.0;

/// Default pole radius used for configurations generated from label files.
pub const DEFAULT_POLE_RADIUS: f64 = 0.1;

/// Default antenna height used for configurations generated from label files.
pub const DEFAULT_ANTENNA_HEIGHT: f64 = 0.2;

/// Default top-ring radius used for configurations generated from label files.
pub const DEFAULT_ANTENNA_DISTANCE: f64 = 1.4;

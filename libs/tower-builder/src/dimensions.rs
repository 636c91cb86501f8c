//! # Derived Dimensions
//!
//! Every secondary size of the tower is a fixed multiple of one of the
//! configuration's scalars.

use crate::params::TowerConfig;
use config::constants::{
    ANTENNA_RADIUS_FACTOR, BASE_INNER_RADIUS_FACTOR, BEAM_THICKNESS_Y_FACTOR,
    BEAM_THICKNESS_Z_FACTOR, GAP_TOP_FACTOR, LEVEL_SPACING_FACTOR, SPOKE_RADIUS_FACTOR,
    STRUT_RADIUS_FACTOR, TUBE_RADIUS_FACTOR,
};

/// Dimensions computed once from a [`TowerConfig`].
///
/// # Example
///
/// ```rust
/// use tower_builder::{DerivedDimensions, SectorCounts, TowerConfig};
///
/// let dims = DerivedDimensions::from_config(&TowerConfig::with_counts(SectorCounts::default()));
/// assert!((dims.ring0_height - dims.ring1_height - 0.12).abs() < 1e-12);
/// assert!((dims.antenna_center_z - 19.94).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedDimensions {
    pub pole_height: f64,
    pub pole_radius: f64,
    /// Circumradius of both top rings.
    pub top_radius: f64,
    pub antenna_height: f64,

    pub tube_radius: f64,
    pub beam_thickness_z: f64,
    pub beam_thickness_y: f64,
    pub antenna_radius: f64,
    /// Vertical distance between ring0 and ring1.
    pub gap_top: f64,
    pub ring0_height: f64,
    pub ring1_height: f64,
    pub level_spacing: f64,
    pub base_inner_radius: f64,
    /// Vertical centre of every antenna.
    pub antenna_center_z: f64,
    /// Horizontal offset from a ring edge to an antenna axis.
    pub mount_offset: f64,
}

impl DerivedDimensions {
    pub fn from_config(config: &TowerConfig) -> Self {
        let pole_radius = config.pole_radius;
        let pole_height = config.pole_height;

        let tube_radius = TUBE_RADIUS_FACTOR * pole_radius;
        let beam_thickness_y = BEAM_THICKNESS_Y_FACTOR * pole_radius;
        let antenna_radius = ANTENNA_RADIUS_FACTOR * pole_radius;
        let gap_top = GAP_TOP_FACTOR * config.antenna_height;
        let ring0_height = pole_height;
        let ring1_height = pole_height - gap_top;

        Self {
            pole_height,
            pole_radius,
            top_radius: config.antenna_distance_from_pole,
            antenna_height: config.antenna_height,
            tube_radius,
            beam_thickness_z: BEAM_THICKNESS_Z_FACTOR * pole_radius,
            beam_thickness_y,
            antenna_radius,
            gap_top,
            ring0_height,
            ring1_height,
            level_spacing: LEVEL_SPACING_FACTOR * pole_height,
            base_inner_radius: BASE_INNER_RADIUS_FACTOR * pole_radius,
            antenna_center_z: (ring0_height + ring1_height) / 2.0,
            mount_offset: beam_thickness_y / 2.0 + antenna_radius,
        }
    }

    /// Radius of the spokes running to the tower axis.
    #[inline]
    pub fn spoke_radius(&self) -> f64 {
        SPOKE_RADIUS_FACTOR * self.tube_radius
    }

    /// Radius of the vertical struts joining ring0 to ring1.
    #[inline]
    pub fn strut_radius(&self) -> f64 {
        STRUT_RADIUS_FACTOR * self.tube_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SectorCounts;
    use approx::assert_relative_eq;

    fn example() -> DerivedDimensions {
        DerivedDimensions::from_config(&TowerConfig::with_counts(SectorCounts::new(2, 0, 5)))
    }

    #[test]
    fn test_example_dimensions() {
        let dims = example();
        assert_relative_eq!(dims.tube_radius, 0.04, epsilon = 1e-12);
        assert_relative_eq!(dims.beam_thickness_z, 0.07, epsilon = 1e-12);
        assert_relative_eq!(dims.beam_thickness_y, 0.008, epsilon = 1e-12);
        assert_relative_eq!(dims.antenna_radius, 0.015, epsilon = 1e-12);
        assert_relative_eq!(dims.gap_top, 0.12, epsilon = 1e-12);
        assert_relative_eq!(dims.ring0_height, 20.0, epsilon = 1e-12);
        assert_relative_eq!(dims.ring1_height, 19.88, epsilon = 1e-12);
        assert_relative_eq!(dims.level_spacing, 3.0, epsilon = 1e-12);
        assert_relative_eq!(dims.base_inner_radius, 0.3, epsilon = 1e-12);
        assert_relative_eq!(dims.antenna_center_z, 19.94, epsilon = 1e-12);
        assert_relative_eq!(dims.mount_offset, 0.019, epsilon = 1e-12);
    }

    #[test]
    fn test_ring_gap_follows_antenna_height() {
        let mut config = TowerConfig::with_counts(SectorCounts::default());
        for h in [0.05, 0.2, 1.0, 7.5] {
            config.antenna_height = h;
            let dims = DerivedDimensions::from_config(&config);
            assert_relative_eq!(
                dims.ring0_height - dims.ring1_height,
                GAP_TOP_FACTOR * h,
                epsilon = 1e-12
            );
            assert!(dims.ring0_height > dims.ring1_height);
        }
    }

    #[test]
    fn test_antenna_centre_is_ring_midpoint() {
        let dims = example();
        assert_relative_eq!(
            dims.antenna_center_z - dims.ring1_height,
            dims.ring0_height - dims.antenna_center_z,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_spoke_and_strut_radii() {
        let dims = example();
        assert_relative_eq!(dims.spoke_radius(), 0.032, epsilon = 1e-12);
        assert_relative_eq!(dims.strut_radius(), 0.028, epsilon = 1e-12);
    }
}

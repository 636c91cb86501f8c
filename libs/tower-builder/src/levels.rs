//! # Level Assembler
//!
//! Structural parts of the tower: the central pole, the two top rings with
//! their spokes and struts, and the tubular support levels below them.
//!
//! Every builder returns `Vec<Option<Mesh>>`. A `None` entry is a
//! zero-length span and is filtered by the scene assembler.

use crate::dimensions::DerivedDimensions;
use crate::error::BuildResult;
use crate::layout::triangle_vertices;
use config::constants::{
    INNER_SHRINK_PER_LEVEL, LEVEL_SKIP_EPSILON, OUTER_SHRINK_PER_LEVEL, TUBE_SECTIONS,
};
use glam::DVec3;
use tower_mesh::primitives::{box_beam, create_cylinder, tube};
use tower_mesh::Mesh;
use tracing::debug;

/// A lower support level that survived the skip rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub index: u32,
    pub z: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// Central pole from the ground to `pole_height`.
pub fn central_pole(dims: &DerivedDimensions) -> BuildResult<Vec<Option<Mesh>>> {
    let mut pole = create_cylinder(dims.pole_radius, dims.pole_height, TUBE_SECTIONS)?;
    pole.translate(DVec3::new(0.0, 0.0, dims.pole_height / 2.0));
    Ok(vec![Some(pole)])
}

/// Ring0 and ring1 (box-beam edges plus spokes to the axis), then the
/// vertical struts between them.
pub fn top_rings(dims: &DerivedDimensions) -> BuildResult<Vec<Option<Mesh>>> {
    let ring0 = triangle_vertices(dims.top_radius, dims.ring0_height);
    let ring1 = triangle_vertices(dims.top_radius, dims.ring1_height);
    let spoke_radius = dims.spoke_radius();

    let mut parts = Vec::with_capacity(2 * 6 + 3);
    for ring in [&ring0, &ring1] {
        for i in 0..3 {
            let a = ring[i];
            let b = ring[(i + 1) % 3];
            parts.push(box_beam(
                a,
                b,
                dims.beam_thickness_z,
                dims.beam_thickness_y,
            )?);
            parts.push(tube(
                a,
                DVec3::new(0.0, 0.0, a.z),
                spoke_radius,
                TUBE_SECTIONS,
            )?);
        }
    }

    let strut_radius = dims.strut_radius();
    for (top, bottom) in ring0.iter().zip(&ring1) {
        parts.push(tube(*top, *bottom, strut_radius, TUBE_SECTIONS)?);
    }

    debug!(parts = parts.len(), "Built top rings");
    Ok(parts)
}

/// Lower levels kept by the skip rule, top-down.
///
/// Level `lvl` (1-based, `lvl < num_levels`) sits at
/// `pole_height - lvl * level_spacing`. A level at or above ring1 is
/// skipped; later levels are still considered.
///
/// # Example
///
/// ```rust
/// use tower_builder::{DerivedDimensions, SectorCounts, TowerConfig};
/// use tower_builder::levels::level_heights;
///
/// let dims = DerivedDimensions::from_config(&TowerConfig::with_counts(SectorCounts::default()));
/// let z: Vec<f64> = level_heights(&dims, 4).iter().map(|l| l.z).collect();
/// assert_eq!(z.len(), 3);
/// assert!((z[0] - 17.0).abs() < 1e-9 && (z[2] - 11.0).abs() < 1e-9);
/// ```
pub fn level_heights(dims: &DerivedDimensions, num_levels: u32) -> Vec<Level> {
    (1..num_levels)
        .filter_map(|lvl| {
            let z = dims.pole_height - f64::from(lvl) * dims.level_spacing;
            if z >= dims.ring1_height - LEVEL_SKIP_EPSILON {
                debug!(level = lvl, z, "Skipping level at or above ring1");
                return None;
            }
            let shrink = f64::from(lvl);
            Some(Level {
                index: lvl,
                z,
                inner_radius: dims.base_inner_radius * (1.0 - INNER_SHRINK_PER_LEVEL * shrink),
                outer_radius: dims.top_radius * (1.0 - OUTER_SHRINK_PER_LEVEL * shrink),
            })
        })
        .collect()
}

/// Support levels below ring1. Each edge gets an inner tube, an outer tube,
/// an inner-to-outer radial and an inner-to-axis spoke.
pub fn lower_levels(dims: &DerivedDimensions, num_levels: u32) -> BuildResult<Vec<Option<Mesh>>> {
    let spoke_radius = dims.spoke_radius();
    let mut parts = Vec::new();

    for level in level_heights(dims, num_levels) {
        let inner = triangle_vertices(level.inner_radius, level.z);
        let outer = triangle_vertices(level.outer_radius, level.z);
        let axis = DVec3::new(0.0, 0.0, level.z);

        for i in 0..3 {
            let j = (i + 1) % 3;
            parts.push(tube(inner[i], inner[j], dims.tube_radius, TUBE_SECTIONS)?);
            parts.push(tube(outer[i], outer[j], dims.tube_radius, TUBE_SECTIONS)?);
            parts.push(tube(inner[i], outer[i], spoke_radius, TUBE_SECTIONS)?);
            parts.push(tube(inner[i], axis, spoke_radius, TUBE_SECTIONS)?);
        }
        debug!(level = level.index, z = level.z, "Built support level");
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{SectorCounts, TowerConfig};
    use approx::assert_relative_eq;

    fn dims_for(pole_height: f64, antenna_height: f64) -> DerivedDimensions {
        let mut config = TowerConfig::with_counts(SectorCounts::default());
        config.pole_height = pole_height;
        config.antenna_height = antenna_height;
        DerivedDimensions::from_config(&config)
    }

    #[test]
    fn test_central_pole_base_at_ground() {
        let dims = dims_for(20.0, 0.2);
        let parts = central_pole(&dims).unwrap();
        let pole = parts[0].as_ref().unwrap();
        let (min, max) = pole.bounding_box();
        assert_relative_eq!(min.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(max.z, 20.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_top_rings_part_count() {
        let dims = dims_for(20.0, 0.2);
        let parts = top_rings(&dims).unwrap();
        assert_eq!(parts.len(), 15);
        assert!(parts.iter().all(Option::is_some));
    }

    #[test]
    fn test_top_ring_heights() {
        let dims = dims_for(20.0, 0.2);
        let parts = top_rings(&dims).unwrap();

        // First beam sits on ring0, beams of ring1 start at index 6.
        let (_, max0) = parts[0].as_ref().unwrap().bounding_box();
        assert_relative_eq!(max0.z, 20.0 + 0.035, epsilon = 1e-9);
        let (min1, _) = parts[6].as_ref().unwrap().bounding_box();
        assert_relative_eq!(min1.z, 19.88 - 0.035, epsilon = 1e-9);
    }

    #[test]
    fn test_default_levels() {
        let dims = dims_for(20.0, 0.2);
        let levels = level_heights(&dims, 4);
        let z: Vec<f64> = levels.iter().map(|l| l.z).collect();
        assert_eq!(levels.len(), 3);
        assert_relative_eq!(z[0], 17.0, epsilon = 1e-9);
        assert_relative_eq!(z[1], 14.0, epsilon = 1e-9);
        assert_relative_eq!(z[2], 11.0, epsilon = 1e-9);

        assert_relative_eq!(levels[0].inner_radius, 0.27, epsilon = 1e-12);
        assert_relative_eq!(levels[0].outer_radius, 1.33, epsilon = 1e-12);
    }

    #[test]
    fn test_single_level_has_no_lower_levels() {
        let dims = dims_for(20.0, 0.2);
        assert!(level_heights(&dims, 1).is_empty());
        assert!(lower_levels(&dims, 1).unwrap().is_empty());
    }

    #[test]
    fn test_level_skip_rule() {
        // gap = 12, ring1 = 8, spacing = 3: levels at 17, 14, 11 are skipped
        // and the loop continues to 8 (skipped, equal) and 5 (kept).
        let dims = dims_for(20.0, 20.0);
        let levels = level_heights(&dims, 6);
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].index, 5);
        assert_relative_eq!(levels[0].z, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_more_levels_never_reintroduce_skipped_heights() {
        let dims = dims_for(20.0, 20.0);
        for n in 1..10 {
            for level in level_heights(&dims, n) {
                assert!(level.z < dims.ring1_height - LEVEL_SKIP_EPSILON);
            }
        }
    }

    #[test]
    fn test_lower_levels_part_count() {
        let dims = dims_for(20.0, 0.2);
        let parts = lower_levels(&dims, 4).unwrap();
        assert_eq!(parts.len(), 3 * 12);
    }

    #[test]
    fn test_lower_levels_stay_below_ring1() {
        let dims = dims_for(20.0, 0.2);
        for part in lower_levels(&dims, 4).unwrap().into_iter().flatten() {
            let (_, max) = part.bounding_box();
            assert!(max.z < dims.ring1_height);
        }
    }
}

//! # Scene Assembler
//!
//! Runs every part builder, drops the "no geometry" parts, merges the rest
//! into one mesh and converts it to a Y-up frame.

use crate::antennas::{place_antennas, AntennaMount, AntennaPlacement};
use crate::dimensions::DerivedDimensions;
use crate::error::BuildResult;
use crate::levels::{central_pole, lower_levels, top_rings};
use crate::params::{SectorCounts, TowerConfig};
use config::constants::Y_UP_ROTATION_DEG;
use glam::DQuat;
use std::fmt;
use tower_mesh::Mesh;
use tracing::debug;

/// How many antennas were placed, per sector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementSummary {
    pub per_sector: SectorCounts,
}

impl PlacementSummary {
    pub fn total(&self) -> u32 {
        self.per_sector.total()
    }
}

impl fmt::Display for PlacementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Antennas placed: {} (", self.total())?;
        for (i, (sector, count)) in self.per_sector.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{sector}={count}")?;
        }
        f.write_str(")")
    }
}

/// The finished tower.
#[derive(Debug, Clone)]
pub struct TowerModel {
    /// Y-up mesh of the whole tower.
    pub mesh: Mesh,
    pub summary: PlacementSummary,
    /// Antenna mounts in the Z-up construction frame.
    pub mounts: Vec<AntennaMount>,
}

/// Builds the tower described by `config`.
///
/// The configuration is validated before any geometry is created. Part
/// groups are built in parallel and merged in a fixed order (pole, top
/// rings, lower levels, antennas), so the output is deterministic.
///
/// # Example
///
/// ```rust
/// use tower_builder::{build_tower, SectorCounts, TowerConfig};
///
/// let model = build_tower(&TowerConfig::with_counts(SectorCounts::new(2, 0, 5))).unwrap();
/// assert_eq!(model.summary.to_string(), "Antennas placed: 7 (A=2, B=0, C=5)");
/// assert!(!model.mesh.is_empty());
/// ```
pub fn build_tower(config: &TowerConfig) -> BuildResult<TowerModel> {
    config.validate()?;
    let dims = DerivedDimensions::from_config(config);
    debug!(?dims, "Derived dimensions");

    let ((pole, rings), (levels, antennas)) = rayon::join(
        || rayon::join(|| central_pole(&dims), || top_rings(&dims)),
        || {
            rayon::join(
                || lower_levels(&dims, config.num_levels),
                || place_antennas(&dims, &config.antenna_counts),
            )
        },
    );
    let AntennaPlacement {
        meshes: antenna_meshes,
        mounts,
        per_sector,
    } = antennas?;

    let parts: Vec<Option<Mesh>> = pole?
        .into_iter()
        .chain(rings?)
        .chain(levels?)
        .chain(antenna_meshes)
        .collect();
    let total_parts = parts.len();
    let mut mesh = Mesh::concatenate(parts.into_iter().flatten());
    mesh.rotate(DQuat::from_rotation_x(Y_UP_ROTATION_DEG.to_radians()));

    let summary = PlacementSummary { per_sector };
    debug!(
        parts = total_parts,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Assembled tower mesh"
    );
    debug!("{summary}");

    Ok(TowerModel {
        mesh,
        summary,
        mounts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_display() {
        let summary = PlacementSummary {
            per_sector: SectorCounts::new(2, 0, 5),
        };
        assert_eq!(summary.to_string(), "Antennas placed: 7 (A=2, B=0, C=5)");
    }

    #[test]
    fn test_mesh_is_y_up() {
        let config = TowerConfig::with_counts(SectorCounts::default());
        let model = build_tower(&config).unwrap();
        let (min, max) = model.mesh.bounding_box();

        // Pole base at the ground, ring0 beams reach pole_height + beam_z / 2.
        assert_relative_eq!(min.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(max.y, 20.035, epsilon = 1e-9);
        assert!(model.mesh.validate());
    }

    #[test]
    fn test_invalid_config_builds_nothing() {
        let mut config = TowerConfig::with_counts(SectorCounts::default());
        config.pole_radius = 0.0;
        assert!(build_tower(&config).is_err());
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = TowerConfig::with_counts(SectorCounts::new(1, 2, 3));
        let a = build_tower(&config).unwrap();
        let b = build_tower(&config).unwrap();
        assert_eq!(a.mesh, b.mesh);
    }

    #[test]
    fn test_antennas_add_geometry() {
        let bare = build_tower(&TowerConfig::with_counts(SectorCounts::default())).unwrap();
        let with = build_tower(&TowerConfig::with_counts(SectorCounts::new(1, 0, 0))).unwrap();
        assert!(with.mesh.triangle_count() > bare.mesh.triangle_count());
        assert_eq!(with.mounts.len(), 1);
    }
}

//! # Antenna Placer
//!
//! Antennas hang on the outside of ring0, evenly spaced along the edge of
//! their sector, with the curved face of the shell turned outwards.

use crate::dimensions::DerivedDimensions;
use crate::error::BuildResult;
use crate::layout::{sector_edges, triangle_vertices};
use crate::params::{Sector, SectorCounts};
use config::constants::ANTENNA_SECTIONS;
use glam::DVec3;
use tower_mesh::primitives::half_cylinder;
use tower_mesh::{align, Mesh};
use tracing::debug;

/// Evenly spaced edge parameters `k / (n + 1)` for `k = 1..=n`.
///
/// Both edge ends are excluded, so no antenna sits on a ring corner.
///
/// # Example
///
/// ```rust
/// use tower_builder::antennas::mount_parameters;
///
/// assert_eq!(mount_parameters(3), vec![0.25, 0.5, 0.75]);
/// assert!(mount_parameters(0).is_empty());
/// ```
pub fn mount_parameters(n: u32) -> Vec<f64> {
    let denominator = f64::from(n) + 1.0;
    (1..=n).map(|k| f64::from(k) / denominator).collect()
}

/// Where one antenna was mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntennaMount {
    pub sector: Sector,
    /// Edge parameter in `(0, 1)`.
    pub t: f64,
    /// Centre of the antenna axis.
    pub position: DVec3,
    /// Outward horizontal normal the shell faces.
    pub normal: DVec3,
}

/// Result of [`place_antennas`].
#[derive(Debug, Clone, Default)]
pub struct AntennaPlacement {
    pub meshes: Vec<Option<Mesh>>,
    pub mounts: Vec<AntennaMount>,
    pub per_sector: SectorCounts,
}

/// Builds every antenna shell for `counts`, sector by sector.
pub fn place_antennas(
    dims: &DerivedDimensions,
    counts: &SectorCounts,
) -> BuildResult<AntennaPlacement> {
    let ring0 = triangle_vertices(dims.top_radius, dims.ring0_height);
    let mut placement = AntennaPlacement::default();

    for edge in sector_edges(&ring0) {
        let n = counts[edge.sector];
        if n == 0 {
            continue;
        }

        let normal = edge.outward_normal();
        let orientation = align(DVec3::X, -normal);

        for t in mount_parameters(n) {
            let mut position = edge.point_at(t) + normal * dims.mount_offset;
            position.z = dims.antenna_center_z;

            let mut shell = half_cylinder(dims.antenna_radius, dims.antenna_height, ANTENNA_SECTIONS)?;
            shell.rotate(orientation);
            shell.translate(position);

            placement.meshes.push(Some(shell));
            placement.mounts.push(AntennaMount {
                sector: edge.sector,
                t,
                position,
                normal,
            });
        }
        placement.per_sector[edge.sector] = n;
        debug!(sector = %edge.sector, count = n, "Placed antennas");
    }

    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TowerConfig;
    use approx::assert_relative_eq;

    fn dims() -> DerivedDimensions {
        DerivedDimensions::from_config(&TowerConfig::with_counts(SectorCounts::default()))
    }

    #[test]
    fn test_mount_parameters_strictly_inside_and_increasing() {
        for n in 1..12 {
            let t = mount_parameters(n);
            assert_eq!(t.len(), n as usize);
            assert!(t.iter().all(|&t| t > 0.0 && t < 1.0));
            assert!(t.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_mount_parameters_single() {
        assert_eq!(mount_parameters(1), vec![0.5]);
    }

    #[test]
    fn test_no_antennas() {
        let placement = place_antennas(&dims(), &SectorCounts::default()).unwrap();
        assert!(placement.meshes.is_empty());
        assert!(placement.mounts.is_empty());
        assert_eq!(placement.per_sector.total(), 0);
    }

    #[test]
    fn test_example_placement() {
        let dims = dims();
        let placement = place_antennas(&dims, &SectorCounts::new(2, 0, 5)).unwrap();
        assert_eq!(placement.meshes.len(), 7);
        assert_eq!(placement.per_sector, SectorCounts::new(2, 0, 5));

        for mount in &placement.mounts {
            assert_relative_eq!(mount.position.z, 19.94, epsilon = 1e-12);
        }
        for (i, a) in placement.mounts.iter().enumerate() {
            for b in &placement.mounts[i + 1..] {
                assert!((a.position - b.position).truncate().length() > 1e-6);
            }
        }
    }

    #[test]
    fn test_sector_a_mount_position() {
        let dims = dims();
        let placement = place_antennas(&dims, &SectorCounts::new(1, 0, 0)).unwrap();
        let mount = placement.mounts[0];

        // Edge A runs along y = 0.5 r, midpoint on the y axis.
        assert_eq!(mount.sector, Sector::A);
        assert_relative_eq!(mount.position.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(mount.position.y, 0.7 + 0.019, epsilon = 1e-12);
        assert_relative_eq!(mount.normal.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_antenna_shell_vertical_extent() {
        let dims = dims();
        let placement = place_antennas(&dims, &SectorCounts::new(0, 1, 0)).unwrap();
        let (min, max) = placement.meshes[0].as_ref().unwrap().bounding_box();
        assert_relative_eq!(min.z, 19.84, epsilon = 1e-9);
        assert_relative_eq!(max.z, 20.04, epsilon = 1e-9);
    }

    #[test]
    fn test_mounts_lie_outside_ring() {
        let dims = dims();
        let ring0 = triangle_vertices(dims.top_radius, dims.ring0_height);
        let centroid = (ring0[0] + ring0[1] + ring0[2]) / 3.0;
        let placement = place_antennas(&dims, &SectorCounts::new(3, 3, 3)).unwrap();
        for (mount, edge) in placement
            .mounts
            .iter()
            .zip(sector_edges(&ring0).iter().flat_map(|e| std::iter::repeat(*e).take(3)))
        {
            let offset = (mount.position - edge.point_at(mount.t)).truncate();
            assert_relative_eq!(offset.length(), dims.mount_offset, epsilon = 1e-12);
            assert!((mount.position - centroid).dot(mount.normal) > 0.0);
        }
    }

    #[test]
    fn test_antenna_curved_face_points_at_tower() {
        let dims = dims();
        let placement = place_antennas(&dims, &SectorCounts::new(2, 1, 3)).unwrap();
        assert_eq!(placement.meshes.len(), placement.mounts.len());

        for (shell, mount) in placement.meshes.iter().zip(&placement.mounts) {
            let shell = shell.as_ref().unwrap();
            let offset = |v: DVec3| (v - mount.position).dot(mount.normal);

            // Caps are horizontal; everything else belongs to the curved side.
            let side: Vec<[DVec3; 3]> = (0..shell.triangle_count())
                .map(|i| shell.triangle_positions(i))
                .filter(|[a, b, c]| (a.z - b.z).abs() > 1e-9 || (a.z - c.z).abs() > 1e-9)
                .collect();
            assert!(!side.is_empty());

            for tri in &side {
                assert!(
                    tri.iter().any(|&v| offset(v) <= 1e-6),
                    "side face outside the flat face: {tri:?}"
                );
            }

            let mean = side
                .iter()
                .map(|[a, b, c]| offset((*a + *b + *c) / 3.0))
                .sum::<f64>()
                / side.len() as f64;
            assert!(mean < -0.4 * dims.antenna_radius, "mean offset {mean}");
        }
    }
}

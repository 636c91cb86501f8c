//! # Triangle Layout
//!
//! The tower cross-section is an equilateral triangle with vertices at 30°,
//! 150° and 270°. Each edge carries one sector:
//!
//! | Sector | Edge | From → To |
//! |--------|------|-----------|
//! | A      | 0    | v0 → v1   |
//! | B      | 1    | v1 → v2   |
//! | C      | 2    | v2 → v0   |

use crate::params::Sector;
use config::constants::TRIANGLE_ANGLES_DEG;
use glam::DVec3;

/// Vertices of a horizontal equilateral triangle of circumradius `radius`
/// at height `z`.
///
/// # Example
///
/// ```rust
/// use tower_builder::layout::triangle_vertices;
///
/// let [v0, v1, v2] = triangle_vertices(1.0, 5.0);
/// assert!((v2.y + 1.0).abs() < 1e-12);
/// assert!((v0.z - 5.0).abs() < 1e-12 && (v1.y - 0.5).abs() < 1e-12);
/// ```
pub fn triangle_vertices(radius: f64, z: f64) -> [DVec3; 3] {
    TRIANGLE_ANGLES_DEG.map(|deg| {
        let (sin, cos) = deg.to_radians().sin_cos();
        DVec3::new(radius * cos, radius * sin, z)
    })
}

/// Whether `vertices` run counter-clockwise when seen from +Z.
pub fn triangle_winding_is_ccw(vertices: &[DVec3; 3]) -> bool {
    let [a, b, c] = *vertices;
    (b - a).cross(c - a).z > 0.0
}

/// One edge of a triangle ring, tagged with its sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorEdge {
    pub sector: Sector,
    pub start: DVec3,
    pub end: DVec3,
}

impl SectorEdge {
    /// Edge vector from `start` to `end` (not normalized).
    #[inline]
    pub fn vector(&self) -> DVec3 {
        self.end - self.start
    }

    /// Unit direction along the edge.
    pub fn direction(&self) -> DVec3 {
        self.vector().normalize_or_zero()
    }

    /// Horizontal unit normal pointing away from the tower axis.
    ///
    /// For a counter-clockwise triangle, `direction × Z` points outwards.
    pub fn outward_normal(&self) -> DVec3 {
        self.direction().cross(DVec3::Z).normalize_or_zero()
    }

    /// Point at parameter `t` along the edge.
    #[inline]
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.start + self.vector() * t
    }
}

/// The three sector edges of `vertices`, in sector order.
pub fn sector_edges(vertices: &[DVec3; 3]) -> [SectorEdge; 3] {
    debug_assert!(
        triangle_winding_is_ccw(vertices),
        "triangle vertices must be counter-clockwise from +Z"
    );
    Sector::ALL.map(|sector| {
        let i = sector.index();
        SectorEdge {
            sector,
            start: vertices[i],
            end: vertices[(i + 1) % 3],
        }
    })
}

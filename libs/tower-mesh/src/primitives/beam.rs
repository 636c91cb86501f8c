//! # Box Beam Primitive
//!
//! Rectangular beam spanning two points.

use crate::align::align;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::cube::create_box;
use config::constants::DEGENERATE_LENGTH;
use glam::DVec3;

/// Creates a rectangular beam from `a` to `b`.
///
/// The beam is built along +X as a box of extents
/// `(length, thickness_y, thickness_z)`, shifted so its start face sits at
/// the origin, aligned from +X onto the span direction and moved to `a`.
///
/// Returns `Ok(None)` for a zero-length span.
///
/// # Example
///
/// ```rust
/// use tower_mesh::primitives::box_beam;
/// use glam::DVec3;
///
/// let a = DVec3::new(0.0, 0.0, 2.0);
/// assert!(box_beam(a, a, 0.07, 0.008).unwrap().is_none());
///
/// let beam = box_beam(a, DVec3::new(3.0, 0.0, 2.0), 0.2, 0.1).unwrap().unwrap();
/// let (_, max) = beam.bounding_box();
/// assert!((max.x - 3.0).abs() < 1e-9);
/// assert!((max.z - 2.1).abs() < 1e-9);
/// ```
pub fn box_beam(
    a: DVec3,
    b: DVec3,
    thickness_z: f64,
    thickness_y: f64,
) -> Result<Option<Mesh>, MeshError> {
    let span = b - a;
    let length = span.length();
    if length < DEGENERATE_LENGTH {
        return Ok(None);
    }

    let mut mesh = create_box(DVec3::new(length, thickness_y, thickness_z))?;
    mesh.translate(DVec3::new(length / 2.0, 0.0, 0.0));
    mesh.rotate(align(DVec3::X, span / length));
    mesh.translate(a);

    Ok(Some(mesh))
}

//! # Tube Primitive
//!
//! Capped cylinder spanning two points.

use crate::align::align;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::cylinder::create_cylinder;
use config::constants::DEGENERATE_LENGTH;
use glam::DVec3;

/// Creates a capped cylinder whose axis runs from `a` to `b`.
///
/// Returns `Ok(None)` when the two points (nearly) coincide: a zero-length
/// span is "no geometry", not an error. The length check happens before any
/// other validation.
///
/// # Example
///
/// ```rust
/// use tower_mesh::primitives::tube;
/// use glam::DVec3;
///
/// let a = DVec3::new(1.0, 1.0, 1.0);
/// assert!(tube(a, a, 0.1, 24).unwrap().is_none());
///
/// let mesh = tube(a, DVec3::new(3.0, 1.0, 1.0), 0.1, 24).unwrap().unwrap();
/// let (min, max) = mesh.bounding_box();
/// assert!((min.x - 1.0).abs() < 1e-9 && (max.x - 3.0).abs() < 1e-9);
/// ```
pub fn tube(a: DVec3, b: DVec3, radius: f64, sections: u32) -> Result<Option<Mesh>, MeshError> {
    let span = b - a;
    let length = span.length();
    if length < DEGENERATE_LENGTH {
        return Ok(None);
    }

    let mut mesh = create_cylinder(radius, length, sections)?;
    mesh.rotate(align(DVec3::Z, span / length));
    mesh.translate(a + span / 2.0);

    Ok(Some(mesh))
}

//! # Box Primitive
//!
//! Generates mesh for rectangular prisms centred at the origin.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned box centred at the origin.
///
/// # Arguments
///
/// * `extents` - Full edge lengths along X, Y and Z
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use tower_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::new(4.0, 2.0, 1.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// let (min, max) = mesh.bounding_box();
/// assert_eq!(min, DVec3::new(-2.0, -1.0, -0.5));
/// assert_eq!(max, DVec3::new(2.0, 1.0, 0.5));
/// ```
pub fn create_box(extents: DVec3) -> Result<Mesh, MeshError> {
    if extents.x <= 0.0 || extents.y <= 0.0 || extents.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Box extents must be positive: {extents:?}"
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);

    let max = extents / 2.0;
    let min = -max;

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // 0: left-front-bottom
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // 1: right-front-bottom
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z)); // 2: right-back-bottom
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z)); // 3: left-back-bottom

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // 4: left-front-top
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // 5: right-front-top
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z)); // 6: right-back-top
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z)); // 7: left-back-top

    // Counter-clockwise winding seen from outside

    // Bottom
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    // Top
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    // Front (y = min.y)
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    // Back (y = max.y)
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    // Left (x = min.x)
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    // Right (x = max.x)
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}

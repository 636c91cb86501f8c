//! # Half Cylinder Primitive
//!
//! Antenna shell: a capped cylinder with the faces behind the YZ plane
//! dropped, so the curved side fronts +X.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::cylinder::create_cylinder;
use config::constants::HALF_CYLINDER_EPSILON;

/// Creates a half cylinder with axis +Z, curved face towards +X.
///
/// Starts from [`create_cylinder`] and keeps a face when ANY of its vertices
/// has `x >= -HALF_CYLINDER_EPSILON`, then drops unreferenced vertices.
/// Faces straddling the split keep the seam strip, and cap fan triangles are
/// always kept because each one touches the centre vertex on the axis.
///
/// # Example
///
/// ```rust
/// use tower_mesh::primitives::half_cylinder;
///
/// let shell = half_cylinder(0.015, 0.2, 32).unwrap();
/// let (_, max) = shell.bounding_box();
/// assert!(max.x > 0.0);
/// assert!((max.z - 0.1).abs() < 1e-12);
/// ```
pub fn half_cylinder(radius: f64, height: f64, sections: u32) -> Result<Mesh, MeshError> {
    let mut mesh = create_cylinder(radius, height, sections)?;
    mesh.retain_triangles(|corners| {
        corners.iter().any(|p| p.x >= -HALF_CYLINDER_EPSILON)
    });
    mesh.remove_unreferenced_vertices();
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side_triangles(mesh: &Mesh) -> usize {
        (0..mesh.triangle_count())
            .filter(|&i| {
                let [a, b, c] = mesh.triangle_positions(i);
                !(a.z == b.z && b.z == c.z)
            })
            .count()
    }

    #[test]
    fn test_half_cylinder_retention_rule() {
        // 8 sections at 45° steps: ring vertices 0, 1, 2, 6, 7 have x >= 0
        // (2 and 6 sit on the split within rounding). Side quads 3 and 4 lie
        // entirely behind it and are the only faces removed.
        let shell = half_cylinder(1.0, 2.0, 8).unwrap();
        assert_eq!(side_triangles(&shell), 12);
        assert_eq!(shell.triangle_count(), 16 + 12);
        assert!(shell.validate());
    }

    #[test]
    fn test_half_cylinder_every_face_touches_front() {
        let shell = half_cylinder(0.5, 1.0, 32).unwrap();
        for i in 0..shell.triangle_count() {
            let corners = shell.triangle_positions(i);
            assert!(corners.iter().any(|p| p.x >= -HALF_CYLINDER_EPSILON));
        }
    }

    #[test]
    fn test_half_cylinder_has_no_unreferenced_vertices() {
        let shell = half_cylinder(0.5, 1.0, 32).unwrap();
        let mut used = vec![false; shell.vertex_count()];
        for tri in shell.triangles() {
            for &i in tri {
                used[i as usize] = true;
            }
        }
        assert!(used.into_iter().all(|u| u));
    }

    #[test]
    fn test_half_cylinder_curved_side_fronts_positive_x() {
        let shell = half_cylinder(1.0, 1.0, 32).unwrap();
        let full = create_cylinder(1.0, 1.0, 32).unwrap();
        assert!(side_triangles(&shell) < side_triangles(&full));

        // Cap fans reference every ring vertex, so none become unreferenced.
        assert_eq!(shell.vertex_count(), full.vertex_count());
    }

    #[test]
    fn test_half_cylinder_invalid_radius() {
        assert!(half_cylinder(0.0, 1.0, 32).is_err());
    }
}

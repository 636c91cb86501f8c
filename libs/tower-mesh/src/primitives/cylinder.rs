//! # Cylinder Primitive
//!
//! Generates the canonical capped cylinder every tube, the pole and the
//! antenna shells are derived from.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SECTIONS;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a capped cylinder centred at the origin with its axis along +Z.
///
/// Each cap is a triangle fan around a centre vertex on the axis, so the
/// mesh has `2 * sections + 2` vertices and `4 * sections` triangles.
///
/// Vertex layout: bottom centre, top centre, bottom ring, top ring. Ring
/// vertex `j` sits at angle `j * TAU / sections` from +X.
///
/// # Arguments
///
/// * `radius` - Radius of both caps
/// * `height` - Length along Z (from `-height/2` to `height/2`)
/// * `sections` - Number of segments around circumference
///
/// # Example
///
/// ```rust
/// use tower_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(1.0, 2.0, 24).unwrap();
/// assert_eq!(mesh.vertex_count(), 50);
/// assert_eq!(mesh.triangle_count(), 96);
/// ```
pub fn create_cylinder(radius: f64, height: f64, sections: u32) -> Result<Mesh, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {radius}"
        )));
    }

    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {height}"
        )));
    }

    if sections < MIN_SECTIONS {
        return Err(MeshError::TooFewSections {
            count: sections,
            min: MIN_SECTIONS,
        });
    }

    let n = sections as usize;
    let mut mesh = Mesh::with_capacity(2 * n + 2, 4 * n);

    let half = height / 2.0;
    let bottom_center = mesh.add_vertex(DVec3::new(0.0, 0.0, -half));
    let top_center = mesh.add_vertex(DVec3::new(0.0, 0.0, half));

    let ring = |mesh: &mut Mesh, z: f64| -> Vec<u32> {
        (0..sections)
            .map(|j| {
                let theta = TAU * f64::from(j) / f64::from(sections);
                let (sin, cos) = theta.sin_cos();
                mesh.add_vertex(DVec3::new(radius * cos, radius * sin, z))
            })
            .collect()
    };

    let bottom = ring(&mut mesh, -half);
    let top = ring(&mut mesh, half);

    for j in 0..n {
        let k = (j + 1) % n;

        // Bottom cap, facing -Z
        mesh.add_triangle(bottom_center, bottom[k], bottom[j]);

        // Side quad
        mesh.add_triangle(bottom[j], bottom[k], top[k]);
        mesh.add_triangle(bottom[j], top[k], top[j]);

        // Top cap, facing +Z
        mesh.add_triangle(top_center, top[j], top[k]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_counts() {
        let mesh = create_cylinder(5.0, 10.0, 32).unwrap();
        assert_eq!(mesh.vertex_count(), 66);
        assert_eq!(mesh.triangle_count(), 128);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cylinder_centered() {
        let mesh = create_cylinder(5.0, 10.0, 32).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, -5.0);
        assert_relative_eq!(max.z, 5.0);
        assert_relative_eq!(max.x, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cylinder_outward_winding() {
        let mesh = create_cylinder(1.0, 2.0, 16).unwrap();
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_positions(i);
            let normal = (b - a).cross(c - a);
            let center = (a + b + c) / 3.0;
            assert!(normal.dot(center) > 0.0, "triangle {i} faces inward");
        }
    }

    #[test]
    fn test_cylinder_invalid_radius() {
        assert!(create_cylinder(0.0, 1.0, 24).is_err());
        assert!(create_cylinder(-1.0, 1.0, 24).is_err());
    }

    #[test]
    fn test_cylinder_invalid_height() {
        assert!(create_cylinder(1.0, 0.0, 24).is_err());
    }

    #[test]
    fn test_cylinder_too_few_sections() {
        let result = create_cylinder(1.0, 1.0, 2);
        assert_eq!(
            result.unwrap_err(),
            MeshError::TooFewSections { count: 2, min: 3 }
        );
    }
}

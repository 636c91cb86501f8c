//! # Tower Export
//!
//! Encodes a [`Mesh`] as binary glTF 2.0 (GLB): one buffer holding f32
//! positions, f32 vertex normals and u32 triangle indices, referenced by a
//! single mesh, node and scene.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use tower_export::export_glb;
//! use tower_mesh::Mesh;
//!
//! let mut mesh = Mesh::new();
//! mesh.add_vertex(DVec3::ZERO);
//! mesh.add_vertex(DVec3::X);
//! mesh.add_vertex(DVec3::Y);
//! mesh.add_triangle(0, 1, 2);
//!
//! let glb = export_glb(&mesh).unwrap();
//! assert_eq!(&glb[0..4], b"glTF");
//! ```

pub mod buffer;
pub mod document;
pub mod error;
pub mod glb;

pub use error::{ExportError, ExportResult};

use buffer::BufferBuilder;
use document::{build_root, MeshAccessors};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tower_mesh::Mesh;
use tracing::debug;

/// Generator string written into the asset block.
pub const GENERATOR: &str = "tower-export";

/// Name of the mesh and node in the document.
pub const MESH_NAME: &str = "Tower";

/// Encodes `mesh` as GLB bytes.
pub fn export_glb(mesh: &Mesh) -> ExportResult<Vec<u8>> {
    if mesh.triangle_count() == 0 {
        return Err(ExportError::Empty);
    }

    let normals: Vec<[f32; 3]> = mesh
        .compute_normals()
        .iter()
        .map(|n| [n.x as f32, n.y as f32, n.z as f32])
        .collect();

    let mut buffer = BufferBuilder::new();
    let accessors = MeshAccessors {
        positions: buffer.pack_positions(&mesh.positions_f32()),
        normals: Some(buffer.pack_vec3(&normals)),
        indices: buffer.pack_indices_u32(&mesh.indices_u32()),
    };

    let root = build_root(&buffer, MESH_NAME, &accessors, GENERATOR);
    let glb = glb::assemble_glb(&root, buffer.data())?;
    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        bytes = glb.len(),
        "Encoded GLB"
    );
    Ok(glb)
}

/// Encodes `mesh` and writes it to `path`.
///
/// The bytes go to a temporary file next to `path`, which is renamed over
/// `path` only after the whole write succeeded. A failed export leaves any
/// existing file untouched.
pub fn write_glb(path: impl AsRef<Path>, mesh: &Mesh) -> ExportResult<()> {
    let path = path.as_ref();
    let glb = export_glb(mesh)?;
    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(&glb).map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

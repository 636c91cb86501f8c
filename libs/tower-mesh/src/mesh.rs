//! # Mesh Data Structure
//!
//! Core mesh representation: vertex positions and triangles indexing them.

use glam::{DQuat, DVec3};

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64. Conversion to f32 only happens when
/// the mesh is encoded for export.
///
/// # Example
///
/// ```rust
/// use tower_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Concatenates meshes into one, offsetting indices. Vertices are not welded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tower_mesh::primitives::create_box;
    /// use tower_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let a = create_box(DVec3::ONE).unwrap();
    /// let b = create_box(DVec3::ONE).unwrap();
    /// let both = Mesh::concatenate([a, b]);
    /// assert_eq!(both.vertex_count(), 16);
    /// assert_eq!(both.triangle_count(), 24);
    /// ```
    pub fn concatenate<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Mesh>,
    {
        let parts: Vec<Mesh> = parts.into_iter().collect();
        let vertex_count = parts.iter().map(Mesh::vertex_count).sum();
        let triangle_count = parts.iter().map(Mesh::triangle_count).sum();

        let mut mesh = Self::with_capacity(vertex_count, triangle_count);
        for part in &parts {
            mesh.merge(part);
        }
        mesh
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub fn triangle_positions(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertex(a), self.vertex(b), self.vertex(c)]
    }

    /// Computes area-weighted vertex normals.
    pub fn compute_normals(&self) -> Vec<DVec3> {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        normals
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Rotates all vertices about the origin.
    pub fn rotate(&mut self, rotation: DQuat) {
        for v in &mut self.vertices {
            *v = rotation * *v;
        }
    }

    /// Translates the mesh by a vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tower_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.add_vertex(DVec3::ZERO);
    /// mesh.translate(DVec3::new(10.0, 0.0, 0.0));
    /// assert_eq!(mesh.vertex(0), DVec3::new(10.0, 0.0, 0.0));
    /// ```
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Keeps only the triangles whose corner positions satisfy `keep`.
    ///
    /// Vertices are left in place; call [`Mesh::remove_unreferenced_vertices`]
    /// afterwards to drop the ones no longer used.
    pub fn retain_triangles<F>(&mut self, mut keep: F)
    where
        F: FnMut([DVec3; 3]) -> bool,
    {
        let vertices = &self.vertices;
        self.triangles.retain(|tri| {
            keep([
                vertices[tri[0] as usize],
                vertices[tri[1] as usize],
                vertices[tri[2] as usize],
            ])
        });
    }

    /// Drops vertices no triangle refers to and reindexes the triangles.
    ///
    /// The relative order of the surviving vertices is preserved.
    pub fn remove_unreferenced_vertices(&mut self) {
        let mut referenced = vec![false; self.vertices.len()];
        for tri in &self.triangles {
            for &index in tri {
                referenced[index as usize] = true;
            }
        }

        let mut remap = vec![u32::MAX; self.vertices.len()];
        let mut kept = Vec::with_capacity(self.vertices.len());
        for (old, position) in self.vertices.iter().enumerate() {
            if referenced[old] {
                remap[old] = kept.len() as u32;
                kept.push(*position);
            }
        }

        for tri in &mut self.triangles {
            for index in tri.iter_mut() {
                *index = remap[*index as usize];
            }
        }
        self.vertices = kept;
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex index
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }

    /// Exports vertices as f32 triples for encoding.
    pub fn positions_f32(&self) -> Vec<[f32; 3]> {
        self.vertices
            .iter()
            .map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as a flattened u32 array.
    ///
    /// Returns [i0, i1, i2, i0, i1, i2, ...].
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

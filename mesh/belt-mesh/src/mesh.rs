//! Indexed triangle mesh.

use crate::vertex::MeshVertex;
use nalgebra::{Isometry3, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices
/// by index. This is the geometry currency of the conveyor pipeline:
/// segment prefabs are `TriMesh`es, and batching flattens many placed
/// prefab instances into one combined `TriMesh` per line.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside.
/// Normals point outward by the right-hand rule.
///
/// # Example
///
/// ```
/// use belt_mesh::{MeshVertex, TriMesh};
///
/// // Create a single triangle
/// let mut mesh = TriMesh::new();
/// mesh.vertices.push(MeshVertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(MeshVertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(MeshVertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriMesh {
    /// Vertex data.
    pub vertices: Vec<MeshVertex>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Create a new empty mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_mesh::TriMesh;
    ///
    /// let mesh = TriMesh::new();
    /// assert!(mesh.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use belt_mesh::{MeshVertex, TriMesh};
    ///
    /// let vertices = vec![
    ///     MeshVertex::from_coords(0.0, 0.0, 0.0),
    ///     MeshVertex::from_coords(1.0, 0.0, 0.0),
    ///     MeshVertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let faces = vec![[0, 1, 2]];
    ///
    /// let mesh = TriMesh::from_parts(vertices, faces);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<MeshVertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no faces.
    ///
    /// A mesh with vertices but no faces renders nothing, so it counts
    /// as empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Translate mesh by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Return a copy of this mesh scaled uniformly about the origin and
    /// then moved by the given isometry.
    ///
    /// This is the placement operation batching uses: a prefab authored
    /// around its local origin is scaled, rotated, and translated into a
    /// cell in one call. Vertex normals are rotated, never scaled.
    #[must_use]
    pub fn transformed(&self, isometry: &Isometry3<f64>, scale: f64) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|vertex| MeshVertex {
                position: isometry * Point3::from(vertex.position.coords * scale),
                normal: vertex.normal.map(|normal| isometry.rotation * normal),
            })
            .collect();

        Self {
            vertices,
            faces: self.faces.clone(),
        }
    }

    /// Compute the signed volume of the mesh.
    ///
    /// Uses the divergence theorem: the signed volume is the sum of signed
    /// tetrahedra volumes formed by each face and the origin. For a closed
    /// mesh with CCW winding viewed from outside, the result is positive;
    /// for open meshes it is not meaningful as a volume.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for &[i0, i1, i2] in &self.faces {
            let v0 = self.vertices[i0 as usize].position.coords;
            let v1 = self.vertices[i1 as usize].position.coords;
            let v2 = self.vertices[i2 as usize].position.coords;

            // Signed volume of tetrahedron with origin = (v0 · (v1 × v2)) / 6
            volume += v0.dot(&v1.cross(&v2));
        }

        volume / 6.0
    }

    /// Compute the absolute volume of the mesh.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Merge another mesh into this one.
    ///
    /// The other mesh's vertices and faces are appended, with face
    /// indices adjusted appropriately.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend(other.vertices.iter().cloned());

        for face in &other.faces {
            self.faces.push([
                face[0] + vertex_offset,
                face[1] + vertex_offset,
                face[2] + vertex_offset,
            ]);
        }
    }
}

/// Combine many meshes into a single mesh.
///
/// Vertices are appended in iteration order with face indices offset
/// accordingly. No deduplication or welding is performed.
///
/// # Example
///
/// ```
/// use belt_mesh::{combine_meshes, SegmentProfile, straight_segment};
///
/// let profile = SegmentProfile::new();
/// let segments = vec![straight_segment(profile), straight_segment(profile)];
/// let combined = combine_meshes(segments.into_iter());
/// assert_eq!(combined.face_count(), 24);
/// ```
#[must_use]
pub fn combine_meshes(meshes: impl Iterator<Item = TriMesh>) -> TriMesh {
    let mut combined = TriMesh::new();
    for mesh in meshes {
        combined.merge(&mesh);
    }
    combined
}

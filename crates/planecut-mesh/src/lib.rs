#![warn(missing_docs)]

//! Triangle meshes and their edge/triangle adjacency.
//!
//! The contour tracer never looks at triangle indices directly. It walks
//! the undirected edge table (endpoints plus incident triangles) and the
//! per-triangle edge lists exposed through [`SurfaceTopology`]. This crate
//! provides those tables for an indexed [`TriangleMesh`] and pairs the two in
//! a [`Surface`].

pub mod error;
pub mod surface;
pub mod topology;

pub use error::{MeshError, Result};
pub use surface::{Surface, SurfaceGeometry};
pub use topology::{MeshTopology, SurfaceTopology, TopologyEdge};

/// Indexed triangle mesh.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create a mesh from flat vertex and index buffers.
    pub fn from_buffers(vertices: Vec<f32>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex indices of triangle `index`.
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        let tri = self.indices.get(index * 3..index * 3 + 3)?;
        Some([tri[0], tri[1], tri[2]])
    }

    /// Merge another mesh into this one.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.num_vertices() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

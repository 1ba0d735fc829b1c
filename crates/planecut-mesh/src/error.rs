//! Error types for mesh topology construction.

use thiserror::Error;

/// Errors that can occur while building mesh topology.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Vertex buffer length is not a multiple of 3.
    #[error("vertex buffer has {0} floats, expected a multiple of 3")]
    MalformedVertices(usize),

    /// Index buffer length is not a multiple of 3.
    #[error("index buffer has {0} entries, expected a multiple of 3")]
    MalformedIndices(usize),

    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references vertex {vertex} but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        /// Triangle index.
        triangle: usize,
        /// Offending vertex index.
        vertex: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A triangle uses the same vertex more than once.
    #[error("triangle {0} is degenerate (repeated vertex)")]
    DegenerateTriangle(usize),
}

/// Result type for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;

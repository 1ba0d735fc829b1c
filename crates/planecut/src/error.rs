//! Error types for contour generation.

use planecut_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while generating contours.
#[derive(Error, Debug)]
pub enum ContourError {
    /// Surface is unusable (too few vertices, short coordinate buffer).
    #[error("invalid surface: {0}")]
    InvalidSurface(String),

    /// Cutting or draw-on plane is degenerate.
    #[error("invalid plane: {0}")]
    InvalidPlane(String),

    /// Surface and topology disagree about the vertex count.
    #[error("surface has {surface} vertices but its topology has {topology}")]
    TopologyMismatch {
        /// Vertices in the surface coordinate buffer.
        surface: usize,
        /// Vertices the topology was built for.
        topology: usize,
    },

    /// Invalid contour settings or coloring.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A topology edge has no incident triangles.
    #[error("edge {0} contains zero triangles, this should never happen")]
    EdgeWithoutTriangles(usize),

    /// A topology edge references a vertex that does not exist.
    #[error("edge {edge} references vertex {vertex} but the surface has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        /// Topology edge index.
        edge: usize,
        /// Offending vertex index.
        vertex: usize,
        /// Number of classified vertices.
        vertex_count: usize,
    },

    /// A triangle index is outside the topology's triangle list.
    #[error("triangle {triangle} is out of range ({triangle_count} triangles)")]
    TriangleIndexOutOfRange {
        /// Offending triangle index.
        triangle: usize,
        /// Number of triangles in the topology.
        triangle_count: usize,
    },

    /// An edge index is outside the topology's edge list or the crossing-edge arena.
    #[error("edge {edge} is out of range ({edge_count} edges)")]
    EdgeIndexOutOfRange {
        /// Offending edge index.
        edge: usize,
        /// Number of edges in the list that was indexed.
        edge_count: usize,
    },

    /// Endpoints lie on opposite sides but the segment solve failed.
    #[error("edge {0} crosses the plane but no intersection point was found")]
    IntersectionFailed(usize),

    /// Building mesh topology failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Settings document could not be parsed.
    #[error("failed to parse settings: {0}")]
    Config(#[from] toml::de::Error),
}

impl ContourError {
    /// True for errors caused by caller input rather than corrupt topology.
    ///
    /// Validation errors can be fixed by re-invoking with corrected inputs.
    /// The rest indicate a defect in the topology provider.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ContourError::InvalidSurface(_)
                | ContourError::InvalidPlane(_)
                | ContourError::TopologyMismatch { .. }
                | ContourError::InvalidSettings(_)
                | ContourError::Mesh(_)
                | ContourError::Config(_)
        )
    }
}

/// Result type for contour operations.
pub type Result<T> = std::result::Result<T, ContourError>;

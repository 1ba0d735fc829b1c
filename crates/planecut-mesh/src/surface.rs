//! A mesh paired with its topology.

use crate::error::Result;
use crate::topology::{MeshTopology, SurfaceTopology};
use crate::TriangleMesh;

/// Vertex coordinates plus adjacency, as consumed by the contour tracer.
pub trait SurfaceGeometry {
    /// Adjacency provider type.
    type Topology: SurfaceTopology;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Flat `[x0, y0, z0, x1, ...]` coordinates, `3 * vertex_count()` long.
    fn vertex_coordinates(&self) -> &[f32];

    /// Edge and triangle adjacency.
    fn topology(&self) -> &Self::Topology;
}

/// A triangle mesh and the topology built from it.
#[derive(Debug, Clone)]
pub struct Surface {
    mesh: TriangleMesh,
    topology: MeshTopology,
}

impl Surface {
    /// Build the topology for `mesh` and wrap both.
    pub fn new(mesh: TriangleMesh) -> Result<Self> {
        let topology = MeshTopology::from_mesh(&mesh)?;
        Ok(Self { mesh, topology })
    }

    /// Pair a mesh with a topology built elsewhere.
    ///
    /// No consistency checks are made here; the contour generator validates
    /// vertex counts before use.
    pub fn with_topology(mesh: TriangleMesh, topology: MeshTopology) -> Self {
        Self { mesh, topology }
    }
}

impl SurfaceGeometry for Surface {
    type Topology = MeshTopology;

    fn vertex_count(&self) -> usize {
        self.mesh.num_vertices()
    }

    fn vertex_coordinates(&self) -> &[f32] {
        &self.mesh.vertices
    }

    fn topology(&self) -> &MeshTopology {
        &self.topology
    }
}

//! Undirected edge and per-triangle edge tables.

use std::collections::HashMap;

use crate::error::{MeshError, Result};
use crate::TriangleMesh;

/// An undirected mesh edge and the triangles (tiles) that use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyEdge {
    /// First endpoint (the smaller vertex index for built topologies).
    pub node1: usize,
    /// Second endpoint.
    pub node2: usize,
    /// Incident triangles in the order they were encountered.
    ///
    /// One tile marks a boundary edge, two a manifold interior edge, more
    /// than two a non-manifold edge.
    pub tiles: Vec<usize>,
}

impl TopologyEdge {
    /// Number of incident triangles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// True if exactly one triangle uses this edge.
    pub fn is_boundary(&self) -> bool {
        self.tiles.len() == 1
    }
}

/// Read-only adjacency consumed by the contour tracer.
pub trait SurfaceTopology {
    /// Number of vertices the topology was built for.
    fn vertex_count(&self) -> usize;

    /// All undirected edges.
    fn edges(&self) -> &[TopologyEdge];

    /// For each triangle, the indices into [`edges`](Self::edges) of its three sides.
    fn triangle_edges(&self) -> &[[usize; 3]];
}

/// Edge and triangle tables built from an indexed triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshTopology {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Undirected edges, in first-seen order.
    pub edges: Vec<TopologyEdge>,
    /// Edge indices of each triangle: sides `(i0,i1)`, `(i1,i2)`, `(i2,i0)`.
    pub triangle_edges: Vec<[usize; 3]>,
}

impl MeshTopology {
    /// Build the topology for `mesh`.
    pub fn from_mesh(mesh: &TriangleMesh) -> Result<Self> {
        if mesh.vertices.len() % 3 != 0 {
            return Err(MeshError::MalformedVertices(mesh.vertices.len()));
        }
        if mesh.indices.len() % 3 != 0 {
            return Err(MeshError::MalformedIndices(mesh.indices.len()));
        }

        let vertex_count = mesh.num_vertices();
        let num_triangles = mesh.num_triangles();

        let mut edges: Vec<TopologyEdge> = Vec::with_capacity(num_triangles * 3 / 2 + 1);
        let mut triangle_edges = Vec::with_capacity(num_triangles);
        let mut edge_lookup: HashMap<(usize, usize), usize> = HashMap::new();

        for (t, tri) in mesh.indices.chunks_exact(3).enumerate() {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);

            for vertex in [i0, i1, i2] {
                if vertex >= vertex_count {
                    return Err(MeshError::VertexOutOfRange {
                        triangle: t,
                        vertex,
                        vertex_count,
                    });
                }
            }
            if i0 == i1 || i1 == i2 || i2 == i0 {
                return Err(MeshError::DegenerateTriangle(t));
            }

            let mut sides = [0usize; 3];
            for (k, (a, b)) in [(i0, i1), (i1, i2), (i2, i0)].into_iter().enumerate() {
                // Canonical order (smaller index first)
                let key = if a < b { (a, b) } else { (b, a) };
                let edge_index = *edge_lookup.entry(key).or_insert_with(|| {
                    edges.push(TopologyEdge {
                        node1: key.0,
                        node2: key.1,
                        tiles: Vec::with_capacity(2),
                    });
                    edges.len() - 1
                });
                edges[edge_index].tiles.push(t);
                sides[k] = edge_index;
            }
            triangle_edges.push(sides);
        }

        let non_manifold = edges.iter().filter(|e| e.tile_count() > 2).count();
        if non_manifold > 0 {
            log::warn!("mesh topology has {non_manifold} non-manifold edges");
        }

        Ok(Self {
            vertex_count,
            edges,
            triangle_edges,
        })
    }

    /// Number of edges used by exactly one triangle.
    pub fn boundary_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_boundary()).count()
    }

    /// True if every edge is shared by exactly two triangles.
    pub fn is_closed_manifold(&self) -> bool {
        !self.edges.is_empty() && self.edges.iter().all(|e| e.tile_count() == 2)
    }
}

impl SurfaceTopology for MeshTopology {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edges(&self) -> &[TopologyEdge] {
        &self.edges
    }

    fn triangle_edges(&self) -> &[[usize; 3]] {
        &self.triangle_edges
    }
}

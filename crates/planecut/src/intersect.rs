//! Crossing-edge detection.
//!
//! Finds every topology edge whose endpoints lie on opposite sides of the
//! cutting plane and records where the plane crosses it, which vertex is
//! below and which above, and the triangles on either side.

use planecut_math::{PlaneGeometry, Point3};
use planecut_mesh::TopologyEdge;

use crate::classify::ClassifiedVertex;
use crate::error::{ContourError, Result};

/// A mesh edge crossed by the cutting plane.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEdge {
    /// Where the plane crosses the edge.
    pub xyz: Point3,
    /// Endpoint below the plane.
    pub below_vertex: usize,
    /// Endpoint above the plane.
    pub above_vertex: usize,
    /// First incident triangle.
    pub triangle_one: usize,
    /// Second incident triangle, `None` on a boundary edge.
    pub triangle_two: Option<usize>,
    /// Index of the edge in the topology's edge list.
    pub topology_edge: usize,
    /// Set once the edge has been consumed by a contour.
    pub processed: bool,
}

impl IntersectionEdge {
    /// Incident triangles, triangle one first.
    pub fn triangles(&self) -> impl Iterator<Item = usize> {
        std::iter::once(self.triangle_one).chain(self.triangle_two)
    }

    /// True if the two edges share an incident triangle.
    pub fn shares_triangle(&self, other: &IntersectionEdge) -> bool {
        self.triangles().any(|t| other.triangles().any(|u| u == t))
    }

    /// True if only one triangle uses this edge.
    pub fn is_boundary(&self) -> bool {
        self.triangle_two.is_none()
    }
}

/// All crossing edges of one computation, plus the lookup from topology
/// edge index to crossing edge index.
#[derive(Debug, Clone, Default)]
pub struct EdgeIntersections {
    edges: Vec<IntersectionEdge>,
    by_topology_edge: Vec<Option<usize>>,
}

impl EdgeIntersections {
    /// Number of crossing edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if the plane crosses no edge.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Crossing edges in topology edge order.
    pub fn edges(&self) -> &[IntersectionEdge] {
        &self.edges
    }

    /// Crossing edge `index`.
    pub fn get(&self, index: usize) -> Option<&IntersectionEdge> {
        self.edges.get(index)
    }

    /// Crossing edge index for topology edge `topology_edge`, `None` if that
    /// edge does not cross the plane.
    pub fn lookup(&self, topology_edge: usize) -> Result<Option<usize>> {
        self.by_topology_edge
            .get(topology_edge)
            .copied()
            .ok_or(ContourError::EdgeIndexOutOfRange {
                edge: topology_edge,
                edge_count: self.by_topology_edge.len(),
            })
    }

    /// Number of crossing edges not yet consumed by a contour.
    pub fn unprocessed_count(&self) -> usize {
        self.edges.iter().filter(|e| !e.processed).count()
    }

    pub(crate) fn is_processed(&self, index: usize) -> bool {
        self.edges[index].processed
    }

    pub(crate) fn mark_processed(&mut self, index: usize) {
        self.edges[index].processed = true;
    }
}

/// Find every edge crossing `plane`.
///
/// `vertices` must come from classifying against the same plane.
/// `triangle_count` bounds the tile indices stored on each edge.
pub fn find_intersecting_edges<P: PlaneGeometry>(
    vertices: &[ClassifiedVertex],
    edges: &[TopologyEdge],
    triangle_count: usize,
    plane: &P,
) -> Result<EdgeIntersections> {
    let mut intersections = EdgeIntersections {
        edges: Vec::new(),
        by_topology_edge: Vec::with_capacity(edges.len()),
    };

    for (i, edge) in edges.iter().enumerate() {
        let v1 = vertex(vertices, i, edge.node1)?;
        let v2 = vertex(vertices, i, edge.node2)?;

        if v1.above_plane == v2.above_plane {
            intersections.by_topology_edge.push(None);
            continue;
        }

        let (below_vertex, above_vertex) = if v1.above_plane {
            (edge.node2, edge.node1)
        } else {
            (edge.node1, edge.node2)
        };

        let xyz = plane
            .intersect_segment(&vertices[below_vertex].xyz, &vertices[above_vertex].xyz)
            .ok_or(ContourError::IntersectionFailed(i))?;

        let (triangle_one, triangle_two) = match edge.tiles.as_slice() {
            [] => return Err(ContourError::EdgeWithoutTriangles(i)),
            [one] => (*one, None),
            [one, two, ..] => (*one, Some(*two)),
        };
        for triangle in std::iter::once(triangle_one).chain(triangle_two) {
            if triangle >= triangle_count {
                return Err(ContourError::TriangleIndexOutOfRange {
                    triangle,
                    triangle_count,
                });
            }
        }

        intersections.edges.push(IntersectionEdge {
            xyz,
            below_vertex,
            above_vertex,
            triangle_one,
            triangle_two,
            topology_edge: i,
            processed: false,
        });
        intersections
            .by_topology_edge
            .push(Some(intersections.edges.len() - 1));
    }

    Ok(intersections)
}

fn vertex(vertices: &[ClassifiedVertex], edge: usize, index: usize) -> Result<&ClassifiedVertex> {
    vertices
        .get(index)
        .ok_or(ContourError::VertexIndexOutOfRange {
            edge,
            vertex: index,
            vertex_count: vertices.len(),
        })
}

//! Contour tracing over crossing edges.
//!
//! A crossing edge's triangle has exactly one other crossing edge, so the
//! walk from edge to triangle to edge never has to choose. Each step takes
//! the first unprocessed crossing edge found in the current edge's triangles
//! (triangle one first). The walk stops when it comes back next to the seed
//! (closed) or when no unprocessed crossing edge remains (open, at a mesh
//! boundary). Every edge is consumed once, so tracing all seeds partitions
//! the crossing edges into disjoint contours.

use crate::error::{ContourError, Result};
use crate::intersect::EdgeIntersections;

/// Fewest edges a contour needs before it may close on its seed.
const MIN_CLOSED_EDGES: usize = 3;

/// Where a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceState {
    /// Still walking.
    Tracing,
    /// Returned to the seed; the seed is repeated at the end.
    Closed,
    /// Ran out of crossing edges at both ends.
    OpenTerminated,
}

/// Ordered crossing edges of one contour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedContour {
    /// Crossing edge indices in walk order. A closed contour ends with its
    /// first edge again.
    pub edges: Vec<usize>,
    /// Terminal state.
    pub state: TraceState,
}

impl TracedContour {
    /// True if the walk returned to its seed.
    pub fn is_closed(&self) -> bool {
        self.state == TraceState::Closed
    }

    /// Number of points the contour will produce.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if no edge was visited.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Trace the contour through crossing edge `seed`.
///
/// If the forward walk ends open and the seed still has an unprocessed
/// neighbour, the walk continues from there and the two halves are joined
/// so the contour runs boundary to boundary.
pub fn trace_contour(
    seed: usize,
    intersections: &mut EdgeIntersections,
    triangle_edges: &[[usize; 3]],
) -> Result<TracedContour> {
    let mut contour = TracedContour {
        edges: Vec::new(),
        state: TraceState::Tracing,
    };

    let mut current = Some(seed);
    while let Some(edge) = current {
        intersections.mark_processed(edge);
        contour.edges.push(edge);

        if edge != seed && contour.edges.len() >= MIN_CLOSED_EDGES && closes_on(intersections, seed, edge) {
            contour.edges.push(seed);
            contour.state = TraceState::Closed;
            return Ok(contour);
        }

        current = next_edge(edge, intersections, triangle_edges)?;
    }

    let mut backward = Vec::new();
    let mut current = next_edge(seed, intersections, triangle_edges)?;
    while let Some(edge) = current {
        intersections.mark_processed(edge);
        backward.push(edge);
        current = next_edge(edge, intersections, triangle_edges)?;
    }
    if !backward.is_empty() {
        backward.reverse();
        backward.append(&mut contour.edges);
        contour.edges = backward;
    }

    contour.state = TraceState::OpenTerminated;
    Ok(contour)
}

/// Trace every crossing edge, in index order, that no earlier contour consumed.
pub fn trace_all_contours(
    intersections: &mut EdgeIntersections,
    triangle_edges: &[[usize; 3]],
) -> Result<Vec<TracedContour>> {
    let mut contours = Vec::new();
    for seed in 0..intersections.len() {
        if intersections.is_processed(seed) {
            continue;
        }
        let contour = trace_contour(seed, intersections, triangle_edges)?;
        log::trace!(
            "contour from edge {seed}: {} edges, {:?}",
            contour.len(),
            contour.state
        );
        contours.push(contour);
    }
    Ok(contours)
}

fn closes_on(intersections: &EdgeIntersections, seed: usize, edge: usize) -> bool {
    match (intersections.get(seed), intersections.get(edge)) {
        (Some(a), Some(b)) => a.shares_triangle(b),
        _ => false,
    }
}

/// First unprocessed crossing edge in the triangles of `edge`.
fn next_edge(
    edge: usize,
    intersections: &EdgeIntersections,
    triangle_edges: &[[usize; 3]],
) -> Result<Option<usize>> {
    let Some(current) = intersections.get(edge) else {
        return Ok(None);
    };

    for triangle in current.triangles() {
        let sides = triangle_edges
            .get(triangle)
            .ok_or(ContourError::TriangleIndexOutOfRange {
                triangle,
                triangle_count: triangle_edges.len(),
            })?;
        for &side in sides {
            if let Some(candidate) = intersections.lookup(side)? {
                if !intersections.is_processed(candidate) {
                    return Ok(Some(candidate));
                }
            }
        }
    }

    Ok(None)
}

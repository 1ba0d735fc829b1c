//! Renderable contour polylines.

use planecut_math::{PlaneGeometry, Point3, Tolerance};
use serde::{Deserialize, Serialize};

use crate::color::{ContourColoring, DEBUG_END_RGBA, DEBUG_INTERIOR_RGBA, DEBUG_START_RGBA};
use crate::error::{ContourError, Result};
use crate::intersect::EdgeIntersections;
use crate::trace::TracedContour;

/// Fewest distinct points a contour needs to be drawn.
pub const MIN_CONTOUR_POINTS: usize = 2;

/// How the renderer should connect a primitive's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Closed loop; the first point is repeated at the end.
    LineLoop,
    /// Open polyline.
    LineStrip,
}

/// A contour ready for drawing: points with parallel RGBA colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourPrimitive {
    /// Points in order.
    pub points: Vec<[f32; 3]>,
    /// One RGBA color per point.
    pub colors: Vec<[f32; 4]>,
    /// Contour returns to its first point.
    pub closed: bool,
    /// Line width as a percentage of viewport height.
    pub line_width_percent: f32,
}

impl ContourPrimitive {
    /// Create an empty primitive.
    pub fn new(closed: bool, line_width_percent: f32) -> Self {
        Self {
            points: Vec::new(),
            colors: Vec::new(),
            closed,
            line_width_percent,
        }
    }

    /// Append a point and its color.
    pub fn add_vertex(&mut self, p: &Point3, rgba: [f32; 4]) {
        self.points.push([p.x as f32, p.y as f32, p.z as f32]);
        self.colors.push(rgba);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Line loop for closed contours, line strip for open ones.
    pub fn primitive_type(&self) -> PrimitiveType {
        if self.closed {
            PrimitiveType::LineLoop
        } else {
            PrimitiveType::LineStrip
        }
    }

    /// First point.
    pub fn first(&self) -> Option<Point3> {
        self.points.first().map(to_point)
    }

    /// Last point.
    pub fn last(&self) -> Option<Point3> {
        self.points.last().map(to_point)
    }

    /// Total length of the polyline.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (to_point(&w[1]) - to_point(&w[0])).norm())
            .sum()
    }

    /// Number of points not within `tol` of an earlier point.
    ///
    /// A loop's repeated closing point is not counted.
    pub fn distinct_point_count(&self, tol: &Tolerance) -> usize {
        let mut distinct: Vec<Point3> = Vec::with_capacity(self.points.len());
        for p in self.points.iter().map(to_point) {
            if !distinct.iter().any(|q| tol.points_equal(q, &p)) {
                distinct.push(p);
            }
        }
        distinct.len()
    }

    /// True if the contour has fewer than [`MIN_CONTOUR_POINTS`] distinct points.
    pub fn is_degenerate(&self) -> bool {
        let tol = Tolerance::DEFAULT;
        match self.first() {
            Some(first) => {
                self.points.len() < MIN_CONTOUR_POINTS
                    || self
                        .points
                        .iter()
                        .all(|p| tol.points_equal(&first, &to_point(p)))
            }
            None => true,
        }
    }
}

fn to_point(p: &[f32; 3]) -> Point3 {
    Point3::new(p[0] as f64, p[1] as f64, p[2] as f64)
}

/// Turn a traced contour into a primitive on `draw_on_plane`.
///
/// Fails if the contour names an edge the arena does not hold.
pub fn build_primitive<D: PlaneGeometry>(
    contour: &TracedContour,
    intersections: &EdgeIntersections,
    draw_on_plane: &D,
    coloring: &ContourColoring<'_>,
    line_width_percent: f32,
    debug_coloring: bool,
) -> Result<ContourPrimitive> {
    let mut primitive = ContourPrimitive::new(contour.is_closed(), line_width_percent);
    primitive.points.reserve(contour.len());
    primitive.colors.reserve(contour.len());

    // Index of the last traced edge; a closed contour's final entry repeats the seed
    let last_traced = if contour.is_closed() {
        contour.len().saturating_sub(2)
    } else {
        contour.len().saturating_sub(1)
    };

    for (i, &index) in contour.edges.iter().enumerate() {
        let edge = intersections
            .get(index)
            .ok_or(ContourError::EdgeIndexOutOfRange {
                edge: index,
                edge_count: intersections.len(),
            })?;
        let rgba = if debug_coloring {
            if i == 0 || i > last_traced {
                DEBUG_START_RGBA
            } else if i == last_traced {
                DEBUG_END_RGBA
            } else {
                DEBUG_INTERIOR_RGBA
            }
        } else {
            coloring.edge_color(edge)
        };
        primitive.add_vertex(&draw_on_plane.project_point(&edge.xyz), rgba);
    }

    Ok(primitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_vertices;
    use crate::fixtures;
    use crate::intersect::find_intersecting_edges;
    use crate::trace::{trace_all_contours, TraceState};
    use approx::assert_relative_eq;
    use planecut_math::Plane;
    use planecut_mesh::MeshTopology;

    fn traced_dome(plane: &Plane) -> (EdgeIntersections, Vec<TracedContour>) {
        let mesh = fixtures::dome(12);
        let topo = MeshTopology::from_mesh(&mesh).unwrap();
        let vertices = classify_vertices(&mesh.vertices, plane, 1e-7, false);
        let mut intersections =
            find_intersecting_edges(&vertices, &topo.edges, topo.triangle_edges.len(), plane)
                .unwrap();
        let contours = trace_all_contours(&mut intersections, &topo.triangle_edges).unwrap();
        (intersections, contours)
    }

    fn square(closed: bool) -> ContourPrimitive {
        let mut p = ContourPrimitive::new(closed, 0.5);
        for xyz in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]] {
            p.add_vertex(&Point3::new(xyz[0], xyz[1], xyz[2]), [1.0; 4]);
        }
        if closed {
            p.add_vertex(&Point3::origin(), [1.0; 4]);
        }
        p
    }

    #[test]
    fn test_primitive_type() {
        assert_eq!(square(true).primitive_type(), PrimitiveType::LineLoop);
        assert_eq!(square(false).primitive_type(), PrimitiveType::LineStrip);
    }

    #[test]
    fn test_length() {
        assert_relative_eq!(square(true).length(), 4.0);
        assert_relative_eq!(square(false).length(), 3.0);
    }

    #[test]
    fn test_distinct_points() {
        let tol = Tolerance::DEFAULT;
        assert_eq!(square(true).distinct_point_count(&tol), 4);
        assert!(!square(false).is_degenerate());

        let mut single = ContourPrimitive::new(false, 0.5);
        single.add_vertex(&Point3::new(1.0, 1.0, 1.0), [1.0; 4]);
        assert!(single.is_degenerate());
        single.add_vertex(&Point3::new(1.0, 1.0, 1.0 + 1e-8), [1.0; 4]);
        assert!(single.is_degenerate());
        single.add_vertex(&Point3::new(2.0, 1.0, 1.0), [1.0; 4]);
        assert!(!single.is_degenerate());
    }

    #[test]
    fn test_serializes_for_renderer() {
        let json = serde_json::to_string(&square(false)).unwrap();
        assert!(json.contains("\"closed\":false"));
        let back: ContourPrimitive = serde_json::from_str(&json).unwrap();
        assert_eq!(back, square(false));
    }

    #[test]
    fn test_unknown_edge_index_is_an_error() {
        let plane = Plane::horizontal(0.5);
        let (intersections, _) = traced_dome(&plane);
        let bogus = TracedContour {
            edges: vec![0, 1, intersections.len() + 3],
            state: TraceState::OpenTerminated,
        };
        let err = build_primitive(
            &bogus,
            &intersections,
            &plane,
            &ContourColoring::default(),
            0.5,
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContourError::EdgeIndexOutOfRange { edge, edge_count } if edge == edge_count + 3
        ));
    }

    #[test]
    fn test_closing_point_takes_seed_color() {
        // Apex blue, rim colors vary so every spoke has its own mean
        let mut rgba = vec![0.0, 0.0, 1.0, 1.0];
        for i in 0..12 {
            rgba.extend_from_slice(&[i as f32 / 12.0, 1.0, 0.0, 1.0]);
        }
        let plane = Plane::horizontal(0.5);
        let (intersections, contours) = traced_dome(&plane);
        assert_eq!(contours.len(), 1);
        let primitive = build_primitive(
            &contours[0],
            &intersections,
            &plane,
            &ContourColoring::PerVertex(&rgba),
            0.5,
            false,
        )
        .unwrap();
        let n = primitive.len();
        assert!(primitive.closed);
        assert_eq!(primitive.points[0], primitive.points[n - 1]);
        assert_eq!(primitive.colors[0], primitive.colors[n - 1]);
        assert_ne!(primitive.colors[n - 2], primitive.colors[n - 1]);
    }
}

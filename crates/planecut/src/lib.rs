#![warn(missing_docs)]

//! Plane-mesh intersection and contour tracing.
//!
//! Slices a triangulated surface with a plane and returns the polylines
//! where the plane cuts the surface, ready to be drawn as outline curves.
//! The work happens in three passes:
//! 1. Classify vertices against the plane, nudging near-plane vertices off it
//! 2. Find the edges the plane crosses and where
//! 3. Walk crossing edges through their shared triangles into contours
//!
//! # Example
//!
//! ```ignore
//! use planecut::{create_contours, ContourColoring, ContourSettings};
//! use planecut_math::Plane;
//! use planecut_mesh::{Surface, TriangleMesh};
//!
//! let surface = Surface::new(mesh)?;
//! let result = create_contours(
//!     &surface,
//!     &Plane::horizontal(0.0),
//!     &ContourColoring::Solid([1.0, 0.0, 0.0, 1.0]),
//!     &ContourSettings::default(),
//! )?;
//!
//! println!("Contours: {}", result.contours.len());
//! ```

pub mod classify;
pub mod color;
pub mod error;
pub mod intersect;
pub mod primitive;
pub mod trace;

#[cfg(test)]
mod fixtures;

pub use classify::{classify_vertices, ClassifiedVertex};
pub use color::ContourColoring;
pub use error::{ContourError, Result};
pub use intersect::{find_intersecting_edges, EdgeIntersections, IntersectionEdge};
pub use primitive::{build_primitive, ContourPrimitive, PrimitiveType};
pub use trace::{trace_all_contours, trace_contour, TraceState, TracedContour};

use std::time::Instant;

use planecut_math::PlaneGeometry;
use planecut_mesh::{Surface, SurfaceGeometry, SurfaceTopology, TriangleMesh};
use serde::{Deserialize, Serialize};

/// Contour generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourSettings {
    /// Vertices closer than this to the cutting plane are moved off it.
    pub on_plane_epsilon: f64,
    /// Line width as a percentage of viewport height.
    pub line_width_percent: f32,
    /// Color start, interior and end points instead of using the coloring.
    pub debug_coloring: bool,
    /// Classify vertices on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ContourSettings {
    fn default() -> Self {
        Self {
            on_plane_epsilon: 1e-7,
            line_width_percent: 0.5,
            debug_coloring: false,
            parallel: true,
        }
    }
}

impl ContourSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !(self.on_plane_epsilon.is_finite() && self.on_plane_epsilon > 0.0) {
            return Err(ContourError::InvalidSettings(
                "on_plane_epsilon must be positive".into(),
            ));
        }
        if !(self.line_width_percent.is_finite() && self.line_width_percent > 0.0) {
            return Err(ContourError::InvalidSettings(
                "line_width_percent must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Parse settings from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Counts from one contour computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContourStats {
    /// Vertices classified.
    pub vertex_count: usize,
    /// Edges crossing the plane.
    pub crossing_edges: usize,
    /// Closed contours returned.
    pub closed_contours: usize,
    /// Open contours returned.
    pub open_contours: usize,
    /// Contours dropped for having too few distinct points.
    pub dropped_contours: usize,
}

/// Result of contour generation.
#[derive(Debug, Clone)]
pub struct ContourResult {
    /// Contours in the order their seed edges were found.
    pub contours: Vec<ContourPrimitive>,
    /// Counts.
    pub stats: ContourStats,
}

/// Intersect `surface` with `plane` and trace the contours, drawn on the
/// cutting plane itself.
pub fn create_contours<S, P>(
    surface: &S,
    plane: &P,
    coloring: &ContourColoring<'_>,
    settings: &ContourSettings,
) -> Result<ContourResult>
where
    S: SurfaceGeometry,
    P: PlaneGeometry + Sync,
{
    create_contours_on_plane(surface, plane, plane, coloring, settings)
}

/// Intersect `surface` with `plane` and trace the contours, projecting every
/// point onto `draw_on_plane`.
///
/// This is the main entry point. It:
/// 1. Validates the surface, both planes, the settings and the coloring
/// 2. Classifies vertices
/// 3. Finds crossing edges
/// 4. Traces a contour from every crossing edge not yet consumed
///
/// Validation and topology errors abort the computation; no partial
/// result is returned.
pub fn create_contours_on_plane<S, P, D>(
    surface: &S,
    plane: &P,
    draw_on_plane: &D,
    coloring: &ContourColoring<'_>,
    settings: &ContourSettings,
) -> Result<ContourResult>
where
    S: SurfaceGeometry,
    P: PlaneGeometry + Sync,
    D: PlaneGeometry,
{
    settings.validate()?;
    validate_inputs(surface, plane, draw_on_plane)?;
    coloring.validate(surface.vertex_count())?;

    let timer = Instant::now();
    let topology = surface.topology();

    let vertices = classify_vertices(
        surface.vertex_coordinates(),
        plane,
        settings.on_plane_epsilon,
        settings.parallel,
    );
    let vertices_time = timer.elapsed();

    let mut intersections = find_intersecting_edges(
        &vertices,
        topology.edges(),
        topology.triangle_edges().len(),
        plane,
    )?;
    let edges_time = timer.elapsed();

    let traced = trace_all_contours(&mut intersections, topology.triangle_edges())?;

    let mut stats = ContourStats {
        vertex_count: vertices.len(),
        crossing_edges: intersections.len(),
        ..Default::default()
    };
    let mut contours = Vec::with_capacity(traced.len());

    for contour in &traced {
        let primitive = build_primitive(
            contour,
            &intersections,
            draw_on_plane,
            coloring,
            settings.line_width_percent,
            settings.debug_coloring,
        )?;
        if primitive.is_degenerate() {
            log::warn!(
                "dropping degenerate contour of {} points seeded at crossing edge {:?}",
                primitive.len(),
                contour.edges.first()
            );
            stats.dropped_contours += 1;
            continue;
        }
        log::trace!(
            "kept {:?} contour: {} points, length {:.6}",
            primitive.primitive_type(),
            primitive.len(),
            primitive.length()
        );
        if primitive.closed {
            stats.closed_contours += 1;
        } else {
            stats.open_contours += 1;
        }
        contours.push(primitive);
    }
    let contours_time = timer.elapsed();

    log::debug!(
        "contours: total={:?} vertices={:?} edges={:?} tracing={:?}",
        contours_time,
        vertices_time,
        edges_time - vertices_time,
        contours_time - edges_time
    );
    log::debug!("contour stats: {stats:?}");

    Ok(ContourResult { contours, stats })
}

/// Build the topology of `mesh` and trace its contours on `plane`.
pub fn create_mesh_contours<P>(
    mesh: &TriangleMesh,
    plane: &P,
    coloring: &ContourColoring<'_>,
    settings: &ContourSettings,
) -> Result<ContourResult>
where
    P: PlaneGeometry + Sync,
{
    let surface = Surface::new(mesh.clone())?;
    create_contours(&surface, plane, coloring, settings)
}

fn validate_inputs<S, P, D>(surface: &S, plane: &P, draw_on_plane: &D) -> Result<()>
where
    S: SurfaceGeometry,
    P: PlaneGeometry,
    D: PlaneGeometry,
{
    let vertex_count = surface.vertex_count();
    if vertex_count <= 2 {
        return Err(ContourError::InvalidSurface(format!(
            "surface has {vertex_count} vertices, need at least 3"
        )));
    }
    if surface.vertex_coordinates().len() != vertex_count * 3 {
        return Err(ContourError::InvalidSurface(format!(
            "coordinate buffer has {} floats for {} vertices",
            surface.vertex_coordinates().len(),
            vertex_count
        )));
    }
    if !plane.is_valid() {
        return Err(ContourError::InvalidPlane(
            "intersection plane is invalid".into(),
        ));
    }
    if !draw_on_plane.is_valid() {
        return Err(ContourError::InvalidPlane("draw-on plane is invalid".into()));
    }

    let topology_vertices = surface.topology().vertex_count();
    if topology_vertices <= 2 {
        return Err(ContourError::InvalidSurface(format!(
            "topology has {topology_vertices} vertices, need at least 3"
        )));
    }
    if topology_vertices != vertex_count {
        return Err(ContourError::TopologyMismatch {
            surface: vertex_count,
            topology: topology_vertices,
        });
    }
    Ok(())
}

//! Contour coloring.

use crate::error::{ContourError, Result};
use crate::intersect::IntersectionEdge;

/// Debug color of a contour's first point.
pub const DEBUG_START_RGBA: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Debug color of a contour's interior points.
pub const DEBUG_INTERIOR_RGBA: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Debug color of a contour's last traced point.
pub const DEBUG_END_RGBA: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// How contour points are colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContourColoring<'a> {
    /// One RGBA color for every point.
    Solid([f32; 4]),
    /// Flat per-vertex RGBA buffer, `4 * vertex_count` long. Each point gets
    /// the mean of its edge's two endpoint colors.
    PerVertex(&'a [f32]),
}

impl ContourColoring<'_> {
    /// Check the coloring against the surface's vertex count.
    pub fn validate(&self, vertex_count: usize) -> Result<()> {
        match self {
            ContourColoring::Solid(rgba) => {
                if rgba.iter().any(|c| !c.is_finite()) {
                    return Err(ContourError::InvalidSettings(
                        "solid color must be finite".into(),
                    ));
                }
            }
            ContourColoring::PerVertex(rgba) => {
                if rgba.len() < vertex_count * 4 {
                    return Err(ContourError::InvalidSettings(format!(
                        "per-vertex coloring has {} components, need {} for {} vertices",
                        rgba.len(),
                        vertex_count * 4,
                        vertex_count
                    )));
                }
            }
        }
        Ok(())
    }

    /// Color of the point where the plane crosses `edge`.
    ///
    /// Per-vertex buffers must have passed [`validate`](Self::validate).
    pub fn edge_color(&self, edge: &IntersectionEdge) -> [f32; 4] {
        match self {
            ContourColoring::Solid(rgba) => *rgba,
            ContourColoring::PerVertex(rgba) => {
                let below = edge.below_vertex * 4;
                let above = edge.above_vertex * 4;
                let mut color = [0.0; 4];
                for (m, c) in color.iter_mut().enumerate() {
                    *c = (rgba[below + m] + rgba[above + m]) / 2.0;
                }
                color
            }
        }
    }
}

impl Default for ContourColoring<'_> {
    fn default() -> Self {
        ContourColoring::Solid([1.0, 1.0, 1.0, 1.0])
    }
}

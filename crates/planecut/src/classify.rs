//! Vertex classification against the cutting plane.
//!
//! Every vertex gets a signed distance and an above/below flag. Vertices
//! within `epsilon` of the plane are pushed off it along the normal, so no
//! edge ever has an endpoint exactly on the plane.

use planecut_math::{PlaneGeometry, Point3, Vec3};
use rayon::prelude::*;

/// A mesh vertex classified against the cutting plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedVertex {
    /// Coordinate, moved off the plane if it was within epsilon of it.
    pub xyz: Point3,
    /// Signed distance of the original coordinate.
    pub signed_distance: f64,
    /// Vertex lies on the normal side of the plane.
    pub above_plane: bool,
    /// Coordinate was moved off the plane.
    pub perturbed: bool,
}

/// Classify every vertex in a flat `[x0, y0, z0, ...]` buffer.
///
/// The result is the same whether `parallel` is set or not.
pub fn classify_vertices<P>(
    coordinates: &[f32],
    plane: &P,
    epsilon: f64,
    parallel: bool,
) -> Vec<ClassifiedVertex>
where
    P: PlaneGeometry + Sync,
{
    let offset = plane.normal() * epsilon;

    if parallel {
        coordinates
            .par_chunks_exact(3)
            .map(|xyz| classify_vertex(xyz, plane, offset, epsilon))
            .collect()
    } else {
        coordinates
            .chunks_exact(3)
            .map(|xyz| classify_vertex(xyz, plane, offset, epsilon))
            .collect()
    }
}

fn classify_vertex<P: PlaneGeometry>(
    xyz: &[f32],
    plane: &P,
    offset: Vec3,
    epsilon: f64,
) -> ClassifiedVertex {
    let original = Point3::new(xyz[0] as f64, xyz[1] as f64, xyz[2] as f64);
    let signed_distance = plane.signed_distance(&original);
    // Exactly on the plane counts as above
    let above_plane = signed_distance >= 0.0;

    if signed_distance.abs() < epsilon {
        let projected = plane.project_point(&original);
        let xyz = if above_plane {
            projected + offset
        } else {
            projected - offset
        };
        return ClassifiedVertex {
            xyz,
            signed_distance,
            above_plane,
            perturbed: true,
        };
    }

    ClassifiedVertex {
        xyz: original,
        signed_distance,
        above_plane,
        perturbed: false,
    }
}

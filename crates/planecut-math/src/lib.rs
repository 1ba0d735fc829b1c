#![warn(missing_docs)]

//! Math types for planecut.
//!
//! Thin wrappers around nalgebra providing the point and vector types used
//! throughout the workspace, tolerance constants, and the plane predicates
//! the contour tracer consumes.

use nalgebra::Vector3;

pub mod plane;

pub use plane::{Plane, PlaneGeometry};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-6 linear).
    pub const DEFAULT: Self = Self { linear: 1e-6 };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

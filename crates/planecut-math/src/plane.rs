//! Planes in Hessian normal form.

use crate::{Point3, Vec3};

/// The plane operations the contour tracer needs.
///
/// Any plane representation can drive contour generation by implementing
/// these five predicates.
pub trait PlaneGeometry {
    /// True if the plane has a usable (non-degenerate, finite) normal.
    fn is_valid(&self) -> bool;

    /// Unit normal vector. Points toward the "above" side.
    fn normal(&self) -> Vec3;

    /// Signed distance from `p` to the plane, positive on the normal side.
    fn signed_distance(&self, p: &Point3) -> f64;

    /// Orthogonal projection of `p` onto the plane.
    fn project_point(&self, p: &Point3) -> Point3;

    /// Intersection of the segment `a`-`b` with the plane.
    ///
    /// Returns `None` if the segment is parallel to the plane or the
    /// crossing lies outside the segment.
    fn intersect_segment(&self, a: &Point3, b: &Point3) -> Option<Point3>;
}

/// A plane `n · p + d = 0` with unit normal `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    d: f64,
    valid: bool,
}

impl Plane {
    /// Plane through `point` with the given (not necessarily unit) normal.
    ///
    /// A zero-length or non-finite normal yields an invalid plane.
    pub fn new(normal: Vec3, point: Point3) -> Self {
        let len = normal.norm();
        if !(len.is_finite() && len > 0.0) || !point.coords.iter().all(|c| c.is_finite()) {
            return Self::invalid();
        }
        let n = normal / len;
        Self {
            normal: n,
            d: -n.dot(&point.coords),
            valid: true,
        }
    }

    /// Plane through three points, oriented by the right-hand rule `a -> b -> c`.
    ///
    /// Collinear points yield an invalid plane.
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Self {
        let normal = (b - a).cross(&(c - a));
        Self::new(normal, a)
    }

    /// Plane from the coefficients of `ax + by + cz + d = 0`.
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64) -> Self {
        let normal = Vec3::new(a, b, c);
        let len = normal.norm();
        if !(len.is_finite() && len > 0.0) || !d.is_finite() {
            return Self::invalid();
        }
        Self {
            normal: normal / len,
            d: d / len,
            valid: true,
        }
    }

    /// Horizontal plane at height `z`, normal pointing up.
    pub fn horizontal(z: f64) -> Self {
        Self::new(Vec3::z(), Point3::new(0.0, 0.0, z))
    }

    /// Parallel plane shifted by `distance` along the normal.
    pub fn offset(&self, distance: f64) -> Self {
        Self {
            normal: self.normal,
            d: self.d - distance,
            valid: self.valid && distance.is_finite(),
        }
    }

    /// Same plane with the normal reversed (swaps above and below).
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            d: -self.d,
            valid: self.valid,
        }
    }

    fn invalid() -> Self {
        Self {
            normal: Vec3::zeros(),
            d: 0.0,
            valid: false,
        }
    }
}

impl PlaneGeometry for Plane {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn normal(&self) -> Vec3 {
        self.normal
    }

    fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) + self.d
    }

    fn project_point(&self, p: &Point3) -> Point3 {
        p - self.normal * self.signed_distance(p)
    }

    fn intersect_segment(&self, a: &Point3, b: &Point3) -> Option<Point3> {
        let da = self.signed_distance(a);
        let db = self.signed_distance(b);
        let denom = da - db;
        if denom == 0.0 || !denom.is_finite() {
            return None;
        }
        let t = da / denom;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some(a + (b - a) * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_signed_distance() {
        let plane = Plane::horizontal(2.0);
        assert!(plane.is_valid());
        assert_relative_eq!(plane.signed_distance(&Point3::new(5.0, -3.0, 5.0)), 3.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 0.0, 0.0)), -2.0);
    }

    #[test]
    fn test_normal_is_unit() {
        let plane = Plane::new(Vec3::new(0.0, 3.0, 4.0), Point3::origin());
        assert_relative_eq!(plane.normal().norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(plane.normal().y, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_planes_invalid() {
        assert!(!Plane::new(Vec3::zeros(), Point3::origin()).is_valid());
        assert!(!Plane::new(Vec3::new(f64::NAN, 0.0, 1.0), Point3::origin()).is_valid());
        let collinear = Plane::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        assert!(!collinear.is_valid());
        assert!(!Plane::from_coefficients(0.0, 0.0, 0.0, 1.0).is_valid());
    }

    #[test]
    fn test_from_points_orientation() {
        let plane = Plane::from_points(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        );
        assert_relative_eq!(plane.normal(), Vec3::z());
        assert_relative_eq!(plane.signed_distance(&Point3::new(3.0, 3.0, 4.0)), 3.0);
    }

    #[test]
    fn test_from_coefficients_normalizes() {
        let plane = Plane::from_coefficients(0.0, 0.0, 2.0, -4.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 0.0, 2.0)), 0.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 0.0, 3.0)), 1.0);
    }

    #[test]
    fn test_project_point() {
        let plane = Plane::new(Vec3::new(1.0, 1.0, 0.0), Point3::origin());
        let p = plane.project_point(&Point3::new(2.0, 0.0, 7.0));
        assert_relative_eq!(plane.signed_distance(&p), 0.0, epsilon = 1e-12);
        assert_relative_eq!(p, Point3::new(1.0, -1.0, 7.0), epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_segment() {
        let plane = Plane::horizontal(0.0);
        let hit = plane
            .intersect_segment(&Point3::new(0.0, 0.0, -1.0), &Point3::new(2.0, 4.0, 3.0))
            .unwrap();
        assert_relative_eq!(hit, Point3::new(0.5, 1.0, 0.0), epsilon = 1e-12);

        // Both endpoints above
        assert!(plane
            .intersect_segment(&Point3::new(0.0, 0.0, 1.0), &Point3::new(0.0, 0.0, 2.0))
            .is_none());
        // Parallel to the plane
        assert!(plane
            .intersect_segment(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 0.0, 0.0))
            .is_none());
    }

    #[test]
    fn test_offset_and_flip() {
        let plane = Plane::horizontal(1.0);
        let raised = plane.offset(0.5);
        assert_relative_eq!(raised.signed_distance(&Point3::new(0.0, 0.0, 1.5)), 0.0);
        assert_relative_eq!(
            raised.project_point(&Point3::new(2.0, -1.0, 7.0)),
            Point3::new(2.0, -1.0, 1.5)
        );

        let flipped = plane.flipped();
        assert_relative_eq!(flipped.signed_distance(&Point3::new(0.0, 0.0, 3.0)), -2.0);
        assert_relative_eq!(flipped.normal(), Vec3::new(0.0, 0.0, -1.0));
    }
}

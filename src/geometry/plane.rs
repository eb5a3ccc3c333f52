use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An oriented plane in 3D space, stored as a unit normal and a signed
/// offset along it.
///
/// The plane divides space into two half-spaces; points satisfying
/// `dot(normal, p) <= offset` are *inside* (behind the plane), points with
/// `dot(normal, p) > offset` are *outside* (in front). A brush is the
/// intersection of the inside half-spaces of its planes, so every plane
/// normal points out of the brush.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit-length outward normal.
    pub normal: Vector3,
    /// Signed distance of the plane from the origin along `normal`.
    pub offset: f64,
}

impl Plane {
    /// Creates a plane from a normal and an offset, normalizing both.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn new(normal: Vector3, offset: f64) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            normal: normal / len,
            offset: offset / len,
        })
    }

    /// Creates a plane passing through `point` with the given outward normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn from_point_normal(point: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        Ok(Self {
            normal,
            offset: normal.dot(&point.coords),
        })
    }

    /// Signed distance of a point from the plane.
    ///
    /// Negative inside the half-space, positive outside.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Returns `true` if the point lies in the plane's half-space,
    /// inclusive of the boundary within tolerance.
    #[must_use]
    pub fn contains(&self, point: &Point3, tolerance: f64) -> bool {
        self.signed_distance(point) <= tolerance
    }

    /// Returns the plane with its orientation reversed.
    ///
    /// The flipped plane's inside half-space is this plane's outside.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// The point on the plane closest to the origin.
    #[must_use]
    pub fn origin_point(&self) -> Point3 {
        Point3::from(self.normal * self.offset)
    }

    /// Returns an orthonormal tangent frame `(u, v)` with `u × v = normal`.
    #[must_use]
    pub fn basis(&self) -> (Vector3, Vector3) {
        // Choose a reference vector not parallel to the normal
        let reference = if self.normal.x.abs() < 0.9 {
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };
        let u = self.normal.cross(&reference).normalize();
        let v = self.normal.cross(&u);
        (u, v)
    }

    /// Builds a large quad lying on the plane, wound counter-clockwise
    /// when viewed from the normal side.
    ///
    /// This is the seed polygon that half-space clipping whittles down
    /// to a brush face.
    #[must_use]
    pub fn seed_polygon(&self, half_extent: f64) -> Vec<Point3> {
        let o = self.origin_point();
        let (u, v) = self.basis();
        vec![
            o + (-u - v) * half_extent,
            o + (u - v) * half_extent,
            o + (u + v) * half_extent,
            o + (-u + v) * half_extent,
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn new_normalizes() {
        let plane = Plane::new(v(0.0, 0.0, 2.0), 4.0).unwrap();
        assert_relative_eq!(plane.normal.z, 1.0);
        assert_relative_eq!(plane.offset, 2.0);
    }

    #[test]
    fn zero_normal_is_error() {
        assert!(Plane::new(v(0.0, 0.0, 0.0), 1.0).is_err());
    }

    #[test]
    fn signed_distance_sides() {
        let plane = Plane::new(v(1.0, 0.0, 0.0), 1.0).unwrap();
        assert!(plane.signed_distance(&Point3::new(0.0, 5.0, 5.0)) < 0.0);
        assert!(plane.signed_distance(&Point3::new(2.0, 0.0, 0.0)) > 0.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(1.0, 3.0, -2.0)), 0.0);
    }

    #[test]
    fn basis_is_orthonormal_and_right_handed() {
        let plane = Plane::new(v(0.3, -0.7, 0.2), 0.5).unwrap();
        let (u, w) = plane.basis();
        assert_relative_eq!(u.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(w.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(u.dot(&w), 0.0, epsilon = 1e-12);
        assert_relative_eq!(u.cross(&w).dot(&plane.normal), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn seed_polygon_lies_on_plane() {
        let plane = Plane::new(v(0.0, 1.0, 0.0), 3.0).unwrap();
        for p in plane.seed_polygon(100.0) {
            assert_relative_eq!(plane.signed_distance(&p), 0.0, epsilon = 1e-9);
        }
    }
}

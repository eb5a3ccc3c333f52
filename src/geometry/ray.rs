use crate::math::{Point3, Vector3, TOLERANCE};

use super::Plane;

/// A ray with an origin and a (not necessarily unit) direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin.
    pub origin: Point3,
    /// Ray direction; hit parameters are expressed in multiples of it.
    pub direction: Vector3,
}

impl Ray {
    /// Creates a new ray.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// The point at parameter `t`: `origin + t * direction`.
    #[must_use]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Intersects the ray with a plane.
    ///
    /// Returns the parameter `t >= 0` of the hit, or `None` if the ray is
    /// parallel to the plane or the hit lies behind the origin.
    #[must_use]
    pub fn intersect_plane(&self, plane: &Plane) -> Option<f64> {
        let denom = plane.normal.dot(&self.direction);
        if denom.abs() < TOLERANCE {
            return None;
        }
        let t = -plane.signed_distance(&self.origin) / denom;
        (t >= -TOLERANCE).then_some(t.max(0.0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hits_plane_ahead() {
        let plane = Plane::new(Vector3::new(1.0, 0.0, 0.0), 2.0).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let t = ray.intersect_plane(&plane).unwrap();
        assert_relative_eq!(t, 2.0);
        assert_relative_eq!(ray.at(t).x, 2.0);
    }

    #[test]
    fn misses_plane_behind() {
        let plane = Plane::new(Vector3::new(1.0, 0.0, 0.0), -2.0).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(ray.intersect_plane(&plane).is_none());
    }

    #[test]
    fn parallel_ray_misses() {
        let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), 1.0).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(ray.intersect_plane(&plane).is_none());
    }
}

use crate::math::Point3;

/// An axis-aligned bounding box.
///
/// A freshly created box is *empty* (`min > max` on every axis); expanding
/// it with points grows it into a valid box. Brushes whose plane
/// intersection is empty or unbounded keep an empty box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3 {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Default for Box3 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Box3 {
    /// Creates an empty box that contains no points.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Creates a box from explicit corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Returns `true` if the box contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grows the box to contain `point`.
    pub fn expand(&mut self, point: &Point3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Box-box overlap test, inclusive of touching boundaries.
    ///
    /// Empty boxes overlap nothing.
    #[must_use]
    pub fn overlaps(&self, other: &Self, tolerance: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.x <= other.max.x + tolerance
            && self.max.x >= other.min.x - tolerance
            && self.min.y <= other.max.y + tolerance
            && self.max.y >= other.min.y - tolerance
            && self.min.z <= other.max.z + tolerance
            && self.max.z >= other.min.z - tolerance
    }

    /// Returns `true` if the point lies inside the box, inclusive.
    #[must_use]
    pub fn contains_point(&self, point: &Point3, tolerance: f64) -> bool {
        !self.is_empty()
            && point.x >= self.min.x - tolerance
            && point.x <= self.max.x + tolerance
            && point.y >= self.min.y - tolerance
            && point.y <= self.max.y + tolerance
            && point.z >= self.min.z - tolerance
            && point.z <= self.max.z + tolerance
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_overlaps_nothing() {
        let empty = Box3::empty();
        let unit = Box3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert!(empty.is_empty());
        assert!(!empty.overlaps(&unit, 0.0));
        assert!(!unit.overlaps(&empty, 0.0));
    }

    #[test]
    fn expand_grows_box() {
        let mut b = Box3::empty();
        b.expand(&Point3::new(1.0, -2.0, 3.0));
        b.expand(&Point3::new(-1.0, 2.0, 0.0));
        assert!(!b.is_empty());
        assert_eq!(b.min, Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(b.max, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = Box3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let b = Box3::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
        let c = Box3::new(Point3::new(3.0, 0.0, 0.0), Point3::new(4.0, 1.0, 1.0));
        assert!(a.overlaps(&b, 1e-9));
        assert!(!a.overlaps(&c, 1e-9));
    }

    #[test]
    fn contains_point_inclusive() {
        let b = Box3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert!(b.contains_point(&Point3::new(0.5, 0.5, 0.5), 1e-9));
        assert!(b.contains_point(&Point3::new(1.0, 1.0, 1.0), 1e-9));
        assert!(!b.contains_point(&Point3::new(1.1, 0.5, 0.5), 1e-9));
    }
}

use crate::geometry::Plane;

use super::{Point3, Vector3, TOLERANCE};

/// Outcome of splitting a convex polygon by a plane.
#[derive(Debug)]
pub struct SplitPolygon {
    /// The part inside the plane's half-space (possibly empty).
    pub inside: Vec<Point3>,
    /// The part outside (possibly empty).
    pub outside: Vec<Point3>,
}

/// Clips a convex polygon against a plane, keeping the inside part.
///
/// Sutherland-Hodgman against a single half-space. Returns an empty
/// vector if the polygon degenerates to fewer than 3 vertices.
#[must_use]
pub fn clip_polygon(polygon: &[Point3], plane: &Plane) -> Vec<Point3> {
    split_polygon(polygon, plane).inside
}

/// Splits a convex polygon into the parts inside and outside a plane.
///
/// A polygon entirely on one side (boundary vertices included) is passed
/// through whole; a polygon lying on the plane itself counts as inside,
/// matching the closed half-space convention. When a real split happens
/// the two outputs share the cut edge and tile the input exactly.
#[must_use]
pub fn split_polygon(polygon: &[Point3], plane: &Plane) -> SplitPolygon {
    let n = polygon.len();
    if n < 3 {
        return SplitPolygon {
            inside: Vec::new(),
            outside: Vec::new(),
        };
    }

    let distances: Vec<f64> = polygon.iter().map(|p| plane.signed_distance(p)).collect();
    if distances.iter().all(|&d| d <= TOLERANCE) {
        return SplitPolygon {
            inside: polygon.to_vec(),
            outside: Vec::new(),
        };
    }
    if distances.iter().all(|&d| d >= -TOLERANCE) {
        return SplitPolygon {
            inside: Vec::new(),
            outside: polygon.to_vec(),
        };
    }

    let mut inside = Vec::with_capacity(n + 1);
    let mut outside = Vec::with_capacity(n + 1);

    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        let da = distances[i];
        let db = distances[(i + 1) % n];

        if da < -TOLERANCE {
            inside.push(a);
        } else if da > TOLERANCE {
            outside.push(a);
        } else {
            inside.push(a);
            outside.push(a);
        }

        // Edge crosses the plane strictly: emit the crossing to both sides
        if (da < -TOLERANCE && db > TOLERANCE) || (da > TOLERANCE && db < -TOLERANCE) {
            let t = da / (da - db);
            let x = a + (b - a) * t;
            inside.push(x);
            outside.push(x);
        }
    }

    SplitPolygon {
        inside: sanitize(inside),
        outside: sanitize(outside),
    }
}

/// Drops near-duplicate consecutive vertices and rejects slivers.
fn sanitize(mut polygon: Vec<Point3>) -> Vec<Point3> {
    polygon.dedup_by(|a, b| (*a - *b).norm() < TOLERANCE);
    if polygon.len() > 1 {
        let first = polygon[0];
        if let Some(last) = polygon.last() {
            if (*last - first).norm() < TOLERANCE {
                polygon.pop();
            }
        }
    }
    if polygon.len() < 3 {
        polygon.clear();
    }
    polygon
}

/// Area of a planar convex polygon with the given unit normal.
#[must_use]
pub fn polygon_area(polygon: &[Point3], normal: &Vector3) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let n = polygon.len();
    let o = &polygon[0];
    let mut cross_sum = Vector3::new(0.0, 0.0, 0.0);
    for i in 1..n {
        let a = polygon[i] - o;
        let b = polygon[(i + 1) % n] - o;
        cross_sum += a.cross(&b);
    }
    0.5 * cross_sum.dot(normal).abs()
}

/// Arithmetic centroid of a polygon's vertices.
#[must_use]
pub fn polygon_centroid(polygon: &[Point3]) -> Point3 {
    let n = polygon.len();
    if n == 0 {
        return Point3::new(0.0, 0.0, 0.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / n as f64;
    Point3::new(
        polygon.iter().map(|p| p.x).sum::<f64>() * inv_n,
        polygon.iter().map(|p| p.y).sum::<f64>() * inv_n,
        polygon.iter().map(|p| p.z).sum::<f64>() * inv_n,
    )
}

/// Point-in-convex-polygon test for a point coplanar with the polygon.
///
/// The polygon must be wound counter-clockwise around `normal`. Inclusive
/// of the boundary within tolerance.
#[must_use]
pub fn point_in_convex_polygon(point: &Point3, polygon: &[Point3], normal: &Vector3) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        let edge = b - a;
        let eps = TOLERANCE * edge.norm().max(1.0);
        if edge.cross(&(point - a)).dot(normal) < -eps {
            return false;
        }
    }
    true
}

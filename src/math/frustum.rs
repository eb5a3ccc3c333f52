use crate::geometry::{Box3, Plane};

use super::{Matrix4, Vector3, TOLERANCE};

/// Extracts the six frustum planes from a view-projection matrix.
///
/// Uses the Gribb-Hartmann row combinations (left, right, bottom, top,
/// near, far). Planes are returned in the crate's half-space convention:
/// points inside the frustum satisfy `dot(normal, p) <= offset` for every
/// plane. Degenerate rows (e.g. an infinite far plane) are skipped.
#[must_use]
pub fn frustum_planes(view_projection: &Matrix4) -> Vec<Plane> {
    let m = view_projection;
    let row =
        |i: usize| nalgebra::Vector4::new(m[(i, 0)], m[(i, 1)], m[(i, 2)], m[(i, 3)]);

    let r0 = row(0);
    let r1 = row(1);
    let r2 = row(2);
    let r3 = row(3);

    let combos = [
        r3 + r0, // left
        r3 - r0, // right
        r3 + r1, // bottom
        r3 - r1, // top
        r3 + r2, // near
        r3 - r2, // far
    ];

    let mut planes = Vec::with_capacity(6);
    for c in &combos {
        let normal = Vector3::new(c.x, c.y, c.z);
        let len = normal.norm();
        if len < TOLERANCE {
            continue;
        }
        // ax + by + cz + d >= 0 inside  <=>  dot(-n, p) <= d
        planes.push(Plane {
            normal: -normal / len,
            offset: c.w / len,
        });
    }
    planes
}

/// Returns `true` if the box lies entirely outside the plane's half-space.
///
/// Standard box-plane separating-axis test: picks the box corner nearest
/// the half-space per axis. Empty boxes count as outside.
#[must_use]
pub fn box_fully_outside(bounds: &Box3, plane: &Plane) -> bool {
    if bounds.is_empty() {
        return true;
    }
    let n = &plane.normal;
    let nearest = Vector3::new(
        if n.x > 0.0 { bounds.min.x } else { bounds.max.x },
        if n.y > 0.0 { bounds.min.y } else { bounds.max.y },
        if n.z > 0.0 { bounds.min.z } else { bounds.max.z },
    );
    n.dot(&nearest) > plane.offset + TOLERANCE
}

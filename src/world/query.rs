use crate::brush::BrushId;
use crate::geometry::{Box3, Ray};
use crate::math::frustum::{box_fully_outside, frustum_planes};
use crate::math::polygon::point_in_convex_polygon;
use crate::math::{Matrix4, Point3, TOLERANCE};

use super::World;

/// One fragment-level intersection reported by [`World::query_ray`].
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// The brush that was hit.
    pub brush: BrushId,
    /// Index of the hit face in the brush's face list.
    pub face: usize,
    /// Index of the hit fragment in the face's fragment list.
    pub fragment: usize,
    /// Ray parameter of the hit: `position = origin + t * direction`.
    pub t: f64,
    /// World-space hit position.
    pub position: Point3,
}

/// Spatial queries over the current (already rebuilt) geometry.
///
/// Queries never trigger a rebuild; with non-empty dirty sets they answer
/// against stale geometry. All scans are linear over the brush list.
impl World {
    /// Returns every brush containing the point, inclusive of boundaries,
    /// in traversal order.
    ///
    /// Brushes with no planes contain nothing.
    #[must_use]
    pub fn query_point(&self, point: &Point3) -> Vec<BrushId> {
        self.iter()
            .filter(|&id| self.brushes[id].contains_point(point, TOLERANCE))
            .collect()
    }

    /// Returns every brush whose AABB overlaps the box, inclusive.
    ///
    /// Broad-phase only; exact polygon overlap is not tested.
    #[must_use]
    pub fn query_box(&self, bounds: &Box3) -> Vec<BrushId> {
        self.iter()
            .filter(|&id| self.brushes[id].bounds.overlaps(bounds, TOLERANCE))
            .collect()
    }

    /// Returns every fragment the ray passes through, sorted by ascending
    /// ray parameter.
    ///
    /// No near/far filtering is applied; callers clip the list themselves.
    #[must_use]
    pub fn query_ray(&self, ray: &Ray) -> Vec<RayHit> {
        let mut hits = Vec::new();
        for id in self.iter() {
            let brush = &self.brushes[id];
            for (face_index, face) in brush.faces.iter().enumerate() {
                if face.is_empty() {
                    continue;
                }
                let plane = brush.planes[face.plane_index];
                let Some(t) = ray.intersect_plane(&plane) else {
                    continue;
                };
                let position = ray.at(t);
                for (fragment_index, fragment) in face.fragments.iter().enumerate() {
                    if point_in_convex_polygon(&position, &fragment.vertices, &plane.normal) {
                        hits.push(RayHit {
                            brush: id,
                            face: face_index,
                            fragment: fragment_index,
                            t,
                            position,
                        });
                    }
                }
            }
        }
        hits.sort_by(|a, b| a.t.total_cmp(&b.t));
        hits
    }

    /// Returns every brush whose AABB is not fully outside the frustum of
    /// the given view-projection matrix.
    ///
    /// Standard box-plane separating-axis rejection; partial overlap is
    /// included.
    #[must_use]
    pub fn query_frustum(&self, view_projection: &Matrix4) -> Vec<BrushId> {
        let planes = frustum_planes(view_projection);
        self.iter()
            .filter(|&id| {
                let bounds = &self.brushes[id].bounds;
                !planes.iter().any(|plane| box_fully_outside(bounds, plane))
            })
            .collect()
    }
}

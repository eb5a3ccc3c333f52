use std::collections::{HashSet, VecDeque};

use crate::brush::{Brush, BrushId, Face, Fragment, Volume, VolumeOperation};
use crate::geometry::{Box3, Plane};
use crate::math::polygon::{clip_polygon, polygon_centroid, split_polygon};
use crate::math::{Point3, SIDE_SAMPLE_OFFSET, TOLERANCE, WORLD_EXTENT};

use super::World;

/// Split-loop bookkeeping: whether a face piece was touched by any
/// intersecting brush. Exterior pieces classify against the owner alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FragmentRelation {
    /// The whole face polygon, untouched by any intersecting brush.
    Exterior,
    /// Produced by splitting against intersecting brushes.
    Overlapped,
}

impl World {
    /// Recomputes all dirty geometry in two phases.
    ///
    /// Phase A rebuilds faces and bounding boxes for every brush in the
    /// face dirty set; each of those then also needs its fragments redone.
    /// Phase B recomputes intersecting-brush relations and re-splits the
    /// faces of every brush in the fragment dirty set. A brush whose
    /// overlap relation to a rebuilt brush changed is pulled into Phase B
    /// on the fly, so neighbor bookkeeping stays symmetric.
    ///
    /// Returns the brushes whose faces or box were recomputed (the Phase A
    /// set as it stood at call start), in traversal order, and clears both
    /// dirty sets. Brushes that only had fragments recomputed are not
    /// reported.
    pub fn rebuild(&mut self) -> Vec<BrushId> {
        let shape_set: Vec<BrushId> = self
            .iter()
            .filter(|id| self.need_face_rebuild.contains(id))
            .collect();

        for &id in &shape_set {
            self.rebuild_shape(id);
            self.need_fragment_rebuild.insert(id);
        }

        let mut worklist: VecDeque<BrushId> = self
            .iter()
            .filter(|id| self.need_fragment_rebuild.contains(id))
            .collect();
        let mut completed: HashSet<BrushId> = HashSet::new();

        while let Some(id) = worklist.pop_front() {
            if !completed.insert(id) {
                continue;
            }
            let changed_neighbors = self.rebuild_fragments(id);
            for neighbor in changed_neighbors {
                if !completed.contains(&neighbor) {
                    worklist.push_back(neighbor);
                }
            }
        }

        self.need_face_rebuild.clear();
        self.need_fragment_rebuild.clear();
        shape_set
    }

    /// Phase A for one brush: face polygons and bounding box.
    fn rebuild_shape(&mut self, id: BrushId) {
        let Some(brush) = self.brushes.get_mut(id) else {
            return;
        };

        let planes = std::mem::take(&mut brush.planes);
        let mut faces = Vec::with_capacity(planes.len());
        let mut unbounded = false;

        for (index, plane) in planes.iter().enumerate() {
            let mut polygon = plane.seed_polygon(4.0 * WORLD_EXTENT);
            for (other_index, other) in planes.iter().enumerate() {
                if other_index == index {
                    continue;
                }
                polygon = clip_polygon(&polygon, other);
                if polygon.is_empty() {
                    break;
                }
            }
            if polygon.iter().any(|p| p.coords.amax() > WORLD_EXTENT) {
                unbounded = true;
            }
            faces.push(Face {
                plane_index: index,
                vertices: polygon,
                fragments: Vec::new(),
            });
        }

        // An unbounded intersection has no boundary representation
        if unbounded {
            for face in &mut faces {
                face.vertices.clear();
            }
        }

        let mut bounds = Box3::empty();
        for face in &faces {
            for vertex in &face.vertices {
                bounds.expand(vertex);
            }
        }

        brush.planes = planes;
        brush.faces = faces;
        brush.bounds = bounds;
    }

    /// Phase B for one brush: overlap relations and face fragments.
    ///
    /// Returns the ids of brushes whose `intersecting_brushes` list was
    /// changed by this recompute; the caller schedules them for Phase B.
    fn rebuild_fragments(&mut self, id: BrushId) -> Vec<BrushId> {
        let Some(brush) = self.brushes.get(id) else {
            return Vec::new();
        };

        // Pairwise overlap scan: box reject, then exact plane separation.
        // Linear over the world per brush; acceleration is future work.
        let mut intersecting: Vec<BrushId> = Vec::new();
        for other_id in self.iter() {
            if other_id == id {
                continue;
            }
            let other = &self.brushes[other_id];
            if !brush.bounds.overlaps(&other.bounds, TOLERANCE) {
                continue;
            }
            if hulls_intersect(brush, other) {
                intersecting.push(other_id);
            }
        }

        let neighbors: Vec<(BrushId, &Brush)> = intersecting
            .iter()
            .map(|&nid| (nid, &self.brushes[nid]))
            .collect();

        let mut rebuilt: Vec<Vec<Fragment>> = Vec::with_capacity(brush.faces.len());
        for face in &brush.faces {
            rebuilt.push(self.split_face(id, brush, face, &neighbors));
        }

        // Write-back: owner first, then symmetric neighbor lists
        let old_intersecting = {
            let brush = &mut self.brushes[id];
            let old = std::mem::replace(&mut brush.intersecting_brushes, intersecting.clone());
            for (face, fragments) in brush.faces.iter_mut().zip(rebuilt) {
                face.fragments = fragments;
            }
            old
        };

        let mut changed = Vec::new();
        for &added in &intersecting {
            if old_intersecting.contains(&added) {
                continue;
            }
            let neighbor = &mut self.brushes[added];
            if !neighbor.intersecting_brushes.contains(&id) {
                neighbor.intersecting_brushes.push(id);
            }
            changed.push(added);
        }
        for &removed in &old_intersecting {
            if intersecting.contains(&removed) {
                continue;
            }
            if let Some(neighbor) = self.brushes.get_mut(removed) {
                if let Some(pos) = neighbor.intersecting_brushes.iter().position(|&n| n == id) {
                    neighbor.intersecting_brushes.swap_remove(pos);
                }
                changed.push(removed);
            }
        }
        changed
    }

    /// Partitions one face polygon against every intersecting brush and
    /// classifies the resulting fragments.
    fn split_face(
        &self,
        id: BrushId,
        brush: &Brush,
        face: &Face,
        neighbors: &[(BrushId, &Brush)],
    ) -> Vec<Fragment> {
        if face.is_empty() {
            return Vec::new();
        }
        let plane = brush.planes[face.plane_index];

        let mut pieces: Vec<(Vec<Point3>, FragmentRelation)> =
            vec![(face.vertices.clone(), FragmentRelation::Exterior)];

        for &(_, neighbor) in neighbors {
            let mut next_pieces = Vec::with_capacity(pieces.len());
            for (piece, relation) in pieces {
                // A piece clear of the neighbor's box cannot be affected;
                // skipping avoids splitting along unrelated plane extensions
                if !piece_bounds(&piece).overlaps(&neighbor.bounds, TOLERANCE) {
                    next_pieces.push((piece, relation));
                    continue;
                }
                let (outside_parts, inside_part) = carve(&piece, &neighbor.planes);
                let untouched = inside_part.is_none() && outside_parts.len() == 1;
                let relation = if untouched {
                    relation
                } else {
                    FragmentRelation::Overlapped
                };
                for part in outside_parts {
                    next_pieces.push((part, relation));
                }
                if let Some(part) = inside_part {
                    next_pieces.push((part, FragmentRelation::Overlapped));
                }
            }
            pieces = next_pieces;
        }

        pieces
            .into_iter()
            .map(|(vertices, relation)| {
                let centroid = polygon_centroid(&vertices);
                let front_point = centroid + plane.normal * SIDE_SAMPLE_OFFSET;
                let back_point = centroid - plane.normal * SIDE_SAMPLE_OFFSET;
                // An exterior fragment borders no neighbor; only the owner
                // participates in its classification
                let active: &[(BrushId, &Brush)] = match relation {
                    FragmentRelation::Exterior => &[],
                    FragmentRelation::Overlapped => neighbors,
                };
                let (front_volume, front_brush) =
                    self.classify_side(&front_point, id, brush, active);
                let (back_volume, back_brush) =
                    self.classify_side(&back_point, id, brush, active);
                Fragment {
                    vertices,
                    front_volume,
                    back_volume,
                    front_brush,
                    back_brush,
                }
            })
            .collect()
    }

    /// Composes volume operations for one side of a fragment.
    ///
    /// All brushes containing the sample point (the owner included) apply
    /// their operation to the void volume in ascending time order. The
    /// side is bounded by the last brush whose operation determined the
    /// composed volume: a Fill always does, a Convert only when it changed
    /// the volume. A side left at the void volume has no bounding brush.
    fn classify_side(
        &self,
        point: &Point3,
        owner_id: BrushId,
        owner: &Brush,
        neighbors: &[(BrushId, &Brush)],
    ) -> (Volume, Option<BrushId>) {
        let mut containing: Vec<(BrushId, &Brush)> = Vec::with_capacity(neighbors.len() + 1);
        if owner.contains_point(point, TOLERANCE) {
            containing.push((owner_id, owner));
        }
        for &(nid, neighbor) in neighbors {
            if neighbor.contains_point(point, TOLERANCE) {
                containing.push((nid, neighbor));
            }
        }
        containing.sort_by_key(|(_, b)| (b.time, b.uid));

        let mut volume = self.void_volume();
        let mut bounding = None;
        for &(nid, b) in &containing {
            let next = b.volume_operation.apply(volume);
            // A Convert that passes the volume through contributes nothing
            // and must not claim the side
            if next != volume || matches!(b.volume_operation, VolumeOperation::Fill(_)) {
                bounding = Some(nid);
            }
            volume = next;
        }
        if volume == self.void_volume() {
            bounding = None;
        }
        (volume, bounding)
    }
}

/// AABB of a polygon piece.
fn piece_bounds(piece: &[Point3]) -> Box3 {
    let mut bounds = Box3::empty();
    for vertex in piece {
        bounds.expand(vertex);
    }
    bounds
}

/// Splits a convex piece by a brush's planes.
///
/// Returns the convex parts outside the brush and the single part inside
/// it (if any); together they tile the input exactly.
fn carve(piece: &[Point3], planes: &[Plane]) -> (Vec<Vec<Point3>>, Option<Vec<Point3>>) {
    let mut remaining = piece.to_vec();
    let mut outside_parts = Vec::new();
    for plane in planes {
        let split = split_polygon(&remaining, plane);
        if !split.outside.is_empty() {
            outside_parts.push(split.outside);
        }
        remaining = split.inside;
        if remaining.is_empty() {
            break;
        }
    }
    (outside_parts, (!remaining.is_empty()).then_some(remaining))
}

/// Exact convex-hull intersection test via plane separation.
///
/// Hulls are disjoint iff some plane of either brush has the whole other
/// hull strictly outside. Touching hulls count as intersecting.
fn hulls_intersect(a: &Brush, b: &Brush) -> bool {
    !separates(&a.planes, b) && !separates(&b.planes, a)
}

fn separates(planes: &[Plane], other: &Brush) -> bool {
    if planes.is_empty() || other.hull_vertices().next().is_none() {
        return true;
    }
    planes.iter().any(|plane| {
        other
            .hull_vertices()
            .all(|vertex| plane.signed_distance(vertex) > TOLERANCE)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::brush::VolumeOperation;
    use crate::math::polygon::polygon_area;
    use crate::math::Vector3;
    use approx::assert_relative_eq;

    fn cube_planes(min: Point3, max: Point3) -> Vec<Plane> {
        vec![
            Plane::new(Vector3::new(1.0, 0.0, 0.0), max.x).unwrap(),
            Plane::new(Vector3::new(-1.0, 0.0, 0.0), -min.x).unwrap(),
            Plane::new(Vector3::new(0.0, 1.0, 0.0), max.y).unwrap(),
            Plane::new(Vector3::new(0.0, -1.0, 0.0), -min.y).unwrap(),
            Plane::new(Vector3::new(0.0, 0.0, 1.0), max.z).unwrap(),
            Plane::new(Vector3::new(0.0, 0.0, -1.0), -min.z).unwrap(),
        ]
    }

    fn unit_cube() -> Vec<Plane> {
        cube_planes(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
    }

    fn add_cube(world: &mut World, min: Point3, max: Point3) -> BrushId {
        let id = world.add();
        world.set_brush_planes(id, cube_planes(min, max)).unwrap();
        world
            .set_brush_volume_operation(id, VolumeOperation::Fill(1))
            .unwrap();
        id
    }

    #[test]
    fn unit_cube_shape() {
        let mut world = World::new();
        let id = world.add();
        world.set_brush_planes(id, unit_cube()).unwrap();
        world
            .set_brush_volume_operation(id, VolumeOperation::Fill(1))
            .unwrap();

        let changed = world.rebuild();
        assert_eq!(changed, vec![id]);

        let brush = world.brush(id).unwrap();
        assert_eq!(brush.faces().len(), 6);
        for face in brush.faces() {
            assert_eq!(face.vertices().len(), 4);
            assert_eq!(face.fragments().len(), 1);
            let plane = brush.planes()[face.plane_index()];
            assert_relative_eq!(
                polygon_area(face.vertices(), &plane.normal),
                1.0,
                epsilon = 1e-9
            );
        }

        let bounds = brush.bounding_box();
        assert_relative_eq!(bounds.min.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.max.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.max.z, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn unit_cube_fragment_volumes() {
        let mut world = World::new();
        let id = add_cube(
            &mut world,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        world.rebuild();

        let brush = world.brush(id).unwrap();
        for face in brush.faces() {
            let fragment = &face.fragments()[0];
            // Outward side is void, inward side is the brush's fill
            assert_eq!(fragment.front_volume(), 0);
            assert_eq!(fragment.back_volume(), 1);
            assert_eq!(fragment.front_brush(), None);
            assert_eq!(fragment.back_brush(), Some(id));
        }
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut world = World::new();
        let id = add_cube(
            &mut world,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        world.rebuild();

        let faces_before: Vec<usize> = world
            .brush(id)
            .unwrap()
            .faces()
            .iter()
            .map(|f| f.fragments().len())
            .collect();

        let changed = world.rebuild();
        assert!(changed.is_empty());

        let faces_after: Vec<usize> = world
            .brush(id)
            .unwrap()
            .faces()
            .iter()
            .map(|f| f.fragments().len())
            .collect();
        assert_eq!(faces_before, faces_after);
    }

    #[test]
    fn empty_plane_intersection_yields_no_faces() {
        let mut world = World::new();
        let id = world.add();
        // Contradictory half-spaces: x <= -1 and x >= 2
        let mut planes = unit_cube();
        planes[0] = Plane::new(Vector3::new(1.0, 0.0, 0.0), -1.0).unwrap();
        planes[1] = Plane::new(Vector3::new(-1.0, 0.0, 0.0), -2.0).unwrap();
        world.set_brush_planes(id, planes).unwrap();
        world.rebuild();

        let brush = world.brush(id).unwrap();
        assert!(brush.faces().iter().all(Face::is_empty));
        assert!(brush.bounding_box().is_empty());
    }

    #[test]
    fn unbounded_intersection_yields_no_faces() {
        let mut world = World::new();
        let id = world.add();
        // Only three half-spaces: an open corner, unbounded
        world
            .set_brush_planes(id, unit_cube().into_iter().take(3).collect())
            .unwrap();
        world.rebuild();

        let brush = world.brush(id).unwrap();
        assert!(brush.faces().iter().all(Face::is_empty));
        assert!(brush.bounding_box().is_empty());
    }

    #[test]
    fn overlapping_cubes_share_internal_boundary() {
        let mut world = World::new();
        let a = add_cube(
            &mut world,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        let b = add_cube(
            &mut world,
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(1.5, 1.0, 1.0),
        );
        world.rebuild();

        assert_eq!(world.brush(a).unwrap().intersecting_brushes(), &[b]);
        assert_eq!(world.brush(b).unwrap().intersecting_brushes(), &[a]);

        // A's +x face (x = 1) lies inside B: both sides solid, invisible
        let brush_a = world.brush(a).unwrap();
        let plus_x = &brush_a.faces()[0];
        assert_eq!(plus_x.fragments().len(), 1);
        let fragment = &plus_x.fragments()[0];
        assert_eq!(fragment.front_volume(), 1);
        assert_eq!(fragment.back_volume(), 1);
        assert_eq!(fragment.front_brush(), Some(b));
        // Both fill the overlap with the same volume; the later fill owns it
        assert_eq!(fragment.back_brush(), Some(b));

        // A's -x face (x = 0) is outside B: an ordinary boundary
        let minus_x = &brush_a.faces()[1];
        assert_eq!(minus_x.fragments().len(), 1);
        assert_eq!(minus_x.fragments()[0].front_volume(), 0);
        assert_eq!(minus_x.fragments()[0].back_volume(), 1);
    }

    #[test]
    fn overlapping_cubes_split_lateral_faces() {
        let mut world = World::new();
        let a = add_cube(
            &mut world,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        add_cube(
            &mut world,
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(1.5, 1.0, 1.0),
        );
        world.rebuild();

        // A's +y face straddles B's x = 0.5 boundary: two fragments that
        // tile the face exactly
        let brush_a = world.brush(a).unwrap();
        let plus_y = &brush_a.faces()[2];
        assert_eq!(plus_y.fragments().len(), 2);

        let plane = brush_a.planes()[plus_y.plane_index()];
        let face_area = polygon_area(plus_y.vertices(), &plane.normal);
        let fragment_area: f64 = plus_y
            .fragments()
            .iter()
            .map(|f| polygon_area(f.vertices(), &plane.normal))
            .sum();
        assert_relative_eq!(face_area, fragment_area, epsilon = 1e-9);
        assert_relative_eq!(face_area, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn fragments_tile_every_face() {
        let mut world = World::new();
        let ids = [
            add_cube(
                &mut world,
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 1.0),
            ),
            add_cube(
                &mut world,
                Point3::new(0.5, 0.25, 0.0),
                Point3::new(1.5, 1.25, 1.0),
            ),
            add_cube(
                &mut world,
                Point3::new(0.25, 0.5, 0.5),
                Point3::new(0.75, 1.5, 1.5),
            ),
        ];
        world.rebuild();

        for id in ids {
            let brush = world.brush(id).unwrap();
            for face in brush.faces() {
                if face.is_empty() {
                    continue;
                }
                let plane = brush.planes()[face.plane_index()];
                let face_area = polygon_area(face.vertices(), &plane.normal);
                let fragment_area: f64 = face
                    .fragments()
                    .iter()
                    .map(|f| polygon_area(f.vertices(), &plane.normal))
                    .sum();
                assert_relative_eq!(face_area, fragment_area, epsilon = 1e-7);
            }
        }
    }

    #[test]
    fn volume_operation_change_skips_phase_a() {
        let mut world = World::new();
        let id = add_cube(
            &mut world,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        world.rebuild();

        world
            .set_brush_volume_operation(id, VolumeOperation::Fill(7))
            .unwrap();
        let changed = world.rebuild();
        assert!(changed.is_empty(), "shape unchanged, phase A must be empty");

        let brush = world.brush(id).unwrap();
        assert_eq!(brush.faces()[0].fragments()[0].back_volume(), 7);
    }

    #[test]
    fn void_volume_flows_through_composition() {
        let mut world = World::new();
        world.set_void_volume(5);
        let id = world.add();
        world.set_brush_planes(id, unit_cube()).unwrap();
        world
            .set_brush_volume_operation(id, VolumeOperation::Convert { from: 5, to: 9 })
            .unwrap();
        world.rebuild();

        let fragment = &world.brush(id).unwrap().faces()[0].fragments()[0];
        assert_eq!(fragment.front_volume(), 5);
        assert_eq!(fragment.front_brush(), None);
        assert_eq!(fragment.back_volume(), 9);
        assert_eq!(fragment.back_brush(), Some(id));
    }

    #[test]
    fn later_brush_wins_in_overlap() {
        let mut world = World::new();
        let a = add_cube(
            &mut world,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        let b = add_cube(
            &mut world,
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(1.5, 1.0, 1.0),
        );
        world
            .set_brush_volume_operation(a, VolumeOperation::Fill(1))
            .unwrap();
        world
            .set_brush_volume_operation(b, VolumeOperation::Fill(2))
            .unwrap();
        world.rebuild();

        // Inside the overlap, B's operation applies after A's
        let brush_a = world.brush(a).unwrap();
        let plus_x = &brush_a.faces()[0];
        assert_eq!(plus_x.fragments()[0].back_volume(), 2);
    }

    #[test]
    fn passthrough_neighbor_does_not_bound_the_side() {
        let mut world = World::new();
        let a = add_cube(
            &mut world,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        let b = world.add();
        world
            .set_brush_planes(
                b,
                cube_planes(Point3::new(0.5, 0.0, 0.0), Point3::new(1.5, 1.0, 1.0)),
            )
            .unwrap();
        world
            .set_brush_volume_operation(b, VolumeOperation::Convert { from: 5, to: 9 })
            .unwrap();
        world.rebuild();

        // A's +x face lies inside B, but B's Convert passes A's volume 1
        // through unchanged; A still bounds the solid behind the fragment
        let plus_x = &world.brush(a).unwrap().faces()[0];
        assert_eq!(plus_x.fragments().len(), 1);
        let fragment = &plus_x.fragments()[0];
        assert_eq!(fragment.back_volume(), 1);
        assert_eq!(fragment.back_brush(), Some(a));

        // The outward side sees only B, which leaves the void untouched
        assert_eq!(fragment.front_volume(), 0);
        assert_eq!(fragment.front_brush(), None);
    }

    #[test]
    fn removing_neighbor_restores_plain_boundary() {
        let mut world = World::new();
        let a = add_cube(
            &mut world,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        let b = add_cube(
            &mut world,
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(1.5, 1.0, 1.0),
        );
        world.rebuild();
        assert_eq!(world.brush(a).unwrap().intersecting_brushes(), &[b]);

        world.remove(b).unwrap();
        let changed = world.rebuild();
        // A is phase B only: its own boundary did not change
        assert!(!changed.contains(&a));

        let brush_a = world.brush(a).unwrap();
        assert!(brush_a.intersecting_brushes().is_empty());
        for face in brush_a.faces() {
            assert_eq!(face.fragments().len(), 1);
            let fragment = &face.fragments()[0];
            assert_eq!(fragment.front_brush(), None);
            assert_eq!(fragment.back_brush(), Some(a));
            assert_eq!(fragment.front_volume(), 0);
            assert_eq!(fragment.back_volume(), 1);
        }
    }

    #[test]
    fn moving_brush_updates_new_neighbor() {
        let mut world = World::new();
        let a = add_cube(
            &mut world,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        let b = add_cube(
            &mut world,
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(6.0, 1.0, 1.0),
        );
        world.rebuild();
        assert!(world.brush(a).unwrap().intersecting_brushes().is_empty());

        // Move B onto A; only B is marked, A must still be pulled in
        world
            .set_brush_planes(
                b,
                cube_planes(Point3::new(0.5, 0.0, 0.0), Point3::new(1.5, 1.0, 1.0)),
            )
            .unwrap();
        let changed = world.rebuild();
        assert_eq!(changed, vec![b]);

        assert_eq!(world.brush(a).unwrap().intersecting_brushes(), &[b]);
        // A's +x face now borders B on its outward side
        let plus_x = &world.brush(a).unwrap().faces()[0];
        assert_eq!(plus_x.fragments()[0].front_brush(), Some(b));
    }
}

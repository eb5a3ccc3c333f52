mod query;
mod rebuild;

pub use query::RayHit;

use std::any::Any;
use std::collections::HashSet;
use std::fmt;

use slotmap::SlotMap;

use crate::brush::{Brush, BrushId, Face, Volume, VolumeOperation};
use crate::error::{Result, WorldError};
use crate::geometry::{Box3, Plane};

/// Owner of all brushes and orchestrator of the incremental CSG rebuild.
///
/// Brushes live in a generation-checked arena and are threaded on a
/// doubly linked insertion-order list, so traversal order is stable
/// across rebuilds and removals. Mutations are O(1) dirty-set updates;
/// [`World::rebuild`] recomputes only the affected geometry.
pub struct World {
    pub(crate) brushes: SlotMap<BrushId, Brush>,
    head: Option<BrushId>,
    tail: Option<BrushId>,
    pub(crate) need_face_rebuild: HashSet<BrushId>,
    pub(crate) need_fragment_rebuild: HashSet<BrushId>,
    void_volume: Volume,
    next_uid: u64,
    next_time: u64,
    user_data: Option<Box<dyn Any>>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates an empty world with void volume `0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            brushes: SlotMap::with_key(),
            head: None,
            tail: None,
            need_face_rebuild: HashSet::new(),
            need_fragment_rebuild: HashSet::new(),
            void_volume: 0,
            next_uid: 0,
            next_time: 0,
            user_data: None,
        }
    }

    /// The ambient volume id where no brush is present.
    #[must_use]
    pub fn void_volume(&self) -> Volume {
        self.void_volume
    }

    /// Changes the void volume.
    ///
    /// Every brush's fragment classification starts from this id, so all
    /// brushes are marked for fragment rebuild.
    pub fn set_void_volume(&mut self, void_volume: Volume) {
        if self.void_volume == void_volume {
            return;
        }
        self.void_volume = void_volume;
        self.need_fragment_rebuild.extend(self.brushes.keys());
    }

    /// Number of brushes currently in the world.
    #[must_use]
    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    /// Returns `true` if the world holds no brushes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }

    // --- Brush lifecycle ---

    /// Adds a new brush with a fresh uid at the end of the traversal
    /// order.
    ///
    /// The brush has no planes and therefore no geometry until planes are
    /// set and a rebuild runs; it starts dirty in both rebuild sets.
    pub fn add(&mut self) -> BrushId {
        let uid = self.next_uid;
        self.next_uid += 1;
        let time = self.tick();

        let id = self.brushes.insert(Brush::new(uid, time));
        self.brushes[id].prev = self.tail;
        match self.tail {
            Some(tail) => self.brushes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);

        self.need_face_rebuild.insert(id);
        self.need_fragment_rebuild.insert(id);
        id
    }

    /// Removes a brush from the world, releasing its geometry.
    ///
    /// Every brush that listed the removed one as intersecting is
    /// scrubbed and marked for fragment rebuild; its fragments bordering
    /// the removed brush are stale until the next [`World::rebuild`].
    ///
    /// # Errors
    ///
    /// Returns an error if the brush was already removed.
    pub fn remove(&mut self, id: BrushId) -> Result<()> {
        let brush = self.brushes.remove(id).ok_or(WorldError::BrushNotFound)?;

        match brush.prev {
            Some(prev) => self.brushes[prev].next = brush.next,
            None => self.head = brush.next,
        }
        match brush.next {
            Some(next) => self.brushes[next].prev = brush.prev,
            None => self.tail = brush.prev,
        }

        self.need_face_rebuild.remove(&id);
        self.need_fragment_rebuild.remove(&id);

        let mut stale = Vec::new();
        for (other_id, other) in &mut self.brushes {
            if let Some(pos) = other.intersecting_brushes.iter().position(|&n| n == id) {
                other.intersecting_brushes.swap_remove(pos);
                stale.push(other_id);
            }
        }
        self.need_fragment_rebuild.extend(stale);
        Ok(())
    }

    /// The first brush in traversal (insertion) order, if any.
    #[must_use]
    pub fn first(&self) -> Option<BrushId> {
        self.head
    }

    /// The brush after `id` in traversal order, or `None` past the tail.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn next(&self, id: BrushId) -> Result<Option<BrushId>> {
        Ok(self.brush(id)?.next)
    }

    /// Iterates brush ids in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = BrushId> + '_ {
        std::iter::successors(self.head, move |&id| {
            self.brushes.get(id).and_then(|brush| brush.next)
        })
    }

    /// Returns a read-only view of a brush.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn brush(&self, id: BrushId) -> Result<&Brush> {
        self.brushes.get(id).ok_or(WorldError::BrushNotFound.into())
    }

    // --- Brush mutation (routed through the world for dirty tracking) ---

    /// Replaces a brush's plane list and marks it for full rebuild.
    ///
    /// Neighbors currently intersecting the brush are marked for fragment
    /// rebuild; newly overlapped brushes are picked up during the next
    /// [`World::rebuild`].
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn set_brush_planes(&mut self, id: BrushId, planes: Vec<Plane>) -> Result<()> {
        let time = self.tick();
        let brush = self.brushes.get_mut(id).ok_or(WorldError::BrushNotFound)?;
        brush.planes = planes;
        brush.time = time;
        let neighbors = brush.intersecting_brushes.clone();
        self.need_face_rebuild.insert(id);
        self.need_fragment_rebuild.insert(id);
        self.need_fragment_rebuild.extend(neighbors);
        Ok(())
    }

    /// Read-only view of a brush's planes.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn brush_planes(&self, id: BrushId) -> Result<&[Plane]> {
        Ok(self.brush(id)?.planes())
    }

    /// Replaces a brush's volume-classification rule.
    ///
    /// Shape is unaffected, so only the fragment phase is marked, for the
    /// brush and for its intersecting neighbors (their fragments compose
    /// this operation too).
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn set_brush_volume_operation(
        &mut self,
        id: BrushId,
        operation: VolumeOperation,
    ) -> Result<()> {
        let time = self.tick();
        let brush = self.brushes.get_mut(id).ok_or(WorldError::BrushNotFound)?;
        brush.volume_operation = operation;
        brush.time = time;
        let neighbors = brush.intersecting_brushes.clone();
        self.need_fragment_rebuild.insert(id);
        self.need_fragment_rebuild.extend(neighbors);
        Ok(())
    }

    /// Derived faces of a brush, valid after a covering rebuild.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn brush_faces(&self, id: BrushId) -> Result<&[Face]> {
        Ok(self.brush(id)?.faces())
    }

    /// Cached AABB of a brush, valid after a covering rebuild.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn brush_box(&self, id: BrushId) -> Result<&Box3> {
        Ok(self.brush(id)?.bounding_box())
    }

    /// A brush's modification time stamp.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn brush_time(&self, id: BrushId) -> Result<u64> {
        Ok(self.brush(id)?.time())
    }

    /// Overrides a brush's time stamp.
    ///
    /// Time orders volume-operation composition inside overlapped
    /// regions, so the brush and its neighbors are marked for fragment
    /// rebuild.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn set_brush_time(&mut self, id: BrushId, time: u64) -> Result<()> {
        let brush = self.brushes.get_mut(id).ok_or(WorldError::BrushNotFound)?;
        brush.time = time;
        let neighbors = brush.intersecting_brushes.clone();
        self.next_time = self.next_time.max(time + 1);
        self.need_fragment_rebuild.insert(id);
        self.need_fragment_rebuild.extend(neighbors);
        Ok(())
    }

    /// Attaches opaque data to a brush.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn set_brush_user_data(&mut self, id: BrushId, data: Box<dyn Any>) -> Result<()> {
        let brush = self.brushes.get_mut(id).ok_or(WorldError::BrushNotFound)?;
        brush.user_data = Some(data);
        Ok(())
    }

    /// Opaque data attached to a brush, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale.
    pub fn brush_user_data(&self, id: BrushId) -> Result<Option<&dyn Any>> {
        Ok(self.brush(id)?.user_data())
    }

    // --- World user data ---

    /// Attaches opaque data to the world.
    pub fn set_user_data(&mut self, data: Box<dyn Any>) {
        self.user_data = Some(data);
    }

    /// Opaque data attached to the world, if any.
    #[must_use]
    pub fn user_data(&self) -> Option<&dyn Any> {
        self.user_data.as_deref()
    }

    fn tick(&mut self) -> u64 {
        let time = self.next_time;
        self.next_time += 1;
        time
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("brushes", &self.brushes.len())
            .field("void_volume", &self.void_volume)
            .field("need_face_rebuild", &self.need_face_rebuild.len())
            .field("need_fragment_rebuild", &self.need_fragment_rebuild.len())
            .finish_non_exhaustive()
    }
}

pub mod face;
pub mod volume;

pub use face::{Face, Fragment};
pub use volume::{Volume, VolumeOperation};

use std::any::Any;
use std::fmt;

use crate::geometry::{Box3, Plane};
use crate::math::Point3;

slotmap::new_key_type! {
    /// Generation-checked identifier for a brush in a [`World`](crate::World).
    ///
    /// Stays unique across removals; looking up a removed brush fails
    /// instead of aliasing a newer one.
    pub struct BrushId;
}

/// A convex solid defined as the intersection of half-spaces.
///
/// Brushes are owned by a [`World`](crate::World) and mutated through it,
/// so that every edit lands in the right dirty set. The faces, fragments
/// and bounding box are derived data, valid after the next `rebuild()`
/// that covers this brush.
pub struct Brush {
    pub(crate) planes: Vec<Plane>,
    pub(crate) volume_operation: VolumeOperation,
    pub(crate) faces: Vec<Face>,
    pub(crate) bounds: Box3,
    pub(crate) intersecting_brushes: Vec<BrushId>,
    pub(crate) uid: u64,
    pub(crate) time: u64,
    pub(crate) prev: Option<BrushId>,
    pub(crate) next: Option<BrushId>,
    pub(crate) user_data: Option<Box<dyn Any>>,
}

impl Brush {
    pub(crate) fn new(uid: u64, time: u64) -> Self {
        Self {
            planes: Vec::new(),
            volume_operation: VolumeOperation::default(),
            faces: Vec::new(),
            bounds: Box3::empty(),
            intersecting_brushes: Vec::new(),
            uid,
            time,
            prev: None,
            next: None,
            user_data: None,
        }
    }

    /// Read-only view of the brush's planes, in insertion order.
    ///
    /// Plane order is identity: `faces()[i]` pairs with `planes()[i]`.
    #[must_use]
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// The brush's volume-classification rule.
    #[must_use]
    pub fn volume_operation(&self) -> VolumeOperation {
        self.volume_operation
    }

    /// Derived faces, one per plane; valid after a covering rebuild.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Cached tight AABB of the plane intersection; empty if the
    /// intersection is empty or unbounded. Valid after a covering rebuild.
    #[must_use]
    pub fn bounding_box(&self) -> &Box3 {
        &self.bounds
    }

    /// Brushes whose hulls overlap this one, as of the last rebuild.
    #[must_use]
    pub fn intersecting_brushes(&self) -> &[BrushId] {
        &self.intersecting_brushes
    }

    /// Unique id, assigned once at creation and never reused.
    #[must_use]
    pub fn uid(&self) -> u64 {
        self.uid
    }

    /// Last-modified time stamp; orders volume-operation composition.
    #[must_use]
    pub fn time(&self) -> u64 {
        self.time
    }

    /// Opaque caller-attached data.
    #[must_use]
    pub fn user_data(&self) -> Option<&dyn Any> {
        self.user_data.as_deref()
    }

    /// Returns `true` if the point satisfies every plane inequality,
    /// inclusive of boundaries.
    ///
    /// A brush with no planes contains nothing.
    #[must_use]
    pub fn contains_point(&self, point: &Point3, tolerance: f64) -> bool {
        !self.planes.is_empty()
            && self
                .planes
                .iter()
                .all(|plane| plane.contains(point, tolerance))
    }

    /// Iterates over all hull vertices across non-empty faces.
    pub(crate) fn hull_vertices(&self) -> impl Iterator<Item = &Point3> {
        self.faces.iter().flat_map(|face| face.vertices.iter())
    }
}

impl fmt::Debug for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Brush")
            .field("uid", &self.uid)
            .field("time", &self.time)
            .field("planes", &self.planes.len())
            .field("faces", &self.faces.len())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

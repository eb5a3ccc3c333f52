use crate::math::Point3;

use super::{BrushId, Volume};

/// A convex sub-polygon of a face with constant volume classification on
/// each side.
///
/// Fragments are the atomic geometry unit: the face polygon is split
/// against every brush intersecting the owner until front and back volume
/// are constant over each piece.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub(crate) vertices: Vec<Point3>,
    pub(crate) front_volume: Volume,
    pub(crate) back_volume: Volume,
    pub(crate) front_brush: Option<BrushId>,
    pub(crate) back_brush: Option<BrushId>,
}

impl Fragment {
    /// The fragment polygon, wound counter-clockwise around the owning
    /// plane's outward normal.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Ambient volume on the outward side of the owning plane.
    #[must_use]
    pub fn front_volume(&self) -> Volume {
        self.front_volume
    }

    /// Ambient volume on the inward side of the owning plane.
    #[must_use]
    pub fn back_volume(&self) -> Volume {
        self.back_volume
    }

    /// The brush bounding the outward side, if any.
    #[must_use]
    pub fn front_brush(&self) -> Option<BrushId> {
        self.front_brush
    }

    /// The brush bounding the inward side, if any.
    #[must_use]
    pub fn back_brush(&self) -> Option<BrushId> {
        self.back_brush
    }
}

/// The planar polygon one brush plane contributes to the brush boundary.
///
/// A face whose plane contributes nothing to the hull keeps an empty
/// vertex list; it stays tracked for rebuild but is skipped by queries.
#[derive(Debug, Clone)]
pub struct Face {
    pub(crate) plane_index: usize,
    pub(crate) vertices: Vec<Point3>,
    pub(crate) fragments: Vec<Fragment>,
}

impl Face {
    /// Index of the owning plane in the brush's plane list.
    #[must_use]
    pub fn plane_index(&self) -> usize {
        self.plane_index
    }

    /// The face polygon, obtained by clipping the plane against the
    /// brush's other planes.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The fragments partitioning this face's polygon.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns `true` if the plane contributes nothing to the hull.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }
}

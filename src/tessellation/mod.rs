use std::iter::FusedIterator;

use crate::brush::Fragment;

/// A triangle as an index triple into a fragment's vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// First vertex index.
    pub i: u32,
    /// Second vertex index.
    pub j: u32,
    /// Third vertex index.
    pub k: u32,
}

/// Lazy triangle-fan decomposition of a convex fragment polygon.
///
/// Fragments are convex by construction, so a fan from vertex 0 covers
/// the polygon exactly and preserves the counter-clockwise winding around
/// the owning plane's normal. The iterator is cheap to clone, which makes
/// it restartable.
#[derive(Debug, Clone)]
pub struct FanTriangulation {
    vertex_count: u32,
    cursor: u32,
}

impl FanTriangulation {
    /// Rewinds the sequence to the first triangle.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }
}

impl Iterator for FanTriangulation {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        if self.cursor + 2 >= self.vertex_count {
            return None;
        }
        let triangle = Triangle {
            i: 0,
            j: self.cursor + 1,
            k: self.cursor + 2,
        };
        self.cursor += 1;
        Some(triangle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .vertex_count
            .saturating_sub(2)
            .saturating_sub(self.cursor) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FanTriangulation {}
impl FusedIterator for FanTriangulation {}

/// Decomposes a fragment's polygon into triangles for rendering.
///
/// Degenerate fragments (fewer than 3 vertices) yield no triangles.
#[must_use]
pub fn triangulate(fragment: &Fragment) -> FanTriangulation {
    // Fragment polygons are a handful of vertices; u32 cannot overflow
    #[allow(clippy::cast_possible_truncation)]
    let vertex_count = fragment.vertices().len() as u32;
    FanTriangulation {
        vertex_count,
        cursor: 0,
    }
}

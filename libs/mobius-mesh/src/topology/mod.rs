//! # Topology Stitcher
//!
//! Connects a `rows × columns` parameter grid into a Möbius band.
//!
//! ## Layout
//!
//! ```text
//! row V   ─────────────   mirrored segment of strip 0   (paired with row 0)
//! row V-1 ─────────────
//!   ...                   odd middle strip when V is odd
//! row 1   ─────────────
//! row 0   ─────────────   outer segment of strip 0
//!         col 0 ... col C-1
//! ```
//!
//! Rows are processed in pairs from the outside in. Strip `k` stitches row
//! `k` to `k + 1` (outer segment) and row `V - k` to `V - k - 1` (mirrored
//! segment). Because of the half twist, the last column of one side is
//! joined to column 0 of the *opposite* side by one seam face per segment.
//! An odd `V` leaves one middle strip with no partner; it is stitched on
//! its own and closed onto itself by a single face.
//!
//! ## Face order
//!
//! Every face is described as a quad `(P1, P2, P3, P4)`. Triangle mode
//! splits it as `(P1, P2, P3)` and `(P1, P3, P4)`. Quad mode emits mirrored
//! and middle-strip quads rotated to `(P4, P1, P2, P3)`, every other quad
//! as is.

use serde::Serialize;

use crate::grid::GridDims;

/// A polygon of vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Face {
    /// Three vertex indices.
    Triangle([u32; 3]),
    /// Four vertex indices.
    Quad([u32; 4]),
}

impl Face {
    /// The vertex indices in winding order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        match self {
            Face::Triangle(points) => points.as_slice(),
            Face::Quad(points) => points.as_slice(),
        }
    }
}

/// Output polygon shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceShape {
    /// One four-sided face per grid cell.
    #[default]
    Quad,
    /// Two triangles per grid cell.
    Triangle,
}

impl FaceShape {
    /// Maps the `triangulate` flag to a shape.
    #[inline]
    pub fn from_triangulate(triangulate: bool) -> Self {
        if triangulate {
            FaceShape::Triangle
        } else {
            FaceShape::Quad
        }
    }

    /// Faces emitted per grid cell.
    #[inline]
    pub fn faces_per_cell(self) -> usize {
        match self {
            FaceShape::Quad => 1,
            FaceShape::Triangle => 2,
        }
    }
}

/// Corner order for a quad in quad mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Winding {
    /// `(P1, P2, P3, P4)`
    Forward,
    /// `(P4, P1, P2, P3)`
    Rotated,
}

/// Vertex index arithmetic for a row-major grid.
#[derive(Debug, Clone, Copy)]
struct GridIndex {
    columns: u32,
}

impl GridIndex {
    /// Index of `(row, col)`.
    #[inline]
    fn at(self, row: u32, col: u32) -> u32 {
        row * self.columns + col
    }

    /// Index of column 0 of `row`.
    #[inline]
    fn first(self, row: u32) -> u32 {
        self.at(row, 0)
    }

    /// Index of the last column of `row`, the one lying on `u_max`.
    #[inline]
    fn last(self, row: u32) -> u32 {
        self.at(row, self.columns - 1)
    }
}

/// Number of faces [`stitch`] emits for `dims` and `shape`.
///
/// Every one of the `v_steps × columns` cells (including the seam cells)
/// yields one quad or two triangles.
pub fn face_count(dims: GridDims, shape: FaceShape) -> usize {
    dims.v_steps() as usize * dims.columns as usize * shape.faces_per_cell()
}

/// Produces the faces of the Möbius band for a grid of `dims`.
///
/// Requires `rows >= 2` and `columns >= 2`, which a validated
/// [`config::constants::GridConfig`] guarantees.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::grid::GridDims;
/// use mobius_mesh::topology::{stitch, Face, FaceShape};
///
/// let faces = stitch(GridDims { rows: 2, columns: 3 }, FaceShape::Quad);
/// assert_eq!(
///     faces,
///     vec![
///         Face::Quad([0, 3, 4, 1]),
///         Face::Quad([1, 4, 5, 2]),
///         Face::Quad([2, 5, 3, 0]),
///     ]
/// );
/// ```
pub fn stitch(dims: GridDims, shape: FaceShape) -> Vec<Face> {
    debug_assert!(dims.rows >= 2 && dims.columns >= 2);

    let mut stitcher = Stitcher {
        index: GridIndex {
            columns: dims.columns,
        },
        columns: dims.columns,
        shape,
        faces: Vec::with_capacity(face_count(dims, shape)),
    };

    let v_steps = dims.v_steps();
    for strip in 0..v_steps / 2 {
        stitcher.paired_strip(strip, v_steps - strip);
    }
    if v_steps % 2 == 1 {
        stitcher.middle_strip(v_steps / 2 + 1);
    }

    log::debug!(
        "stitched {} faces for {} rows x {} columns ({:?})",
        stitcher.faces.len(),
        dims.rows,
        dims.columns,
        shape
    );

    stitcher.faces
}

struct Stitcher {
    index: GridIndex,
    columns: u32,
    shape: FaceShape,
    faces: Vec<Face>,
}

impl Stitcher {
    /// Stitches row `low` to `low + 1` and row `high` to `high - 1`, where
    /// `high` is the twin of `low` across the strip.
    fn paired_strip(&mut self, low: u32, high: u32) {
        let ix = self.index;

        self.band(low, low + 1, Winding::Forward);
        self.push_quad(
            [ix.last(low), ix.first(high - 1), ix.first(high - 2), ix.last(low + 1)],
            Winding::Forward,
        );

        self.band(high, high - 1, Winding::Rotated);
        self.push_quad(
            [ix.last(high - 1), ix.first(low), ix.first(low + 1), ix.last(high - 2)],
            Winding::Forward,
        );
    }

    /// Stitches the unpaired strip between `row - 1` and `row` and closes it
    /// onto itself across the seam.
    fn middle_strip(&mut self, row: u32) {
        let ix = self.index;

        self.band(row, row - 1, Winding::Rotated);
        self.push_quad(
            [ix.last(row - 1), ix.last(row), ix.first(row), ix.first(row - 1)],
            Winding::Forward,
        );
    }

    /// Grid-adjacent quads between `from` and `to` for every column but the
    /// last.
    fn band(&mut self, from: u32, to: u32, winding: Winding) {
        let ix = self.index;
        for col in 0..self.columns - 1 {
            self.push_quad(
                [ix.at(from, col), ix.at(from, col + 1), ix.at(to, col + 1), ix.at(to, col)],
                winding,
            );
        }
    }

    fn push_quad(&mut self, [p1, p2, p3, p4]: [u32; 4], winding: Winding) {
        match self.shape {
            FaceShape::Quad => {
                let points = match winding {
                    Winding::Forward => [p1, p2, p3, p4],
                    Winding::Rotated => [p4, p1, p2, p3],
                };
                self.faces.push(Face::Quad(points));
            }
            FaceShape::Triangle => {
                self.faces.push(Face::Triangle([p1, p2, p3]));
                self.faces.push(Face::Triangle([p1, p3, p4]));
            }
        }
    }
}

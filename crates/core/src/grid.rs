//! Two-dimensional grid of direction vectors.
//!
//! A `FlowGrid` stores `cols * rows` [`Vec2`] values in row-major layout
//! (`index = row * cols + col`). Grids are rebuilt wholesale every frame by
//! the field generator; a grid never outlives the frame that produced it.
//!
//! Unlike particle positions (which wrap at the canvas edges), cell lookup
//! from a continuous position clamps into range. A position fractionally
//! past the boundary left over from the previous frame's wrap must still
//! resolve to a valid cell.

use crate::vec2::Vec2;

/// A grid of steering directions, one per cell.
///
/// Zero-size grids are valid: a canvas smaller than one cell produces
/// `cols == 0` or `rows == 0`, and lookups against such a grid return
/// `None` rather than indexing out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowGrid {
    cols: usize,
    rows: usize,
    data: Vec<Vec2>,
}

impl FlowGrid {
    /// Builds a grid by evaluating `f(col, row)` for every cell in
    /// row-major order.
    pub fn from_fn<F>(cols: usize, rows: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Vec2,
    {
        let mut data = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(col, row));
            }
        }
        Self { cols, rows, data }
    }

    /// An empty grid (no cells).
    pub fn empty() -> Self {
        Self {
            cols: 0,
            rows: 0,
            data: Vec::new(),
        }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True if the grid has no cells in at least one dimension.
    pub fn is_empty(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[Vec2] {
        &self.data
    }

    /// The direction stored at `(col, row)`, or `None` if out of bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<Vec2> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Resolves a continuous canvas position to its grid cell, clamping
    /// into `[0, cols) x [0, rows)`.
    ///
    /// Returns `None` for an empty grid or a non-positive `cell_size`.
    pub fn cell_at(&self, x: f64, y: f64, cell_size: f64) -> Option<(usize, usize)> {
        if self.is_empty() || cell_size <= 0.0 {
            return None;
        }
        let col = ((x / cell_size).floor().max(0.0) as usize).min(self.cols - 1);
        let row = ((y / cell_size).floor().max(0.0) as usize).min(self.rows - 1);
        Some((col, row))
    }

    /// The steering direction for a continuous canvas position, using the
    /// clamped cell lookup of [`cell_at`](Self::cell_at).
    pub fn force_at(&self, x: f64, y: f64, cell_size: f64) -> Option<Vec2> {
        let (col, row) = self.cell_at(x, y, cell_size)?;
        self.get(col, row)
    }
}

//! # Uniform spatial grid (broad phase)
//!
//! This module implements the **uniform-cell grid** that prunes the naive
//! `O(N²)` all-pairs overlap test down to nearby candidates. The world is
//! divided into fixed-size square cells; each frame every body is bucketed
//! into the single cell containing its center, and a query gathers the
//! 3×3 block of cells around a position.
//!
//! ## Core concepts
//!
//! - Cells are stored in one flat vector, indexed `col + row * cols`.
//! - A cell holds **indices** into `System::bodies`, never references, so
//!   the index can be rebuilt or dropped without any aliasing concerns.
//! - The grid carries no cross-frame state: `clear()` + reinsertion every
//!   frame is the whole lifecycle.
//! - A body whose center falls outside `[0,cols)×[0,rows)` is silently
//!   left out of the index for that frame. It keeps moving and bouncing;
//!   it just cannot be offered as a collision candidate until it re-enters
//!   the indexed area.
//!
//! Candidates outside the 3×3 neighborhood cannot overlap the query body
//! as long as `cell_size >= 2 * max_radius`; see [`SpatialGrid::new`].

use crate::simulation::states::NVec2;

/// Uniform grid over the world rectangle, rebuilt once per frame.
pub struct SpatialGrid {
    cells: Vec<Vec<usize>>, // body indices, flat col + row * cols layout
    cell_size: f64,
    cols: usize,
    rows: usize,
}

impl SpatialGrid {
    /// Build a grid covering `width × height` with square cells of edge
    /// `cell_size`. Column/row counts are truncated, so a trailing strip
    /// of the world thinner than one cell is not indexed.
    ///
    /// Neighbor queries are complete only while `cell_size` is at least
    /// twice the largest body radius; smaller cells can miss candidates
    /// two cells away. Upholding that ratio is the caller's job, as is
    /// passing a positive `cell_size`.
    pub fn new(width: f64, height: f64, cell_size: f64) -> Self {
        debug_assert!(cell_size > 0.0, "cell_size must be positive");
        let cols = (width / cell_size) as usize;
        let rows = (height / cell_size) as usize;

        Self {
            cells: vec![Vec::new(); cols * rows],
            cell_size,
            cols,
            rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Empty every cell, keeping their allocations for the next frame.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Cell coordinates containing `position`. Signed: positions left of
    /// or above the world map to negative columns/rows.
    pub fn cell_index_for(&self, position: NVec2) -> (i64, i64) {
        let col = (position.x / self.cell_size).floor() as i64;
        let row = (position.y / self.cell_size).floor() as i64;
        (col, row)
    }

    /// Bucket body `index` by `position`. Out-of-bounds positions are
    /// dropped without error; the body simply stays unindexed this frame.
    pub fn insert(&mut self, position: NVec2, index: usize) {
        let (col, row) = self.cell_index_for(position);
        if col >= 0 && (col as usize) < self.cols && row >= 0 && (row as usize) < self.rows {
            self.cells[col as usize + row as usize * self.cols].push(index);
        }
    }

    /// Collect the body indices of the 3×3 cell block centered on the cell
    /// containing `position`, clipped to the grid, in row-major order and
    /// insertion order within each cell.
    ///
    /// The result includes whatever was inserted at `position` itself, so
    /// callers iterating bodies must skip their own index.
    pub fn query_neighbors(&self, position: NVec2) -> Vec<usize> {
        let mut neighbors = Vec::new();
        let (col, row) = self.cell_index_for(position);

        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if c >= 0 && (c as usize) < self.cols && r >= 0 && (r as usize) < self.rows {
                    neighbors.extend(&self.cells[c as usize + r as usize * self.cols]);
                }
            }
        }

        neighbors
    }
}

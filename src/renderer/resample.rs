//! Nearest-neighbor resampling of frames onto the terminal grid.
//!
//! # Algorithm
//!
//! For destination cell `(x, y)`:
//!
//! ```text
//! scale_x = frame_width  / columns
//! scale_y = frame_height / rows
//! src     = (floor(x * scale_x), floor(y * scale_y)), clamped to the frame
//! ```
//!
//! No interpolation and no aspect correction: one pixel per character cell.

use crate::types::{Frame, Rgb};

// =============================================================================
// Grid
// =============================================================================

/// A resampled frame, sized to the display surface.
///
/// Row-major, `columns * rows` cells. Empty when either side is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: u16,
    rows: u16,
    cells: Vec<Rgb>,
}

impl Grid {
    /// A grid with no cells.
    pub fn empty(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: Vec::new(),
        }
    }

    #[inline]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        if x < self.columns && y < self.rows && !self.cells.is_empty() {
            Some(self.cells[y as usize * self.columns as usize + x as usize])
        } else {
            None
        }
    }

    /// Iterate rows top to bottom, each a slice left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Rgb]> {
        // chunks() panics on zero, and an empty grid yields no rows anyway.
        self.cells.chunks(self.columns.max(1) as usize)
    }

    /// Raw row-major cells.
    #[inline]
    pub fn cells(&self) -> &[Rgb] {
        &self.cells
    }
}

// =============================================================================
// Resampling
// =============================================================================

/// Map `frame` onto a `columns x rows` grid by nearest-neighbor sampling.
pub fn resample(frame: &Frame, columns: u16, rows: u16) -> Grid {
    if columns == 0 || rows == 0 {
        return Grid::empty(columns, rows);
    }

    let size = columns as usize * rows as usize;
    if frame.width() == 0 || frame.height() == 0 {
        return Grid {
            columns,
            rows,
            cells: vec![Rgb::default(); size],
        };
    }

    let scale_x = frame.width() as f64 / columns as f64;
    let scale_y = frame.height() as f64 / rows as f64;
    let max_x = frame.width() - 1;
    let max_y = frame.height() - 1;

    let mut cells = Vec::with_capacity(size);
    for y in 0..rows {
        let src_y = source_index(y, scale_y, max_y);
        for x in 0..columns {
            let src_x = source_index(x, scale_x, max_x);
            cells.push(frame.get(src_x, src_y).unwrap_or_default());
        }
    }

    Grid {
        columns,
        rows,
        cells,
    }
}

/// Truncated source coordinate for destination `dst`, never past `max`.
#[inline]
fn source_index(dst: u16, scale: f64, max: u32) -> u32 {
    ((dst as f64 * scale) as u32).min(max)
}

// =============================================================================
// Tests
// =============================================================================

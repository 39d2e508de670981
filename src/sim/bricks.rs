//! The destructible brick field.
//!
//! Collision detection and destruction are a single atomic operation
//! ([`BrickField::query_and_break`]), so a cell can be hit at most once and
//! the intact count can never drift from the grid.

use crate::Viewport;
use crate::consts::{FIELD_HEIGHT_FRACTION, FIELD_SIDE_MARGIN};

/// Grid of destructible cells across the top of the playfield
#[derive(Debug, Clone)]
pub struct BrickField {
    /// Top row of the field in viewport coordinates
    y: i32,
    /// Left column of the field
    x: i32,
    height: i32,
    width: i32,
    /// Cell liveness, row-major; `true` = intact
    cells: Vec<bool>,
    /// Intact count, kept in lockstep with `cells`
    remaining: u32,
}

impl BrickField {
    /// Build a fresh, fully intact field sized to the viewport.
    pub fn new(viewport: Viewport) -> Self {
        let width = viewport.width - 2 * FIELD_SIDE_MARGIN;
        let height = (FIELD_HEIGHT_FRACTION * viewport.height as f32).round() as i32;
        let count = (width * height).max(0) as usize;
        Self {
            y: height,
            x: FIELD_SIDE_MARGIN,
            height,
            width,
            cells: vec![true; count],
            remaining: count as u32,
        }
    }

    /// Collision query and destruction in one step: if (row, col) is inside
    /// the field and the cell is intact, break it and return true.
    ///
    /// Out-of-bounds queries simply return false.
    pub fn query_and_break(&mut self, row: i32, col: i32) -> bool {
        if row < self.y || row >= self.y + self.height || col < self.x || col >= self.x + self.width
        {
            return false;
        }
        let idx = ((row - self.y) * self.width + (col - self.x)) as usize;
        if !self.cells[idx] {
            return false;
        }
        self.cells[idx] = false;
        self.remaining -= 1;
        true
    }

    /// Number of intact bricks; 0 means the field is cleared
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the cell at (row, col) is an intact brick (render query)
    pub fn is_intact(&self, row: i32, col: i32) -> bool {
        if row < self.y || row >= self.y + self.height || col < self.x || col >= self.x + self.width
        {
            return false;
        }
        self.cells[((row - self.y) * self.width + (col - self.x)) as usize]
    }

    /// Field placement as (top row, left column, height, width)
    #[inline]
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        (self.y, self.x, self.height, self.width)
    }
}

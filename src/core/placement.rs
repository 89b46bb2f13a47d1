//! Placement module - the collision predicate
//!
//! `shape_fits` is the single source of truth for whether a shape can occupy
//! a grid position. Movement, rotation, gravity and hard-drop projection all
//! probe through it; nothing else duplicates the checks.

use crate::core::board::Grid;
use crate::core::pieces::ShapeMatrix;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Whether `shape` anchored at (x, y) fits the grid.
///
/// A filled cell is rejected if its absolute column leaves [0, W), its row
/// reaches the floor (>= H), or it overlaps an occupied cell at row >= 0.
/// Rows above the grid (absolute y < 0) are always permitted so pieces may
/// extend past the top while spawning or rotating. Pure: mutates nothing.
pub fn shape_fits(grid: &Grid, shape: &ShapeMatrix, x: i8, y: i8) -> bool {
    for (row, col) in shape.filled_cells() {
        let abs_x = x as i16 + col as i16;
        let abs_y = y as i16 + row as i16;

        if abs_x < 0 || abs_x >= GRID_WIDTH as i16 {
            return false;
        }
        if abs_y >= GRID_HEIGHT as i16 {
            return false;
        }
        if abs_y >= 0 && grid.is_occupied(abs_x as usize, abs_y as usize) {
            return false;
        }
    }
    true
}

/// Maximal number of rows the shape can descend from (x, y) before it would
/// no longer fit. Probes cell by cell via `shape_fits`.
pub fn drop_distance(grid: &Grid, shape: &ShapeMatrix, x: i8, y: i8) -> i8 {
    let mut dist = 0;
    while shape_fits(grid, shape, x, y + dist + 1) {
        dist += 1;
    }
    dist
}

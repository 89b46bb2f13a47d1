//! Grid and placement tests over the public API

use blockfall::core::{drop_distance, shape_fits, Grid, PieceKind};
use blockfall::types::{BlockColor, GRID_HEIGHT, GRID_WIDTH};

fn fill_row(grid: &mut Grid, y: usize) {
    for x in 0..GRID_WIDTH {
        grid.set_cell(x, y, Some(BlockColor::Cyan));
    }
}

#[test]
fn test_clear_rows_three_and_five() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 3);
    fill_row(&mut grid, 5);
    // Markers: one above both clears, one in the stranded row between them.
    grid.set_cell(0, 2, Some(BlockColor::Red));
    grid.set_cell(7, 4, Some(BlockColor::Green));
    let before = grid.occupied_count();

    grid.clear_rows(&[3, 5]);

    // Original row 4 is now at row 5.
    assert_eq!(grid.cell(7, 5), Some(BlockColor::Green));
    // Rows 0-2 shifted down by 2.
    assert_eq!(grid.cell(0, 4), Some(BlockColor::Red));
    // Top two rows empty.
    for x in 0..GRID_WIDTH {
        assert_eq!(grid.cell(x, 0), None);
        assert_eq!(grid.cell(x, 1), None);
    }
    // Exactly 2xW cells disappeared.
    assert_eq!(grid.occupied_count(), before - 2 * GRID_WIDTH);
}

#[test]
fn test_clear_adjacent_rows_does_not_double_shift() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 3);
    fill_row(&mut grid, 4);
    grid.set_cell(5, 2, Some(BlockColor::Magenta));
    grid.set_cell(5, 6, Some(BlockColor::Orange));

    grid.clear_rows(&[3, 4]);

    // Above: drops by exactly two. Below: untouched.
    assert_eq!(grid.cell(5, 4), Some(BlockColor::Magenta));
    assert_eq!(grid.cell(5, 6), Some(BlockColor::Orange));
    assert_eq!(grid.occupied_count(), 2);
}

#[test]
fn test_shape_fits_bounds_and_occupancy() {
    let mut grid = Grid::new();
    let o = PieceKind::O.base_shape();

    // In-bounds empty positions fit.
    assert!(shape_fits(&grid, &o, 0, 0));
    assert!(shape_fits(&grid, &o, 8, 18));

    // Column bounds.
    assert!(!shape_fits(&grid, &o, -1, 0));
    assert!(!shape_fits(&grid, &o, 9, 0));

    // Floor.
    assert!(!shape_fits(&grid, &o, 0, 19));

    // Above the grid is always permitted.
    assert!(shape_fits(&grid, &o, 0, -2));

    // Occupancy at rows >= 0.
    grid.set_cell(1, 1, Some(BlockColor::Blue));
    assert!(!shape_fits(&grid, &o, 0, 0));
    assert!(!shape_fits(&grid, &o, 1, 1));
    assert!(shape_fits(&grid, &o, 2, 0));
}

#[test]
fn test_shape_fits_never_mutates() {
    let mut grid = Grid::new();
    grid.set_cell(4, 10, Some(BlockColor::Yellow));
    let reference = grid.clone();
    let shape = PieceKind::T.base_shape();

    for _ in 0..5 {
        assert!(shape_fits(&grid, &shape, 3, 0));
        assert!(!shape_fits(&grid, &shape, 3, 9));
    }
    assert_eq!(grid, reference);
}

#[test]
fn test_rotation_involutive_for_all_shapes() {
    for kind in PieceKind::ALL {
        let base = kind.base_shape();
        let mut shape = base;
        for _ in 0..4 {
            shape = shape.rotated_cw();
        }
        assert_eq!(shape, base, "{:?} changed after four rotations", kind);
    }
}

#[test]
fn test_drop_distance_reaches_floor() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        let shape = kind.base_shape();
        let dist = drop_distance(&grid, &shape, 3, 0);
        assert_eq!(dist as usize, GRID_HEIGHT - shape.rows());
    }
}

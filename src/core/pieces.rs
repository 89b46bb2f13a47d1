//! Pieces module - shape catalog and rotation
//!
//! The seven canonical shapes are rectangular boolean matrices (their spawn
//! orientation); every other orientation is derived by clockwise rotation.
//! Rotation carries no wall kicks: a rotation that does not fit is simply
//! rejected by the caller.

use crate::types::BlockColor;

/// Maximum side length of a shape matrix
pub const MAX_SHAPE_DIM: usize = 4;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Color token for this kind
    pub fn color(self) -> BlockColor {
        match self {
            PieceKind::I => BlockColor::Cyan,
            PieceKind::O => BlockColor::Yellow,
            PieceKind::T => BlockColor::Magenta,
            PieceKind::L => BlockColor::Orange,
            PieceKind::J => BlockColor::Blue,
            PieceKind::Z => BlockColor::Red,
            PieceKind::S => BlockColor::Green,
        }
    }

    /// Spawn-orientation shape matrix for this kind
    pub fn base_shape(self) -> ShapeMatrix {
        let rows: &[&[u8]] = match self {
            PieceKind::I => &[&[1, 1, 1, 1]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::T => &[&[1, 1, 1], &[0, 1, 0]],
            PieceKind::L => &[&[1, 1, 1], &[1, 0, 0]],
            PieceKind::J => &[&[1, 1, 1], &[0, 0, 1]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
        };
        ShapeMatrix::from_rows(rows)
    }
}

/// A rectangular boolean matrix describing which cells of a piece are filled.
///
/// Dimensions are explicit; storage is a fixed 4x4 backing array so the type
/// stays `Copy` and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl ShapeMatrix {
    /// Build a shape from row slices. Panics on an empty, ragged, or
    /// oversized matrix: a malformed shape is a programming error.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM, "bad shape height");
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM, "bad shape width");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape matrix");
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether cell (row, col) is filled. Panics out of range.
    pub fn filled(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows() && col < self.cols(), "shape cell out of range");
        self.cells[row][col]
    }

    /// Iterate over (row, col) of every filled cell
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols()).filter_map(move |c| self.cells[r][c].then_some((r, c)))
        })
    }

    /// The 90-degree clockwise rotation: transpose of the row-reversed
    /// matrix, with dimensions swapped.
    pub fn rotated_cw(&self) -> ShapeMatrix {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..self.cols() {
            for c in 0..self.rows() {
                cells[r][c] = self.cells[self.rows() - 1 - c][r];
            }
        }
        ShapeMatrix {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

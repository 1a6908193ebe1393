//! Shape matrices and the clockwise rotation transform.
//!
//! A shape is a rectangular boolean matrix of at most 4x4 cells. Rotation swaps
//! the matrix dimensions, so a 1x4 bar becomes a 4x1 column.

use arrayvec::ArrayVec;

use crate::types::MAX_SHAPE_SIDE;

/// Offset of a filled cell relative to the piece origin, as (dx, dy).
pub type CellOffset = (i32, i32);

/// Filled cells of a shape. Never allocates.
pub type CellOffsets = ArrayVec<CellOffset, { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

type Matrix = [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: Matrix,
}

impl Shape {
    /// Build a shape from a `u8` matrix where non-zero means filled.
    ///
    /// Only the top-left `rows x cols` region is used; everything else is
    /// cleared so equal shapes compare equal.
    pub const fn from_bits(rows: u8, cols: u8, bits: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut r = 0;
        while r < rows as usize && r < MAX_SHAPE_SIDE {
            let mut c = 0;
            while c < cols as usize && c < MAX_SHAPE_SIDE {
                cells[r][c] = bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether (row, col) is filled. Outside the matrix is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Rotate 90° clockwise in place.
    ///
    /// `new[r][c] = old[old_rows - 1 - c][r]` with rows and columns swapped.
    pub fn rotate_clockwise(&mut self) {
        *self = self.rotated_clockwise();
    }

    pub fn rotated_clockwise(&self) -> Self {
        let old_rows = self.rows as usize;
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in cells.iter_mut().enumerate().take(self.cols as usize) {
            for (c, cell) in row.iter_mut().enumerate().take(old_rows) {
                *cell = self.cells[old_rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Filled cells as (dx, dy) offsets, row-major.
    pub fn filled_cells(&self) -> CellOffsets {
        let mut out = CellOffsets::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.cells[r][c] {
                    out.push((c as i32, r as i32));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Shape = Shape::from_bits(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

    #[test]
    fn test_rotate_swaps_dimensions() {
        let bar = Shape::from_bits(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
        let up = bar.rotated_clockwise();
        assert_eq!((up.rows(), up.cols()), (4, 1));
        assert_eq!(up.filled_cells().len(), 4);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let r = T.rotated_clockwise();
        assert_eq!((r.rows(), r.cols()), (3, 2));
        assert!(r.is_filled(0, 0));
        assert!(!r.is_filled(0, 1));
        assert!(r.is_filled(1, 0));
        assert!(r.is_filled(1, 1));
        assert!(r.is_filled(2, 0));
        assert!(!r.is_filled(2, 1));
    }

    #[test]
    fn test_four_rotations_is_identity() {
        let mut s = T;
        for _ in 0..4 {
            s.rotate_clockwise();
        }
        assert_eq!(s, T);
    }

    #[test]
    fn test_from_bits_ignores_outside_region() {
        let a = Shape::from_bits(1, 2, [[1, 1, 1, 1], [1; 4], [0; 4], [0; 4]]);
        let b = Shape::from_bits(1, 2, [[1, 1, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(a, b);
    }
}

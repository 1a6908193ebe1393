//! Board module - the grid of locked cells
//!
//! The board is a `columns x rows` grid where each cell is empty or holds the
//! color of the piece that locked there. Cells live in a flat row-major vector
//! sized once at construction; dimensions never change afterwards.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom).

use crate::types::{Cell, Color};

/// The game board with flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Dimensions are validated by [`crate::GameConfig::validate`]; a zero-sized
    /// board is representable but useless.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (x, y), `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill cell (x, y) with `color`. Returns false if out of bounds.
    pub fn set_cell(&mut self, x: i32, y: i32, color: Color) -> bool {
        self.set(x, y, Some(color))
    }

    /// True only for in-range, filled cells. Out-of-range is never occupied;
    /// bounds are the collision resolver's business.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32
    }

    /// A row is full when it contains no empty cell.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Remove every full row, keeping the relative order of the rest and
    /// refilling the top with empty rows. Returns the number of rows removed.
    ///
    /// Two-pointer compaction from the bottom up, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Number of filled cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_COLUMNS, crate::types::DEFAULT_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, color: Color) {
        for x in 0..board.width() as i32 {
            board.set_cell(x, y, color);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_out_of_range_is_not_occupied() {
        let board = Board::new(10, 20);
        assert!(!board.is_occupied(-1, 0));
        assert!(!board.is_occupied(0, -1));
        assert!(!board.is_occupied(10, 5));
        assert!(!board.is_occupied(3, 20));
    }

    #[test]
    fn test_clear_keeps_order_of_remaining_rows() {
        let mut board = Board::new(4, 5);
        board.set_cell(0, 1, Color::Red);
        fill_row(&mut board, 2, Color::Cyan);
        board.set_cell(1, 3, Color::Blue);
        fill_row(&mut board, 4, Color::Cyan);

        assert_eq!(board.clear_full_rows(), 2);

        // Rows 1 and 3 slid down to rows 3 and 4, top refilled with empties.
        assert_eq!(board.get(0, 3), Some(Some(Color::Red)));
        assert_eq!(board.get(1, 4), Some(Some(Color::Blue)));
        assert_eq!(board.occupied_count(), 2);
        assert!(board.row(0).iter().all(Option::is_none));
        assert!(board.row(1).iter().all(Option::is_none));
        assert!(board.row(2).iter().all(Option::is_none));
    }

    #[test]
    fn test_clear_whole_board() {
        let mut board = Board::new(4, 4);
        for y in 0..4 {
            fill_row(&mut board, y, Color::Green);
        }
        assert_eq!(board.clear_full_rows(), 4);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.cells().len(), 16);
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let mut board = Board::new(3, 2);
        board.set_cell(2, 1, Color::Orange);
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], Some(Color::Orange));
    }
}

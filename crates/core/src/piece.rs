//! Pieces module - tetromino archetypes and the falling piece value
//!
//! A [`Piece`] is a shape, a color and a top-left grid position. Pieces are
//! `Copy`: moving one between the active, next and hold slots always copies
//! the value, so two slots can never alias the same piece.

use crate::shape::{CellOffsets, Shape};
use crate::types::{Color, PieceKind};

const I_SHAPE: Shape = Shape::from_bits(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
const O_SHAPE: Shape = Shape::from_bits(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const T_SHAPE: Shape = Shape::from_bits(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const S_SHAPE: Shape = Shape::from_bits(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const Z_SHAPE: Shape = Shape::from_bits(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);
const J_SHAPE: Shape = Shape::from_bits(2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const L_SHAPE: Shape = Shape::from_bits(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

/// Spawn shape of a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Spawn column for a shape: centered, rounding toward the left.
pub fn spawn_column(board_columns: u8, shape: &Shape) -> i32 {
    board_columns as i32 / 2 - shape.cols() as i32 / 2
}

/// A piece on (or above) the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece of `kind` at its spawn position.
    pub fn new(kind: PieceKind, board_columns: u8) -> Self {
        Self::from_parts(spawn_shape(kind), kind.color(), board_columns)
    }

    /// Create a piece from an existing shape and color at the spawn position.
    pub fn from_parts(shape: Shape, color: Color, board_columns: u8) -> Self {
        Self {
            shape,
            color,
            x: spawn_column(board_columns, &shape),
            y: 0,
        }
    }

    /// Move back to the spawn position for the current shape.
    pub fn respawn(&mut self, board_columns: u8) {
        self.x = spawn_column(board_columns, &self.shape);
        self.y = 0;
    }

    pub fn rotate_clockwise(&mut self) {
        self.shape.rotate_clockwise();
    }

    /// Absolute board coordinates of every filled cell.
    pub fn cells(&self) -> CellOffsets {
        self.cells_at(0, 0)
    }

    /// Absolute coordinates if the piece were moved by (dx, dy).
    pub fn cells_at(&self, dx: i32, dy: i32) -> CellOffsets {
        let mut out = self.shape.filled_cells();
        for (cx, cy) in out.iter_mut() {
            *cx += self.x + dx;
            *cy += self.y + dy;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_archetype_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(spawn_shape(kind).filled_cells().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_spawn_is_centered() {
        assert_eq!(Piece::new(PieceKind::I, 10).x, 3);
        assert_eq!(Piece::new(PieceKind::O, 10).x, 4);
        assert_eq!(Piece::new(PieceKind::T, 10).x, 4);
        assert_eq!(Piece::new(PieceKind::T, 10).y, 0);
    }

    #[test]
    fn test_color_follows_kind() {
        assert_eq!(Piece::new(PieceKind::I, 10).color, Color::Cyan);
        assert_eq!(Piece::new(PieceKind::L, 10).color, Color::Orange);
    }

    #[test]
    fn test_respawn_uses_current_shape_width() {
        let mut p = Piece::new(PieceKind::I, 10);
        p.rotate_clockwise();
        p.x = 0;
        p.y = 12;
        p.respawn(10);
        // A vertical bar is one column wide.
        assert_eq!((p.x, p.y), (5, 0));
    }

    #[test]
    fn test_cells_are_absolute() {
        let mut p = Piece::new(PieceKind::O, 10);
        p.y = 3;
        let cells = p.cells();
        assert_eq!(cells.as_slice(), &[(4, 3), (5, 3), (4, 4), (5, 4)]);
    }
}

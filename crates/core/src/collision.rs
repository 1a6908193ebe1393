//! Collision resolver.
//!
//! [`collides`] is the one check consulted before every positional change of
//! a piece. Rows above the board (y < 0) act as a spawn buffer: they never hit
//! locked cells but are still bounded left and right.

use crate::board::Board;
use crate::piece::Piece;

/// Would `piece`, moved by (dx, dy), leave the board or overlap a locked cell?
pub fn collides(board: &Board, piece: &Piece, dx: i32, dy: i32) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;

    piece.cells_at(dx, dy).iter().any(|&(x, y)| {
        x < 0 || x >= width || y >= height || (y >= 0 && board.is_occupied(x, y))
    })
}

/// How many rows `piece` can fall before landing.
pub fn drop_distance(board: &Board, piece: &Piece) -> i32 {
    let mut distance = 0;
    while !collides(board, piece, 0, distance + 1) {
        distance += 1;
    }
    distance
}

/// Row the piece would rest at after a hard drop (the shadow row).
pub fn landing_row(board: &Board, piece: &Piece) -> i32 {
    piece.y + drop_distance(board, piece)
}

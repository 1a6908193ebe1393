//! Rotation with wall kicks.
//!
//! This is a deliberately small kick table, not SRS. After a clockwise turn
//! the piece tries, in order: no offset, the four horizontal kicks, then for
//! one row up and one row down the bare vertical kick followed by the same
//! four horizontal kicks. The first pose that does not collide wins.

use crate::board::Board;
use crate::collision::collides;
use crate::piece::Piece;

/// Horizontal kicks in try order.
pub const HORIZONTAL_KICKS: [i32; 4] = [-1, 1, -2, 2];

/// Vertical kicks in try order.
pub const VERTICAL_KICKS: [i32; 2] = [-1, 1];

/// Every (dx, dy) offset tried after a rotation, in order.
pub const KICK_SEQUENCE: [(i32, i32); 15] = [
    (0, 0),
    (-1, 0),
    (1, 0),
    (-2, 0),
    (2, 0),
    // one row up
    (0, -1),
    (-1, -1),
    (1, -1),
    (-2, -1),
    (2, -1),
    // one row down
    (0, 1),
    (-1, 1),
    (1, 1),
    (-2, 1),
    (2, 1),
];

/// Rotate `piece` clockwise, kicking it into the first free pose.
///
/// Returns the kick that was applied, or `None` when every pose collides, in
/// which case `piece` is exactly as it was before the call.
pub fn rotate_with_kicks(board: &Board, piece: &mut Piece) -> Option<(i32, i32)> {
    let original = *piece;
    piece.rotate_clockwise();

    for &(dx, dy) in KICK_SEQUENCE.iter() {
        if !collides(board, piece, dx, dy) {
            piece.x += dx;
            piece.y += dy;
            return Some((dx, dy));
        }
    }

    *piece = original;
    None
}

/// Rotate with kicks, reporting only whether it worked.
pub fn try_rotate(board: &Board, piece: &mut Piece) -> bool {
    rotate_with_kicks(board, piece).is_some()
}

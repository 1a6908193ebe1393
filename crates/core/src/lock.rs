//! Locking and line clearing.

use crate::board::Board;
use crate::piece::Piece;
use crate::scoring::line_clear_score;

/// Write the piece's color into every board cell it covers.
///
/// The caller has already checked the pose with the collision resolver.
/// Cells still above the board (y < 0) have nowhere to go and are dropped.
/// Returns how many cells were written.
pub fn merge(board: &mut Board, piece: &Piece) -> usize {
    let mut written = 0;
    for (x, y) in piece.cells() {
        if board.set_cell(x, y, piece.color) {
            written += 1;
        }
    }
    written
}

/// Remove full rows and add their score.
///
/// Returns `(rows_cleared, new_score)`. The board keeps its dimensions; the
/// surviving rows keep their order and sink to the bottom.
pub fn clear_lines(board: &mut Board, score: u32) -> (u32, u32) {
    let cleared = board.clear_full_rows() as u32;
    (cleared, score.saturating_add(line_clear_score(cleared)))
}

//! Read-only view of a session for renderers.

use crate::board::Board;
use crate::piece::Piece;
use crate::session::Phase;

/// Everything a renderer needs for one frame.
///
/// `shadow_y` is the row the active piece would land on after a hard drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Piece,
    pub shadow_y: i32,
    pub next: Piece,
    pub held: Option<Piece>,
    pub can_hold: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// The active piece moved to its landing row.
    pub fn shadow(&self) -> Piece {
        Piece {
            y: self.shadow_y,
            ..self.active
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

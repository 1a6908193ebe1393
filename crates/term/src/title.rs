//! Title screen with pieces drifting down behind the menu.

use crate::core::{Piece, SimpleRng};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{GameView, Viewport, PLAYFIELD_BG};
use crate::types::PieceKind;

/// Background pieces on the title screen.
pub const BACKGROUND_PIECES: usize = 15;

/// Fall speed in hundredths of a row per frame (0.05 rows).
const FALL_PER_FRAME: i32 = 5;

const CONTROLS: [&str; 8] = [
    "Controls:",
    "Left/Right : Move",
    "Up : Rotate",
    "Down : Soft drop",
    "Space : Hard drop",
    "C : Hold",
    "R : Retry",
    "Q / Esc : Quit",
];

#[derive(Debug, Clone, Copy)]
struct Drifter {
    piece: Piece,
    /// Vertical position in hundredths of a row.
    y_centi: i32,
}

/// Animated title screen.
#[derive(Debug, Clone)]
pub struct TitleScreen {
    columns: u8,
    rows: u8,
    rng: SimpleRng,
    drifters: Vec<Drifter>,
    view: GameView,
}

impl TitleScreen {
    pub fn new(columns: u8, rows: u8, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let drifters = (0..BACKGROUND_PIECES)
            .map(|_| {
                let mut piece = random_piece(&mut rng, columns);
                // Start anywhere from a full board above the top down to row 0.
                let start_row = rng.next_range(rows as u32 + 1) as i32 - rows as i32;
                piece.y = start_row;
                Drifter {
                    piece,
                    y_centi: start_row * 100,
                }
            })
            .collect();
        Self {
            columns,
            rows,
            rng,
            drifters,
            view: GameView::default(),
        }
    }

    /// Advance the background by one frame.
    pub fn advance(&mut self) {
        for d in self.drifters.iter_mut() {
            d.y_centi += FALL_PER_FRAME;
            if d.y_centi > self.rows as i32 * 100 {
                d.piece = random_piece(&mut self.rng, self.columns);
                d.y_centi = -(d.piece.shape.rows() as i32) * 100;
            }
            d.piece.y = d.y_centi.div_euclid(100);
        }
    }

    /// Current background pieces, with their rows rounded down.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.drifters.iter().map(|d| &d.piece)
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PLAYFIELD_BG));

        let frame = self.view.frame_for(self.columns, self.rows, viewport);
        for d in &self.drifters {
            for (x, y) in d.piece.cells() {
                self.view.draw_block(fb, frame, x, y, d.piece.color);
            }
        }

        let title = CellStyle::new(Rgb::new(255, 255, 255), PLAYFIELD_BG).bold();
        let text = CellStyle::new(Rgb::new(200, 200, 200), PLAYFIELD_BG);
        let w = viewport.width;
        let mut y = viewport.height / 4;

        fb.put_str_centered(0, w, y, "B L O C K F A L L", title);
        y = y.saturating_add(2);
        fb.put_str_centered(0, w, y, "press Enter to play", text.bold());
        y = y.saturating_add(2);
        for line in CONTROLS {
            fb.put_str_centered(0, w, y, line, text);
            y = y.saturating_add(1);
        }
    }
}

fn random_piece(rng: &mut SimpleRng, columns: u8) -> Piece {
    let kind = PieceKind::from_index(rng.next_range(PieceKind::ALL.len() as u32) as usize);
    let mut piece = Piece::new(kind, columns);
    let span = (columns as i32 - piece.shape.cols() as i32).max(0) as u32;
    piece.x = rng.next_range(span + 1) as i32;
    piece
}

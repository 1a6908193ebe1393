//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

pub(crate) const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const DIM_TEXT: Rgb = Rgb::new(110, 110, 120);

/// Rows reserved for a HOLD or NEXT preview (tallest shape is a standing I).
const PREVIEW_ROWS: u16 = 4;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the bordered playfield sits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl BoardFrame {
    /// Terminal column of the first interior cell.
    pub fn inner_x(&self) -> u16 {
        self.x + 1
    }

    pub fn inner_y(&self) -> u16 {
        self.y + 1
    }
}

/// Terminal view of a running game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn cell_h(&self) -> u16 {
        self.cell_h
    }

    /// Centered frame for a `columns` x `rows` board.
    pub fn frame_for(&self, columns: u8, rows: u8, viewport: Viewport) -> BoardFrame {
        let w = (columns as u16) * self.cell_w + 2;
        let h = (rows as u16) * self.cell_h + 2;
        BoardFrame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only reallocated
    /// when the terminal grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, SCREEN_BG));

        let columns = snap.board.width();
        let rows = snap.board.height();
        let frame = self.frame_for(columns, rows, viewport);

        fb.fill_rect(
            frame.inner_x(),
            frame.inner_y(),
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(TEXT, PLAYFIELD_BG),
        );
        fb.draw_border(frame.x, frame.y, frame.w, frame.h, CellStyle::new(TEXT, SCREEN_BG));

        // Locked cells, with a faint dot on empty ones.
        for (y, row) in snap.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, frame, x as i32, y as i32, *color),
                    None => self.fill_cell(
                        fb,
                        frame,
                        x as i32,
                        y as i32,
                        '·',
                        CellStyle::new(Rgb::new(70, 70, 90), PLAYFIELD_BG).dim(),
                    ),
                }
            }
        }

        if snap.playable() {
            self.draw_shadow(fb, frame, snap);
            for (x, y) in snap.active.cells() {
                self.draw_block(fb, frame, x, y, snap.active.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if !snap.playable() {
            self.draw_game_over(fb, frame, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Outline where the active piece would land.
    fn draw_shadow(&self, fb: &mut FrameBuffer, frame: BoardFrame, snap: &GameSnapshot) {
        let active = snap.active.cells();
        let style = CellStyle::new(Rgb::from(snap.active.color), PLAYFIELD_BG).dim();
        for (x, y) in snap.shadow().cells() {
            if !active.contains(&(x, y)) {
                self.fill_cell(fb, frame, x, y, '░', style);
            }
        }
    }

    /// A filled block: full color on the left, a darker bevel on the right.
    pub(crate) fn draw_block(&self, fb: &mut FrameBuffer, frame: BoardFrame, x: i32, y: i32, color: Color) {
        let Some((px, py)) = self.cell_origin(frame, x, y) else {
            return;
        };
        let face = Rgb::from(color);
        let face_style = CellStyle::new(face, PLAYFIELD_BG).bold();
        let edge_style = CellStyle::new(face.scaled(3, 5), PLAYFIELD_BG);
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let style = if dx + 1 == self.cell_w && self.cell_w > 1 {
                    edge_style
                } else {
                    face_style
                };
                fb.put_char(px + dx, py + dy, '█', style);
            }
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: BoardFrame, x: i32, y: i32, ch: char, style: CellStyle) {
        if let Some((px, py)) = self.cell_origin(frame, x, y) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    /// Terminal position of board cell (x, y); `None` above or outside the
    /// board.
    fn cell_origin(&self, frame: BoardFrame, x: i32, y: i32) -> Option<(u16, u16)> {
        let columns = ((frame.w - 2) / self.cell_w) as i32;
        let rows = ((frame.h - 2) / self.cell_h) as i32;
        if x < 0 || y < 0 || x >= columns || y >= rows {
            return None;
        }
        Some((
            frame.inner_x() + (x as u16) * self.cell_w,
            frame.inner_y() + (y as u16) * self.cell_h,
        ))
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: BoardFrame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::new(TEXT, SCREEN_BG).bold();
        let value = CellStyle::new(TEXT, SCREEN_BG);

        let mut y = frame.y;
        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "HOLD", label);
        match snap.held {
            Some(held) => self.draw_preview(fb, panel_x, y + 1, &held, !snap.can_hold),
            None => fb.put_str(panel_x, y + 1, "-", CellStyle::new(DIM_TEXT, SCREEN_BG)),
        }
        y = y.saturating_add(PREVIEW_ROWS + 2);

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, &snap.next, false);
    }

    /// Piece matrix at terminal position (x, y), ignoring its board position.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece, dimmed: bool) {
        let mut face = Rgb::from(piece.color);
        if dimmed {
            face = face.scaled(2, 5);
        }
        let style = CellStyle::new(face, SCREEN_BG);
        for (col, row) in piece.shape.filled_cells() {
            let px = x + (col as u16) * self.cell_w;
            fb.fill_rect(px, y + row as u16, self.cell_w, 1, '█', style);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, frame: BoardFrame, score: u32) {
        let inner_w = frame.w - 2;
        let box_h = 5;
        let top = frame.inner_y() + (frame.h - 2).saturating_sub(box_h) / 2;
        let panel = CellStyle::new(TEXT, SCREEN_BG);

        fb.fill_rect(frame.inner_x(), top, inner_w, box_h, ' ', panel);
        fb.put_str_centered(frame.inner_x(), inner_w, top, "GAME OVER", panel.bold());

        let score_w = 6 + digit_count(score);
        let score_x = frame.inner_x() + inner_w.saturating_sub(score_w) / 2;
        fb.put_str(score_x, top + 2, "SCORE ", panel);
        fb.put_u32(score_x + 6, top + 2, score, panel.bold());

        fb.put_str_centered(frame.inner_x(), inner_w, top + 4, "[R] Retry  [Q] Quit", panel);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

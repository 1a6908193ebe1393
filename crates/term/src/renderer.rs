//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs of cells
//! are written. A size change forces a full redraw.

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::debug;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf().context("failed to set up terminal")?;
        self.last = None;
        Ok(())
    }

    /// Undo everything [`enter`](Self::enter) did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf().context("failed to restore terminal")?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw, e.g. after a resize event.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale content from an earlier frame; callers are
    /// expected to redraw it completely before the next call.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            _ => {
                debug!("full redraw at {}x{}", fb.width(), fb.height());
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf().context("failed to write frame")?;
        Ok(())
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_glyphs(out, fb.row(y), &mut current)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both frames must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<CellStyle> = None;
    for y in 0..next.height() {
        let new_row = next.row(y);
        for (start, len) in changed_runs(prev.row(y), new_row) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            write_glyphs(out, &new_row[start..start + len], &mut current)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn write_glyphs(out: &mut Vec<u8>, glyphs: &[Glyph], current: &mut Option<CellStyle>) -> Result<()> {
    for glyph in glyphs {
        if *current != Some(glyph.style) {
            apply_style_into(out, glyph.style)?;
            *current = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Maximal runs of differing cells in one row, as (start, len).
fn changed_runs<'a>(old: &'a [Glyph], new: &'a [Glyph]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && old.get(x) == Some(&new[x]) {
            x += 1;
        }
        if x >= new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && old.get(x) != Some(&new[x]) {
            x += 1;
        }
        Some((start, x - start))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(ch: char) -> Glyph {
        Glyph {
            ch,
            style: CellStyle::default(),
        }
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(6, 1);
        let mut b = FrameBuffer::new(6, 1);
        for x in 1..=2 {
            b.set(x, 0, glyph('X'));
        }
        b.set(4, 0, glyph('Y'));

        let runs: Vec<_> = changed_runs(a.row(0), b.row(0)).collect();
        assert_eq!(runs, vec![(1, 2), (4, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_text() {
        let a = FrameBuffer::new(4, 2);
        let b = a.clone();
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains(' '));
    }

    #[test]
    fn diff_writes_only_changed_glyphs() {
        let a = FrameBuffer::new(8, 2);
        let mut b = a.clone();
        b.put_str(2, 1, "hi", CellStyle::default());

        let mut diff = Vec::new();
        encode_diff_into(&a, &b, &mut diff).unwrap();
        let mut full = Vec::new();
        encode_full_into(&b, &mut full).unwrap();

        assert!(String::from_utf8_lossy(&diff).contains("hi"));
        assert!(diff.len() < full.len());
    }

    #[test]
    fn style_conversion() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: 220,
                g: 220,
                b: 220
            }
        );
    }
}

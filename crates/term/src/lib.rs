//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes it to the terminal with
//! crossterm, writing only what changed since the previous frame.
//!
//! Board cells are drawn two terminal columns wide to compensate for the
//! aspect ratio of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod title;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{BoardFrame, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use title::TitleScreen;

//! Shared types and rule constants.
//!
//! Everything here is plain data with no dependencies so the simulation core,
//! the input mapper and the terminal front-end can agree on one vocabulary.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Coordinates are
//! `(column, row)` with row 0 at the top. Sessions may be configured with other
//! dimensions; these constants are only the defaults.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Fixed loop interval (~30 ticks per second) |
//! | `BASE_DROP_MS` | 500 | Gravity interval at score 0 |
//! | `MIN_DROP_MS` | 100 | Fastest gravity interval |
//! | `DROP_STEP_MS` | 50 | Interval reduction per `SCORE_PER_LEVEL` points |
//! | `LOCK_DELAY_MS` | 500 | Grace period after landing before a piece locks |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! assert_eq!(DEFAULT_COLUMNS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Default board width in cells.
pub const DEFAULT_COLUMNS: u8 = 10;

/// Default board height in cells.
pub const DEFAULT_ROWS: u8 = 20;

/// Fixed loop interval in milliseconds (~30 ticks per second).
pub const TICK_MS: u32 = 33;

/// Gravity interval at score 0.
pub const BASE_DROP_MS: u32 = 500;

/// Gravity never gets faster than this.
pub const MIN_DROP_MS: u32 = 100;

/// Gravity speed-up for every `SCORE_PER_LEVEL` points.
pub const DROP_STEP_MS: u32 = 50;

/// Grace period after landing before the piece is merged into the board.
pub const LOCK_DELAY_MS: u32 = 500;

/// Points needed to advance one level.
pub const SCORE_PER_LEVEL: u32 = 1000;

/// Highest level shown to the player.
pub const MAX_LEVEL: u32 = 9;

/// Points per cleared line. Scoring is linear: four lines are worth exactly
/// four single clears.
pub const LINE_SCORE: u32 = 100;

/// Largest side of any piece shape matrix.
pub const MAX_SHAPE_SIDE: usize = 4;


/// The seven tetromino archetypes.
///
/// Each kind has a fixed spawn shape and a fixed color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple
/// - **S**: Green
/// - **Z**: Red
/// - **J**: Blue
/// - **L**: Orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in archetype order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Archetype by index (wraps modulo 7).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// The color every piece of this kind carries.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Purple,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Red,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
        }
    }
}

/// Color identifier stored in locked board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl Color {
    /// 24-bit RGB value used by renderers.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (33, 218, 218),
            Color::Yellow => (218, 218, 33),
            Color::Purple => (128, 0, 128),
            Color::Green => (33, 218, 33),
            Color::Red => (218, 33, 33),
            Color::Blue => (33, 33, 218),
            Color::Orange => (218, 156, 33),
        }
    }
}

/// A cell on the board: `None` is empty, `Some(color)` holds a locked block.
pub type Cell = Option<Color>;

/// Discrete player commands.
///
/// Commands are edge-triggered: one per key-down event, never repeated while a
/// key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down
    SoftDrop,
    /// Rotate 90° clockwise with wall kicks
    Rotate,
    /// Drop to the lowest reachable row and lock immediately
    HardDrop,
    /// Swap the active piece with the held one (once per lock cycle)
    Hold,
    /// Leave the game
    Quit,
    /// Start a fresh session after game over
    Retry,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "hold" => Some(Command::Hold),
            "quit" => Some(Command::Quit),
            "retry" => Some(Command::Retry),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::Hold => "hold",
            Command::Quit => "quit",
            Command::Retry => "retry",
        }
    }

    /// Commands that still mean something once the session is over.
    pub fn is_meta(&self) -> bool {
        matches!(self, Command::Quit | Command::Retry)
    }
}

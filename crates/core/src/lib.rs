//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and none of its I/O. Renderers and
//! input layers sit on top of it and talk to it through
//! [`GameSession`](session::GameSession) and [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: the grid of locked cells and full-row compaction
//! - [`shape`] / [`piece`]: piece matrices, clockwise rotation and spawn poses
//! - [`collision`]: the single collision test and drop distance
//! - [`rotation`]: rotation with a fixed wall-kick sequence
//! - [`lock`]: merging a piece into the board and clearing lines
//! - [`scoring`]: line scores, drop interval and display level
//! - [`rng`]: seeded piece generation
//! - [`config`]: validated board size and timings
//! - [`session`]: the tick-driven state machine
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random from the seven kinds.
//! - Each cleared row is worth 100 points, regardless of how many clear at once.
//! - Gravity starts at 500ms per row and speeds up by 50ms per 1000 points, down
//!   to 100ms.
//! - A grounded piece locks after 500ms. Moving or rotating it renews the delay.
//! - Hold is allowed once per locked piece.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameSession};
//! use blockfall_core::types::Command;
//!
//! let mut game = GameSession::new(GameConfig::default(), 12345).unwrap();
//! game.step(33, &[Command::MoveRight, Command::Rotate]);
//! game.step(33, &[Command::HardDrop]);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! The session has no clock of its own. Call
//! [`GameSession::step`](session::GameSession::step) once per frame with the
//! milliseconds elapsed since the previous call; the binary uses a 33ms tick.

pub mod board;
pub mod collision;
pub mod config;
pub mod lock;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{collides, drop_distance, landing_row};
pub use config::{ConfigError, GameConfig};
pub use lock::{clear_lines, merge};
pub use piece::{spawn_shape, Piece};
pub use rng::{PieceGenerator, SimpleRng};
pub use rotation::{rotate_with_kicks, try_rotate};
pub use scoring::{drop_interval_ms, level_for_score, line_clear_score};
pub use session::{GameSession, LockEvent, Phase, StepOutcome};
pub use shape::Shape;
pub use snapshot::GameSnapshot;

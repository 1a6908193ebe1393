//! Game session - the state machine that drives a single game
//!
//! A session owns the board, the active/next/held pieces, the drop and lock
//! timers and the score. Each call to [`GameSession::step`] runs one tick:
//!
//! 1. **Landing**: if the active piece cannot move down it enters (or stays in)
//!    the locking phase and its lock timer advances; otherwise locking is
//!    cancelled.
//! 2. **Commands**: queued player commands apply in arrival order.
//! 3. **Gravity**: the drop timer advances; once past the drop interval the
//!    piece falls one row if it can.
//! 4. **Lock resolution**: a piece that stayed grounded for the full lock
//!    delay is merged, full lines are cleared and the next piece spawns. A
//!    spawn that collides ends the game.
//!
//! Accepted horizontal moves and rotations renew the lock delay every time,
//! without limit.

use log::{debug, info, trace};

use crate::board::Board;
use crate::collision::{collides, drop_distance, landing_row};
use crate::config::{ConfigError, GameConfig};
use crate::lock::{clear_lines, merge};
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::rotation::try_rotate;
use crate::scoring::level_for_score;
use crate::snapshot::GameSnapshot;
use crate::types::Command;

/// Where the session is in its lifecycle.
///
/// Merging, clearing and spawning happen atomically inside one tick, so the
/// "cleared" step between `Locking` and the next `Active` is never observable
/// as a phase; [`GameSession::take_last_event`] reports it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Piece is falling and controllable.
    Active,
    /// Piece has landed and the lock delay is running.
    Locking,
    /// A new piece collided on spawn. Only retry and quit are accepted.
    GameOver,
}

/// Emitted every time a piece is merged into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub hard_drop: bool,
    /// The piece spawned after this lock collided.
    pub game_over: bool,
}

/// Summary of one [`GameSession::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub commands_accepted: u32,
    pub gravity_moved: bool,
    pub pieces_locked: u32,
    pub lines_cleared: u32,
    pub game_over: bool,
    pub retried: bool,
    pub quit: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    active: Piece,
    next: Piece,
    held: Option<Piece>,
    can_hold: bool,
    generator: PieceGenerator,
    drop_timer_ms: u32,
    lock_timer_ms: u32,
    lock_delay_active: bool,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    /// Increments on every retry.
    episode_id: u32,
    last_event: Option<LockEvent>,
    game_over: bool,
    quit_requested: bool,
}

impl GameSession {
    /// Start a session. Fails if `config` is malformed.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config, PieceGenerator::new(seed), 0))
    }

    fn fresh(config: GameConfig, mut generator: PieceGenerator, episode_id: u32) -> Self {
        let active = Piece::new(generator.next_kind(), config.columns);
        let next = Piece::new(generator.next_kind(), config.columns);
        Self {
            config,
            board: Board::new(config.columns, config.rows),
            active,
            next,
            held: None,
            can_hold: true,
            generator,
            drop_timer_ms: 0,
            lock_timer_ms: 0,
            lock_delay_active: false,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            episode_id,
            last_event: None,
            game_over: false,
            quit_requested: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up scenarios in tests and tools.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Replace the active piece, e.g. to stage a scenario. The caller is
    /// responsible for the pose being collision-free.
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    /// Total rows cleared this session.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.lock_delay_active {
            Phase::Locking
        } else {
            Phase::Active
        }
    }

    /// Current gravity interval.
    pub fn drop_interval_ms(&self) -> u32 {
        self.config.drop_interval_ms(self.score)
    }

    /// Row the active piece would land on.
    pub fn shadow_y(&self) -> i32 {
        landing_row(&self.board, &self.active)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active = self.active;
        out.shadow_y = self.shadow_y();
        out.next = self.next;
        out.held = self.held;
        out.can_hold = self.can_hold;
        out.score = self.score;
        out.level = self.level();
        out.lines = self.lines;
        out.phase = self.phase();
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: self.active,
            shadow_y: self.shadow_y(),
            next: self.next,
            held: self.held,
            can_hold: self.can_hold,
            score: self.score,
            level: self.level(),
            lines: self.lines,
            phase: self.phase(),
            game_over: self.game_over,
            episode_id: self.episode_id,
        }
    }

    /// Advance the session by `elapsed_ms` with the commands queued since the
    /// previous tick.
    pub fn step(&mut self, elapsed_ms: u32, commands: &[Command]) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let locked_before = self.pieces_locked;
        let lines_before = self.lines;
        let episode_before = self.episode_id;

        if !self.game_over && !self.quit_requested {
            self.update_landing(elapsed_ms);
        }

        for &command in commands {
            if self.quit_requested {
                break;
            }
            if self.game_over && !command.is_meta() {
                continue;
            }
            if self.apply_command(command) {
                outcome.commands_accepted += 1;
            }
        }

        let interrupted = self.game_over || self.quit_requested || self.episode_id != episode_before;
        if !interrupted {
            outcome.gravity_moved = self.apply_gravity(elapsed_ms);
            self.resolve_lock();
        }

        // A retry starts a new episode whose counters began at zero.
        outcome.retried = self.episode_id != episode_before;
        if !outcome.retried {
            outcome.pieces_locked = self.pieces_locked - locked_before;
            outcome.lines_cleared = self.lines - lines_before;
        }
        outcome.game_over = self.game_over;
        outcome.quit = self.quit_requested;
        outcome
    }

    /// Apply one command immediately. Returns whether it was accepted.
    ///
    /// After game over only [`Command::Retry`] and [`Command::Quit`] do
    /// anything.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => {
                self.quit_requested = true;
                true
            }
            Command::Retry => self.retry(),
            _ if self.game_over => false,
            Command::MoveLeft => self.try_shift(-1),
            Command::MoveRight => self.try_shift(1),
            Command::SoftDrop => self.soft_drop(),
            Command::Rotate => self.rotate(),
            Command::Hold => self.hold(),
            Command::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    fn update_landing(&mut self, elapsed_ms: u32) {
        if collides(&self.board, &self.active, 0, 1) {
            if self.lock_delay_active {
                self.lock_timer_ms = self.lock_timer_ms.saturating_add(elapsed_ms);
            } else {
                self.lock_delay_active = true;
                self.lock_timer_ms = 0;
            }
        } else {
            self.reset_lock_delay();
        }
    }

    fn reset_lock_delay(&mut self) {
        self.lock_delay_active = false;
        self.lock_timer_ms = 0;
    }

    /// A successful move or rotation while locking renews the grace period.
    fn renew_lock_delay(&mut self) {
        if self.lock_delay_active {
            self.lock_timer_ms = 0;
        }
    }

    fn try_shift(&mut self, dx: i32) -> bool {
        if collides(&self.board, &self.active, dx, 0) {
            return false;
        }
        self.active.x += dx;
        self.renew_lock_delay();
        true
    }

    fn soft_drop(&mut self) -> bool {
        if collides(&self.board, &self.active, 0, 1) {
            return false;
        }
        self.active.y += 1;
        true
    }

    fn rotate(&mut self) -> bool {
        if !try_rotate(&self.board, &mut self.active) {
            return false;
        }
        self.renew_lock_delay();
        true
    }

    fn hold(&mut self) -> bool {
        if !self.can_hold {
            trace!("hold rejected: already used this piece");
            return false;
        }

        let mut outgoing = self.active;
        outgoing.respawn(self.config.columns);

        self.active = match self.held.take() {
            Some(held) => held,
            None => self.promote_next(),
        };
        self.active.respawn(self.config.columns);
        self.held = Some(outgoing);
        self.can_hold = false;
        self.reset_lock_delay();

        if collides(&self.board, &self.active, 0, 0) {
            self.enter_game_over();
        }
        true
    }

    fn hard_drop(&mut self) {
        self.active.y += drop_distance(&self.board, &self.active);
        self.lock_active(true);
    }

    fn apply_gravity(&mut self, elapsed_ms: u32) -> bool {
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.drop_interval_ms() {
            return false;
        }
        self.drop_timer_ms = 0;
        // A blocked fall is left to the landing check on the next tick.
        self.soft_drop()
    }

    fn resolve_lock(&mut self) {
        if self.lock_delay_active && self.lock_timer_ms >= self.config.lock_delay_ms {
            self.lock_active(false);
        }
    }

    /// Move next into the active slot and draw a fresh next piece.
    fn promote_next(&mut self) -> Piece {
        let fresh = Piece::new(self.generator.next_kind(), self.config.columns);
        std::mem::replace(&mut self.next, fresh)
    }

    /// Merge, clear lines, spawn the next piece and check for game over.
    fn lock_active(&mut self, hard_drop: bool) {
        merge(&mut self.board, &self.active);
        let score_before = self.score;
        let (cleared, score) = clear_lines(&mut self.board, self.score);
        self.score = score;
        self.lines = self.lines.saturating_add(cleared);
        self.pieces_locked = self.pieces_locked.saturating_add(1);

        self.active = self.promote_next();
        self.can_hold = true;
        self.reset_lock_delay();

        let game_over = collides(&self.board, &self.active, 0, 0);
        debug!(
            "piece locked: hard_drop={} lines={} score={}",
            hard_drop, cleared, self.score
        );
        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            score_delta: self.score - score_before,
            hard_drop,
            game_over,
        });
        if game_over {
            self.enter_game_over();
        }
    }

    fn enter_game_over(&mut self) {
        self.game_over = true;
        self.reset_lock_delay();
        info!(
            "game over: score={} lines={} pieces={}",
            self.score, self.lines, self.pieces_locked
        );
    }

    /// Replace this session with a fresh one. Only valid after game over.
    fn retry(&mut self) -> bool {
        if !self.game_over {
            return false;
        }
        let episode_id = self.episode_id.wrapping_add(1);
        *self = Self::fresh(self.config, self.generator.clone(), episode_id);
        info!("retry: starting episode {}", episode_id);
        true
    }
}

//! Blockfall terminal runner (default binary).
//!
//! Shows the title screen, then runs the game at a fixed tick using crossterm
//! for input and the framebuffer renderer for output.
//!
//! # Environment Variables
//!
//! - `BLOCKFALL_COLUMNS`, `BLOCKFALL_ROWS`, `BLOCKFALL_LOCK_DELAY_MS`: see
//!   [`GameConfig::from_env`]
//! - `BLOCKFALL_SEED`: piece sequence seed (default: derived from the clock)
//! - `BLOCKFALL_LOG_PATH`: write logs to this file instead of stderr
//! - `RUST_LOG`: log filter (default: `warn`)

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use env_logger::{Env, Target};
use log::{debug, info};

use blockfall::core::{GameConfig, GameSession};
use blockfall::input::{is_start_key, map_key, CommandQueue};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, TitleScreen, Viewport};
use blockfall::types::{Command, TICK_MS};

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env().context("invalid game configuration")?;
    let seed = seed_from_env()?;
    info!(
        "starting: board {}x{}, seed {}",
        config.columns, config.rows, seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log::warn!("terminal restore failed: {e:#}");
    }
    result
}

fn init_logging() -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = std::env::var_os("BLOCKFALL_LOG_PATH") {
        let file = File::create(&path)
            .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn seed_from_env() -> Result<u32> {
    match std::env::var("BLOCKFALL_SEED") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid BLOCKFALL_SEED {raw:?}")),
        Err(_) => {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1);
            Ok(nanos)
        }
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u32) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    if !title_screen(term, &mut fb, config, seed)? {
        return Ok(());
    }
    play(term, &mut fb, config, seed)
}

/// Returns false if the player quit from the title screen.
fn title_screen(term: &mut TerminalRenderer, fb: &mut FrameBuffer, config: GameConfig, seed: u32) -> Result<bool> {
    let mut title = TitleScreen::new(config.columns, config.rows, seed.rotate_left(16));
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        title.render_into(viewport(), fb);
        term.draw_swap(fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) if is_start_key(key) => return Ok(true),
                Event::Key(key) if map_key(key) == Some(Command::Quit) => return Ok(false),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            title.advance();
        }
    }
}

fn play(term: &mut TerminalRenderer, fb: &mut FrameBuffer, config: GameConfig, seed: u32) -> Result<()> {
    let mut session = GameSession::new(config, seed)?;
    let mut snap = session.snapshot();
    let view = GameView::default();
    let mut queue = CommandQueue::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport(), fb);
        term.draw_swap(fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) => {
                    if let Some(command) = map_key(key) {
                        if !queue.push(command) {
                            debug!("command queue full, dropped {}", command.as_str());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);

            let outcome = session.step(elapsed_ms, queue.as_slice());
            queue.clear();

            if let Some(event) = session.take_last_event() {
                debug!(
                    "lock: lines={} +{} hard_drop={}",
                    event.lines_cleared, event.score_delta, event.hard_drop
                );
            }
            if outcome.quit {
                info!(
                    "quit: score={} lines={} episode={}",
                    session.score(),
                    session.lines(),
                    session.episode_id()
                );
                return Ok(());
            }
        }
    }
}

//! Terminal tile-matching runner (default binary).
//!
//! Drives the session at a fixed frame cadence: drain input, evaluate the
//! clock, snapshot and draw. Uses crossterm for input and the framebuffer
//! renderer from `tui_match::term`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::terminal;
use log::info;

use tui_match::core::{GameConfig, GameSnapshot, Session};
use tui_match::input::InputQueue;
use tui_match::run_config::RunConfig;
use tui_match::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const TITLE: &str = "MEOW~ MEOW~ MEOW~";

fn main() -> Result<()> {
    let run_config = RunConfig::from_env();
    run_config.init_logging()?;

    let seed = run_config.seed_or_clock();
    let session = Session::new(GameConfig::default(), seed, 0)
        .context("invalid game configuration")?;
    info!("starting session seed={seed}");

    let mut term = TerminalRenderer::new();
    term.enter(TITLE)?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = GameView::default();
    let mut queue = InputQueue::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(session.config().tick_ms());
    let start = Instant::now();
    let mut next_frame = start + tick;
    let now_ms = || u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    while session.running() {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let layout = *session.layout();

        // Input with timeout until the next frame.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        queue.pump(timeout, |col, row| view.to_logical(&layout, viewport, col, row))?;
        if queue.take_resized() {
            term.invalidate();
        }

        let now = now_ms();
        for event in queue.drain() {
            session.handle_event(event, now)?;
        }
        session.update(now);

        let instant = Instant::now();
        if instant >= next_frame {
            next_frame = instant + tick;
        }

        session.snapshot_into(now, &mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;
    }

    info!("session closed score={}", session.score());
    Ok(())
}

//! Terminal blockfall runner.
//!
//! Drives the simulation at 60 Hz: poll input until the next frame is due,
//! decode key events into actions, advance the state, then render the
//! frame's snapshot. The core reads time as monotonic seconds measured from
//! process start.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let clock = Instant::now();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameState::new(seed);

    let view = GameView::default();
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Input, with a timeout that keeps the frame cadence.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    let now = clock.elapsed().as_secs_f64();
                    if !game.started() {
                        // Any of space/enter leaves the start screen.
                        if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                            game.start(now);
                        }
                    } else if let Some(action) = handle_key_event(key) {
                        game.apply(action, now);
                    }
                }
            }
        }

        // Frame tick: transitions, effects, particles, then the snapshot.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();

            let now = clock.elapsed().as_secs_f64();
            game.update(now);

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(&game.snapshot(now), Viewport::new(w, h));
            term.draw(&fb)?;
        }
    }
}

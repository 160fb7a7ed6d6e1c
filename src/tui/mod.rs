//! Terminal UI for tictac.
//!
//! The terminal is the game window: ratatui draws into the alternate screen
//! and crossterm delivers key and mouse events. The loop is single-threaded:
//! poll input, update the game, draw, repeat.

mod app;
mod board;
mod input;
mod ui;

pub use app::{App, Flow};
pub use board::BoardWidget;
pub use input::{Direction, EventSource, Input, TerminalEvents, move_cursor, translate};
pub use ui::{Screen, draw, layout};

use crate::config::Config;
use crate::font::Font;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// How long one poll waits for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture for the lifetime of the
/// value. Restores the terminal on drop.
pub struct TerminalSession {
    terminal: CrosstermTerminal,
}

impl TerminalSession {
    /// Takes over the terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = restore();
            return Err(e);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = restore();
                Err(e)
            }
        }
    }

    /// The ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

/// Runs the game until the player quits.
pub fn run(config: Config, font: Font) -> Result<()> {
    info!("Starting tictac");

    let mut session = TerminalSession::enter().context("Failed to initialize terminal")?;
    let mut app = App::new(config, font);
    let delay = app.config().result_delay();
    let terminal = session.terminal_mut();
    let mut events = TerminalEvents;

    while step(terminal, &mut app, &mut events, delay)? == Flow::Continue {}
    Ok(())
}

/// One pass of the event loop.
///
/// Draws a frame, then either holds a finished round on screen for `delay`
/// and starts the next one, or waits for and applies a single input.
#[instrument(skip_all)]
pub fn step<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut impl EventSource,
    delay: Duration,
) -> Result<Flow>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|frame| draw(frame, app))?;

    // The banner frame is on screen: hold it, then start the next round.
    if let Some(outcome) = app.pending_outcome() {
        debug!(%outcome, "Showing result");
        pause(events, delay)?;
        app.finish_round();
        return Ok(Flow::Continue);
    }

    let Some(event) = events.poll_event(POLL_INTERVAL)? else {
        return Ok(Flow::Continue);
    };
    match translate(event) {
        Some(input) => Ok(app.handle_input(input)),
        None => Ok(Flow::Continue),
    }
}

/// Blocks for `delay`, then discards input that arrived meanwhile.
fn pause(events: &mut impl EventSource, delay: Duration) -> io::Result<()> {
    std::thread::sleep(delay);
    let mut discarded = 0usize;
    while events.poll_event(Duration::ZERO)?.is_some() {
        discarded += 1;
    }
    if discarded > 0 {
        debug!(discarded, "Dropped input received during result display");
    }
    Ok(())
}

//! Terminal ownership and the event loop.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{debug, info, instrument, warn};

use crate::config::TuiConfig;
use crate::intent::intent_from_key;
use crate::session::{Flow, Session};
use crate::ui;

/// Holds the terminal in raw mode on the alternate screen. Restores it on
/// drop.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Switches the terminal into game mode.
    #[instrument]
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let terminal = match open_screen(io::stdout(), &mut io::stdout()) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };
        debug!("Terminal entered raw mode");
        Ok(Self { terminal })
    }

    /// Returns the wrapped terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = close_screen(self.terminal.backend_mut()) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Enters the alternate screen on `writer` and wraps it in a terminal.
///
/// Any failure leaves the alternate screen again through `rollback`.
fn open_screen<W: Write, R: Write>(
    mut writer: W,
    rollback: &mut R,
) -> io::Result<Terminal<CrosstermBackend<W>>> {
    if let Err(e) = execute!(writer, EnterAlternateScreen, Hide) {
        let _ = close_screen(rollback);
        return Err(e);
    }
    match Terminal::new(CrosstermBackend::new(writer)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = close_screen(rollback);
            Err(e)
        }
    }
}

fn close_screen<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, LeaveAlternateScreen, Show)
}

/// Runs the game until a player quits or declines a rematch.
#[instrument(skip_all, fields(layout = %config.key_layout()))]
pub fn run(config: &TuiConfig) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut session = Session::new(*config.key_layout());
    let show_labels = *config.show_labels();

    info!("Starting game loop");
    loop {
        guard
            .terminal_mut()
            .draw(|frame| ui::draw(frame, &session, show_labels))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(intent) = intent_from_key(key, session.layout()) else {
                    continue;
                };
                debug!(?intent, "Intent received");
                if session.handle(intent) == Flow::Exit {
                    break;
                }
            }
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }

    let score = session.scoreboard();
    info!(
        x_wins = score.x_wins(),
        o_wins = score.o_wins(),
        draws = score.draws(),
        "Game finished"
    );
    Ok(())
}

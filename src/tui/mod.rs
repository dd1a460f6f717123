//! Terminal UI.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

const INPUT_POLL: Duration = Duration::from_millis(30);

/// Runs the interactive game until the user quits.
#[instrument(skip(config))]
pub async fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(&mut io::stdout());
            return Err(e);
        }
    };

    let res = run_app(&mut terminal, App::new(config)).await;

    restore_terminal(terminal.backend_mut());
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Leaves raw mode and the alternate screen, logging rather than failing.
fn restore_terminal(out: &mut impl io::Write) {
    if let Err(e) = disable_raw_mode() {
        error!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen) {
        error!(error = %e, "Failed to leave alternate screen");
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    while !app.should_quit() {
        let snapshot = app.snapshot();
        let cursor = app.cursor();
        terminal.draw(|frame| ui::draw(frame, &snapshot, cursor))?;

        tokio::select! {
            Some(event) = app.runtime_mut().next_timer_event() => {
                app.runtime_mut().dispatch(event);
            }
            _ = tokio::time::sleep(INPUT_POLL) => {
                while event::poll(Duration::ZERO)? {
                    if let TermEvent::Key(key) = event::read()?
                        && key.kind == KeyEventKind::Press
                    {
                        app.handle_key(key.code);
                    }
                }
            }
        }
    }
    Ok(())
}

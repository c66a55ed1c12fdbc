use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use tracing::{info, warn};

use seesaw::config::{Args, Config};
use seesaw::state::AppState;
use seesaw::widget::PlankWidget;
use seesaw::{PlankModel, Result};

/// Terminal size used when it cannot be queried
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Main function
fn main() -> Result<()> {
    let config = Config::from_args(Args::parse())?;
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }

    let model = PlankModel::new(config.weight_source()?);
    let mut state = AppState::new(model, config.debug);

    let (cols, rows) = termsize::get()
        .map(|size| (size.cols, size.rows))
        .unwrap_or(FALLBACK_SIZE);
    let mut widget = PlankWidget::new(cols, rows);
    info!(cols, rows, weights = ?config.weights, "starting seesaw");

    let mut stdout = io::stdout();
    let result = TerminalGuard::enter(&mut stdout)
        .and_then(|_guard| run(&mut stdout, &mut widget, &mut state));

    info!(objects = state.model.objects().len(), "seesaw closed");
    result
}

/// Raw mode, alternate screen and mouse capture, undone on drop
struct TerminalGuard;

impl TerminalGuard {
    /// Switches the terminal into UI mode. Whatever was already switched is
    /// restored if a later step fails.
    fn enter<W: Write>(out: &mut W) -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            Hide
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(error) = restore_terminal(&mut io::stdout(), disable_raw_mode) {
            warn!(%error, "failed to restore the terminal");
        }
    }
}

/// Leaves the alternate screen, then raw mode. Both steps always run; the
/// first error is returned.
fn restore_terminal<W, F>(out: &mut W, leave_raw_mode: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let screen = execute!(
        out,
        Show,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let raw = leave_raw_mode();
    screen.and(raw)
}

/// Paint, then handle the next event, until the user quits
fn run<W: Write>(out: &mut W, widget: &mut PlankWidget, state: &mut AppState) -> Result<()> {
    while !state.quit {
        widget.paint(state).render(out)?;
        let event = event::read()?;
        widget.event(&event, state)?;
    }
    Ok(())
}

/// Sends tracing output to `path`; the terminal itself belongs to the UI
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

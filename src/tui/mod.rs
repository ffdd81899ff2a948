//! TUI dashboard module using ratatui.
//!
//! Draws the same page as the HTML output in the terminal, with a key to
//! re-read the config file.

mod app;
mod dashboard;
mod event;
mod quota_panel;

pub use app::App;
pub use dashboard::DashboardView;
pub use event::{Event, EventHandler, KeyAction};
pub use quota_panel::QuotaPanel;

use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::error::Result;

/// Terminal type alias for the TUI backend.
pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Switch to raw mode on the alternate screen.
///
/// Also installs a panic hook that puts the terminal back before the panic
/// message is printed.
///
/// # Errors
///
/// Returns an error if raw mode or the alternate screen cannot be entered.
pub fn init_terminal() -> io::Result<Tui> {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        previous(info);
    }));

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Leave the alternate screen and show the cursor again.
///
/// # Errors
///
/// Returns an error if the terminal cannot be restored.
pub fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI dashboard until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run_dashboard(app: App) -> Result<()> {
    let mut terminal = init_terminal()?;

    let app_result = app.run(&mut terminal);

    if let Err(e) = restore_terminal(&mut terminal) {
        tracing::warn!(error = %e, "Failed to restore terminal");
    }

    app_result
}

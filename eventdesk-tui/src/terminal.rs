//! Terminal setup and teardown for the eventdesk TUI.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used throughout the TUI.
pub type DeskTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Sets up the terminal for TUI rendering.
///
/// Enables raw mode and enters the alternate screen. The returned
/// terminal should be passed to `restore_terminal` on exit.
pub fn setup_terminal() -> io::Result<DeskTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its normal state.
///
/// Disables raw mode, leaves the alternate screen and brings the
/// cursor back (the draw loop hides it). Should be called on exit and
/// in panic hooks to avoid leaving the terminal unusable.
pub fn restore_terminal(terminal: &mut DeskTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal on crash.
///
/// Should be called once at startup before entering the TUI.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Best-effort restoration, then let the original hook report
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);

        original_hook(panic_info);
    }));
}

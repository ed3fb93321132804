//! Raw-mode terminal lifecycle.
//!
//! The terminal is restored on drop and from the panic hook, so a render
//! failure never leaves the user's shell in raw mode.

use std::io::{self, Stdout};
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};


pub type Tui = Terminal<CrosstermBackend<Stdout>>;


static PANIC_HOOK: Once = Once::new();


/// Owns the terminal while the editor is on screen.
pub struct TerminalGuard {
    terminal: Tui,
}


impl TerminalGuard {
    /// Switch to raw mode and the alternate screen.
    pub fn enter() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        undo_on_err(execute!(stdout, EnterAlternateScreen), || {
            let _ = disable_raw_mode();
        })
        .context("Failed to enter alternate screen")?;

        let terminal = undo_on_err(Terminal::new(CrosstermBackend::new(stdout)), || {
            let _ = restore();
        })
        .context("Failed to initialise terminal")?;

        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}


impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}


/// Leave raw mode and the alternate screen.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}


/// Run `undo` if a setup step failed, then pass its result through.
fn undo_on_err<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}


fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore();
            tracing::error!(%info, "editor panicked");
            previous(info);
        }));
    });
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_failed_setup_step_is_undone() {
        let undone = Cell::new(false);
        let result: Result<(), io::Error> =
            undo_on_err(Err(io::Error::other("no tty")), || undone.set(true));

        assert!(result.is_err());
        assert!(undone.get());
    }

    #[test]
    fn test_successful_setup_step_is_kept() {
        let undone = Cell::new(false);
        let result: Result<u8, io::Error> = undo_on_err(Ok(7), || undone.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }
}

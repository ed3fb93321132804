//! Interactive grid editor command.

use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use crate::config::{get_export_dir, EVENT_POLL_MS};
use crate::export::ClipboardWorker;
use crate::grid::{Dataset, GridEditor, ViewMode};
use crate::visualization::{App, TerminalGuard, Tui};


/// Initial table layout for a session.
#[derive(Debug, Clone, Copy)]
pub struct EditOptions {
    pub start_year: i32,
    pub years: usize,
    pub transposed: bool,
}


impl EditOptions {
    /// Fresh editor for these options.
    pub fn build_editor(&self) -> GridEditor {
        let mut editor = GridEditor::new(Dataset::with_span(self.start_year, self.years));
        if self.transposed {
            editor.set_view_mode(ViewMode::Transposed);
        }
        editor
    }
}


/// Run the edit command.
///
/// A panic while drawing discards the session; the user may start over
/// with a fresh grid or leave.
pub fn run(options: EditOptions) -> Result<()> {
    let clipboard = ClipboardWorker::system().context("Failed to start clipboard worker")?;

    loop {
        info!(?options, "starting editor session");
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| run_session(options, &clipboard)));

        match outcome {
            Ok(result) => return result,
            Err(_) => {
                error!("editor session crashed");
                if !offer_reset()? {
                    anyhow::bail!("editor crashed; session discarded");
                }
            }
        }
    }
}


/// Ask whether to restart after a crash.
fn offer_reset() -> Result<bool> {
    eprintln!("\x1b[31mSomething went wrong while drawing the grid.\x1b[0m");
    eprint!("Press Enter to start over with a fresh grid, or type q to quit: ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(!answer.trim().eq_ignore_ascii_case("q"))
}


fn run_session(options: EditOptions, clipboard: &ClipboardWorker) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(options.build_editor(), get_export_dir());

    event_loop(guard.terminal_mut(), &mut app, clipboard)?;

    info!(rows = app.editor().dataset().len(), "editor session closed");
    Ok(())
}


fn event_loop(terminal: &mut Tui, app: &mut App, clipboard: &ClipboardWorker) -> Result<()> {
    let poll = Duration::from_millis(EVENT_POLL_MS);

    while !app.should_quit() {
        while let Some(notice) = clipboard.try_next() {
            app.notify(notice);
        }

        terminal.draw(|f| app.draw(f))?;

        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key, clipboard);
                }
            }
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_editor_from_options() {
        let options = EditOptions { start_year: 2010, years: 2, transposed: true };
        let editor = options.build_editor();
        assert_eq!(editor.dataset().years(), vec![2010, 2011]);
        assert_eq!(editor.view_mode(), ViewMode::Transposed);
    }
}

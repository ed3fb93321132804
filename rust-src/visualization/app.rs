//! Interactive editor state: cursor, in-place input and notices.

use std::path::PathBuf;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{info, warn};

use super::chart_view::render_chart;
use super::cursor::{cell_target, grid_shape, Cursor};
use super::export::{export_chart, ImageFormat};
use super::grid_view::render_grid;
use crate::export::ClipboardWorker;
use crate::grid::{GridEditor, ViewMode};
use crate::models::Notification;


/// An edit in progress. Every keystroke is written through to the grid;
/// `original` is put back on cancel.
#[derive(Debug, Clone)]
struct CellInput {
    buffer: String,
    original: String,
}


pub struct App {
    editor: GridEditor,
    cursor: Cursor,
    input: Option<CellInput>,
    notice: Option<Notification>,
    export_dir: PathBuf,
    should_quit: bool,
}


impl App {
    pub fn new(editor: GridEditor, export_dir: PathBuf) -> Self {
        Self {
            editor,
            cursor: Cursor::default(),
            input: None,
            notice: None,
            export_dir,
            should_quit: false,
        }
    }

    pub fn editor(&self) -> &GridEditor {
        &self.editor
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[cfg(test)]
    pub fn notice(&self) -> Option<&Notification> {
        self.notice.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn notify(&mut self, notice: Notification) {
        self.notice = Some(notice);
    }

    /// Route a key press.
    pub fn handle_key(&mut self, key: KeyEvent, clipboard: &ClipboardWorker) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        // Notices stay up until the next key.
        self.notice = None;
        let shape = grid_shape(&self.editor);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.cursor.move_by(-1, 0, shape),
            KeyCode::Down => self.cursor.move_by(1, 0, shape),
            KeyCode::Left | KeyCode::BackTab => self.cursor.move_by(0, -1, shape),
            KeyCode::Right | KeyCode::Tab => self.cursor.move_by(0, 1, shape),
            KeyCode::Home => self.cursor.col = 0,
            KeyCode::End => self.cursor.col = shape.1.saturating_sub(1),
            KeyCode::Enter | KeyCode::F(2) => self.begin_edit(None),
            KeyCode::Delete | KeyCode::Backspace => self.write_current(String::new()),
            KeyCode::Char('p') => self.prepend_previous_year(),
            KeyCode::Char('t') => self.toggle_transpose(),
            KeyCode::Char('c') | KeyCode::Char('y') => self.copy_table(clipboard),
            KeyCode::Char('s') => self.save_chart(ImageFormat::Svg),
            KeyCode::Char('g') => self.save_chart(ImageFormat::Png),
            KeyCode::Char(c) if is_value_char(c) => self.begin_edit(Some(c)),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let shape = grid_shape(&self.editor);

        match key.code {
            KeyCode::Char(c) => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.push(c);
                }
                self.sync_input();
            }
            KeyCode::Backspace => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.pop();
                }
                self.sync_input();
            }
            KeyCode::Enter => {
                self.input = None;
                self.cursor.move_by(1, 0, shape);
            }
            KeyCode::Tab => {
                self.input = None;
                self.cursor.move_by(0, 1, shape);
            }
            KeyCode::Esc => {
                if let Some(input) = self.input.take() {
                    self.write_current(input.original);
                }
            }
            _ => {}
        }
    }

    fn current_text(&self) -> Option<String> {
        let (key, month) = cell_target(&self.editor, self.cursor)?;
        self.editor.cell(key, month).map(str::to_string)
    }

    fn write_current(&mut self, text: String) {
        if let Some((key, month)) = cell_target(&self.editor, self.cursor) {
            self.editor.edit_cell(key, month, text);
        }
    }

    fn sync_input(&mut self) {
        if let Some(text) = self.input.as_ref().map(|i| i.buffer.clone()) {
            self.write_current(text);
        }
    }

    /// Start editing; a typed character replaces the cell content.
    fn begin_edit(&mut self, first: Option<char>) {
        let Some(original) = self.current_text() else {
            return;
        };

        let buffer = match first {
            Some(c) => c.to_string(),
            None => original.clone(),
        };
        self.input = Some(CellInput { buffer, original });
        self.sync_input();
    }

    fn prepend_previous_year(&mut self) {
        match self.editor.prepend_previous_year() {
            Ok(year) => {
                // Keep the cursor on the cell it was on.
                match self.editor.view_mode() {
                    ViewMode::Normal => self.cursor.row += 1,
                    ViewMode::Transposed => self.cursor.col += 1,
                }
                self.cursor.clamp(grid_shape(&self.editor));
                self.notify(Notification::info(format!("Added {year}")));
            }
            Err(e) => {
                warn!(error = %e, "prepend refused");
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    fn toggle_transpose(&mut self) {
        self.editor.toggle_transpose();
        self.cursor = self.cursor.transposed();
        self.cursor.clamp(grid_shape(&self.editor));
    }

    fn copy_table(&mut self, clipboard: &ClipboardWorker) {
        if let Err(e) = self.editor.export_to_clipboard(clipboard) {
            self.notify(Notification::copy_failed(e));
        }
    }

    fn save_chart(&mut self, format: ImageFormat) {
        let file_name = format!(
            "chart-{}.{}",
            Local::now().format("%Y%m%d-%H%M%S"),
            format.extension()
        );
        let path = self.export_dir.join(file_name);

        match export_chart(&self.editor.chart_series(), &path, format, None) {
            Ok(()) => {
                info!(path = %path.display(), "chart exported");
                self.notify(Notification::info(format!("Chart saved to {}", path.display())));
            }
            Err(e) => {
                warn!(error = %e, "chart export failed");
                self.notify(Notification::error(format!("Failed to save chart: {e:#}")));
            }
        }
    }

    /// Draw the whole screen.
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Percentage(45),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.draw_toolbar(f, chunks[0]);
        render_grid(
            f,
            chunks[1],
            &self.editor,
            self.cursor,
            self.input.as_ref().map(|i| i.buffer.as_str()),
        );
        render_chart(f, chunks[2], &self.editor.chart_series());
        self.draw_status(f, chunks[3]);
    }

    fn draw_toolbar(&self, f: &mut Frame, area: Rect) {
        let toggle_label = match self.editor.view_mode() {
            ViewMode::Normal => "Show Months as Rows",
            ViewMode::Transposed => "Show Years as Rows",
        };
        let key = Style::default().fg(Color::Black).bg(Color::Cyan);

        let line = Line::from(vec![
            Span::styled(" p ", key),
            Span::raw(" Previous Year  "),
            Span::styled(" c ", key),
            Span::raw(" Copy Table  "),
            Span::styled(" t ", key),
            Span::raw(format!(" {toggle_label}  ")),
            Span::styled(" s/g ", key),
            Span::raw(" Save Chart SVG/PNG  "),
            Span::styled(" q ", key),
            Span::raw(" Quit"),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn draw_status(&self, f: &mut Frame, area: Rect) {
        let line = match &self.notice {
            Some(notice) => {
                let style = if notice.is_error() {
                    Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Black).bg(Color::Green)
                };
                Line::from(Span::styled(format!(" {notice} "), style))
            }
            None => {
                let help = if self.is_editing() {
                    "Type to edit  Enter:commit+down  Tab:commit+right  Esc:cancel"
                } else {
                    "Arrows:move  Enter:edit  Del:clear  0-9:overwrite"
                };
                Line::from(Span::styled(format!(" {help} "), Style::default().fg(Color::DarkGray)))
            }
        };
        f.render_widget(Paragraph::new(line), area);
    }
}


/// Characters that start an overwrite edit straight from navigation.
fn is_value_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | ',')
}

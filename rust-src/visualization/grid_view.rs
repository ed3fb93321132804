//! Table rendering for both grid orientations.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::cursor::{visible_range, Cursor};
use crate::config::CELL_WIDTH;
use crate::grid::{GridEditor, ViewMode};
use crate::models::Month;


const KEY_WIDTH: u16 = 6;


/// Header and cell text of the displayed view, row-major.
pub(crate) fn view_table(editor: &GridEditor) -> (Vec<String>, Vec<(String, Vec<String>)>) {
    match editor.view_mode() {
        ViewMode::Normal => {
            let header = Month::ALL.iter().map(|m| m.abbrev().to_string()).collect();
            let rows = editor
                .dataset()
                .rows()
                .iter()
                .map(|row| (row.year.to_string(), row.values().to_vec()))
                .collect();
            (header, rows)
        }
        ViewMode::Transposed => {
            let header = editor
                .dataset()
                .years()
                .into_iter()
                .map(|y| y.to_string())
                .collect();
            let rows = editor
                .transposed_view()
                .into_iter()
                .map(|row| {
                    let values = row.values.into_iter().map(|(_, v)| v).collect();
                    (row.month.abbrev().to_string(), values)
                })
                .collect();
            (header, rows)
        }
    }
}


/// Hint shown instead of the table when there are no years.
fn empty_hint(editor: &GridEditor) -> Option<&'static str> {
    editor
        .dataset()
        .is_empty()
        .then_some("No years yet. Press p to add the current year.")
}


fn key_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Normal => "Year",
        ViewMode::Transposed => "Month",
    }
}


/// Render the grid with the cursor highlighted and, while editing, the
/// input buffer shown in place.
pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    editor: &GridEditor,
    cursor: Cursor,
    editing: Option<&str>,
) {
    let mode = editor.view_mode();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Current view: {} ", mode.describe()));
    let inner = block.inner(area);

    if let Some(hint) = empty_hint(editor) {
        let text = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
        f.render_widget(text.block(block), area);
        return;
    }

    let (header, rows) = view_table(editor);

    let visible_cols = (inner.width.saturating_sub(KEY_WIDTH) / (CELL_WIDTH + 1)) as usize;
    let visible_rows = inner.height.saturating_sub(1) as usize;
    let col_range = visible_range(cursor.col, header.len(), visible_cols);
    let row_range = visible_range(cursor.row, rows.len(), visible_rows);

    let header_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let header_row = Row::new(
        std::iter::once(Cell::from(key_label(mode)))
            .chain(header[col_range.clone()].iter().map(|h| Cell::from(h.clone()))),
    )
    .style(header_style);

    let body: Vec<Row> = rows[row_range.clone()]
        .iter()
        .zip(row_range.clone())
        .map(|((key, values), r)| {
            let cells = values[col_range.clone()]
                .iter()
                .zip(col_range.clone())
                .map(|(value, c)| {
                    let at_cursor = r == cursor.row && c == cursor.col;
                    match (at_cursor, editing) {
                        (true, Some(buffer)) => Cell::from(format!("{buffer}▏")).style(
                            Style::default().bg(Color::White).fg(Color::Black),
                        ),
                        (true, None) => Cell::from(value.clone()).style(
                            Style::default()
                                .bg(Color::Blue)
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        _ => Cell::from(value.clone()),
                    }
                });

            let row_bg = if r % 2 == 0 { Color::Rgb(30, 30, 30) } else { Color::Reset };
            Row::new(
                std::iter::once(
                    Cell::from(key.clone()).style(Style::default().fg(Color::DarkGray)),
                )
                .chain(cells),
            )
            .style(Style::default().bg(row_bg))
        })
        .collect();

    let widths = std::iter::once(Constraint::Length(KEY_WIDTH))
        .chain(std::iter::repeat(Constraint::Length(CELL_WIDTH)).take(col_range.len()));

    let table = Table::new(body, widths)
        .header(header_row)
        .column_spacing(1)
        .block(block);

    f.render_widget(table, area);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Dataset, RowKey};

    #[test]
    fn test_view_table_normal() {
        let mut editor = GridEditor::default();
        editor.edit_cell(RowKey::Index(0), Month::Jan, "3");

        let (header, rows) = view_table(&editor);
        assert_eq!(header.len(), 12);
        assert_eq!(header[0], "Jan");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].0, "2022");
        assert_eq!(rows[0].1[0], "3");
    }

    #[test]
    fn test_empty_hint_only_without_years() {
        assert_eq!(empty_hint(&GridEditor::default()), None);

        let mut editor = GridEditor::new(Dataset::with_span(2022, 0));
        assert!(empty_hint(&editor).unwrap().contains("Press p"));

        editor.prepend_previous_year().unwrap();
        assert_eq!(empty_hint(&editor), None);
    }

    #[test]
    fn test_view_table_transposed() {
        let mut editor = GridEditor::default();
        editor.edit_cell(RowKey::Index(2), Month::Mar, "8");
        editor.toggle_transpose();

        let (header, rows) = view_table(&editor);
        assert_eq!(header, vec!["2022", "2023", "2024"]);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[2].0, "Mar");
        assert_eq!(rows[2].1, vec!["", "", "8"]);
        assert_eq!(key_label(editor.view_mode()), "Month");
    }
}

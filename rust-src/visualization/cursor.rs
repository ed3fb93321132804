//! Cursor position in the displayed grid and its mapping to dataset cells.

use std::ops::Range;

use crate::grid::{GridEditor, RowKey, ViewMode};
use crate::models::Month;


/// Position among the data cells of the displayed grid (headers excluded).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}


impl Cursor {
    /// Move by a delta, staying inside `shape` (rows, cols).
    pub fn move_by(&mut self, d_row: isize, d_col: isize, shape: (usize, usize)) {
        self.row = self.row.saturating_add_signed(d_row);
        self.col = self.col.saturating_add_signed(d_col);
        self.clamp(shape);
    }

    pub fn clamp(&mut self, (rows, cols): (usize, usize)) {
        self.row = self.row.min(rows.saturating_sub(1));
        self.col = self.col.min(cols.saturating_sub(1));
    }

    /// Same cell after the grid is flipped.
    pub fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}


/// Displayed (rows, cols) of data cells.
pub fn grid_shape(editor: &GridEditor) -> (usize, usize) {
    let years = editor.dataset().len();
    match editor.view_mode() {
        ViewMode::Normal => (years, Month::ALL.len()),
        ViewMode::Transposed => (Month::ALL.len(), years),
    }
}


/// Dataset cell under the cursor, keyed the way the current view addresses
/// rows.
pub fn cell_target(editor: &GridEditor, cursor: Cursor) -> Option<(RowKey, Month)> {
    match editor.view_mode() {
        ViewMode::Normal => {
            let month = Month::from_index(cursor.col)?;
            Some((RowKey::Index(cursor.row), month))
        }
        ViewMode::Transposed => {
            let month = Month::from_index(cursor.row)?;
            let year = editor.dataset().row(cursor.col)?.year;
            Some((RowKey::Year(year), month))
        }
    }
}


/// Window of `capacity` items out of `total` that keeps `focus` visible.
pub fn visible_range(focus: usize, total: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 || total == 0 {
        return 0..0;
    }
    let start = (focus + 1).saturating_sub(capacity).min(total.saturating_sub(capacity));
    start..(start + capacity).min(total)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_stays_in_bounds() {
        let mut cursor = Cursor::default();
        cursor.move_by(-1, -1, (3, 12));
        assert_eq!(cursor, Cursor { row: 0, col: 0 });

        cursor.move_by(10, 20, (3, 12));
        assert_eq!(cursor, Cursor { row: 2, col: 11 });
    }

    #[test]
    fn test_clamp_on_empty_grid() {
        let mut cursor = Cursor { row: 4, col: 4 };
        cursor.clamp((0, 0));
        assert_eq!(cursor, Cursor::default());
    }

    #[test]
    fn test_shape_follows_view_mode() {
        let mut editor = GridEditor::default();
        assert_eq!(grid_shape(&editor), (3, 12));
        editor.toggle_transpose();
        assert_eq!(grid_shape(&editor), (12, 3));
    }

    #[test]
    fn test_cell_target_normal_uses_row_index() {
        let editor = GridEditor::default();
        let target = cell_target(&editor, Cursor { row: 2, col: 1 });
        assert_eq!(target, Some((RowKey::Index(2), Month::Feb)));
    }

    #[test]
    fn test_cell_target_transposed_uses_year() {
        let mut editor = GridEditor::default();
        editor.toggle_transpose();
        let target = cell_target(&editor, Cursor { row: 1, col: 2 });
        assert_eq!(target, Some((RowKey::Year(2024), Month::Feb)));
        assert_eq!(cell_target(&editor, Cursor { row: 1, col: 3 }), None);
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(0, 12, 5), 0..5);
        assert_eq!(visible_range(4, 12, 5), 0..5);
        assert_eq!(visible_range(5, 12, 5), 1..6);
        assert_eq!(visible_range(11, 12, 5), 7..12);
        assert_eq!(visible_range(1, 3, 5), 0..3);
        assert_eq!(visible_range(0, 3, 0), 0..0);
    }
}

//! The grid editor: dataset, view mode and the operations on them.

use chrono::{Datelike, Local};
use tracing::{debug, info};

use super::{Dataset, GridError, TransposedRow};
use crate::aggregation::{self, ChartData, ChartSeries};
use crate::export::{self, ClipboardError, ClipboardWorker};
use crate::models::{Month, YearRow};


/// Which axis the rows of the displayed grid run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Years as rows, months as columns.
    #[default]
    Normal,
    /// Months as rows, years as columns.
    Transposed,
}


impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Transposed,
            Self::Transposed => Self::Normal,
        }
    }

    /// Human description of the layout.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Normal => "Years as Rows, Months as Columns",
            Self::Transposed => "Months as Rows, Years as Columns",
        }
    }
}


/// How an edit names its row: by position in the normal view, by year in
/// the transposed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKey {
    Index(usize),
    Year(i32),
}


/// Owns the dataset for the session. Every view is computed from it.
#[derive(Debug, Clone, Default)]
pub struct GridEditor {
    dataset: Dataset,
    mode: ViewMode,
}


impl GridEditor {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            mode: ViewMode::Normal,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    fn resolve(&self, key: RowKey) -> Option<usize> {
        match key {
            RowKey::Index(index) if index < self.dataset.len() => Some(index),
            RowKey::Index(_) => None,
            RowKey::Year(year) => self.dataset.position_of(year),
        }
    }

    /// Read a cell. `None` when the row does not exist.
    pub fn cell(&self, key: RowKey, month: Month) -> Option<&str> {
        self.resolve(key)
            .and_then(|index| self.dataset.row(index))
            .map(|row| row.get(month))
    }

    /// Store `text` verbatim in one cell.
    ///
    /// Unknown rows are ignored; the return value says whether a write
    /// happened.
    pub fn edit_cell(&mut self, key: RowKey, month: Month, text: impl Into<String>) -> bool {
        let Some(row) = self.resolve(key).and_then(|index| self.dataset.row_mut(index)) else {
            debug!(?key, %month, "edit dropped: row not found");
            return false;
        };

        row.set(month, text);
        debug!(year = row.year, %month, "cell edited");
        true
    }

    /// Insert an empty row for the year before the first one.
    ///
    /// An empty table starts from the current calendar year.
    pub fn prepend_previous_year(&mut self) -> Result<i32, GridError> {
        let year = match self.dataset.first_year() {
            Some(first) => first
                .checked_sub(1)
                .ok_or(GridError::YearOutOfRange(first))?,
            None => Local::now().year(),
        };

        if self.dataset.contains_year(year) {
            return Err(GridError::DuplicateYear(year));
        }

        self.dataset.prepend(YearRow::empty(year));
        info!(year, rows = self.dataset.len(), "prepended year");
        Ok(year)
    }

    pub fn toggle_transpose(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        debug!(mode = ?self.mode, "view toggled");
        self.mode
    }

    /// TSV text of the view currently displayed.
    pub fn export_tsv(&self) -> String {
        export::to_tsv(&self.dataset, self.mode)
    }

    /// Hand the displayed view to the clipboard worker.
    ///
    /// Returns once queued; the outcome arrives as a notification from the
    /// worker.
    pub fn export_to_clipboard(&self, clipboard: &ClipboardWorker) -> Result<(), ClipboardError> {
        clipboard.submit(self.export_tsv())
    }

    pub fn transposed_view(&self) -> Vec<TransposedRow> {
        self.dataset.transposed()
    }

    pub fn chart_series(&self) -> Vec<ChartSeries> {
        aggregation::chart_series(&self.dataset)
    }

    pub fn chart_data(&self) -> ChartData {
        aggregation::chart_data(&self.dataset)
    }
}

//! The authoritative year/month table and its transposed projection.

use serde::Serialize;

use crate::config::{DEFAULT_START_YEAR, DEFAULT_YEAR_SPAN};
use crate::models::{Month, YearRow};


/// Ordered rows, one per year. The only mutable copy of the grid data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    rows: Vec<YearRow>,
}


/// One month across every year, in dataset row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransposedRow {
    pub month: Month,
    pub values: Vec<(i32, String)>,
}


impl TransposedRow {
    /// Cell text for a year, if that year is present.
    #[cfg(test)]
    pub fn get(&self, year: i32) -> Option<&str> {
        self.values
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, v)| v.as_str())
    }
}


impl Default for Dataset {
    fn default() -> Self {
        Self::with_span(DEFAULT_START_YEAR, DEFAULT_YEAR_SPAN)
    }
}


impl Dataset {
    /// Create `span` consecutive empty years starting at `start_year`.
    ///
    /// Stops early rather than overflowing past `i32::MAX`.
    pub fn with_span(start_year: i32, span: usize) -> Self {
        let rows = (0..span)
            .map_while(|offset| {
                i32::try_from(offset)
                    .ok()
                    .and_then(|offset| start_year.checked_add(offset))
            })
            .map(YearRow::empty)
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[YearRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Years in row order.
    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.year).collect()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.rows.first().map(|r| r.year)
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.position_of(year).is_some()
    }

    /// Row position holding `year`, by equality search.
    pub fn position_of(&self, year: i32) -> Option<usize> {
        self.rows.iter().position(|r| r.year == year)
    }

    pub fn row(&self, index: usize) -> Option<&YearRow> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut YearRow> {
        self.rows.get_mut(index)
    }

    /// Insert a row in front of all others.
    pub(crate) fn prepend(&mut self, row: YearRow) {
        self.rows.insert(0, row);
    }

    /// Project the table to one row per month, years as columns.
    pub fn transposed(&self) -> Vec<TransposedRow> {
        Month::ALL
            .iter()
            .map(|&month| TransposedRow {
                month,
                values: self
                    .rows
                    .iter()
                    .map(|row| (row.year, row.get(month).to_string()))
                    .collect(),
            })
            .collect()
    }
}

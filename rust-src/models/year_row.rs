//! A single year of monthly cell values.

use serde::{Deserialize, Serialize};

use super::Month;


/// One row of the dataset: a year and its twelve raw cell texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: i32,
    values: [String; 12],
}


impl YearRow {
    /// Create a row with every month empty.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            values: Default::default(),
        }
    }

    /// Raw text stored for a month.
    pub fn get(&self, month: Month) -> &str {
        &self.values[month.index()]
    }

    /// Replace the text stored for a month, verbatim.
    pub fn set(&mut self, month: Month, value: impl Into<String>) {
        self.values[month.index()] = value.into();
    }

    /// All cell texts in month order.
    pub fn values(&self) -> &[String; 12] {
        &self.values
    }

    /// Check whether every month is empty.
    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_row() {
        let row = YearRow::empty(2023);
        assert_eq!(row.year, 2023);
        assert!(row.is_blank());
        assert!(Month::ALL.iter().all(|m| row.get(*m).is_empty()));
    }

    #[test]
    fn test_set_stores_text_verbatim() {
        let mut row = YearRow::empty(2023);
        row.set(Month::Mar, " 12,5 abc ");
        assert_eq!(row.get(Month::Mar), " 12,5 abc ");
        assert!(!row.is_blank());
        assert_eq!(row.get(Month::Apr), "");
    }
}

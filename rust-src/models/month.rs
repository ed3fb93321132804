//! Calendar month columns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::MONTH_NAMES;


/// One of the twelve fixed grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}


impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based column position.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Month at a zero-based column position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Three-letter abbreviation used in headers and exports.
    pub fn abbrev(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }
}


impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_calendar_order() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(Month::from_index(i), Some(*month));
        }
        assert_eq!(Month::from_index(12), None);
    }

    #[test]
    fn test_abbrev() {
        assert_eq!(Month::Jan.abbrev(), "Jan");
        assert_eq!(Month::Sep.to_string(), "Sep");
        assert_eq!(Month::Dec.abbrev(), "Dec");
    }
}

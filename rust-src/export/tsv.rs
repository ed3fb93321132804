//! Tab-separated serialisation of the grid.
//!
//! Cell text is written verbatim: no quoting or escaping is applied, so a
//! cell containing a tab or newline will shift the pasted layout.

use crate::grid::{Dataset, ViewMode};
use crate::models::Month;


/// Serialise the view the user is currently looking at.
pub fn to_tsv(dataset: &Dataset, mode: ViewMode) -> String {
    match mode {
        ViewMode::Normal => normal_tsv(dataset),
        ViewMode::Transposed => transposed_tsv(dataset),
    }
}


/// `Year` header then one line per year.
pub fn normal_tsv(dataset: &Dataset) -> String {
    let header = std::iter::once("Year".to_string())
        .chain(Month::ALL.iter().map(|m| m.abbrev().to_string()));

    let rows = dataset.rows().iter().map(|row| {
        std::iter::once(row.year.to_string())
            .chain(row.values().iter().cloned())
            .collect::<Vec<_>>()
            .join("\t")
    });

    std::iter::once(header.collect::<Vec<_>>().join("\t"))
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}


/// `Month` header then one line per month.
pub fn transposed_tsv(dataset: &Dataset) -> String {
    let header = std::iter::once("Month".to_string())
        .chain(dataset.years().into_iter().map(|y| y.to_string()));

    let rows = dataset.transposed().into_iter().map(|row| {
        std::iter::once(row.month.abbrev().to_string())
            .chain(row.values.into_iter().map(|(_, v)| v))
            .collect::<Vec<_>>()
            .join("\t")
    });

    std::iter::once(header.collect::<Vec<_>>().join("\t"))
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_header_and_rows() {
        let dataset = Dataset::default();
        let text = normal_tsv(&dataset);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Year\tJan\tFeb\tMar\tApr\tMay\tJun\tJul\tAug\tSep\tOct\tNov\tDec");
        assert_eq!(lines[1], format!("2022{}", "\t".repeat(12)));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_transposed_header_and_rows() {
        let mut dataset = Dataset::default();
        dataset.row_mut(0).unwrap().set(Month::Dec, "9");
        let text = transposed_tsv(&dataset);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Month\t2022\t2023\t2024");
        assert_eq!(lines[1], "Jan\t\t\t");
        assert_eq!(lines[12], "Dec\t9\t\t");
    }

    #[test]
    fn test_empty_dataset_exports_header_only() {
        let dataset = Dataset::with_span(2022, 0);
        assert_eq!(to_tsv(&dataset, ViewMode::Transposed).lines().count(), 13);
        assert_eq!(to_tsv(&dataset, ViewMode::Normal).lines().count(), 1);
        assert_eq!(transposed_tsv(&dataset).lines().next(), Some("Month"));
    }
}

//! Print a blank grid without opening the editor.

use std::io::Write;

use anyhow::{Context, Result};

use crate::grid::{Dataset, GridEditor, ViewMode};


/// Output formats for `template`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TemplateFormat {
    /// Tab-separated table, as copied to the clipboard
    Tsv,
    /// Chart payload (labels and series) as JSON
    Json,
}


/// Render the template text.
pub fn render(start_year: i32, years: usize, transposed: bool, format: TemplateFormat) -> Result<String> {
    let mut editor = GridEditor::new(Dataset::with_span(start_year, years));
    if transposed {
        editor.set_view_mode(ViewMode::Transposed);
    }

    match format {
        TemplateFormat::Tsv => Ok(editor.export_tsv()),
        TemplateFormat::Json => serde_json::to_string_pretty(&editor.chart_data())
            .context("Failed to serialise chart data"),
    }
}


/// Run the template command.
pub fn run(start_year: i32, years: usize, transposed: bool, format: TemplateFormat) -> Result<()> {
    let text = render(start_year, years, transposed, format)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tsv_template() {
        let text = render(2020, 2, false, TemplateFormat::Tsv).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2020\t"));
    }

    #[test]
    fn test_transposed_tsv_template() {
        let text = render(2020, 2, true, TemplateFormat::Tsv).unwrap();
        assert!(text.starts_with("Month\t2020\t2021\nJan\t\t"));
    }

    #[test]
    fn test_json_template() {
        let text = render(2022, 3, false, TemplateFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["datasets"].as_array().unwrap().len(), 3);
        assert_eq!(value["labels"][0], "Jan");
    }
}

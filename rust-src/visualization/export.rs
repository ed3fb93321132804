//! Export the line chart as an SVG or PNG image.

use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregation::{value_bounds, ChartSeries};
use crate::config::MONTH_NAMES;


// Colour scheme
const CHART_BG: &str = "#262624";
const CHART_TEXT: &str = "#FAF9F5";
const CHART_TEXT_SECONDARY: &str = "#C2C0B7";
const CHART_GRID: &str = "#3C3C3A";

// Plot geometry
const WIDTH: i32 = 960;
const HEIGHT: i32 = 480;
const MARGIN_LEFT: i32 = 70;
const MARGIN_RIGHT: i32 = 120;
const MARGIN_TOP: i32 = 50;
const MARGIN_BOTTOM: i32 = 50;
const GRID_LINES: i32 = 5;


/// Image formats the chart can be saved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}


impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}


/// Write the chart to `output_path` in the given format.
pub fn export_chart(
    series: &[ChartSeries],
    output_path: &Path,
    format: ImageFormat,
    title: Option<&str>,
) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    match format {
        ImageFormat::Svg => export_chart_svg(series, output_path, title),
        ImageFormat::Png => export_chart_png(series, output_path, title),
    }
}


/// Export chart as SVG.
pub fn export_chart_svg(series: &[ChartSeries], output_path: &Path, title: Option<&str>) -> Result<()> {
    let svg_content = generate_svg(series, title);

    std::fs::write(output_path, svg_content)
        .with_context(|| format!("Failed to write SVG to {}", output_path.display()))?;

    Ok(())
}


/// Export chart as PNG.
pub fn export_chart_png(series: &[ChartSeries], output_path: &Path, title: Option<&str>) -> Result<()> {
    let svg_content = generate_svg(series, title);

    let tree = resvg::usvg::Tree::from_str(
        &svg_content,
        &resvg::usvg::Options::default(),
    ).context("Failed to parse SVG")?;

    let size = tree.size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width() as u32, size.height() as u32)
        .context("Failed to create pixmap")?;

    let bg = hex_to_rgb(CHART_BG);
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.0, bg.1, bg.2, 255));

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.save_png(output_path)
        .with_context(|| format!("Failed to save PNG to {}", output_path.display()))?;

    Ok(())
}


/// Map a month index to an x pixel.
fn x_for(index: usize) -> f64 {
    let plot_width = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) as f64;
    MARGIN_LEFT as f64 + plot_width * index as f64 / (MONTH_NAMES.len() - 1) as f64
}


/// Map a value to a y pixel within `[low, high]`.
fn y_for(value: f64, low: f64, high: f64) -> f64 {
    let plot_height = (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) as f64;
    let ratio = (value - low) / (high - low);
    (HEIGHT - MARGIN_BOTTOM) as f64 - plot_height * ratio
}


/// Generate SVG content for the chart.
pub(crate) fn generate_svg(series: &[ChartSeries], title: Option<&str>) -> String {
    let (low, high) = value_bounds(series);
    let display_title = title.unwrap_or("Dynamic Chart");

    let mut svg_parts = vec![
        format!(r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#, WIDTH, HEIGHT),
        "<style>".to_string(),
        format!("  .title {{ fill: {}; font: bold 16px -apple-system, sans-serif; }}", CHART_TEXT),
        format!("  .axis-label {{ fill: {}; font: 11px -apple-system, sans-serif; }}", CHART_TEXT_SECONDARY),
        format!("  .legend-text {{ fill: {}; font: 12px -apple-system, sans-serif; }}", CHART_TEXT_SECONDARY),
        "</style>".to_string(),
        format!(r#"<rect width="{}" height="{}" fill="{}"/>"#, WIDTH, HEIGHT, CHART_BG),
        format!(r#"<text x="{}" y="30" class="title">{}</text>"#, MARGIN_LEFT, escape_xml(display_title)),
    ];

    // Horizontal grid lines with value labels
    for step in 0..=GRID_LINES {
        let value = low + (high - low) * step as f64 / GRID_LINES as f64;
        let y = y_for(value, low, high);
        svg_parts.push(format!(
            r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
            MARGIN_LEFT, y, WIDTH - MARGIN_RIGHT, y, CHART_GRID
        ));
        svg_parts.push(format!(
            r#"<text x="{}" y="{:.1}" class="axis-label" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 8, y + 4.0, format_tick(value)
        ));
    }

    // Month labels
    for (i, name) in MONTH_NAMES.iter().enumerate() {
        svg_parts.push(format!(
            r#"<text x="{:.1}" y="{}" class="axis-label" text-anchor="middle">{}</text>"#,
            x_for(i), HEIGHT - MARGIN_BOTTOM + 20, name
        ));
    }

    // One polyline per series, plus a legend entry
    for (index, s) in series.iter().enumerate() {
        let color = s.color.css();
        let points: Vec<String> = s
            .points
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{:.1},{:.1}", x_for(i), y_for(*v, low, high)))
            .collect();

        svg_parts.push(format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"><title>{}</title></polyline>"#,
            points.join(" "), color, escape_xml(&s.label)
        ));

        let legend_x = WIDTH - MARGIN_RIGHT + 20;
        let legend_y = MARGIN_TOP + index as i32 * 20;
        svg_parts.push(format!(
            r#"<rect x="{}" y="{}" width="12" height="12" fill="{}"/>"#,
            legend_x, legend_y, color
        ));
        svg_parts.push(format!(
            r#"<text x="{}" y="{}" class="legend-text">{}</text>"#,
            legend_x + 18, legend_y + 11, escape_xml(&s.label)
        ));
    }

    svg_parts.push("</svg>".to_string());

    svg_parts.join("\n")
}


/// Escape text for inclusion in SVG markup.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}


/// Tick label with at most one decimal.
fn format_tick(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}


/// Convert hex color to RGB tuple.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    (r, g, b)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::chart_series;
    use crate::grid::Dataset;
    use crate::models::Month;

    fn sample_series() -> Vec<ChartSeries> {
        let mut dataset = Dataset::default();
        dataset.row_mut(0).unwrap().set(Month::Jan, "10");
        dataset.row_mut(1).unwrap().set(Month::Jun, "25");
        chart_series(&dataset)
    }

    #[test]
    fn test_generate_svg_has_line_per_series() {
        let svg = generate_svg(&sample_series(), None);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 3);
        assert!(svg.contains("hsl(60, 70%, 50%)"));
        assert!(svg.contains(">Dynamic Chart<"));
        assert!(svg.contains(">Dec<"));
    }

    #[test]
    fn test_title_is_escaped() {
        let svg = generate_svg(&[], Some("A & <B>"));
        assert!(svg.contains("A &amp; &lt;B&gt;"));
    }

    #[test]
    fn test_y_mapping_spans_plot() {
        assert_eq!(y_for(0.0, 0.0, 10.0), (HEIGHT - MARGIN_BOTTOM) as f64);
        assert_eq!(y_for(10.0, 0.0, 10.0), MARGIN_TOP as f64);
        assert_eq!(x_for(0), MARGIN_LEFT as f64);
        assert_eq!(x_for(11), (WIDTH - MARGIN_RIGHT) as f64);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#262624"), (0x26, 0x26, 0x24));
    }

    #[test]
    fn test_export_svg_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("chart.svg");

        export_chart(&sample_series(), &path, ImageFormat::Svg, None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<polyline"));
    }

    #[test]
    fn test_export_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        export_chart(&sample_series(), &path, ImageFormat::Png, Some("Sales")).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}

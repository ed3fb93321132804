//! Line-chart series derived from the grid.

use serde::Serialize;

use crate::config::{
    MONTH_NAMES, SERIES_HUE_STEP, SERIES_LIGHTNESS, SERIES_SATURATION, SERIES_TENSION,
};
use crate::grid::Dataset;
use crate::models::Month;


/// Evenly spaced HSL colour for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesColor {
    pub hue: u32,
    pub saturation: u32,
    pub lightness: u32,
}


/// One year's values as chart points, in month order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub year: i32,
    pub points: [f64; 12],
    pub color: SeriesColor,
}


/// Labels plus named series, the payload a line-chart renderer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<ChartDataset>,
}


#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
}


impl SeriesColor {
    /// Colour for the series at `index`: hue advances 60 degrees per series.
    pub fn for_index(index: usize) -> Self {
        let hue = (index as u64 * SERIES_HUE_STEP as u64) % 360;
        Self {
            hue: hue as u32,
            saturation: SERIES_SATURATION,
            lightness: SERIES_LIGHTNESS,
        }
    }

    /// CSS form, e.g. `hsl(60, 70%, 50%)`.
    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }

    /// CSS form with an alpha component.
    pub fn css_with_alpha(&self, alpha: f64) -> String {
        format!(
            "hsl({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, alpha
        )
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let h = self.hue as f64 / 60.0;
        let s = self.saturation as f64 / 100.0;
        let l = self.lightness as f64 / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }
}


/// Numeric value of a cell for charting.
///
/// Empty, unparsable and non-finite text all count as zero.
pub fn coerce_cell(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}


/// One series per dataset row, coloured by row position.
pub fn chart_series(dataset: &Dataset) -> Vec<ChartSeries> {
    dataset
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut points = [0.0; 12];
            for month in Month::ALL {
                points[month.index()] = coerce_cell(row.get(month));
            }

            ChartSeries {
                label: row.year.to_string(),
                year: row.year,
                points,
                color: SeriesColor::for_index(index),
            }
        })
        .collect()
}


/// Build the renderer payload for the whole dataset.
pub fn chart_data(dataset: &Dataset) -> ChartData {
    let datasets = chart_series(dataset)
        .into_iter()
        .map(|series| ChartDataset {
            border_color: series.color.css(),
            background_color: series.color.css_with_alpha(0.5),
            label: series.label,
            data: series.points.to_vec(),
            fill: false,
            tension: SERIES_TENSION,
        })
        .collect();

    ChartData {
        labels: MONTH_NAMES.to_vec(),
        datasets,
    }
}


/// Lowest and highest point across all series, always spanning zero.
pub fn value_bounds(series: &[ChartSeries]) -> (f64, f64) {
    let (min, max) = series
        .iter()
        .flat_map(|s| s.points.iter().copied())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if (max - min).abs() < f64::EPSILON {
        (min, min + 1.0)
    } else {
        (min, max)
    }
}

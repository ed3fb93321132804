//! Live line chart of the grid, one line per year.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset as PlotLine, GraphType},
    Frame,
};

use crate::aggregation::{value_bounds, ChartSeries};
use crate::config::MONTH_NAMES;


/// (x, y) points for one series; x is the month index.
pub(crate) fn plot_points(series: &ChartSeries) -> Vec<(f64, f64)> {
    series
        .points
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect()
}


/// Compact axis label for a value.
pub(crate) fn format_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}


pub fn render_chart(f: &mut Frame, area: Rect, series: &[ChartSeries]) {
    let block = Block::default().borders(Borders::ALL).title(" Dynamic Chart ");

    let points: Vec<Vec<(f64, f64)>> = series.iter().map(plot_points).collect();
    let lines: Vec<PlotLine> = series
        .iter()
        .zip(&points)
        .map(|(s, pts)| {
            let (r, g, b) = s.color.to_rgb();
            PlotLine::default()
                .name(s.label.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Rgb(r, g, b)))
                .data(pts)
        })
        .collect();

    let (low, high) = value_bounds(series);
    let axis_style = Style::default().fg(Color::DarkGray);

    let x_axis = Axis::default()
        .style(axis_style)
        .bounds([0.0, (MONTH_NAMES.len() - 1) as f64])
        .labels(MONTH_NAMES.iter().map(|m| Span::raw(*m)).collect::<Vec<_>>());

    let y_axis = Axis::default()
        .style(axis_style)
        .bounds([low, high])
        .labels(vec![
            Span::raw(format_value(low)),
            Span::raw(format_value((low + high) / 2.0)),
            Span::styled(format_value(high), Style::default().add_modifier(Modifier::BOLD)),
        ]);

    let chart = Chart::new(lines).block(block).x_axis(x_axis).y_axis(y_axis);

    f.render_widget(chart, area);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::chart_series;
    use crate::grid::Dataset;
    use crate::models::Month;

    #[test]
    fn test_plot_points_follow_month_order() {
        let mut dataset = Dataset::default();
        dataset.row_mut(0).unwrap().set(Month::Dec, "12");

        let series = chart_series(&dataset);
        let pts = plot_points(&series[0]);
        assert_eq!(pts.len(), 12);
        assert_eq!(pts[0], (0.0, 0.0));
        assert_eq!(pts[11], (11.0, 12.0));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(-40.0), "-40");
        assert_eq!(format_value(2_500.0), "2.5K");
        assert_eq!(format_value(3_000_000.0), "3.0M");
    }
}

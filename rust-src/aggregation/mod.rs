//! Aggregation layer: chart projections of the grid.

mod chart_series;

#[allow(unused_imports)]
pub use chart_series::{
    chart_data,
    chart_series,
    coerce_cell,
    value_bounds,
    ChartData,
    ChartDataset,
    ChartSeries,
    SeriesColor,
};

//! Configuration, settings and logging for yeargrid.

mod logging;
mod settings;

pub use logging::init_logging;
pub use settings::{
    get_export_dir,
    get_log_path,
    CELL_WIDTH,
    DEFAULT_START_YEAR,
    DEFAULT_YEAR_SPAN,
    EVENT_POLL_MS,
    MAX_YEAR_SPAN,
    MONTH_NAMES,
    SERIES_HUE_STEP,
    SERIES_LIGHTNESS,
    SERIES_SATURATION,
    SERIES_TENSION,
};

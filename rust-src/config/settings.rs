//! Application settings and path constants.

use std::path::PathBuf;


/// Canonical month abbreviations, in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// First year of the default span.
pub const DEFAULT_START_YEAR: i32 = 2022;

/// Number of consecutive years in the default span.
pub const DEFAULT_YEAR_SPAN: usize = 3;

/// Largest span accepted for the initial table.
pub const MAX_YEAR_SPAN: u16 = 500;

/// Hue rotation between consecutive chart series (degrees).
pub const SERIES_HUE_STEP: u32 = 60;

/// Fixed series saturation and lightness (percent).
pub const SERIES_SATURATION: u32 = 70;
pub const SERIES_LIGHTNESS: u32 = 50;

/// Curve tension handed to chart renderers.
pub const SERIES_TENSION: f64 = 0.2;

/// Poll interval for the terminal event loop (milliseconds).
pub const EVENT_POLL_MS: u64 = 100;

/// Grid cell width in the terminal view.
pub const CELL_WIDTH: u16 = 7;


/// Base directory for files written by the application.
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("yeargrid")
}


/// Get the log file path.
pub fn get_log_path() -> PathBuf {
    get_data_dir().join("ygrid.log")
}


/// Get the default directory for chart image exports.
pub fn get_export_dir() -> PathBuf {
    get_data_dir().join("exports")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MONTH_NAMES.len(), 12);
        assert_eq!(MONTH_NAMES[0], "Jan");
        assert_eq!(MONTH_NAMES[11], "Dec");
        assert_eq!(DEFAULT_START_YEAR, 2022);
        assert_eq!(DEFAULT_YEAR_SPAN, 3);
        assert!(DEFAULT_YEAR_SPAN <= MAX_YEAR_SPAN as usize);
        assert_eq!(SERIES_HUE_STEP, 60);
    }

    #[test]
    fn test_get_log_path() {
        let path = get_log_path();
        assert!(path.to_string_lossy().contains("yeargrid"));
        assert!(path.to_string_lossy().ends_with("ygrid.log"));
    }

    #[test]
    fn test_get_export_dir() {
        let dir = get_export_dir();
        assert!(dir.starts_with(get_data_dir()));
        assert!(dir.to_string_lossy().contains("exports"));
    }
}

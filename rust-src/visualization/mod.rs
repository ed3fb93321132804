//! Terminal front end and chart rendering.

mod app;
mod chart_view;
mod cursor;
mod export;
mod grid_view;
mod terminal;

pub use app::App;
pub use terminal::{TerminalGuard, Tui};

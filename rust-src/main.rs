//! yeargrid - terminal year/month data-entry grid.
//!
//! Edit a table of monthly values per year, flip it to months-as-rows,
//! copy it as TSV and watch a line chart follow along.

mod aggregation;
mod cli;
mod commands;
mod config;
mod export;
mod grid;
mod models;
mod visualization;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

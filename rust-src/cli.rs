//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::commands::{self, edit::EditOptions, template::TemplateFormat};
use crate::config::{
    get_log_path, init_logging, DEFAULT_START_YEAR, DEFAULT_YEAR_SPAN, MAX_YEAR_SPAN,
};


/// yeargrid - year/month data-entry grid with transpose, clipboard export and a live chart
#[derive(Parser)]
#[command(name = "ygrid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    grid: GridArgs,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log file (default: ygrid.log in the user data directory)
    #[arg(long, env = "YEARGRID_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,
}


/// Initial table layout, shared by every command.
#[derive(Args, Debug, Clone, Copy)]
struct GridArgs {
    /// First year of the initial table
    #[arg(long, env = "YEARGRID_START_YEAR", default_value_t = DEFAULT_START_YEAR, global = true)]
    start_year: i32,

    /// Number of consecutive years in the initial table
    #[arg(
        long,
        env = "YEARGRID_YEARS",
        default_value_t = DEFAULT_YEAR_SPAN as u16,
        value_parser = clap::value_parser!(u16).range(0..=MAX_YEAR_SPAN as i64),
        global = true
    )]
    years: u16,

    /// Start with months as rows and years as columns
    #[arg(long, global = true)]
    transposed: bool,
}


#[derive(Subcommand)]
enum Commands {
    /// Open the interactive grid editor (default)
    Edit,

    /// Print the blank initial grid without opening the editor
    Template {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = TemplateFormat::Tsv)]
        format: TemplateFormat,
    },
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(get_log_path);
    if let Err(e) = init_logging(&log_path, cli.verbose) {
        eprintln!("Warning: logging disabled: {e:#}");
    }
    debug!(grid = ?cli.grid, "parsed arguments");

    let GridArgs { start_year, years, transposed } = cli.grid;
    let years = usize::from(years);

    match cli.command {
        Some(Commands::Template { format }) => {
            commands::template::run(start_year, years, transposed, format)?;
        }
        Some(Commands::Edit) | None => {
            commands::edit::run(EditOptions { start_year, years, transposed })?;
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ygrid"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.grid.start_year, DEFAULT_START_YEAR);
        assert_eq!(usize::from(cli.grid.years), DEFAULT_YEAR_SPAN);
        assert!(!cli.grid.transposed);
    }

    #[test]
    fn test_template_flags() {
        let cli = Cli::try_parse_from([
            "ygrid", "template", "--format", "json", "--start-year", "1999", "--transposed",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Some(Commands::Template { format: TemplateFormat::Json })
        ));
        assert_eq!(cli.grid.start_year, 1999);
        assert!(cli.grid.transposed);
    }

    #[test]
    fn test_years_bounded() {
        let max = MAX_YEAR_SPAN.to_string();
        let cli = Cli::try_parse_from(["ygrid", "template", "--years", max.as_str()]).unwrap();
        assert_eq!(cli.grid.years, MAX_YEAR_SPAN);

        let over = (MAX_YEAR_SPAN as u32 + 1).to_string();
        assert!(Cli::try_parse_from(["ygrid", "template", "--years", over.as_str()]).is_err());
        assert!(Cli::try_parse_from(["ygrid", "--years", "4000000000"]).is_err());
        assert!(Cli::try_parse_from(["ygrid", "--years", "-1"]).is_err());
    }
}

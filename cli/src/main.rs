mod logging;
mod summary;
mod theme;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use habitchart_core::{open_repository, Config, YearUseCase};
use tracing::warn;

use crate::logging::{init_logging, LogConfig};
use crate::theme::Theme;

#[derive(Parser)]
#[command(name = "habitchart")]
#[command(about = "Yearly habit calendar built from monthly CSV files", long_about = None)]
struct Cli {
    /// Config file (default: ~/.habitchart/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding <month>_<yy>.csv files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the calendar view
    Show { year: Option<String> },
    /// Print a per-month table
    Summary { year: Option<String> },
    /// Print the year as JSON
    Json { year: Option<String> },
    /// List configured years
    Years,
}

fn resolve_year(config: &Config, year: Option<String>) -> Result<String> {
    let year = year.unwrap_or_else(|| config.default_year());
    config.ensure_year_available(&year)?;
    Ok(year)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.log_file.clone()))?;

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    let repo = open_repository(&config)?;
    let use_case = YearUseCase::new(&repo, &config.available_years);

    match cli.command.unwrap_or(Commands::Show { year: None }) {
        Commands::Show { year } => {
            let year = resolve_year(&config, year)?;
            let theme = Theme::from_name(&config.theme).unwrap_or_else(|| {
                warn!(theme = %config.theme, "unknown theme, using green");
                Theme::default()
            });
            tui::run(&use_case, &year, theme)?;
        }
        Commands::Summary { year } => {
            let year = resolve_year(&config, year)?;
            let result = use_case.build_year(&year)?;
            summary::show_summary(&result);
        }
        Commands::Json { year } => {
            let year = resolve_year(&config, year)?;
            let result = use_case.build_year(&year)?;
            println!("{}", result.to_json_pretty()?);
        }
        Commands::Years => {
            let with_data = use_case.years_with_data()?;
            for year in &config.available_years {
                let marker = if with_data.contains(year) { "*" } else { " " };
                println!("{} {}", marker, year);
            }
        }
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use staffing_heatmap::config::Config;
use staffing_heatmap::{compute_occupancy, loader, report, Interval, Roster};

#[derive(Parser)]
#[command(name = "staffing-heatmap")]
#[command(about = "Weekly staffing planner: on-duty headcount per interval", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Heatmap,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the people in a roster
    People {
        #[arg(long)]
        roster: Option<PathBuf>,
    },
    /// Compute and render the weekly staffing grid
    Grid {
        #[arg(long)]
        roster: Option<PathBuf>,
        /// Interval in minutes (15, 30 or 60)
        #[arg(long)]
        interval: Option<u32>,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Print counts next to heatmap shading
        #[arg(long)]
        annotate: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate a roster without rendering anything
    Check {
        #[arg(long)]
        roster: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("invalid STAFFING_* environment")?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::People { roster } => {
            let roster = load(roster, &config)?;
            print!("{}", report::render_people(&roster));
        }
        Commands::Grid {
            roster,
            interval,
            format,
            annotate,
            out,
        } => {
            let roster = load(roster, &config)?;
            let interval = match interval {
                Some(minutes) => Interval::preset(minutes)?,
                None => config.interval,
            };
            let grid = compute_occupancy(roster.people(), interval);

            let rendered = match format {
                Format::Table => report::render_table(&grid),
                Format::Heatmap => report::render_heatmap(&grid, annotate),
                Format::Csv => {
                    let mut buffer = Vec::new();
                    report::write_grid_csv(&grid, &mut buffer)?;
                    String::from_utf8(buffer).context("grid CSV was not UTF-8")?
                }
                Format::Json => serde_json::to_string_pretty(&grid)? + "\n",
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Grid written to {}.", path.display());
                }
                None => print!("{rendered}"),
            }
        }
        Commands::Check { roster } => {
            let roster = load(roster, &config)?;
            println!("Roster OK: {} people.", roster.len());
        }
    }

    Ok(())
}

fn load(path: Option<PathBuf>, config: &Config) -> anyhow::Result<Roster> {
    let path = path
        .or_else(|| config.roster_path.clone())
        .context("no roster given; pass --roster or set STAFFING_ROSTER")?;
    loader::load_roster_csv(&path).with_context(|| format!("failed to load {}", path.display()))
}

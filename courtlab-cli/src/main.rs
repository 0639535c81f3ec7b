//! CourtLab CLI — headless team lookup, leaderboards, and report export.
//!
//! Commands:
//! - `team` — look up one team by case-insensitive substring and print its stats
//! - `top` — print the top-N leaderboard for a column, optionally export CSV
//! - `correlate` — Pearson r and least-squares fit between two columns
//! - `report` — write the markdown league report

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use courtlab_analytics::{
    correlation, export_leaders_csv, leaders, write_report, ColumnSummary, ReportOptions,
};
use courtlab_core::config::AppConfig;
use courtlab_core::search::search;
use courtlab_core::{League, StatColumn, TeamRecord};

#[derive(Parser)]
#[command(
    name = "courtlab",
    about = "CourtLab CLI — college basketball statistics explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a team by name (case-insensitive substring) and print its stats.
    Team {
        /// Search text, e.g. "kansas".
        name: String,

        /// Path to the league CSV. Defaults to courtlab.toml, then
        /// basketball_stats.csv in the working directory.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print the top-N leaderboard for a column.
    Top {
        /// Column name, e.g. ncaa-champs or win-pct-2023.
        column: StatColumn,

        /// Leaderboard size.
        #[arg(short = 'n', long, default_value_t = 10)]
        top_n: usize,

        /// Also export the leaderboard as CSV to this path.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Path to the league CSV.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Correlation and regression between two columns over the whole league.
    Correlate {
        /// X column name.
        x: StatColumn,

        /// Y column name.
        y: StatColumn,

        /// Path to the league CSV.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Write the markdown league report.
    Report {
        /// Output path.
        #[arg(long, default_value = "courtlab_report.md")]
        out: PathBuf,

        /// Leaderboard column for the report.
        #[arg(long, default_value = "ncaa-champs")]
        leaders: StatColumn,

        /// Leaderboard size for the report.
        #[arg(short = 'n', long, default_value_t = 10)]
        top_n: usize,

        /// Path to the league CSV.
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Team { name, data } => cmd_team(&name, data.as_deref()),
        Commands::Top {
            column,
            top_n,
            csv,
            data,
        } => cmd_top(column, top_n, csv.as_deref(), data.as_deref()),
        Commands::Correlate { x, y, data } => cmd_correlate(x, y, data.as_deref()),
        Commands::Report {
            out,
            leaders,
            top_n,
            data,
        } => cmd_report(&out, leaders, top_n, data.as_deref()),
    }
}

/// Resolve and load the league table, or fail with a pointer at `--data`.
fn load_league(data: Option<&Path>) -> Result<League> {
    let config = AppConfig::discover()?;
    let Some(path) = config.resolve_data_path(data) else {
        bail!(
            "no league CSV found: pass --data <path>, set data_path in {}, \
             or place {} in the working directory",
            courtlab_core::config::CONFIG_FILE,
            courtlab_core::config::DEFAULT_DATA_FILE,
        );
    };
    League::load_csv(&path).with_context(|| format!("loading league table from {}", path.display()))
}

fn cmd_team(name: &str, data: Option<&Path>) -> Result<()> {
    let league = load_league(data)?;
    let matches = search(&league, name);

    match matches.as_slice() {
        [] => bail!("No teams match '{name}'"),
        [team] => {
            print_team(team);
            Ok(())
        }
        many => {
            println!("{} teams match '{name}':", many.len());
            for team in many {
                println!("  {}", team.school);
            }
            Ok(())
        }
    }
}

fn print_team(team: &TeamRecord) {
    println!("{}", team.school);
    println!("{}", "=".repeat(team.school.len()));
    println!();
    println!("All-Time");
    for col in StatColumn::ALL_TIME {
        println!("  {:<24} {}", col.label(), col.format_value(col.value(team)));
    }
    println!();
    println!("2023 Season");
    for col in StatColumn::SEASON_2023 {
        println!("  {:<24} {}", col.label(), col.format_value(col.value(team)));
    }
}

fn cmd_top(
    column: StatColumn,
    top_n: usize,
    csv: Option<&Path>,
    data: Option<&Path>,
) -> Result<()> {
    let league = load_league(data)?;
    let board = leaders(&league, column, top_n);

    let summary = ColumnSummary::compute(&league, column);
    println!(
        "Top {} by {} (league avg {})",
        board.len(),
        column.label(),
        column.format_value(summary.mean)
    );
    for entry in &board {
        println!(
            "  {:>2}. {:<24} {}",
            entry.rank,
            entry.school,
            column.format_value(entry.value)
        );
    }

    if let Some(path) = csv {
        export_leaders_csv(path, &league, column, top_n)?;
        println!();
        println!("Leaderboard exported to {}", path.display());
    }
    Ok(())
}

fn cmd_correlate(x: StatColumn, y: StatColumn, data: Option<&Path>) -> Result<()> {
    let league = load_league(data)?;
    let report = correlation(&league, x, y);

    println!("{} vs {} over {} teams", x.label(), y.label(), report.n);
    println!("  Pearson r  {:>8.3}", report.r);
    match report.fit {
        Some(fit) => {
            println!("  r-squared  {:>8.3}", fit.r_squared);
            println!("  slope      {:>8.4}", fit.slope);
            println!("  intercept  {:>8.4}", fit.intercept);
        }
        None => println!("  no regression line (zero variance in {})", x.label()),
    }
    Ok(())
}

fn cmd_report(out: &Path, leaders: StatColumn, top_n: usize, data: Option<&Path>) -> Result<()> {
    let league = load_league(data)?;
    let options = ReportOptions {
        leader_column: leaders,
        top_n,
        ..ReportOptions::default()
    };
    write_report(out, &league, &options)?;
    println!(
        "Report for {} teams written to {}",
        league.len(),
        out.display()
    );
    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use ev_advisor::model::weights::ScoreWeights;
use ev_advisor::report::{self, ReportMode};
use ev_advisor::{input, logging, score_and_group_with};

#[derive(Parser)]
#[command(name = "ev-advisor")]
#[command(version)]
#[command(about = "Score EV specs and recommend affinity groups from a CSV dataset")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a vehicle dataset and write the recommendation reports
    Run {
        /// Path to the vehicle spec CSV
        #[arg(long)]
        input: PathBuf,

        /// Output directory for summary.txt / summary.json
        #[arg(long)]
        out: PathBuf,

        /// Report artifacts to write
        #[arg(long, value_enum, default_value_t = ReportModeArg::Both)]
        mode: ReportModeArg,

        /// Listing length per group
        #[arg(long, default_value_t = 5)]
        top_n: usize,

        /// Qualification percentile for the specialized groups
        #[arg(long, default_value_t = 67.0)]
        cutoff_percentile: f64,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum ReportModeArg {
    Text,
    Json,
    #[default]
    Both,
}

impl std::fmt::Display for ReportModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportModeArg::Text => write!(f, "text"),
            ReportModeArg::Json => write!(f, "json"),
            ReportModeArg::Both => write!(f, "both"),
        }
    }
}

impl From<ReportModeArg> for ReportMode {
    fn from(value: ReportModeArg) -> Self {
        match value {
            ReportModeArg::Text => ReportMode::Text,
            ReportModeArg::Json => ReportMode::Json,
            ReportModeArg::Both => ReportMode::Both,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            input,
            out,
            mode,
            top_n,
            cutoff_percentile,
        } => run_scoring(input, out, mode.into(), top_n, cutoff_percentile),
    }
}

fn run_scoring(
    input: PathBuf,
    out: PathBuf,
    mode: ReportMode,
    top_n: usize,
    cutoff_percentile: f64,
) -> Result<(), String> {
    if !(0.0..=100.0).contains(&cutoff_percentile) {
        return Err(format!(
            "invalid --cutoff-percentile {cutoff_percentile} (use 0..=100)"
        ));
    }

    let raw = input::load_dataset(&input).map_err(|e| e.to_string())?;

    let mut weights = ScoreWeights::default_v1();
    weights.cutoff_percentile = cutoff_percentile;

    let outcome = score_and_group_with(&raw, &weights);
    if outcome.dropped > 0 {
        warn!(
            dropped = outcome.dropped,
            "rows excluded from scoring for missing feature values"
        );
    }
    if outcome.records.is_empty() {
        warn!("no scoreable vehicles in the dataset; reports will be empty");
    }

    let summary = report::build_summary(&outcome, raw.len(), &weights, top_n);
    report::write_reports(&summary, &out, mode).map_err(|e| e.to_string())?;
    info!(out = %out.display(), "reports written");

    Ok(())
}

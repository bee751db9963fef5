//! Markov momentum CLI
//!
//! Estimate rise/fall transition probabilities from a CSV price history and
//! project Monte Carlo price paths.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use markov_momentum::data::DEFAULT_CLOSE_COLUMN;
use markov_momentum::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "markov-sim")]
#[command(about = "Rise/fall Markov transition estimates and adaptive Monte Carlo price paths")]
struct Cli {
    /// Input CSV file with a header row
    #[arg(short, long)]
    input: PathBuf,

    /// Zero-based index of the closing-price column
    #[arg(long, default_value_t = DEFAULT_CLOSE_COLUMN)]
    column: usize,

    /// Return threshold (decimal) separating Flat from Rise/Fall
    #[arg(short, long, default_value_t = 0.0)]
    threshold: f64,

    /// Count Flat days as Fall instead of skipping them
    #[arg(long)]
    fold_flat: bool,

    /// Number of days to simulate
    #[arg(short, long, default_value_t = 30)]
    days: usize,

    /// Initial price (defaults to the last price in the file)
    #[arg(short = 'p', long)]
    initial_price: Option<f64>,

    /// Number of simulated paths
    #[arg(short = 'n', long, default_value_t = 100)]
    simulations: usize,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Skip simulation, print transition estimates only
    #[arg(long)]
    estimate_only: bool,

    /// JSON configuration file; flags above are ignored when given
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the full report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let prices = load_closing_prices(&cli.input, cli.column)
        .with_context(|| format!("Failed to load prices from {:?}", cli.input))?;
    info!(prices = prices.len(), "price history loaded");

    let config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {:?}", path))?;
            AnalysisConfig::from_json(&json)?
        }
        None => AnalysisConfig {
            threshold: cli.threshold,
            flat_policy: if cli.fold_flat {
                FlatPolicy::FoldIntoFall
            } else {
                FlatPolicy::Exclude
            },
            simulation: (!cli.estimate_only).then(|| SimulationParams {
                initial_price: cli.initial_price.unwrap_or_else(|| prices.last()),
                horizon_days: cli.days,
                num_paths: cli.simulations,
            }),
            seed: cli.seed,
        },
    };

    let analysis = Analysis::new(config).context("Invalid parameters")?;
    let stdout = std::io::stdout().lock();
    if cli.json {
        analysis.run(&prices, &mut JsonReport::new(stdout))?;
    } else {
        analysis.run(&prices, &mut TextSummary::new(stdout))?;
    }

    Ok(())
}

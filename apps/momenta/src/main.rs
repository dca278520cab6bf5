//! # Momenta CLI
//!
//! Command-line front end for the momenta-core statistics library.
//!
//! Commands:
//! - `summary` - summary statistics of a float data file
//! - `quantile` - empirical quantile of a data file
//! - `ranks` - rank of each sample with a chosen tie-breaking method
//! - `sample` - draw values from a parameterized distribution

use clap::{Parser, Subcommand};
use momenta::cli::{cmd_quantile, cmd_ranks, cmd_sample, cmd_summary};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[derive(Parser)]
#[command(name = "momenta", version, about = "Statistics over float data files")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit machine-readable JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print summary statistics for a data file
    Summary {
        /// File of whitespace-separated floats
        input: PathBuf,
    },

    /// Print the empirical quantile at a probability
    Quantile {
        /// File of whitespace-separated floats
        input: PathBuf,
        /// Probability in [0, 1]
        tau: f64,
    },

    /// Print the rank of each sample
    Ranks {
        /// File of whitespace-separated floats
        input: PathBuf,
        /// Tie-breaking method: first, average, min or max
        #[arg(long, default_value = "average")]
        method: String,
    },

    /// Draw samples from a distribution
    Sample {
        /// Distribution name: normal or pareto
        dist: String,
        /// First parameter (mean for normal, scale for pareto)
        a: f64,
        /// Second parameter (std_dev for normal, shape for pareto)
        b: f64,
        /// Number of samples to draw
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Summary { input } => cmd_summary(&input, cli.json),
        Command::Quantile { input, tau } => cmd_quantile(&input, tau, cli.json),
        Command::Ranks { input, method } => cmd_ranks(&input, &method, cli.json),
        Command::Sample {
            dist,
            a,
            b,
            count,
            seed,
        } => cmd_sample(&dist, a, b, count, seed, cli.json),
    };

    if let Err(err) = result {
        tracing::error!(%err, "command failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

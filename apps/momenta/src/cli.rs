//! # CLI Module
//!
//! Command implementations for the Momenta binary.
//!
//! Each `cmd_*` function is the body of one subcommand and returns
//! `Result<(), CliError>` so integration tests can drive the commands
//! without spawning the binary. File parsing happens here; the statistics
//! themselves live in momenta-core.

use momenta_core::StatsError;
use momenta_core::distribution::{Normal, Pareto};
use momenta_core::statistics::{Median, OrderStatistics, RankTieBreaker, Statistics};
use rand::SeedableRng;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::{Path, PathBuf};

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by the CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading the input file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The input file contained a token that is not a float.
    #[error("invalid numeric value {value:?} in {path}")]
    Parse {
        /// The offending token.
        value: String,
        /// The file it came from.
        path: PathBuf,
    },

    /// The input file contained no samples.
    #[error("input contains no samples")]
    Empty,

    /// The requested quantile probability is out of range.
    #[error("quantile must be within [0, 1], got {0}")]
    BadTau(f64),

    /// The rank tie-breaking method is not recognized.
    #[error("unknown rank method {0:?} (expected first, average, min or max)")]
    BadRankMethod(String),

    /// The distribution name is not recognized.
    #[error("unknown distribution {0:?} (expected normal or pareto)")]
    BadDistribution(String),

    /// Distribution construction rejected the parameters.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// JSON serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// INPUT PARSING
// =============================================================================

/// Reads whitespace/line-separated floats from a file.
///
/// Returns [`CliError::Empty`] for files without any samples so commands
/// never have to print NaN because of an empty input.
pub fn read_samples(path: &Path) -> Result<Vec<f64>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut samples = Vec::new();
    for token in content.split_whitespace() {
        let value: f64 = token.parse().map_err(|_| CliError::Parse {
            value: token.to_string(),
            path: path.to_path_buf(),
        })?;
        samples.push(value);
    }

    if samples.is_empty() {
        return Err(CliError::Empty);
    }
    tracing::debug!(count = samples.len(), path = %path.display(), "read samples");
    Ok(samples)
}

fn parse_tie_breaker(method: &str) -> Result<RankTieBreaker, CliError> {
    match method {
        "first" => Ok(RankTieBreaker::First),
        "average" => Ok(RankTieBreaker::Average),
        "min" => Ok(RankTieBreaker::Min),
        "max" => Ok(RankTieBreaker::Max),
        other => Err(CliError::BadRankMethod(other.to_string())),
    }
}

// =============================================================================
// SUMMARY COMMAND
// =============================================================================

/// Summary statistics of one data file.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Unbiased sample variance.
    pub variance: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Empirical median.
    pub median: f64,
    /// First quartile.
    pub lower_quartile: f64,
    /// Third quartile.
    pub upper_quartile: f64,
    /// Interquartile range.
    pub interquartile_range: f64,
}

/// Computes the summary report for a sample set.
#[must_use]
pub fn summarize(data: &[f64]) -> SummaryReport {
    let mut scratch = data.to_vec();
    SummaryReport {
        count: data.len(),
        mean: data.mean(),
        variance: data.variance(),
        std_dev: data.std_dev(),
        min: Statistics::min(data),
        max: Statistics::max(data),
        median: data.median(),
        lower_quartile: scratch.lower_quartile(),
        upper_quartile: scratch.upper_quartile(),
        interquartile_range: scratch.interquartile_range(),
    }
}

/// `momenta summary <input>` - print summary statistics for a data file.
pub fn cmd_summary(input: &Path, json: bool) -> Result<(), CliError> {
    let data = read_samples(input)?;
    let report = summarize(&data);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("count:               {}", report.count);
        println!("mean:                {}", report.mean);
        println!("variance:            {}", report.variance);
        println!("std_dev:             {}", report.std_dev);
        println!("min:                 {}", report.min);
        println!("max:                 {}", report.max);
        println!("median:              {}", report.median);
        println!("lower_quartile:      {}", report.lower_quartile);
        println!("upper_quartile:      {}", report.upper_quartile);
        println!("interquartile_range: {}", report.interquartile_range);
    }
    Ok(())
}

// =============================================================================
// QUANTILE COMMAND
// =============================================================================

/// A single quantile of one data file.
#[derive(Debug, Clone, Serialize)]
pub struct QuantileReport {
    /// The requested probability.
    pub tau: f64,
    /// The empirical quantile at `tau`.
    pub quantile: f64,
}

/// Computes the empirical quantile at `tau`.
pub fn quantile_report(data: &[f64], tau: f64) -> Result<QuantileReport, CliError> {
    if !(0.0..=1.0).contains(&tau) {
        return Err(CliError::BadTau(tau));
    }
    let mut scratch = data.to_vec();
    Ok(QuantileReport {
        tau,
        quantile: scratch.quantile(tau),
    })
}

/// `momenta quantile <input> <tau>` - print the empirical quantile.
pub fn cmd_quantile(input: &Path, tau: f64, json: bool) -> Result<(), CliError> {
    let data = read_samples(input)?;
    let report = quantile_report(&data, tau)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("quantile({}) = {}", report.tau, report.quantile);
    }
    Ok(())
}

// =============================================================================
// RANKS COMMAND
// =============================================================================

/// Ranks of one data file, parallel to the input order.
#[derive(Debug, Clone, Serialize)]
pub struct RanksReport {
    /// The tie-breaking method used.
    pub method: RankTieBreaker,
    /// `ranks[i]` is the rank of the i-th input sample.
    pub ranks: Vec<f64>,
}

/// Computes the ranks of a sample set.
pub fn ranks_report(data: &[f64], method: &str) -> Result<RanksReport, CliError> {
    let tie_breaker = parse_tie_breaker(method)?;
    let mut scratch = data.to_vec();
    Ok(RanksReport {
        method: tie_breaker,
        ranks: scratch.ranks(tie_breaker),
    })
}

/// `momenta ranks <input>` - print the rank of each sample.
pub fn cmd_ranks(input: &Path, method: &str, json: bool) -> Result<(), CliError> {
    let data = read_samples(input)?;
    let report = ranks_report(&data, method)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (value, rank) in data.iter().zip(&report.ranks) {
            println!("{value}\t{rank}");
        }
    }
    Ok(())
}

// =============================================================================
// SAMPLE COMMAND
// =============================================================================

/// Draws `count` samples from the named distribution.
///
/// `a` and `b` are the distribution parameters: mean/std_dev for
/// `normal`, scale/shape for `pareto`. A seed makes the draw
/// reproducible.
pub fn sample_values(
    dist: &str,
    a: f64,
    b: f64,
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<f64>, CliError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let samples = match dist {
        "normal" => {
            let d = Normal::new(a, b)?;
            (0..count).map(|_| d.sample(&mut rng)).collect()
        }
        "pareto" => {
            let d = Pareto::new(a, b)?;
            (0..count).map(|_| d.sample(&mut rng)).collect()
        }
        other => return Err(CliError::BadDistribution(other.to_string())),
    };
    tracing::debug!(dist, count, seeded = seed.is_some(), "drew samples");
    Ok(samples)
}

/// `momenta sample <dist> <a> <b>` - draw samples from a distribution.
pub fn cmd_sample(
    dist: &str,
    a: f64,
    b: f64,
    count: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<(), CliError> {
    let samples = sample_values(dist, a, b, count, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
    } else {
        for sample in samples {
            println!("{sample}");
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

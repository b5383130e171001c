//! Dragon Search - Entry Point
//!
//! Loads the search configuration, applies command-line overrides, runs the
//! spiral search on the built-in noise generator and prints the summary.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dragon_search::core::error::Result;
use dragon_search::{run_search, NoiseClassifier, PatternKind, SearchConfig};

/// Spiral search for the dragon biome arrangement
#[derive(Parser, Debug)]
#[command(name = "dragon_search")]
#[command(about = "Search outward from the origin for a rare mesa/desert arrangement")]
struct Args {
    /// TOML config file; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// World seed
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Number of windows to visit
    #[arg(long)]
    windows: Option<u64>,

    /// Window edge length in cells
    #[arg(long)]
    window_size: Option<u32>,

    /// Overlap added to each window
    #[arg(long)]
    margin: Option<u32>,

    /// Worker thread count
    #[arg(long, short = 'j')]
    workers: Option<usize>,

    /// Windows between progress lines per worker
    #[arg(long)]
    progress_interval: Option<u64>,

    /// Pattern to look for: dragon or legacy-dragon
    #[arg(long)]
    pattern: Option<PatternKind>,

    /// Cells per noise feature in the built-in generator
    #[arg(long, default_value_t = 96)]
    feature_size: u32,

    /// Print the full report as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

impl Args {
    fn into_config(self) -> Result<(SearchConfig, u32, bool)> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)?,
            None => SearchConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(windows) = self.windows {
            config.window_count = windows;
        }
        if let Some(window_size) = self.window_size {
            config.window_size = window_size;
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(interval) = self.progress_interval {
            config.progress_interval = interval;
        }
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }

        Ok((config, self.feature_size, self.json))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dragon_search=info")),
        )
        .init();

    let (config, feature_size, json) = Args::parse().into_config()?;
    let classifier = NoiseClassifier::new(feature_size);

    let report = run_search(&config, &classifier)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!();
        println!("{}", report.summary());
    }

    Ok(())
}

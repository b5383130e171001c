//! Search configuration with documented constants
//!
//! Every knob of a run lives here. The structure is built once at startup
//! and handed to the search entry point by reference.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SearchError};
use crate::pattern::PatternKind;

/// Configuration for one search run
///
/// Defaults reproduce the reference run: 10000 windows of 1024 cells
/// around the origin of the seed below, on 4 workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    // === WORLD ===
    /// World seed handed to the biome generator
    pub seed: i64,

    // === WINDOWS ===
    /// How many windows to visit, in spiral order from the origin
    ///
    /// To reach N cells out from the origin in every direction you need
    /// about (2N / window_size)^2 windows.
    pub window_count: u64,

    /// Edge length of a window's core square (cells)
    ///
    /// Window `i` starts at `spiral(i) * window_size`, so cores tile the
    /// plane without gaps.
    pub window_size: u32,

    /// Extra cells appended to the right and bottom of every window
    ///
    /// A pattern crossing a core boundary is still seen whole by one
    /// window as long as the margin is at least the pattern's largest
    /// dimension minus one. `validate` enforces that.
    pub margin: u32,

    // === PARALLELIZATION ===
    /// Number of search workers
    ///
    /// Throughput scales sub-linearly and peaks well below the core count
    /// on large machines, so this is tuned by hand and never auto-scaled.
    pub workers: usize,

    // === REPORTING ===
    /// Each worker logs a progress line after this many windows
    pub progress_interval: u64,

    // === PATTERN ===
    /// Which landmark arrangement to look for
    pub pattern: PatternKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: -4172144997902289642,
            window_count: 10000,
            window_size: 1024,
            margin: 128,
            workers: 4,
            progress_interval: 100,
            pattern: PatternKind::Dragon,
        }
    }
}

impl SearchConfig {
    /// Edge length of the generated square for each window
    pub fn area_size(&self) -> usize {
        self.window_size as usize + self.margin as usize
    }

    /// Cells counted as processed per window (the core, not the margin)
    pub fn cells_per_window(&self) -> u64 {
        self.window_size as u64 * self.window_size as u64
    }

    /// Parse a config from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(SearchError::InvalidConfig("window_size must be positive".into()));
        }

        if self.workers == 0 {
            return Err(SearchError::InvalidConfig("workers must be positive".into()));
        }

        if self.progress_interval == 0 {
            return Err(SearchError::InvalidConfig(
                "progress_interval must be positive".into(),
            ));
        }

        let pattern = self.pattern.pattern();
        let area = self.area_size();
        if area < pattern.width() || area < pattern.height() {
            return Err(SearchError::InvalidConfig(format!(
                "area size ({}) cannot hold the {} pattern ({}x{})",
                area,
                pattern.name(),
                pattern.width(),
                pattern.height()
            )));
        }

        let required_margin = pattern.width().max(pattern.height()) - 1;
        if (self.margin as usize) < required_margin {
            return Err(SearchError::InvalidConfig(format!(
                "margin ({}) must be at least {} to catch {} patterns crossing a window edge",
                self.margin,
                required_margin,
                pattern.name()
            )));
        }

        Ok(())
    }
}

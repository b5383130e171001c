//! Parallel spiral search
//!
//! Control flow: the distributor hands each worker a stripe of spiral
//! indices; each worker generates the window's biomes, prefilters, matches,
//! and tallies; the runner joins all workers and sums their tallies.

pub mod distributor;
pub mod report;
pub mod runner;
pub mod worker;

pub use distributor::WorkDistributor;
pub use report::{combine, SearchReport, SearchTotals};
pub use runner::run_search;
pub use worker::{run_worker, scan_window, ScanOutcome, SearchContext, WorkerResult};

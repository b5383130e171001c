//! Search entry point: fan workers out on a fixed pool, join, aggregate

use std::time::Instant;

use rayon::prelude::*;

use crate::biome::AreaClassifier;
use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::search::distributor::WorkDistributor;
use crate::search::report::SearchReport;
use crate::search::worker::{run_worker, SearchContext, WorkerResult};

/// Run the full search described by `config`
///
/// Builds a pool of exactly `config.workers` threads and runs one worker
/// per thread over its stripe of the spiral. Returns once every worker has
/// finished. If any worker fails, the first error is returned and no
/// report is produced.
pub fn run_search<C: AreaClassifier + ?Sized>(
    config: &SearchConfig,
    classifier: &C,
) -> Result<SearchReport> {
    config.validate()?;

    let pattern = config.pattern.pattern();
    let distributor = WorkDistributor::new(config.workers, config.window_count)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .thread_name(|i| format!("search-worker-{}", i))
        .build()?;

    tracing::info!(
        "Searching {} windows of {} cells (+{} margin) for the {} pattern, seed {}, {} workers",
        config.window_count,
        config.window_size,
        config.margin,
        pattern.name(),
        config.seed,
        config.workers
    );

    let ctx = SearchContext {
        config,
        pattern: &pattern,
        distributor: &distributor,
        classifier,
    };

    let start = Instant::now();
    let results: Vec<WorkerResult> = pool.install(|| {
        (0..config.workers)
            .into_par_iter()
            .with_max_len(1)
            .map(|worker| run_worker(worker, &ctx))
            .collect::<Result<Vec<_>>>()
    })?;
    let elapsed = start.elapsed();

    let report = SearchReport::new(config, results, elapsed);
    tracing::info!(
        "Search finished: {} windows, {} matches in {:.1?}",
        report.totals.total_windows,
        report.totals.total_matches,
        elapsed
    );

    Ok(report)
}

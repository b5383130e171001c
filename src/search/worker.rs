//! One search worker: generate, prefilter, match, tally

use serde::{Deserialize, Serialize};

use crate::biome::AreaClassifier;
use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::types::{Coord, MatchLocation};
use crate::pattern::{find_match, has_primary_class, Pattern};
use crate::search::distributor::WorkDistributor;
use crate::spatial::grid::ClassificationGrid;
use crate::spatial::window::Window;

/// What a single worker saw
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerResult {
    pub worker: usize,
    pub windows_processed: u64,
    pub matches_found: u64,
    /// Windows skipped because they had no primary cell
    pub prefilter_rejections: u64,
    /// Absolute anchors, in the order this worker found them
    pub locations: Vec<MatchLocation>,
}

impl WorkerResult {
    /// Counts only, no locations
    pub fn tally(worker: usize, windows_processed: u64, matches_found: u64) -> Self {
        Self {
            worker,
            windows_processed,
            matches_found,
            ..Self::default()
        }
    }

    fn record_match(&mut self, location: MatchLocation) {
        self.matches_found += 1;
        self.locations.push(location);
    }
}

/// Everything a worker reads; shared immutably across the pool
pub struct SearchContext<'a, C: ?Sized> {
    pub config: &'a SearchConfig,
    pub pattern: &'a Pattern,
    pub distributor: &'a WorkDistributor,
    pub classifier: &'a C,
}

/// Scan one window's grid. Returns the absolute anchor of the first match.
///
/// Patterns without a primary cell skip the prefilter and go straight to
/// the exact match.
pub fn scan_window(grid: &ClassificationGrid, window: &Window, pattern: &Pattern) -> ScanOutcome {
    if pattern.has_primary() && !has_primary_class(grid) {
        return ScanOutcome::Rejected;
    }
    match find_match(grid, pattern) {
        Some(pos) => ScanOutcome::Found(window.origin.offset(pos.x as i64, pos.z as i64)),
        None => ScanOutcome::Empty,
    }
}

/// Result of scanning one window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Prefilter saw no primary cell
    Rejected,
    /// Passed the prefilter, no exact match
    Empty,
    Found(Coord),
}

/// Run worker `worker` over its stripe until exhausted
///
/// A `progress_interval` of zero turns progress lines off.
/// The first generation or allocation error ends the worker and is
/// returned; the tally so far is dropped.
pub fn run_worker<C: AreaClassifier + ?Sized>(
    worker: usize,
    ctx: &SearchContext<'_, C>,
) -> Result<WorkerResult> {
    let config = ctx.config;
    let area = config.area_size();
    let mut grid = ClassificationGrid::try_new(area, area)?;
    let mut result = WorkerResult {
        worker,
        ..WorkerResult::default()
    };

    tracing::debug!(
        "Worker {} starting on {} windows",
        worker,
        ctx.distributor.stripe_len(worker)
    );

    for index in ctx.distributor.stripe(worker) {
        let window = Window::for_index(index, config);
        ctx.classifier.fill(config.seed, window.area(), &mut grid)?;

        match scan_window(&grid, &window, ctx.pattern) {
            ScanOutcome::Rejected => result.prefilter_rejections += 1,
            ScanOutcome::Empty => {}
            ScanOutcome::Found(anchor) => {
                tracing::info!("Found it - {} (window {})", anchor, index);
                result.record_match(MatchLocation {
                    window: index,
                    anchor,
                });
            }
        }
        result.windows_processed += 1;

        if config.progress_interval > 0 && result.windows_processed % config.progress_interval == 0 {
            let cells = result.windows_processed as f64 * config.cells_per_window() as f64;
            tracing::info!(
                "Worker {:2} has processed {} windows ({:.1} billion cells), and is currently at distance {} from origin",
                worker,
                result.windows_processed,
                cells * 1e-9,
                window.distance()
            );
        }
    }

    tracing::debug!(
        "Worker {} finished: {} windows, {} matches, {} rejected by prefilter",
        worker,
        result.windows_processed,
        result.matches_found,
        result.prefilter_rejections
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomeId;
    use crate::core::error::SearchError;
    use crate::pattern::PatternKind;
    use crate::spatial::window::Area;

    /// Dragon planted once at an absolute anchor, plains elsewhere
    struct Planted {
        anchor: Coord,
    }

    impl AreaClassifier for Planted {
        fn fill(&self, _seed: i64, area: Area, grid: &mut ClassificationGrid) -> Result<()> {
            grid.fill(BiomeId::PLAINS);
            let pattern = PatternKind::Dragon.pattern();
            for (dx, dz, biome) in pattern.stamp(BiomeId::MESA, BiomeId::DESERT) {
                let x = self.anchor.x + dx as i64 - area.origin.x;
                let z = self.anchor.z + dz as i64 - area.origin.z;
                if x >= 0 && z >= 0 {
                    grid.set(x as usize, z as usize, biome);
                }
            }
            Ok(())
        }
    }

    struct Broken;

    impl AreaClassifier for Broken {
        fn fill(&self, _seed: i64, area: Area, _grid: &mut ClassificationGrid) -> Result<()> {
            Err(SearchError::Generation {
                origin: area.origin,
                reason: "layer stack exhausted".into(),
            })
        }
    }

    fn small_config() -> SearchConfig {
        SearchConfig {
            window_count: 9,
            window_size: 32,
            margin: 16,
            workers: 1,
            progress_interval: 4,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_single_worker_finds_planted_dragon() {
        let config = small_config();
        let pattern = config.pattern.pattern();
        let distributor = WorkDistributor::new(1, config.window_count).unwrap();
        // Past the margins of the windows above and to the left
        let classifier = Planted { anchor: Coord::new(20, 18) };
        let ctx = SearchContext {
            config: &config,
            pattern: &pattern,
            distributor: &distributor,
            classifier: &classifier,
        };

        let result = run_worker(0, &ctx).unwrap();
        assert_eq!(result.windows_processed, 9);
        assert_eq!(result.matches_found, 1);
        assert_eq!(
            result.locations,
            vec![MatchLocation { window: 0, anchor: Coord::new(20, 18) }]
        );
        assert_eq!(result.prefilter_rejections, 8);
    }

    #[test]
    fn test_dragon_in_overlap_reported_by_both_windows() {
        // Window 2 starts at (0, -32); its margin reaches down to z = 15
        let config = small_config();
        let pattern = config.pattern.pattern();
        let distributor = WorkDistributor::new(1, config.window_count).unwrap();
        let classifier = Planted { anchor: Coord::new(5, 3) };
        let ctx = SearchContext {
            config: &config,
            pattern: &pattern,
            distributor: &distributor,
            classifier: &classifier,
        };

        let result = run_worker(0, &ctx).unwrap();
        assert_eq!(result.matches_found, 2);
        let windows: Vec<_> = result.locations.iter().map(|l| l.window).collect();
        assert_eq!(windows, vec![0, 2]);
        assert!(result.locations.iter().all(|l| l.anchor == Coord::new(5, 3)));
    }

    #[test]
    fn test_dragon_on_window_edge_seen_through_margin() {
        // Straddles the x = 32 boundary between window 0 and window 4
        let config = small_config();
        let pattern = config.pattern.pattern();
        let distributor = WorkDistributor::new(1, config.window_count).unwrap();
        let classifier = Planted { anchor: Coord::new(26, 20) };
        let ctx = SearchContext {
            config: &config,
            pattern: &pattern,
            distributor: &distributor,
            classifier: &classifier,
        };

        let result = run_worker(0, &ctx).unwrap();
        assert_eq!(result.matches_found, 1);
        assert_eq!(result.locations[0].window, 0);
        assert_eq!(result.locations[0].anchor, Coord::new(26, 20));
    }

    #[test]
    fn test_generation_error_ends_worker() {
        let config = small_config();
        let pattern = config.pattern.pattern();
        let distributor = WorkDistributor::new(1, config.window_count).unwrap();
        let ctx = SearchContext {
            config: &config,
            pattern: &pattern,
            distributor: &distributor,
            classifier: &Broken,
        };

        assert!(matches!(
            run_worker(0, &ctx),
            Err(SearchError::Generation { .. })
        ));
    }

    #[test]
    fn test_scan_window_outcomes() {
        let pattern = PatternKind::Dragon.pattern();
        let window = Window::new(4, 32, 16);
        let mut grid = ClassificationGrid::try_filled(48, 48, BiomeId::DESERT).unwrap();
        assert_eq!(scan_window(&grid, &window, &pattern), ScanOutcome::Rejected);

        grid.set(0, 0, BiomeId::MESA);
        assert_eq!(scan_window(&grid, &window, &pattern), ScanOutcome::Empty);

        for (dx, dz, biome) in pattern.stamp(BiomeId::MESA, BiomeId::DESERT) {
            grid.set(10 + dx, 20 + dz, biome);
        }
        assert_eq!(
            scan_window(&grid, &window, &pattern),
            ScanOutcome::Found(Coord::new(42, 20))
        );
    }

    #[test]
    fn test_secondary_only_pattern_bypasses_prefilter() {
        use crate::pattern::{find_match, Pattern, Required};

        let sand = Pattern::from_rows(
            "sand",
            &[
                &[Required::Secondary, Required::Secondary],
                &[Required::Secondary, Required::Secondary],
            ],
        );
        assert!(!sand.has_primary());

        let grid = ClassificationGrid::try_filled(8, 8, BiomeId::DESERT).unwrap();
        let window = Window::new(0, 4, 4);
        assert!(find_match(&grid, &sand).is_some());
        assert_eq!(scan_window(&grid, &window, &sand), ScanOutcome::Found(Coord::ORIGIN));

        let plains = ClassificationGrid::try_filled(8, 8, BiomeId::PLAINS).unwrap();
        assert_eq!(scan_window(&plains, &window, &sand), ScanOutcome::Empty);
    }

    #[test]
    fn test_zero_progress_interval_runs_without_progress_lines() {
        let config = SearchConfig {
            progress_interval: 0,
            ..small_config()
        };
        let pattern = config.pattern.pattern();
        let distributor = WorkDistributor::new(1, config.window_count).unwrap();
        let classifier = Planted { anchor: Coord::new(20, 18) };
        let ctx = SearchContext {
            config: &config,
            pattern: &pattern,
            distributor: &distributor,
            classifier: &classifier,
        };

        let result = run_worker(0, &ctx).unwrap();
        assert_eq!(result.windows_processed, 9);
        assert_eq!(result.matches_found, 1);
    }
}

//! Aggregation of worker results into the final report

use std::time::Duration;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::types::{Coord, MatchLocation};
use crate::search::worker::WorkerResult;

/// Summed counters across workers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTotals {
    pub total_windows: u64,
    pub total_matches: u64,
}

impl std::ops::Add for SearchTotals {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            total_windows: self.total_windows + rhs.total_windows,
            total_matches: self.total_matches + rhs.total_matches,
        }
    }
}

impl From<&WorkerResult> for SearchTotals {
    fn from(result: &WorkerResult) -> Self {
        Self {
            total_windows: result.windows_processed,
            total_matches: result.matches_found,
        }
    }
}

/// Plain sum; order of results does not matter and nothing is deduplicated
pub fn combine<'a>(results: impl IntoIterator<Item = &'a WorkerResult>) -> SearchTotals {
    results
        .into_iter()
        .map(SearchTotals::from)
        .fold(SearchTotals::default(), |acc, t| acc + t)
}

/// Complete search output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub config: SearchConfig,
    pub totals: SearchTotals,
    /// Core cells only (window_size squared per window)
    pub cells_processed: u64,
    pub elapsed_ms: u64,
    pub workers: Vec<WorkerResult>,
    /// Every match from every worker, worker by worker
    pub matches: Vec<MatchLocation>,
}

impl SearchReport {
    pub fn new(config: &SearchConfig, mut workers: Vec<WorkerResult>, elapsed: Duration) -> Self {
        workers.sort_by_key(|w| w.worker);
        let totals = combine(&workers);
        let matches = workers
            .iter()
            .flat_map(|w| w.locations.iter().copied())
            .collect();

        Self {
            config: config.clone(),
            totals,
            cells_processed: totals.total_windows * config.cells_per_window(),
            elapsed_ms: elapsed.as_millis() as u64,
            workers,
            matches,
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    /// Cells per second; zero when the run took no measurable time
    pub fn cells_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.cells_processed as f64 / secs
        } else {
            0.0
        }
    }

    /// Match anchors with overlap duplicates removed, first sighting kept
    ///
    /// The search reports a pattern once per window that sees it. This is
    /// for consumers that want one entry per place.
    pub fn distinct_locations(&self) -> Vec<Coord> {
        let mut seen = AHashSet::new();
        self.matches
            .iter()
            .map(|m| m.anchor)
            .filter(|anchor| seen.insert(*anchor))
            .collect()
    }

    /// Human-readable completion block
    pub fn summary(&self) -> String {
        format!(
            "All done.\n\
             Processed {} windows, {:.1} billions of cells\n\
             Processing time: {:.1} sec.\n\
             Processing speed: {:.1} millions of cells per second\n\
             Found {} matches",
            self.totals.total_windows,
            self.cells_processed as f64 * 1e-9,
            self.elapsed().as_secs_f64(),
            self.cells_per_second() * 1e-6,
            self.totals.total_matches,
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_sums_counts() {
        let results = vec![
            WorkerResult::tally(0, 5, 1),
            WorkerResult::tally(1, 7, 0),
            WorkerResult::tally(2, 3, 2),
        ];
        let totals = combine(&results);
        assert_eq!(totals.total_windows, 15);
        assert_eq!(totals.total_matches, 3);
    }

    #[test]
    fn test_combine_order_independent() {
        let a = vec![WorkerResult::tally(0, 5, 1), WorkerResult::tally(1, 7, 0)];
        let b = vec![WorkerResult::tally(1, 7, 0), WorkerResult::tally(0, 5, 1)];
        assert_eq!(combine(&a), combine(&b));
        assert_eq!(combine(&Vec::<WorkerResult>::new()), SearchTotals::default());
    }

    #[test]
    fn test_report_cells_and_summary() {
        let config = SearchConfig::default();
        let report = SearchReport::new(
            &config,
            vec![WorkerResult::tally(1, 600, 0), WorkerResult::tally(0, 400, 1)],
            Duration::from_secs(10),
        );

        assert_eq!(report.workers[0].worker, 0);
        assert_eq!(report.totals.total_windows, 1000);
        assert_eq!(report.cells_processed, 1000 * 1024 * 1024);
        assert!((report.cells_per_second() - 104_857_600.0).abs() < 1.0);

        let summary = report.summary();
        assert!(summary.contains("Processed 1000 windows, 1.0 billions of cells"));
        assert!(summary.contains("Processing time: 10.0 sec."));
        assert!(summary.contains("Processing speed: 104.9 millions of cells per second"));
        assert!(summary.contains("Found 1 matches"));
    }

    #[test]
    fn test_zero_elapsed_has_zero_speed() {
        let report = SearchReport::new(&SearchConfig::default(), Vec::new(), Duration::ZERO);
        assert_eq!(report.cells_per_second(), 0.0);
    }

    #[test]
    fn test_distinct_locations_drops_overlap_duplicates() {
        let anchor = Coord::new(5, 3);
        let mut w0 = WorkerResult::tally(0, 3, 0);
        w0.matches_found = 2;
        w0.locations = vec![
            MatchLocation { window: 0, anchor },
            MatchLocation { window: 2, anchor },
        ];
        let mut w1 = WorkerResult::tally(1, 3, 1);
        w1.locations = vec![MatchLocation { window: 1, anchor: Coord::new(-900, 12) }];

        let report = SearchReport::new(&SearchConfig::default(), vec![w0, w1], Duration::from_secs(1));
        assert_eq!(report.totals.total_matches, 3);
        assert_eq!(report.matches.len(), 3);
        assert_eq!(report.distinct_locations(), vec![anchor, Coord::new(-900, 12)]);
    }

    #[test]
    fn test_report_json() {
        let report = SearchReport::new(
            &SearchConfig::default(),
            vec![WorkerResult::tally(0, 2, 0)],
            Duration::from_millis(1500),
        );
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totals"]["total_windows"], 2);
        assert_eq!(value["elapsed_ms"], 1500);
        assert_eq!(value["config"]["pattern"], "dragon");
    }
}

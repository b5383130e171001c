//! Exact pattern search over a classification grid

use crate::pattern::shape::Pattern;
use crate::spatial::grid::{ClassificationGrid, GridPos};

/// Does `pattern` sit with its anchor at (`x`, `z`)?
///
/// Constraints are checked in row-major order and the check stops at the
/// first cell of the wrong class. Cells outside the grid never match.
#[inline]
pub fn matches_at(grid: &ClassificationGrid, pattern: &Pattern, x: usize, z: usize) -> bool {
    pattern.constraints().iter().all(|c| {
        grid.get(x + c.col, z + c.row)
            .map_or(false, |biome| c.required.admits(biome))
    })
}

/// First anchor (row-major, left to right) where the pattern matches
///
/// Only anchors whose whole bounding box lies inside the grid are tried.
/// The scan stops at the first hit; later matches in the same grid are not
/// reported.
pub fn find_match(grid: &ClassificationGrid, pattern: &Pattern) -> Option<GridPos> {
    if grid.width() < pattern.width() || grid.height() < pattern.height() {
        return None;
    }

    let last_x = grid.width() - pattern.width();
    let last_z = grid.height() - pattern.height();

    (0..=last_z)
        .flat_map(|z| (0..=last_x).map(move |x| GridPos::new(x, z)))
        .find(|pos| matches_at(grid, pattern, pos.x, pos.z))
}

/// Every anchor where the pattern matches, in scan order
///
/// Not used by the search loop; handy for checking fixtures and for
/// auditing windows after the fact.
pub fn find_all_matches(grid: &ClassificationGrid, pattern: &Pattern) -> Vec<GridPos> {
    if grid.width() < pattern.width() || grid.height() < pattern.height() {
        return Vec::new();
    }

    let last_x = grid.width() - pattern.width();
    let last_z = grid.height() - pattern.height();

    (0..=last_z)
        .flat_map(|z| (0..=last_x).map(move |x| GridPos::new(x, z)))
        .filter(|pos| matches_at(grid, pattern, pos.x, pos.z))
        .collect()
}

//! Cheap rejection of windows that cannot hold a pattern
//!
//! Both built-in patterns contain primary cells, and almost no window
//! contains any, so one linear scan skips the full match for most windows.
//! Only sound for patterns where `Pattern::has_primary` holds.

use crate::biome::CellClass;
use crate::spatial::grid::ClassificationGrid;

/// True as soon as any cell is primary class
pub fn has_primary_class(grid: &ClassificationGrid) -> bool {
    grid.cells().iter().any(|b| b.class() == CellClass::Primary)
}

//! Seam between the search and whatever generates biomes

use crate::core::error::{Result, SearchError};
use crate::spatial::grid::ClassificationGrid;
use crate::spatial::window::Area;

/// Deterministic biome source
///
/// Implementations must be pure: the same seed and area always produce the
/// same cells. The search calls `fill` exactly once per window and treats
/// it as the dominant cost.
pub trait AreaClassifier: Send + Sync {
    /// Overwrite every cell of `grid` with the biomes of `area`
    ///
    /// `grid` is already sized to the area; see [`check_grid_shape`].
    fn fill(&self, seed: i64, area: Area, grid: &mut ClassificationGrid) -> Result<()>;

    /// Generate a fresh grid for `area`
    fn classify(&self, seed: i64, area: Area) -> Result<ClassificationGrid> {
        let mut grid = ClassificationGrid::try_new(area.width, area.height)?;
        self.fill(seed, area, &mut grid)?;
        Ok(grid)
    }
}

impl<T: AreaClassifier + ?Sized> AreaClassifier for &T {
    fn fill(&self, seed: i64, area: Area, grid: &mut ClassificationGrid) -> Result<()> {
        (**self).fill(seed, area, grid)
    }
}

/// Reject a grid whose dimensions disagree with the requested area
pub fn check_grid_shape(area: &Area, grid: &ClassificationGrid) -> Result<()> {
    if grid.width() != area.width || grid.height() != area.height {
        return Err(SearchError::Generation {
            origin: area.origin,
            reason: format!(
                "grid is {}x{} but area is {}x{}",
                grid.width(),
                grid.height(),
                area.width,
                area.height
            ),
        });
    }
    Ok(())
}

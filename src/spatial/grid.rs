//! Dense classification grid for one window

use crate::biome::BiomeId;
use crate::core::error::{Result, SearchError};

/// Cell position inside a grid, relative to its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub x: usize,
    pub z: usize,
}

impl GridPos {
    pub fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }
}

/// Row-major grid of biome ids, one per cell
///
/// Owned by exactly one worker. The generator overwrites every cell for
/// each window, so a worker keeps one grid and refills it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationGrid {
    width: usize,
    height: usize,
    cells: Vec<BiomeId>,
}

impl ClassificationGrid {
    /// Allocate a grid filled with the default (irrelevant) biome
    ///
    /// Allocation is fallible so that running out of memory is reported as
    /// `SearchError::Allocation` rather than aborting the process.
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        Self::try_filled(width, height, BiomeId::default())
    }

    /// Allocate a grid with every cell set to `biome`
    pub fn try_filled(width: usize, height: usize, biome: BiomeId) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(SearchError::Allocation { cells: usize::MAX })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| SearchError::Allocation { cells: len })?;
        cells.resize(len, biome);

        Ok(Self { width, height, cells })
    }

    /// Wrap existing row-major cells
    pub fn from_cells(width: usize, height: usize, cells: Vec<BiomeId>) -> Result<Self> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(SearchError::InvalidConfig(format!(
                "{} cells cannot form a {}x{} grid",
                cells.len(),
                width,
                height
            )));
        }
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, z: usize) -> Option<BiomeId> {
        if x < self.width && z < self.height {
            Some(self.cells[z * self.width + x])
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, x: usize, z: usize, biome: BiomeId) {
        if x < self.width && z < self.height {
            self.cells[z * self.width + x] = biome;
        }
    }

    pub fn fill(&mut self, biome: BiomeId) {
        self.cells.fill(biome);
    }

    pub fn cells(&self) -> &[BiomeId] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [BiomeId] {
        &mut self.cells
    }
}

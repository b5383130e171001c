//! Search windows and the areas generated for them

use serde::{Deserialize, Serialize};

use crate::core::config::SearchConfig;
use crate::core::types::Coord;
use crate::spatial::spiral::spiral_coord;

/// Rectangular region of the world, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area {
    pub origin: Coord,
    pub width: usize,
    pub height: usize,
}

impl Area {
    pub fn new(origin: Coord, width: usize, height: usize) -> Self {
        Self { origin, width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// One unit of search work
///
/// The core square (`window_size` on a side) tiles the plane; the margin
/// makes neighbouring windows overlap on their right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub index: u64,
    pub origin: Coord,
    pub size: usize,
}

impl Window {
    pub fn new(index: u64, window_size: u32, margin: u32) -> Self {
        Self {
            index,
            origin: spiral_coord(index).scaled(window_size as i64),
            size: window_size as usize + margin as usize,
        }
    }

    pub fn for_index(index: u64, config: &SearchConfig) -> Self {
        Self::new(index, config.window_size, config.margin)
    }

    /// The square handed to the biome generator
    pub fn area(&self) -> Area {
        Area::new(self.origin, self.size, self.size)
    }

    /// Chebyshev distance of the window origin from the world origin
    pub fn distance(&self) -> i64 {
        self.origin.chebyshev()
    }
}

//! Lattice enumeration, windows and per-window grids

pub mod grid;
pub mod spiral;
pub mod window;

pub use grid::{ClassificationGrid, GridPos};
pub use spiral::{ring_of, spiral_coord, spiral_index};
pub use window::{Area, Window};

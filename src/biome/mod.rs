//! Biome codes and the generators that produce them

pub mod classifier;
pub mod id;
pub mod noise;

pub use classifier::{check_grid_shape, AreaClassifier};
pub use id::{BiomeId, CellClass};
pub use noise::NoiseClassifier;

//! Dragon Search - parallel spiral search for a rare biome landmark

pub mod biome;
pub mod core;
pub mod pattern;
pub mod search;
pub mod spatial;

pub use crate::core::{Coord, MatchLocation, Result, SearchConfig, SearchError};
pub use biome::{AreaClassifier, BiomeId, CellClass, NoiseClassifier};
pub use pattern::{Pattern, PatternKind};
pub use search::{run_search, SearchReport, WorkerResult};

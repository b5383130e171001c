pub mod config;
pub mod error;
pub mod types;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use types::{Coord, MatchLocation};

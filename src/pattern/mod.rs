//! Landmark patterns and the two-stage scan that looks for them

pub mod matcher;
pub mod prefilter;
pub mod shape;

pub use matcher::{find_all_matches, find_match, matches_at};
pub use prefilter::has_primary_class;
pub use shape::{Constraint, Pattern, PatternKind, Required};

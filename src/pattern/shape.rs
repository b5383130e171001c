//! Declarative landmark patterns
//!
//! A pattern is a list of (row, column, required class) constraints relative
//! to an anchor at its top-left corner. Variants are data: add a table and a
//! `PatternKind`, not matching code.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::biome::{BiomeId, CellClass};

/// Class a pattern cell demands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Required {
    Primary,
    Secondary,
}

impl Required {
    #[inline]
    pub fn admits(self, biome: BiomeId) -> bool {
        match self {
            Required::Primary => biome.class() == CellClass::Primary,
            Required::Secondary => biome.class() == CellClass::Secondary,
        }
    }
}

/// One cell of a pattern, offset from the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub row: usize,
    pub col: usize,
    pub required: Required,
}

const M: Required = Required::Primary;
const D: Required = Required::Secondary;

/// The dragon, 12 x 4
const DRAGON: &[&[Required]] = &[
    &[M, D, D, D, D, D, D, D, D, D, D, M],
    &[M, M, D, D, D, M, M, M, D, D, M, M],
    &[M, M, D, D, M, M, M, M, D, M, M, M],
    &[M, M, M, M, M, M, M, M, M, M, M, M],
];

/// Earlier, narrower reading of the dragon. Ragged: the last row is longer.
const LEGACY_DRAGON: &[&[Required]] = &[
    &[M, D, D, D, D, M, M, D, D],
    &[M, M, D, M, M, M, M, D, D],
    &[M, M, M, M, M, M, M, D, D, D, M, M, D],
];

/// Named pattern variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    #[default]
    Dragon,
    LegacyDragon,
}

impl PatternKind {
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Dragon => "dragon",
            PatternKind::LegacyDragon => "legacy-dragon",
        }
    }

    pub fn pattern(self) -> Pattern {
        match self {
            PatternKind::Dragon => Pattern::from_rows(self.name(), DRAGON),
            PatternKind::LegacyDragon => Pattern::from_rows(self.name(), LEGACY_DRAGON),
        }
    }
}

impl FromStr for PatternKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dragon" => Ok(PatternKind::Dragon),
            "legacy-dragon" => Ok(PatternKind::LegacyDragon),
            other => Err(format!(
                "unknown pattern '{}' (expected dragon or legacy-dragon)",
                other
            )),
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed arrangement of classed cells anchored at its top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    width: usize,
    height: usize,
    constraints: Vec<Constraint>,
}

impl Pattern {
    /// Build from row tables; constraints keep row-major order
    pub fn from_rows(name: &'static str, rows: &[&[Required]]) -> Self {
        let constraints: Vec<Constraint> = rows
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells.iter().enumerate().map(move |(col, &required)| Constraint {
                    row,
                    col,
                    required,
                })
            })
            .collect();

        Self {
            name,
            width: rows.iter().map(|r| r.len()).max().unwrap_or(0),
            height: rows.len(),
            constraints,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Bounding box width (columns)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bounding box height (rows)
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The prefilter is only sound for patterns with a primary cell
    pub fn has_primary(&self) -> bool {
        self.constraints.iter().any(|c| c.required == Required::Primary)
    }

    /// Biome that satisfies each cell, for building fixtures
    pub fn stamp(&self, primary: BiomeId, secondary: BiomeId) -> Vec<(usize, usize, BiomeId)> {
        self.constraints
            .iter()
            .map(|c| {
                let biome = match c.required {
                    Required::Primary => primary,
                    Required::Secondary => secondary,
                };
                (c.col, c.row, biome)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dragon_dimensions() {
        let p = PatternKind::Dragon.pattern();
        assert_eq!(p.width(), 12);
        assert_eq!(p.height(), 4);
        assert_eq!(p.constraints().len(), 48);
        assert!(p.has_primary());
    }

    #[test]
    fn test_legacy_dragon_is_ragged() {
        let p = PatternKind::LegacyDragon.pattern();
        assert_eq!(p.width(), 13);
        assert_eq!(p.height(), 3);
        assert_eq!(p.constraints().len(), 9 + 9 + 13);
        assert!(p.has_primary());
    }

    #[test]
    fn test_constraints_row_major() {
        let p = PatternKind::Dragon.pattern();
        let order: Vec<_> = p.constraints().iter().map(|c| (c.row, c.col)).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(p.constraints()[11], Constraint { row: 0, col: 11, required: Required::Primary });
        assert_eq!(p.constraints()[14], Constraint { row: 1, col: 2, required: Required::Secondary });
    }

    #[test]
    fn test_required_admits() {
        assert!(Required::Primary.admits(BiomeId::MESA_BRYCE));
        assert!(!Required::Primary.admits(BiomeId::DESERT));
        assert!(Required::Secondary.admits(BiomeId::DESERT_HILLS));
        assert!(!Required::Secondary.admits(BiomeId::DESERT_LAKES));
        assert!(!Required::Secondary.admits(BiomeId::PLAINS));
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!("dragon".parse::<PatternKind>(), Ok(PatternKind::Dragon));
        assert_eq!("legacy-dragon".parse::<PatternKind>(), Ok(PatternKind::LegacyDragon));
        assert!("wyvern".parse::<PatternKind>().is_err());
        assert_eq!(PatternKind::LegacyDragon.to_string(), "legacy-dragon");
    }

    #[test]
    fn test_pattern_without_primary() {
        let p = Pattern::from_rows("sand", &[&[D, D], &[D, D]]);
        assert!(!p.has_primary());
    }
}

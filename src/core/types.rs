//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// A point on the unbounded (x, z) lattice of the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i64,
    pub z: i64,
}

impl Coord {
    pub const ORIGIN: Self = Self { x: 0, z: 0 };

    pub fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }

    /// Chebyshev distance from the origin (the ring this point sits on)
    pub fn chebyshev(&self) -> i64 {
        self.x.abs().max(self.z.abs())
    }

    pub fn scaled(&self, factor: i64) -> Self {
        Self {
            x: self.x * factor,
            z: self.z * factor,
        }
    }

    pub fn offset(&self, dx: i64, dz: i64) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }
}

impl std::ops::Add for Coord {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, z: self.z + rhs.z }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x:{} z:{}", self.x, self.z)
    }
}

/// Where a pattern was found: the window that saw it and the absolute anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchLocation {
    pub window: u64,
    pub anchor: Coord,
}

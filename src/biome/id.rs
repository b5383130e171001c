//! Biome ids and the two classes the landmark search cares about

use serde::{Deserialize, Serialize};

/// Raw biome code as produced by the world generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BiomeId(pub i32);

impl BiomeId {
    pub const OCEAN: Self = Self(0);
    pub const PLAINS: Self = Self(1);
    pub const DESERT: Self = Self(2);
    pub const EXTREME_HILLS: Self = Self(3);
    pub const FOREST: Self = Self(4);
    pub const TAIGA: Self = Self(5);
    pub const SWAMPLAND: Self = Self(6);
    pub const RIVER: Self = Self(7);
    pub const DESERT_HILLS: Self = Self(17);
    pub const JUNGLE: Self = Self(21);
    pub const SAVANNA: Self = Self(35);
    pub const MESA: Self = Self(37);
    pub const MESA_PLATEAU_F: Self = Self(38);
    pub const MESA_PLATEAU: Self = Self(39);
    pub const DESERT_LAKES: Self = Self(130);
    pub const MESA_BRYCE: Self = Self(165);
    pub const MESA_PLATEAU_F_MUTATED: Self = Self(166);
    pub const MESA_PLATEAU_MUTATED: Self = Self(167);

    /// Any member of the badlands family
    pub fn is_mesa(self) -> bool {
        matches!(
            self,
            Self::MESA
                | Self::MESA_PLATEAU_F
                | Self::MESA_PLATEAU
                | Self::MESA_BRYCE
                | Self::MESA_PLATEAU_F_MUTATED
                | Self::MESA_PLATEAU_MUTATED
        )
    }

    /// Desert and desert hills. Desert lakes does not count.
    pub fn is_desert(self) -> bool {
        matches!(self, Self::DESERT | Self::DESERT_HILLS)
    }

    pub fn class(self) -> CellClass {
        if self.is_mesa() {
            CellClass::Primary
        } else if self.is_desert() {
            CellClass::Secondary
        } else {
            CellClass::Irrelevant
        }
    }
}

/// How a cell counts toward a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellClass {
    /// Mesa
    Primary,
    /// Desert
    Secondary,
    /// Fails every pattern constraint
    Irrelevant,
}

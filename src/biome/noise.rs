//! Seeded value-noise biome generator
//!
//! Stands in for the real world generator so the search can run end to end.
//! Two smooth fields (temperature, rainfall) are sampled per cell and mapped
//! to biome ids; a third hash picks variants inside a family. Everything is
//! a pure function of the seed and absolute cell coordinates, so
//! overlapping windows agree on their shared cells.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::biome::classifier::{check_grid_shape, AreaClassifier};
use crate::biome::id::BiomeId;
use crate::core::error::{Result, SearchError};
use crate::spatial::grid::ClassificationGrid;
use crate::spatial::window::Area;

/// Cells per variant patch inside a biome family
const VARIANT_PATCH: i64 = 8;

/// Per-seed salts for the noise fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Salts {
    temperature: u64,
    rainfall: u64,
    variant: u64,
}

impl Salts {
    fn from_seed(seed: i64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        Self {
            temperature: rng.gen(),
            rainfall: rng.gen(),
            variant: rng.gen(),
        }
    }
}

/// Synthetic biome source driven by value noise
#[derive(Debug, Clone)]
pub struct NoiseClassifier {
    /// Cells between noise lattice points; larger means bigger biomes
    pub feature_size: u32,
}

impl Default for NoiseClassifier {
    fn default() -> Self {
        Self { feature_size: 96 }
    }
}

impl NoiseClassifier {
    pub fn new(feature_size: u32) -> Self {
        Self { feature_size }
    }

    /// Biome of a single absolute cell
    pub fn biome_at(&self, seed: i64, x: i64, z: i64) -> BiomeId {
        let salts = Salts::from_seed(seed);
        self.sample(&salts, x, z)
    }

    fn sample(&self, salts: &Salts, x: i64, z: i64) -> BiomeId {
        let size = self.feature_size.max(1) as i64;
        let temperature = value_noise(x, z, size, salts.temperature);
        let rainfall = value_noise(x, z, size, salts.rainfall);
        let variant = lattice_hash(
            x.div_euclid(VARIANT_PATCH),
            z.div_euclid(VARIANT_PATCH),
            salts.variant,
        );
        pick_biome(temperature, rainfall, variant)
    }
}

impl AreaClassifier for NoiseClassifier {
    fn fill(&self, seed: i64, area: Area, grid: &mut ClassificationGrid) -> Result<()> {
        check_grid_shape(&area, grid)?;
        if area.width == 0 {
            return Ok(());
        }

        if self.feature_size == 0 {
            return Err(SearchError::Generation {
                origin: area.origin,
                reason: "feature_size must be positive".into(),
            });
        }

        let salts = Salts::from_seed(seed);
        for (dz, row) in grid.cells_mut().chunks_exact_mut(area.width).enumerate() {
            let z = area.origin.z + dz as i64;
            for (dx, cell) in row.iter_mut().enumerate() {
                *cell = self.sample(&salts, area.origin.x + dx as i64, z);
            }
        }
        Ok(())
    }
}

fn pick_biome(temperature: f32, rainfall: f32, variant: u64) -> BiomeId {
    if temperature < 0.15 {
        return BiomeId::OCEAN;
    }

    if temperature > 0.72 && rainfall < 0.3 {
        return match variant % 10 {
            0..=5 => BiomeId::MESA,
            6 | 7 => BiomeId::MESA_PLATEAU_F,
            8 => BiomeId::MESA_PLATEAU,
            _ => BiomeId::MESA_BRYCE,
        };
    }

    if temperature > 0.6 && rainfall < 0.45 {
        return match variant % 8 {
            0 => BiomeId::DESERT_HILLS,
            1 => BiomeId::DESERT_LAKES,
            _ => BiomeId::DESERT,
        };
    }

    if rainfall > 0.75 {
        return if temperature > 0.6 {
            BiomeId::JUNGLE
        } else {
            BiomeId::SWAMPLAND
        };
    }

    if rainfall > 0.55 {
        BiomeId::FOREST
    } else if temperature < 0.3 {
        BiomeId::TAIGA
    } else if temperature > 0.6 {
        BiomeId::SAVANNA
    } else {
        BiomeId::PLAINS
    }
}

fn lattice_hash(x: i64, z: i64, salt: u64) -> u64 {
    let n = (x as u64)
        .wrapping_mul(374761393)
        .wrapping_add((z as u64).wrapping_mul(668265263))
        .wrapping_add(salt);
    let n = (n ^ (n >> 13)).wrapping_mul(1274126177);
    n ^ (n >> 16)
}

/// Hash mapped to [0, 1)
fn unit(hash: u64) -> f32 {
    (hash >> 40) as f32 / (1u64 << 24) as f32
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn value_noise(x: i64, z: i64, size: i64, salt: u64) -> f32 {
    let cx = x.div_euclid(size);
    let cz = z.div_euclid(size);
    let tx = smoothstep(x.rem_euclid(size) as f32 / size as f32);
    let tz = smoothstep(z.rem_euclid(size) as f32 / size as f32);

    let top = lerp(
        unit(lattice_hash(cx, cz, salt)),
        unit(lattice_hash(cx + 1, cz, salt)),
        tx,
    );
    let bottom = lerp(
        unit(lattice_hash(cx, cz + 1, salt)),
        unit(lattice_hash(cx + 1, cz + 1, salt)),
        tx,
    );
    lerp(top, bottom, tz)
}

//! Square spiral enumeration of the lattice
//!
//! Index 0 is the origin. Ring `d >= 1` holds every point at Chebyshev
//! distance `d` and occupies indices `(2d-1)^2 ..= (2d+1)^2 - 1`, so it has
//! exactly `8d` points. Each ring is walked in four parts of `2d` points:
//!
//! 1. top edge (`z = -d`), left to right
//! 2. right edge (`x = d`), top to bottom
//! 3. bottom edge (`z = d`), right to left
//! 4. left edge (`x = -d`), bottom to top
//!
//! First 25 positions, shown as index at (x, z):
//!
//! ```text
//!          x=-2  x=-1  x=0  x=1  x=2
//!   z=-2     9    10    11   12   13
//!   z=-1    24     1     2    3   14
//!   z= 0    23     8     0    4   15
//!   z= 1    22     7     6    5   16
//!   z= 2    21    20    19   18   17
//! ```

use crate::core::types::Coord;

/// Largest `s` with `s * s <= n`
fn isqrt(n: u64) -> u64 {
    let mut s = (n as f64).sqrt() as u64;
    while s.checked_mul(s).map_or(true, |sq| sq > n) {
        s -= 1;
    }
    while (s + 1).checked_mul(s + 1).map_or(false, |sq| sq <= n) {
        s += 1;
    }
    s
}

/// Ring (Chebyshev distance) that holds `index`
pub fn ring_of(index: u64) -> u64 {
    if index == 0 {
        return 0;
    }
    // (2d-1)^2 <= index < (2d+1)^2, so floor(sqrt(index)) is 2d-1 or 2d
    let root = isqrt(index);
    (root + 1) / 2
}

/// First index of ring `d`
pub fn ring_start(d: u64) -> u64 {
    if d == 0 {
        0
    } else {
        (2 * d - 1) * (2 * d - 1)
    }
}

/// Lattice point visited at position `index` of the spiral
pub fn spiral_coord(index: u64) -> Coord {
    if index == 0 {
        return Coord::ORIGIN;
    }

    let d = ring_of(index);
    let offset = index - ring_start(d);
    let part = offset / (2 * d);
    let step = (offset % (2 * d)) as i64;
    let d = d as i64;

    match part {
        0 => Coord::new(-d + step, -d),
        1 => Coord::new(d, -d + step),
        2 => Coord::new(d - step, d),
        _ => Coord::new(-d, d - step),
    }
}

/// Inverse of [`spiral_coord`]
pub fn spiral_index(coord: Coord) -> u64 {
    let d = coord.chebyshev();
    if d == 0 {
        return 0;
    }

    let (part, step) = if coord.z == -d && coord.x < d {
        (0, coord.x + d)
    } else if coord.x == d && coord.z < d {
        (1, coord.z + d)
    } else if coord.z == d && coord.x > -d {
        (2, d - coord.x)
    } else {
        (3, d - coord.z)
    };

    let d = d as u64;
    ring_start(d) + part * 2 * d + step as u64
}

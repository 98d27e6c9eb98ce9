use crate::*;
pub use fixed::*;
pub use seeded::*;

mod fixed;
mod seeded;

/// Answers whether a tile holds a bomb.
///
/// Implementations must be pure: the answer for a coordinate never changes and does not depend
/// on which tiles were asked about before. That is what lets the board stay unbounded without
/// storing the minefield.
pub trait BombOracle {
    fn is_bomb(&self, coords: Coord2) -> bool;
}

impl<O: BombOracle + ?Sized> BombOracle for &O {
    fn is_bomb(&self, coords: Coord2) -> bool {
        (**self).is_bomb(coords)
    }
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 output function.
const fn finalize(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Combines the board seed with a tile position into a per-tile seed.
///
/// Stable across processes and platforms, so a seed always describes the same minefield.
pub const fn mix(seed: i64, x: Coord, y: Coord) -> u64 {
    let mut h = finalize((seed as u64).wrapping_add(GOLDEN_GAMMA));
    h = finalize(h ^ (x as u64).wrapping_add(GOLDEN_GAMMA));
    finalize(h ^ (y as u64).wrapping_add(GOLDEN_GAMMA.wrapping_mul(2)))
}

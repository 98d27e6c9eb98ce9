use hashbrown::{HashMap, HashSet};

use crate::*;

/// Number of bombs around every tile that touches at least one bomb.
///
/// Walks the bombs rather than the tiles, so the cost follows the bomb count and not the area
/// the bombs were collected from. Bombs themselves and tiles with no adjacent bombs are absent.
pub fn adjacent_bomb_counts(bombs: &HashSet<Coord2>) -> HashMap<Coord2, u8> {
    let mut counts = HashMap::with_capacity(bombs.len() * 8);
    for &bomb in bombs {
        for neighbor in neighbors(bomb) {
            if bombs.contains(&neighbor) {
                continue;
            }
            *counts.entry(neighbor).or_insert(0) += 1;
        }
    }
    counts
}

/// Number of bombs around a single tile, asking the oracle directly.
pub fn adjacent_bomb_count<O: BombOracle + ?Sized>(oracle: &O, coords: Coord2) -> u8 {
    // at most eight neighbors, always fits
    neighbors(coords).filter(|&pos| oracle.is_bomb(pos)).count() as u8
}

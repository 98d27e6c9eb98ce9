use hashbrown::HashSet;

use super::*;

/// Hand-placed bombs; every other tile of the plane is safe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedLayout {
    bombs: HashSet<Coord2>,
}

impl FixedLayout {
    pub fn from_bomb_coords(bomb_coords: &[Coord2]) -> Self {
        Self {
            bombs: bomb_coords.iter().copied().collect(),
        }
    }

    pub fn bomb_count(&self) -> usize {
        self.bombs.len()
    }
}

impl BombOracle for FixedLayout {
    fn is_bomb(&self, coords: Coord2) -> bool {
        self.bombs.contains(&coords)
    }
}

impl FromIterator<Coord2> for FixedLayout {
    fn from_iter<I: IntoIterator<Item = Coord2>>(iter: I) -> Self {
        Self {
            bombs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_listed_tiles_are_bombs() {
        let layout: FixedLayout = [(0, 0), (-3, 7), (0, 0)].into_iter().collect();

        assert_eq!(layout.bomb_count(), 2);
        assert!(layout.is_bomb((-3, 7)));
        assert!(!layout.is_bomb((7, -3)));
    }
}

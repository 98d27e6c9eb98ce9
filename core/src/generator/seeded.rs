use super::*;

/// Procedural minefield: each tile rolls its own die, seeded from the board seed and its position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SeededOracle {
    seed: i64,
    density: u8,
}

impl SeededOracle {
    pub fn new(seed: i64, density: u8) -> Result<Self> {
        if density > MAX_DENSITY {
            return Err(GameError::InvalidDensity(density));
        }
        Ok(Self { seed, density })
    }

    pub const fn seed(&self) -> i64 {
        self.seed
    }

    pub const fn density(&self) -> u8 {
        self.density
    }
}

impl BombOracle for SeededOracle {
    fn is_bomb(&self, (x, y): Coord2) -> bool {
        roll_is_bomb(self.seed, self.density, x, y)
    }
}

fn roll_is_bomb(seed: i64, density: u8, x: Coord, y: Coord) -> bool {
    use rand::prelude::*;
    use rand_xoshiro::Xoshiro256PlusPlus;

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(mix(seed, x, y));
    let roll: u8 = rng.random_range(1..=MAX_DENSITY);
    roll <= density
}

/// Whether `(x, y)` is a bomb on the board described by `seed` and `density`.
pub fn is_bomb(seed: i64, density: u8, x: Coord, y: Coord) -> Result<bool> {
    let oracle = SeededOracle::new(seed, density)?;
    Ok(oracle.is_bomb((x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;

    #[test]
    fn rejects_density_over_a_hundred() {
        assert_eq!(
            SeededOracle::new(1, 101),
            Err(GameError::InvalidDensity(101))
        );
        assert!(SeededOracle::new(1, 100).is_ok());
    }

    #[test]
    fn free_lookup_rejects_density_over_a_hundred() {
        assert_eq!(is_bomb(1, 101, 0, 0), Err(GameError::InvalidDensity(101)));
        assert_eq!(is_bomb(1, 255, -4, 9), Err(GameError::InvalidDensity(255)));
        assert_eq!(is_bomb(1, 100, 0, 0), Ok(true));
        assert_eq!(is_bomb(1, 0, 0, 0), Ok(false));
    }

    #[test]
    fn density_bounds_are_absolute() {
        let empty = SeededOracle::new(12345, 0).unwrap();
        let full = SeededOracle::new(12345, 100).unwrap();
        let viewport = Viewport::new((-50, -50), 100, 100).unwrap();

        assert!(viewport.tiles().all(|tile| !empty.is_bomb(tile)));
        assert!(viewport.tiles().all(|tile| full.is_bomb(tile)));
    }

    #[test]
    fn same_seed_same_field() {
        let a = SeededOracle::new(12345, 5).unwrap();
        let b = SeededOracle::new(12345, 5).unwrap();
        let viewport = Viewport::new((-40, -40), 80, 80).unwrap();

        assert!(viewport.tiles().all(|tile| a.is_bomb(tile) == b.is_bomb(tile)));
        assert!(
            viewport
                .tiles()
                .all(|(x, y)| Ok(a.is_bomb((x, y))) == is_bomb(12345, 5, x, y))
        );
    }

    #[test]
    fn density_roughly_matches_bomb_ratio() {
        let oracle = SeededOracle::new(12345, 20).unwrap();
        let viewport = Viewport::new((0, 0), 100, 100).unwrap();

        let bombs = viewport.tiles().filter(|&tile| oracle.is_bomb(tile)).count();

        // 20% of 10_000 with plenty of room for sampling noise
        assert!((1_500..2_500).contains(&bombs), "{bombs} bombs");
    }

    #[test]
    fn higher_density_is_a_superset() {
        let sparse = SeededOracle::new(99, 5).unwrap();
        let dense = SeededOracle::new(99, 30).unwrap();
        let viewport = Viewport::new((0, 0), 60, 60).unwrap();

        assert!(
            viewport
                .tiles()
                .filter(|&tile| sparse.is_bomb(tile))
                .all(|tile| dense.is_bomb(tile))
        );
    }

    #[test]
    fn threads_agree_on_the_field() {
        let oracle = SeededOracle::new(-42, 15).unwrap();
        let viewport = Viewport::new((1_000, -1_000), 40, 40).unwrap();
        let expected: std::vec::Vec<bool> = viewport.tiles().map(|t| oracle.is_bomb(t)).collect();

        std::thread::scope(|scope| {
            let handles: std::vec::Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        viewport
                            .tiles()
                            .map(|t| oracle.is_bomb(t))
                            .collect::<std::vec::Vec<_>>()
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

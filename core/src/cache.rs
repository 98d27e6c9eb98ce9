use hashbrown::HashSet;

use crate::*;

#[derive(Clone, Debug, PartialEq)]
struct CacheEntry {
    viewport: Viewport,
    bombs: HashSet<Coord2>,
}

/// Remembers the bombs of the most recently requested viewport.
///
/// Any change in the viewport, even a one tile pan, recomputes the whole rectangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BombCache {
    entry: Option<CacheEntry>,
    recomputes: usize,
}

impl BombCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bombs inside `viewport`, asking `oracle` once per tile unless the viewport is the cached
    /// one.
    pub fn bombs_in<O: BombOracle + ?Sized>(
        &mut self,
        oracle: &O,
        viewport: Viewport,
    ) -> &HashSet<Coord2> {
        let hit = matches!(&self.entry, Some(entry) if entry.viewport == viewport);
        if !hit {
            let bombs: HashSet<Coord2> = viewport
                .tiles()
                .filter(|&tile| oracle.is_bomb(tile))
                .collect();
            log::debug!(
                "bomb cache recompute for {:?}: {} bombs in {} tiles",
                viewport,
                bombs.len(),
                viewport.area()
            );
            self.recomputes += 1;
            self.entry = Some(CacheEntry { viewport, bombs });
        }
        &self.entry.as_ref().expect("cache entry was just filled").bombs
    }

    /// Viewport of the cached bomb set, if any.
    pub fn cached_viewport(&self) -> Option<Viewport> {
        self.entry.as_ref().map(|entry| entry.viewport)
    }

    /// Number of times the bomb set had to be computed from scratch.
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct CountingOracle<O> {
        inner: O,
        calls: Cell<usize>,
    }

    impl<O: BombOracle> BombOracle for CountingOracle<O> {
        fn is_bomb(&self, coords: Coord2) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.inner.is_bomb(coords)
        }
    }

    fn counting(bombs: &[Coord2]) -> CountingOracle<FixedLayout> {
        CountingOracle {
            inner: FixedLayout::from_bomb_coords(bombs),
            calls: Cell::new(0),
        }
    }

    #[test]
    fn same_viewport_hits_the_cache() {
        let oracle = counting(&[(1, 1), (4, 2)]);
        let mut cache = BombCache::new();
        let viewport = Viewport::new((0, 0), 5, 3).unwrap();

        let first = cache.bombs_in(&oracle, viewport).clone();
        assert_eq!(oracle.calls.get(), 15);

        let second = cache.bombs_in(&oracle, viewport).clone();
        assert_eq!(oracle.calls.get(), 15);
        assert_eq!(first, second);
        assert_eq!(cache.recomputes(), 1);
    }

    #[test]
    fn any_change_recomputes_everything() {
        let oracle = counting(&[(1, 1), (5, 1)]);
        let mut cache = BombCache::new();

        let bombs = cache.bombs_in(&oracle, Viewport::new((0, 0), 5, 3).unwrap());
        assert!(bombs.contains(&(1, 1)));
        assert!(!bombs.contains(&(5, 1)));

        let panned = Viewport::new((1, 0), 5, 3).unwrap();
        let bombs = cache.bombs_in(&oracle, panned);
        assert!(bombs.contains(&(1, 1)));
        assert!(bombs.contains(&(5, 1)));
        assert_eq!(oracle.calls.get(), 30);

        let resized = Viewport::new((1, 0), 5, 2).unwrap();
        cache.bombs_in(&oracle, resized);
        assert_eq!(oracle.calls.get(), 40);
        assert_eq!(cache.recomputes(), 3);
        assert_eq!(cache.cached_viewport(), Some(resized));
    }

    #[test]
    fn only_the_latest_viewport_is_kept() {
        let oracle = counting(&[(0, 0), (3, 0)]);
        let mut cache = BombCache::new();
        let left = Viewport::new((0, 0), 2, 1).unwrap();
        let right = Viewport::new((2, 0), 2, 1).unwrap();

        assert!(cache.bombs_in(&oracle, left).contains(&(0, 0)));
        assert!(cache.bombs_in(&oracle, right).contains(&(3, 0)));
        let back = cache.bombs_in(&oracle, left);
        assert_eq!(back.len(), 1);
        assert!(back.contains(&(0, 0)));
        assert_eq!(cache.bombs_in(&oracle, left).len(), 1);

        assert_eq!(cache.recomputes(), 3);
        assert_eq!(oracle.calls.get(), 6);
        assert_eq!(cache.cached_viewport(), Some(left));
    }

    #[test]
    fn invalidate_forces_a_recompute() {
        let oracle = counting(&[]);
        let mut cache = BombCache::new();
        let viewport = Viewport::new((0, 0), 2, 2).unwrap();

        cache.bombs_in(&oracle, viewport);
        cache.invalidate();
        assert_eq!(cache.cached_viewport(), None);

        cache.bombs_in(&oracle, viewport);
        assert_eq!(oracle.calls.get(), 8);
    }
}

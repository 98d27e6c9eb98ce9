use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Bombs and flags around one tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentCounts {
    pub bombs: u8,
    pub flags: u8,
}

/// The unbounded board: only the player's checks and flags are stored, everything else is rolled
/// from the oracle on demand.
#[derive(Clone, Debug)]
pub struct Board<O = SeededOracle> {
    oracle: O,
    auto_uncover: bool,
    reveal_limit: usize,
    checked: HashSet<Coord2>,
    flagged: HashSet<Coord2>,
    game_ended: bool,
    triggered_bomb: Option<Coord2>,
    bomb_cache: BombCache,
}

impl Board {
    pub fn new(config: BoardConfig) -> Result<Self> {
        let oracle = SeededOracle::new(config.seed, config.density)?;
        Ok(Self::with_oracle(oracle, config.auto_uncover).with_reveal_limit(config.reveal_limit))
    }

    pub fn seed(&self) -> i64 {
        self.oracle.seed()
    }

    pub fn density(&self) -> u8 {
        self.oracle.density()
    }
}

impl<O: BombOracle> Board<O> {
    pub fn with_oracle(oracle: O, auto_uncover: bool) -> Self {
        Self {
            oracle,
            auto_uncover,
            reveal_limit: DEFAULT_REVEAL_LIMIT,
            checked: HashSet::new(),
            flagged: HashSet::new(),
            game_ended: false,
            triggered_bomb: None,
            bomb_cache: BombCache::new(),
        }
    }

    /// Caps how many tiles a single auto-reveal may uncover.
    pub fn with_reveal_limit(mut self, reveal_limit: usize) -> Self {
        self.reveal_limit = reveal_limit;
        self
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn auto_uncover(&self) -> bool {
        self.auto_uncover
    }

    pub fn is_game_ended(&self) -> bool {
        self.game_ended
    }

    /// The bomb whose check ended the game.
    pub fn triggered_bomb(&self) -> Option<Coord2> {
        self.triggered_bomb
    }

    pub fn is_checked(&self, coords: Coord2) -> bool {
        self.checked.contains(&coords)
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flagged.contains(&coords)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged.len()
    }

    pub fn bomb_cache(&self) -> &BombCache {
        &self.bomb_cache
    }

    pub fn tile_state(&self, coords: Coord2) -> TileState {
        if self.flagged.contains(&coords) {
            TileState::Flagged
        } else if !self.checked.contains(&coords) {
            TileState::Hidden
        } else if self.oracle.is_bomb(coords) {
            TileState::Bomb
        } else {
            TileState::Safe(adjacent_bomb_count(&self.oracle, coords))
        }
    }

    pub fn adjacent_counts(&self, coords: Coord2) -> AdjacentCounts {
        let mut counts = AdjacentCounts::default();
        for pos in neighbors(coords) {
            if self.oracle.is_bomb(pos) {
                counts.bombs += 1;
            }
            if self.flagged.contains(&pos) {
                counts.flags += 1;
            }
        }
        counts
    }

    pub fn flag_tile(&mut self, coords: Coord2) -> MarkOutcome {
        use MarkOutcome::*;

        if self.game_ended || self.checked.contains(&coords) {
            return NoChange;
        }

        if !self.flagged.remove(&coords) {
            self.flagged.insert(coords);
        }
        log::trace!("flag toggled at {:?}", coords);
        Changed
    }

    pub fn check_tile(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if self.game_ended || self.flagged.contains(&coords) || !self.checked.insert(coords) {
            return NoChange;
        }

        if self.oracle.is_bomb(coords) {
            log::debug!("bomb checked at {:?}", coords);
            self.triggered_bomb = Some(coords);
            self.end_game();
            return HitMine;
        }

        if self.auto_uncover && adjacent_bomb_count(&self.oracle, coords) == 0 {
            let revealed = self.auto_reveal(coords);
            log::trace!("auto-revealed {} tiles from {:?}", revealed, coords);
        }
        Revealed
    }

    /// Checks every hidden neighbor of a checked tile whose count is already matched by flags.
    pub fn chord_check(&mut self, coords: Coord2) -> RevealOutcome {
        if self.game_ended {
            return RevealOutcome::NoChange;
        }

        let TileState::Safe(count) = self.tile_state(coords) else {
            return RevealOutcome::NoChange;
        };
        if count != self.adjacent_counts(coords).flags {
            return RevealOutcome::NoChange;
        }

        let hidden: Vec<Coord2> = neighbors(coords)
            .filter(|&pos| self.tile_state(pos) == TileState::Hidden)
            .collect();
        hidden
            .into_iter()
            .map(|pos| self.check_tile(pos))
            .reduce(core::ops::BitOr::bitor)
            .unwrap_or(RevealOutcome::NoChange)
    }

    pub fn end_game(&mut self) {
        if !self.game_ended {
            log::debug!(
                "game ended with {} checked and {} flagged tiles",
                self.checked.len(),
                self.flagged.len()
            );
        }
        self.game_ended = true;
    }

    /// Breadth-first reveal around a zero tile. Returns the number of tiles it checked.
    fn auto_reveal(&mut self, start: Coord2) -> usize {
        let mut queued = HashSet::new();
        queued.insert(start);
        let mut to_visit = VecDeque::new();
        for pos in neighbors(start) {
            if queued.insert(pos) {
                to_visit.push_back(pos);
            }
        }

        let mut revealed = 0;
        while let Some(visit_coords) = to_visit.pop_front() {
            if self.checked.contains(&visit_coords)
                || self.flagged.contains(&visit_coords)
                || self.oracle.is_bomb(visit_coords)
            {
                continue;
            }

            if revealed >= self.reveal_limit {
                log::warn!(
                    "auto-reveal from {:?} stopped at its limit of {} tiles",
                    start,
                    self.reveal_limit
                );
                break;
            }

            self.checked.insert(visit_coords);
            revealed += 1;

            if adjacent_bomb_count(&self.oracle, visit_coords) == 0 {
                for pos in neighbors(visit_coords) {
                    if queued.insert(pos) {
                        to_visit.push_back(pos);
                    }
                }
            }
        }
        revealed
    }

    /// Tile states of `viewport`, `grid[[row, col]]`.
    ///
    /// Once the game has ended every bomb shows as [`TileState::Bomb`], flagged or not.
    /// `reveal_all` shows the true state of every tile.
    pub fn tile_states(&mut self, viewport: Viewport, reveal_all: bool) -> Array2<TileState> {
        // one extra ring so that counts on the border see bombs just outside the viewport
        let bombs = self.bomb_cache.bombs_in(&self.oracle, viewport.padded(1));
        let counts = adjacent_bomb_counts(bombs);

        Array2::from_shape_fn(viewport.shape(), |(row, col)| {
            let tile = viewport.tile_at(row, col);
            let is_bomb = bombs.contains(&tile);
            let revealed = if is_bomb {
                TileState::Bomb
            } else {
                TileState::Safe(counts.get(&tile).copied().unwrap_or(0))
            };

            if reveal_all || (self.game_ended && is_bomb) {
                revealed
            } else if self.flagged.contains(&tile) {
                TileState::Flagged
            } else if self.checked.contains(&tile) {
                revealed
            } else {
                TileState::Hidden
            }
        })
    }

    /// Symbols of `viewport` in `style`, `grid[[row, col]]`.
    pub fn materialize(
        &mut self,
        viewport: Viewport,
        style: &DisplayStyle,
        reveal_all: bool,
    ) -> Array2<char> {
        let states = self.tile_states(viewport, reveal_all);
        states.map(|&state| style.symbol(state))
    }
}

#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use cache::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use style::*;
pub use tile::*;
pub use types::*;

mod adjacency;
mod cache;
mod engine;
mod error;
mod generator;
mod style;
mod tile;
mod types;

/// Densities are percentages.
pub const MAX_DENSITY: u8 = 100;

/// Default cap on the tiles uncovered by a single auto-reveal.
pub const DEFAULT_REVEAL_LIMIT: usize = 10_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub seed: i64,
    /// Chance in percent for any tile to be a bomb.
    pub density: u8,
    /// Whether checking a tile with no adjacent bombs uncovers its surroundings.
    pub auto_uncover: bool,
    pub reveal_limit: usize,
}

impl BoardConfig {
    pub fn new(seed: i64, density: u8, auto_uncover: bool) -> Result<Self> {
        if density > MAX_DENSITY {
            return Err(GameError::InvalidDensity(density));
        }
        Ok(Self {
            seed,
            density,
            auto_uncover,
            reveal_limit: DEFAULT_REVEAL_LIMIT,
        })
    }

    pub const fn with_reveal_limit(mut self, reveal_limit: usize) -> Self {
        self.reveal_limit = reveal_limit;
        self
    }
}

/// Creates a board whose minefield is rolled from `seed` with `density` percent bombs.
pub fn new_board(seed: i64, density: u8, auto_uncover: bool) -> Result<Board> {
    Board::new(BoardConfig::new(seed, density, auto_uncover)?)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }
}

/// Used to merge outcomes when checking several tiles at once
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Player-visible state of a tile, derived from the checked and flagged sets and the minefield.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    Hidden,
    Flagged,
    /// Checked safe tile with its number of adjacent bombs, `0..=8`.
    Safe(u8),
    Bomb,
}

impl TileState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Safe(_) | Self::Bomb)
    }
}

impl Default for TileState {
    fn default() -> Self {
        Self::Hidden
    }
}

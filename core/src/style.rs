use alloc::string::ToString;
use serde::{Deserialize, Serialize};

use crate::*;

const STYLE_KEYS: [&str; 12] = [
    "hidden",
    "flagged",
    "bomb",
    "safe",
    "checked: 1",
    "checked: 2",
    "checked: 3",
    "checked: 4",
    "checked: 5",
    "checked: 6",
    "checked: 7",
    "checked: 8",
];

/// Nine bombs never fit around one tile, but older display maps carry the key.
const UNREACHABLE_KEY: &str = "checked: 9";

/// Maps tile states to the characters a text renderer draws for them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayStyle {
    symbols: [char; STYLE_KEYS.len()],
}

impl DisplayStyle {
    /// Builds a style from `(key, symbol)` pairs naming every state.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, char)>) -> Result<Self> {
        let mut symbols = [None; STYLE_KEYS.len()];
        for (key, symbol) in entries {
            if let Some(slot) = slot_for(key)? {
                symbols[slot] = Some(symbol);
            }
        }

        let mut complete = [' '; STYLE_KEYS.len()];
        for (slot, symbol) in symbols.into_iter().enumerate() {
            complete[slot] = symbol.ok_or(GameError::MissingStyleKey(STYLE_KEYS[slot]))?;
        }
        Ok(Self { symbols: complete })
    }

    /// Replaces the symbols of the named states, keeping the rest.
    pub fn with_overrides<'a>(
        mut self,
        entries: impl IntoIterator<Item = (&'a str, char)>,
    ) -> Result<Self> {
        for (key, symbol) in entries {
            if let Some(slot) = slot_for(key)? {
                self.symbols[slot] = symbol;
            }
        }
        Ok(self)
    }

    pub fn symbol(&self, state: TileState) -> char {
        self.symbols[slot(state)]
    }

    /// Name of `state` in display style maps.
    pub fn key(state: TileState) -> &'static str {
        STYLE_KEYS[slot(state)]
    }
}

const fn slot(state: TileState) -> usize {
    match state {
        TileState::Hidden => 0,
        TileState::Flagged => 1,
        TileState::Bomb => 2,
        TileState::Safe(count) => 3 + if count > 8 { 8 } else { count as usize },
    }
}

fn slot_for(key: &str) -> Result<Option<usize>> {
    if key == UNREACHABLE_KEY {
        return Ok(None);
    }
    STYLE_KEYS
        .iter()
        .position(|&candidate| candidate == key)
        .map(Some)
        .ok_or_else(|| GameError::UnknownStyleKey(key.to_string()))
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            symbols: ['?', 'F', '@', ' ', '1', '2', '3', '4', '5', '6', '7', '8'],
        }
    }
}

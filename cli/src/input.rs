use infsweep_core::Coord;

/// One keypress worth of intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Coord, Coord),
    Flag,
    Check,
    Chord,
    ToggleMovementMode,
    Quit,
}

impl Action {
    /// Numeric keypad layout: the digits around `5` point in their direction.
    pub fn from_key(key: char) -> Option<Self> {
        use Action::*;
        Some(match key {
            '4' => Move(-1, 0),
            '8' => Move(0, -1),
            '6' => Move(1, 0),
            '2' => Move(0, 1),
            '1' => Move(-1, 1),
            '7' => Move(-1, -1),
            '9' => Move(1, -1),
            '3' => Move(1, 1),
            '5' => Flag,
            '0' => Check,
            '/' => Chord,
            '.' => ToggleMovementMode,
            'q' | 'Q' => Quit,
            _ => return None,
        })
    }
}

/// Parses a line of keys, skipping whitespace and reporting keys with no action.
pub fn parse_line(line: &str) -> impl Iterator<Item = Result<Action, char>> + '_ {
    line.chars()
        .filter(|key| !key.is_whitespace())
        .map(|key| Action::from_key(key).ok_or(key))
}

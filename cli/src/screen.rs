use std::io::{self, Write};

use infsweep_core::{Coord, Coord2, Viewport};
use ndarray::Array2;

/// What the movement keys move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovementMode {
    Cursor,
    Screen,
}

impl MovementMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Cursor => Self::Screen,
            Self::Screen => Self::Cursor,
        }
    }
}

/// Scrolling window onto the board with a cursor inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Screen {
    viewport: Viewport,
    cursor: (u32, u32),
    cursor_char: char,
    mode: MovementMode,
}

impl Screen {
    pub fn new(viewport: Viewport, cursor_char: char) -> Self {
        Self {
            viewport,
            cursor: (0, 0),
            cursor_char,
            mode: MovementMode::Cursor,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        log::debug!("movement mode: {:?}", self.mode);
    }

    /// Board coordinates under the cursor.
    pub fn cursor_tile(&self) -> Coord2 {
        self.viewport
            .tile_at(self.cursor.1 as usize, self.cursor.0 as usize)
    }

    /// Moves the cursor within the screen, or scrolls the screen, depending on the mode.
    pub fn shift(&mut self, dx: Coord, dy: Coord) {
        match self.mode {
            MovementMode::Cursor => {
                let x = (Coord::from(self.cursor.0) + dx).clamp(0, self.max_col());
                let y = (Coord::from(self.cursor.1) + dy).clamp(0, self.max_row());
                self.cursor = (x as u32, y as u32);
            }
            MovementMode::Screen => {
                let (ox, oy) = self.viewport.origin();
                let origin = (ox.saturating_add(dx), oy.saturating_add(dy));
                match Viewport::new(origin, self.viewport.width(), self.viewport.height()) {
                    Ok(viewport) => self.viewport = viewport,
                    Err(err) => log::warn!("cannot scroll further: {}", err),
                }
            }
        }
    }

    fn max_col(&self) -> Coord {
        Coord::from(self.viewport.width()) - 1
    }

    fn max_row(&self) -> Coord {
        Coord::from(self.viewport.height()) - 1
    }

    /// Writes `grid` line by line, replacing the symbol under the cursor.
    pub fn draw(
        &self,
        grid: &Array2<char>,
        show_cursor: bool,
        out: &mut impl Write,
    ) -> io::Result<()> {
        for (row, line) in grid.rows().into_iter().enumerate() {
            let text: String = line
                .iter()
                .enumerate()
                .map(|(col, &symbol)| {
                    if show_cursor && (col as u32, row as u32) == self.cursor {
                        self.cursor_char
                    } else {
                        symbol
                    }
                })
                .collect();
            writeln!(out, "{text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen {
        Screen::new(Viewport::new((0, 0), 4, 3).unwrap(), '#')
    }

    #[test]
    fn cursor_stays_on_screen() {
        let mut screen = screen();

        screen.shift(-1, -1);
        assert_eq!(screen.cursor_tile(), (0, 0));

        screen.shift(10, 1);
        assert_eq!(screen.cursor_tile(), (3, 1));
    }

    #[test]
    fn screen_mode_scrolls_the_viewport() {
        let mut screen = screen();
        screen.shift(1, 1);
        screen.toggle_mode();

        screen.shift(-5, 2);

        assert_eq!(screen.viewport().origin(), (-5, 2));
        assert_eq!(screen.cursor_tile(), (-4, 3));
        assert_eq!(screen.mode(), MovementMode::Screen);
    }

    #[test]
    fn draw_overlays_the_cursor() {
        let mut screen = screen();
        screen.shift(1, 0);
        let grid = Array2::from_elem((3, 4), '?');
        let mut out = Vec::new();

        screen.draw(&grid, true, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "?#??\n????\n????\n");
    }
}

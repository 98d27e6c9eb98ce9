use std::io::{self, Write};

use anyhow::Result;
use infsweep_core::{Board, DisplayStyle, RevealOutcome, Viewport};

use crate::input::Action;
use crate::screen::Screen;
use crate::settings::Settings;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A terminal session: the board, the window onto it and how it is drawn.
pub struct Game {
    board: Board,
    screen: Screen,
    style: DisplayStyle,
    reveal_all: bool,
}

impl Game {
    pub fn new(settings: &Settings) -> Result<Self> {
        let (width, height) = settings.resolution;
        let viewport = Viewport::new((0, 0), width, height)?;
        Ok(Self {
            board: Board::new(settings.board)?,
            screen: Screen::new(viewport, settings.cursor_char),
            style: settings.style,
            reveal_all: settings.reveal_all,
        })
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn apply(&mut self, action: Action) -> Flow {
        let tile = self.screen.cursor_tile();
        match action {
            Action::Move(dx, dy) => self.screen.shift(dx, dy),
            Action::ToggleMovementMode => self.screen.toggle_mode(),
            Action::Flag => {
                let outcome = self.board.flag_tile(tile);
                log::debug!("flag {:?}: {:?}", tile, outcome);
            }
            Action::Check => {
                let outcome = self.board.check_tile(tile);
                log::debug!("check {:?}: {:?}", tile, outcome);
                if outcome == RevealOutcome::HitMine {
                    log::info!("bomb at {:?}, game over", tile);
                }
            }
            Action::Chord => {
                let outcome = self.board.chord_check(tile);
                log::debug!("chord {:?}: {:?}", tile, outcome);
            }
            Action::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    pub fn render(&mut self, out: &mut impl Write) -> io::Result<()> {
        let grid = self
            .board
            .materialize(self.screen.viewport(), &self.style, self.reveal_all);
        let ended = self.board.is_game_ended();
        self.screen.draw(&grid, !ended, out)?;

        let (x, y) = self.screen.cursor_tile();
        if ended {
            writeln!(out, "Game over. Press q to quit.")?;
        } else {
            writeln!(
                out,
                "({x}, {y}) {:?} mode, {} flags",
                self.screen.mode(),
                self.board.flagged_count()
            )?;
        }
        Ok(())
    }
}

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use game::{Flow, Game};
use settings::{Args, Settings};

mod game;
mod input;
mod screen;
mod settings;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = Settings::from_args(&args)?;
    log::debug!("settings: {:?}", settings);
    let mut game = Game::new(&settings)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut line = String::new();
    loop {
        game.render(&mut stdout)
            .context("Could not draw the board")?;
        write!(stdout, ">")?;
        stdout.flush()?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Could not read input")?;
        if read == 0 {
            break;
        }

        for action in input::parse_line(&line) {
            match action {
                Ok(action) => {
                    if game.apply(action) == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(key) => log::warn!("no action bound to {:?}", key),
            }
        }
    }
    Ok(())
}

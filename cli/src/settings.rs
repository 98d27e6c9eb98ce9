use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use infsweep_core::{BoardConfig, DisplayStyle};
use serde::Deserialize;

const DEFAULT_RESOLUTION: (u32, u32) = (21, 6);
const DEFAULT_SEED: i64 = 12345;
const DEFAULT_DENSITY: u8 = 5;
const DEFAULT_CURSOR: char = '#';

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Settings file, command line options take precedence over it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed of the minefield
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Chance in percent for any tile to be a bomb
    #[arg(short, long)]
    pub density: Option<u8>,

    /// Do not uncover the surroundings of tiles without adjacent bombs
    #[arg(long)]
    pub no_auto_uncover: bool,

    /// Tiles per line
    #[arg(long)]
    pub width: Option<u32>,

    /// Lines on screen
    #[arg(long)]
    pub height: Option<u32>,

    /// Show the whole minefield, for debugging
    #[arg(long)]
    pub reveal_all: bool,
}

/// Layout of the optional TOML settings file.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub screen: ScreenSection,
    pub board: BoardSection,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenSection {
    pub resolution_x: Option<u32>,
    pub resolution_y: Option<u32>,
    pub cursor_char: Option<char>,
    pub display_map: BTreeMap<String, char>,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BoardSection {
    pub seed: Option<i64>,
    pub bomb_chance: Option<u8>,
    pub auto_uncover_tiles: Option<bool>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }
}

/// Everything a game session needs, after merging defaults, file and command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub board: BoardConfig,
    pub resolution: (u32, u32),
    pub cursor_char: char,
    pub style: DisplayStyle,
    pub reveal_all: bool,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileSettings::load(path)?,
            None => FileSettings::default(),
        };
        Self::resolve(args, file)
    }

    pub fn resolve(args: &Args, file: FileSettings) -> Result<Self> {
        let FileSettings { screen, board } = file;

        let seed = args.seed.or(board.seed).unwrap_or(DEFAULT_SEED);
        let density = args
            .density
            .or(board.bomb_chance)
            .unwrap_or(DEFAULT_DENSITY);
        let auto_uncover = !args.no_auto_uncover && board.auto_uncover_tiles.unwrap_or(true);
        let board = BoardConfig::new(seed, density, auto_uncover)?;

        let width = args.width.or(screen.resolution_x);
        let height = args.height.or(screen.resolution_y);
        let resolution = (
            width.unwrap_or(DEFAULT_RESOLUTION.0),
            height.unwrap_or(DEFAULT_RESOLUTION.1),
        );
        ensure!(
            resolution.0 > 0 && resolution.1 > 0,
            "Screen resolution must be positive, got {}x{}",
            resolution.0,
            resolution.1
        );

        let style = DisplayStyle::default().with_overrides(
            screen
                .display_map
                .iter()
                .map(|(key, &symbol)| (key.as_str(), symbol)),
        )?;

        Ok(Self {
            board,
            resolution,
            cursor_char: screen.cursor_char.unwrap_or(DEFAULT_CURSOR),
            style,
            reveal_all: args.reveal_all,
        })
    }
}

use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Bomb density must be a percentage in 0..=100, got {0}")]
    InvalidDensity(u8),
    #[error("Invalid viewport of {width}x{height} tiles")]
    InvalidViewport { width: u32, height: u32 },
    #[error("Unknown display style key {0:?}")]
    UnknownStyleKey(String),
    #[error("Display style is missing key {0:?}")]
    MissingStyleKey(&'static str),
}

pub type Result<T> = core::result::Result<T, GameError>;

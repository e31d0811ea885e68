use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const MIN_SIDE: usize = 2;
pub const MAX_SIDE: usize = u8::MAX as usize;
const DEFAULT_SIDE: u8 = 8;

/// Board dimensions for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let rows = check_side("rows", rows)?;
        let cols = check_side("cols", cols)?;
        Ok(Self { rows, cols })
    }

    /// Parses dimensions typed by a user. Surrounding whitespace is ignored.
    pub fn parse(rows: &str, cols: &str) -> Result<Self> {
        Self::new(parse_side("rows", rows)?, parse_side("cols", cols)?)
    }

    /// Re-checks a value that came through `Deserialize` or direct construction.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.rows as usize, self.cols as usize).map(|_| ())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIDE,
            cols: DEFAULT_SIDE,
        }
    }
}

fn check_side(name: &str, value: usize) -> Result<u8> {
    if !(MIN_SIDE..=MAX_SIDE).contains(&value) {
        return Err(EngineError::InvalidDimensions {
            message: format!("{name} must be between {MIN_SIDE} and {MAX_SIDE}, got {value}"),
        });
    }
    Ok(value as u8)
}

fn parse_side(name: &str, text: &str) -> Result<usize> {
    let trimmed = text.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| EngineError::InvalidDimensions {
            message: format!("{name} must be a whole number, got {trimmed:?}"),
        })
}

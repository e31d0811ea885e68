use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::GameConfig;
pub use error::{EngineError, Result};
pub use game::GameState;
pub use types::{Cell, EndReason, GameResult, GameSnapshot, Move, MoveOutcome, Player, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

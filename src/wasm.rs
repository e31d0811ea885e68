use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::game::GameState;
use crate::types::Position;

/// Browser-facing handle around one [`GameState`].
#[wasm_bindgen]
pub struct WasmGame {
    game: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, cols: usize) -> Result<WasmGame, JsError> {
        let game = GameState::new(rows, cols).map_err(to_js_error)?;
        Ok(Self { game })
    }

    /// Builds a game from the raw text of the dimension inputs.
    #[wasm_bindgen(js_name = fromText)]
    pub fn from_text(rows: &str, cols: &str) -> Result<WasmGame, JsError> {
        let config = GameConfig::parse(rows, cols).map_err(to_js_error)?;
        let game = GameState::from_config(config).map_err(to_js_error)?;
        Ok(Self { game })
    }

    /// Returns a `GameSnapshot` object.
    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.snapshot())
    }

    /// Returns `Position[]` for highlighting.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        let moves: Vec<Position> = self
            .game
            .legal_moves()
            .iter()
            .map(|mv| mv.destination)
            .collect();
        to_js(&moves)
    }

    /// Plays for whoever is to move and returns the `MoveOutcome`.
    pub fn place(&mut self, row: u8, col: u8) -> Result<JsValue, JsError> {
        let player = self.game.current_player();
        let outcome = self
            .game
            .apply_move(player, Position::new(row, col))
            .map_err(to_js_error)?;
        to_js(&outcome)
    }

    /// The player to move gives up. Returns the `GameResult`.
    pub fn concede(&mut self) -> Result<JsValue, JsError> {
        let conceder = self.game.current_player();
        let result = self.game.concede(conceder).map_err(to_js_error)?;
        to_js(&result)
    }

    /// Returns the `GameResult`, or `null` while the game is running.
    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.result())
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_ended()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()))
}

fn to_js_error(err: EngineError) -> JsError {
    JsError::new(&err.to_string())
}

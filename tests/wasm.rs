#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use reversi_engine::wasm::WasmGame;
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

fn ok<T>(result: Result<T, JsError>) -> T {
    result.map_err(JsValue::from).unwrap()
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn wasm_ready_returns_true() {
    assert!(reversi_engine::wasm_ready());
}

#[wasm_bindgen_test]
fn place_returns_outcome_and_advances_turn() {
    let mut game = ok(WasmGame::new(8, 8));

    let outcome = ok(game.place(2, 3));

    assert_eq!(field(&outcome, "passed").as_bool(), Some(false));
    let state = ok(game.state());
    assert_eq!(field(&state, "first_count").as_f64(), Some(4.0));
    assert_eq!(field(&state, "current_player").as_string().as_deref(), Some("Second"));
}

#[wasm_bindgen_test]
fn bad_text_input_is_rejected() {
    assert!(WasmGame::from_text("eight", "8").is_err());
}

#[wasm_bindgen_test]
fn concede_ends_game() {
    let mut game = ok(WasmGame::new(6, 6));

    let result = ok(game.concede());

    assert_eq!(field(&result, "winner").as_string().as_deref(), Some("Second"));
    assert!(game.is_game_over());
    assert!(game.place(1, 2).is_err());
}

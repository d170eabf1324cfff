//! Space Cat core crate.
//!
//! A single-screen riddle game: the cat flies between four planets, each
//! locked behind a riddle, and celebrates once all of them are solved. The
//! game state lives in [`board::PuzzleBoard`] and is plain Rust, testable on
//! the host. `dom` is the browser shell that renders it and feeds it events.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
mod dom;
pub mod error;
pub mod starfield;
pub mod view;

pub use board::{
    BoardEffect, BoardEvent, CloseTicket, Feedback, Planet, PlanetColor, PlanetId, Position,
    PuzzleBoard, answer_matches,
};
pub use config::BoardConfig;
pub use error::{BoardError, SceneError};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. test harness) just keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Mount the scene into `document.body` with the default configuration.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    dom::mount(BoardConfig::default())?;
    Ok(())
}

/// Mount the scene with a JSON [`BoardConfig`]; missing fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = BoardConfig::from_json(json).map_err(SceneError::from)?;
    dom::mount(config)?;
    Ok(())
}

use wasm_bindgen::JsValue;

use crate::board::PlanetId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board needs at least one planet")]
    NoPlanets,
    #[error("duplicate planet id: {0}")]
    DuplicatePlanetId(PlanetId),
}

/// Failures while mounting or driving the browser scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
    #[cfg(feature = "serde_json")]
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for SceneError {
    fn from(value: JsValue) -> Self {
        SceneError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SceneError> for JsValue {
    fn from(err: SceneError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

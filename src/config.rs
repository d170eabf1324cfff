//! Tunables for a board session. Everything has a sensible default; the shell
//! can also take a JSON override when the `serde_json` feature is on.

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Delay between a correct answer and the dialog closing by itself.
    pub auto_close_ms: u32,
    /// Decorative stars in the background.
    pub star_count: usize,
    pub success_message: String,
    pub retry_message: String,
}

pub const DEFAULT_AUTO_CLOSE_MS: u32 = 2000;
pub const DEFAULT_STAR_COUNT: usize = 50;

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: DEFAULT_AUTO_CLOSE_MS,
            star_count: DEFAULT_STAR_COUNT,
            success_message: "Правильно! 🎉".to_string(),
            retry_message: "Попробуй ещё раз! 🤔".to_string(),
        }
    }
}

impl BoardConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

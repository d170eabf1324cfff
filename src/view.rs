//! Plain-data snapshot of what the scene should show. Built from the board on
//! every render so nothing here can drift from the game state.

use crate::board::{PlanetColor, PlanetId, Position, PuzzleBoard};
use crate::config::BoardConfig;

pub const TITLE: &str = "Космический Кот";
pub const TITLE_GLYPH: &str = "🐱";
pub const SUBTITLE: &str = "Помоги коту разгадать тайны планет!";
pub const PROGRESS_CAPTION: &str = "Исследовано";
pub const CHARACTER_GLYPH: &str = "🚀";
pub const SOLVED_MARK: &str = "✓";
pub const BANNER_GLYPH: &str = "🏆";
pub const BANNER_TITLE: &str = "Поздравляем!";
pub const BANNER_TEXT: &str = "Кот исследовал все планеты! Ты настоящий космический герой!";
pub const DIALOG_PROMPT: &str = "Разгадай загадку этой планеты:";
pub const ANSWER_PLACEHOLDER: &str = "Твой ответ...";
pub const SUBMIT_LABEL: &str = "Проверить ответ";

#[derive(Clone, Debug, PartialEq)]
pub struct SceneView {
    pub progress: ProgressView,
    pub show_banner: bool,
    pub character: Position,
    pub planets: Vec<PlanetMarkerView>,
    pub dialog: Option<DialogView>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressView {
    pub completed: usize,
    pub total: usize,
}

impl ProgressView {
    pub fn label(&self) -> String {
        format!("{} / {}", self.completed, self.total)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanetMarkerView {
    pub id: PlanetId,
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: PlanetColor,
    pub position: Position,
    pub solved: bool,
}

impl PlanetMarkerView {
    /// Solved planets are rendered disabled.
    pub fn clickable(&self) -> bool {
        !self.solved
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialogView {
    pub planet: PlanetId,
    pub emoji: &'static str,
    pub name: &'static str,
    pub riddle: &'static str,
    pub draft: String,
    pub feedback: Option<FeedbackView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackView {
    pub text: String,
    pub success: bool,
}

pub fn scene(board: &PuzzleBoard, config: &BoardConfig) -> SceneView {
    let planets = board
        .planets()
        .iter()
        .map(|p| PlanetMarkerView {
            id: p.id,
            name: p.name,
            emoji: p.emoji,
            color: p.color,
            position: p.position,
            solved: p.completed,
        })
        .collect();

    let dialog = board.selected_planet().map(|p| DialogView {
        planet: p.id,
        emoji: p.emoji,
        name: p.name,
        riddle: p.riddle,
        draft: board.draft_answer().to_string(),
        feedback: board.feedback().map(|f| FeedbackView {
            text: if f.is_success() {
                config.success_message.clone()
            } else {
                config.retry_message.clone()
            },
            success: f.is_success(),
        }),
    });

    SceneView {
        progress: ProgressView {
            completed: board.completed_count(),
            total: board.total(),
        },
        show_banner: board.all_completed(),
        character: board.character_position(),
        planets,
        dialog,
    }
}

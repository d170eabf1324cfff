// Planet catalog
// This file contains the Planet entity and the fixed four-planet journey.

/// Normalized scene coordinates, 0–100 on each axis (percent of the stage).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Where the character waits before the first planet is visited.
    pub const CENTER: Position = Position { x: 50.0, y: 50.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Theme color tokens. Logic never looks at these; the shell maps them to CSS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanetColor {
    Primary,
    Secondary,
    Accent,
    Destructive,
}

impl PlanetColor {
    pub fn css(self) -> &'static str {
        match self {
            PlanetColor::Primary => "#8b5cf6",
            PlanetColor::Secondary => "#f472b6",
            PlanetColor::Accent => "#facc15",
            PlanetColor::Destructive => "#f97316",
        }
    }
}

pub type PlanetId = u32;

/// One riddle-gated stop on the cat's journey.
#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    pub name: &'static str,
    pub color: PlanetColor,
    pub position: Position,
    pub riddle: &'static str,
    /// Canonical answer, authored lowercase.
    pub answer: &'static str,
    pub completed: bool,
    pub emoji: &'static str,
}

impl Planet {
    const fn unsolved(
        id: PlanetId,
        name: &'static str,
        color: PlanetColor,
        position: Position,
        riddle: &'static str,
        answer: &'static str,
        emoji: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            color,
            position,
            riddle,
            answer,
            completed: false,
            emoji,
        }
    }
}

pub static PLANETS: [Planet; 4] = [
    Planet::unsolved(
        1,
        "Планета Загадок",
        PlanetColor::Secondary,
        Position::new(20.0, 30.0),
        "Что можно увидеть с закрытыми глазами?",
        "сон",
        "🌙",
    ),
    Planet::unsolved(
        2,
        "Планета Тайн",
        PlanetColor::Primary,
        Position::new(70.0, 20.0),
        "Без крыльев летят, без ног бегут, без паруса плывут.",
        "облака",
        "☁️",
    ),
    Planet::unsolved(
        3,
        "Планета Чудес",
        PlanetColor::Accent,
        Position::new(45.0, 60.0),
        "Не огонь, а жжётся. Что это?",
        "крапива",
        "🌿",
    ),
    Planet::unsolved(
        4,
        "Планета Открытий",
        PlanetColor::Destructive,
        Position::new(15.0, 70.0),
        "Всегда во рту, а не проглотишь.",
        "язык",
        "👅",
    ),
];

/// Fresh, all-unsolved copy of the journey in display order.
pub fn journey() -> Vec<Planet> {
    PLANETS.to_vec()
}

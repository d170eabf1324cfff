//! Puzzle board: the whole game state and every transition on it.
//!
//! The board knows nothing about the DOM. The shell in `dom.rs` turns clicks,
//! keystrokes and timer callbacks into [`BoardEvent`]s, hands them to
//! [`PuzzleBoard::dispatch`], and carries out the returned [`BoardEffect`]
//! (at most one per event) against `setTimeout` / `clearTimeout`.
//!
//! The only deferred work is the auto-close after a correct answer. It is
//! tracked as a [`CloseTicket`]: leaving or closing the dialog cancels the
//! outstanding ticket, and a timer that fires with any other ticket is ignored.

use crate::error::BoardError;

mod planets;

pub use planets::{PLANETS, Planet, PlanetColor, PlanetId, Position, journey};

// --- Events / Effects --------------------------------------------------------

/// Identity of one scheduled auto-close.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CloseTicket(u64);

impl CloseTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Input to the board, one per UI interaction or timer firing.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardEvent {
    PlanetClicked(PlanetId),
    DraftChanged(String),
    Submit,
    DialogDismissed,
    AutoCloseElapsed(CloseTicket),
}

/// Side effect the shell must perform after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardEffect {
    ScheduleAutoClose { ticket: CloseTicket, delay_ms: u32 },
    CancelAutoClose { ticket: CloseTicket },
}

/// In-dialog feedback after a submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    TryAgain,
}

impl Feedback {
    pub fn is_success(self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingClose {
    ticket: CloseTicket,
    planet: PlanetId,
}

/// Case-insensitive comparison of typed input against a stored answer.
/// Only the input's outer whitespace is trimmed; inner spacing and
/// punctuation must match exactly.
pub fn answer_matches(input: &str, answer: &str) -> bool {
    input.trim().to_lowercase() == answer.to_lowercase()
}

// --- Board state -------------------------------------------------------------

/// Runtime session state.
#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleBoard {
    planets: Vec<Planet>,
    selected: Option<PlanetId>,
    draft: String,
    feedback: Option<Feedback>,
    character: Position,
    pending_close: Option<PendingClose>,
    next_ticket: u64,
    auto_close_ms: u32,
}

impl Default for PuzzleBoard {
    fn default() -> Self {
        Self::with_journey(crate::config::DEFAULT_AUTO_CLOSE_MS)
    }
}

impl PuzzleBoard {
    /// Build a board over an arbitrary planet set. Ids must be unique.
    pub fn new(planets: Vec<Planet>, auto_close_ms: u32) -> Result<Self, BoardError> {
        if planets.is_empty() {
            return Err(BoardError::NoPlanets);
        }
        for (i, p) in planets.iter().enumerate() {
            if planets[..i].iter().any(|q| q.id == p.id) {
                return Err(BoardError::DuplicatePlanetId(p.id));
            }
        }
        Ok(Self {
            planets,
            selected: None,
            draft: String::new(),
            feedback: None,
            character: Position::CENTER,
            pending_close: None,
            next_ticket: 0,
            auto_close_ms,
        })
    }

    /// The standard four-planet journey.
    pub fn with_journey(auto_close_ms: u32) -> Self {
        Self {
            planets: journey(),
            selected: None,
            draft: String::new(),
            feedback: None,
            character: Position::CENTER,
            pending_close: None,
            next_ticket: 0,
            auto_close_ms,
        }
    }

    // --- Accessors ---

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub fn selected_id(&self) -> Option<PlanetId> {
        self.selected
    }

    pub fn selected_planet(&self) -> Option<&Planet> {
        self.selected.and_then(|id| self.planet(id))
    }

    pub fn draft_answer(&self) -> &str {
        &self.draft
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn character_position(&self) -> Position {
        self.character
    }

    /// Ticket of the auto-close currently waiting to fire, if any.
    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.pending_close.map(|p| p.ticket)
    }

    // --- Derived progress (never cached) ---

    pub fn completed_count(&self) -> usize {
        self.planets.iter().filter(|p| p.completed).count()
    }

    pub fn total(&self) -> usize {
        self.planets.len()
    }

    pub fn all_completed(&self) -> bool {
        self.completed_count() == self.total()
    }

    // --- Transitions ---

    pub fn dispatch(&mut self, event: BoardEvent) -> Option<BoardEffect> {
        match event {
            BoardEvent::PlanetClicked(id) => self.select_planet(id),
            BoardEvent::DraftChanged(text) => {
                self.update_draft_answer(text);
                None
            }
            BoardEvent::Submit => self.submit_answer(),
            BoardEvent::DialogDismissed => self.close_dialog(),
            BoardEvent::AutoCloseElapsed(ticket) => {
                self.auto_close_elapsed(ticket);
                None
            }
        }
    }

    /// Open the riddle dialog for an unsolved planet and fly the character there.
    /// Clicking a solved planet does nothing at all.
    pub fn select_planet(&mut self, id: PlanetId) -> Option<BoardEffect> {
        let Some(planet) = self.planet(id) else {
            log::warn!("ignoring click on unknown planet {id}");
            return None;
        };
        if planet.completed {
            return None;
        }
        let position = planet.position;
        log::debug!("planet {id} selected");
        self.selected = Some(id);
        self.draft.clear();
        self.feedback = None;
        self.character = position;
        self.cancel_pending()
    }

    pub fn update_draft_answer(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn submit_answer(&mut self) -> Option<BoardEffect> {
        let id = self.selected?;
        let idx = self.planets.iter().position(|p| p.id == id)?;
        // Already solved: we are inside the auto-close window.
        if self.planets[idx].completed {
            return None;
        }
        if !answer_matches(&self.draft, self.planets[idx].answer) {
            self.feedback = Some(Feedback::TryAgain);
            return None;
        }

        self.planets[idx].completed = true;
        self.feedback = Some(Feedback::Correct);
        log::info!(
            "planet {id} solved ({}/{})",
            self.completed_count(),
            self.total()
        );

        let ticket = CloseTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending_close = Some(PendingClose { ticket, planet: id });
        Some(BoardEffect::ScheduleAutoClose {
            ticket,
            delay_ms: self.auto_close_ms,
        })
    }

    /// Dismiss the dialog. The character stays where it is.
    pub fn close_dialog(&mut self) -> Option<BoardEffect> {
        self.selected = None;
        self.feedback = None;
        self.cancel_pending()
    }

    /// Timer callback. Only the outstanding ticket may close the dialog.
    pub fn auto_close_elapsed(&mut self, ticket: CloseTicket) {
        match self.pending_close {
            Some(pending) if pending.ticket == ticket && self.selected == Some(pending.planet) => {
                self.pending_close = None;
                self.selected = None;
                self.feedback = None;
            }
            _ => log::debug!("stale auto-close ticket {} ignored", ticket.id()),
        }
    }

    fn cancel_pending(&mut self) -> Option<BoardEffect> {
        self.pending_close
            .take()
            .map(|p| BoardEffect::CancelAutoClose { ticket: p.ticket })
    }
}

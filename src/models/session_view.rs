//! What the window shows for a given session state.
//! Built fresh every frame; holds no state of its own.

use super::{OrderMode, StudySession};

pub const WELCOME_MESSAGE: &str = "Load a flashcard file to start.";
pub const FINISHED_MESSAGE: &str = "No more cards!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayText {
    Welcome,
    Front(String),
    Back(String),
    Finished,
}

impl DisplayText {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayText::Welcome => WELCOME_MESSAGE,
            DisplayText::Front(text) | DisplayText::Back(text) => text,
            DisplayText::Finished => FINISHED_MESSAGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub display: DisplayText,
    pub can_reveal: bool,
    pub can_grade: bool,
    pub can_advance: bool,
    pub can_jump: bool,
    pub stats: String,
    pub progress: String,
    pub mode: String,
}

impl SessionView {
    pub fn from_session(session: &StudySession) -> Self {
        let display = match session.current_card() {
            Some(card) if session.is_revealed() => DisplayText::Back(card.back.clone()),
            Some(card) => DisplayText::Front(card.front.clone()),
            None if session.has_deck() => DisplayText::Finished,
            None => DisplayText::Welcome,
        };
        let has_card = session.current_card().is_some();

        let progress = if session.has_deck() {
            format!(
                "Progress: {} / {}",
                session.graded_count(),
                session.deck_len()
            )
        } else {
            String::new()
        };

        let mode = match session.order_mode() {
            OrderMode::Shuffled => "Mode: Shuffled".to_string(),
            OrderMode::Ordered => format!("Mode: Ordered from #{}", session.start_index() + 1),
        };

        Self {
            display,
            can_reveal: has_card && !session.is_revealed(),
            can_grade: session.is_revealed(),
            can_advance: has_card,
            can_jump: session.deck_len() > 0,
            stats: format!(
                "Correct: {} | Incorrect: {}",
                session.correct_count(),
                session.incorrect_count()
            ),
            progress,
            mode,
        }
    }
}

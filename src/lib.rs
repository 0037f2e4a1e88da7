pub mod error;
pub mod import;
pub mod models;
pub mod paths;
pub mod settings;
pub mod sound;

pub use error::{AppError, SessionError};
pub use import::{load_deck, parse_deck};
pub use models::{Deck, Flashcard, Grade, OrderMode, SessionView, StudyEvent, StudySession};

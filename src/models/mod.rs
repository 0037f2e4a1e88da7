pub mod deck;
pub mod flashcard;
pub mod session_view;
pub mod study_event;
pub mod study_session;

pub use deck::Deck;
pub use flashcard::Flashcard;
pub use session_view::{DisplayText, SessionView};
pub use study_event::{Notifier, StudyEvent};
pub use study_session::{Grade, OrderMode, StudySession};

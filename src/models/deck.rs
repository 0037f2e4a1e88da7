//! Deck is the ordered set of flashcards read from one file
use super::Flashcard;
use crate::import::Delimiter;

#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    pub name: String,
    pub flashcards: Vec<Flashcard>,
    /// Delimiter that produced the cards, `None` when no attempt yielded a row.
    pub delimiter: Option<Delimiter>,
}

impl Deck {
    pub fn new(name: impl Into<String>, flashcards: Vec<Flashcard>) -> Self {
        Self {
            name: name.into(),
            flashcards,
            delimiter: None,
        }
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new("Untitled", Vec::new())
    }
}

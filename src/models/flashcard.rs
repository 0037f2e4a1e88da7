//! Flashcard is a pair <front, back>. Only text is used on both sides
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_creation() {
        let card = Flashcard::new("2+2?", "4");

        assert_eq!(card.front, "2+2?");
        assert_eq!(card.back, "4");
    }

    #[test]
    fn test_flashcards_compare_by_both_sides() {
        let card1 = Flashcard::new("cap of FR?", "Paris");
        let card2 = card1.clone();
        let card3 = Flashcard::new("cap of FR?", "Lyon");

        assert_eq!(card1, card2);
        assert_ne!(card1, card3);
    }
}

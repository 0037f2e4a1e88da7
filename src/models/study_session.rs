//! Study session state machine.
//! Owns the loaded deck, the queue of cards left in the current pass, the reveal state
//! and the correct/incorrect tally. Every mutation goes through a named transition.

use super::{Deck, Flashcard, StudyEvent};
use crate::error::SessionError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// How the queue is derived from the deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderMode {
    #[default]
    Shuffled,
    Ordered,
}

/// Self-assessment recorded after revealing the back of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Incorrect,
}

pub struct StudySession {
    deck: Option<Deck>,
    queue: VecDeque<Flashcard>,
    current_card: Option<Flashcard>,
    revealed: bool,
    correct_count: usize,
    incorrect_count: usize,
    order_mode: OrderMode,
    start_index: usize,
    events: Vec<StudyEvent>,
    rng: StdRng,
}

impl Default for StudySession {
    fn default() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with a deterministic shuffle order.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            deck: None,
            queue: VecDeque::new(),
            current_card: None,
            revealed: false,
            correct_count: 0,
            incorrect_count: 0,
            order_mode: OrderMode::default(),
            start_index: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Replaces the deck and starts a fresh pass. The only transition that resets the tally.
    pub fn load_deck(&mut self, deck: Deck) {
        tracing::info!(
            "Loaded deck '{}' with {} cards ({:?} mode)",
            deck.name,
            deck.len(),
            self.order_mode
        );
        self.deck = Some(deck);
        self.correct_count = 0;
        self.incorrect_count = 0;
        self.start_index = 0;
        self.current_card = None;
        self.revealed = false;
        self.rebuild_queue();
        self.advance();
    }

    /// Switches to a uniformly shuffled pass over the whole deck.
    pub fn set_shuffled(&mut self) {
        self.order_mode = OrderMode::Shuffled;
        self.start_index = 0;
        self.rebuild_queue();
        self.advance();
    }

    /// Switches to file order starting at the 1-based `start`.
    /// A missing or zero start means the first card; a start past the end leaves nothing to study.
    pub fn set_ordered(&mut self, start: Option<usize>) {
        self.order_mode = OrderMode::Ordered;
        self.start_index = match start {
            Some(n) if n >= 1 => (n - 1).min(self.deck_len()),
            _ => 0,
        };
        self.rebuild_queue();
        self.advance();
    }

    /// Continues from the 1-based `question_number` in file order.
    /// Out-of-range or missing numbers are ignored; returns whether the jump happened.
    pub fn jump_to(&mut self, question_number: Option<usize>) -> bool {
        let Some(deck) = &self.deck else {
            return false;
        };
        match question_number {
            Some(n) if (1..=deck.len()).contains(&n) => {
                self.queue = deck.flashcards[n - 1..].iter().cloned().collect();
                self.advance();
                true
            }
            _ => {
                tracing::debug!("Ignoring jump to {:?}", question_number);
                false
            }
        }
    }

    /// Shows the next card in the queue, or ends the pass when the queue is empty.
    pub fn advance(&mut self) {
        if self.deck.is_none() {
            return;
        }
        self.revealed = false;
        match self.queue.pop_front() {
            Some(card) => self.current_card = Some(card),
            None => {
                self.current_card = None;
                self.events.push(StudyEvent::SessionComplete);
            }
        }
    }

    pub fn reveal(&mut self) -> Result<(), SessionError> {
        if self.current_card.is_none() {
            return Err(SessionError::NoCurrentCard);
        }
        if self.revealed {
            return Err(SessionError::AlreadyRevealed);
        }
        self.revealed = true;
        Ok(())
    }

    /// Records the grade for the revealed card and moves on.
    pub fn grade(&mut self, grade: Grade) -> Result<(), SessionError> {
        if !self.revealed {
            return Err(SessionError::NotRevealed);
        }
        match grade {
            Grade::Correct => {
                self.correct_count += 1;
                self.events.push(StudyEvent::CardCorrect);
            }
            Grade::Incorrect => {
                self.incorrect_count += 1;
                self.events.push(StudyEvent::CardIncorrect);
            }
        }
        self.advance();
        Ok(())
    }

    /// Drains the events raised since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<StudyEvent> {
        std::mem::take(&mut self.events)
    }

    fn rebuild_queue(&mut self) {
        let Some(deck) = &self.deck else {
            self.queue.clear();
            return;
        };
        self.queue = match self.order_mode {
            OrderMode::Shuffled => {
                let mut cards = deck.flashcards.clone();
                cards.shuffle(&mut self.rng);
                cards.into()
            }
            OrderMode::Ordered => deck.flashcards[self.start_index..].iter().cloned().collect(),
        };
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    pub fn has_deck(&self) -> bool {
        self.deck.is_some()
    }

    pub fn deck_len(&self) -> usize {
        self.deck.as_ref().map(Deck::len).unwrap_or(0)
    }

    pub fn queue(&self) -> &VecDeque<Flashcard> {
        &self.queue
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.current_card.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect_count
    }

    pub fn graded_count(&self) -> usize {
        self.correct_count + self.incorrect_count
    }

    pub fn order_mode(&self) -> OrderMode {
        self.order_mode
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// True once a deck is loaded and no card is left to show.
    pub fn is_complete(&self) -> bool {
        self.has_deck() && self.current_card.is_none()
    }
}

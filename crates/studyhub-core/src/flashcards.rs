//! Flashcard study session.
//!
//! Ephemeral like the quiz session: a current card index and a flip flag,
//! wrapping modulo the deck length in both directions.

use crate::error::EngineError;
use crate::model::{Card, Deck};

#[derive(Debug, Clone)]
pub struct FlashcardSession {
    deck: Deck,
    index: usize,
    flipped: bool,
}

impl FlashcardSession {
    /// Start at the first card, front side up.
    pub fn new(deck: Deck) -> Result<Self, EngineError> {
        if deck.cards.is_empty() {
            return Err(EngineError::EmptyDeck);
        }
        Ok(Self {
            deck,
            index: 0,
            flipped: false,
        })
    }

    pub fn deck_title(&self) -> &str {
        &self.deck.title
    }

    /// (current index, deck length) for the "card X of N" line.
    pub fn position(&self) -> (usize, usize) {
        (self.index, self.deck.cards.len())
    }

    pub fn current_card(&self) -> &Card {
        &self.deck.cards[self.index]
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Advance, wrapping to the first card after the last. The new card is
    /// shown front side up.
    pub fn next(&mut self) {
        self.flipped = false;
        self.index = (self.index + 1) % self.deck.cards.len();
    }

    /// Go back, wrapping to the last card from the first.
    pub fn previous(&mut self) {
        self.flipped = false;
        let len = self.deck.cards.len();
        self.index = (self.index + len - 1) % len;
    }
}

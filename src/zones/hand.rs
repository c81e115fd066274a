//! A student's hand.
//!
//! Cards are kept sorted by rank, highest first. Every insertion re-establishes
//! the order, so position 0 is always a highest card and the last position a
//! lowest one. Cards of equal rank keep their arrival order.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from arbitrary cards, sorting them.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self::new();
        for card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Insert a card at its sorted position.
    pub fn add_card(&mut self, card: Card) {
        let idx = self.cards.partition_point(|c| c.rank() >= card.rank());
        self.cards.insert(idx, card);
    }

    /// Remove the card at `position`.
    pub fn remove(&mut self, position: usize) -> Option<Card> {
        if position < self.cards.len() {
            Some(self.cards.remove(position))
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the ordering invariant holds. Always true for hands built
    /// through this API.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.cards.windows(2).all(|w| w[0].rank() >= w[1].rank())
    }
}

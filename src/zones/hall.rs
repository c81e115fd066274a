//! The lecture hall: the shared pool in the middle of the table.
//!
//! Holds at most `HALL_CAPACITY` cards. Cards leave when they complete a trio
//! and are replaced from the deck in draw order. Every hall position can be
//! revealed.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::config::HALL_CAPACITY;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureHall {
    cards: Vec<Card>,
}

impl LectureHall {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(HALL_CAPACITY),
        }
    }

    /// Draw from `deck` until the hall is full or the deck is empty.
    ///
    /// Returns the number of cards drawn.
    pub fn refill(&mut self, deck: &mut Deck) -> usize {
        let missing = HALL_CAPACITY.saturating_sub(self.cards.len());
        let drawn = deck.draw_n(missing);
        let count = drawn.len();
        self.cards.extend(drawn);
        count
    }

    /// Remove the card at `position`; later cards shift down.
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

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= HALL_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::standard_deck_cards;

    #[test]
    fn test_refill_to_capacity() {
        let mut deck = Deck::from_cards(standard_deck_cards());
        let mut hall = LectureHall::new();

        assert_eq!(hall.refill(&mut deck), 9);
        assert!(hall.is_full());
        assert_eq!(deck.remaining(), 27);

        // Already full: nothing drawn
        assert_eq!(hall.refill(&mut deck), 0);
        assert_eq!(deck.remaining(), 27);
    }

    #[test]
    fn test_refill_after_removal_draws_in_order() {
        let mut deck = Deck::from_cards(standard_deck_cards());
        let mut hall = LectureHall::new();
        hall.refill(&mut deck);

        let next = deck.iter().next().cloned();
        hall.remove(0);
        hall.remove(0);

        assert_eq!(hall.refill(&mut deck), 2);
        assert_eq!(hall.len(), 9);
        assert_eq!(hall.get(7).cloned(), next);
    }

    #[test]
    fn test_refill_with_short_deck() {
        let mut deck = Deck::from_cards(standard_deck_cards().into_iter().take(4).collect());
        let mut hall = LectureHall::new();

        assert_eq!(hall.refill(&mut deck), 4);
        assert_eq!(hall.len(), 4);
        assert!(!hall.is_full());
        assert_eq!(hall.refill(&mut deck), 0);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut hall = LectureHall::new();
        assert!(hall.remove(0).is_none());
        assert!(hall.is_empty());
    }
}

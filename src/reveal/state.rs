//! Per-turn reveal accumulator.
//!
//! Holds the 0-3 cards the current student has exposed this turn, where each
//! one came from, and answers the two questions the turn protocol asks after
//! every pick: is there a mismatch, and is this a complete trio?
//!
//! ## Phases
//!
//! ```text
//! Empty -> One -> Two -> Resolved   (three matching picks)
//!            \      \---> Mismatch  (latest picks differ)
//!             \---------> Mismatch
//! ```
//!
//! A duplicate position or a fourth pick is rejected and leaves the state
//! untouched. The state is cleared, never recreated, between turns.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Trio};
use crate::core::config::MAX_REVEALS;
use crate::core::StudentId;

/// Where a revealed card sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealSource {
    /// The revealing student's own hand.
    OwnHand,
    /// Another student's hand.
    OtherHand(StudentId),
    /// The lecture hall.
    Hall,
}

impl RevealSource {
    /// The other student, for `OtherHand`.
    #[must_use]
    pub fn source_student(self) -> Option<StudentId> {
        match self {
            RevealSource::OtherHand(s) => Some(s),
            RevealSource::OwnHand | RevealSource::Hall => None,
        }
    }
}

/// One pick.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealedCard {
    pub card: Card,
    pub source: RevealSource,
    pub position: usize,
}

/// Derived phase of the accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealPhase {
    Empty,
    One,
    Two,
    /// Three matching picks.
    Resolved,
    /// The picks do not all match.
    Mismatch,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    picks: SmallVec<[RevealedCard; MAX_REVEALS]>,
}

impl RevealState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pick.
    ///
    /// Returns false, changing nothing, when three picks already exist or the
    /// same (source, position) was already revealed this turn.
    ///
    /// ```
    /// use rust_trio::cards::Card;
    /// use rust_trio::reveal::{RevealSource, RevealState};
    ///
    /// let card = Card::from_catalog("LO21").unwrap();
    /// let mut state = RevealState::new();
    ///
    /// assert!(state.add_reveal(card.clone(), RevealSource::Hall, 2));
    /// assert!(!state.add_reveal(card, RevealSource::Hall, 2));
    /// assert_eq!(state.len(), 1);
    /// ```
    pub fn add_reveal(&mut self, card: Card, source: RevealSource, position: usize) -> bool {
        if self.is_full() || self.contains(source, position) {
            return false;
        }
        self.picks.push(RevealedCard {
            card,
            source,
            position,
        });
        true
    }

    /// Whether this exact position was already picked this turn.
    #[must_use]
    pub fn contains(&self, source: RevealSource, position: usize) -> bool {
        self.picks
            .iter()
            .any(|p| p.source == source && p.position == position)
    }

    /// The two most recent picks differ by course code.
    #[must_use]
    pub fn has_mismatch(&self) -> bool {
        match self.picks.as_slice() {
            [.., a, b] => !a.card.matches(&b.card),
            _ => false,
        }
    }

    /// Every pick so far shares the first pick's course code.
    #[must_use]
    pub fn all_match(&self) -> bool {
        match self.picks.split_first() {
            Some((first, rest)) => rest.iter().all(|p| p.card.matches(&first.card)),
            None => true,
        }
    }

    /// Exactly three picks, all matching.
    #[must_use]
    pub fn is_valid_trio(&self) -> bool {
        self.picks.len() == MAX_REVEALS && self.all_match()
    }

    /// The picks as a trio, once three exist.
    #[must_use]
    pub fn trio(&self) -> Option<Trio> {
        match self.picks.as_slice() {
            [a, b, c] => Some(Trio::new([a.card.clone(), b.card.clone(), c.card.clone()])),
            _ => None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        if !self.all_match() {
            return RevealPhase::Mismatch;
        }
        match self.picks.len() {
            0 => RevealPhase::Empty,
            1 => RevealPhase::One,
            2 => RevealPhase::Two,
            _ => RevealPhase::Resolved,
        }
    }

    /// Discard every pick.
    pub fn clear(&mut self) {
        self.picks.clear();
    }

    #[must_use]
    pub fn revealed(&self) -> &[RevealedCard] {
        &self.picks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.picks.len() >= MAX_REVEALS
    }
}

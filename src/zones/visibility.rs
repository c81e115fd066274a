//! Which hand positions can be revealed, and which ones reveal themselves.
//!
//! A hand is sorted by rank, highest first. Its owner may reveal the first or
//! last card, or any card in a run of equal rank anchored at either end (the
//! owner knows those are the same course). Anyone else only ever sees the two
//! ends: exactly the first and the last position.
//!
//! `twin_positions` is the related auto-reveal rule: once the owner reveals a
//! card inside an end run, the other members of that run are exposed with it.
//!
//! All functions are pure and take the hand as a slice, so they must be
//! called again whenever the hand changes.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Who is looking at the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viewer {
    /// The student holding the hand.
    Owner,
    /// Any other student.
    Other,
}

/// Length of the equal-rank run starting at index 0.
fn head_run_len(cards: &[Card]) -> usize {
    match cards.first() {
        Some(first) => cards
            .iter()
            .take_while(|c| c.rank() == first.rank())
            .count(),
        None => 0,
    }
}

/// Start index of the equal-rank run ending at the last index.
fn tail_run_start(cards: &[Card]) -> usize {
    match cards.last() {
        Some(last) => {
            let run = cards
                .iter()
                .rev()
                .take_while(|c| c.rank() == last.rank())
                .count();
            cards.len() - run
        }
        None => 0,
    }
}

/// Revealable positions in ascending order.
///
/// ```
/// use rust_trio::cards::Card;
/// use rust_trio::zones::{revealable_positions, Hand, Viewer};
///
/// let hand = Hand::from_cards(
///     ["GE21", "GE21", "LO21", "IF2", "MT11"].map(|c| Card::from_catalog(c).unwrap()),
/// );
/// assert_eq!(revealable_positions(hand.cards(), Viewer::Owner), vec![0, 1, 4]);
/// assert_eq!(revealable_positions(hand.cards(), Viewer::Other), vec![0, 4]);
/// ```
#[must_use]
pub fn revealable_positions(cards: &[Card], viewer: Viewer) -> Vec<usize> {
    let len = cards.len();
    if len == 0 {
        return Vec::new();
    }

    match viewer {
        Viewer::Other => {
            if len == 1 {
                vec![0]
            } else {
                vec![0, len - 1]
            }
        }
        Viewer::Owner => {
            let head = head_run_len(cards);
            let tail = tail_run_start(cards);
            if tail <= head {
                (0..len).collect()
            } else {
                (0..head).chain(tail..len).collect()
            }
        }
    }
}

/// Whether `position` is currently revealable for `viewer`.
#[must_use]
pub fn is_revealable(cards: &[Card], position: usize, viewer: Viewer) -> bool {
    if position >= cards.len() {
        return false;
    }
    match viewer {
        Viewer::Other => position == 0 || position == cards.len() - 1,
        Viewer::Owner => position < head_run_len(cards) || position >= tail_run_start(cards),
    }
}

/// Positions auto-revealed together with `position`.
///
/// Only the owner's own hand qualifies. The result is the rest of the end run
/// that contains `position`, limited to cards matching it, ascending. Empty when
/// `position` is not inside an end run.
#[must_use]
pub fn twin_positions(cards: &[Card], position: usize, viewer: Viewer) -> Vec<usize> {
    if viewer != Viewer::Owner {
        return Vec::new();
    }
    let Some(picked) = cards.get(position) else {
        return Vec::new();
    };

    let head = head_run_len(cards);
    let tail = tail_run_start(cards);
    let mut twins: Vec<usize> = Vec::new();
    if position < head {
        twins.extend(0..head);
    }
    if position >= tail {
        twins.extend(tail..cards.len());
    }
    twins.sort_unstable();
    twins.dedup();
    twins.retain(|&p| p != position && cards[p].matches(picked));
    twins
}

//! Circular turn order.
//!
//! The order is fixed when the game is configured. Wrapping back to the
//! first seat starts a new round. Rounds are counted from 1.

use serde::{Deserialize, Serialize};

use crate::core::StudentId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnManager {
    order: Vec<StudentId>,
    current: usize,
    round: u32,
}

impl TurnManager {
    /// Create a turn manager starting at the first seat of `order`.
    ///
    /// Panics if `order` is empty.
    #[must_use]
    pub fn new(order: Vec<StudentId>) -> Self {
        assert!(!order.is_empty(), "Turn order must not be empty");
        Self {
            order,
            current: 0,
            round: 1,
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> StudentId {
        self.order[self.current]
    }

    /// Index of the current student within the order.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn order(&self) -> &[StudentId] {
        &self.order
    }

    /// Pass the turn to the next seat and return the new current student.
    ///
    /// ```
    /// use rust_trio::core::StudentId;
    /// use rust_trio::rules::TurnManager;
    ///
    /// let mut turns = TurnManager::new(StudentId::all(2).collect());
    /// assert_eq!(turns.next_turn(), StudentId::new(1));
    /// assert_eq!(turns.next_turn(), StudentId::new(0));
    /// assert_eq!(turns.round(), 2);
    /// ```
    pub fn next_turn(&mut self) -> StudentId {
        self.current += 1;
        if self.current >= self.order.len() {
            self.current = 0;
            self.round += 1;
        }
        self.current_player()
    }

    /// Back to the first seat, round 1.
    pub fn reset(&mut self) {
        self.current = 0;
        self.round = 1;
    }
}

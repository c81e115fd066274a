//! Trio validation and scoring.
//!
//! A trio is valid when all three cards share a course code. Advanced modes
//! also require a shared category, except for the final project which is
//! always judged on its code alone.
//!
//! | Trio | Simple | Advanced |
//! | --- | --- | --- |
//! | final project | 6 | 6 |
//! | any other valid trio | 2 | 3 |
//! | invalid | 0 | 0 |

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::config::{GameMode, FINAL_PROJECT_CREDITS};

/// Three cards judged together.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trio {
    cards: [Card; 3],
}

impl Trio {
    #[must_use]
    pub fn new(cards: [Card; 3]) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card; 3] {
        &self.cards
    }

    /// Course code of the first card.
    #[must_use]
    pub fn code(&self) -> &str {
        self.cards[0].code()
    }

    /// All three cards share a course code.
    #[must_use]
    pub fn all_match(&self) -> bool {
        let [a, b, c] = &self.cards;
        a.matches(b) && b.matches(c)
    }

    /// A matching trio of final-project cards.
    #[must_use]
    pub fn is_final_project(&self) -> bool {
        self.all_match() && self.cards[0].is_final_project()
    }

    /// Validity under `mode`.
    ///
    /// ```
    /// use rust_trio::cards::{Card, Category, Trio};
    /// use rust_trio::core::GameMode;
    ///
    /// let mixed = Trio::new([
    ///     Card::new("IF2", Category::Technical, 4),
    ///     Card::new("IF2", Category::Technical, 4),
    ///     Card::new("IF2", Category::Management, 4),
    /// ]);
    /// assert!(mixed.is_valid(GameMode::SimpleIndividual));
    /// assert!(!mixed.is_valid(GameMode::AdvancedIndividual));
    /// ```
    #[must_use]
    pub fn is_valid(&self, mode: GameMode) -> bool {
        if !self.all_match() {
            return false;
        }
        if self.is_final_project() || !mode.is_advanced() {
            return true;
        }
        let [a, b, c] = &self.cards;
        a.category() == b.category() && b.category() == c.category()
    }

    /// Credits awarded under `mode` (0 when invalid).
    #[must_use]
    pub fn credits(&self, mode: GameMode) -> u32 {
        if !self.is_valid(mode) {
            0
        } else if self.is_final_project() {
            FINAL_PROJECT_CREDITS
        } else {
            mode.trio_credits()
        }
    }
}

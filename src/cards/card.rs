//! Course cards and the standard catalog.
//!
//! A card names a course unit (its code), the category the course belongs
//! to and a numeric rank. Two cards *match* when their course codes are
//! equal; rank only drives hand ordering and visibility.

use serde::{Deserialize, Serialize};

use crate::core::config::FINAL_PROJECT_CODE;

/// Copies of each course code in the standard deck.
pub const COPIES_PER_CODE: usize = 3;

/// Course category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Scientific foundations (maths, physics, systems).
    Scientific,
    /// Techniques and methods (programming, engineering).
    Technical,
    /// Languages and communication.
    Communication,
    /// Management and economics.
    Management,
    /// The final project.
    FinalProject,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Scientific => "CS",
            Category::Technical => "TM",
            Category::Communication => "EC",
            Category::Management => "ME",
            Category::FinalProject => "PFE",
        };
        f.write_str(name)
    }
}

/// Standard catalog: (code, category, rank).
pub const CATALOG: [(&str, Category, u8); 12] = [
    ("MT11", Category::Scientific, 1),
    ("PS11", Category::Scientific, 2),
    ("SY15", Category::Scientific, 3),
    ("IF2", Category::Technical, 4),
    ("LO21", Category::Technical, 5),
    ("AP4A", Category::Technical, 6),
    ("LE03", Category::Communication, 7),
    ("LC00", Category::Communication, 8),
    ("GE21", Category::Management, 9),
    ("MG01", Category::Management, 10),
    ("RE01", Category::Management, 11),
    (FINAL_PROJECT_CODE, Category::FinalProject, 12),
];

/// Total cards in the standard deck.
pub const STANDARD_DECK_SIZE: usize = CATALOG.len() * COPIES_PER_CODE;

/// An immutable course card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    code: String,
    category: Category,
    rank: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(code: impl Into<String>, category: Category, rank: u8) -> Self {
        Self {
            code: code.into(),
            category,
            rank,
        }
    }

    /// Look a code up in the standard catalog.
    ///
    /// ```
    /// use rust_trio::cards::Card;
    ///
    /// let card = Card::from_catalog("LO21").unwrap();
    /// assert_eq!(card.rank(), 5);
    /// assert!(Card::from_catalog("XX99").is_none());
    /// ```
    #[must_use]
    pub fn from_catalog(code: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|&(c, category, rank)| Self::new(c, category, rank))
    }

    /// Course code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Course category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Ordering rank.
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Two cards match iff their course codes are equal.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.code == other.code
    }

    /// Whether this is the final-project card.
    #[must_use]
    pub fn is_final_project(&self) -> bool {
        self.code == FINAL_PROJECT_CODE
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.code, self.category)
    }
}

/// All 36 cards of the standard deck, unshuffled, in catalog order.
#[must_use]
pub fn standard_deck_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
    for &(code, category, rank) in &CATALOG {
        for _ in 0..COPIES_PER_CODE {
            cards.push(Card::new(code, category, rank));
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_by_code() {
        let a = Card::new("LO21", Category::Technical, 5);
        let b = Card::new("LO21", Category::Management, 9);
        let c = Card::new("IF2", Category::Technical, 5);

        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_final_project() {
        let pfe = Card::from_catalog("PFE").unwrap();
        assert!(pfe.is_final_project());
        assert_eq!(pfe.category(), Category::FinalProject);
        assert!(!Card::from_catalog("MT11").unwrap().is_final_project());
    }

    #[test]
    fn test_standard_deck_composition() {
        let cards = standard_deck_cards();
        assert_eq!(cards.len(), 36);
        assert_eq!(STANDARD_DECK_SIZE, 36);

        for &(code, _, _) in &CATALOG {
            assert_eq!(cards.iter().filter(|c| c.code() == code).count(), 3);
        }
    }

    #[test]
    fn test_catalog_ranks_unique() {
        let mut ranks: Vec<u8> = CATALOG.iter().map(|&(_, _, r)| r).collect();
        ranks.sort_unstable();
        ranks.dedup();
        assert_eq!(ranks.len(), CATALOG.len());
    }

    #[test]
    fn test_display() {
        let card = Card::from_catalog("GE21").unwrap();
        assert_eq!(format!("{}", card), "GE21 [ME]");
    }

    #[test]
    fn test_serialization() {
        let card = Card::from_catalog("AP4A").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}

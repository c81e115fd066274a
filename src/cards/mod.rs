//! Card system: course cards, the deck and trios.
//!
//! ## Key Types
//!
//! - `Card`: immutable course card (code, category, rank)
//! - `Category`: course category, used by advanced trio rules
//! - `Deck`: shuffled draw pile
//! - `Trio`: three cards judged against a `GameMode`

pub mod card;
pub mod deck;
pub mod trio;

pub use card::{standard_deck_cards, Card, Category, CATALOG};
pub use deck::Deck;
pub use trio::Trio;

//! Card containers: private hands and the shared lecture hall.
//!
//! ## Key Types
//!
//! - `Hand`: a student's cards, sorted by rank descending
//! - `LectureHall`: the shared nine-card pool
//! - `Viewer`: owner or third party, for visibility rules
//!
//! The visibility functions live in `visibility` and are kept separate from
//! `Hand` so they can be tested on plain slices.

pub mod hall;
pub mod hand;
pub mod visibility;

pub use hall::LectureHall;
pub use hand::Hand;
pub use visibility::{is_revealable, revealable_positions, twin_positions, Viewer};

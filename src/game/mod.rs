//! The match itself.
//!
//! ## Key Types
//!
//! - `Game`: owns all match state and runs the reveal protocol
//! - `RevealVerdict`: what a single reveal did
//! - `GameController`: Setup / Playing / CheckingVictory / GameOver phases
//! - `Student`: a seated player with hand, credits and trios

pub mod controller;
pub mod engine;
pub mod student;
pub mod verdict;

pub use controller::{GameController, GamePhase};
pub use engine::{Game, PendingOutcome, RevealRecord, TurnOutcome};
pub use student::Student;
pub use verdict::{InvalidMove, RevealVerdict};

//! # rust-trio
//!
//! Reveal-and-match engine for a trio-collecting memory card game.
//!
//! Students hold hands sorted by course rank, share a nine-card lecture
//! hall, and take turns revealing cards one at a time. Three cards of the
//! same course form a trio worth credits; six credits graduate.
//!
//! ## Design Principles
//!
//! 1. **Explicit Context**: all match state lives in one `Game`. There are
//!    no globals and no background tasks; the caller drives every step.
//!
//! 2. **Verdicts, Not Exceptions**: every reveal returns a `RevealVerdict`.
//!    Invalid moves are reported and leave the state untouched.
//!
//! 3. **Deterministic**: the deck is shuffled with a seeded ChaCha8 RNG, so a
//!    seed and a configuration reproduce a deal exactly.
//!
//! ## Modules
//!
//! - `core`: student/team ids, per-student storage, RNG, configuration
//! - `cards`: course cards, the deck, trios
//! - `zones`: hands, the lecture hall, visibility rules
//! - `reveal`: the per-turn reveal accumulator
//! - `rules`: turn order, scores, teams, results
//! - `game`: the `Game` engine and the `GameController` phase machine
//! - `errors`: configuration and trading errors

pub mod cards;
pub mod core;
pub mod errors;
pub mod game;
pub mod reveal;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, GameConfig, GameMode, GameRng, GameRngState, StudentId, StudentMap, TeamId,
};

pub use crate::cards::{Card, Category, Deck, Trio};

pub use crate::zones::{Hand, LectureHall, Viewer};

pub use crate::reveal::{RevealPhase, RevealSource, RevealState, RevealedCard};

pub use crate::rules::{GameResult, ScoreBoard, ScoreLine, ScoreSnapshot, Team, TurnManager};

pub use crate::game::{
    Game, GameController, GamePhase, InvalidMove, PendingOutcome, RevealRecord, RevealVerdict,
    Student, TurnOutcome,
};

pub use crate::errors::{ConfigError, TradeError};

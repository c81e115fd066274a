//! Core engine types: student ids, per-student storage, RNG, configuration.
//!
//! These are the building blocks shared by every other module. Nothing here
//! knows about hands, the hall or the reveal protocol.

pub mod config;
pub mod rng;
pub mod student;

pub use config::{Difficulty, GameConfig, GameMode};
pub use rng::{GameRng, GameRngState};
pub use student::{StudentId, StudentMap, TeamId};

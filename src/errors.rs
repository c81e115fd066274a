//! Error types for configuration and team trading.
//!
//! Invalid reveal moves are not errors: they come back as
//! `RevealVerdict::Invalid` (see `game::verdict`).

use thiserror::Error;

use crate::core::TeamId;

/// Reasons a configuration is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid player count: {count} (expected {min}..={max})")]
    PlayerCount { count: usize, min: usize, max: usize },
    #[error("Team modes need 4 or 6 students, got {count}")]
    TeamParity { count: usize },
    #[error("Expected {expected} names, got {actual}")]
    NameCount { expected: usize, actual: usize },
    #[error("Name for seat {seat} is blank")]
    BlankName { seat: usize },
}

/// Reasons a post-trio trade is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TradeError {
    #[error("The game has not started")]
    GameNotStarted,
    #[error("Trading is only available in team modes")]
    NotTeamMode,
    #[error("No trade is on offer for {0}")]
    NoOffer(TeamId),
    #[error("Hand position {position} is out of range for a hand of {len}")]
    BadPosition { position: usize, len: usize },
    #[error("Cannot trade while cards are revealed")]
    RevealInProgress,
}

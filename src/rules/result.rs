//! Outcome of a finished match.

use serde::{Deserialize, Serialize};

use crate::core::{StudentId, TeamId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A student (or the team they represent) reached the graduation threshold.
    Graduated {
        student: StudentId,
        team: Option<TeamId>,
    },
    /// No course has three cards left in play; nobody can graduate.
    Stalemate,
}

impl GameResult {
    /// The student reported as winner.
    #[must_use]
    pub fn winner(&self) -> Option<StudentId> {
        match *self {
            GameResult::Graduated { student, .. } => Some(student),
            GameResult::Stalemate => None,
        }
    }
}

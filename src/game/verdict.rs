//! What a reveal did.
//!
//! Every call to `Game::reveal_card` returns exactly one `RevealVerdict`.
//! The caller renders it and, for the two terminal verdicts, invokes the
//! matching follow-up:
//!
//! | Verdict | Follow-up |
//! | --- | --- |
//! | `Revealed` / `AutoReveal` | wait for the next pick |
//! | `TrioComplete` | `complete_revealed_trio` |
//! | `Mismatch` | `handle_mismatch` after the display delay |
//! | `Invalid` | re-prompt; nothing changed |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::StudentId;

/// Why a reveal was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidMove {
    #[error("The game has not started")]
    GameNotStarted,
    #[error("The previous outcome must be resolved first")]
    OutcomePending,
    #[error("It's not {actual}'s turn (expected {expected})")]
    NotYourTurn { expected: StudentId, actual: StudentId },
    #[error("Unknown student: {0}")]
    UnknownStudent(StudentId),
    #[error("Use the own-hand source for your own cards")]
    OwnHandAsOther,
    #[error("Position {position} is out of range ({len} cards)")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("Position {position} cannot be revealed")]
    NotRevealable { position: usize },
    #[error("The card at position {position} is not the card supplied")]
    CardMismatch { position: usize },
    #[error("Position {position} was already revealed this turn")]
    AlreadyRevealed { position: usize },
    #[error("Three cards are already revealed")]
    RevealLimit,
}

/// Outcome of one reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealVerdict {
    /// Card exposed; waiting for the next pick.
    Revealed,
    /// Card exposed together with its twins from the same hand end.
    AutoReveal,
    /// Three matching cards; call `complete_revealed_trio`.
    TrioComplete,
    /// The picks do not all match; call `handle_mismatch`.
    Mismatch,
    /// Refused; no state changed and the turn is not consumed.
    Invalid(InvalidMove),
}

impl RevealVerdict {
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, RevealVerdict::Invalid(_))
    }

    /// Whether the turn is waiting on a follow-up call.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, RevealVerdict::TrioComplete | RevealVerdict::Mismatch)
    }
}

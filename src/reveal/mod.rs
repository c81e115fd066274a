//! Turn reveal state machine.
//!
//! `RevealState` accumulates up to three picks per turn and judges them.
//! It knows nothing about whose turn it is or where cards are stored; the
//! `Game` feeds it picks and reacts to its answers.

pub mod state;

pub use state::{RevealPhase, RevealSource, RevealState, RevealedCard};

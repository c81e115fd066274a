//! Match bookkeeping: turn order, scores, teams and results.
//!
//! These types hold state but make no decisions about the reveal protocol;
//! the `Game` drives them.

pub mod result;
pub mod score;
pub mod team;
pub mod turn;

pub use result::GameResult;
pub use score::{ScoreBoard, ScoreLine, ScoreSnapshot};
pub use team::Team;
pub use turn::TurnManager;

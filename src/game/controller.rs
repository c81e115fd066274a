//! Phase controller wrapped around a `Game`.
//!
//! ```text
//! Setup --start_game--> Playing --trio--> CheckingVictory --winner/stalemate--> GameOver
//!                          ^                     |
//!                          +------ no winner ----+
//! ```
//!
//! The controller decides which calls are legal in which phase and forwards
//! the rest to the game. `reset` returns to `Setup` from anywhere.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cards::{Card, Deck};
use crate::core::{Difficulty, GameConfig, GameMode, StudentId, TeamId};
use crate::errors::TradeError;
use crate::reveal::RevealSource;
use crate::rules::GameResult;

use super::engine::Game;
use super::verdict::{InvalidMove, RevealVerdict};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Setup,
    Playing,
    CheckingVictory,
    GameOver,
}

/// Drives one match at a time through its phases.
#[derive(Clone, Debug, Default)]
pub struct GameController {
    phase: GamePhase,
    game: Option<Game>,
    result: Option<GameResult>,
}

impl GameController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the next match. `names` may be empty for default names.
    ///
    /// Returns `false` (and stays in `Setup`) if the configuration is
    /// rejected or a match is already under way.
    pub fn configure<I, S>(
        &mut self,
        student_count: usize,
        mode: GameMode,
        difficulty: Difficulty,
        names: I,
    ) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = GameConfig::new(student_count)
            .with_mode(mode)
            .with_difficulty(difficulty)
            .with_names(names);
        self.configure_with(config)
    }

    /// Configure from a prepared `GameConfig`, e.g. one carrying a seed.
    pub fn configure_with(&mut self, config: GameConfig) -> bool {
        if self.phase != GamePhase::Setup {
            warn!(phase = ?self.phase, "configure outside setup");
            return false;
        }
        match Game::new(config) {
            Ok(game) => {
                self.game = Some(game);
                true
            }
            Err(error) => {
                warn!(%error, "configuration rejected");
                self.game = None;
                false
            }
        }
    }

    /// Deal and enter `Playing`. Needs a successful `configure` first.
    pub fn start_game(&mut self) -> bool {
        self.start(Game::initialize)
    }

    /// Like `start_game`, dealing from a prepared deck instead of a shuffle.
    pub fn start_game_with_deck(&mut self, deck: Deck) -> bool {
        self.start(|game| game.deal_from(deck))
    }

    fn start(&mut self, deal: impl FnOnce(&mut Game)) -> bool {
        if self.phase != GamePhase::Setup {
            return false;
        }
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        deal(game);
        self.result = None;
        self.phase = GamePhase::Playing;
        true
    }

    pub fn reveal_card(
        &mut self,
        player: StudentId,
        card: &Card,
        source: RevealSource,
        position: usize,
    ) -> RevealVerdict {
        match self.playing_mut() {
            Some(game) => game.reveal_card(player, card, source, position),
            None => RevealVerdict::Invalid(InvalidMove::GameNotStarted),
        }
    }

    /// Bank the pending trio, then check for the end of the game.
    pub fn complete_revealed_trio(&mut self, player: StudentId) -> bool {
        let completed = self
            .playing_mut()
            .is_some_and(|game| game.complete_revealed_trio(player));
        if completed {
            self.evaluate_end();
        }
        completed
    }

    pub fn handle_mismatch(&mut self) -> bool {
        self.playing_mut().is_some_and(Game::handle_mismatch)
    }

    pub fn end_turn(&mut self) -> bool {
        self.playing_mut().is_some_and(Game::end_turn)
    }

    /// Swap a card inside `team`. A trade can break the last possible trio,
    /// so the end of game is checked afterwards.
    pub fn trade_within_team(
        &mut self,
        team: TeamId,
        first_position: usize,
        second_position: usize,
    ) -> Result<(), TradeError> {
        let game = self.playing_mut().ok_or(TradeError::GameNotStarted)?;
        game.trade_within_team(team, first_position, second_position)?;
        self.evaluate_end();
        Ok(())
    }

    pub fn decline_trade(&mut self, team: TeamId) -> Result<(), TradeError> {
        self.playing_mut()
            .ok_or(TradeError::GameNotStarted)?
            .decline_trade(team)
    }

    #[must_use]
    pub fn check_victory_conditions(&self) -> Option<StudentId> {
        self.game.as_ref().and_then(Game::check_victory_conditions)
    }

    fn evaluate_end(&mut self) {
        self.phase = GamePhase::CheckingVictory;
        match self.game.as_ref().and_then(Game::result) {
            Some(result) => {
                match result {
                    GameResult::Graduated { student, team } => {
                        info!(student = %student, ?team, "graduated");
                    }
                    GameResult::Stalemate => info!("stalemate"),
                }
                self.result = Some(result);
                self.phase = GamePhase::GameOver;
            }
            None => self.phase = GamePhase::Playing,
        }
    }

    fn playing_mut(&mut self) -> Option<&mut Game> {
        if self.phase == GamePhase::Playing {
            self.game.as_mut()
        } else {
            None
        }
    }

    /// Drop the match and return to `Setup`.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Setup;
        self.game = None;
        self.result = None;
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }
}

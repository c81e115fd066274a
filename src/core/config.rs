//! Game configuration types and rule constants.
//!
//! Callers describe a match with `GameConfig` before the deck is dealt:
//! - `GameMode`: individual or team play, simple or advanced trio rules
//! - `Difficulty`: how many cards each student is dealt
//! - names and an optional RNG seed
//!
//! `GameConfig::validate` is the single place configuration errors come from.

use serde::{Deserialize, Serialize};

use crate::cards::card::STANDARD_DECK_SIZE;
use crate::errors::ConfigError;

/// Number of cards the lecture hall holds when full.
pub const HALL_CAPACITY: usize = 9;

/// Credits needed to graduate (win).
pub const GRADUATION_CREDITS: u32 = 6;

/// Credits awarded for a final-project trio in every mode.
pub const FINAL_PROJECT_CREDITS: u32 = 6;

/// Credits per trio in simple modes.
pub const SIMPLE_TRIO_CREDITS: u32 = 2;

/// Credits per trio in advanced modes.
pub const ADVANCED_TRIO_CREDITS: u32 = 3;

/// Course code of the final-project card.
pub const FINAL_PROJECT_CODE: &str = "PFE";

/// Maximum picks in one turn.
pub const MAX_REVEALS: usize = 3;

/// Seat limits.
pub const MIN_STUDENTS: usize = 2;
pub const MAX_STUDENTS: usize = 6;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0x5EED_7210;

/// Rule mode of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Trios match on course code; each student plays alone.
    #[default]
    SimpleIndividual,
    /// Trios match on course code; students play in pairs.
    SimpleTeam,
    /// Trios must also share a category; each student plays alone.
    AdvancedIndividual,
    /// Trios must also share a category; students play in pairs.
    AdvancedTeam,
}

impl GameMode {
    /// Whether students are paired into teams.
    #[must_use]
    pub const fn is_team(self) -> bool {
        matches!(self, GameMode::SimpleTeam | GameMode::AdvancedTeam)
    }

    /// Whether trios must also share a category.
    #[must_use]
    pub const fn is_advanced(self) -> bool {
        matches!(self, GameMode::AdvancedIndividual | GameMode::AdvancedTeam)
    }

    /// Credits for an ordinary (non final-project) trio.
    #[must_use]
    pub const fn trio_credits(self) -> u32 {
        if self.is_advanced() {
            ADVANCED_TRIO_CREDITS
        } else {
            SIMPLE_TRIO_CREDITS
        }
    }
}

/// Controls hand size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// One card fewer per hand.
    Easy,
    #[default]
    Normal,
    /// One card more per hand, as far as the deck allows.
    Hard,
}

/// Complete match configuration.
///
/// ```
/// use rust_trio::core::{Difficulty, GameConfig, GameMode};
///
/// let config = GameConfig::new(4)
///     .with_mode(GameMode::SimpleTeam)
///     .with_difficulty(Difficulty::Hard)
///     .with_seed(99);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.hand_size(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of students (seats).
    pub student_count: usize,

    /// Rule mode.
    pub mode: GameMode,

    /// Hand size modifier.
    pub difficulty: Difficulty,

    /// Display names in seat order. Empty means default names.
    pub names: Vec<String>,

    /// Shuffle seed.
    pub seed: u64,
}

impl GameConfig {
    /// Create a configuration with default mode, difficulty and seed.
    ///
    /// Unlike most constructors in the crate this does not assert: the count is
    /// checked by `validate` so callers can report the failure.
    #[must_use]
    pub fn new(student_count: usize) -> Self {
        Self {
            student_count,
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            names: Vec::new(),
            seed: DEFAULT_SEED,
        }
    }

    /// Set the rule mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set display names in seat order.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::PlayerCount`] if the count is outside 2..=6
    /// - [`ConfigError::TeamParity`] if a team mode does not have 4 or 6 students
    /// - [`ConfigError::NameCount`] if names were given but not one per student
    /// - [`ConfigError::BlankName`] if a given name is empty or whitespace
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_STUDENTS..=MAX_STUDENTS).contains(&self.student_count) {
            return Err(ConfigError::PlayerCount {
                count: self.student_count,
                min: MIN_STUDENTS,
                max: MAX_STUDENTS,
            });
        }

        if self.mode.is_team() && !matches!(self.student_count, 4 | 6) {
            return Err(ConfigError::TeamParity {
                count: self.student_count,
            });
        }

        if !self.names.is_empty() {
            if self.names.len() != self.student_count {
                return Err(ConfigError::NameCount {
                    expected: self.student_count,
                    actual: self.names.len(),
                });
            }
            if let Some(seat) = self.names.iter().position(|n| n.trim().is_empty()) {
                return Err(ConfigError::BlankName { seat });
            }
        }

        Ok(())
    }

    /// Names in seat order, filling in `Student N` where none were given.
    #[must_use]
    pub fn student_names(&self) -> Vec<String> {
        if self.names.len() == self.student_count {
            self.names.iter().map(|n| n.trim().to_string()).collect()
        } else {
            (1..=self.student_count)
                .map(|i| format!("Student {}", i))
                .collect()
        }
    }

    /// Cards dealt to each student.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        let base: usize = match self.student_count {
            0..=2 => 7,
            3 | 4 => 5,
            _ => 4,
        };

        match self.difficulty {
            Difficulty::Easy => base.saturating_sub(1).max(3),
            Difficulty::Normal => base,
            Difficulty::Hard => {
                let seats = self.student_count.max(1);
                (base + 1).min((STANDARD_DECK_SIZE - HALL_CAPACITY) / seats)
            }
        }
    }

    /// Number of teams (0 in individual modes).
    #[must_use]
    pub fn team_count(&self) -> usize {
        if self.mode.is_team() {
            self.student_count / 2
        } else {
            0
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(3)
    }
}

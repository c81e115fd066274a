//! Teams of two.
//!
//! A team lists its members by id; each `Student` keeps the matching
//! `TeamId` as a back-reference. Neither side owns the other.

use serde::{Deserialize, Serialize};

use crate::core::{StudentId, TeamId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    members: [StudentId; 2],
    credits: u32,
}

impl Team {
    #[must_use]
    pub fn new(id: TeamId, members: [StudentId; 2]) -> Self {
        Self {
            id,
            members,
            credits: 0,
        }
    }

    /// Form `team_count` teams, pairing seat `i` with seat `i + team_count`.
    ///
    /// ```
    /// use rust_trio::core::{StudentId, TeamId};
    /// use rust_trio::rules::Team;
    ///
    /// let teams = Team::pair_seats(2);
    /// assert_eq!(teams[0].members(), &[StudentId::new(0), StudentId::new(2)]);
    /// assert_eq!(teams[1].id(), TeamId::new(1));
    /// ```
    #[must_use]
    pub fn pair_seats(team_count: usize) -> Vec<Team> {
        (0..team_count)
            .map(|i| {
                Team::new(
                    TeamId::new(i as u8),
                    [StudentId::new(i as u8), StudentId::new((i + team_count) as u8)],
                )
            })
            .collect()
    }

    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    #[must_use]
    pub fn members(&self) -> &[StudentId; 2] {
        &self.members
    }

    #[must_use]
    pub fn has_member(&self, student: StudentId) -> bool {
        self.members.contains(&student)
    }

    /// Credits contributed by both members.
    #[must_use]
    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn add_credits(&mut self, credits: u32) {
        self.credits += credits;
    }

    pub(crate) fn reset_credits(&mut self) {
        self.credits = 0;
    }
}

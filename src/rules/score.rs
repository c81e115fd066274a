//! Score reporting.
//!
//! The `ScoreBoard` mirrors credit totals and trio counts for display. It is
//! not the authority on credits: the game updates `Student` and `Team`
//! totals directly and records the same award here.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{StudentId, TeamId};

/// Credits and completed trios for one student or team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreLine {
    pub credits: u32,
    pub trios: u32,
}

impl ScoreLine {
    fn record(&mut self, credits: u32) {
        self.credits += credits;
        self.trios += 1;
    }
}

/// Point-in-time standings, ordered by credits (highest first), then id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub students: Vec<(StudentId, ScoreLine)>,
    pub teams: Vec<(TeamId, ScoreLine)>,
}

#[derive(Clone, Debug, Default)]
pub struct ScoreBoard {
    students: FxHashMap<StudentId, ScoreLine>,
    teams: FxHashMap<TeamId, ScoreLine>,
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a zeroed line for a student.
    pub fn register_student(&mut self, student: StudentId) {
        self.students.entry(student).or_default();
    }

    /// Add a zeroed line for a team.
    pub fn register_team(&mut self, team: TeamId) {
        self.teams.entry(team).or_default();
    }

    /// Record a completed trio for `student` and, in team modes, its team.
    pub fn record_trio(&mut self, student: StudentId, team: Option<TeamId>, credits: u32) {
        self.students.entry(student).or_default().record(credits);
        if let Some(team) = team {
            self.teams.entry(team).or_default().record(credits);
        }
    }

    #[must_use]
    pub fn student(&self, student: StudentId) -> ScoreLine {
        self.students.get(&student).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn team(&self, team: TeamId) -> ScoreLine {
        self.teams.get(&team).copied().unwrap_or_default()
    }

    /// Total trios completed by everyone.
    #[must_use]
    pub fn total_trios(&self) -> u32 {
        self.students.values().map(|l| l.trios).sum()
    }

    #[must_use]
    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            students: ranked(&self.students),
            teams: ranked(&self.teams),
        }
    }

    /// Zero every registered line.
    pub fn reset(&mut self) {
        self.students.values_mut().for_each(|l| *l = ScoreLine::default());
        self.teams.values_mut().for_each(|l| *l = ScoreLine::default());
    }
}

fn ranked<K: Copy + Ord>(lines: &FxHashMap<K, ScoreLine>) -> Vec<(K, ScoreLine)> {
    let mut out: Vec<_> = lines.iter().map(|(&k, &l)| (k, l)).collect();
    out.sort_by(|a, b| b.1.credits.cmp(&a.1.credits).then(a.0.cmp(&b.0)));
    out
}

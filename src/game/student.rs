//! A seated student: hand, credits and completed trios.

use serde::{Deserialize, Serialize};

use crate::cards::Trio;
use crate::core::{StudentId, TeamId};
use crate::zones::Hand;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
    hand: Hand,
    credits: u32,
    trios: Vec<Trio>,
    /// Back-reference only; the team lists its members.
    team: Option<TeamId>,
}

impl Student {
    #[must_use]
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            credits: 0,
            trios: Vec::new(),
            team: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    #[must_use]
    pub fn credits(&self) -> u32 {
        self.credits
    }

    #[must_use]
    pub fn trios(&self) -> &[Trio] {
        &self.trios
    }

    #[must_use]
    pub fn team(&self) -> Option<TeamId> {
        self.team
    }

    pub(crate) fn set_team(&mut self, team: TeamId) {
        self.team = Some(team);
    }

    pub(crate) fn record_trio(&mut self, trio: Trio, credits: u32) {
        self.credits += credits;
        self.trios.push(trio);
    }

    /// Empty hand, zero credits, no trios. The team link is kept.
    pub(crate) fn reset(&mut self) {
        self.hand = Hand::new();
        self.credits = 0;
        self.trios.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_record_trio() {
        let mut student = Student::new(StudentId::new(0), "Ana");
        let card = Card::from_catalog("IF2").unwrap();

        student.record_trio(Trio::new([card.clone(), card.clone(), card]), 2);

        assert_eq!(student.credits(), 2);
        assert_eq!(student.trios().len(), 1);
        assert_eq!(student.name(), "Ana");
    }

    #[test]
    fn test_reset_keeps_team() {
        let mut student = Student::new(StudentId::new(1), "Ben");
        student.set_team(TeamId::new(1));
        student.hand_mut().add_card(Card::from_catalog("LO21").unwrap());
        student.credits = 4;

        student.reset();

        assert!(student.hand().is_empty());
        assert_eq!(student.credits(), 0);
        assert_eq!(student.team(), Some(TeamId::new(1)));
    }
}

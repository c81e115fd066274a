//! Game orchestration.
//!
//! `Game` owns every piece of mutable match state (deck, hall, students,
//! teams, turn order, reveal state, scores) and exposes the reveal protocol
//! as explicit calls. Nothing is global and nothing runs in the background:
//! the caller drives every transition.
//!
//! ## Turn flow
//!
//! ```text
//! reveal_card -> Revealed | AutoReveal -> reveal_card ...
//!             -> TrioComplete          -> complete_revealed_trio (same student again)
//!             -> Mismatch              -> handle_mismatch        (next student)
//!             -> Invalid               -> nothing changed
//! ```
//!
//! `end_turn` closes a turn early, exactly like a resolved mismatch.
//!
//! ## Example
//!
//! ```
//! use rust_trio::core::GameConfig;
//! use rust_trio::game::Game;
//!
//! let mut game = Game::new(GameConfig::new(3).with_seed(7)).unwrap();
//! game.initialize();
//!
//! assert_eq!(game.hall().len(), 9);
//! assert_eq!(game.deck_remaining(), 12);
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{Card, Deck};
use crate::core::config::{GameConfig, GRADUATION_CREDITS, HALL_CAPACITY, MAX_REVEALS};
use crate::core::{GameRng, GameRngState, StudentId, StudentMap, TeamId};
use crate::errors::{ConfigError, TradeError};
use crate::reveal::{RevealSource, RevealState, RevealedCard};
use crate::rules::{GameResult, ScoreBoard, ScoreSnapshot, Team, TurnManager};
use crate::zones::{is_revealable, revealable_positions, twin_positions, Hand, LectureHall, Viewer};

use super::student::Student;
use super::verdict::{InvalidMove, RevealVerdict};

/// Terminal verdict waiting for its follow-up call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingOutcome {
    Trio,
    Mismatch,
}

/// How a turn's picks were resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    Trio { code: String, credits: u32 },
    Mismatch,
    /// Closed with `end_turn` before any verdict was reached.
    EndedTurn,
}

/// A resolved set of picks. Every student may consult these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealRecord {
    pub round: u32,
    pub student: StudentId,
    pub picks: Vec<RevealedCard>,
    pub outcome: TurnOutcome,
}

/// A match in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    hall: LectureHall,
    students: StudentMap<Student>,
    teams: Vec<Team>,
    turns: TurnManager,
    reveal: RevealState,
    scores: ScoreBoard,
    pending: Option<PendingOutcome>,
    trade_offers: Vec<TeamId>,
    history: Vector<RevealRecord>,
    started: bool,
}

impl Game {
    /// Seat the students and form teams. No cards are dealt until
    /// `initialize`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let names = config.student_names();
        let mut students = StudentMap::new(config.student_count, |id| {
            let name = names.get(id.index()).cloned().unwrap_or_else(|| id.to_string());
            Student::new(id, name)
        });

        let teams = Team::pair_seats(config.team_count());
        for team in &teams {
            for &member in team.members() {
                if let Some(student) = students.get_mut(member) {
                    student.set_team(team.id());
                }
            }
        }

        let mut scores = ScoreBoard::new();
        for id in students.ids() {
            scores.register_student(id);
        }
        for team in &teams {
            scores.register_team(team.id());
        }

        Ok(Self {
            rng: GameRng::new(config.seed),
            deck: Deck::default(),
            hall: LectureHall::new(),
            students,
            teams,
            turns: TurnManager::new(StudentId::all(config.student_count).collect()),
            reveal: RevealState::new(),
            scores,
            pending: None,
            trade_offers: Vec::new(),
            history: Vector::new(),
            started: false,
            config,
        })
    }

    /// Shuffle a fresh deck with the configured seed and deal.
    pub fn initialize(&mut self) {
        self.rng = GameRng::new(self.config.seed);
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_from(deck);
    }

    /// Start (or restart) the match dealing from `deck` as given.
    ///
    /// Students receive consecutive blocks of `hand_size` cards in seat
    /// order, then the hall is filled. Whatever is left stays in the deck.
    pub fn deal_from(&mut self, mut deck: Deck) {
        for (_, student) in self.students.iter_mut() {
            student.reset();
        }
        for team in &mut self.teams {
            team.reset_credits();
        }
        self.scores.reset();

        let hand_size = self.config.hand_size();
        for (_, student) in self.students.iter_mut() {
            for card in deck.draw_n(hand_size) {
                student.hand_mut().add_card(card);
            }
        }

        self.hall = LectureHall::new();
        self.hall.refill(&mut deck);
        self.deck = deck;

        self.turns.reset();
        self.reveal.clear();
        self.pending = None;
        self.trade_offers.clear();
        self.history = Vector::new();
        self.started = true;

        info!(
            students = self.config.student_count,
            mode = ?self.config.mode,
            difficulty = ?self.config.difficulty,
            seed = self.config.seed,
            hand_size,
            hall = self.hall.len(),
            deck = self.deck.remaining(),
            "game started"
        );
    }

    // === Reveal protocol ===

    /// Expose one card for `player`.
    ///
    /// `card` must be the card actually found at `position`; a stale view is
    /// refused with `InvalidMove::CardMismatch`. Any `Invalid` verdict leaves
    /// the game untouched.
    pub fn reveal_card(
        &mut self,
        player: StudentId,
        card: &Card,
        source: RevealSource,
        position: usize,
    ) -> RevealVerdict {
        match self.try_reveal(player, card, source, position) {
            Ok(verdict) => {
                debug!(student = %player, ?source, position, ?verdict, "reveal");
                verdict
            }
            Err(reason) => {
                debug!(student = %player, ?source, position, %reason, "reveal refused");
                RevealVerdict::Invalid(reason)
            }
        }
    }

    fn try_reveal(
        &mut self,
        player: StudentId,
        card: &Card,
        source: RevealSource,
        position: usize,
    ) -> Result<RevealVerdict, InvalidMove> {
        if !self.started {
            return Err(InvalidMove::GameNotStarted);
        }
        if self.pending.is_some() {
            return Err(InvalidMove::OutcomePending);
        }
        let expected = self.turns.current_player();
        if player != expected {
            return Err(InvalidMove::NotYourTurn {
                expected,
                actual: player,
            });
        }

        let (cards, viewer) = self.source_cards(player, source)?;
        let Some(actual) = cards.get(position) else {
            return Err(InvalidMove::PositionOutOfRange {
                position,
                len: cards.len(),
            });
        };
        if let Some(viewer) = viewer {
            if !is_revealable(cards, position, viewer) {
                return Err(InvalidMove::NotRevealable { position });
            }
        }
        if actual != card {
            return Err(InvalidMove::CardMismatch { position });
        }
        if self.reveal.contains(source, position) {
            return Err(InvalidMove::AlreadyRevealed { position });
        }
        if self.reveal.is_full() {
            return Err(InvalidMove::RevealLimit);
        }

        let picked = actual.clone();
        let twins: Vec<(usize, Card)> = match viewer {
            Some(Viewer::Owner) => twin_positions(cards, position, Viewer::Owner)
                .into_iter()
                .filter_map(|p| cards.get(p).map(|c| (p, c.clone())))
                .collect(),
            _ => Vec::new(),
        };

        if !self.reveal.add_reveal(picked, source, position) {
            return Err(InvalidMove::RevealLimit);
        }

        let mut auto = false;
        for (twin, twin_card) in twins {
            if self.reveal.is_full() {
                break;
            }
            if self.reveal.add_reveal(twin_card, source, twin) {
                debug!(student = %player, position = twin, "auto-reveal");
                auto = true;
            }
        }

        Ok(self.judge_picks(auto))
    }

    /// Cards behind `source` and the viewer they are seen as. `None` means
    /// every position is open (the hall).
    fn source_cards(
        &self,
        player: StudentId,
        source: RevealSource,
    ) -> Result<(&[Card], Option<Viewer>), InvalidMove> {
        match source {
            RevealSource::OwnHand => self
                .students
                .get(player)
                .map(|s| (s.hand().cards(), Some(Viewer::Owner)))
                .ok_or(InvalidMove::UnknownStudent(player)),
            RevealSource::OtherHand(other) => {
                if other == player {
                    return Err(InvalidMove::OwnHandAsOther);
                }
                self.students
                    .get(other)
                    .map(|s| (s.hand().cards(), Some(Viewer::Other)))
                    .ok_or(InvalidMove::UnknownStudent(other))
            }
            RevealSource::Hall => Ok((self.hall.cards(), None)),
        }
    }

    fn judge_picks(&mut self, auto: bool) -> RevealVerdict {
        if self.reveal.len() == MAX_REVEALS {
            let valid = self
                .reveal
                .trio()
                .is_some_and(|trio| trio.is_valid(self.config.mode));
            if valid {
                self.pending = Some(PendingOutcome::Trio);
                RevealVerdict::TrioComplete
            } else {
                self.pending = Some(PendingOutcome::Mismatch);
                RevealVerdict::Mismatch
            }
        } else if !self.reveal.all_match() {
            self.pending = Some(PendingOutcome::Mismatch);
            RevealVerdict::Mismatch
        } else if auto {
            RevealVerdict::AutoReveal
        } else {
            RevealVerdict::Revealed
        }
    }

    /// Bank the pending trio for `player`.
    ///
    /// Awards credits, removes the three cards, refills the hall and opens
    /// trade offers for the other teams. The turn does not advance.
    /// Returns `false` if there is no pending trio for `player`.
    pub fn complete_revealed_trio(&mut self, player: StudentId) -> bool {
        if self.pending != Some(PendingOutcome::Trio) || player != self.turns.current_player() {
            return false;
        }
        let Some(trio) = self.reveal.trio() else {
            return false;
        };
        let credits = trio.credits(self.config.mode);
        if credits == 0 {
            return false;
        }

        let picks = self.reveal.revealed().to_vec();
        self.remove_picked(player, &picks);

        let missing = HALL_CAPACITY.saturating_sub(self.hall.len());
        let drawn = self.hall.refill(&mut self.deck);
        if drawn < missing {
            debug!(drawn, missing, "deck exhausted during refill");
        } else {
            debug!(drawn, "hall refilled");
        }

        let team = self.students.get(player).and_then(Student::team);
        let code = trio.code().to_string();
        let mut total = 0;
        if let Some(student) = self.students.get_mut(player) {
            student.record_trio(trio, credits);
            total = student.credits();
        }
        if let Some(team_id) = team {
            if let Some(t) = self.teams.get_mut(team_id.index()) {
                t.add_credits(credits);
            }
        }
        self.scores.record_trio(player, team, credits);

        self.trade_offers = self
            .teams
            .iter()
            .filter(|t| !t.has_member(player))
            .map(Team::id)
            .collect();

        self.history.push_back(RevealRecord {
            round: self.turns.round(),
            student: player,
            picks,
            outcome: TurnOutcome::Trio {
                code: code.clone(),
                credits,
            },
        });
        self.reveal.clear();
        self.pending = None;

        info!(student = %player, code = %code, credits, total, "trio completed");
        true
    }

    /// Take the picked cards out of their containers.
    ///
    /// Highest positions go first so the lower ones stay valid.
    fn remove_picked(&mut self, player: StudentId, picks: &[RevealedCard]) {
        let mut targets: Vec<(RevealSource, usize)> =
            picks.iter().map(|p| (p.source, p.position)).collect();
        targets.sort_by(|a, b| b.1.cmp(&a.1));

        for (source, position) in targets {
            let removed = match source {
                RevealSource::Hall => self.hall.remove(position),
                hand => {
                    let owner = hand.source_student().unwrap_or(player);
                    self.hand_mut(owner).and_then(|h| h.remove(position))
                }
            };
            debug_assert!(removed.is_some(), "picked card vanished from {source:?}");
        }
    }

    /// Resolve a pending mismatch: record it, clear the picks and pass the
    /// turn. Returns `false` when no mismatch is pending.
    pub fn handle_mismatch(&mut self) -> bool {
        if self.pending != Some(PendingOutcome::Mismatch) {
            return false;
        }
        self.close_turn(TurnOutcome::Mismatch);
        true
    }

    /// Give up the rest of the turn.
    ///
    /// Refused while a trio is waiting to be banked.
    pub fn end_turn(&mut self) -> bool {
        if !self.started || self.pending == Some(PendingOutcome::Trio) {
            return false;
        }
        let outcome = if self.pending == Some(PendingOutcome::Mismatch) {
            TurnOutcome::Mismatch
        } else {
            TurnOutcome::EndedTurn
        };
        self.close_turn(outcome);
        true
    }

    fn close_turn(&mut self, outcome: TurnOutcome) {
        let student = self.turns.current_player();
        if !self.reveal.is_empty() {
            self.history.push_back(RevealRecord {
                round: self.turns.round(),
                student,
                picks: self.reveal.revealed().to_vec(),
                outcome: outcome.clone(),
            });
        }
        self.reveal.clear();
        self.pending = None;
        let next = self.turns.next_turn();
        debug!(student = %student, next = %next, round = self.turns.round(), ?outcome, "turn over");
    }

    // === Victory ===

    /// The graduating student, if any.
    ///
    /// Team modes look at team totals and report the team's first member.
    /// Otherwise the first student in seat order at the threshold wins.
    #[must_use]
    pub fn check_victory_conditions(&self) -> Option<StudentId> {
        if !self.started {
            return None;
        }
        if self.config.mode.is_team() {
            self.teams
                .iter()
                .find(|t| t.credits() >= GRADUATION_CREDITS)
                .map(|t| t.members()[0])
        } else {
            self.students
                .iter()
                .find(|(_, s)| s.credits() >= GRADUATION_CREDITS)
                .map(|(id, _)| id)
        }
    }

    /// No course has three cards left across the hands and the hall.
    ///
    /// The deck is only reached through the hall refill, which needs a trio,
    /// so it does not count.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        if !self.started {
            return false;
        }
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        let in_hands = self.students.iter().flat_map(|(_, s)| s.hand().cards());
        for card in in_hands.chain(self.hall.cards()) {
            *counts.entry(card.code()).or_default() += 1;
        }
        !counts.values().any(|&n| n >= MAX_REVEALS)
    }

    /// Graduation first, then stalemate. `None` while play continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if let Some(student) = self.check_victory_conditions() {
            let team = self.students.get(student).and_then(Student::team);
            return Some(GameResult::Graduated { student, team });
        }
        self.is_stalemate().then_some(GameResult::Stalemate)
    }

    // === Team trading ===

    /// Teams currently allowed one swap.
    #[must_use]
    pub fn trade_offers(&self) -> &[TeamId] {
        &self.trade_offers
    }

    /// Swap one card between the two members of `team`.
    ///
    /// `first_position` indexes the first member's hand and `second_position`
    /// the second's. Both hands re-sort. The offer is consumed.
    pub fn trade_within_team(
        &mut self,
        team: TeamId,
        first_position: usize,
        second_position: usize,
    ) -> Result<(), TradeError> {
        self.check_trade(team)?;
        let [first, second] = *self
            .team(team)
            .ok_or(TradeError::NoOffer(team))?
            .members();

        for (member, position) in [(first, first_position), (second, second_position)] {
            let len = self.hand(member).map_or(0, Hand::len);
            if position >= len {
                return Err(TradeError::BadPosition { position, len });
            }
        }

        let given = self.hand_mut(first).and_then(|h| h.remove(first_position));
        let received = self.hand_mut(second).and_then(|h| h.remove(second_position));
        if let (Some(given), Some(received)) = (given, received) {
            info!(team = %team, given = %given, received = %received, "cards traded");
            if let Some(hand) = self.hand_mut(first) {
                hand.add_card(received);
            }
            if let Some(hand) = self.hand_mut(second) {
                hand.add_card(given);
            }
        }

        self.trade_offers.retain(|&t| t != team);
        Ok(())
    }

    /// Pass on the offered swap.
    pub fn decline_trade(&mut self, team: TeamId) -> Result<(), TradeError> {
        self.check_trade(team)?;
        self.trade_offers.retain(|&t| t != team);
        debug!(team = %team, "trade declined");
        Ok(())
    }

    fn check_trade(&self, team: TeamId) -> Result<(), TradeError> {
        if !self.started {
            return Err(TradeError::GameNotStarted);
        }
        if !self.config.mode.is_team() {
            return Err(TradeError::NotTeamMode);
        }
        if !self.reveal.is_empty() {
            return Err(TradeError::RevealInProgress);
        }
        if !self.trade_offers.contains(&team) {
            return Err(TradeError::NoOffer(team));
        }
        Ok(())
    }

    fn hand_mut(&mut self, student: StudentId) -> Option<&mut Hand> {
        self.students.get_mut(student).map(Student::hand_mut)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn student(&self, student: StudentId) -> Option<&Student> {
        self.students.get(student)
    }

    #[must_use]
    pub fn students(&self) -> &StudentMap<Student> {
        &self.students
    }

    #[must_use]
    pub fn team(&self, team: TeamId) -> Option<&Team> {
        self.teams.get(team.index())
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[must_use]
    pub fn hand(&self, student: StudentId) -> Option<&Hand> {
        self.students.get(student).map(Student::hand)
    }

    /// Positions of `owner`'s hand that `viewer` may reveal.
    #[must_use]
    pub fn revealable_positions(&self, viewer: StudentId, owner: StudentId) -> Vec<usize> {
        let as_viewer = if viewer == owner {
            Viewer::Owner
        } else {
            Viewer::Other
        };
        self.hand(owner)
            .map(|h| revealable_positions(h.cards(), as_viewer))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn hall(&self) -> &LectureHall {
        &self.hall
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    #[must_use]
    pub fn scoreboard(&self) -> &ScoreBoard {
        &self.scores
    }

    #[must_use]
    pub fn score_snapshot(&self) -> ScoreSnapshot {
        self.scores.snapshot()
    }

    #[must_use]
    pub fn turn_manager(&self) -> &TurnManager {
        &self.turns
    }

    #[must_use]
    pub fn current_player(&self) -> StudentId {
        self.turns.current_player()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.turns.round()
    }

    #[must_use]
    pub fn reveal_state(&self) -> &RevealState {
        &self.reveal
    }

    #[must_use]
    pub fn pending_outcome(&self) -> Option<PendingOutcome> {
        self.pending
    }

    /// Resolved turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RevealRecord> {
        &self.history
    }

    /// Current RNG position, for replaying a deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

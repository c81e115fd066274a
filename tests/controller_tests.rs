//! Controller phases: Setup -> Playing -> CheckingVictory -> GameOver.

mod common;

use common::{deck_of, init_logging};
use rust_trio::core::{Difficulty, GameConfig, GameMode, StudentId, TeamId};
use rust_trio::game::{GameController, GamePhase, InvalidMove, RevealVerdict};
use rust_trio::reveal::RevealSource;
use rust_trio::rules::GameResult;

const S0: StudentId = StudentId::new(0);

fn reveal_hall(controller: &mut GameController, position: usize) -> RevealVerdict {
    let game = controller.game().unwrap();
    let player = game.current_player();
    let card = game.hall().get(position).cloned().unwrap();
    controller.reveal_card(player, &card, RevealSource::Hall, position)
}

/// Rejected configurations keep the controller in setup.
#[test]
fn test_configure_validation() {
    init_logging();
    let mut controller = GameController::new();
    let none: [&str; 0] = [];

    assert!(!controller.configure(7, GameMode::SimpleIndividual, Difficulty::Normal, none));
    assert!(!controller.configure(5, GameMode::AdvancedTeam, Difficulty::Normal, none));
    assert!(!controller.configure(3, GameMode::SimpleIndividual, Difficulty::Normal, ["A", "B"]));
    assert!(!controller.configure(2, GameMode::SimpleIndividual, Difficulty::Normal, ["A", " "]));
    assert_eq!(controller.phase(), GamePhase::Setup);
    assert!(!controller.start_game());

    assert!(controller.configure(6, GameMode::SimpleTeam, Difficulty::Hard, none));
    assert!(controller.start_game());
    let game = controller.game().unwrap();
    assert_eq!(game.teams().len(), 3);
    assert_eq!(game.student(S0).unwrap().name(), "Student 1");
}

/// A mismatch keeps the game in play and moves the turn on.
#[test]
fn test_mismatch_stays_playing() {
    init_logging();
    let mut controller = GameController::new();
    assert!(controller.configure_with(GameConfig::new(3).with_seed(11)));
    assert!(controller.start_game());

    let game = controller.game().unwrap();
    let hall = game.hall().cards();
    let (a, b) = (0..hall.len())
        .flat_map(|i| (i + 1..hall.len()).map(move |j| (i, j)))
        .find(|&(i, j)| !hall[i].matches(&hall[j]))
        .unwrap();

    assert_eq!(reveal_hall(&mut controller, a), RevealVerdict::Revealed);
    assert_eq!(reveal_hall(&mut controller, b), RevealVerdict::Mismatch);
    assert!(controller.handle_mismatch());

    assert_eq!(controller.phase(), GamePhase::Playing);
    assert_eq!(controller.game().unwrap().current_player(), StudentId::new(1));
}

/// The winning trio ends the game with the team's first member reported.
#[test]
fn test_team_victory_ends_game() {
    init_logging();
    let mut codes = vec![
        "MT11", "PS11", "SY15", "IF2", "LO21", //
        "AP4A", "LE03", "LC00", "GE21", "MG01", //
        "RE01", "MT11", "PS11", "SY15", "IF2", //
        "LO21", "AP4A", "LE03", "LC00", "GE21",
    ];
    codes.extend(["MG01", "MG01", "MG01", "RE01", "RE01", "RE01", "PFE", "PFE", "GE21"]);
    codes.extend(["SY15", "LO21", "AP4A", "LE03", "LC00", "MT11", "PFE"]);

    let mut controller = GameController::new();
    assert!(controller.configure(4, GameMode::AdvancedTeam, Difficulty::Normal, ["Ana", "Ben", "Cy", "Di"]));
    assert!(controller.start_game_with_deck(deck_of(&codes)));

    reveal_hall(&mut controller, 0);
    reveal_hall(&mut controller, 1);
    assert_eq!(reveal_hall(&mut controller, 2), RevealVerdict::TrioComplete);
    assert!(controller.complete_revealed_trio(S0));
    assert_eq!(controller.phase(), GamePhase::Playing);
    assert_eq!(controller.decline_trade(TeamId::new(1)), Ok(()));

    // Bonus turn: the RE01 trio has shifted to the front of the hall.
    reveal_hall(&mut controller, 0);
    reveal_hall(&mut controller, 1);
    assert_eq!(reveal_hall(&mut controller, 2), RevealVerdict::TrioComplete);
    assert!(controller.complete_revealed_trio(S0));

    assert_eq!(controller.phase(), GamePhase::GameOver);
    assert_eq!(
        controller.result(),
        Some(GameResult::Graduated {
            student: S0,
            team: Some(TeamId::new(0))
        })
    );
    assert_eq!(controller.check_victory_conditions(), Some(S0));

    // Nothing more is accepted.
    assert_eq!(
        reveal_hall(&mut controller, 0),
        RevealVerdict::Invalid(InvalidMove::GameNotStarted)
    );
    assert!(!controller.end_turn());
}

/// A trio that leaves no course with three cards ends in stalemate.
#[test]
fn test_stalemate_ends_game() {
    init_logging();
    let codes = [
        "MT11", "PS11", "IF2", "LO21", "AP4A", "LE03", "LC00", //
        "GE21", "MG01", "RE01", "PFE", "MT11", "PS11", "IF2", //
        "SY15", "SY15", "SY15", "LO21", "AP4A", "LE03", "LC00", "GE21", "MG01",
    ];
    let mut controller = GameController::new();
    assert!(controller.configure(2, GameMode::SimpleIndividual, Difficulty::Normal, ["Ana", "Ben"]));
    assert!(controller.start_game_with_deck(deck_of(&codes)));
    assert!(!controller.game().unwrap().is_stalemate());

    reveal_hall(&mut controller, 0);
    reveal_hall(&mut controller, 1);
    reveal_hall(&mut controller, 2);
    assert!(controller.complete_revealed_trio(S0));

    assert_eq!(controller.phase(), GamePhase::GameOver);
    assert_eq!(controller.result(), Some(GameResult::Stalemate));
    assert_eq!(controller.game().unwrap().hall().len(), 6);
}

/// Reset drops the match so a new one can be configured.
#[test]
fn test_reset_allows_new_match() {
    init_logging();
    let mut controller = GameController::new();
    assert!(controller.configure_with(GameConfig::new(2)));
    assert!(controller.start_game());
    assert!(!controller.configure_with(GameConfig::new(3)));

    controller.reset();
    assert_eq!(controller.phase(), GamePhase::Setup);
    assert!(controller.configure_with(GameConfig::new(3)));
    assert!(controller.start_game());
    assert_eq!(controller.game().unwrap().students().len(), 3);
}

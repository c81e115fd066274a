//! Property tests for hand ordering, visibility and reveal bookkeeping.

use proptest::prelude::*;

use rust_trio::cards::{Card, CATALOG};
use rust_trio::core::{GameConfig, GameMode, StudentId};
use rust_trio::game::Game;
use rust_trio::reveal::{RevealSource, RevealState};
use rust_trio::zones::{revealable_positions, twin_positions, Hand, Viewer};

fn any_card() -> impl Strategy<Value = Card> {
    (0..CATALOG.len()).prop_map(|i| {
        let (code, category, rank) = CATALOG[i];
        Card::new(code, category, rank)
    })
}

fn any_hand() -> impl Strategy<Value = Hand> {
    prop::collection::vec(any_card(), 1..12).prop_map(Hand::from_cards)
}

proptest! {
    /// Property: every insertion keeps the hand sorted by rank, highest first.
    #[test]
    fn prop_add_card_keeps_order(cards in prop::collection::vec(any_card(), 0..20)) {
        let mut hand = Hand::new();
        for card in cards {
            hand.add_card(card);
            prop_assert!(hand.is_sorted());
        }
    }

    /// Property: both ends are always revealable; anything else only when it
    /// belongs to an equal-rank run touching an end.
    #[test]
    fn prop_revealable_shape(hand in any_hand()) {
        let cards = hand.cards();
        let last = cards.len() - 1;
        let owner = revealable_positions(cards, Viewer::Owner);

        prop_assert!(owner.contains(&0));
        prop_assert!(owner.contains(&last));
        for &p in &owner {
            let head_run = cards[..=p].iter().all(|c| c.rank() == cards[0].rank());
            let tail_run = cards[p..].iter().all(|c| c.rank() == cards[last].rank());
            prop_assert!(head_run || tail_run, "position {} is hidden", p);
        }

        let other = revealable_positions(cards, Viewer::Other);
        let expected: Vec<usize> = if last == 0 { vec![0] } else { vec![0, last] };
        prop_assert_eq!(other, expected);
    }

    /// Property: auto-revealed twins are revealable and share the course.
    #[test]
    fn prop_twins_are_revealable(hand in any_hand(), pick in 0usize..12) {
        let cards = hand.cards();
        let pick = pick % cards.len();
        let owner = revealable_positions(cards, Viewer::Owner);

        for twin in twin_positions(cards, pick, Viewer::Owner) {
            prop_assert!(owner.contains(&twin));
            prop_assert_ne!(twin, pick);
            prop_assert!(cards[twin].matches(&cards[pick]));
        }
        prop_assert!(twin_positions(cards, pick, Viewer::Other).is_empty());
    }

    /// Property: a repeated position is refused and the count stays put.
    #[test]
    fn prop_duplicate_reveal_rejected(card in any_card(), position in 0usize..9) {
        let mut state = RevealState::new();
        prop_assert!(state.add_reveal(card.clone(), RevealSource::Hall, position));
        prop_assert!(!state.add_reveal(card, RevealSource::Hall, position));
        prop_assert_eq!(state.len(), 1);
    }

    /// Property: matching picks never flag a mismatch and three make a trio.
    #[test]
    fn prop_matching_picks_form_trio(card in any_card()) {
        let mut state = RevealState::new();
        for position in 0..3 {
            prop_assert!(state.add_reveal(card.clone(), RevealSource::Hall, position));
            prop_assert!(!state.has_mismatch());
        }
        prop_assert!(state.is_valid_trio());
    }

    /// Property: any seeded deal accounts for all 36 cards.
    #[test]
    fn prop_deal_conserves_cards(seed in any::<u64>(), students in 2usize..=6) {
        let config = GameConfig::new(students)
            .with_mode(GameMode::SimpleIndividual)
            .with_seed(seed);
        let hand_size = config.hand_size();
        let mut game = Game::new(config).unwrap();
        game.initialize();

        let in_hands: usize = StudentId::all(students)
            .map(|s| game.hand(s).unwrap().len())
            .sum();
        prop_assert_eq!(in_hands, students * hand_size);
        prop_assert_eq!(in_hands + game.hall().len() + game.deck_remaining(), 36);
    }
}

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use rust_trio::cards::{Card, Deck, CATALOG};
use rust_trio::game::{Game, RevealVerdict};
use rust_trio::reveal::RevealSource;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceLock<()> = OnceLock::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(code: &str) -> Card {
    Card::from_catalog(code).unwrap_or_else(|| panic!("unknown course code {code}"))
}

/// Deck dealt exactly in the order given.
pub fn deck_of(codes: &[&str]) -> Deck {
    Deck::from_cards(codes.iter().map(|c| card(c)).collect())
}

/// `n` non-final-project codes, cycling through the catalog.
pub fn filler(n: usize) -> Vec<&'static str> {
    CATALOG
        .iter()
        .map(|&(code, _, _)| code)
        .filter(|&code| code != "PFE")
        .cycle()
        .take(n)
        .collect()
}

/// Reveal whatever card sits at `position` for the current student.
pub fn reveal_at(game: &mut Game, source: RevealSource, position: usize) -> RevealVerdict {
    let player = game.current_player();
    let card = match source {
        RevealSource::OwnHand => game.hand(player).and_then(|h| h.get(position)).cloned(),
        RevealSource::OtherHand(other) => game.hand(other).and_then(|h| h.get(position)).cloned(),
        RevealSource::Hall => game.hall().get(position).cloned(),
    }
    .unwrap_or_else(|| panic!("nothing at {source:?} {position}"));
    game.reveal_card(player, &card, source, position)
}

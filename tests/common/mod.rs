//! Helpers shared by the integration tests.

#![allow(dead_code)]

use flip_seven::cards::{printed_quantity, CardKind, CATALOG};
use flip_seven::game::{Game, GameBuilder};

/// A game with `players` default-named players.
pub fn game(players: usize) -> Game {
    GameBuilder::new().player_count(players).build().unwrap()
}

/// Every card is in exactly one place: deck, discard pile, or a hand.
pub fn assert_conserved(game: &Game) {
    for card in CATALOG {
        assert_eq!(game.round().accounted(card), printed_quantity(card), "{card}");
    }
}

/// Discard every card in the deck except one copy of `keep`.
pub fn discard_all_but(game: &mut Game, keep: CardKind) {
    let deck = game.deck_counts().clone();
    for (card, count) in deck.iter() {
        let burn = if card == keep { count - 1 } else { count };
        for _ in 0..burn {
            game.manual_discard(card).unwrap();
        }
    }
    assert_eq!(game.deck_counts().total(), 1);
}

//! Undo behaviour.
//!
//! Undo is the table's correction tool: a card entered by mistake goes
//! back to where it came from and the player's status and scores are
//! re-derived from what they still hold.

mod common;

use common::{assert_conserved, discard_all_but, game};
use flip_seven::cards::CardKind;
use flip_seven::core::{GameError, PlayerId, PlayerStatus};
use flip_seven::game::GameEvent;

const ADA: PlayerId = PlayerId::new(0);
const GRACE: PlayerId = PlayerId::new(1);

/// Drawing then undoing a card restores the round exactly.
#[test]
fn test_undo_added_card_restores_round() {
    let mut game = game(2);
    game.draw(ADA, CardKind::Number(4)).unwrap();
    let before = game.round().clone();

    game.draw(ADA, CardKind::FlatModifier(8)).unwrap();
    game.undo(ADA, CardKind::FlatModifier(8)).unwrap();

    assert_eq!(game.round(), &before);
    assert_eq!(game.player(ADA).unwrap().round_score(), 4);
}

/// Undoing the bust card reactivates the player and pulls the card back
/// out of the discard pile.
#[test]
fn test_undo_bust_card() {
    let mut game = game(2);
    game.draw(GRACE, CardKind::Number(10)).unwrap();
    game.draw(GRACE, CardKind::Multiplier).unwrap();
    let before = game.round().clone();

    game.draw(GRACE, CardKind::Number(10)).unwrap();
    assert_eq!(game.player(GRACE).unwrap().status(), PlayerStatus::Busted);

    game.undo(GRACE, CardKind::Number(10)).unwrap();
    assert_eq!(game.round(), &before);

    let grace = game.player(GRACE).unwrap();
    assert!(grace.is_active());
    assert_eq!(grace.round_score(), 20);
    assert_eq!(game.discard_counts().total(), 0);
}

/// Undoing some other card leaves a busted player busted.
#[test]
fn test_undo_other_card_while_busted() {
    let mut game = game(1);
    game.draw(ADA, CardKind::Number(3)).unwrap();
    game.draw(ADA, CardKind::FlatModifier(2)).unwrap();
    game.draw(ADA, CardKind::Number(3)).unwrap();

    game.undo(ADA, CardKind::FlatModifier(2)).unwrap();

    let ada = game.player(ADA).unwrap();
    assert_eq!(ada.status(), PlayerStatus::Busted);
    assert_eq!(ada.round_score(), 0);
    assert_eq!(game.deck_counts().count(CardKind::FlatModifier(2)), 1);
    assert_conserved(&game);
}

/// Undoing the Freeze cancels the forced stay and the banked score.
#[test]
fn test_undo_freeze_reactivates() {
    let mut game = game(2);
    game.draw(ADA, CardKind::Number(12)).unwrap();
    game.draw(ADA, CardKind::FREEZE).unwrap();
    assert_eq!(game.player(ADA).unwrap().total_score(), 12);

    game.undo(ADA, CardKind::FREEZE).unwrap();

    let ada = game.player(ADA).unwrap();
    assert_eq!(ada.status(), PlayerStatus::Active);
    assert_eq!(ada.total_score(), 0);
    assert_eq!(ada.round_score(), 12);
}

/// A chosen stay survives an undo; the banked amount is recomputed.
#[test]
fn test_undo_after_stay_rebanks() {
    let mut game = game(2);
    game.draw(ADA, CardKind::Number(7)).unwrap();
    game.draw(ADA, CardKind::Number(9)).unwrap();
    game.stay(ADA).unwrap();
    assert_eq!(game.player(ADA).unwrap().total_score(), 16);

    game.undo(ADA, CardKind::Number(9)).unwrap();

    let ada = game.player(ADA).unwrap();
    assert_eq!(ada.status(), PlayerStatus::Stayed);
    assert_eq!(ada.total_score(), 7);
}

/// Dropping below seven numbers reverses a flip and its bonus.
#[test]
fn test_undo_unflips() {
    let mut game = game(1);
    for n in 1..=7 {
        game.draw(ADA, CardKind::Number(n)).unwrap();
    }
    assert_eq!(game.player(ADA).unwrap().total_score(), 28 + 15);

    game.undo(ADA, CardKind::Number(7)).unwrap();

    let ada = game.player(ADA).unwrap();
    assert_eq!(ada.status(), PlayerStatus::Active);
    assert_eq!(ada.total_score(), 0);
    assert_eq!(ada.round_score(), 21);
}

/// Undoing a modifier keeps a flipped player flipped, re-banked.
#[test]
fn test_undo_modifier_keeps_flip() {
    let mut game = game(1);
    game.draw(ADA, CardKind::FlatModifier(10)).unwrap();
    for n in 1..=7 {
        game.draw(ADA, CardKind::Number(n)).unwrap();
    }
    assert_eq!(game.player(ADA).unwrap().total_score(), 28 + 10 + 15);

    game.undo(ADA, CardKind::FlatModifier(10)).unwrap();

    let ada = game.player(ADA).unwrap();
    assert_eq!(ada.status(), PlayerStatus::Flipped);
    assert_eq!(ada.total_score(), 28 + 15);
}

/// Cards that never reached the hand cannot be undone.
#[test]
fn test_undo_card_not_in_hand() {
    let mut game = game(2);
    game.draw(ADA, CardKind::SECOND_CHANCE).unwrap();
    game.draw(ADA, CardKind::SECOND_CHANCE).unwrap();
    game.undo(ADA, CardKind::SECOND_CHANCE).unwrap();
    let before = game.clone();

    assert_eq!(
        game.undo(ADA, CardKind::SECOND_CHANCE),
        Err(GameError::NotInHand { player: ADA, card: CardKind::SECOND_CHANCE })
    );
    assert_eq!(
        game.undo(GRACE, CardKind::Number(1)),
        Err(GameError::NotInHand { player: GRACE, card: CardKind::Number(1) })
    );
    assert_eq!(game, before);
    assert_conserved(&game);
}

/// If the bust card already went back into the deck through a reshuffle,
/// undoing it moves nothing but still reactivates the player.
#[test]
fn test_undo_bust_card_after_reshuffle() {
    let mut game = game(1);
    game.draw(ADA, CardKind::Number(3)).unwrap();
    discard_all_but(&mut game, CardKind::Number(3));

    game.draw(ADA, CardKind::Number(3)).unwrap();
    assert_eq!(game.round().store().reshuffle_count(), 1);
    assert_eq!(game.discard_counts().total(), 0);
    assert_eq!(game.deck_counts().total(), 93);

    game.undo(ADA, CardKind::Number(3)).unwrap();

    assert!(game.player(ADA).unwrap().is_active());
    assert_eq!(game.deck_counts().total(), 93);
    assert_conserved(&game);
}

/// Undo is recorded in the history.
#[test]
fn test_undo_recorded() {
    let mut game = game(1);
    game.draw(ADA, CardKind::FLIP3).unwrap();
    game.undo(ADA, CardKind::FLIP3).unwrap();

    assert_eq!(
        game.history().last(),
        Some(&GameEvent::Undone { round: 1, player: ADA, card: CardKind::FLIP3 })
    );
}

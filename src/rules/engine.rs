//! Draw resolution, staying, undo, and round advance.
//!
//! Every function validates first and mutates second: an `Err` means the
//! round is exactly as it was. None of these functions reshuffle; they
//! report an emptied deck and leave the reshuffle to the session.
//!
//! ## Draw resolution order
//!
//! 1. Legality: player known and active, card in the deck, no second copy
//!    of a single-use card.
//! 2. Take the card from the deck.
//! 3. Duplicate number: a held Second Chance absorbs it (both cards are
//!    discarded), otherwise the player busts and the card is discarded.
//! 4. Duplicate Freeze or Second Chance: discarded on sight.
//! 5. Otherwise the card joins the hand. Freeze banks and stays; a
//!    seventh distinct number banks and flips.

use serde::{Deserialize, Serialize};

use super::scoring::{hand_score, FLIP_SEVEN_COUNT};
use crate::cards::CardKind;
use crate::core::{GameError, PlayerId, PlayerStatus, Round};

/// What a draw did to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// Card joined the hand; the player is still active.
    Added,
    /// Freeze joined the hand; the round score was banked.
    Frozen,
    /// Seventh distinct number; the round score (with bonus) was banked.
    FlippedSeven,
    /// Duplicate number. Round score forfeited.
    Busted,
    /// Duplicate number absorbed by a held Second Chance.
    SecondChanceSaved,
    /// Duplicate Freeze or Second Chance, sent straight to the discard pile.
    AutoDiscardedDuplicate,
}

impl DrawOutcome {
    /// Did the drawn card end up in the player's hand?
    #[must_use]
    pub const fn card_kept(self) -> bool {
        matches!(self, Self::Added | Self::Frozen | Self::FlippedSeven)
    }
}

/// A resolved draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Resolution {
    pub outcome: DrawOutcome,
    /// The draw took the last card in the deck.
    pub emptied_deck: bool,
}

/// Check whether `player` may draw `card`, without changing anything.
pub fn check_draw(round: &Round, player: PlayerId, card: CardKind) -> Result<(), GameError> {
    let p = round.player(player)?;

    if !p.is_active() {
        return Err(GameError::NotActive { player });
    }

    if !round.store.is_available(card) {
        return Err(GameError::Unavailable { card });
    }

    if card.is_single_use() && p.holds(card) {
        return Err(GameError::IllegalDuplicate { player, card });
    }

    Ok(())
}

/// Draw `card` for `player` and apply its consequences.
pub fn resolve_draw(
    round: &mut Round,
    player: PlayerId,
    card: CardKind,
) -> Result<Resolution, GameError> {
    check_draw(round, player, card)?;

    let take = round.store.take(card)?;
    let store = &mut round.store;
    let p = &mut round.players[player];

    let outcome = match card {
        CardKind::Number(n) if p.number_cards.contains(&n) => {
            if p.remove(CardKind::SECOND_CHANCE) {
                store.discard(card);
                store.discard(CardKind::SECOND_CHANCE);
                p.round_score = hand_score(p);
                DrawOutcome::SecondChanceSaved
            } else {
                store.discard(card);
                p.status = PlayerStatus::Busted;
                p.bust_card = Some(n);
                p.round_score = 0;
                DrawOutcome::Busted
            }
        }
        _ if card.auto_discards_duplicate() && p.holds(card) => {
            store.discard(card);
            DrawOutcome::AutoDiscardedDuplicate
        }
        _ => {
            p.insert(card);
            p.round_score = hand_score(p);

            if card == CardKind::FREEZE {
                p.status = PlayerStatus::Stayed;
                p.bank();
                DrawOutcome::Frozen
            } else if p.distinct_numbers() == FLIP_SEVEN_COUNT {
                p.status = PlayerStatus::Flipped;
                p.bank();
                DrawOutcome::FlippedSeven
            } else {
                DrawOutcome::Added
            }
        }
    };

    Ok(Resolution {
        outcome,
        emptied_deck: take.emptied_deck,
    })
}

/// Bank the round score and stop drawing. Returns the amount banked.
pub fn stay(round: &mut Round, player: PlayerId) -> Result<u32, GameError> {
    let p = round.player_mut(player)?;
    if !p.is_active() {
        return Err(GameError::NotActive { player });
    }

    p.status = PlayerStatus::Stayed;
    p.bank();
    Ok(p.banked)
}

/// Take back a drawn card.
///
/// Undoing the card that busted a player pulls it back from the discard
/// pile and reactivates them. Undoing a held card returns it to the deck,
/// reverses any banking, and re-derives the status:
///
/// - `Flipped` holds only while seven distinct numbers remain.
/// - A Freeze stay ends when the Freeze itself is undone; a chosen stay
///   does not.
/// - `Busted` holds for any card other than the bust card.
///
/// Stayed and flipped players re-bank their recomputed score.
///
/// Cards that never reached the hand (auto-discarded duplicates, cards
/// consumed by Second Chance) cannot be undone and fail with `NotInHand`.
pub fn undo_draw(round: &mut Round, player: PlayerId, card: CardKind) -> Result<(), GameError> {
    let store = &mut round.store;
    let p = round.players.get_mut(player).ok_or(GameError::UnknownPlayer(player))?;

    if p.status == PlayerStatus::Busted && p.bust_card.is_some() && p.bust_card == card.number_value() {
        // A reshuffle may already have returned the revealed copy to the deck.
        store.recall_discard(card);
        p.bust_card = None;
        p.status = PlayerStatus::Active;
        p.round_score = hand_score(p);
        return Ok(());
    }

    if !p.remove(card) {
        return Err(GameError::NotInHand { player, card });
    }
    store.put_back(card);
    p.unbank();

    p.status = match p.status {
        PlayerStatus::Busted => PlayerStatus::Busted,
        PlayerStatus::Flipped if p.distinct_numbers() == FLIP_SEVEN_COUNT => PlayerStatus::Flipped,
        PlayerStatus::Stayed if card != CardKind::FREEZE => PlayerStatus::Stayed,
        _ => PlayerStatus::Active,
    };

    p.round_score = match p.status {
        PlayerStatus::Busted => 0,
        _ => hand_score(p),
    };

    if matches!(p.status, PlayerStatus::Stayed | PlayerStatus::Flipped) {
        p.bank();
    }

    Ok(())
}

/// Discard every hand, reset round state, and bump the round number.
///
/// Fails with `RoundInProgress` while any player is still active.
/// Returns the number of cards discarded.
pub fn advance_round(round: &mut Round) -> Result<u32, GameError> {
    if !round.is_complete() {
        return Err(GameError::RoundInProgress { round: round.number });
    }

    let mut discarded = 0;
    for (_, p) in round.players.iter_mut() {
        for card in p.clear_round() {
            round.store.discard(card);
            discarded += 1;
        }
    }

    round.number += 1;
    Ok(discarded)
}

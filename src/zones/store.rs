//! The shared deck and discard pile.
//!
//! Draw order is not modelled: the deck is a multiset that depletes as
//! cards are revealed. When the deck runs out, `take` reports it and the
//! caller reshuffles the discard pile back in before anything else reads
//! the store.

use serde::{Deserialize, Serialize};

use super::pile::Pile;
use crate::cards::{CardKind, CATALOG};
use crate::core::error::GameError;
use crate::core::rng::GameRng;

/// Result of taking a card from the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Take {
    pub card: CardKind,
    /// The deck was empty after this card left it.
    pub emptied_deck: bool,
}

/// Deck and discard pile for one session.
///
/// ## Example
///
/// ```
/// use flip_seven::cards::{deck_size, CardKind};
/// use flip_seven::zones::CardStore;
///
/// let mut store = CardStore::new();
/// let take = store.take(CardKind::Number(7)).unwrap();
/// assert!(!take.emptied_deck);
///
/// store.discard(take.card);
/// assert_eq!(store.total_in_deck(), deck_size() - 1);
/// assert_eq!(store.total_in_discard(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStore {
    deck: Pile,
    discard: Pile,
    reshuffles: u32,
}

impl CardStore {
    /// Full deck, empty discard pile.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: Pile::full(),
            discard: Pile::empty(),
            reshuffles: 0,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Pile {
        &self.deck
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Pile {
        &self.discard
    }

    #[must_use]
    pub fn total_in_deck(&self) -> u32 {
        self.deck.total()
    }

    #[must_use]
    pub fn total_in_discard(&self) -> u32 {
        self.discard.total()
    }

    /// Reshuffles performed since the store was created.
    #[must_use]
    pub fn reshuffle_count(&self) -> u32 {
        self.reshuffles
    }

    /// Is at least one copy of `card` left in the deck?
    #[must_use]
    pub fn is_available(&self, card: CardKind) -> bool {
        self.deck.count(card) > 0
    }

    /// Remove one copy of `card` from the deck.
    pub fn take(&mut self, card: CardKind) -> Result<Take, GameError> {
        if !self.deck.remove(card) {
            return Err(GameError::Unavailable { card });
        }

        Ok(Take {
            card,
            emptied_deck: self.deck.is_empty(),
        })
    }

    /// Return a card to the deck (undo).
    pub fn put_back(&mut self, card: CardKind) {
        self.deck.add(card);
    }

    /// Send a card to the discard pile.
    pub fn discard(&mut self, card: CardKind) {
        self.discard.add(card);
    }

    /// Move one copy of `card` from the discard pile back to the deck.
    ///
    /// Returns false, changing nothing, if the discard pile has none.
    pub fn recall_discard(&mut self, card: CardKind) -> bool {
        if self.discard.remove(card) {
            self.deck.add(card);
            true
        } else {
            false
        }
    }

    /// Move the whole discard pile into the deck.
    ///
    /// Returns the number of cards moved.
    pub fn reshuffle(&mut self) -> u32 {
        let moved = self.discard.drain_into(&mut self.deck);
        self.reshuffles += 1;
        moved
    }

    /// Pick a card from the deck at random, weighted by remaining copies.
    ///
    /// Does not remove it. Returns `None` when the deck is empty.
    pub fn sample(&self, rng: &mut GameRng) -> Option<CardKind> {
        let weights: Vec<u32> = CATALOG.iter().map(|&kind| self.deck.count(kind)).collect();
        rng.choose_weighted(&weights).map(|i| CATALOG[i])
    }
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck_size;

    #[test]
    fn test_take_decrements_deck() {
        let mut store = CardStore::new();
        let take = store.take(CardKind::Number(5)).unwrap();

        assert_eq!(take.card, CardKind::Number(5));
        assert_eq!(store.deck().count(CardKind::Number(5)), 4);
        assert_eq!(store.total_in_deck(), deck_size() - 1);
    }

    #[test]
    fn test_take_unavailable() {
        let mut store = CardStore::new();
        store.take(CardKind::Multiplier).unwrap();

        assert_eq!(
            store.take(CardKind::Multiplier),
            Err(GameError::Unavailable { card: CardKind::Multiplier })
        );
        assert_eq!(
            store.take(CardKind::Number(13)),
            Err(GameError::Unavailable { card: CardKind::Number(13) })
        );
    }

    #[test]
    fn test_take_reports_empty_deck() {
        let mut store = CardStore::new();
        let mut emptied = 0;

        for kind in CATALOG {
            while store.is_available(kind) {
                if store.take(kind).unwrap().emptied_deck {
                    emptied += 1;
                }
            }
        }

        assert_eq!(emptied, 1);
        assert_eq!(store.total_in_deck(), 0);
    }

    #[test]
    fn test_reshuffle_moves_discard() {
        let mut store = CardStore::new();
        for _ in 0..3 {
            let take = store.take(CardKind::Number(9)).unwrap();
            store.discard(take.card);
        }

        let moved = store.reshuffle();
        assert_eq!(moved, 3);
        assert_eq!(store.total_in_discard(), 0);
        assert_eq!(store.total_in_deck(), deck_size());
        assert_eq!(store.reshuffle_count(), 1);
    }

    #[test]
    fn test_reshuffle_with_empty_discard_moves_nothing() {
        let mut store = CardStore::new();
        assert_eq!(store.reshuffle(), 0);
        assert_eq!(store.total_in_deck(), deck_size());
    }

    #[test]
    fn test_recall_discard() {
        let mut store = CardStore::new();
        let take = store.take(CardKind::Number(2)).unwrap();
        store.discard(take.card);

        assert!(store.recall_discard(CardKind::Number(2)));
        assert!(!store.recall_discard(CardKind::Number(2)));
        assert_eq!(store, CardStore::new());
    }

    #[test]
    fn test_sample_only_returns_available_cards() {
        let mut store = CardStore::new();
        for kind in CATALOG {
            if kind != CardKind::FREEZE {
                while store.is_available(kind) {
                    let _ = store.take(kind).unwrap();
                }
            }
        }

        let mut rng = GameRng::new(3);
        for _ in 0..10 {
            assert_eq!(store.sample(&mut rng), Some(CardKind::FREEZE));
        }

        for _ in 0..3 {
            let _ = store.take(CardKind::FREEZE).unwrap();
        }
        assert_eq!(store.sample(&mut rng), None);
    }
}

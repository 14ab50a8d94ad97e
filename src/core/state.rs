//! Round state: the aggregate every operation reads and mutates.
//!
//! A `Round` owns the deck, the discard pile, and the players. Only the
//! rules engine mutates it, and only the session hands out `&mut Round`.
//!
//! ## Conservation
//!
//! For every card identifier, copies in the deck + discard pile + all
//! hands always equal the printed quantity. `Round::accounted` computes
//! the left-hand side for checks and tests.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::{Player, PlayerId, PlayerMap, PlayerStatus};
use crate::cards::CardKind;
use crate::zones::CardStore;

/// One round of play, plus the state that carries across rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Round number (starts at 1).
    pub(crate) number: u32,
    pub(crate) store: CardStore,
    pub(crate) players: PlayerMap<Player>,
}

impl Round {
    /// First round: full deck, empty discard pile, empty hands.
    ///
    /// Only `Game` builds rounds, after `GameConfig::validate`.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty.
    #[must_use]
    pub(crate) fn new(names: &[String]) -> Self {
        Self {
            number: 1,
            store: CardStore::new(),
            players: PlayerMap::new(names.len(), |id| Player::new(id, names[id.index()].clone())),
        }
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Look up a player, rejecting ids outside the table.
    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players.get_mut(id).ok_or(GameError::UnknownPlayer(id))
    }

    /// Every player has busted, stayed, or flipped seven.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.players.player_count() > 0
            && self
                .players
                .values()
                .all(|p| p.status() != PlayerStatus::Active)
    }

    /// Copies of `card` across deck, discard pile, and every hand.
    #[must_use]
    pub fn accounted(&self, card: CardKind) -> u32 {
        self.store.deck().count(card)
            + self.store.discard_pile().count(card)
            + self.players.values().map(|p| p.count_of(card)).sum::<u32>()
    }
}

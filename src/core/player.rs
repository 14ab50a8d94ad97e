//! Player identification, per-player storage, and per-player round state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Indices are 0-based.
//!
//! ## PlayerMap
//!
//! Per-player data backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! A seat at the table: the cards drawn this round, round and total score,
//! and the round status.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::CardKind;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a table of `player_count` players.
    ///
    /// ```
    /// use flip_seven::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// `get` and `get_mut` return `None` for ids outside the table; indexing
/// with `[]` panics instead, for call sites that already validated the id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// Panics on 0 or more than 255 players; callers validate the count first.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Where a player stands in the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// May still draw or stay.
    #[default]
    Active,
    /// Drew a duplicate number card. Round score forfeited.
    Busted,
    /// Banked the round score, by choice or by a Freeze.
    Stayed,
    /// Collected seven distinct number cards.
    Flipped,
}

/// One seat at the table.
///
/// Number cards are a set: holding a value twice is impossible because
/// drawing the duplicate busts instead. Modifier and action cards are
/// kept in draw order for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub(crate) number_cards: OrdSet<u8>,
    pub(crate) modifier_cards: SmallVec<[CardKind; 4]>,
    pub(crate) round_score: u32,
    pub(crate) total_score: u32,
    /// Amount added to `total_score` this round, reversed by undo.
    pub(crate) banked: u32,
    /// Number whose duplicate busted this player.
    pub(crate) bust_card: Option<u8>,
    pub(crate) status: PlayerStatus,
}

impl Player {
    /// Create a player with an empty hand and no score.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            number_cards: OrdSet::new(),
            modifier_cards: SmallVec::new(),
            round_score: 0,
            total_score: 0,
            banked: 0,
            bust_card: None,
            status: PlayerStatus::Active,
        }
    }

    /// Distinct number cards drawn this round, ascending.
    #[must_use]
    pub fn number_cards(&self) -> &OrdSet<u8> {
        &self.number_cards
    }

    /// Modifier and action cards drawn this round, in draw order.
    #[must_use]
    pub fn modifier_cards(&self) -> &[CardKind] {
        &self.modifier_cards
    }

    #[must_use]
    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// The number card that busted this player, if busted.
    #[must_use]
    pub fn bust_card(&self) -> Option<CardKind> {
        self.bust_card.map(CardKind::Number)
    }

    /// Does the hand contain at least one copy of `card`?
    #[must_use]
    pub fn holds(&self, card: CardKind) -> bool {
        match card {
            CardKind::Number(n) => self.number_cards.contains(&n),
            other => self.modifier_cards.contains(&other),
        }
    }

    #[must_use]
    pub fn holds_second_chance(&self) -> bool {
        self.holds(CardKind::SECOND_CHANCE)
    }

    #[must_use]
    pub fn distinct_numbers(&self) -> usize {
        self.number_cards.len()
    }

    /// Cards currently in front of the player.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.number_cards.len() + self.modifier_cards.len()
    }

    /// Every card in the hand, numbers first.
    pub fn cards(&self) -> impl Iterator<Item = CardKind> + '_ {
        self.number_cards
            .iter()
            .map(|&n| CardKind::Number(n))
            .chain(self.modifier_cards.iter().copied())
    }

    /// How many copies of `card` this hand holds.
    #[must_use]
    pub fn count_of(&self, card: CardKind) -> u32 {
        match card {
            CardKind::Number(n) => u32::from(self.number_cards.contains(&n)),
            other => self.modifier_cards.iter().filter(|&&c| c == other).count() as u32,
        }
    }

    /// Add a card to the hand without any rule checks.
    pub(crate) fn insert(&mut self, card: CardKind) {
        match card {
            CardKind::Number(n) => {
                self.number_cards.insert(n);
            }
            other => self.modifier_cards.push(other),
        }
    }

    /// Remove one copy of `card`. Returns false if absent.
    pub(crate) fn remove(&mut self, card: CardKind) -> bool {
        match card {
            CardKind::Number(n) => self.number_cards.remove(&n).is_some(),
            other => match self.modifier_cards.iter().position(|&c| c == other) {
                Some(pos) => {
                    self.modifier_cards.remove(pos);
                    true
                }
                None => false,
            },
        }
    }

    /// Add the round score to the total.
    pub(crate) fn bank(&mut self) {
        self.banked = self.round_score;
        self.total_score += self.round_score;
    }

    /// Take back whatever was banked this round.
    pub(crate) fn unbank(&mut self) {
        self.total_score -= self.banked;
        self.banked = 0;
    }

    /// Empty the hand and reset round state. Returns the cards that were held.
    pub(crate) fn clear_round(&mut self) -> Vec<CardKind> {
        let cards: Vec<_> = self.cards().collect();
        self.number_cards = OrdSet::new();
        self.modifier_cards.clear();
        self.round_score = 0;
        self.banked = 0;
        self.bust_card = None;
        self.status = PlayerStatus::Active;
        cards
    }
}

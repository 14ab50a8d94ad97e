//! Error types.
//!
//! All errors are local and non-fatal. An operation that returns `Err`
//! has changed nothing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardKind;

/// Rejected game operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// The player already busted, stayed, or flipped seven this round.
    #[error("{player} is not active")]
    NotActive { player: PlayerId },

    /// No copy of the card is left in the deck.
    #[error("{card} is not available in the deck")]
    Unavailable { card: CardKind },

    /// The player already holds this single-use card.
    #[error("{player} already holds {card}")]
    IllegalDuplicate { player: PlayerId, card: CardKind },

    /// Undo target is not in the player's hand.
    #[error("{player} does not hold {card}")]
    NotInHand { player: PlayerId, card: CardKind },

    /// Player id out of range for this session.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    /// The next round was requested while a player can still act.
    #[error("round {round} is still in progress")]
    RoundInProgress { round: u32 },

    /// A random draw was requested with every card in someone's hand.
    #[error("the deck and discard pile are both empty")]
    DeckEmpty,
}

/// Invalid session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between {min} and {max}, got {got}")]
    PlayerCount { min: usize, max: usize, got: usize },

    #[error("player {index} has an empty name")]
    EmptyName { index: usize },

    #[error("target score must be positive")]
    ZeroTarget,
}

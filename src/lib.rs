//! # flip-seven
//!
//! Round-state engine for the Flip Seven card game.
//!
//! Cards are revealed at a physical table and entered one at a time. The
//! engine tracks which copies remain in the shared deck, who holds what,
//! and each player's round and total score. Every card is always in
//! exactly one place: the deck, the discard pile, or a hand.
//!
//! ## Design Principles
//!
//! 1. **Rejected means unchanged**: Every operation validates before it
//!    mutates. An `Err` leaves the game exactly as it was.
//!
//! 2. **One owner**: `Game` is the only holder of `&mut Round`. Views hand
//!    out shared references or copies.
//!
//! 3. **Cheap snapshots**: Hands use `im` collections, so cloning a `Game`
//!    for undo stacks or what-if analysis stays inexpensive.
//!
//! ## Modules
//!
//! - `cards`: Card identifiers, labels, and printed quantities
//! - `zones`: Deck and discard pile counts
//! - `core`: Players, round state, configuration, errors, RNG
//! - `rules`: Scoring and the draw/stay/undo engine
//! - `game`: The session facade, builder, and event history

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{ActionKind, CardKind, ParseCardError, CATALOG};

pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap, PlayerStatus, Round,
};

pub use crate::zones::{CardStore, Pile};

pub use crate::rules::{hand_score, score, DrawOutcome};

pub use crate::game::{Game, GameBuilder, GameEvent};

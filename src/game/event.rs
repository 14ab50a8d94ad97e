//! Session history.
//!
//! Every successful operation appends one event. Rejected operations
//! leave no trace.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::PlayerId;
use crate::rules::DrawOutcome;

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Drew {
        round: u32,
        player: PlayerId,
        card: CardKind,
        outcome: DrawOutcome,
    },
    Stayed {
        round: u32,
        player: PlayerId,
        banked: u32,
    },
    Undone {
        round: u32,
        player: PlayerId,
        card: CardKind,
    },
    ManuallyDiscarded {
        round: u32,
        card: CardKind,
    },
    /// Discard pile shuffled back into the empty deck.
    Reshuffled {
        round: u32,
        cards: u32,
    },
    /// A new round began; `discarded` cards left the previous round's hands.
    RoundStarted {
        round: u32,
        discarded: u32,
    },
    /// Session restarted from scratch.
    Reset,
}

//! Card locations outside the players' hands.
//!
//! ## Key Types
//!
//! - `Pile`: Count per card identifier
//! - `CardStore`: The shared deck and discard pile
//! - `Take`: A card taken from the deck, and whether the deck ran out

pub mod pile;
pub mod store;

pub use pile::Pile;
pub use store::{CardStore, Take};

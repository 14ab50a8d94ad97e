//! Card catalog: identifiers, classification, and printed quantities.
//!
//! ## Key Types
//!
//! - `CardKind`: Closed card identifier (number, flat modifier, X2, action)
//! - `ActionKind`: Freeze, Flip3, Second Chance
//! - `CATALOG`: All 22 identifiers in display order
//!
//! The catalog is pure lookup. It holds no state and never fails.

pub mod catalog;
pub mod kind;

pub use catalog::{deck_size, printed_quantity, ACTION_COPIES, CARD_KINDS, CATALOG};
pub use kind::{ActionKind, CardKind, ParseCardError, FLAT_BONUSES, MAX_NUMBER};

//! Static card catalog: every identifier and its printed quantity.

use super::kind::{ActionKind, CardKind};

/// Number of distinct card identifiers.
pub const CARD_KINDS: usize = 22;

/// Every card identifier, in display order.
pub const CATALOG: [CardKind; CARD_KINDS] = [
    CardKind::Number(0),
    CardKind::Number(1),
    CardKind::Number(2),
    CardKind::Number(3),
    CardKind::Number(4),
    CardKind::Number(5),
    CardKind::Number(6),
    CardKind::Number(7),
    CardKind::Number(8),
    CardKind::Number(9),
    CardKind::Number(10),
    CardKind::Number(11),
    CardKind::Number(12),
    CardKind::FlatModifier(2),
    CardKind::FlatModifier(4),
    CardKind::FlatModifier(6),
    CardKind::FlatModifier(8),
    CardKind::FlatModifier(10),
    CardKind::Multiplier,
    CardKind::Action(ActionKind::Freeze),
    CardKind::Action(ActionKind::Flip3),
    CardKind::Action(ActionKind::SecondChance),
];

/// Copies of each action card in the deck.
pub const ACTION_COPIES: u32 = 3;

/// How many copies of `kind` the physical deck contains.
///
/// Returns 0 for identifiers outside the catalog.
///
/// ```
/// use flip_seven::cards::{printed_quantity, CardKind};
///
/// assert_eq!(printed_quantity(CardKind::Number(0)), 1);
/// assert_eq!(printed_quantity(CardKind::Number(12)), 12);
/// assert_eq!(printed_quantity(CardKind::FREEZE), 3);
/// assert_eq!(printed_quantity(CardKind::Number(13)), 0);
/// ```
#[must_use]
pub fn printed_quantity(kind: CardKind) -> u32 {
    match kind {
        CardKind::Number(0) => 1,
        CardKind::Number(n) if n <= super::kind::MAX_NUMBER => u32::from(n),
        CardKind::Number(_) => 0,
        CardKind::FlatModifier(k) if super::kind::FLAT_BONUSES.contains(&k) => 1,
        CardKind::FlatModifier(_) => 0,
        CardKind::Multiplier => 1,
        CardKind::Action(_) => ACTION_COPIES,
    }
}

/// Total cards in a full deck.
#[must_use]
pub fn deck_size() -> u32 {
    CATALOG.iter().map(|&kind| printed_quantity(kind)).sum()
}

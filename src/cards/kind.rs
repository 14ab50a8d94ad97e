//! Card kinds - the closed set of card identifiers.
//!
//! Every physical card in the deck is one of 22 identifiers. Copies of the
//! same identifier are interchangeable, so the kind doubles as the card's
//! identity everywhere in the engine.
//!
//! Labels (`"7"`, `"+4"`, `"X2"`, `"2nd Chance"`, ...) are parsed exactly
//! once, here, via `FromStr`. Nothing else in the crate inspects strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest number card value.
pub const MAX_NUMBER: u8 = 12;

/// Flat modifier bonuses, in display order.
pub const FLAT_BONUSES: [u8; 5] = [2, 4, 6, 8, 10];

/// Action card types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    /// Forces the holder to stay immediately.
    Freeze,
    /// Flip three cards. Holding several is legal.
    Flip3,
    /// Cancels exactly one bust, consuming itself.
    SecondChance,
}

/// A card identifier.
///
/// Values outside the printed deck (e.g. `Number(13)` or `FlatModifier(3)`)
/// can be constructed but are never present in any pile, so every
/// operation on them is rejected as unavailable.
///
/// ## Example
///
/// ```
/// use flip_seven::cards::{ActionKind, CardKind};
///
/// let card: CardKind = "2nd Chance".parse().unwrap();
/// assert_eq!(card, CardKind::Action(ActionKind::SecondChance));
/// assert!(card.auto_discards_duplicate());
///
/// assert_eq!(CardKind::FlatModifier(4).to_string(), "+4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CardKind {
    /// Number card `0..=12`.
    Number(u8),
    /// Flat bonus `+2`, `+4`, `+6`, `+8` or `+10`.
    FlatModifier(u8),
    /// The `X2` card. Doubles the number-card sum.
    Multiplier,
    /// Action card.
    Action(ActionKind),
}

impl CardKind {
    pub const FREEZE: CardKind = CardKind::Action(ActionKind::Freeze);
    pub const FLIP3: CardKind = CardKind::Action(ActionKind::Flip3);
    pub const SECOND_CHANCE: CardKind = CardKind::Action(ActionKind::SecondChance);

    /// Is this one of the 22 printed identifiers?
    #[must_use]
    pub fn is_valid(self) -> bool {
        super::catalog::printed_quantity(self) > 0
    }

    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Number(_))
    }

    #[must_use]
    pub const fn is_flat_modifier(self) -> bool {
        matches!(self, Self::FlatModifier(_))
    }

    #[must_use]
    pub const fn is_multiplier(self) -> bool {
        matches!(self, Self::Multiplier)
    }

    #[must_use]
    pub const fn is_action(self) -> bool {
        matches!(self, Self::Action(_))
    }

    /// Face value for number cards.
    #[must_use]
    pub const fn number_value(self) -> Option<u8> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Bonus for flat modifier cards.
    #[must_use]
    pub const fn flat_bonus(self) -> Option<u8> {
        match self {
            Self::FlatModifier(k) => Some(k),
            _ => None,
        }
    }

    /// Cards a player may hold at most one of; drawing a second is illegal.
    ///
    /// Flip3 and Second Chance are not single-use: extra Flip3s are kept,
    /// extra Second Chances are auto-discarded.
    #[must_use]
    pub const fn is_single_use(self) -> bool {
        matches!(
            self,
            Self::FlatModifier(_) | Self::Multiplier | Self::Action(ActionKind::Freeze)
        )
    }

    /// Action cards whose duplicate is discarded on draw instead of held.
    #[must_use]
    pub const fn auto_discards_duplicate(self) -> bool {
        matches!(
            self,
            Self::Action(ActionKind::Freeze) | Self::Action(ActionKind::SecondChance)
        )
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::FlatModifier(k) => write!(f, "+{k}"),
            Self::Multiplier => f.write_str("X2"),
            Self::Action(ActionKind::Freeze) => f.write_str("Freeze"),
            Self::Action(ActionKind::Flip3) => f.write_str("Flip3"),
            Self::Action(ActionKind::SecondChance) => f.write_str("2nd Chance"),
        }
    }
}

/// A card label that names no card in the deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown card label {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for CardKind {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let unknown = || ParseCardError(s.to_string());

        let kind = match label {
            "X2" | "x2" => Self::Multiplier,
            "Freeze" => Self::FREEZE,
            "Flip3" => Self::FLIP3,
            "2nd Chance" | "2ndChance" | "SecondChance" => Self::SECOND_CHANCE,
            _ => {
                if let Some(bonus) = label.strip_prefix('+') {
                    let k: u8 = bonus.parse().map_err(|_| unknown())?;
                    Self::FlatModifier(k)
                } else {
                    let n: u8 = label.parse().map_err(|_| unknown())?;
                    Self::Number(n)
                }
            }
        };

        if kind.is_valid() {
            Ok(kind)
        } else {
            Err(unknown())
        }
    }
}

impl From<CardKind> for String {
    fn from(kind: CardKind) -> Self {
        kind.to_string()
    }
}

impl TryFrom<String> for CardKind {
    type Error = ParseCardError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

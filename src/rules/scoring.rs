//! Round scoring.
//!
//! ```text
//! total = sum(numbers)
//! if X2 held:        total *= 2      (numbers only, before flat bonuses)
//! for each +k held:  total += k
//! if 7 numbers:      total += 15
//! ```
//!
//! A hand without number cards scores 0 whatever modifiers it holds.

use im::OrdSet;

use crate::cards::CardKind;
use crate::core::Player;

/// Distinct number cards that end the round for a player.
pub const FLIP_SEVEN_COUNT: usize = 7;

/// Bonus for collecting `FLIP_SEVEN_COUNT` distinct number cards.
pub const FLIP_SEVEN_BONUS: u32 = 15;

/// Score a hand.
///
/// ```
/// use flip_seven::cards::CardKind;
/// use flip_seven::rules::score;
///
/// let numbers: im::OrdSet<u8> = [1u8, 2, 3].into_iter().collect();
/// let modifiers = [CardKind::Multiplier, CardKind::FlatModifier(4)];
/// assert_eq!(score(&numbers, &modifiers), 16);
/// ```
#[must_use]
pub fn score(numbers: &OrdSet<u8>, modifiers: &[CardKind]) -> u32 {
    if numbers.is_empty() {
        return 0;
    }

    let mut total: u32 = numbers.iter().map(|&n| u32::from(n)).sum();

    if modifiers.contains(&CardKind::Multiplier) {
        total *= 2;
    }

    total += modifiers
        .iter()
        .filter_map(|card| card.flat_bonus())
        .map(u32::from)
        .sum::<u32>();

    if numbers.len() == FLIP_SEVEN_COUNT {
        total += FLIP_SEVEN_BONUS;
    }

    total
}

/// Score a player's current hand, ignoring status.
#[must_use]
pub fn hand_score(player: &Player) -> u32 {
    score(player.number_cards(), player.modifier_cards())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[u8]) -> OrdSet<u8> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_empty_hand_scores_zero() {
        assert_eq!(score(&OrdSet::new(), &[]), 0);
        assert_eq!(
            score(&OrdSet::new(), &[CardKind::FlatModifier(10), CardKind::Multiplier]),
            0
        );
    }

    #[test]
    fn test_zero_card_alone() {
        assert_eq!(score(&numbers(&[0]), &[CardKind::FlatModifier(2)]), 2);
    }

    #[test]
    fn test_multiplier_before_flat_modifiers() {
        let hand = numbers(&[1, 2, 3]);
        let modifiers = [CardKind::FlatModifier(4), CardKind::Multiplier];
        assert_eq!(score(&hand, &modifiers), (1 + 2 + 3) * 2 + 4);
    }

    #[test]
    fn test_action_cards_do_not_score() {
        let hand = numbers(&[5, 8]);
        let modifiers = [CardKind::FLIP3, CardKind::SECOND_CHANCE];
        assert_eq!(score(&hand, &modifiers), 13);
    }

    #[test]
    fn test_all_flat_modifiers() {
        let hand = numbers(&[12]);
        let modifiers = [
            CardKind::FlatModifier(2),
            CardKind::FlatModifier(4),
            CardKind::FlatModifier(6),
            CardKind::FlatModifier(8),
            CardKind::FlatModifier(10),
        ];
        assert_eq!(score(&hand, &modifiers), 12 + 30);
    }

    #[test]
    fn test_flip_seven_bonus_after_multiplier() {
        let hand = numbers(&[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(score(&hand, &[]), 21 + FLIP_SEVEN_BONUS);
        assert_eq!(
            score(&hand, &[CardKind::Multiplier, CardKind::FlatModifier(2)]),
            21 * 2 + 2 + FLIP_SEVEN_BONUS
        );
    }
}

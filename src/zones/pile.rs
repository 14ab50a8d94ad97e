//! A pile of interchangeable cards, stored as a count per identifier.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{printed_quantity, CardKind, CATALOG};

/// Multiset of cards keyed by identifier.
///
/// Every catalog identifier always has an entry, possibly zero, so views
/// can list the full catalog without special cases. Identifiers outside
/// the catalog have no entry and count as zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    counts: FxHashMap<CardKind, u32>,
}

impl Pile {
    /// A pile with zero of every identifier.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            counts: CATALOG.iter().map(|&kind| (kind, 0)).collect(),
        }
    }

    /// A pile holding the printed quantity of every identifier.
    #[must_use]
    pub fn full() -> Self {
        Self {
            counts: CATALOG
                .iter()
                .map(|&kind| (kind, printed_quantity(kind)))
                .collect(),
        }
    }

    #[must_use]
    pub fn count(&self, kind: CardKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total cards across all identifiers.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&count| count == 0)
    }

    /// (identifier, count) pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (CardKind, u32)> + '_ {
        CATALOG.iter().map(move |&kind| (kind, self.count(kind)))
    }

    /// Add one copy. Ignores identifiers outside the catalog.
    pub fn add(&mut self, kind: CardKind) {
        if let Some(count) = self.counts.get_mut(&kind) {
            *count += 1;
        }
    }

    /// Remove one copy. Returns false if none is left.
    pub fn remove(&mut self, kind: CardKind) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Move every card into `other`, leaving this pile at zero.
    ///
    /// Returns the number of cards moved.
    pub fn drain_into(&mut self, other: &mut Pile) -> u32 {
        let mut moved = 0;
        for (kind, count) in self.counts.iter_mut() {
            if *count > 0 {
                *other.counts.entry(*kind).or_insert(0) += *count;
                moved += *count;
                *count = 0;
            }
        }
        moved
    }
}

impl Default for Pile {
    fn default() -> Self {
        Self::empty()
    }
}

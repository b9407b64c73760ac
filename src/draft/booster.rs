//! Boosters - finite bags of cards rotating around the table.
//!
//! A booster is created once at draft setup by the allocation policy and
//! only ever shrinks: picks remove cards, and a spent (empty) booster is
//! dropped at round turnover instead of rotating further.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;
use crate::draft::drafter::DrafterId;

/// Unique identifier for a booster within one draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoosterId(pub u32);

impl BoosterId {
    /// Create a new booster ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for BoosterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Booster({})", self.0)
    }
}

/// A booster: a set of cards offered to one drafter at a time.
///
/// Card order within a booster is irrelevant; duplicates are forbidden.
/// `passed_by` records which drafter last held the booster before it
/// rotated, for provenance display ("passed to you by ...").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booster {
    /// Identifier, unique within the owning draft.
    pub id: BoosterId,

    /// Remaining cards. Inline up to 16 - typical booster sizes are 9-15.
    cards: SmallVec<[CardId; 16]>,

    /// Drafter who last held and passed this booster, if any.
    pub passed_by: Option<DrafterId>,
}

impl Booster {
    /// Create a booster from a card list.
    ///
    /// Duplicates within one booster are a programmer error in the
    /// allocation policy.
    #[must_use]
    pub fn new(id: BoosterId, cards: impl IntoIterator<Item = CardId>) -> Self {
        let cards: SmallVec<[CardId; 16]> = cards.into_iter().collect();
        debug_assert!(
            {
                let mut seen = rustc_hash::FxHashSet::default();
                cards.iter().all(|c| seen.insert(*c))
            },
            "duplicate card in booster {:?}",
            id
        );
        Self {
            id,
            cards,
            passed_by: None,
        }
    }

    /// Remaining cards in this booster.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the booster offers a given card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// A spent booster has no cards left and must leave the rotation.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove a card if present, returning it.
    ///
    /// Returns `None` if the card is not offered - not an error, callers
    /// check membership first.
    pub fn remove_card(&mut self, card: CardId) -> Option<CardId> {
        let pos = self.cards.iter().position(|&c| c == card)?;
        Some(self.cards.swap_remove(pos))
    }
}

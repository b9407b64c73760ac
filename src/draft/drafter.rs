//! Drafters - per-participant draft state.
//!
//! A `Drafter` tracks one participant's progression: the accumulated
//! pick pool, the pending (not yet applied) choice, and the pick counter
//! for the current round. Chat handles and other application data live
//! in the external layer, keyed by `DrafterId`.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Identifier for a draft participant.
///
/// The external layer supplies these (typically a chat user id); the
/// engine only ever compares them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DrafterId(pub u64);

impl DrafterId {
    /// Create a new drafter ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DrafterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Drafter({})", self.0)
    }
}

/// One participant's state within a draft.
///
/// The pool is append-only; cards enter it only through the draft's
/// resolution step. The pending choice may be overwritten freely before
/// the round resolves (drafters can change their mind).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drafter {
    /// Participant identifier.
    pub id: DrafterId,

    /// Display name.
    pub name: String,

    /// Accumulated picks, in pick order. Each drafter gets its own
    /// freshly allocated pool - never shared between instances.
    pool: Vec<CardId>,

    /// Recorded-but-not-applied choice for the current offer.
    pending: Option<CardId>,

    /// 1-based pick counter for the current round.
    pick_num: u32,
}

impl Drafter {
    /// Create a drafter with an empty pool.
    #[must_use]
    pub fn new(id: DrafterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            pool: Vec::new(),
            pending: None,
            pick_num: 1,
        }
    }

    /// The accumulated pick pool, in pick order.
    #[must_use]
    pub fn pool(&self) -> &[CardId] {
        &self.pool
    }

    /// The pending choice, if one is recorded.
    #[must_use]
    pub fn pending(&self) -> Option<CardId> {
        self.pending
    }

    /// Current 1-based pick number within the round.
    #[must_use]
    pub fn pick_num(&self) -> u32 {
        self.pick_num
    }

    // The methods below are invoked by the Draft during resolution;
    // the Draft guards their preconditions.

    pub(crate) fn set_pending(&mut self, card: CardId) {
        self.pending = Some(card);
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub(crate) fn take_pending(&mut self) -> Option<CardId> {
        self.pending.take()
    }

    pub(crate) fn add_to_pool(&mut self, card: CardId) {
        self.pool.push(card);
    }

    pub(crate) fn advance_pick(&mut self) {
        self.pick_num += 1;
    }

    pub(crate) fn reset_pick_num(&mut self) {
        self.pick_num = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drafter_id_display() {
        assert_eq!(format!("{}", DrafterId::new(42)), "Drafter(42)");
    }

    #[test]
    fn test_new_drafter() {
        let d = Drafter::new(DrafterId::new(1), "Nicolas");

        assert_eq!(d.id, DrafterId::new(1));
        assert_eq!(d.name, "Nicolas");
        assert!(d.pool().is_empty());
        assert!(d.pending().is_none());
        assert_eq!(d.pick_num(), 1);
    }

    #[test]
    fn test_pools_are_independent() {
        // Two drafters must never alias one pool.
        let mut a = Drafter::new(DrafterId::new(1), "A");
        let b = Drafter::new(DrafterId::new(2), "B");

        a.add_to_pool(CardId::new(9));

        assert_eq!(a.pool(), &[CardId::new(9)]);
        assert!(b.pool().is_empty());
    }

    #[test]
    fn test_pending_overwrite() {
        let mut d = Drafter::new(DrafterId::new(1), "A");

        d.set_pending(CardId::new(1));
        d.set_pending(CardId::new(2)); // changed their mind
        assert_eq!(d.pending(), Some(CardId::new(2)));

        assert_eq!(d.take_pending(), Some(CardId::new(2)));
        assert!(d.pending().is_none());
    }

    #[test]
    fn test_pick_counter() {
        let mut d = Drafter::new(DrafterId::new(1), "A");

        d.advance_pick();
        d.advance_pick();
        assert_eq!(d.pick_num(), 3);

        d.reset_pick_num();
        assert_eq!(d.pick_num(), 1);
    }

    #[test]
    fn test_serialization() {
        let mut d = Drafter::new(DrafterId::new(1), "A");
        d.add_to_pool(CardId::new(5));

        let json = serde_json::to_string(&d).unwrap();
        let deserialized: Drafter = serde_json::from_str(&json).unwrap();
        assert_eq!(d, deserialized);
    }
}

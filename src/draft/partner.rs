//! Pick hooks - pluggable per-game rules that grant extra cards.
//!
//! The one rule cube play needs is partner commanders: picking one half
//! of a configured pair grants the other half automatically. The rule
//! set is game configuration, not engine logic, so the draft invokes it
//! through the `PickHook` trait and games swap implementations freely.
//!
//! Name-to-id resolution happens outside the engine: the external layer
//! resolves its `(name, partner_name)` table against the catalog and
//! hands the engine resolved `CardId` pairs.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::CardId;

/// Hook invoked for every applied pick.
///
/// Returns the extra cards the pick grants. Granted cards go straight
/// into the drafter's pool; they are not removed from any booster.
pub trait PickHook {
    /// Extra cards granted when `picked` enters a pool.
    fn companions(&self, picked: CardId) -> SmallVec<[CardId; 2]>;
}

/// Default hook: no pick grants anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBonus;

impl PickHook for NoBonus {
    fn companions(&self, _picked: CardId) -> SmallVec<[CardId; 2]> {
        SmallVec::new()
    }
}

/// Partner-pair lookup table.
///
/// Pairs are symmetric: picking either half grants the other.
///
/// ## Example
///
/// ```
/// use cube_draft::core::CardId;
/// use cube_draft::draft::{PartnerTable, PickHook};
///
/// let krav = CardId::new(1);
/// let regna = CardId::new(2);
/// let table = PartnerTable::new([(krav, regna)]);
///
/// assert_eq!(table.companions(krav).as_slice(), &[regna]);
/// assert_eq!(table.companions(regna).as_slice(), &[krav]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PartnerTable {
    partners: FxHashMap<CardId, CardId>,
}

impl PartnerTable {
    /// Build a table from resolved card pairs.
    #[must_use]
    pub fn new(pairs: impl IntoIterator<Item = (CardId, CardId)>) -> Self {
        let mut partners = FxHashMap::default();
        for (a, b) in pairs {
            partners.insert(a, b);
            partners.insert(b, a);
        }
        Self { partners }
    }

    /// Number of configured pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.partners.len() / 2
    }
}

impl PickHook for PartnerTable {
    fn companions(&self, picked: CardId) -> SmallVec<[CardId; 2]> {
        self.partners.get(&picked).copied().into_iter().collect()
    }
}

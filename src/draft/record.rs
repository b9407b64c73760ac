//! Pick records - the draft's resolution history.
//!
//! Every card that enters a pool is logged: explicit picks, auto-picks
//! of a booster's last card, and partner-rule grants. The log backs the
//! rendering layer ("pick 3 of round 2") and the fairness/conservation
//! tests.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::draft::drafter::DrafterId;

/// How a card entered a drafter's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickKind {
    /// Explicitly chosen through `record_choice`.
    Chosen,
    /// Last card of a booster, taken automatically.
    AutoPick,
    /// Granted by the partner rule alongside another pick.
    Partner,
}

/// One applied pick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRecord {
    /// Who picked.
    pub drafter: DrafterId,

    /// The card that entered the pool.
    pub card: CardId,

    /// Round the pick happened in (1-based).
    pub round: u32,

    /// The drafter's pick number within that round (1-based).
    pub pick: u32,

    /// How the card was obtained.
    pub kind: PickKind,
}

impl PickRecord {
    /// Create a new pick record.
    #[must_use]
    pub fn new(drafter: DrafterId, card: CardId, round: u32, pick: u32, kind: PickKind) -> Self {
        Self {
            drafter,
            card,
            round,
            pick,
            kind,
        }
    }
}

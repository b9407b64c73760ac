//! The draft engine: boosters, drafters, allocation, and the
//! pick-collection state machine.
//!
//! ## Key Types
//!
//! - `Booster`: a shrinking bag of cards rotating around the table
//! - `Drafter`: one participant's pool, pending choice, pick counter
//! - `BoosterAllocation` / `StandardAllocation`: pool-to-reserve policy
//! - `PickHook` / `PartnerTable`: pluggable extra-card rules
//! - `Draft`: the orchestrator - barrier, rotation, rounds, termination

pub mod allocation;
pub mod booster;
pub mod drafter;
pub mod engine;
pub mod partner;
pub mod record;

pub use allocation::{AllocationError, BoosterAllocation, StandardAllocation};
pub use booster::{Booster, BoosterId};
pub use drafter::{Drafter, DrafterId};
pub use engine::{ChoiceOutcome, Draft, DraftConfig, DraftPhase, RejectReason, SetupError};
pub use partner::{NoBonus, PartnerTable, PickHook};
pub use record::{PickKind, PickRecord};

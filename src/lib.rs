//! # cube-draft
//!
//! A booster-draft engine for running physical multiplayer cube-draft
//! sessions. The surrounding app (chat transport, deck persistence,
//! card import, rendering) is an external layer; this crate is the
//! turn-coordination core it drives.
//!
//! ## Design Principles
//!
//! 1. **Typed calls only**: the engine never sees string-encoded
//!    routing. The external layer parses its callbacks and invokes
//!    `Draft::record_choice(drafter_id, card_id)`.
//!
//! 2. **Dependency injection**: the catalog, the allocation policy, and
//!    the partner-rule hook are passed in - no globals, no process-wide
//!    session handle.
//!
//! 3. **Non-blocking coordination**: waiting for the other players is a
//!    return value (`ChoiceOutcome::Waiting`), never a suspended call.
//!    The resolution transition runs to completion inside
//!    `record_choice`; callers serialize access per draft instance.
//!
//! ## Modules
//!
//! - `core`: card records, the catalog, deterministic RNG
//! - `draft`: boosters, drafters, allocation, partner hook, and the
//!   `Draft` state machine

pub mod core;
pub mod draft;

// Re-export commonly used types
pub use crate::core::{Card, CardCatalog, CardId, DraftRng};

pub use crate::draft::{
    AllocationError, Booster, BoosterAllocation, BoosterId, ChoiceOutcome, Draft, DraftConfig,
    DraftPhase, Drafter, DrafterId, NoBonus, PartnerTable, PickHook, PickKind, PickRecord,
    RejectReason, SetupError, StandardAllocation,
};

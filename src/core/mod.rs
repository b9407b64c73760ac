//! Core types: cards, the catalog, and deterministic RNG.
//!
//! Everything here is draft-agnostic: the catalog is populated by the
//! external import layer, and the RNG is injected wherever shuffling
//! happens so drafts stay replayable.

pub mod card;
pub mod catalog;
pub mod rng;

pub use card::{Card, CardId};
pub use catalog::CardCatalog;
pub use rng::DraftRng;

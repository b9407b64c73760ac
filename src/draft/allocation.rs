//! Booster allocation - turning a card pool into a reserve of boosters.
//!
//! Allocation is a policy seam: game configurations may deviate from
//! plain chunking (fixed starting cards, seeded rares), so the draft
//! consumes boosters through the `BoosterAllocation` trait and ships
//! `StandardAllocation` as the default policy.

use thiserror::Error;

use crate::core::{CardId, DraftRng};
use crate::draft::booster::{Booster, BoosterId};
use crate::draft::engine::DraftConfig;

/// Allocation failures. Always surfaced, never silently truncated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// The configured booster size is zero.
    #[error("booster size must be non-zero")]
    ZeroBoosterSize,

    /// The card pool is empty.
    #[error("card pool is empty")]
    EmptyPool,

    /// Not enough cards for the configured rounds and booster size.
    #[error("insufficient cards: need {needed}, pool has {available}")]
    InsufficientCards {
        /// Cards required: `rounds * drafter_count * booster_size`.
        needed: usize,
        /// Cards available in the pool.
        available: usize,
    },

    /// The same card appears twice in the pool.
    #[error("duplicate card in pool: {0}")]
    DuplicateCard(CardId),
}

/// Produces the draft's booster reserve from a card pool.
///
/// Contract: at least `rounds * drafter_count` boosters, each with
/// exactly `booster_size` cards, and no card in more than one booster.
/// The draft validates the reserve size again at `start()`.
pub trait BoosterAllocation {
    /// Allocate boosters for a draft.
    fn allocate(
        &self,
        pool: &[CardId],
        config: &DraftConfig,
        drafter_count: usize,
        rng: &mut DraftRng,
    ) -> Result<Vec<Booster>, AllocationError>;
}

/// Default policy: shuffle the pool, chunk it into fixed-size boosters.
///
/// Produces exactly `rounds * drafter_count` boosters; leftover cards
/// stay out of the draft.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardAllocation;

impl BoosterAllocation for StandardAllocation {
    fn allocate(
        &self,
        pool: &[CardId],
        config: &DraftConfig,
        drafter_count: usize,
        rng: &mut DraftRng,
    ) -> Result<Vec<Booster>, AllocationError> {
        if config.booster_size == 0 {
            return Err(AllocationError::ZeroBoosterSize);
        }
        if pool.is_empty() {
            return Err(AllocationError::EmptyPool);
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for &card in pool {
            if !seen.insert(card) {
                return Err(AllocationError::DuplicateCard(card));
            }
        }

        let booster_count = config.rounds as usize * drafter_count;
        let needed = booster_count * config.booster_size;
        if pool.len() < needed {
            return Err(AllocationError::InsufficientCards {
                needed,
                available: pool.len(),
            });
        }

        let mut shuffled = pool.to_vec();
        rng.shuffle(&mut shuffled);

        let boosters = shuffled
            .chunks_exact(config.booster_size)
            .take(booster_count)
            .enumerate()
            .map(|(i, chunk)| Booster::new(BoosterId::new(i as u32), chunk.iter().copied()))
            .collect();

        Ok(boosters)
    }
}

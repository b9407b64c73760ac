//! The draft state machine.
//!
//! A `Draft` owns the table of drafters, the rotating round queue of
//! boosters, and the reserve for future rounds. It coordinates the
//! simultaneous-pick barrier: choices are recorded one by one, and once
//! every active drafter has one, the resolution transition applies all
//! picks, runs auto-picks, and either rotates the queue, opens a new
//! round, or ends the draft.
//!
//! All mutation happens inside [`Draft::record_choice`], which always
//! returns immediately - "waiting on the other players" is a return
//! value, never a suspended call. A draft instance is shared mutable
//! state; concurrent callers serialize through one lock or actor per
//! draft in the external layer. Separate drafts share nothing.

use std::collections::VecDeque;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::CardId;
use crate::draft::booster::Booster;
use crate::draft::drafter::{Drafter, DrafterId};
use crate::draft::partner::{NoBonus, PickHook};
use crate::draft::record::{PickKind, PickRecord};

/// Draft configuration.
///
/// Defaults match the original table setup: 5 rounds of 9-card boosters,
/// auto-pick of a booster's last card enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Number of rounds (boosters opened per drafter).
    pub rounds: u32,

    /// Cards per booster.
    pub booster_size: usize,

    /// Automatically pick a booster's last remaining card.
    pub auto_pick_last: bool,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            booster_size: 9,
            auto_pick_last: true,
        }
    }
}

impl DraftConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round count.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the booster size.
    #[must_use]
    pub fn with_booster_size(mut self, booster_size: usize) -> Self {
        self.booster_size = booster_size;
        self
    }

    /// Enable or disable auto-picking a booster's last card.
    #[must_use]
    pub fn with_auto_pick_last(mut self, auto_pick_last: bool) -> Self {
        self.auto_pick_last = auto_pick_last;
        self
    }
}

/// Draft lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftPhase {
    /// Accepting drafters and boosters; not yet started.
    Setup,
    /// Rounds in progress.
    InProgress,
    /// Terminal; no further boosters are offered.
    Ended,
}

/// Setup errors. Fatal to the draft instance: discard and recreate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// `start()` called with no drafters at the table.
    #[error("no drafters added")]
    NoDrafters,

    /// `start()` called with an empty booster reserve.
    #[error("no boosters allocated")]
    NoBoosters,

    /// The reserve cannot cover the configured rounds.
    #[error("insufficient boosters: need {needed}, reserve has {available}")]
    InsufficientBoosters {
        /// Boosters required: `rounds * drafter_count`.
        needed: usize,
        /// Boosters in the reserve.
        available: usize,
    },

    /// Setup operation attempted after `start()`.
    #[error("draft already started")]
    AlreadyStarted,

    /// A drafter with this id is already at the table.
    #[error("drafter {0} already added")]
    DuplicateDrafter(DrafterId),
}

/// Why a choice was rejected. Non-fatal: the caller may retry with
/// corrected input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The draft has not been started.
    NotStarted,
    /// The draft already ended.
    DraftOver,
    /// The drafter is not at this table.
    UnknownDrafter,
    /// The card is not in the drafter's current booster.
    CardNotOffered,
}

/// Outcome of [`Draft::record_choice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceOutcome {
    /// Invalid operation; nothing changed.
    Rejected(RejectReason),
    /// Choice recorded; other drafters still have to choose.
    Waiting,
    /// All picks applied and the queue rotated: everyone holds a new
    /// booster from the same round.
    NewBooster,
    /// The round's boosters were exhausted and a fresh round opened.
    NewRound,
    /// The final round finished; the draft is over.
    Ended,
}

/// A booster draft for one table of drafters.
///
/// ## Example
///
/// ```
/// use cube_draft::core::{CardId, DraftRng};
/// use cube_draft::draft::{
///     BoosterAllocation, ChoiceOutcome, Draft, DraftConfig, StandardAllocation,
/// };
/// use cube_draft::draft::DrafterId;
///
/// let pool: Vec<CardId> = (0..8).map(CardId::new).collect();
/// let config = DraftConfig::new().with_rounds(2).with_booster_size(2);
///
/// let mut draft = Draft::new(config);
/// draft.add_drafter(DrafterId::new(1), "Ana").unwrap();
/// draft.add_drafter(DrafterId::new(2), "Ben").unwrap();
///
/// let mut rng = DraftRng::new(42);
/// let boosters = StandardAllocation.allocate(&pool, &config, 2, &mut rng).unwrap();
/// draft.load_boosters(boosters).unwrap();
/// draft.start().unwrap();
///
/// let offer = draft.current_booster_for(DrafterId::new(1)).unwrap();
/// let card = offer.cards()[0];
/// assert_eq!(draft.record_choice(DrafterId::new(1), card), ChoiceOutcome::Waiting);
/// ```
pub struct Draft {
    config: DraftConfig,

    /// Seat order; seat i holds the booster at round-queue index i.
    drafters: Vec<Drafter>,

    /// Boosters of the current round, one slot per drafter.
    round_queue: VecDeque<Booster>,

    /// Boosters for future rounds. Popped LIFO at round turnover.
    reserve: Vec<Booster>,

    /// Current round, 1-based. 0 until started.
    round: u32,

    /// Rotation step: +1 passes toward higher seats, -1 the opposite.
    /// Flips every round.
    direction: i8,

    phase: DraftPhase,

    hook: Box<dyn PickHook + Send>,

    history: Vector<PickRecord>,
}

impl Draft {
    /// Create a draft in the `Setup` phase.
    #[must_use]
    pub fn new(config: DraftConfig) -> Self {
        Self {
            config,
            drafters: Vec::new(),
            round_queue: VecDeque::new(),
            reserve: Vec::new(),
            round: 0,
            direction: 1,
            phase: DraftPhase::Setup,
            hook: Box::new(NoBonus),
            history: Vector::new(),
        }
    }

    /// Install a pick hook (e.g. a partner table). Replaces the default
    /// no-bonus hook.
    pub fn set_pick_hook(&mut self, hook: Box<dyn PickHook + Send>) {
        self.hook = hook;
    }

    /// Add a drafter to the table. Setup phase only.
    pub fn add_drafter(
        &mut self,
        id: DrafterId,
        name: impl Into<String>,
    ) -> Result<(), SetupError> {
        if self.phase != DraftPhase::Setup {
            return Err(SetupError::AlreadyStarted);
        }
        if self.drafters.iter().any(|d| d.id == id) {
            return Err(SetupError::DuplicateDrafter(id));
        }
        self.drafters.push(Drafter::new(id, name));
        Ok(())
    }

    /// Load the booster reserve produced by the allocation policy.
    /// Setup phase only; appends to any previously loaded boosters.
    pub fn load_boosters(&mut self, boosters: Vec<Booster>) -> Result<(), SetupError> {
        if self.phase != DraftPhase::Setup {
            return Err(SetupError::AlreadyStarted);
        }
        self.reserve.extend(boosters);
        Ok(())
    }

    /// Start the draft: materialize round 1 and begin accepting choices.
    ///
    /// Errors are configuration errors, fatal to this instance - the
    /// caller must discard the draft and rebuild rather than retry.
    pub fn start(&mut self) -> Result<(), SetupError> {
        if self.phase != DraftPhase::Setup {
            return Err(SetupError::AlreadyStarted);
        }
        if self.drafters.is_empty() {
            return Err(SetupError::NoDrafters);
        }
        if self.reserve.is_empty() {
            return Err(SetupError::NoBoosters);
        }

        let needed = self.config.rounds as usize * self.drafters.len();
        if self.reserve.len() < needed {
            return Err(SetupError::InsufficientBoosters {
                needed,
                available: self.reserve.len(),
            });
        }

        self.round = 1;
        self.direction = 1;
        for drafter in &mut self.drafters {
            drafter.reset_pick_num();
        }
        self.fill_round_queue();
        self.phase = DraftPhase::InProgress;
        Ok(())
    }

    /// Record a drafter's choice.
    ///
    /// Rejections never mutate state. An accepted choice either waits on
    /// the barrier or triggers the full resolution transition; the
    /// outcome tells the caller whether to re-render in place or
    /// broadcast the advanced state.
    pub fn record_choice(&mut self, drafter: DrafterId, card: CardId) -> ChoiceOutcome {
        match self.phase {
            DraftPhase::Setup => return ChoiceOutcome::Rejected(RejectReason::NotStarted),
            DraftPhase::Ended => return ChoiceOutcome::Rejected(RejectReason::DraftOver),
            DraftPhase::InProgress => {}
        }

        let Some(seat) = self.seat_of(drafter) else {
            return ChoiceOutcome::Rejected(RejectReason::UnknownDrafter);
        };

        let offered = self
            .round_queue
            .get(seat)
            .is_some_and(|booster| booster.contains(card));
        if !offered {
            return ChoiceOutcome::Rejected(RejectReason::CardNotOffered);
        }

        // Overwrites any earlier pending choice: drafters may change
        // their mind until the round resolves.
        self.drafters[seat].set_pending(card);

        if !self.barrier_satisfied() {
            return ChoiceOutcome::Waiting;
        }

        self.resolve()
    }

    // === Queries ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    /// The configuration this draft runs under.
    #[must_use]
    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    /// Current round, 1-based. 0 before `start()`.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Configured round count.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.config.rounds
    }

    /// Current rotation step (+1 or -1).
    #[must_use]
    pub fn direction(&self) -> i8 {
        self.direction
    }

    /// Number of drafters at the table.
    #[must_use]
    pub fn drafter_count(&self) -> usize {
        self.drafters.len()
    }

    /// Drafters in seat order.
    #[must_use]
    pub fn drafters(&self) -> &[Drafter] {
        &self.drafters
    }

    /// Look up a drafter by id.
    #[must_use]
    pub fn drafter(&self, id: DrafterId) -> Option<&Drafter> {
        self.seat_of(id).map(|seat| &self.drafters[seat])
    }

    /// The booster currently offered to a drafter.
    ///
    /// `None` for unknown drafters, after the draft ends, or when the
    /// round queue has no slot for this seat.
    #[must_use]
    pub fn current_booster_for(&self, id: DrafterId) -> Option<&Booster> {
        let seat = self.seat_of(id)?;
        self.round_queue.get(seat)
    }

    /// A drafter's accumulated pool.
    #[must_use]
    pub fn pool_for(&self, id: DrafterId) -> Option<&[CardId]> {
        self.drafter(id).map(Drafter::pool)
    }

    /// A drafter's 1-based pick number within the current round.
    #[must_use]
    pub fn pick_count_for(&self, id: DrafterId) -> Option<u32> {
        self.drafter(id).map(Drafter::pick_num)
    }

    /// A drafter's pending (recorded, unapplied) choice.
    #[must_use]
    pub fn pending_for(&self, id: DrafterId) -> Option<CardId> {
        self.drafter(id).and_then(Drafter::pending)
    }

    /// The full pick history, in application order. O(1) to clone.
    #[must_use]
    pub fn history(&self) -> &Vector<PickRecord> {
        &self.history
    }

    /// Boosters left in the reserve for future rounds.
    #[must_use]
    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }

    // === Internals ===

    fn seat_of(&self, id: DrafterId) -> Option<usize> {
        self.drafters.iter().position(|d| d.id == id)
    }

    /// A drafter is active while their current booster still offers
    /// cards. With uniform allocation all boosters empty in the same
    /// resolution, so this normally means every drafter.
    fn is_active(&self, seat: usize) -> bool {
        self.round_queue
            .get(seat)
            .is_some_and(|booster| !booster.is_spent())
    }

    fn barrier_satisfied(&self) -> bool {
        (0..self.drafters.len())
            .filter(|&seat| self.is_active(seat))
            .all(|seat| self.drafters[seat].pending().is_some())
    }

    /// One slot per drafter, popped LIFO from the reserve. `start()`
    /// validated the reserve covers every round, so the pops cannot
    /// come up short.
    fn fill_round_queue(&mut self) {
        self.round_queue.clear();
        for _ in 0..self.drafters.len() {
            let booster = self
                .reserve
                .pop()
                .expect("reserve validated at start() to cover all rounds");
            self.round_queue.push_back(booster);
        }
    }

    /// The simultaneous resolution transition. Runs to completion; no
    /// partial state is observable from outside.
    fn resolve(&mut self) -> ChoiceOutcome {
        // 1. Apply every pending pick, in seat order.
        for seat in 0..self.drafters.len() {
            if let Some(card) = self.drafters[seat].take_pending() {
                self.apply_pick(seat, card, PickKind::Chosen);
            }
        }

        // 2. Auto-pick: a booster down to its last card is emptied on
        // the holder's behalf, in seat order, before any rotation.
        if self.config.auto_pick_last {
            for seat in 0..self.drafters.len() {
                let last = self
                    .round_queue
                    .get(seat)
                    .filter(|booster| booster.len() == 1)
                    .map(|booster| booster.cards()[0]);
                if let Some(card) = last {
                    self.apply_pick(seat, card, PickKind::AutoPick);
                }
            }
        }

        for drafter in &mut self.drafters {
            drafter.clear_pending();
        }

        // 3. Cards left anywhere in the queue: pass boosters along.
        if self.round_queue.iter().any(|booster| !booster.is_spent()) {
            self.rotate();
            return ChoiceOutcome::NewBooster;
        }

        // 4. Round over.
        if self.round >= self.config.rounds {
            self.round_queue.clear();
            self.phase = DraftPhase::Ended;
            return ChoiceOutcome::Ended;
        }

        self.round += 1;
        self.direction = -self.direction;
        for drafter in &mut self.drafters {
            drafter.reset_pick_num();
        }
        self.fill_round_queue();
        ChoiceOutcome::NewRound
    }

    /// Move a card from the seat's booster into the pool, fire the pick
    /// hook, log the record, advance the pick counter.
    fn apply_pick(&mut self, seat: usize, card: CardId, kind: PickKind) {
        let removed = self.round_queue[seat].remove_card(card);
        debug_assert_eq!(removed, Some(card), "pick guarded by record_choice");

        let drafter = &mut self.drafters[seat];
        drafter.add_to_pool(card);
        let pick = drafter.pick_num();
        let id = drafter.id;
        self.history
            .push_back(PickRecord::new(id, card, self.round, pick, kind));

        // Partner-style grants: straight to the pool, logged under the
        // same pick number. Grants never grant further cards.
        for extra in self.hook.companions(card) {
            self.drafters[seat].add_to_pool(extra);
            self.history
                .push_back(PickRecord::new(id, extra, self.round, pick, PickKind::Partner));
        }

        self.drafters[seat].advance_pick();
    }

    /// Stamp provenance and rotate the queue one step in the current
    /// direction: the booster at seat i moves to seat i + direction.
    fn rotate(&mut self) {
        for (seat, booster) in self.round_queue.iter_mut().enumerate() {
            booster.passed_by = Some(self.drafters[seat].id);
        }
        if self.direction >= 0 {
            self.round_queue.rotate_right(1);
        } else {
            self.round_queue.rotate_left(1);
        }
    }
}

impl std::fmt::Debug for Draft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Draft")
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("direction", &self.direction)
            .field("drafters", &self.drafters.len())
            .field("round_queue", &self.round_queue.len())
            .field("reserve", &self.reserve.len())
            .finish()
    }
}

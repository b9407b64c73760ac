//! Property tests over randomized table sizes and configurations.

use proptest::prelude::*;

use cube_draft::{
    BoosterAllocation, CardId, ChoiceOutcome, Draft, DraftConfig, DraftPhase, DraftRng,
    DrafterId, RejectReason, StandardAllocation,
};

fn started_draft(n: usize, config: DraftConfig, seed: u64) -> Draft {
    let pool: Vec<CardId> = (0..(config.rounds as usize * n * config.booster_size) as u32)
        .map(CardId::new)
        .collect();

    let mut draft = Draft::new(config);
    for i in 1..=n {
        draft
            .add_drafter(DrafterId::new(i as u64), format!("D{}", i))
            .unwrap();
    }

    let mut rng = DraftRng::new(seed);
    let boosters = StandardAllocation
        .allocate(&pool, &config, n, &mut rng)
        .unwrap();
    draft.load_boosters(boosters).unwrap();
    draft.start().unwrap();
    draft
}

fn pick_first_for_all(draft: &mut Draft) -> ChoiceOutcome {
    let ids: Vec<DrafterId> = draft.drafters().iter().map(|d| d.id).collect();
    let mut last = ChoiceOutcome::Waiting;
    for id in ids {
        let card = draft.current_booster_for(id).unwrap().cards()[0];
        last = draft.record_choice(id, card);
    }
    last
}

proptest! {
    /// Every draft terminates after exactly the configured round count
    /// with all cards conserved: each allocated card in exactly one
    /// pool, history accounting for every pick.
    #[test]
    fn prop_termination_and_conservation(
        n in 2usize..=5,
        rounds in 1u32..=3,
        booster_size in 1usize..=4,
        auto_pick in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let config = DraftConfig::new()
            .with_rounds(rounds)
            .with_booster_size(booster_size)
            .with_auto_pick_last(auto_pick);
        let mut draft = started_draft(n, config, seed);

        let mut new_rounds = 0u32;
        let max_resolutions = rounds as usize * booster_size + 1;
        for _ in 0..max_resolutions {
            match pick_first_for_all(&mut draft) {
                ChoiceOutcome::NewBooster => {}
                ChoiceOutcome::NewRound => new_rounds += 1,
                ChoiceOutcome::Ended => break,
                other => panic!("unexpected outcome {:?}", other),
            }
        }

        prop_assert_eq!(draft.phase(), DraftPhase::Ended);
        prop_assert_eq!(draft.round(), rounds);
        prop_assert_eq!(new_rounds, rounds - 1);

        let total_cards = n * rounds as usize * booster_size;
        let pool_sum: usize = (1..=n)
            .map(|i| draft.pool_for(DrafterId::new(i as u64)).unwrap().len())
            .sum();
        prop_assert_eq!(pool_sum, total_cards);
        prop_assert_eq!(draft.history().len(), total_cards);

        let mut seen = std::collections::HashSet::new();
        for i in 1..=n {
            for &card in draft.pool_for(DrafterId::new(i as u64)).unwrap() {
                prop_assert!(seen.insert(card), "card {} in two pools", card);
            }
        }
    }

    /// Invalid operations never change observable state.
    #[test]
    fn prop_rejection_is_inert(
        n in 2usize..=4,
        seed in any::<u64>(),
        bogus_card in 10_000u32..20_000,
        bogus_drafter in 1_000u64..2_000,
    ) {
        let config = DraftConfig::new().with_rounds(1).with_booster_size(3);
        let mut draft = started_draft(n, config, seed);

        let snapshot = |draft: &Draft| {
            let pools: Vec<Vec<CardId>> = (1..=n)
                .map(|i| draft.pool_for(DrafterId::new(i as u64)).unwrap().to_vec())
                .collect();
            let offers: Vec<Vec<CardId>> = (1..=n)
                .map(|i| {
                    draft
                        .current_booster_for(DrafterId::new(i as u64))
                        .unwrap()
                        .cards()
                        .to_vec()
                })
                .collect();
            (pools, offers, draft.history().len(), draft.round())
        };

        let before = snapshot(&draft);

        prop_assert_eq!(
            draft.record_choice(DrafterId::new(1), CardId::new(bogus_card)),
            ChoiceOutcome::Rejected(RejectReason::CardNotOffered)
        );
        prop_assert_eq!(
            draft.record_choice(DrafterId::new(bogus_drafter), CardId::new(0)),
            ChoiceOutcome::Rejected(RejectReason::UnknownDrafter)
        );

        prop_assert_eq!(snapshot(&draft), before);
    }

    /// Rotation fairness: with an even round count, pass events split
    /// evenly between the two directions.
    #[test]
    fn prop_fairness_even_rounds(
        n in 2usize..=4,
        half_rounds in 1u32..=2,
        booster_size in 2usize..=4,
        seed in any::<u64>(),
    ) {
        let rounds = half_rounds * 2;
        let config = DraftConfig::new()
            .with_rounds(rounds)
            .with_booster_size(booster_size)
            .with_auto_pick_last(false);
        let mut draft = started_draft(n, config, seed);

        let mut passes_up = 0u32;
        let mut passes_down = 0u32;
        loop {
            let direction = draft.direction();
            match pick_first_for_all(&mut draft) {
                ChoiceOutcome::NewBooster => {
                    if direction > 0 {
                        passes_up += 1;
                    } else {
                        passes_down += 1;
                    }
                }
                ChoiceOutcome::NewRound => {}
                ChoiceOutcome::Ended => break,
                other => panic!("unexpected outcome {:?}", other),
            }
        }

        prop_assert_eq!(passes_up, passes_down);
        prop_assert_eq!(passes_up, half_rounds * (booster_size as u32 - 1));
    }

    /// The barrier property: until the last active drafter records a
    /// choice, no pool grows.
    #[test]
    fn prop_barrier_blocks_partial_resolution(
        n in 2usize..=5,
        seed in any::<u64>(),
    ) {
        let config = DraftConfig::new().with_rounds(1).with_booster_size(2);
        let mut draft = started_draft(n, config, seed);

        for i in 1..n {
            let id = DrafterId::new(i as u64);
            let card = draft.current_booster_for(id).unwrap().cards()[0];
            prop_assert_eq!(draft.record_choice(id, card), ChoiceOutcome::Waiting);

            let pool_sum: usize = (1..=n)
                .map(|j| draft.pool_for(DrafterId::new(j as u64)).unwrap().len())
                .sum();
            prop_assert_eq!(pool_sum, 0);
        }

        let last = DrafterId::new(n as u64);
        let card = draft.current_booster_for(last).unwrap().cards()[0];
        let outcome = draft.record_choice(last, card);
        prop_assert_ne!(outcome, ChoiceOutcome::Waiting);
    }
}

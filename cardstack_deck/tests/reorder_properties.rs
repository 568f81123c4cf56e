// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests: every sequence of reorders yields a permutation.

use cardstack_deck::Deck;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
enum Op {
    ToFront(u32),
    ToBack(u32),
    FirstToBack,
    LastToFront,
    Shuffle(u64),
}

fn op() -> impl Strategy<Value = Op> {
    // Ids up to 40 so some ops name absent items.
    prop_oneof![
        (0_u32..40).prop_map(Op::ToFront),
        (0_u32..40).prop_map(Op::ToBack),
        Just(Op::FirstToBack),
        Just(Op::LastToFront),
        any::<u64>().prop_map(Op::Shuffle),
    ]
}

fn apply(deck: &mut Deck<u32>, op: &Op) {
    match *op {
        Op::ToFront(id) => {
            deck.move_to_front(&id);
        }
        Op::ToBack(id) => {
            deck.move_to_back(&id);
        }
        Op::FirstToBack => {
            deck.move_first_to_back();
        }
        Op::LastToFront => {
            deck.move_last_to_front();
        }
        Op::Shuffle(seed) => {
            deck.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
        }
    }
}

proptest! {
    #[test]
    fn reorders_are_permutations(len in 1_u32..30, ops in prop::collection::vec(op(), 0..64)) {
        let original: Vec<u32> = (0..len).collect();
        let mut deck = Deck::new("numbers", original.clone());
        for op in &ops {
            apply(&mut deck, op);
        }
        let mut after = deck.items().to_vec();
        after.sort_unstable();
        prop_assert_eq!(after, original);
    }

    #[test]
    fn moving_first_to_front_is_idempotent(len in 1_u32..30, seed in any::<u64>()) {
        let mut deck = Deck::new("numbers", (0..len).collect());
        deck.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
        let before = deck.items().to_vec();
        let first = before[0];
        prop_assert!(!deck.move_to_front(&first));
        prop_assert_eq!(deck.items(), before.as_slice());
    }

    #[test]
    fn moving_last_to_back_is_idempotent(len in 1_u32..30, seed in any::<u64>()) {
        let mut deck = Deck::new("numbers", (0..len).collect());
        deck.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
        let before = deck.items().to_vec();
        let last = before[before.len() - 1];
        prop_assert!(!deck.move_to_back(&last));
        prop_assert_eq!(deck.items(), before.as_slice());
    }

    #[test]
    fn absent_items_never_change_order(len in 0_u32..30, missing in 30_u32..100) {
        let mut deck = Deck::new("numbers", (0..len).collect());
        let before = deck.items().to_vec();
        prop_assert!(!deck.move_to_front(&missing));
        prop_assert!(!deck.move_to_back(&missing));
        prop_assert_eq!(deck.items(), before.as_slice());
    }
}

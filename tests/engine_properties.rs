//! Property-based invariant tests for the sort engines.
//!
//! For every algorithm, any input in range and both directions:
//!
//! 1. Every snapshot is a permutation of the input.
//! 2. The last snapshot (or the input, when no step is emitted) is ordered.
//! 3. Every highlighted index is in bounds, with at most two compared.
//! 4. Snapshot length never changes.
//! 5. Two runs over the same input emit identical steps.
//! 6. Quick and merge sort never report sorted indices.
//! 7. Inputs of length 0 or 1 emit no steps.

use proptest::prelude::*;
use sortviz::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn input_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=100, 0..=60)
}

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn sorted_copy(values: &[u32]) -> Vec<u32> {
    let mut out = values.to_vec();
    out.sort_unstable();
    out
}

// ═════════════════════════════════════════════════════════════════════════
// 1-4. Permutation, ordering, bounds, constant length
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn steps_are_permutations_and_end_ordered(
        input in input_strategy(),
        algorithm in algorithm_strategy(),
        ascending in any::<bool>(),
    ) {
        let direction = Direction::from(ascending);
        let multiset = sorted_copy(&input);
        let mut last = input.clone();

        for step in sort_steps(algorithm, input.clone(), ascending) {
            prop_assert_eq!(step.array.len(), input.len());
            prop_assert_eq!(sorted_copy(&step.array), multiset.clone());
            prop_assert!(step.comparing.len() <= 2, "{:?}", step.comparing);
            prop_assert!(step.comparing.iter().all(|&i| i < input.len()));
            prop_assert!(step.sorted.iter().all(|&i| i < input.len()));
            last = step.array;
        }

        prop_assert!(direction.is_ordered(&last), "{} {}: {:?}", algorithm, direction, last);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn repeated_runs_are_identical(
        input in input_strategy(),
        algorithm in algorithm_strategy(),
        ascending in any::<bool>(),
    ) {
        let first: Vec<Step> = sort_steps(algorithm, input.clone(), ascending).collect();
        let second: Vec<Step> = sort_steps(algorithm, input, ascending).collect();
        prop_assert_eq!(first, second);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Quick and merge never report sorted indices
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn quick_and_merge_leave_sorted_empty(
        input in input_strategy(),
        ascending in any::<bool>(),
    ) {
        for algorithm in [Algorithm::Quick, Algorithm::Merge] {
            for step in sort_steps(algorithm, input.clone(), ascending) {
                prop_assert!(step.sorted.is_empty());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Trivial inputs
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn trivial_inputs_emit_no_steps() {
    for algorithm in Algorithm::ALL {
        for ascending in [true, false] {
            assert_eq!(sort_steps(algorithm, vec![], ascending).count(), 0);
            assert_eq!(sort_steps(algorithm, vec![42], ascending).count(), 0);
        }
    }
}

#[test]
fn full_size_random_arrays_sort() {
    for algorithm in Algorithm::ALL {
        let input = generate(200);
        let last = sort_steps(algorithm, input.clone(), true)
            .last()
            .map(|s| s.array)
            .unwrap_or(input);
        assert!(Direction::Ascending.is_ordered(&last), "{algorithm}");
    }
}

#[test]
fn engines_keep_yielding_none_after_exhaustion() {
    for algorithm in Algorithm::ALL {
        let mut steps = sort_steps(algorithm, vec![3, 1, 2], true);
        while steps.next().is_some() {}
        assert!(steps.next().is_none());
        assert!(steps.next().is_none());
    }
}

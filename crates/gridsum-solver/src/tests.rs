//! Solver behavior on fixtures and generated inputs.

use gridsum_core::{Dataset, SolveResult, Target};
use gridsum_test::datasets;
use proptest::prelude::*;

use crate::termination::{CheckCountTermination, TimeTermination};
use crate::{BruteForceSolver, HashTableSolver, TwoSumSolver};

#[test]
fn test_brute_force_fixtures() {
    for fixture in datasets::all() {
        let result = BruteForceSolver.solve(&fixture.dataset, fixture.target);
        assert_eq!(
            result.indices(),
            fixture.expected,
            "dataset {:?}",
            fixture.dataset
        );
        assert!(result.is_valid_for(&fixture.dataset, fixture.target));
    }
}

#[test]
fn test_hash_table_fixtures_agree_on_status() {
    for fixture in datasets::all() {
        let result = HashTableSolver.solve(&fixture.dataset, fixture.target);
        assert_eq!(result.is_found(), fixture.expected.is_some());
        assert!(result.is_valid_for(&fixture.dataset, fixture.target));
    }
}

#[test]
fn test_surplus_regression_not_found() {
    let fixture = datasets::surplus_regression();
    assert_eq!(
        HashTableSolver.solve(&fixture.dataset, fixture.target),
        SolveResult::NotFound
    );
    assert_eq!(
        BruteForceSolver.solve(&fixture.dataset, fixture.target),
        SolveResult::NotFound
    );
}

#[test]
fn test_classic_values() {
    let fixture = datasets::classic();
    for result in [
        BruteForceSolver.solve(&fixture.dataset, fixture.target),
        HashTableSolver.solve(&fixture.dataset, fixture.target),
    ] {
        let pair = result.pair().expect("pair found");
        assert_eq!(pair.indices(), (0, 1));
        assert_eq!(pair.values(), (2, 7));
    }
}

#[test]
fn test_two_elements_found_at_start() {
    let fixture = datasets::two_elements();
    assert_eq!(
        BruteForceSolver.solve(&fixture.dataset, fixture.target).indices(),
        Some((0, 1))
    );
    assert_eq!(
        HashTableSolver.solve(&fixture.dataset, fixture.target).indices(),
        Some((0, 1))
    );
}

#[test]
fn test_duplicates_diverge_but_both_valid() {
    let fixture = datasets::duplicates();
    let brute = BruteForceSolver.solve(&fixture.dataset, fixture.target);
    let hashed = HashTableSolver.solve(&fixture.dataset, fixture.target);

    assert_eq!(brute.indices(), Some((0, 2)));
    assert_eq!(hashed.indices(), Some((1, 2)));
    assert!(brute.is_valid_for(&fixture.dataset, fixture.target));
    assert!(hashed.is_valid_for(&fixture.dataset, fixture.target));
}

#[test]
fn test_single_element_cannot_pair_with_itself() {
    let dataset = Dataset::new(vec![5]);
    assert_eq!(BruteForceSolver.solve(&dataset, 10), SolveResult::NotFound);
    assert_eq!(HashTableSolver.solve(&dataset, 10), SolveResult::NotFound);
}

#[test]
fn test_brute_force_interrupted() {
    let dataset = datasets::worst_case(100);
    let term = CheckCountTermination::new(10);

    let interrupted = BruteForceSolver
        .solve_with(&dataset, 0, &term)
        .unwrap_err();
    assert_eq!(interrupted.checks, 10);
    assert_eq!(interrupted.limit, None);
}

#[test]
fn test_hash_table_interrupted_on_first_poll() {
    let dataset = datasets::worst_case(10);
    let term = TimeTermination::millis(0);

    let interrupted = HashTableSolver.solve_with(&dataset, 0, &term).unwrap_err();
    assert_eq!(interrupted.checks, 1);
}

#[test]
fn test_empty_dataset_never_polls() {
    let term = TimeTermination::millis(0);
    let empty = Dataset::default();

    assert_eq!(
        BruteForceSolver.solve_with(&empty, 0, &term),
        Ok(SolveResult::NotFound)
    );
    assert_eq!(
        HashTableSolver.solve_with(&empty, 0, &term),
        Ok(SolveResult::NotFound)
    );
}

#[test]
fn test_complexity_labels() {
    assert_eq!(BruteForceSolver.complexity().time, "O(n²)");
    assert_eq!(HashTableSolver.complexity().space, "O(n)");
    assert_ne!(BruteForceSolver.name(), HashTableSolver.name());
}

fn readings() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..64)
}

fn distinct_readings() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::hash_set(-500i64..500, 0..64)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn brute_force_pair_sums_to_target(values in readings(), target in -100i64..100) {
        let dataset = Dataset::new(values);
        if let Some(pair) = BruteForceSolver.solve(&dataset, target).pair() {
            prop_assert!(pair.first_index < pair.second_index);
            prop_assert_eq!(
                dataset.values()[pair.first_index] + dataset.values()[pair.second_index],
                target
            );
        }
    }

    #[test]
    fn brute_force_returns_first_pair(values in readings(), target in -100i64..100) {
        let dataset = Dataset::new(values);
        let expected = first_pair(dataset.values(), target);
        prop_assert_eq!(BruteForceSolver.solve(&dataset, target).indices(), expected);
    }

    #[test]
    fn solvers_agree_on_status(values in readings(), target in -100i64..100) {
        let dataset = Dataset::new(values);
        let brute = BruteForceSolver.solve(&dataset, target);
        let hashed = HashTableSolver.solve(&dataset, target);

        prop_assert_eq!(brute.is_found(), hashed.is_found());
        prop_assert!(hashed.is_valid_for(&dataset, target));
    }

    #[test]
    fn solvers_agree_on_extreme_values(
        values in prop::collection::vec(any::<i64>(), 0..16),
        target in any::<i64>(),
    ) {
        let dataset = Dataset::new(values);
        let brute = BruteForceSolver.solve(&dataset, target);
        let hashed = HashTableSolver.solve(&dataset, target);

        prop_assert_eq!(brute.is_found(), hashed.is_found());
        prop_assert!(brute.is_valid_for(&dataset, target));
        prop_assert!(hashed.is_valid_for(&dataset, target));
    }

    #[test]
    fn repeated_solves_are_identical(values in distinct_readings(), target in -1000i64..1000) {
        let dataset = Dataset::new(values);
        prop_assert_eq!(
            BruteForceSolver.solve(&dataset, target),
            BruteForceSolver.solve(&dataset, target)
        );
        prop_assert_eq!(
            HashTableSolver.solve(&dataset, target),
            HashTableSolver.solve(&dataset, target)
        );
    }

    #[test]
    fn hash_table_finds_earliest_completion(values in readings(), target in -100i64..100) {
        let dataset = Dataset::new(values);
        let expected_second = earliest_completion(dataset.values(), target);
        let actual_second = HashTableSolver
            .solve(&dataset, target)
            .pair()
            .map(|pair| pair.second_index);
        prop_assert_eq!(actual_second, expected_second);
    }
}

fn first_pair(values: &[i64], target: Target) -> Option<(usize, usize)> {
    (0..values.len())
        .flat_map(|i| (i + 1..values.len()).map(move |j| (i, j)))
        .find(|&(i, j)| values[i] + values[j] == target)
}

fn earliest_completion(values: &[i64], target: Target) -> Option<usize> {
    (0..values.len()).find(|&j| (0..j).any(|i| values[i] + values[j] == target))
}

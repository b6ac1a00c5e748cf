use combopt_algorithms::knapsack::{solve_knapsack, solve_knapsack_greedy};
use combopt_challenges::knapsack::Item;
use proptest::prelude::*;

fn items_strategy() -> impl Strategy<Value = Vec<Item<usize>>> {
    prop::collection::vec((0u32..50, 0u32..200), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            // Weights with one decimal, values integral
            .map(|(i, (v, w))| Item::new(v as f64, w as f64 / 10.0, i))
            .collect()
    })
}

fn total_weight(items: &[Item<usize>]) -> f64 {
    items.iter().map(|item| item.weight).sum()
}

fn is_subsequence(subset: &[Item<usize>], items: &[Item<usize>]) -> bool {
    let mut rest = items.iter();
    subset.iter().all(|s| rest.any(|item| item == s))
}

proptest! {
    #[test]
    fn strategies_agree_on_value(items in items_strategy(), capacity in 0u32..300) {
        let capacity = capacity as f64 / 10.0;
        let (memo_value, memo_items) = solve_knapsack(&items, capacity, true).unwrap();
        let (iter_value, iter_items) = solve_knapsack(&items, capacity, false).unwrap();
        prop_assert_eq!(memo_value, iter_value);
        prop_assert!(total_weight(&memo_items) <= capacity + 1e-9);
        prop_assert!(total_weight(&iter_items) <= capacity + 1e-9);
    }

    #[test]
    fn subset_value_matches_total(items in items_strategy(), capacity in 0u32..300) {
        let capacity = capacity as f64 / 10.0;
        for recursive in [true, false] {
            let (total_value, subset) = solve_knapsack(&items, capacity, recursive).unwrap();
            let subset_value: f64 = subset.iter().map(|item| item.value).sum();
            prop_assert_eq!(total_value, subset_value);
        }
    }

    #[test]
    fn subsets_come_from_input(items in items_strategy(), capacity in 0u32..300) {
        let capacity = capacity as f64 / 10.0;
        let (_, memo_items) = solve_knapsack(&items, capacity, true).unwrap();
        let (_, iter_items) = solve_knapsack(&items, capacity, false).unwrap();
        let (_, greedy_items) = solve_knapsack_greedy(&items, capacity).unwrap();
        prop_assert!(is_subsequence(&memo_items, &items));
        prop_assert!(is_subsequence(&iter_items, &items));
        prop_assert!(is_subsequence(&greedy_items, &items));
    }

    #[test]
    fn capacity_is_monotone(items in items_strategy(), capacity in 0u32..300, extra in 0u32..50) {
        let low = capacity as f64 / 10.0;
        let high = (capacity + extra) as f64 / 10.0;
        let (low_value, _) = solve_knapsack(&items, low, false).unwrap();
        let (high_value, _) = solve_knapsack(&items, high, false).unwrap();
        prop_assert!(low_value <= high_value);
    }

    #[test]
    fn greedy_never_beats_exact(items in items_strategy(), capacity in 0u32..300) {
        let capacity = capacity as f64 / 10.0;
        let (greedy_value, greedy_items) = solve_knapsack_greedy(&items, capacity).unwrap();
        let (exact_value, _) = solve_knapsack(&items, capacity, false).unwrap();
        prop_assert!(greedy_value <= exact_value);
        prop_assert!(total_weight(&greedy_items) <= capacity + 1e-9);
    }

    #[test]
    fn repeated_runs_are_identical(items in items_strategy(), capacity in 0u32..300) {
        let capacity = capacity as f64 / 10.0;
        for recursive in [true, false] {
            prop_assert_eq!(
                solve_knapsack(&items, capacity, recursive).unwrap(),
                solve_knapsack(&items, capacity, recursive).unwrap()
            );
        }
    }
}

use combopt_algorithms::knapsack::*;
use combopt_algorithms::Error;
use combopt_challenges::knapsack::{Challenge, Item, Track};
use serde_json::json;

fn example_items() -> Vec<Item<usize>> {
    vec![
        Item::new(4.0, 12.0, 0),
        Item::new(2.0, 1.0, 1),
        Item::new(6.0, 4.0, 2),
        Item::new(1.0, 1.0, 3),
        Item::new(2.0, 2.0, 4),
    ]
}

fn xkcd_items() -> Vec<Item<usize>> {
    [2.15, 2.75, 3.35, 3.55, 4.2, 5.8, 2.15, 2.75, 3.35, 3.55, 4.2, 5.8]
        .iter()
        .enumerate()
        .map(|(i, &w)| Item::new(w, w, i))
        .collect()
}

#[test]
fn test_memoized_example() {
    let (total_value, items) = solve_knapsack(&example_items(), 15.0, true).unwrap();
    assert_eq!(total_value, 11.0);
    assert_eq!(items, example_items()[1..].to_vec());
}

#[test]
fn test_iterative_example() {
    let (total_value, items) = solve_knapsack(&example_items(), 15.0, false).unwrap();
    assert_eq!(total_value, 11.0);
    assert_eq!(items, example_items()[1..].to_vec());
}

#[test]
fn test_greedy_example() {
    let (total_value, items) = solve_knapsack_greedy(&example_items(), 15.0).unwrap();
    assert_eq!(total_value, 7.0);
    let ids: Vec<usize> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![0, 1, 3]);
}

#[test]
fn test_fractional_weights() {
    // https://xkcd.com/287/
    let items = xkcd_items();
    for recursive in [true, false] {
        let (total_value, subset) = solve_knapsack(&items, 15.05, recursive).unwrap();
        assert!((total_value - 15.05).abs() < 1e-9);
        let total_weight: f64 = subset.iter().map(|item| item.weight).sum();
        assert!((total_weight - 15.05).abs() < 1e-9);
    }
}

#[test]
fn test_integral_table() {
    let items: Vec<Item<usize>> = [1.0, 3.0, 3.0, 5.0, 2.0, 1.0, 1.0, 3.0, 3.0, 5.0, 2.0, 1.0]
        .iter()
        .enumerate()
        .map(|(i, &w)| Item::new(w, w, i))
        .collect();
    let solver = KnapsackSolver::default();
    for strategy in [Strategy::Memoized, Strategy::Iterative] {
        let solution = solver.solve(&items, 10.0, strategy).unwrap();
        assert_eq!(solution.total_value, 10.0);
        let total_weight: f64 = solution.items.iter().map(|item| item.weight).sum();
        assert!(total_weight <= 10.0);
    }
}

#[test]
fn test_first_item_is_considered() {
    let items = vec![Item::new(10.0, 5.0, "only")];
    for recursive in [true, false] {
        let (total_value, subset) = solve_knapsack(&items, 5.0, recursive).unwrap();
        assert_eq!(total_value, 10.0);
        assert_eq!(subset, items);
    }
}

#[test]
fn test_zero_capacity() {
    for recursive in [true, false] {
        let (total_value, subset) = solve_knapsack(&example_items(), 0.0, recursive).unwrap();
        assert_eq!(total_value, 0.0);
        assert!(subset.is_empty());
    }
}

#[test]
fn test_zero_weight_items_are_free() {
    let items = vec![Item::new(3.0, 0.0, 'a'), Item::new(5.0, 1.0, 'b')];
    let (total_value, subset) = solve_knapsack(&items, 0.0, false).unwrap();
    assert_eq!(total_value, 3.0);
    assert_eq!(subset, vec![items[0].clone()]);
}

#[test]
fn test_empty_items() {
    let items: Vec<Item<usize>> = Vec::new();
    for recursive in [true, false] {
        assert_eq!(solve_knapsack(&items, 10.0, recursive).unwrap(), (0.0, Vec::new()));
    }
    assert_eq!(solve_knapsack_greedy(&items, 10.0).unwrap(), (0.0, Vec::new()));
}

#[test]
fn test_negative_values_are_never_taken() {
    let items = vec![Item::new(-1.0, 1.0, 0), Item::new(2.0, 1.0, 1)];
    let (total_value, subset) = solve_knapsack(&items, 2.0, true).unwrap();
    assert_eq!(total_value, 2.0);
    assert_eq!(subset, vec![items[1].clone()]);
}

#[test]
fn test_ties_favour_exclusion() {
    // Both items reach the optimum alone, the iterative table keeps the first
    let items = vec![Item::new(5.0, 3.0, 0), Item::new(5.0, 3.0, 1)];
    let (_, subset) = solve_knapsack(&items, 3.0, false).unwrap();
    assert_eq!(subset, vec![items[0].clone()]);
}

#[test]
fn test_duplicate_ids_are_kept() {
    let items = vec![Item::new(1.0, 1.0, 7), Item::new(1.0, 1.0, 7)];
    let (total_value, subset) = solve_knapsack(&items, 2.0, false).unwrap();
    assert_eq!(total_value, 2.0);
    assert_eq!(subset.len(), 2);
}

#[test]
fn test_rejects_negative_capacity() {
    for recursive in [true, false] {
        assert!(matches!(
            solve_knapsack(&example_items(), -1.0, recursive),
            Err(Error::InvalidInput(_))
        ));
    }
    assert!(matches!(
        solve_knapsack_greedy(&example_items(), -1.0),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_rejects_negative_weight() {
    let mut items = example_items();
    items[3].weight = -1.0;
    assert!(matches!(
        solve_knapsack(&items, 15.0, true),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_rejects_non_finite() {
    let mut items = example_items();
    items[0].value = f64::NAN;
    assert!(matches!(
        solve_knapsack(&items, 15.0, false),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        solve_knapsack(&example_items(), f64::INFINITY, false),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_table_size_limit() {
    let solver = KnapsackSolver::new(Params {
        strategy: Strategy::Iterative,
        max_table_cells: 100,
    });
    // 6 rows x 16 columns fits, 6 x 1506 does not
    assert!(solver.solve(&example_items(), 15.0, Strategy::Iterative).is_ok());
    assert!(matches!(
        solver.solve(&example_items(), 15.05, Strategy::Memoized),
        Err(Error::ResourceLimit(_))
    ));
    assert!(matches!(
        solver.solve(&example_items(), 15.05, Strategy::Iterative),
        Err(Error::ResourceLimit(_))
    ));
    // The greedy strategy builds no table
    assert!(solver.solve(&example_items(), 15.05, Strategy::Greedy).is_ok());
}

#[test]
fn test_solution_indices() {
    let solution = KnapsackSolver::default()
        .solve(&example_items(), 15.0, Strategy::Memoized)
        .unwrap();
    assert_eq!(solution.indices, vec![1, 2, 3, 4]);
}

#[test]
fn test_params_initialize() {
    assert_eq!(Params::initialize(&None).unwrap(), Params::default());
    let h = json!({"strategy": "memoized", "max_table_cells": 1000});
    let params = Params::initialize(&h.as_object().cloned()).unwrap();
    assert_eq!(params.strategy, Strategy::Memoized);
    assert_eq!(params.max_table_cells, 1000);

    let h = json!({"strategy": "branch_and_bound"});
    assert!(Params::initialize(&h.as_object().cloned()).is_err());
}

#[test]
fn test_solve_challenge() {
    let track: Track = "n_items=40,budget=30,decimals=1".parse().unwrap();
    let challenge = Challenge::generate_instance(&[7; 32], &track).unwrap();
    let mut values = Vec::new();
    for strategy in ["memoized", "iterative", "greedy"] {
        let h = json!({ "strategy": strategy });
        let solution = solve_challenge(&challenge, &h.as_object().cloned()).unwrap();
        values.push(challenge.verify_solution(&solution).unwrap());
    }
    assert_eq!(values[0], values[1]);
    assert!(values[2] <= values[0]);
}

#[test]
fn test_memoized_long_item_list() {
    let items: Vec<Item<usize>> = (0..5000).map(|i| Item::new(1.0, 1.0, i)).collect();
    let (total_value, selected) = solve_knapsack(&items, 10.0, true).unwrap();
    assert_eq!(total_value, 10.0);
    assert_eq!(selected.len(), 10);
    let (iterative_value, _) = solve_knapsack(&items, 10.0, false).unwrap();
    assert_eq!(iterative_value, total_value);
}

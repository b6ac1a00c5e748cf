//! 0/1 knapsack: pick the most valuable sub-sequence of items whose weights
//! sum to no more than the capacity.
//!
//! Every strategy first maps weights and capacity onto integers with a
//! common power of ten (see [`combopt_utils::Quantizer`]), so fractional
//! weights such as `15.05` are compared exactly. Cost of the exact
//! strategies is O(n·W) in time and space, where W is the *quantized*
//! capacity: one more decimal digit in any weight makes the table ten times
//! larger.
use crate::Error;
use anyhow::Result;
use combopt_challenges::knapsack::*;
use serde_json::{Map, Value};
use tracing::debug;

mod greedy;
mod iterative;
mod memoized;
mod params;
mod state;

pub use params::{Params, Strategy};
use state::Instance;

#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackSolution<I> {
    pub total_value: f64,
    /// Positions of the selected items in the input, ascending
    pub indices: Vec<usize>,
    /// The selected items, in input order
    pub items: Vec<Item<I>>,
}

#[derive(Debug, Clone, Default)]
pub struct KnapsackSolver {
    params: Params,
}

impl KnapsackSolver {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Solves with the strategy from `Params`.
    pub fn solve_default<I: Clone>(
        &self,
        items: &[Item<I>],
        capacity: f64,
    ) -> Result<KnapsackSolution<I>, Error> {
        self.solve(items, capacity, self.params.strategy)
    }

    /// Both exact strategies return the same `total_value`; when several
    /// subsets reach it they may pick different ones.
    pub fn solve<I: Clone>(
        &self,
        items: &[Item<I>],
        capacity: f64,
        strategy: Strategy,
    ) -> Result<KnapsackSolution<I>, Error> {
        let instance = Instance::new(items, capacity)?;
        let (total_value, indices) = match strategy {
            Strategy::Greedy => greedy::solve(&instance),
            Strategy::Memoized | Strategy::Iterative => {
                let cells = instance.check_table_size(self.params.max_table_cells)?;
                debug!(
                    ?strategy,
                    n_items = instance.len(),
                    capacity = instance.capacity,
                    decimals = instance.quantizer.decimals(),
                    cells,
                    "solving knapsack"
                );
                match strategy {
                    Strategy::Memoized => memoized::solve(&instance),
                    _ => iterative::solve(&instance),
                }
            }
        };
        let items = indices.iter().map(|&i| items[i].clone()).collect();
        Ok(KnapsackSolution {
            total_value,
            indices,
            items,
        })
    }
}

/// Exact solve; `recursive` picks the memoized strategy over the iterative
/// one.
pub fn solve_knapsack<I: Clone>(
    items: &[Item<I>],
    capacity: f64,
    recursive: bool,
) -> Result<(f64, Vec<Item<I>>), Error> {
    let strategy = if recursive {
        Strategy::Memoized
    } else {
        Strategy::Iterative
    };
    let solution = KnapsackSolver::default().solve(items, capacity, strategy)?;
    Ok((solution.total_value, solution.items))
}

/// Non-optimal: takes items in input order while they fit.
pub fn solve_knapsack_greedy<I: Clone>(
    items: &[Item<I>],
    capacity: f64,
) -> Result<(f64, Vec<Item<I>>), Error> {
    let solution = KnapsackSolver::default().solve(items, capacity, Strategy::Greedy)?;
    Ok((solution.total_value, solution.items))
}

pub fn solve_challenge(
    challenge: &Challenge,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<Solution> {
    let params = Params::initialize(hyperparameters)?;
    let solution = KnapsackSolver::new(params).solve_default(&challenge.items, challenge.capacity)?;
    Ok(Solution {
        items: solution.indices,
        total_value: solution.total_value,
    })
}

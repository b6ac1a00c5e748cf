use anyhow::{anyhow, Result};
use combopt_challenges::max_distance::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod experimental;
mod greedy_1d;

pub use experimental::{max_size_max_distance_subset, maximum_distance_subset};
pub use greedy_1d::max_distance_subset_1d;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DistanceSubset {
    /// Positions in the input, ascending
    pub indices: Vec<usize>,
    pub items: Vec<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DistanceSubsetValue {
    /// Sum of pairwise distances between the chosen points
    pub value: f64,
    /// Positions in the input, in the order the recursion picked them
    pub indices: Vec<usize>,
    pub items: Vec<f64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Params {
    /// Use the memoized recursion instead of the 1-D greedy selector
    pub experimental: bool,

    /// Required for the recursion to run with k > 2
    pub acknowledge_unverified: bool,
}

impl Params {
    pub fn initialize(h: &Option<Map<String, Value>>) -> Result<Self> {
        let mut p = Self::default();
        if let Some(m) = h {
            if let Some(v) = m.get("experimental") {
                p.experimental = v
                    .as_bool()
                    .ok_or_else(|| anyhow!("experimental must be a boolean"))?;
            }
            if let Some(v) = m.get("acknowledge_unverified") {
                p.acknowledge_unverified = v
                    .as_bool()
                    .ok_or_else(|| anyhow!("acknowledge_unverified must be a boolean"))?;
            }
        }
        Ok(p)
    }
}

pub fn solve_challenge(
    challenge: &Challenge,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<Solution> {
    let params = Params::initialize(hyperparameters)?;
    let mut indices = if params.experimental {
        if challenge.min_thresh.is_some() {
            return Err(anyhow!("min_thresh is not supported by the experimental selector"));
        }
        let k = challenge
            .k
            .ok_or_else(|| anyhow!("The experimental selector needs an explicit k"))?;
        maximum_distance_subset(&challenge.points, k, params.acknowledge_unverified)?.indices
    } else {
        max_distance_subset_1d(&challenge.points, challenge.k, challenge.min_thresh)?.indices
    };
    indices.sort_unstable();
    Ok(Solution { indices })
}

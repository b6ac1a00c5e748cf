use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Top-down recursion over `(prefix, capacity)` with a per-call cache
    Memoized,
    /// Bottom-up table, ties favour leaving the item out
    #[default]
    Iterative,
    /// Input order, take whatever still fits. Not optimal.
    Greedy,
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memoized" | "recursive" => Ok(Strategy::Memoized),
            "iterative" => Ok(Strategy::Iterative),
            "greedy" => Ok(Strategy::Greedy),
            _ => Err(anyhow!("Unknown knapsack strategy '{}'", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Params {
    pub strategy: Strategy,

    /// Upper bound on `(n + 1) * (W + 1)` for the exact strategies, where
    /// W is the quantized capacity
    pub max_table_cells: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_table_cells: 1 << 25,
        }
    }
}

impl Params {
    pub fn initialize(h: &Option<Map<String, Value>>) -> Result<Self> {
        let mut p = Self::default();
        if let Some(m) = h {
            if let Some(v) = m.get("strategy") {
                p.strategy = v
                    .as_str()
                    .ok_or_else(|| anyhow!("strategy must be a string"))?
                    .parse()?;
            }
            if let Some(v) = m.get("max_table_cells") {
                p.max_table_cells = v
                    .as_u64()
                    .ok_or_else(|| anyhow!("max_table_cells must be a non-negative integer"))?;
            }
        }
        Ok(p)
    }
}

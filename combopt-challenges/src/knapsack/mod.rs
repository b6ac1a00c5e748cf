use crate::Error;
use anyhow::{anyhow, Result};
use combopt_utils::Quantizer;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A candidate for the knapsack. `id` is opaque and only carried through.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item<I = usize> {
    pub value: f64,
    pub weight: f64,
    pub id: I,
}

impl<I> Item<I> {
    pub fn new(value: f64, weight: f64, id: I) -> Self {
        Self { value, weight, id }
    }
}

impl<I> From<(f64, f64, I)> for Item<I> {
    fn from((value, weight, id): (f64, f64, I)) -> Self {
        Self { value, weight, id }
    }
}

/// Rejects anything a 0/1 knapsack over these items cannot be defined on.
pub fn validate_items<I>(items: &[Item<I>], capacity: f64) -> Result<(), Error> {
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(Error::InvalidInput(format!(
            "capacity must be a non-negative finite number, got {}",
            capacity
        )));
    }
    for (i, item) in items.iter().enumerate() {
        if !item.weight.is_finite() || item.weight < 0.0 {
            return Err(Error::InvalidInput(format!(
                "item {} has invalid weight {}",
                i, item.weight
            )));
        }
        if !item.value.is_finite() {
            return Err(Error::InvalidInput(format!(
                "item {} has invalid value {}",
                i, item.value
            )));
        }
    }
    Ok(())
}

impl_kv_string_serde! {
    Track {
        n_items: usize,
        budget: u32,
        decimals: u32,
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    /// Indices into `Challenge::items`, ascending.
    pub items: Vec<usize>,
    pub total_value: f64,
}

impl Solution {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total_value: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge<I = usize> {
    pub items: Vec<Item<I>>,
    pub capacity: f64,
}

impl Challenge<usize> {
    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.budget > 100 {
            return Err(anyhow!("Budget must be a percentage, got {}", track.budget));
        }
        let mut rng = SmallRng::from_seed(seed.clone());
        let scale = 10u32
            .checked_pow(track.decimals)
            .filter(|_| track.decimals <= 4)
            .ok_or_else(|| anyhow!("At most 4 decimals are supported"))?;

        // Weights in [1, 50] with the requested fractional precision,
        // values in [1, 100]
        let items: Vec<Item<usize>> = (0..track.n_items)
            .map(|id| {
                let weight = rng.gen_range(scale..=50 * scale) as f64 / scale as f64;
                let value = rng.gen_range(1..=100) as f64;
                Item::new(value, weight, id)
            })
            .collect();

        let total_weight: f64 = items.iter().map(|item| item.weight).sum();
        let capacity =
            (total_weight * track.budget as f64 / 100.0 * scale as f64).floor() / scale as f64;

        Ok(Challenge { items, capacity })
    }
}

impl<I> Challenge<I> {
    pub fn validate(&self) -> Result<(), Error> {
        validate_items(&self.items, self.capacity)
    }

    /// Checks the selection fits and returns its total value.
    pub fn evaluate_total_value(&self, solution: &Solution) -> Result<f64> {
        self.validate()?;
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }
        if let Some(&item) = solution.items.iter().find(|&&i| i >= self.items.len()) {
            return Err(anyhow!("Item ({}) is out of bounds", item));
        }

        // Compare on the integer grid so fractional weights sum exactly
        let weights: Vec<f64> = self.items.iter().map(|item| item.weight).collect();
        let quantizer = Quantizer::fit(&weights, self.capacity).map_err(Error::from)?;
        let max_weight = quantizer.quantize(self.capacity).map_err(Error::from)?;
        let mut total_weight = 0u64;
        for &i in &solution.items {
            let weight = quantizer.quantize(self.items[i].weight).map_err(Error::from)?;
            total_weight = match total_weight.checked_add(weight) {
                Some(w) if w <= max_weight => w,
                Some(w) => {
                    return Err(anyhow!(
                        "Total weight ({}) exceeded max weight ({})",
                        quantizer.dequantize(w),
                        self.capacity
                    ))
                }
                // A sum past u64 is certainly past the capacity
                None => {
                    return Err(anyhow!(
                        "Total weight overflowed at item ({}), max weight is {}",
                        i,
                        self.capacity
                    ))
                }
            };
        }

        let mut indices = solution.items.clone();
        indices.sort();
        Ok(indices.iter().map(|&i| self.items[i].value).sum())
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<f64> {
        let total_value = self.evaluate_total_value(solution)?;
        let tolerance = 1e-9 * total_value.abs().max(1.0);
        if (total_value - solution.total_value).abs() > tolerance {
            return Err(anyhow!(
                "Reported total value ({}) does not match selection ({})",
                solution.total_value,
                total_value
            ));
        }
        Ok(total_value)
    }
}

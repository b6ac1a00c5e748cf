use crate::Error;
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub fn validate_points(points: &[f64]) -> Result<(), Error> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(i) => Err(Error::InvalidInput(format!(
            "point {} is not finite ({})",
            i, points[i]
        ))),
        None => Ok(()),
    }
}

pub fn validate_threshold(min_thresh: Option<f64>) -> Result<(), Error> {
    match min_thresh {
        Some(t) if !t.is_finite() || t < 0.0 => Err(Error::InvalidInput(format!(
            "min_thresh must be a non-negative finite number, got {}",
            t
        ))),
        _ => Ok(()),
    }
}

/// Smallest distance between any two of `values`, `None` for fewer than two.
pub fn min_pairwise_distance(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.windows(2).map(|w| w[1] - w[0]).reduce(f64::min)
}

/// Sum of all pairwise distances between `values`.
pub fn total_pairwise_distance(values: &[f64]) -> f64 {
    let mut total = 0.0;
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            total += (values[i] - values[j]).abs();
        }
    }
    total
}

impl_kv_string_serde! {
    Track {
        n_points: usize,
        k: usize,
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    /// Indices into `Challenge::points`, ascending.
    pub indices: Vec<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub points: Vec<f64>,
    #[serde(default)]
    pub k: Option<usize>,
    #[serde(default)]
    pub min_thresh: Option<f64>,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.k > track.n_points {
            return Err(anyhow!(
                "k ({}) must not exceed n_points ({})",
                track.k,
                track.n_points
            ));
        }
        let mut rng = SmallRng::from_seed(seed.clone());
        // Points on [0, 1000] with two decimals
        let points = (0..track.n_points)
            .map(|_| rng.gen_range(0..=100_000) as f64 / 100.0)
            .collect();
        Ok(Challenge {
            points,
            k: Some(track.k),
            min_thresh: None,
        })
    }

    pub fn validate(&self) -> Result<(), Error> {
        validate_points(&self.points)?;
        validate_threshold(self.min_thresh)?;
        match self.k {
            Some(k) if k > self.points.len() => Err(Error::InvalidInput(format!(
                "k ({}) exceeds the number of points ({})",
                k,
                self.points.len()
            ))),
            _ => Ok(()),
        }
    }

    /// Checks the selection and returns its smallest pairwise distance, or
    /// 0 when fewer than two points were chosen.
    pub fn verify_solution(&self, solution: &Solution) -> Result<f64> {
        self.validate()?;
        let selected: HashSet<usize> = solution.indices.iter().cloned().collect();
        if selected.len() != solution.indices.len() {
            return Err(anyhow!("Duplicate points selected."));
        }
        if let Some(&i) = solution.indices.iter().find(|&&i| i >= self.points.len()) {
            return Err(anyhow!("Point ({}) is out of bounds", i));
        }
        let k = self.k.unwrap_or(self.points.len());
        if solution.indices.len() > k {
            return Err(anyhow!(
                "Selected {} points, more than k ({})",
                solution.indices.len(),
                k
            ));
        }
        if !self.points.is_empty() && k > 0 && solution.indices.is_empty() {
            return Err(anyhow!("No points selected."));
        }

        let values: Vec<f64> = solution.indices.iter().map(|&i| self.points[i]).collect();
        let min_distance = min_pairwise_distance(&values).unwrap_or(0.0);
        if let Some(min_thresh) = self.min_thresh {
            if values.len() > 1 && min_distance < min_thresh {
                return Err(anyhow!(
                    "Minimum pairwise distance ({}) is below threshold ({})",
                    min_distance,
                    min_thresh
                ));
            }
        }
        Ok(min_distance)
    }
}

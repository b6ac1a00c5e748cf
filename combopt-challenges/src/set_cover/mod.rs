use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

/// A named group of universe members that is either taken whole or not at
/// all.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CandidateSet<K = String, T = u64> {
    pub key: K,
    pub members: Vec<T>,
}

impl<K, T> CandidateSet<K, T> {
    pub fn new(key: K, members: Vec<T>) -> Self {
        Self { key, members }
    }
}

impl_kv_string_serde! {
    Track {
        n_items: usize,
        n_sets: usize,
        max_set_size: usize,
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution<K = String, T = u64> {
    pub uncovered: Vec<T>,
    pub accepted_keys: Vec<K>,
}

/// Candidate order is significant: it is the tie-break order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge<K = String, T = u64> {
    pub candidate_sets: Vec<CandidateSet<K, T>>,
    pub universe: Vec<T>,
    #[serde(default)]
    pub max_covers: Option<usize>,
}

impl Challenge<String, u64> {
    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.max_set_size == 0 || track.max_set_size > track.n_items {
            return Err(anyhow!(
                "max_set_size must be in [1, {}], got {}",
                track.n_items,
                track.max_set_size
            ));
        }
        let mut rng = SmallRng::from_seed(seed.clone());
        let universe: Vec<u64> = (0..track.n_items as u64).collect();
        let candidate_sets = (0..track.n_sets)
            .map(|i| {
                let size = rng.gen_range(1..=track.max_set_size);
                // Sample without replacement
                let mut pool = universe.clone();
                for j in 0..size {
                    let idx = rng.gen_range(j..pool.len());
                    pool.swap(j, idx);
                }
                pool.truncate(size);
                let members = pool;
                CandidateSet::new(format!("s{}", i), members)
            })
            .collect();

        Ok(Challenge {
            candidate_sets,
            universe,
            max_covers: None,
        })
    }
}

impl<K, T> Challenge<K, T>
where
    K: Eq + Hash + std::fmt::Debug,
    T: Eq + Hash + Clone + std::fmt::Debug,
{
    /// Checks accepted sets are known, pairwise disjoint and inside the
    /// universe, and that `uncovered` is exactly what they leave. Returns
    /// the number of covered items.
    pub fn verify_solution(&self, solution: &Solution<K, T>) -> Result<usize> {
        if let Some(max_covers) = self.max_covers {
            if solution.accepted_keys.len() > max_covers {
                return Err(anyhow!(
                    "Accepted {} sets, more than max_covers ({})",
                    solution.accepted_keys.len(),
                    max_covers
                ));
            }
        }
        let by_key: HashMap<&K, &CandidateSet<K, T>> =
            self.candidate_sets.iter().map(|c| (&c.key, c)).collect();
        let universe: HashSet<&T> = self.universe.iter().collect();

        let mut seen_keys = HashSet::new();
        let mut covered: HashSet<&T> = HashSet::new();
        for key in &solution.accepted_keys {
            if !seen_keys.insert(key) {
                return Err(anyhow!("Set {:?} accepted twice", key));
            }
            let candidate = by_key
                .get(key)
                .ok_or_else(|| anyhow!("Unknown set {:?}", key))?;
            let members: HashSet<&T> = candidate.members.iter().collect();
            for member in members {
                if !universe.contains(member) {
                    return Err(anyhow!("Set {:?} covers {:?} outside the universe", key, member));
                }
                if !covered.insert(member) {
                    return Err(anyhow!("Set {:?} overlaps on {:?}", key, member));
                }
            }
        }

        let expected: HashSet<&T> = universe.difference(&covered).cloned().collect();
        let reported: HashSet<&T> = solution.uncovered.iter().collect();
        if expected != reported || reported.len() != solution.uncovered.len() {
            return Err(anyhow!("Reported uncovered items do not match accepted sets"));
        }
        Ok(covered.len())
    }
}

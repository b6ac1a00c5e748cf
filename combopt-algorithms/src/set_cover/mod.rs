use crate::HashSet;
use anyhow::{anyhow, Result};
use combopt_challenges::set_cover::*;
use serde_json::{Map, Value};
use std::hash::Hash;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct SetCover<K, T> {
    /// Universe members no accepted set covers, in universe order
    pub uncovered: Vec<T>,
    /// Members of each accepted set, in acceptance order
    pub covered: Vec<Vec<T>>,
    pub accepted_keys: Vec<K>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Open,
    Accepted,
    Rejected,
}

/// Greedy maximum independent set cover.
///
/// Each round accepts the largest open candidate whose members are all
/// still uncovered, so accepted sets never overlap. A candidate that
/// touches an already covered item is rejected for good: the uncovered set
/// only shrinks, so it can never become eligible again. Among equally large
/// candidates the first in `candidate_sets` wins.
pub fn greedy_cover<K, T>(
    candidate_sets: &[CandidateSet<K, T>],
    universe: &[T],
    max_covers: Option<usize>,
) -> SetCover<K, T>
where
    K: Clone,
    T: Eq + Hash + Clone,
{
    let mut uncovered: HashSet<&T> = universe.iter().collect();
    let members: Vec<HashSet<&T>> = candidate_sets
        .iter()
        .map(|c| c.members.iter().collect())
        .collect();
    let mut status = vec![Status::Open; candidate_sets.len()];
    let mut accepted = Vec::new();

    loop {
        if max_covers.is_some_and(|max_covers| accepted.len() >= max_covers) {
            break;
        }
        let mut best: Option<usize> = None;
        for (idx, candidate) in members.iter().enumerate() {
            if status[idx] != Status::Open {
                continue;
            }
            if candidate.iter().all(|m| uncovered.contains(m)) {
                if best.map_or(true, |b| candidate.len() > members[b].len()) {
                    best = Some(idx);
                }
            } else {
                status[idx] = Status::Rejected;
            }
        }
        let Some(idx) = best else { break };
        status[idx] = Status::Accepted;
        for m in &members[idx] {
            uncovered.remove(m);
        }
        accepted.push(idx);
    }

    debug!(
        n_candidates = candidate_sets.len(),
        n_accepted = accepted.len(),
        n_uncovered = uncovered.len(),
        "greedy cover finished"
    );

    let mut reported: HashSet<&T> = HashSet::default();
    SetCover {
        uncovered: universe
            .iter()
            .filter(|t| uncovered.contains(t) && reported.insert(*t))
            .cloned()
            .collect(),
        covered: accepted
            .iter()
            .map(|&idx| candidate_sets[idx].members.clone())
            .collect(),
        accepted_keys: accepted
            .iter()
            .map(|&idx| candidate_sets[idx].key.clone())
            .collect(),
    }
}

pub fn solve_challenge(
    challenge: &Challenge,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<Solution> {
    let mut max_covers = challenge.max_covers;
    if let Some(v) = hyperparameters.as_ref().and_then(|m| m.get("max_covers")) {
        max_covers = Some(
            v.as_u64()
                .ok_or_else(|| anyhow!("max_covers must be a non-negative integer"))?
                as usize,
        );
    }
    let cover = greedy_cover(&challenge.candidate_sets, &challenge.universe, max_covers);
    Ok(Solution {
        uncovered: cover.uncovered,
        accepted_keys: cover.accepted_keys,
    })
}

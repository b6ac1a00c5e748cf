use super::DistanceSubset;
use crate::Error;
use combopt_challenges::max_distance::{validate_points, validate_threshold};

/// Greedy maximin selection on the line: start from the two extremes, then
/// keep adding the point farthest from everything already chosen.
///
/// Stops after `k` points (default: all of them) or as soon as the best
/// candidate would sit closer than `min_thresh` to a chosen point. If the
/// extremes themselves are closer than `min_thresh`, only the minimum is
/// returned. Ties go to the smaller point.
pub fn max_distance_subset_1d(
    points: &[f64],
    k: Option<usize>,
    min_thresh: Option<f64>,
) -> Result<DistanceSubset, Error> {
    validate_points(points)?;
    validate_threshold(min_thresh)?;
    let n = points.len();
    let k = k.unwrap_or(n);
    if k > n {
        return Err(Error::InvalidInput(format!(
            "cannot choose {} of {} points",
            k, n
        )));
    }
    if k == 0 {
        return Ok(DistanceSubset::default());
    }

    // Stable, so equal points keep input order
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| points[a].total_cmp(&points[b]));
    let sorted: Vec<f64> = order.iter().map(|&i| points[i]).collect();

    let mut chosen = vec![false; n];
    chosen[0] = true;
    let mut n_chosen = 1;
    if k > 1 && n > 1 && min_thresh.map_or(true, |t| sorted[n - 1] - sorted[0] >= t) {
        chosen[n - 1] = true;
        n_chosen += 1;
    }

    // Distance from each point to its nearest chosen point
    let mut nearest: Vec<f64> = sorted
        .iter()
        .map(|&p| {
            let to_min = p - sorted[0];
            if chosen[n - 1] {
                to_min.min(sorted[n - 1] - p)
            } else {
                to_min
            }
        })
        .collect();

    while n_chosen < k {
        let mut best: Option<usize> = None;
        for i in (0..n).filter(|&i| !chosen[i]) {
            if best.map_or(true, |b| nearest[i] > nearest[b]) {
                best = Some(i);
            }
        }
        let Some(idx) = best else { break };
        if min_thresh.is_some_and(|t| nearest[idx] < t) {
            break;
        }
        chosen[idx] = true;
        n_chosen += 1;
        for i in 0..n {
            nearest[i] = nearest[i].min((sorted[i] - sorted[idx]).abs());
        }
    }

    let mut indices: Vec<usize> = (0..n).filter(|&i| chosen[i]).map(|i| order[i]).collect();
    indices.sort_unstable();
    let items = indices.iter().map(|&i| points[i]).collect();
    Ok(DistanceSubset { indices, items })
}

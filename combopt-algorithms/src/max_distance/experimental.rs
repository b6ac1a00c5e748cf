use super::DistanceSubsetValue;
use crate::{Error, HashMap};
use combopt_challenges::max_distance::{
    min_pairwise_distance, total_pairwise_distance, validate_points, validate_threshold,
};
use tracing::warn;

/// `(n, k)` → best total pairwise distance over `k` of the first `n` points
/// (sorted descending), with the positions that reach it.
struct Recursion<'a> {
    sorted: &'a [f64],
    memo: HashMap<(usize, usize), (f64, Vec<usize>)>,
}

impl<'a> Recursion<'a> {
    fn dist(&self, i: usize, j: usize) -> f64 {
        (self.sorted[i] - self.sorted[j]).abs()
    }

    fn optimal(&mut self, n: usize, k: usize) -> (f64, Vec<usize>) {
        if let Some(hit) = self.memo.get(&(n, k)) {
            return hit.clone();
        }
        let result = if k < 2 || n < k {
            (0.0, Vec::new())
        } else if k == 2 {
            let mut best = (0.0, Vec::new());
            for i in 0..n {
                for j in (i + 1)..n {
                    let d = self.dist(i, j);
                    if best.1.is_empty() || d > best.0 {
                        best = (d, vec![i, j]);
                    }
                }
            }
            best
        } else {
            // Extend the best (k - 1)-subset of every shorter prefix by the
            // point adding the most distance. Not guaranteed optimal.
            let mut best: Option<(f64, Vec<usize>)> = None;
            for m in (k - 1)..n {
                let (prev_value, prev_subset) = self.optimal(m, k - 1);
                if prev_subset.len() != k - 1 {
                    continue;
                }
                for o in (0..n).filter(|o| !prev_subset.contains(o)) {
                    let value =
                        prev_value + prev_subset.iter().map(|&p| self.dist(o, p)).sum::<f64>();
                    if best.as_ref().map_or(true, |(v, _)| value > *v) {
                        let mut subset = prev_subset.clone();
                        subset.push(o);
                        best = Some((value, subset));
                    }
                }
            }
            best.unwrap_or((0.0, Vec::new()))
        };
        self.memo.insert((n, k), result.clone());
        result
    }
}

/// Experimental: picks `k` points maximizing the sum of pairwise distances
/// by a memoized recursion over `(prefix, size)`.
///
/// For `k <= 2` the answer is exact. For larger `k` the recursion only
/// extends optimal smaller subsets and is known to miss the optimum, so it
/// refuses to run unless `acknowledge_unverified` is set. Prefer
/// [`super::max_distance_subset_1d`].
pub fn maximum_distance_subset(
    points: &[f64],
    k: usize,
    acknowledge_unverified: bool,
) -> Result<DistanceSubsetValue, Error> {
    validate_points(points)?;
    let n = points.len();
    if k > n {
        return Err(Error::Infeasible {
            requested: k,
            available: n,
        });
    }
    if k > 2 && !acknowledge_unverified {
        return Err(Error::Unsupported(format!(
            "maximum distance recursion is unverified for k > 2 (k = {}); \
             acknowledge it explicitly or use the 1-D greedy selector",
            k
        )));
    }
    if k > 2 {
        warn!(k, n_points = n, "running unverified maximum distance recursion");
    }

    // Descending, equal points in reverse input order
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| points[a].total_cmp(&points[b]));
    order.reverse();
    let sorted: Vec<f64> = order.iter().map(|&i| points[i]).collect();

    let sorted_subset = match k {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            Recursion {
                sorted: &sorted,
                memo: HashMap::default(),
            }
            .optimal(n, k)
            .1
        }
    };

    let indices: Vec<usize> = sorted_subset.iter().map(|&s| order[s]).collect();
    let items: Vec<f64> = indices.iter().map(|&i| points[i]).collect();
    Ok(DistanceSubsetValue {
        value: total_pairwise_distance(&items),
        indices,
        items,
    })
}

/// Experimental: grows `k` from `k_start` and returns the last subset from
/// [`maximum_distance_subset`] whose points are all at least `min_thresh`
/// apart. Sizes up to `points.len() - 1` are tried.
pub fn max_size_max_distance_subset(
    points: &[f64],
    min_thresh: f64,
    k_start: usize,
    acknowledge_unverified: bool,
) -> Result<Vec<usize>, Error> {
    if k_start < 2 {
        return Err(Error::InvalidInput(format!(
            "k_start must be at least 2, got {}",
            k_start
        )));
    }
    validate_threshold(Some(min_thresh))?;
    validate_points(points)?;

    let mut best_indices = Vec::new();
    for k in k_start..points.len() {
        let subset = maximum_distance_subset(points, k, acknowledge_unverified)?;
        if min_pairwise_distance(&subset.items).is_some_and(|d| d < min_thresh) {
            break;
        }
        best_indices = subset.indices;
    }
    Ok(best_indices)
}

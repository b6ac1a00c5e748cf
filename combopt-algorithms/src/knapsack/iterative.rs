use super::state::Instance;
use ndarray::Array2;

/// Returns the optimum and the ascending indices of one optimal subset.
///
/// `best[[i, w]]` is the optimum over the first `i` items within `w`;
/// `keep[[i, w]]` records whether item `i - 1` is in it. Row 0 stays zero.
pub(crate) fn solve(instance: &Instance) -> (f64, Vec<usize>) {
    let n = instance.len();
    // Caller checked the table size, so the capacity fits a usize
    let max_weight = instance.capacity as usize;
    let mut best = Array2::<f64>::zeros((n + 1, max_weight + 1));
    let mut keep = Array2::<bool>::from_elem((n + 1, max_weight + 1), false);

    for i in 1..=n {
        let value = instance.values[i - 1];
        let weight = instance.weights[i - 1];
        for w in 0..=max_weight {
            let without = best[[i - 1, w]];
            if weight <= w as u64 {
                let with = best[[i - 1, w - weight as usize]] + value;
                if with > without {
                    best[[i, w]] = with;
                    keep[[i, w]] = true;
                    continue;
                }
            }
            best[[i, w]] = without;
        }
    }

    let mut w = max_weight;
    let mut selected = Vec::new();
    for i in (1..=n).rev() {
        if keep[[i, w]] {
            selected.push(i - 1);
            w -= instance.weights[i - 1] as usize;
        }
    }
    selected.reverse();
    (best[[n, max_weight]], selected)
}

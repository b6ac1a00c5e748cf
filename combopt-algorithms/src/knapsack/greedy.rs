use super::state::Instance;

/// Takes items in input order while they fit. Sort the input first (e.g. by
/// value density) for a better bound.
pub(crate) fn solve(instance: &Instance) -> (f64, Vec<usize>) {
    let mut total_weight = 0u64;
    let mut total_value = 0.0;
    let mut selected = Vec::new();
    for (i, (&value, &weight)) in instance.values.iter().zip(&instance.weights).enumerate() {
        if total_weight.saturating_add(weight) > instance.capacity {
            continue;
        }
        total_weight += weight;
        total_value += value;
        selected.push(i);
    }
    (total_value, selected)
}

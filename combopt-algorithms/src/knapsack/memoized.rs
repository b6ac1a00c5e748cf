use super::state::Instance;
use crate::HashMap;

/// `best(i, w)`: the most value the first `i` items can reach within `w`.
struct Memo<'a> {
    instance: &'a Instance,
    cache: HashMap<(usize, u64), f64>,
}

impl<'a> Memo<'a> {
    fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            cache: HashMap::default(),
        }
    }

    fn best(&mut self, i: usize, w: u64) -> f64 {
        // Top-down, but driven by an explicit stack so long item lists
        // cannot exhaust the thread stack
        let mut stack = vec![(i, w)];
        while let Some(&(i, w)) = stack.last() {
            if self.cache.contains_key(&(i, w)) {
                stack.pop();
                continue;
            }
            if i == 0 {
                self.cache.insert((0, w), 0.0);
                stack.pop();
                continue;
            }

            let weight = self.instance.weights[i - 1];
            let without = self.cache.get(&(i - 1, w)).copied();
            if weight > w {
                match without {
                    Some(v) => {
                        self.cache.insert((i, w), v);
                        stack.pop();
                    }
                    None => stack.push((i - 1, w)),
                }
                continue;
            }

            let with = self.cache.get(&(i - 1, w - weight)).copied();
            match (without, with) {
                (Some(without), Some(with)) => {
                    let with = with + self.instance.values[i - 1];
                    self.cache.insert((i, w), without.max(with));
                    stack.pop();
                }
                _ => {
                    if without.is_none() {
                        stack.push((i - 1, w));
                    }
                    if with.is_none() {
                        stack.push((i - 1, w - weight));
                    }
                }
            }
        }
        self.cache[&(i, w)]
    }
}

/// Returns the optimum and the ascending indices of one optimal subset.
pub(crate) fn solve(instance: &Instance) -> (f64, Vec<usize>) {
    let n = instance.len();
    let mut memo = Memo::new(instance);
    let total_value = memo.best(n, instance.capacity);

    let mut w = instance.capacity;
    let mut selected = Vec::new();
    for i in (1..=n).rev() {
        if memo.best(i, w) != memo.best(i - 1, w) {
            selected.push(i - 1);
            w -= instance.weights[i - 1];
        }
    }
    selected.reverse();
    (total_value, selected)
}

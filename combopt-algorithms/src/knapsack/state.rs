use crate::Error;
use combopt_challenges::knapsack::{validate_items, Item};
use combopt_utils::Quantizer;

/// Integer-weight view of one knapsack call. Owned by that call only.
#[derive(Debug, Clone)]
pub(crate) struct Instance {
    pub values: Vec<f64>,
    pub weights: Vec<u64>,
    pub capacity: u64,
    pub quantizer: Quantizer,
}

impl Instance {
    pub fn new<I>(items: &[Item<I>], capacity: f64) -> Result<Self, Error> {
        validate_items(items, capacity)?;
        let weights: Vec<f64> = items.iter().map(|item| item.weight).collect();
        let quantizer = Quantizer::fit(&weights, capacity)?;
        Ok(Self {
            values: items.iter().map(|item| item.value).collect(),
            weights: quantizer.quantize_all(&weights)?,
            capacity: quantizer.quantize(capacity)?,
            quantizer,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Cells a full `(n + 1) x (W + 1)` table needs, refusing anything over
    /// `max_cells` before a single cell is allocated.
    pub fn check_table_size(&self, max_cells: u64) -> Result<u64, Error> {
        let cells = (self.len() as u64 + 1)
            .checked_mul(self.capacity.saturating_add(1))
            .filter(|&cells| cells <= max_cells)
            .ok_or_else(|| {
                Error::ResourceLimit(format!(
                    "{} items at capacity {} (scaled by 10^{}) exceed {} table cells",
                    self.len(),
                    self.capacity,
                    self.quantizer.decimals(),
                    max_cells
                ))
            })?;
        usize::try_from(cells).map_err(|_| {
            Error::ResourceLimit(format!("{} table cells do not fit in memory", cells))
        })?;
        Ok(cells)
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fractional digits beyond this are noise in an `f64`, so scaling by more
/// than `10^15` is refused rather than producing a meaningless table.
pub const MAX_DECIMALS: u32 = 15;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantizeError {
    #[error("magnitude {0} is negative or not finite")]
    InvalidMagnitude(f64),
    #[error("{value} needs {decimals} fractional digits (max {MAX_DECIMALS})")]
    TooPrecise { value: f64, decimals: u32 },
    #[error("{value} scaled by 10^{decimals} does not fit in a u64")]
    Overflow { value: f64, decimals: u32 },
}

/// Number of fractional digits in the shortest decimal rendering of `num`
/// that round-trips back to the same `f64`.
///
/// `15.05` has 2, `3.0` has 0.
pub fn number_of_decimals(num: f64) -> u32 {
    // `Display` for f64 never uses exponent notation and prints the
    // shortest round-trip representation.
    let repr = num.to_string();
    match repr.split_once('.') {
        Some((_, frac)) => frac.trim_end_matches('0').len() as u32,
        None => 0,
    }
}

/// Maps non-negative decimal magnitudes onto integers by a common power of
/// ten. Ordering and sums are preserved, so an integer-weight knapsack over
/// the quantized weights is equivalent to the fractional one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantizer {
    decimals: u32,
}

impl Quantizer {
    pub const IDENTITY: Quantizer = Quantizer { decimals: 0 };

    /// Picks the smallest scale that makes every weight and the capacity
    /// integral.
    pub fn fit(weights: &[f64], capacity: f64) -> Result<Self, QuantizeError> {
        let mut decimals = 0;
        for &w in weights.iter().chain(std::iter::once(&capacity)) {
            if !w.is_finite() || w < 0.0 {
                return Err(QuantizeError::InvalidMagnitude(w));
            }
            let d = number_of_decimals(w);
            if d > MAX_DECIMALS {
                return Err(QuantizeError::TooPrecise {
                    value: w,
                    decimals: d,
                });
            }
            decimals = decimals.max(d);
        }
        let quantizer = Self { decimals };
        // Capacity bounds every weight that can ever be used, but weights
        // larger than it still need to be representable.
        for &w in weights.iter().chain(std::iter::once(&capacity)) {
            quantizer.quantize(w)?;
        }
        Ok(quantizer)
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn scale(&self) -> f64 {
        10f64.powi(self.decimals as i32)
    }

    pub fn quantize(&self, value: f64) -> Result<u64, QuantizeError> {
        if !value.is_finite() || value < 0.0 {
            return Err(QuantizeError::InvalidMagnitude(value));
        }
        let scaled = (value * self.scale()).round();
        if scaled >= u64::MAX as f64 {
            return Err(QuantizeError::Overflow {
                value,
                decimals: self.decimals,
            });
        }
        Ok(scaled as u64)
    }

    pub fn quantize_all(&self, values: &[f64]) -> Result<Vec<u64>, QuantizeError> {
        values.iter().map(|&v| self.quantize(v)).collect()
    }

    pub fn dequantize(&self, value: u64) -> f64 {
        value as f64 / self.scale()
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::IDENTITY
    }
}

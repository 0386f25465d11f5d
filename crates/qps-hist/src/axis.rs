//! Uniformly binned axis with closed-form bin lookup.

use serde::{Deserialize, Serialize};

use crate::error::{HistError, Result};

/// A 1D axis with `n_bins` equal-width bins over `[low, high)`.
///
/// Bin `i` covers `[low + i*w, low + (i+1)*w)` with `w = (high - low) / n_bins`:
/// the lower edge of each bin is inclusive, the upper edge exclusive, so `high`
/// itself is already out of range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformAxis {
    n_bins: usize,
    low: f64,
    high: f64,
}

impl UniformAxis {
    /// Create an axis with `n_bins` bins over `[low, high)`.
    pub fn new(n_bins: usize, low: f64, high: f64) -> Result<Self> {
        if n_bins == 0 {
            return Err(HistError::EmptyAxis);
        }
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(HistError::InvalidRange { low, high });
        }
        Ok(Self { n_bins, low, high })
    }

    /// Number of bins.
    #[inline]
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Lower edge of the first bin.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper edge of the last bin.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Width of one bin.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.n_bins as f64
    }

    /// Bin index for `x`, or `None` when `x` is out of range.
    ///
    /// NaN and ±inf fail the range comparison and map to `None`, so the fill
    /// path never panics on them.
    #[inline]
    pub fn index(&self, x: f64) -> Option<usize> {
        if !(x >= self.low && x < self.high) {
            return None;
        }
        // Multiply before dividing so that values sitting exactly on a bin
        // edge resolve to the upper bin, as with integer pt on a unit grid.
        let bin = ((x - self.low) * self.n_bins as f64 / (self.high - self.low)) as usize;
        // Float rounding just below `high` can land on n_bins.
        Some(bin.min(self.n_bins - 1))
    }

    /// Center of bin `i`: `low + (i + 0.5) * bin_width`.
    #[inline]
    pub fn center(&self, i: usize) -> f64 {
        self.low + (i as f64 + 0.5) * self.bin_width()
    }

    /// Centers of all bins, in increasing order.
    pub fn centers(&self) -> Vec<f64> {
        (0..self.n_bins).map(|i| self.center(i)).collect()
    }

    /// Bin edges, length `n_bins + 1`.
    pub fn edges(&self) -> Vec<f64> {
        (0..=self.n_bins).map(|i| self.low + i as f64 * self.bin_width()).collect()
    }
}

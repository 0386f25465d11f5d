//! The scan grid over candidate q/pt offsets.

use qps_hist::UniformAxis;

/// Ordered list of q/pt offsets probed by the scan accumulators.
///
/// The grid is read back from the scan axis itself, so the offset used to
/// compute a shifted pt is always the center of the bin it is recorded in.
#[derive(Debug, Clone)]
pub struct ScanGrid {
    offsets: Vec<f64>,
}

impl ScanGrid {
    /// Build the grid from a scan axis: one offset per bin, at the center.
    pub fn from_axis(axis: &UniformAxis) -> Self {
        Self { offsets: axis.centers() }
    }

    /// The offsets, ascending.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True if the grid has no offsets.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

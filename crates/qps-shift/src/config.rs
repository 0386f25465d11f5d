//! Task configuration.

use serde::Deserialize;

fn default_scan_bins() -> usize {
    100
}

fn default_scan_min() -> f64 {
    -1e-3
}

fn default_scan_max() -> f64 {
    1e-3
}

/// Layout of the scan grid over candidate q/pt offsets.
///
/// Offsets are the centers of a uniform axis over `[min, max)`; the defaults
/// scan 100 offsets in `[-1e-3, 1e-3)` (c/GeV).
#[derive(Debug, Clone, Deserialize)]
pub struct ScanGridConfig {
    /// Number of scan offsets.
    #[serde(default = "default_scan_bins")]
    pub bins: usize,
    /// Lower edge of the scan window (c/GeV).
    #[serde(default = "default_scan_min")]
    pub min: f64,
    /// Upper edge of the scan window (c/GeV).
    #[serde(default = "default_scan_max")]
    pub max: f64,
}

impl Default for ScanGridConfig {
    fn default() -> Self {
        Self { bins: default_scan_bins(), min: default_scan_min(), max: default_scan_max() }
    }
}

/// Full configuration of a q/pt shift task.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftConfig {
    /// Fixed charge-signed q/pt offset applied by the plain accumulators
    /// (c/GeV). Positive values soften positive tracks and harden negative
    /// ones.
    pub qpt_shift: f64,
    /// Trigger class the task selects on, e.g. `"INT7"` or `"EG1"`.
    pub trigger: String,
    /// Scan grid layout.
    #[serde(default)]
    pub scan: ScanGridConfig,
}

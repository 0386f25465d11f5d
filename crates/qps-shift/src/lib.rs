//! Accumulation of charged-particle spectra under a parametric q/pt shift.
//!
//! A [`QoverPtShiftTask`] applies a charge-signed offset to each track's
//! inverse transverse momentum and histograms the shifted spectra, split by
//! charge sign, track reconstruction category and EMCAL acceptance. Alongside
//! the fixed configured shift it scans a grid of candidate offsets, recording
//! the shifted pt at every grid point. The host event loop drives the task:
//! gate events with [`QoverPtShiftTask::accepts_event`], feed each event's
//! tracks to [`QoverPtShiftTask::process`], and read the results out through
//! [`QoverPtShiftTask::publish`] or [`QoverPtShiftTask::into_histograms`].
//!
//! ```
//! use qps_shift::{EmcalGeometry, QoverPtShiftTask, ShiftConfig, Track, TrackCategory};
//!
//! # fn main() -> qps_shift::Result<()> {
//! let config =
//!     ShiftConfig { qpt_shift: 2e-4, trigger: "INT7".into(), scan: Default::default() };
//! let mut task = QoverPtShiftTask::new(&config, EmcalGeometry::default())?;
//!
//! let tracks =
//!     [Track { charge: 1.0, pt: 10.0, eta: 0.3, phi: 1.6, category: TrackCategory::Global }];
//! task.process(Some(&tracks))?;
//! assert!(task.histograms().any(|h| h.entries() > 0));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod config;
pub mod error;
pub mod geometry;
pub mod keys;
pub mod registry;
pub mod scan;
pub mod task;
pub mod track;
pub mod transform;
pub mod trigger;

pub use classify::{TrackClass, classify};
pub use config::{ScanGridConfig, ShiftConfig};
pub use error::{Result, ShiftError};
pub use geometry::{EMCAL_ETA_MAX, EmcalGeometry};
pub use keys::{AcceptanceScope, AccumulatorKey, KEY_COUNT, SelectionKind, TrackScope};
pub use qps_hist::{Hist2D, UniformAxis};
pub use registry::HistogramRegistry;
pub use scan::ScanGrid;
pub use task::{OutputSink, PT_BINS, PT_MAX, QoverPtShiftTask};
pub use track::{ChargeSign, Track, TrackCategory};
pub use transform::shifted_pt;
pub use trigger::{TriggerBits, TriggerSelection, output_list_name, shift_label, task_name};

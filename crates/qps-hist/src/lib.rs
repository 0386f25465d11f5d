//! # qps-hist
//!
//! Uniformly binned accumulators for the q/Pt shift spectra.
//!
//! The crate is deliberately small: a [`UniformAxis`] with closed-form bin
//! lookup and a [`Hist2D`] accumulator that drops out-of-range fills instead
//! of crashing or wrapping. The shift task owns a fixed set of these and
//! hands them to an output sink at teardown.
//!
//! ## Example
//!
//! ```
//! use qps_hist::{Hist2D, UniformAxis};
//!
//! let x = UniformAxis::new(300, 0.0, 300.0).unwrap();
//! let y = UniformAxis::new(300, 0.0, 300.0).unwrap();
//! let mut h = Hist2D::new("PlainShiftpos", "Pt-shift;pt;pt", x, y);
//! h.fill(10.0, 9.98);
//! assert_eq!(h.entries(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axis;
pub mod error;
pub mod hist2d;

pub use axis::UniformAxis;
pub use error::{HistError, Result};
pub use hist2d::Hist2D;

//! Error types for the q/Pt shift task.

use qps_hist::HistError;
use thiserror::Error;

/// Errors raised during task setup or per-event processing.
#[derive(Error, Debug)]
pub enum ShiftError {
    /// No track collection was attached for this event; the event is skipped
    /// and the failure reported upward. Not fatal to the run.
    #[error("no track source attached for this event")]
    MissingTrackSource,

    /// A fill or lookup addressed a key with no accumulator behind it.
    #[error("no accumulator registered for '{name}'")]
    UnregisteredAccumulator {
        /// Conventional name of the addressed key.
        name: String,
    },

    /// Two accumulators were created for the same key.
    #[error("accumulator '{name}' already registered")]
    DuplicateAccumulator {
        /// Conventional name of the addressed key.
        name: String,
    },

    /// The scan configuration does not describe a valid axis.
    #[error("invalid scan grid: {0}")]
    InvalidScanGrid(#[from] HistError),

    /// The trigger class name is not one the task can select on.
    #[error("unknown trigger class '{0}'")]
    UnknownTriggerClass(String),
}

/// Result alias for task operations.
pub type Result<T> = std::result::Result<T, ShiftError>;

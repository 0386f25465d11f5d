//! Accepted-track data as handed over by the external track source.

use serde::{Deserialize, Serialize};

/// Reconstruction category reported by the track source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackCategory {
    /// Category code 0.
    Global,
    /// Category code 1.
    Complementary,
    /// Any other category code.
    Other,
}

impl TrackCategory {
    /// Map the track source's integer category code.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => TrackCategory::Global,
            1 => TrackCategory::Complementary,
            _ => TrackCategory::Other,
        }
    }
}

/// Sign of the track charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeSign {
    /// Positive charge.
    Pos,
    /// Negative charge.
    Neg,
}

impl ChargeSign {
    /// Classify a signed charge value: strictly positive selects `Pos`,
    /// zero and negative select `Neg`.
    pub fn from_charge(charge: f64) -> Self {
        if charge > 0.0 { ChargeSign::Pos } else { ChargeSign::Neg }
    }

    /// Multiplicative factor entering the q/Pt transform.
    pub fn factor(self) -> f64 {
        match self {
            ChargeSign::Pos => 1.0,
            ChargeSign::Neg => -1.0,
        }
    }

    /// Label used in accumulator names and titles.
    pub fn label(self) -> &'static str {
        match self {
            ChargeSign::Pos => "pos",
            ChargeSign::Neg => "neg",
        }
    }
}

/// One accepted track as supplied by the external source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Track {
    /// Signed charge value.
    pub charge: f64,
    /// Transverse momentum (GeV/c); the pass uses its absolute value.
    pub pt: f64,
    /// Pseudorapidity.
    pub eta: f64,
    /// Azimuthal angle in radians.
    pub phi: f64,
    /// Reconstruction category.
    pub category: TrackCategory,
}

impl Track {
    /// Convenience constructor taking the raw category code.
    pub fn from_code(charge: f64, pt: f64, eta: f64, phi: f64, code: i32) -> Self {
        Self { charge, pt, eta, phi, category: TrackCategory::from_code(code) }
    }
}

//! Track classification.
//!
//! Classification happens once per track, before any fill: the charge sign,
//! category and EMCAL membership together determine which accumulators the
//! track fans out to.

use crate::geometry::EmcalGeometry;
use crate::keys::{AcceptanceScope, TrackScope};
use crate::track::{ChargeSign, Track, TrackCategory};

/// Resolved classification of one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackClass {
    /// Charge sign.
    pub charge: ChargeSign,
    /// Reconstruction category.
    pub category: TrackCategory,
    /// True if the track points into the EMCAL window.
    pub emcal: bool,
}

/// Classify a track against the given EMCAL geometry.
pub fn classify(track: &Track, geometry: &EmcalGeometry) -> TrackClass {
    TrackClass {
        charge: ChargeSign::from_charge(track.charge),
        category: track.category,
        emcal: geometry.contains(track.eta, track.phi),
    }
}

impl TrackClass {
    /// Track scopes this class contributes to: always the inclusive scope,
    /// plus the category scope for global and complementary tracks.
    pub fn scopes(self) -> &'static [TrackScope] {
        match self.category {
            TrackCategory::Global => &[TrackScope::Inclusive, TrackScope::Global],
            TrackCategory::Complementary => &[TrackScope::Inclusive, TrackScope::Complementary],
            TrackCategory::Other => &[TrackScope::Inclusive],
        }
    }

    /// Acceptance scopes this class contributes to: always the full
    /// acceptance, plus EMCAL for tracks inside the window.
    pub fn acceptances(self) -> &'static [AcceptanceScope] {
        if self.emcal {
            &[AcceptanceScope::Full, AcceptanceScope::Emcal]
        } else {
            &[AcceptanceScope::Full]
        }
    }
}

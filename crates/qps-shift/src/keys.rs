//! The fixed accumulator taxonomy.
//!
//! Every accumulator is addressed by an [`AccumulatorKey`]: charge ×
//! {plain, scan} × track scope × acceptance scope, 24 combinations in total.
//! Keys resolve to a dense slot index once, at classification time — fills
//! never re-derive a name or look anything up by string.

use crate::track::ChargeSign;

/// Whether an accumulator holds the fixed-shift spectra or the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    /// (original pt, shifted pt) at the configured fixed shift.
    Plain,
    /// (scan offset, shifted pt at that offset) over the scan grid.
    Scan,
}

/// Track-category requirement of an accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackScope {
    /// Every accepted track.
    Inclusive,
    /// Global tracks only.
    Global,
    /// Complementary tracks only.
    Complementary,
}

/// Acceptance-region requirement of an accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcceptanceScope {
    /// Full tracking acceptance.
    Full,
    /// Tracks inside the EMCAL window only.
    Emcal,
}

/// Number of distinct accumulator keys.
pub const KEY_COUNT: usize = 24;

/// Address of one of the 24 accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccumulatorKey {
    /// Charge sign.
    pub charge: ChargeSign,
    /// Plain or scan spectra.
    pub kind: SelectionKind,
    /// Track-category requirement.
    pub scope: TrackScope,
    /// Acceptance-region requirement.
    pub acceptance: AcceptanceScope,
}

impl AccumulatorKey {
    /// Construct a key.
    pub fn new(
        charge: ChargeSign,
        kind: SelectionKind,
        scope: TrackScope,
        acceptance: AcceptanceScope,
    ) -> Self {
        Self { charge, kind, scope, acceptance }
    }

    /// Dense index into the registry slot table, `0..KEY_COUNT`.
    #[inline]
    pub fn index(self) -> usize {
        let c = match self.charge {
            ChargeSign::Pos => 0,
            ChargeSign::Neg => 1,
        };
        let k = match self.kind {
            SelectionKind::Plain => 0,
            SelectionKind::Scan => 1,
        };
        let s = match self.scope {
            TrackScope::Inclusive => 0,
            TrackScope::Global => 1,
            TrackScope::Complementary => 2,
        };
        let a = match self.acceptance {
            AcceptanceScope::Full => 0,
            AcceptanceScope::Emcal => 1,
        };
        ((c * 2 + k) * 3 + s) * 2 + a
    }

    /// All 24 keys, in dense-index order.
    pub fn all() -> impl Iterator<Item = AccumulatorKey> {
        const CHARGES: [ChargeSign; 2] = [ChargeSign::Pos, ChargeSign::Neg];
        const KINDS: [SelectionKind; 2] = [SelectionKind::Plain, SelectionKind::Scan];
        const SCOPES: [TrackScope; 3] =
            [TrackScope::Inclusive, TrackScope::Global, TrackScope::Complementary];
        const ACCEPTANCES: [AcceptanceScope; 2] = [AcceptanceScope::Full, AcceptanceScope::Emcal];

        CHARGES.into_iter().flat_map(|charge| {
            KINDS.into_iter().flat_map(move |kind| {
                SCOPES.into_iter().flat_map(move |scope| {
                    ACCEPTANCES
                        .into_iter()
                        .map(move |acceptance| AccumulatorKey { charge, kind, scope, acceptance })
                })
            })
        })
    }

    /// Conventional identifier, preserved for persisted output:
    /// `<Plain|Scan>Shift<pos|neg>[Global|Complementary][EMCAL]`.
    pub fn name(self) -> String {
        let mut name = String::with_capacity(32);
        name.push_str(match self.kind {
            SelectionKind::Plain => "PlainShift",
            SelectionKind::Scan => "ScanShift",
        });
        name.push_str(self.charge.label());
        name.push_str(match self.scope {
            TrackScope::Inclusive => "",
            TrackScope::Global => "Global",
            TrackScope::Complementary => "Complementary",
        });
        name.push_str(match self.acceptance {
            AcceptanceScope::Full => "",
            AcceptanceScope::Emcal => "EMCAL",
        });
        name
    }

    /// Descriptive title with `;`-separated axis labels.
    pub fn title(self) -> String {
        let qualifier = match (self.scope, self.acceptance) {
            (TrackScope::Inclusive, AcceptanceScope::Full) => "",
            (TrackScope::Inclusive, AcceptanceScope::Emcal) => " (EMCAL acceptance)",
            (TrackScope::Global, AcceptanceScope::Full) => " (glob. tracks)",
            (TrackScope::Global, AcceptanceScope::Emcal) => " (glob. tracks, EMCAL acceptance)",
            (TrackScope::Complementary, AcceptanceScope::Full) => " (comp. tracks)",
            (TrackScope::Complementary, AcceptanceScope::Emcal) => {
                " (comp. tracks, EMCAL acceptance)"
            }
        };
        match self.kind {
            SelectionKind::Plain => format!(
                "Pt-shift for charge {}{}; p_{{t}}^{{orig}} (GeV/c); p_{{t}}^{{shift}}",
                self.charge.label(),
                qualifier
            ),
            SelectionKind::Scan => format!(
                "{} charged particle spectrum as function of q/pt shift{}; q/pt shift; pt",
                self.charge.label(),
                qualifier
            ),
        }
    }
}

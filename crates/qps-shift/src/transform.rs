//! The q/Pt shift transform.

use crate::track::ChargeSign;

/// Transverse momentum after shifting the signed inverse momentum.
///
/// The shift acts on q/pt, the linear variable for the modeled distortion:
///
/// `shifted = 1 / (shift * q + 1 / pt)` with `q = ±1`
///
/// When the shifted inverse is exactly zero the result is a signed infinity.
/// That value is passed through unclamped; the fill path downstream discards
/// it as out-of-range.
#[inline]
pub fn shifted_pt(pt_orig: f64, shift: f64, charge: ChargeSign) -> f64 {
    1.0 / (shift * charge.factor() + 1.0 / pt_orig)
}

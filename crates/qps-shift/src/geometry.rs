//! EMCAL acceptance window, passed explicitly into classification.

/// Pseudorapidity half-window of the EMCAL acceptance.
pub const EMCAL_ETA_MAX: f64 = 0.7;

/// Azimuthal coverage of the calorimeter.
///
/// The detector-geometry collaborator quotes the supermodule limits in
/// degrees; the window converts once at construction and stores radians,
/// matching the track phi convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmcalGeometry {
    phi_min: f64,
    phi_max: f64,
}

impl EmcalGeometry {
    /// Build from azimuthal limits in degrees.
    pub fn from_degrees(phi_min_deg: f64, phi_max_deg: f64) -> Self {
        Self { phi_min: phi_min_deg.to_radians(), phi_max: phi_max_deg.to_radians() }
    }

    /// Lower azimuthal limit in radians.
    pub fn phi_min(&self) -> f64 {
        self.phi_min
    }

    /// Upper azimuthal limit in radians.
    pub fn phi_max(&self) -> f64 {
        self.phi_max
    }

    /// Whether `(eta, phi)` points into the calorimeter acceptance:
    /// `|eta| < 0.7` and phi within the azimuthal limits (inclusive).
    pub fn contains(&self, eta: f64, phi: f64) -> bool {
        eta.abs() < EMCAL_ETA_MAX && phi >= self.phi_min && phi <= self.phi_max
    }
}

impl Default for EmcalGeometry {
    /// Nominal full-detector coverage, 80 to 187 degrees in azimuth.
    fn default() -> Self {
        Self::from_degrees(80.0, 187.0)
    }
}

//! Trigger selection and task naming.
//!
//! A task is bound to a single trigger class at construction. An event is
//! processed only if the event's selection bits overlap the class's bit and
//! the event's fired-class string contains the class name.

use crate::error::{Result, ShiftError};

/// Bitmask of physics-selection classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerBits(pub u32);

impl TriggerBits {
    /// Minimum-bias selection (INT7).
    pub const MIN_BIAS: TriggerBits = TriggerBits(1 << 0);
    /// EMCAL jet trigger selection (EJ1, EJ2).
    pub const EMCAL_JET: TriggerBits = TriggerBits(1 << 1);
    /// EMCAL gamma trigger selection (EG1, EG2).
    pub const EMCAL_GAMMA: TriggerBits = TriggerBits(1 << 2);

    /// True if any bit is shared with `other`.
    #[inline]
    pub fn overlaps(self, other: TriggerBits) -> bool {
        self.0 & other.0 != 0
    }
}

/// The trigger class a task selects on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSelection {
    bits: TriggerBits,
    class: String,
}

impl TriggerSelection {
    /// Resolve a trigger class name to its selection bit.
    ///
    /// Known classes are `INT7`, `EJ1`, `EJ2`, `EG1` and `EG2`; anything else
    /// is rejected.
    pub fn parse(class: &str) -> Result<Self> {
        let bits = match class {
            "INT7" => TriggerBits::MIN_BIAS,
            "EJ1" | "EJ2" => TriggerBits::EMCAL_JET,
            "EG1" | "EG2" => TriggerBits::EMCAL_GAMMA,
            _ => return Err(ShiftError::UnknownTriggerClass(class.to_string())),
        };
        Ok(Self { bits, class: class.to_string() })
    }

    /// The class name this selection was parsed from.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Event gate: the event's selection bits must overlap this class's bit
    /// and the fired-class string must contain the class name.
    pub fn accepts(&self, selection_bits: TriggerBits, fired_classes: &str) -> bool {
        self.bits.overlaps(selection_bits) && fired_classes.contains(&self.class)
    }
}

/// Compact label encoding a shift value: sign character (`p` for positive,
/// `m` otherwise) followed by `|shift * 1e5|` as a zero-padded five-digit
/// integer. `2e-4` becomes `p00020`.
pub fn shift_label(shift: f64) -> String {
    let sign = if shift > 0.0 { 'p' } else { 'm' };
    format!("{}{:05}", sign, (shift * 1e5).abs() as i64)
}

/// Task identifier, unique per (shift, trigger class) pair.
pub fn task_name(shift: f64, trigger_class: &str) -> String {
    format!("QOverPtTask_{}_{}", shift_label(shift), trigger_class)
}

/// Name of the published output group for a (shift, trigger class) pair.
pub fn output_list_name(shift: f64, trigger_class: &str) -> String {
    format!("QOverPtShiftHistos_{}_{}", shift_label(shift), trigger_class)
}

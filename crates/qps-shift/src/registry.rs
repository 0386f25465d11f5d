//! Slot-indexed accumulator storage.

use qps_hist::{Hist2D, UniformAxis};

use crate::error::{Result, ShiftError};
use crate::keys::{AccumulatorKey, KEY_COUNT};

/// Owns the accumulators, addressed by [`AccumulatorKey`].
///
/// Every key maps to a fixed slot; creating the same key twice or filling a
/// key that was never created is an error.
#[derive(Debug)]
pub struct HistogramRegistry {
    slots: Vec<Option<Hist2D>>,
}

impl HistogramRegistry {
    /// An empty registry with one vacant slot per key.
    pub fn new() -> Self {
        Self { slots: (0..KEY_COUNT).map(|_| None).collect() }
    }

    /// Create the accumulator for `key`, named and titled by the key itself.
    pub fn create(&mut self, key: AccumulatorKey, x: UniformAxis, y: UniformAxis) -> Result<()> {
        let slot = &mut self.slots[key.index()];
        if slot.is_some() {
            return Err(ShiftError::DuplicateAccumulator { name: key.name() });
        }
        *slot = Some(Hist2D::new(key.name(), key.title(), x, y));
        Ok(())
    }

    /// Record `(x, y)` into the accumulator for `key`.
    #[inline]
    pub fn fill(&mut self, key: AccumulatorKey, x: f64, y: f64) -> Result<()> {
        match &mut self.slots[key.index()] {
            Some(hist) => {
                hist.fill(x, y);
                Ok(())
            }
            None => Err(ShiftError::UnregisteredAccumulator { name: key.name() }),
        }
    }

    /// Read access to the accumulator for `key`.
    pub fn get(&self, key: AccumulatorKey) -> Result<&Hist2D> {
        self.slots[key.index()]
            .as_ref()
            .ok_or_else(|| ShiftError::UnregisteredAccumulator { name: key.name() })
    }

    /// Number of created accumulators.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True if no accumulator has been created.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Created accumulators, in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Hist2D> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Consume the registry, yielding the created accumulators in key order.
    pub fn into_histograms(self) -> Vec<Hist2D> {
        self.slots.into_iter().flatten().collect()
    }
}

impl Default for HistogramRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{AcceptanceScope, SelectionKind, TrackScope};
    use crate::track::ChargeSign;

    fn pt_axis() -> UniformAxis {
        UniformAxis::new(300, 0.0, 300.0).unwrap()
    }

    fn some_key() -> AccumulatorKey {
        AccumulatorKey::new(
            ChargeSign::Pos,
            SelectionKind::Plain,
            TrackScope::Inclusive,
            AcceptanceScope::Full,
        )
    }

    #[test]
    fn create_fill_get() {
        let mut registry = HistogramRegistry::new();
        assert!(registry.is_empty());
        registry.create(some_key(), pt_axis(), pt_axis()).unwrap();
        assert_eq!(registry.len(), 1);

        registry.fill(some_key(), 10.0, 9.5).unwrap();
        let hist = registry.get(some_key()).unwrap();
        assert_eq!(hist.entries(), 1);
        assert_eq!(hist.name(), "PlainShiftpos");
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let mut registry = HistogramRegistry::new();
        registry.create(some_key(), pt_axis(), pt_axis()).unwrap();
        let err = registry.create(some_key(), pt_axis(), pt_axis()).unwrap_err();
        assert!(
            matches!(err, ShiftError::DuplicateAccumulator { ref name } if name == "PlainShiftpos")
        );
    }

    #[test]
    fn filling_a_vacant_slot_is_rejected() {
        let mut registry = HistogramRegistry::new();
        let err = registry.fill(some_key(), 1.0, 1.0).unwrap_err();
        assert!(matches!(err, ShiftError::UnregisteredAccumulator { .. }));
        let err = registry.get(some_key()).unwrap_err();
        assert!(matches!(err, ShiftError::UnregisteredAccumulator { .. }));
    }

    #[test]
    fn full_taxonomy_fits() {
        let mut registry = HistogramRegistry::new();
        for key in AccumulatorKey::all() {
            registry.create(key, pt_axis(), pt_axis()).unwrap();
        }
        assert_eq!(registry.len(), KEY_COUNT);
        let names: Vec<_> = registry.iter().map(|h| h.name().to_string()).collect();
        assert_eq!(names.len(), KEY_COUNT);
        assert_eq!(registry.into_histograms().len(), KEY_COUNT);
    }
}

//! The q/pt shift task: setup, per-event accumulation, publish.

use log::{debug, warn};
use qps_hist::{Hist2D, UniformAxis};

use crate::classify::{TrackClass, classify};
use crate::config::ShiftConfig;
use crate::error::{Result, ShiftError};
use crate::geometry::EmcalGeometry;
use crate::keys::{AcceptanceScope, AccumulatorKey, SelectionKind, TrackScope};
use crate::registry::HistogramRegistry;
use crate::scan::ScanGrid;
use crate::track::{ChargeSign, Track};
use crate::transform::shifted_pt;
use crate::trigger::{TriggerBits, TriggerSelection, output_list_name, task_name};

/// Bin count of every momentum axis.
pub const PT_BINS: usize = 300;
/// Upper edge of every momentum axis (GeV/c); the lower edge is 0.
pub const PT_MAX: f64 = 300.0;

/// Receiver for finished accumulators at publish time.
pub trait OutputSink {
    /// Accept one finished accumulator.
    fn accept(&mut self, hist: &Hist2D);
}

/// One q/pt shift task, bound to a fixed shift and a trigger class.
///
/// Lifecycle: [`QoverPtShiftTask::new`] validates the configuration and
/// creates all 24 accumulators, [`QoverPtShiftTask::process`] runs the
/// accumulation pass over one event's tracks, and the results are read out
/// through [`QoverPtShiftTask::publish`] or
/// [`QoverPtShiftTask::into_histograms`].
#[derive(Debug)]
pub struct QoverPtShiftTask {
    name: String,
    shift: f64,
    trigger: TriggerSelection,
    geometry: EmcalGeometry,
    histos: HistogramRegistry,
    scan: ScanGrid,
}

impl QoverPtShiftTask {
    /// Set up a task: parse the trigger class, create the 24 accumulators
    /// and derive the scan grid from the scan axis.
    pub fn new(config: &ShiftConfig, geometry: EmcalGeometry) -> Result<Self> {
        let trigger = TriggerSelection::parse(&config.trigger)?;
        let name = task_name(config.qpt_shift, trigger.class());

        let pt = UniformAxis::new(PT_BINS, 0.0, PT_MAX)?;
        let scan_axis = UniformAxis::new(config.scan.bins, config.scan.min, config.scan.max)?;

        let mut histos = HistogramRegistry::new();
        for key in AccumulatorKey::all() {
            let x = match key.kind {
                SelectionKind::Plain => pt.clone(),
                SelectionKind::Scan => scan_axis.clone(),
            };
            histos.create(key, x, pt.clone())?;
        }

        // The offsets are read back from a scan accumulator's axis, so every
        // offset is the center of the bin it is recorded in.
        let scan_key = AccumulatorKey::new(
            ChargeSign::Pos,
            SelectionKind::Scan,
            TrackScope::Inclusive,
            AcceptanceScope::Full,
        );
        let scan = ScanGrid::from_axis(histos.get(scan_key)?.x_axis());

        debug!(
            "task {}: {} accumulators, {} scan offsets, trigger {}",
            name,
            histos.len(),
            scan.len(),
            trigger.class()
        );
        Ok(Self { name, shift: config.qpt_shift, trigger, geometry, histos, scan })
    }

    /// Task identifier, `QOverPtTask_<label>_<trigger>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixed q/pt shift applied by the plain accumulators (c/GeV).
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// The EMCAL window used for acceptance classification.
    pub fn geometry(&self) -> &EmcalGeometry {
        &self.geometry
    }

    /// The scan grid.
    pub fn scan(&self) -> &ScanGrid {
        &self.scan
    }

    /// Name of the published output group,
    /// `QOverPtShiftHistos_<label>_<trigger>`.
    pub fn output_list_name(&self) -> String {
        output_list_name(self.shift, self.trigger.class())
    }

    /// Event gate, evaluated before [`QoverPtShiftTask::process`]: the
    /// event's selection bits must overlap the task's trigger class and the
    /// fired-class string must contain the class name.
    pub fn accepts_event(&self, selection: TriggerBits, fired_classes: &str) -> bool {
        self.trigger.accepts(selection, fired_classes)
    }

    /// Run the accumulation pass over one event.
    ///
    /// `None` means no track source is attached; the event is skipped with a
    /// warning and [`ShiftError::MissingTrackSource`], which callers treat as
    /// per-event, not fatal.
    pub fn process(&mut self, tracks: Option<&[Track]>) -> Result<()> {
        let Some(tracks) = tracks else {
            warn!("task {}: no track source attached, skipping event", self.name);
            return Err(ShiftError::MissingTrackSource);
        };
        for track in tracks {
            self.accumulate(track)?;
        }
        Ok(())
    }

    fn accumulate(&mut self, track: &Track) -> Result<()> {
        let class = classify(track, &self.geometry);
        let pt_orig = track.pt.abs();

        let pt_fixed = shifted_pt(pt_orig, self.shift, class.charge);
        fill_fanout(&mut self.histos, SelectionKind::Plain, class, pt_orig, pt_fixed)?;

        for &offset in self.scan.offsets() {
            let pt_scan = shifted_pt(pt_orig, offset, class.charge);
            fill_fanout(&mut self.histos, SelectionKind::Scan, class, offset, pt_scan)?;
        }
        Ok(())
    }

    /// The accumulator for `key`.
    pub fn histogram(&self, key: AccumulatorKey) -> Result<&Hist2D> {
        self.histos.get(key)
    }

    /// All accumulators, in fixed key order.
    pub fn histograms(&self) -> impl Iterator<Item = &Hist2D> {
        self.histos.iter()
    }

    /// Hand every finished accumulator to `sink`, in fixed key order.
    pub fn publish<S: OutputSink>(&self, sink: &mut S) {
        for hist in self.histos.iter() {
            sink.accept(hist);
        }
    }

    /// Tear down the task, transferring ownership of the accumulators.
    pub fn into_histograms(self) -> Vec<Hist2D> {
        self.histos.into_histograms()
    }
}

/// Fill one accumulator per (scope, acceptance) pair the class belongs to.
fn fill_fanout(
    histos: &mut HistogramRegistry,
    kind: SelectionKind,
    class: TrackClass,
    x: f64,
    y: f64,
) -> Result<()> {
    for &scope in class.scopes() {
        for &acceptance in class.acceptances() {
            let key = AccumulatorKey::new(class.charge, kind, scope, acceptance);
            histos.fill(key, x, y)?;
        }
    }
    Ok(())
}

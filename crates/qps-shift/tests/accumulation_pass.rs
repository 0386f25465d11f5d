//! Integration tests: full accumulation passes over synthetic events.

use qps_shift::{
    AcceptanceScope, AccumulatorKey, ChargeSign, EmcalGeometry, Hist2D, OutputSink,
    QoverPtShiftTask, SelectionKind, ShiftConfig, Track, TrackCategory, TrackScope,
};

fn make_task(qpt_shift: f64) -> QoverPtShiftTask {
    let config = ShiftConfig { qpt_shift, trigger: "INT7".to_string(), scan: Default::default() };
    QoverPtShiftTask::new(&config, EmcalGeometry::default()).unwrap()
}

fn track(charge: f64, pt: f64, eta: f64, phi: f64, category: TrackCategory) -> Track {
    Track { charge, pt, eta, phi, category }
}

fn key(
    charge: ChargeSign,
    kind: SelectionKind,
    scope: TrackScope,
    acceptance: AcceptanceScope,
) -> AccumulatorKey {
    AccumulatorKey::new(charge, kind, scope, acceptance)
}

#[test]
fn positive_global_track_in_emcal_fans_out_to_four_slots_per_kind() {
    let mut task = make_task(2e-4);
    // phi = 2.0 rad sits inside the default EMCAL window (80 to 187 degrees).
    let tracks = [track(1.0, 10.0, 0.3, 2.0, TrackCategory::Global)];
    task.process(Some(&tracks)).unwrap();

    for k in AccumulatorKey::all() {
        let hist = task.histogram(k).unwrap();
        let touched = k.charge == ChargeSign::Pos && k.scope != TrackScope::Complementary;
        let expected = match k.kind {
            SelectionKind::Plain if touched => 1,
            SelectionKind::Scan if touched => 100,
            _ => 0,
        };
        assert_eq!(hist.entries(), expected, "unexpected entries in {}", hist.name());
        assert_eq!(hist.dropped(), 0, "unexpected drops in {}", hist.name());
    }

    // pt = 10 lands on a bin edge and belongs to bin 10; the shifted value
    // 1 / (2e-4 + 0.1) = 9.98 belongs to bin 9.
    let plain = task
        .histogram(key(
            ChargeSign::Pos,
            SelectionKind::Plain,
            TrackScope::Inclusive,
            AcceptanceScope::Full,
        ))
        .unwrap();
    assert_eq!(plain.value(10, 9), 1.0);
    assert_eq!(plain.sum(), 1.0);
}

#[test]
fn scan_records_each_offset_in_its_own_column() {
    let mut task = make_task(2e-4);
    let tracks = [track(1.0, 10.0, 0.3, 2.0, TrackCategory::Global)];
    task.process(Some(&tracks)).unwrap();

    let scan = task
        .histogram(key(
            ChargeSign::Pos,
            SelectionKind::Scan,
            TrackScope::Inclusive,
            AcceptanceScope::Full,
        ))
        .unwrap();

    // The grid is the scan axis's own bin centers.
    assert_eq!(task.scan().offsets(), scan.x_axis().centers().as_slice());

    // One fill per offset, each in its own column; the shifted pt stays close
    // to 10 so the y bin is 9 or 10 depending on the offset's sign.
    for i in 0..scan.x_axis().n_bins() {
        assert_eq!(scan.value(i, 9) + scan.value(i, 10), 1.0, "column {i}");
    }
}

#[test]
fn track_outside_emcal_never_reaches_emcal_slots() {
    let mut task = make_task(2e-4);
    let tracks = [track(-1.0, 3.0, 0.9, 2.0, TrackCategory::Complementary)];
    task.process(Some(&tracks)).unwrap();

    for k in AccumulatorKey::all() {
        let hist = task.histogram(k).unwrap();
        let touched = k.charge == ChargeSign::Neg
            && k.scope != TrackScope::Global
            && k.acceptance == AcceptanceScope::Full;
        let expected = match k.kind {
            SelectionKind::Plain if touched => 1,
            SelectionKind::Scan if touched => 100,
            _ => 0,
        };
        assert_eq!(hist.entries(), expected, "unexpected entries in {}", hist.name());
    }
}

#[test]
fn processing_the_same_event_twice_doubles_every_count() {
    let mut task = make_task(-1e-4);
    let tracks = [
        track(1.0, 10.0, 0.3, 2.0, TrackCategory::Global),
        track(-1.0, 25.0, -0.5, 1.5, TrackCategory::Complementary),
        track(1.0, 120.0, 1.1, 0.2, TrackCategory::Other),
    ];

    task.process(Some(&tracks)).unwrap();
    let first: Vec<(u64, f64)> = task.histograms().map(|h| (h.entries(), h.sum())).collect();

    task.process(Some(&tracks)).unwrap();
    for (hist, (entries, sum)) in task.histograms().zip(first) {
        assert_eq!(hist.entries(), 2 * entries, "{}", hist.name());
        assert_eq!(hist.sum(), 2.0 * sum, "{}", hist.name());
    }
}

#[test]
fn singular_shift_is_dropped_not_propagated() {
    // With shift = -0.25 a positive track at pt = 4 hits the pole exactly:
    // the shifted pt is infinite and must land in the drop counter.
    let mut task = make_task(-0.25);
    let tracks = [track(1.0, 4.0, 0.3, 2.0, TrackCategory::Global)];
    task.process(Some(&tracks)).unwrap();

    for k in AccumulatorKey::all() {
        let hist = task.histogram(k).unwrap();
        let touched = k.charge == ChargeSign::Pos && k.scope != TrackScope::Complementary;
        match k.kind {
            SelectionKind::Plain if touched => {
                assert_eq!(hist.entries(), 0, "{}", hist.name());
                assert_eq!(hist.dropped(), 1, "{}", hist.name());
            }
            SelectionKind::Scan if touched => {
                // Scan offsets are far from the pole at this pt.
                assert_eq!(hist.entries(), 100, "{}", hist.name());
                assert_eq!(hist.dropped(), 0, "{}", hist.name());
            }
            _ => assert_eq!(hist.entries() + hist.dropped(), 0, "{}", hist.name()),
        }
    }
}

#[derive(Default)]
struct CollectingSink {
    names: Vec<String>,
    payloads: Vec<serde_json::Value>,
}

impl OutputSink for CollectingSink {
    fn accept(&mut self, hist: &Hist2D) {
        self.names.push(hist.name().to_string());
        self.payloads.push(serde_json::to_value(hist).unwrap());
    }
}

#[test]
fn publish_hands_over_all_histograms_in_key_order() {
    let mut task = make_task(2e-4);
    let tracks = [track(1.0, 10.0, 0.3, 2.0, TrackCategory::Global)];
    task.process(Some(&tracks)).unwrap();

    let mut sink = CollectingSink::default();
    task.publish(&mut sink);

    let expected: Vec<String> = AccumulatorKey::all().map(AccumulatorKey::name).collect();
    assert_eq!(sink.names, expected);
    assert_eq!(sink.names[0], "PlainShiftpos");
    assert_eq!(sink.names[23], "ScanShiftnegComplementaryEMCAL");

    assert_eq!(sink.payloads[0]["name"], "PlainShiftpos");
    assert_eq!(sink.payloads[0]["entries"], 1);

    // Teardown transfers the same histograms by value.
    let owned = task.into_histograms();
    assert_eq!(owned.len(), 24);
    assert_eq!(owned[0].entries(), 1);
}

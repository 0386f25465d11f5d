//! Toy event loop: gate synthetic events, accumulate their tracks and print
//! a summary of the resulting spectra.
//! Run:
//!   cargo run -p qps-shift --example toy_scan

use qps_shift::{
    EmcalGeometry, Hist2D, OutputSink, QoverPtShiftTask, ShiftConfig, Track, TrackCategory,
    TriggerBits,
};

fn rand_f64(state: &mut u64) -> f64 {
    // xorshift64*
    *state ^= *state >> 12;
    *state ^= *state << 25;
    *state ^= *state >> 27;
    let x = (*state).wrapping_mul(2685821657736338717u64);
    // Map to [0, 1)
    (x >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
}

fn make_event(state: &mut u64, n: usize) -> Vec<Track> {
    (0..n)
        .map(|_| {
            let u = rand_f64(state);
            Track {
                charge: if rand_f64(state) < 0.5 { 1.0 } else { -1.0 },
                // Steeply falling toy spectrum above a 150 MeV cutoff.
                pt: 0.15 - 3.0 * (1.0 - u).ln(),
                eta: -0.9 + 1.8 * rand_f64(state),
                phi: std::f64::consts::TAU * rand_f64(state),
                category: match rand_f64(state) {
                    c if c < 0.70 => TrackCategory::Global,
                    c if c < 0.95 => TrackCategory::Complementary,
                    _ => TrackCategory::Other,
                },
            }
        })
        .collect()
}

struct TableSink {
    rows: Vec<(String, u64, u64)>,
}

impl OutputSink for TableSink {
    fn accept(&mut self, hist: &Hist2D) {
        self.rows.push((hist.name().to_string(), hist.entries(), hist.dropped()));
    }
}

fn main() {
    let config =
        ShiftConfig { qpt_shift: 2e-4, trigger: "INT7".to_string(), scan: Default::default() };
    let mut task = QoverPtShiftTask::new(&config, EmcalGeometry::default()).unwrap();
    println!("{} ({} scan offsets)", task.name(), task.scan().len());

    let mut state = 0x0123_4567_89ab_cdefu64;
    let mut accepted = 0usize;
    let mut skipped = 0usize;
    for event in 0..200 {
        // Alternate min-bias and gamma-triggered events; this task only
        // selects the former.
        let (bits, fired) = if event % 2 == 0 {
            (TriggerBits::MIN_BIAS, "CINT7-B-NOPF-CENT")
        } else {
            (TriggerBits::EMCAL_GAMMA, "CEMC7EG1-B-NOPF-CENTNOTRD")
        };
        if !task.accepts_event(bits, fired) {
            skipped += 1;
            continue;
        }
        accepted += 1;

        let tracks = make_event(&mut state, 200);
        task.process(Some(&tracks)).unwrap();
    }
    println!("events: {accepted} accepted, {skipped} skipped");

    let mut sink = TableSink { rows: Vec::new() };
    task.publish(&mut sink);
    println!("\n{}", task.output_list_name());
    println!("{:<34} {:>10} {:>8}", "histogram", "entries", "dropped");
    for (name, entries, dropped) in &sink.rows {
        println!("{name:<34} {entries:>10} {dropped:>8}");
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use qps_hist::{Hist2D, UniformAxis};

fuzz_target!(|data: &[u8]| {
    let Ok(x_axis) = UniformAxis::new(300, 0.0, 300.0) else { return };
    let Ok(y_axis) = UniformAxis::new(100, -1e-3, 1e-3) else { return };
    let mut hist = Hist2D::new("fuzz", "fuzz;x;y", x_axis, y_axis);

    // Interpret the input as raw (x, y) pairs. NaN, infinities and subnormals
    // all come through here; the fill path must drop them, never panic.
    for chunk in data.chunks_exact(16) {
        let x = f64::from_le_bytes(chunk[0..8].try_into().unwrap());
        let y = f64::from_le_bytes(chunk[8..16].try_into().unwrap());
        hist.fill(x, y);
    }

    assert_eq!(hist.entries() + hist.dropped(), (data.len() / 16) as u64);
});

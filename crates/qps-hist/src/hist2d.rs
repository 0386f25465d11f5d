//! Rectangular 2D accumulator with drop-out-of-range fill semantics.

use serde::{Deserialize, Serialize};

use crate::axis::UniformAxis;

/// A named 2D histogram over uniform x/y axes.
///
/// `fill` is additive and order-independent. Coordinates outside either axis
/// range — including NaN and ±inf — are dropped and tallied in
/// [`Hist2D::dropped`]; in-range coordinates increment one bin and the
/// [`Hist2D::entries`] count. Contents only grow; there is no reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hist2D {
    name: String,
    title: String,
    x: UniformAxis,
    y: UniformAxis,
    /// Bin contents, row-major over y: `bins[iy * n_x + ix]`.
    bins: Vec<f64>,
    entries: u64,
    dropped: u64,
}

impl Hist2D {
    /// Create an empty accumulator over the given axes.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        x: UniformAxis,
        y: UniformAxis,
    ) -> Self {
        let bins = vec![0.0; x.n_bins() * y.n_bins()];
        Self { name: name.into(), title: title.into(), x, y, bins, entries: 0, dropped: 0 }
    }

    /// Histogram name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Histogram title, `"<text>;<x label>;<y label>"` convention.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// X axis.
    pub fn x_axis(&self) -> &UniformAxis {
        &self.x
    }

    /// Y axis.
    pub fn y_axis(&self) -> &UniformAxis {
        &self.y
    }

    /// Add one count at `(x, y)`.
    ///
    /// Out-of-range and non-finite coordinates are discarded, never an error.
    pub fn fill(&mut self, x: f64, y: f64) {
        match (self.x.index(x), self.y.index(y)) {
            (Some(ix), Some(iy)) => {
                self.bins[iy * self.x.n_bins() + ix] += 1.0;
                self.entries += 1;
            }
            _ => self.dropped += 1,
        }
    }

    /// Content of bin `(ix, iy)`; zero for indices outside the axes.
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        if ix >= self.x.n_bins() || iy >= self.y.n_bins() {
            return 0.0;
        }
        self.bins[iy * self.x.n_bins() + ix]
    }

    /// Number of fills that landed inside both axes.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Number of fills discarded as out-of-range or non-finite.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Sum of all bin contents.
    pub fn sum(&self) -> f64 {
        self.bins.iter().sum()
    }
}

// File: crates/board-core/src/series.rs
// Summary: Series model for sparkline and chart samples (implicit index, finite values).

use crate::generate::preview_series;
use crate::types::PREVIEW_POINTS;

/// Ordered sequence of numeric samples; the index of each sample is its
/// position. Length is fixed at construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Build from raw values. Non-finite samples are dropped so every
    /// retained value is usable in range and path math.
    pub fn from_values(values: Vec<f64>) -> Self {
        let values = values.into_iter().filter(|v| v.is_finite()).collect();
        Self { values }
    }

    /// Deterministic preview series for a ticker (see [`preview_series`]).
    pub fn preview(symbol: &str, current_value: f64, percent_change: f64) -> Self {
        Self::from_values(preview_series(symbol, current_value, percent_change, PREVIEW_POINTS))
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn values(&self) -> &[f64] { &self.values }

    pub fn first(&self) -> Option<f64> { self.values.first().copied() }

    pub fn last(&self) -> Option<f64> { self.values.last().copied() }

    /// Observed (min, max) over the samples. An empty series reports
    /// `(0.0, 1.0)` so downstream scaling stays defined.
    pub fn range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 1.0);
        }
        (min, max)
    }
}

// File: crates/board-core/src/path.rs
// Summary: Sparkline path builder; series samples to SVG polyline/fill path data.

use crate::geometry::fmt_px;
use crate::scale::ValueScale;
use crate::series::Series;

/// SVG path data for one sparkline: the polyline and, optionally, the
/// closed fill polygon underneath it. Either string may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparklinePath {
    pub line: String,
    pub fill: String,
}

/// Map a series onto `width` x `height` pixels and emit SVG path data.
///
/// Values are normalized to `[0, height]` against the series' observed
/// min/max (a flat series uses a fallback span of 1). One vertex is emitted
/// per sample; X advances in equal steps across `width`. When `fill` is
/// requested the polyline is closed through the two bottom corners.
///
/// An empty series yields empty strings; callers render a placeholder block.
pub fn build_path(series: &Series, width: f64, height: f64, fill: bool) -> SparklinePath {
    if series.is_empty() {
        return SparklinePath::default();
    }

    let (vmin, vmax) = series.range();
    let scale = ValueScale::new(0.0, height, vmin, vmax);
    // single-sample series: pin the step denominator to 1
    let step = width / series.len().saturating_sub(1).max(1) as f64;

    let mut line = String::with_capacity(series.len() * 16);
    for (i, &v) in series.values().iter().enumerate() {
        let x = step * i as f64;
        let y = scale.to_px(v);
        if i == 0 {
            line.push_str("M ");
        } else {
            line.push_str(" L ");
        }
        line.push_str(&fmt_px(x));
        line.push(' ');
        line.push_str(&fmt_px(y));
    }

    let fill_path = if fill {
        format!(
            "{} L {} {} L {} {} Z",
            line,
            fmt_px(width),
            fmt_px(height),
            fmt_px(0.0),
            fmt_px(height)
        )
    } else {
        String::new()
    };

    SparklinePath { line, fill: fill_path }
}

// File: crates/board-widgets/src/gauge.rs
// Summary: Semicircular arc gauge widget (track arc, value arc, centered labels).

use board_core::{arc_path, fraction, PointF};

use crate::dashboard::DashboardConfig;
use crate::svg::SvgDoc;

const TRACK_WIDTH: f64 = 8.0;

/// Render an arc gauge for `value` out of `max`. The ratio is clamped, so
/// overdriven values draw exactly like a full gauge.
pub fn render(label: &str, value: f64, max: f64, config: &DashboardConfig, width: f64, height: f64) -> String {
    let theme = &config.theme;
    let radius = (width.min(height) / 2.0 - TRACK_WIDTH).max(1.0);
    let center = PointF::new(width / 2.0, height / 2.0);

    let mut doc = SvgDoc::new(width, height);
    doc.rect_rounded(0.0, 0.0, width, height, 6.0, &theme.card.hex());

    doc.stroke_path(&arc_path(center, radius, 1.0, 1.0), &theme.gauge_track.hex(), TRACK_WIDTH);
    let frac = fraction(value, max);
    if frac > 0.0 {
        doc.stroke_path(&arc_path(center, radius, value, max), &theme.gauge_value.hex(), TRACK_WIDTH);
    }

    doc.text_mid(center.x, center.y + 4.0, 16.0, &theme.text.hex(), &format!("{:.0}%", frac * 100.0));
    doc.text_mid(center.x, height - 8.0, 10.0, &theme.text_muted.hex(), label);
    doc.finish()
}

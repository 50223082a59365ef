// File: crates/board-widgets/src/price_chart.rs
// Summary: Price chart card; grid, y-axis labels, series line with area fill, last-price marker.

use board_core::grid::tick_labels;
use board_core::{build_path, linspace, RectF, Series, ValueScale};

use crate::dashboard::DashboardConfig;
use crate::market::Ticker;
use crate::svg::{format_price, format_signed_percent, placeholder_block, SvgDoc};

const H_DIVISIONS: usize = 6;
const V_DIVISIONS: usize = 4;

/// Render the full chart card for a ticker and its series.
pub fn render(ticker: &Ticker, series: &Series, config: &DashboardConfig, width: f64, height: f64) -> String {
    let theme = &config.theme;
    if series.is_empty() {
        return placeholder_block(theme, width, height);
    }

    let mut doc = SvgDoc::new(width, height);
    doc.rect_rounded(0.0, 0.0, width, height, 6.0, &theme.card.hex());

    doc.text(10.0, 18.0, 13.0, &theme.text.hex(), &ticker.symbol);
    doc.text(70.0, 18.0, 12.0, &theme.text_muted.hex(), &format_price(ticker.price));
    let change_color = if ticker.is_gain() { theme.gain.hex() } else { theme.loss.hex() };
    doc.text_end(width - 10.0, 18.0, 11.0, &change_color, &format_signed_percent(ticker.change_24h));
    doc.text_end(width - 70.0, 18.0, 10.0, &theme.text_muted.hex(), &format!("vol {:.0}", ticker.volume));

    let plot = RectF::from_ltwh(48.0, 28.0, (width - 60.0).max(1.0), (height - 48.0).max(1.0));

    // grid
    for y in linspace(plot.top, plot.bottom(), H_DIVISIONS) {
        doc.line(plot.left, y, plot.right(), y, &theme.grid.hex(), 1.0);
    }
    for x in linspace(plot.left, plot.right(), V_DIVISIONS) {
        doc.line(x, plot.top, x, plot.bottom(), &theme.grid.hex(), 1.0);
    }

    // y-axis labels, bottom-up
    let (vmin, vmax) = series.range();
    let axis_scale = ValueScale::new(plot.top, plot.bottom(), vmin, vmax);
    for (value, label) in tick_labels(vmin, vmax, H_DIVISIONS) {
        doc.text_end(plot.left - 6.0, axis_scale.to_px(value) + 3.0, 9.0, &theme.text_muted.hex(), &label);
    }

    let paths = build_path(series, plot.width, plot.height, true);
    let mut inner = SvgDoc::new(plot.width, plot.height);
    inner.fill_path(&paths.fill, &theme.spark_fill.hex(), 0.18);
    inner.stroke_path(&paths.line, &theme.spark_stroke.hex(), 2.0);
    if let Some(last) = series.last() {
        let scale = ValueScale::new(0.0, plot.height, vmin, vmax);
        inner.circle(plot.width, scale.to_px(last), 3.0, &theme.accent.hex());
    }
    let inner_markup = inner.finish();
    doc.group_translated(plot.left, plot.top, &inner_markup);

    doc.finish()
}

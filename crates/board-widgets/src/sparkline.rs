// File: crates/board-widgets/src/sparkline.rs
// Summary: Sparkline preview card; deterministic trend line plus price/percent labels.

use board_core::{build_path, Series};
use board_core::types::{CARD_HEIGHT, CARD_WIDTH, Insets};

use crate::dashboard::DashboardConfig;
use crate::market::Ticker;
use crate::svg::{format_price, format_signed_percent, placeholder_block, SvgDoc};

/// Render a preview card for one ticker using the deterministic series
/// derived from its symbol and 24h change.
pub fn render(ticker: &Ticker, config: &DashboardConfig) -> String {
    let series = Series::preview(&ticker.symbol, ticker.price, ticker.change_24h);
    render_with_series(ticker, &series, config, CARD_WIDTH, CARD_HEIGHT)
}

/// Render a card from an explicit series (live data path). An empty series
/// renders the shared placeholder block.
pub fn render_with_series(
    ticker: &Ticker,
    series: &Series,
    config: &DashboardConfig,
    width: f64,
    height: f64,
) -> String {
    let theme = &config.theme;
    if series.is_empty() {
        return placeholder_block(theme, width, height);
    }

    let pad = Insets::default();
    let mut doc = SvgDoc::new(width, height);
    doc.rect_rounded(0.0, 0.0, width, height, 6.0, &theme.card.hex());
    if config.is_selected(&ticker.symbol) {
        doc.rect_outlined(0.5, 0.5, width - 1.0, height - 1.0, &theme.accent.hex(), 1.0);
    }

    let left = f64::from(pad.left);
    let top = f64::from(pad.top);
    doc.text(left, top + 12.0, 12.0, &theme.text.hex(), &ticker.symbol);
    doc.text_end(width - f64::from(pad.right), top + 12.0, 12.0, &theme.text.hex(), &format_price(ticker.price));

    let change_color = if ticker.is_gain() { theme.gain.hex() } else { theme.loss.hex() };
    doc.text_end(
        width - f64::from(pad.right),
        top + 26.0,
        10.0,
        &change_color,
        &format_signed_percent(ticker.change_24h),
    );

    // trend line across the lower card area
    let plot_w = width - f64::from(pad.hsum());
    let plot_h = (height - f64::from(pad.vsum()) - 34.0).max(1.0);
    let paths = build_path(series, plot_w, plot_h, true);
    let mut plot = SvgDoc::new(plot_w, plot_h);
    plot.fill_path(&paths.fill, &theme.spark_fill.hex(), 0.25);
    plot.stroke_path(&paths.line, &theme.spark_stroke.hex(), 1.5);
    let plot_markup = plot.finish();
    doc.group_translated(left, top + 34.0, &plot_markup);

    doc.finish()
}

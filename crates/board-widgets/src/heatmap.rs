// File: crates/board-widgets/src/heatmap.rs
// Summary: Market heatmap; one tile per ticker shaded by 24h change intensity.

use board_core::Rgb;

use crate::dashboard::DashboardConfig;
use crate::market::Ticker;
use crate::svg::{format_signed_percent, placeholder_block, SvgDoc};

/// Absolute 24h change (percent) at which a tile saturates to the full
/// gain/loss color.
pub const SATURATION_PCT: f64 = 10.0;

const GAP: f64 = 4.0;

/// Tile color for a 24h change on the given theme's gain/loss ramp.
pub fn tile_color(change_24h: f64, neutral: Rgb, gain: Rgb, loss: Rgb) -> Rgb {
    let t = (change_24h / SATURATION_PCT).clamp(-1.0, 1.0);
    if t >= 0.0 {
        neutral.lerp(gain, t)
    } else {
        neutral.lerp(loss, -t)
    }
}

/// Render the heatmap grid. Column count is the ceiling square root of the
/// tile count; the selected symbol gets an accent outline.
pub fn render(tickers: &[Ticker], config: &DashboardConfig, width: f64, height: f64) -> String {
    let theme = &config.theme;
    if tickers.is_empty() {
        return placeholder_block(theme, width, height);
    }

    let n = tickers.len();
    let cols = (n as f64).sqrt().ceil().max(1.0) as usize;
    let rows = n.div_ceil(cols);
    let tile_w = (width - GAP * (cols as f64 + 1.0)) / cols as f64;
    let tile_h = (height - GAP * (rows as f64 + 1.0)) / rows as f64;

    let mut doc = SvgDoc::new(width, height);
    doc.rect_rounded(0.0, 0.0, width, height, 6.0, &theme.surface.hex());

    for (i, ticker) in tickers.iter().enumerate() {
        let col = i % cols;
        let row = i / cols;
        let x = GAP + col as f64 * (tile_w + GAP);
        let y = GAP + row as f64 * (tile_h + GAP);

        let color = tile_color(ticker.change_24h, theme.card, theme.gain, theme.loss);
        doc.rect_rounded(x, y, tile_w, tile_h, 3.0, &color.hex());
        if config.is_selected(&ticker.symbol) {
            doc.rect_outlined(x, y, tile_w, tile_h, &theme.accent.hex(), 1.5);
        }

        let cx = x + tile_w / 2.0;
        doc.text_mid(cx, y + tile_h / 2.0 - 2.0, 11.0, &theme.text.hex(), &ticker.symbol);
        doc.text_mid(
            cx,
            y + tile_h / 2.0 + 11.0,
            9.0,
            &theme.text.hex(),
            &format_signed_percent(ticker.change_24h),
        );
    }
    doc.finish()
}

// File: crates/board-widgets/src/orderbook.rs
// Summary: Order-book depth panel; ask rows, spread row, bid rows with size bars.

use board_core::fraction;

use crate::dashboard::DashboardConfig;
use crate::market::OrderBook;
use crate::svg::{format_price, placeholder_block, SvgDoc};

/// Levels shown per side.
pub const DEPTH_ROWS: usize = 6;

const ROW_H: f64 = 18.0;
const HEADER_H: f64 = 20.0;

/// Render the depth panel for one symbol. Asks stack above the spread row
/// (best ask nearest to it), bids below. Bar lengths are scaled against the
/// book's largest level.
pub fn render(symbol: &str, book: &OrderBook, config: &DashboardConfig, width: f64) -> String {
    let theme = &config.theme;
    if book.is_empty() {
        return placeholder_block(theme, width, HEADER_H + ROW_H * (DEPTH_ROWS as f64 * 2.0 + 1.0));
    }

    let asks: Vec<_> = book.asks.iter().take(DEPTH_ROWS).collect();
    let bids: Vec<_> = book.bids.iter().take(DEPTH_ROWS).collect();
    let max_size = book.max_size();
    let height = HEADER_H + ROW_H * (asks.len() + bids.len() + 1) as f64;

    let mut doc = SvgDoc::new(width, height);
    doc.rect_rounded(0.0, 0.0, width, height, 6.0, &theme.card.hex());
    doc.text(8.0, 14.0, 11.0, &theme.text.hex(), symbol);
    doc.text_end(width - 8.0, 14.0, 10.0, &theme.text_muted.hex(), "size");

    let bar_w = |size: f64| (width - 16.0) * fraction(size, max_size);
    let mut y = HEADER_H;

    // asks descending so the best ask sits just above the spread row
    for level in asks.iter().rev() {
        doc.rect_faded(8.0, y + 2.0, bar_w(level.size), ROW_H - 4.0, &theme.loss.hex(), 0.35);
        doc.text(10.0, y + ROW_H - 5.0, 10.0, &theme.text.hex(), &format_price(level.price));
        doc.text_end(width - 10.0, y + ROW_H - 5.0, 10.0, &theme.text.hex(), &format!("{:.3}", level.size));
        y += ROW_H;
    }

    let spread = match book.spread() {
        Some(s) => format!("spread {}", format_price(s)),
        None => "spread \u{2014}".to_string(),
    };
    doc.line(8.0, y + ROW_H / 2.0, width - 8.0, y + ROW_H / 2.0, &theme.grid.hex(), 1.0);
    doc.text_mid(width / 2.0, y + ROW_H - 5.0, 9.0, &theme.text_muted.hex(), &spread);
    y += ROW_H;

    for level in &bids {
        doc.rect_faded(8.0, y + 2.0, bar_w(level.size), ROW_H - 4.0, &theme.gain.hex(), 0.35);
        doc.text(10.0, y + ROW_H - 5.0, 10.0, &theme.text.hex(), &format_price(level.price));
        doc.text_end(width - 10.0, y + ROW_H - 5.0, 10.0, &theme.text.hex(), &format!("{:.3}", level.size));
        y += ROW_H;
    }

    doc.finish()
}

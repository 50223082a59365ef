// File: crates/board-widgets/src/svg.rs
// Summary: Minimal SVG string builder shared by the widget renderers.

use board_core::{fmt_px, Theme};

/// Escape text content and attribute values.
pub fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates one SVG document. Widgets push elements and call `finish`.
/// Coordinates match the viewBox one-to-one; no transforms are applied here.
pub struct SvgDoc {
    buf: String,
    width: f64,
    height: f64,
}

impl SvgDoc {
    pub fn new(width: f64, height: f64) -> Self {
        let mut buf = String::with_capacity(1024);
        buf.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = fmt_px(width),
            h = fmt_px(height),
        ));
        Self { buf, width, height }
    }

    /// Outer document scaled to `outer_width` x `outer_height` while keeping
    /// the logical viewBox. Used by maximized widget frames.
    pub fn with_outer_size(width: f64, height: f64, outer_width: f64, outer_height: f64) -> Self {
        let mut buf = String::with_capacity(1024);
        buf.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            fmt_px(outer_width),
            fmt_px(outer_height),
            fmt_px(width),
            fmt_px(height),
        ));
        Self { buf, width, height }
    }

    pub fn width(&self) -> f64 { self.width }

    pub fn height(&self) -> f64 { self.height }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.buf.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            fmt_px(x), fmt_px(y), fmt_px(w), fmt_px(h), fill
        ));
    }

    pub fn rect_rounded(&mut self, x: f64, y: f64, w: f64, h: f64, rx: f64, fill: &str) {
        self.buf.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/>",
            fmt_px(x), fmt_px(y), fmt_px(w), fmt_px(h), fmt_px(rx), fill
        ));
    }

    pub fn rect_faded(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, opacity: f64) {
        self.buf.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            fmt_px(x), fmt_px(y), fmt_px(w), fmt_px(h), fill, opacity
        ));
    }

    pub fn rect_outlined(&mut self, x: f64, y: f64, w: f64, h: f64, stroke: &str, stroke_width: f64) {
        self.buf.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            fmt_px(x), fmt_px(y), fmt_px(w), fmt_px(h), stroke, fmt_px(stroke_width)
        ));
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        self.buf.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            fmt_px(x1), fmt_px(y1), fmt_px(x2), fmt_px(y2), stroke, fmt_px(stroke_width)
        ));
    }

    pub fn stroke_path(&mut self, d: &str, stroke: &str, stroke_width: f64) {
        if d.is_empty() { return; }
        self.buf.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"/>",
            d, stroke, fmt_px(stroke_width)
        ));
    }

    pub fn fill_path(&mut self, d: &str, fill: &str, opacity: f64) {
        if d.is_empty() { return; }
        self.buf.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"none\"/>",
            d, fill, opacity
        ));
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.buf.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            fmt_px(cx), fmt_px(cy), fmt_px(r), fill
        ));
    }

    pub fn text(&mut self, x: f64, y: f64, size: f64, fill: &str, content: &str) {
        self.text_anchor(x, y, size, fill, "start", content);
    }

    pub fn text_mid(&mut self, x: f64, y: f64, size: f64, fill: &str, content: &str) {
        self.text_anchor(x, y, size, fill, "middle", content);
    }

    pub fn text_end(&mut self, x: f64, y: f64, size: f64, fill: &str, content: &str) {
        self.text_anchor(x, y, size, fill, "end", content);
    }

    fn text_anchor(&mut self, x: f64, y: f64, size: f64, fill: &str, anchor: &str, content: &str) {
        self.buf.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\">{}</text>",
            fmt_px(x), fmt_px(y), fmt_px(size), fill, anchor, esc(content)
        ));
    }

    /// Append pre-built markup (nested widget output, transformed groups).
    pub fn raw(&mut self, markup: &str) {
        self.buf.push_str(markup);
    }

    pub fn group_translated(&mut self, dx: f64, dy: f64, inner: &str) {
        self.buf.push_str(&format!(
            "<g transform=\"translate({} {})\">{}</g>",
            fmt_px(dx), fmt_px(dy), inner
        ));
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>");
        self.buf
    }
}

/// Muted block with centered "no data" text; shared empty-state rendering.
pub fn placeholder_block(theme: &Theme, width: f64, height: f64) -> String {
    let mut doc = SvgDoc::new(width, height);
    doc.rect_rounded(0.0, 0.0, width, height, 4.0, &theme.card.hex());
    doc.text_mid(width / 2.0, height / 2.0 + 4.0, 11.0, &theme.text_muted.hex(), "no data");
    doc.finish()
}

/// Signed percent label, e.g. `+3.25%` / `-0.80%`.
pub fn format_signed_percent(change: f64) -> String {
    format!("{}{:.2}%", if change >= 0.0 { "+" } else { "" }, change)
}

/// Price label with thousands kept plain and small prices given more digits.
pub fn format_price(price: f64) -> String {
    if price >= 1_000.0 {
        format!("{:.0}", price)
    } else if price >= 1.0 {
        format!("{:.2}", price)
    } else {
        format!("{:.4}", price)
    }
}

// File: crates/board-widgets/src/dashboard.rs
// Summary: Shared dashboard configuration (theme, selected symbol, polling) and widget frame state.

use std::time::Duration;

use board_core::Theme;

use crate::svg::SvgDoc;

/// Poll cadence consumed by the external query layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self { interval: Duration::from_secs(10) }
    }
}

/// Explicit shared configuration passed by reference to every renderer.
/// Selecting a symbol here is the only cross-widget state.
#[derive(Clone, Debug, Default)]
pub struct DashboardConfig {
    pub theme: Theme,
    pub selected_symbol: Option<String>,
    pub poll: PollSettings,
}

impl DashboardConfig {
    pub fn new(theme: Theme) -> Self {
        Self { theme, selected_symbol: None, poll: PollSettings::default() }
    }

    pub fn select_symbol(&mut self, symbol: impl Into<String>) {
        self.selected_symbol = Some(symbol.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected_symbol = None;
    }

    pub fn is_selected(&self, symbol: &str) -> bool {
        self.selected_symbol.as_deref() == Some(symbol)
    }
}

/// Title-bar height of a framed widget.
pub const FRAME_BAR_H: f64 = 22.0;
/// Outer scale applied to a maximized frame (viewBox unchanged).
const MAX_SCALE: f64 = 2.0;

/// Per-widget chrome state. Minimize and maximize are mutually exclusive;
/// toggling one clears the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetFrame {
    pub title: String,
    pub minimized: bool,
    pub maximized: bool,
}

impl WidgetFrame {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), minimized: false, maximized: false }
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
        if self.minimized {
            self.maximized = false;
        }
    }

    pub fn toggle_maximized(&mut self) {
        self.maximized = !self.maximized;
        if self.maximized {
            self.minimized = false;
        }
    }

    /// Wrap widget body markup in a title bar. A minimized frame renders the
    /// chrome only; a maximized frame renders at 2x outer size with the same
    /// viewBox.
    pub fn render(&self, config: &DashboardConfig, width: f64, body_height: f64, body: &str) -> String {
        let theme = &config.theme;
        let height = if self.minimized { FRAME_BAR_H } else { FRAME_BAR_H + body_height };
        let mut doc = if self.maximized {
            SvgDoc::with_outer_size(width, height, width * MAX_SCALE, height * MAX_SCALE)
        } else {
            SvgDoc::new(width, height)
        };

        doc.rect(0.0, 0.0, width, FRAME_BAR_H, &theme.card.hex());
        doc.text(8.0, FRAME_BAR_H - 7.0, 11.0, &theme.text.hex(), &self.title);
        // window glyphs, right-aligned
        let glyph = if self.minimized { "+" } else { "\u{2212}" };
        doc.text_end(width - 22.0, FRAME_BAR_H - 7.0, 11.0, &theme.text_muted.hex(), glyph);
        doc.text_end(width - 8.0, FRAME_BAR_H - 7.0, 11.0, &theme.text_muted.hex(), "\u{25a1}");
        doc.line(0.0, FRAME_BAR_H, width, FRAME_BAR_H, &theme.grid.hex(), 1.0);

        if !self.minimized {
            doc.group_translated(0.0, FRAME_BAR_H, body);
        }
        doc.finish()
    }
}

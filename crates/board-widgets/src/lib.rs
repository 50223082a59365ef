// File: crates/board-widgets/src/lib.rs
// Summary: Widget library entry point; exports SVG renderers, market model, dashboard state.

pub mod dashboard;
pub mod gauge;
pub mod heatmap;
pub mod market;
pub mod orderbook;
pub mod price_chart;
pub mod sparkline;
pub mod svg;

pub use dashboard::{DashboardConfig, PollSettings, WidgetFrame};
pub use market::{tickers_from_json, BookLevel, MarketError, MarketSource, OrderBook, StaticSource, Ticker};
pub use svg::SvgDoc;

// File: crates/board-core/src/lib.rs
// Summary: Core library entry point; exports series, path and arc builders for dashboard widgets.

pub mod arc;
pub mod generate;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;

pub use arc::{arc_path, build_arc, fraction, ArcGeometry};
pub use generate::{preview_series, symbol_seed};
pub use geometry::{fmt_px, PointF, RectF};
pub use grid::linspace;
pub use path::{build_path, SparklinePath};
pub use scale::ValueScale;
pub use series::Series;
pub use theme::{Rgb, Theme};

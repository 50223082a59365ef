// File: crates/board-examples/src/bin/sparkline.rs
// Summary: Minimal example that renders a single sparkline card to an SVG file.

use board_core::Theme;
use board_widgets::{sparkline, DashboardConfig, Ticker};

fn main() {
    let ticker = Ticker::new("BTC", 64_000.0, 3.25, 18_500.0);
    let config = DashboardConfig::new(Theme::dark());

    let svg = sparkline::render(&ticker, &config);

    let out = std::path::PathBuf::from("target/out/example_sparkline.svg");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, svg).expect("write svg");
    println!("Wrote {}", out.display());
}

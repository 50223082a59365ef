// File: crates/board-widgets/tests/snapshot.rs
// Purpose: Golden snapshots for widget markup; set UPDATE_SNAPSHOTS=1 to bless.

use board_core::{Series, Theme};
use board_widgets::{gauge, heatmap, sparkline};
use board_widgets::{DashboardConfig, Ticker};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, markup: &str) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, markup).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), markup.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read_to_string(path).expect("read snapshot");
        assert_eq!(markup, want, "Markup differs: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(format!("tests/__snapshots__/{name}.svg"))
}

#[test]
fn golden_sparkline_card() {
    let cfg = DashboardConfig::new(Theme::dark());
    let ticker = Ticker::new("BTC", 64000.0, 3.25, 10.0);
    let svg = sparkline::render(&ticker, &cfg);
    write_or_compare(&snapshot_path("sparkline_btc"), &svg);
}

#[test]
fn golden_gauge() {
    let cfg = DashboardConfig::new(Theme::dark());
    let svg = gauge::render("exposure", 6.5, 10.0, &cfg, 160.0, 120.0);
    write_or_compare(&snapshot_path("gauge_exposure"), &svg);
}

#[test]
fn golden_heatmap_light_theme() {
    let cfg = DashboardConfig::new(Theme::light());
    let tickers = vec![
        Ticker::new("BTC", 64000.0, 4.0, 1.0),
        Ticker::new("ETH", 3200.0, -6.0, 1.0),
        Ticker::new("SOL", 150.0, 0.5, 1.0),
        Ticker::new("ADA", 0.45, -1.5, 1.0),
    ];
    let svg = heatmap::render(&tickers, &cfg, 320.0, 200.0);
    write_or_compare(&snapshot_path("heatmap_light"), &svg);
}

#[test]
fn golden_sparkline_is_stable_across_renders() {
    // the deterministic generator is what keeps snapshots meaningful
    let cfg = DashboardConfig::new(Theme::dark());
    let ticker = Ticker::new("ETH", 3200.0, -2.4, 5.0);
    let series = Series::preview(&ticker.symbol, ticker.price, ticker.change_24h);
    let a = sparkline::render_with_series(&ticker, &series, &cfg, 240.0, 120.0);
    let b = sparkline::render_with_series(&ticker, &series, &cfg, 240.0, 120.0);
    assert_eq!(a, b);
}

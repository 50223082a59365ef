// File: crates/demo/src/main.rs
// Summary: Demo loads a watchlist CSV and composes every widget into one dashboard SVG.

use anyhow::{Context, Result};
use board_core::types::{CARD_HEIGHT, CARD_WIDTH};
use board_core::{Series, Theme};
use board_widgets::{gauge, heatmap, orderbook, price_chart, sparkline};
use board_widgets::{BookLevel, DashboardConfig, MarketSource, OrderBook, StaticSource, SvgDoc, Ticker, WidgetFrame};
use std::path::{Path, PathBuf};

const OUT_WIDTH: f64 = 1024.0;
const OUT_HEIGHT: f64 = 640.0;

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to a built-in sample watchlist
    let tickers = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            println!("Using watchlist file: {}", path.display());
            load_watchlist_csv(&path)
                .with_context(|| format!("failed to load watchlist '{}'", path.display()))?
        }
        None => {
            println!("No watchlist given; using built-in sample");
            sample_watchlist()
        }
    };

    if tickers.is_empty() {
        anyhow::bail!("no tickers loaded; check headers/delimiter.");
    }
    println!("Loaded {} tickers", tickers.len());

    let lead = tickers[0].clone();
    let source = StaticSource::new(tickers).with_book(lead.symbol.clone(), synthetic_book(&lead));

    let mut config = DashboardConfig::new(Theme::dark());
    config.select_symbol(lead.symbol.clone());

    let svg = render_dashboard(&source, &config, &lead)?;
    let out = PathBuf::from("target/out/dashboard.svg");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, svg)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn render_dashboard(source: &StaticSource, config: &DashboardConfig, lead: &Ticker) -> Result<String> {
    let tickers = source.tickers()?;
    let book = source.order_book(&lead.symbol)?;

    let mut doc = SvgDoc::new(OUT_WIDTH, OUT_HEIGHT);
    doc.rect(0.0, 0.0, OUT_WIDTH, OUT_HEIGHT, &config.theme.surface.hex());

    // top strip: one sparkline card per ticker
    let mut x = 16.0;
    for ticker in &tickers {
        if x + CARD_WIDTH > OUT_WIDTH - 16.0 {
            break;
        }
        let card = sparkline::render(ticker, config);
        doc.group_translated(x, 16.0, &card);
        x += CARD_WIDTH + 16.0;
    }

    let row_y = 16.0 + CARD_HEIGHT + 16.0;

    // left: framed price chart for the selected symbol
    let series = Series::preview(&lead.symbol, lead.price, lead.change_24h);
    let chart = price_chart::render(lead, &series, config, 480.0, 240.0);
    let chart_frame = WidgetFrame::new(format!("{} \u{00b7} 24h", lead.symbol));
    doc.group_translated(16.0, row_y, &chart_frame.render(config, 480.0, 240.0, &chart));

    // middle: order book depth
    let depth = orderbook::render(&lead.symbol, &book, config, 240.0);
    doc.group_translated(512.0, row_y, &depth);

    // right: gainers gauge over the watchlist
    let gainers = tickers.iter().filter(|t| t.is_gain()).count();
    let gauge_svg = gauge::render("gainers", gainers as f64, tickers.len() as f64, config, 240.0, 160.0);
    doc.group_translated(768.0, row_y, &gauge_svg);

    // bottom: market heatmap
    let map = heatmap::render(&tickers, config, OUT_WIDTH - 32.0, 180.0);
    doc.group_translated(16.0, OUT_HEIGHT - 196.0, &map);

    Ok(doc.finish())
}

#[derive(Debug, serde::Deserialize)]
struct WatchRow {
    symbol: String,
    price: f64,
    #[serde(rename = "change24h")]
    change_24h: f64,
    volume: f64,
}

fn load_watchlist_csv(path: &Path) -> Result<Vec<Ticker>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut out = Vec::new();
    for row in reader.deserialize::<WatchRow>() {
        let row = row?;
        out.push(Ticker::new(row.symbol, row.price, row.change_24h, row.volume));
    }
    Ok(out)
}

fn sample_watchlist() -> Vec<Ticker> {
    vec![
        Ticker::new("BTC", 64_000.0, 3.25, 18_500.0),
        Ticker::new("ETH", 3_200.0, -2.40, 92_000.0),
        Ticker::new("SOL", 150.0, 6.10, 410_000.0),
        Ticker::new("ADA", 0.45, -1.15, 1_900_000.0),
    ]
}

/// Deterministic synthetic depth around the ticker price, for the demo only.
fn synthetic_book(ticker: &Ticker) -> OrderBook {
    let step = (ticker.price * 0.0005).max(0.01);
    let bids = (1..=6)
        .map(|i| BookLevel::new(ticker.price - step * i as f64, 0.4 + 0.3 * i as f64))
        .collect();
    let asks = (1..=6)
        .map(|i| BookLevel::new(ticker.price + step * i as f64, 0.5 + 0.25 * i as f64))
        .collect();
    OrderBook::new(bids, asks)
}

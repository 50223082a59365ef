// File: crates/board-widgets/src/market.rs
// Summary: Market data model (tickers, order books) and the fetch-interface seam.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One symbol's snapshot as delivered by the upstream market-data endpoint.
/// Field names match the REST payload (`symbol`, `price`, `change24h`, `volume`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    pub price: f64,
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    pub volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Ticker {
    pub fn new(symbol: impl Into<String>, price: f64, change_24h: f64, volume: f64) -> Self {
        Self { symbol: symbol.into(), price, change_24h, volume, updated_at: None }
    }

    pub fn is_gain(&self) -> bool {
        self.change_24h >= 0.0
    }

    pub fn from_json(raw: &str) -> Result<Self, MarketError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Decode an array payload of ticker objects.
pub fn tickers_from_json(raw: &str) -> Result<Vec<Ticker>, MarketError> {
    Ok(serde_json::from_str(raw)?)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: f64,
    pub size: f64,
}

impl BookLevel {
    pub const fn new(price: f64, size: f64) -> Self {
        Self { price, size }
    }
}

/// Order-book snapshot. Bids are held descending and asks ascending by
/// price; the constructor enforces the ordering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    pub fn new(mut bids: Vec<BookLevel>, mut asks: Vec<BookLevel>) -> Self {
        bids.sort_by(|a, b| b.price.total_cmp(&a.price));
        asks.sort_by(|a, b| a.price.total_cmp(&b.price));
        Self { bids, asks }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    /// Ask minus bid. `None` when a side is empty or the book is crossed
    /// (a crossed snapshot is transient garbage, not a printable spread).
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask.price >= bid.price => Some(ask.price - bid.price),
            _ => None,
        }
    }

    /// Largest level size across both sides; 0 for an empty book.
    pub fn max_size(&self) -> f64 {
        self.bids
            .iter()
            .chain(self.asks.iter())
            .map(|l| l.size)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("failed to decode market payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
    #[error("market source unavailable: {0}")]
    Unavailable(String),
}

/// Seam to the external query/polling layer. The dashboard only consumes
/// snapshots; scheduling and HTTP live outside this crate.
pub trait MarketSource {
    fn tickers(&self) -> Result<Vec<Ticker>, MarketError>;
    fn order_book(&self, symbol: &str) -> Result<OrderBook, MarketError>;
}

/// In-repo source serving canned snapshots; used by demos and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    tickers: Vec<Ticker>,
    books: HashMap<String, OrderBook>,
}

impl StaticSource {
    pub fn new(tickers: Vec<Ticker>) -> Self {
        Self { tickers, books: HashMap::new() }
    }

    pub fn with_book(mut self, symbol: impl Into<String>, book: OrderBook) -> Self {
        self.books.insert(symbol.into(), book);
        self
    }
}

impl MarketSource for StaticSource {
    fn tickers(&self) -> Result<Vec<Ticker>, MarketError> {
        Ok(self.tickers.clone())
    }

    fn order_book(&self, symbol: &str) -> Result<OrderBook, MarketError> {
        self.books
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketError::UnknownSymbol(symbol.to_string()))
    }
}

// File: crates/board-core/src/generate.rs
// Summary: Deterministic preview-series generation (seeded by symbol, no RNG).

/// Seed derived from a symbol's character scalar values.
/// Distinct symbols generally produce distinct seeds; identical symbols always do.
pub fn symbol_seed(symbol: &str) -> u32 {
    symbol.chars().fold(0u32, |acc, c| acc.wrapping_add(c as u32))
}

/// Generate a fixed-length preview series for a ticker without randomness.
///
/// The series walks from `current_value - delta` up to `current_value`
/// (where `delta = current_value * percent_change / 100`), with a sine
/// wobble scaled to 15% of `|delta|` so repeated renders of the same symbol
/// produce the same trend line. Values are clamped at zero.
pub fn preview_series(
    symbol: &str,
    current_value: f64,
    percent_change: f64,
    point_count: usize,
) -> Vec<f64> {
    if point_count == 0 {
        return Vec::new();
    }
    let seed = symbol_seed(symbol) as f64;
    let delta = current_value * percent_change / 100.0;
    let start = current_value - delta;
    // single-sample series: pin the progress denominator to 1
    let denom = point_count.saturating_sub(1).max(1) as f64;

    let mut out = Vec::with_capacity(point_count);
    for i in 0..point_count {
        let progress = i as f64 / denom;
        let noise = ((i as f64 + seed) / 3.0).sin() * delta.abs() * 0.15;
        out.push((start + delta * progress + noise).max(0.0));
    }
    out
}

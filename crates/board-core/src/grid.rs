// File: crates/board-core/src/grid.rs
// Summary: Grid/tick layout helpers for chart widgets.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick values with display labels for an axis span.
/// Labels carry two decimals under 100, none at or above.
pub fn tick_labels(min: f64, max: f64, steps: usize) -> Vec<(f64, String)> {
    linspace(min, max, steps)
        .into_iter()
        .map(|v| {
            let label = if v.abs() >= 100.0 {
                format!("{:.0}", v)
            } else {
                format!("{:.2}", v)
            };
            (v, label)
        })
        .collect()
}

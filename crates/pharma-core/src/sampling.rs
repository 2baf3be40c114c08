//! Concentration grids.
//!
//! Endpoints are reproduced exactly: the last sample is `end`, not
//! `start + (num - 1) * step`, so log-spaced grids hit round decades.

/// `num` evenly spaced values over `[start, end]`.
///
/// Returns an empty grid for `num == 0` and `[start]` for `num == 1`.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            let mut out: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            out[num - 1] = end;
            out
        }
    }
}

/// `10^v` for each `v` in `linspace(log_start, log_end, num)`.
pub fn logspace(log_start: f64, log_end: f64, num: usize) -> Vec<f64> {
    linspace(log_start, log_end, num)
        .into_iter()
        .map(|v| 10f64.powf(v))
        .collect()
}

/// Geometric progression from `start` to `end` with both endpoints exact.
///
/// Both bounds must share a sign; otherwise the result is NaN-filled, like
/// any other out-of-domain input in this workspace.
pub fn geomspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    if start.signum() != end.signum() {
        return vec![f64::NAN; num];
    }
    let sign = start.signum();
    let mut out: Vec<f64> = logspace(start.abs().log10(), end.abs().log10(), num)
        .into_iter()
        .map(|v| v * sign)
        .collect();
    if num > 0 {
        out[0] = start;
    }
    if num > 1 {
        out[num - 1] = end;
    }
    out
}

/// Elementwise `1/x`; `x == 0` yields infinity.
pub fn reciprocal(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v.recip()).collect()
}

/// Elementwise base-10 logarithm.
pub fn log10(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v.log10()).collect()
}

/// Largest finite value of a grid, or `None` if there is none.
pub fn finite_max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
}

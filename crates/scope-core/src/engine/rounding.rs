/// Rounds half-way cases towards positive infinity (`-2.5` becomes `-2`).
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds `value` half-up to `decimals` decimal places.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    round_half_up(value * scale) / scale
}

/// `part` as a percentage of `whole`, to one decimal place; `0.0` when `whole` is zero.
#[inline]
pub fn pct(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_half_up(part as f64 / whole as f64 * 1000.0) / 10.0
}

// Percentile with linear interpolation between order statistics.

/// Returns the `p`-th percentile of `values`, or `None` when `values` is empty.
///
/// Rank is `k = (n - 1) * p / 100` over an ascending copy of the input; a
/// fractional rank interpolates linearly between the two neighbouring values.
/// `p` is clamped to `0..=100`. The input is not modified.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(percentile_sorted(&sorted, p))
}

/// Same as [`percentile`] for input already sorted ascending. Panics if empty.
pub(crate) fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let p = p.clamp(0.0, 100.0);
    let k = (sorted.len() - 1) as f64 * (p / 100.0);
    let lo = k.floor() as usize;
    let hi = k.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (k - lo as f64)
}

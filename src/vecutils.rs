//! Helpers for plain `f64` slices
/// Smallest and largest element in one pass.
///
/// An empty slice gives `(inf, -inf)`.
pub fn min_max(vec: &[f64]) -> (f64, f64) {
    vec.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Element-wise comparison of two slices of equal length.
pub fn almost_equal(a: &[f64], b: &[f64], eps: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= eps)
}

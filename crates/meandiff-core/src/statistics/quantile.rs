//! Percentile computation by linear interpolation between order statistics.
//!
//! This module implements Type 7 quantiles following Hyndman & Fan (1996),
//! the definition used by most numerical packages' default percentile:
//!
//! ```text
//! h = (n - 1) * p          (0-based fractional rank)
//! q = x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])
//! ```
//!
//! The bootstrap percentile interval reported by this crate (2.5th and
//! 97.5th percentiles) is defined in these terms, so any change here changes
//! reported confidence bounds.
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical
//! packages." The American Statistician 50(4):361–365.

/// Compute the percentile at probability `p` from unsorted data.
///
/// Sorts a copy of the input; use [`percentile_of_sorted`] in loops that
/// already hold sorted data.
///
/// # Panics
///
/// Panics if `data` is empty or if `p` is outside `[0, 1]`.
pub fn percentile(data: &[f64], p: f64) -> f64 {
    assert!(!data.is_empty(), "cannot compute percentile of empty slice");
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    percentile_of_sorted(&sorted, p)
}

/// Compute the percentile at probability `p` from ascending-sorted data.
///
/// # Panics
///
/// Panics if `sorted` is empty or if `p` is outside `[0, 1]`.
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "cannot compute percentile of empty slice"
    );
    assert!(
        (0.0..=1.0).contains(&p),
        "percentile probability must be in [0, 1]"
    );

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    // Type 7: h is a 0-based fractional rank in [0, n - 1].
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    if lo == n - 1 {
        return sorted[n - 1];
    }
    let frac = h - h.floor();
    sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
}

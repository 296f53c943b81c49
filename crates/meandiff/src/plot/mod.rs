//! Rendering of comparison plots.
//!
//! Two figures are provided: an overlaid frequency histogram of two samples
//! ([`render_sample_histogram`]) and the bootstrap distribution of the
//! difference in means with its 95% percentile bounds
//! ([`render_bootstrap_histogram`]). The `render_*` functions draw onto any
//! plotters [`DrawingArea`](plotters::drawing::DrawingArea); the `save_*`
//! wrappers pick an SVG or bitmap backend from the output file extension.

use thiserror::Error;

use meandiff_core::StatError;

mod bootstrap;
mod histogram;

pub use bootstrap::{render_bootstrap_histogram, save_bootstrap_histogram};
pub use histogram::{render_sample_histogram, save_sample_histogram};

/// Errors surfaced by the rendering layer.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Input samples failed validation.
    #[error(transparent)]
    Stats(#[from] StatError),

    /// The bootstrap distribution held no entries.
    #[error("empty bootstrap distribution")]
    EmptyDistribution,

    /// The plotters backend reported a drawing failure.
    #[error("drawing backend: {0}")]
    Backend(String),
}

/// A single histogram bin: half-open `[start, end)`, except the last bin of
/// a series which also includes the range maximum.
pub(crate) struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Bin `values` into `bins` equal-width bins spanning the values' own
/// min..max range. A constant series gets a unit-wide range centered on the
/// value so the bar remains visible; a zero bin count is treated as one bin.
pub(crate) fn bin_values(values: &[f64], bins: usize) -> Vec<Bin> {
    debug_assert!(!values.is_empty());
    let bins = bins.max(1);

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Bin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_range_and_count_everything() {
        let values: Vec<f64> = (0..90).map(|i| i as f64 / 3.0).collect();
        let bins = bin_values(&values, 30);
        assert_eq!(bins.len(), 30);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 90);
        assert_eq!(bins[0].start, 0.0);
        let last = bins.last().unwrap();
        assert!((last.end - values.last().copied().unwrap()).abs() < 1e-9);
    }

    #[test]
    fn range_maximum_lands_in_last_bin() {
        // Bins are [0, 1) and [1, 2]; the value 2.0 belongs to the last bin
        // rather than an imaginary bin past the range.
        let bins = bin_values(&[0.0, 1.0, 2.0], 2);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[1].count, 2);
    }

    #[test]
    fn constant_series_gets_unit_range() {
        let bins = bin_values(&[7.0, 7.0, 7.0], 30);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert!(bins[0].start < 7.0);
        assert!(bins.last().unwrap().end > 7.0);
    }
}

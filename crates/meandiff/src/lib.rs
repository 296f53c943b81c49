//! Two-sample comparison statistics with plotting.
//!
//! Everything a quick between-group comparison needs: an overlaid histogram
//! of the raw samples, Welch's unequal-variance t-test with a matching
//! confidence interval, a deterministic bootstrap test for the difference in
//! means, and a plot of the bootstrap distribution with its 95% bounds.
//!
//! The statistics live in [`meandiff_core`] (re-exported here); this crate
//! adds the rendering layer on top of plotters.
//!
//! # Example
//!
//! ```no_run
//! use meandiff::{
//!     bootstrap_mean_diff, welch_t_test, PlotTheme,
//!     save_bootstrap_histogram, save_sample_histogram, DEFAULT_BOOTSTRAP_ITERATIONS,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let control = vec![14.1, 13.8, 14.6, 15.0, 14.3, 13.9, 14.7];
//! let treatment = vec![15.2, 15.9, 14.8, 16.1, 15.5, 15.0, 15.8];
//!
//! let theme = PlotTheme::default();
//! save_sample_histogram("samples.svg", &control, &treatment, ("control", "treatment"), &theme)?;
//!
//! let test = welch_t_test(&control, &treatment)?;
//! println!("{test}");
//!
//! let dist = bootstrap_mean_diff(&control, &treatment, DEFAULT_BOOTSTRAP_ITERATIONS)?;
//! save_bootstrap_histogram("bootstrap.svg", &dist, &theme)?;
//! # Ok(())
//! # }
//! ```

pub mod plot;
pub mod theme;

pub use meandiff_core::{
    bootstrap_mean_diff, percentile, welch_t_test, BootstrapDistribution, StatError, TTestResult,
    DEFAULT_BOOTSTRAP_ITERATIONS,
};
pub use plot::{
    render_bootstrap_histogram, render_sample_histogram, save_bootstrap_histogram,
    save_sample_histogram, PlotError,
};
pub use theme::PlotTheme;

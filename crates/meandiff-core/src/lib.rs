//! Core statistics for comparing two numeric samples.
//!
//! This crate provides the deterministic half of the workspace: Welch's
//! unequal-variance t-test and a bootstrap resampling test for the
//! difference in group means. Every function is a stateless transformation
//! from input slices to a result value; nothing here touches global state,
//! and the bootstrap's randomness is derived entirely from the iteration
//! counter, so results are reproducible across runs, threads, and platforms.
//!
//! Rendering of the results lives in the `meandiff` crate, which re-exports
//! everything below.
//!
//! # Usage
//!
//! ```
//! use meandiff_core::{bootstrap_mean_diff, welch_t_test};
//!
//! let control = [14.1, 13.8, 14.6, 15.0, 14.3];
//! let treatment = [15.2, 15.9, 14.8, 16.1, 15.5];
//!
//! let test = welch_t_test(&control, &treatment)?;
//! assert!(test.diff_means > 0.0);
//!
//! let dist = bootstrap_mean_diff(&control, &treatment, 1000)?;
//! assert_eq!(dist.len(), 1000);
//! # Ok::<(), meandiff_core::StatError>(())
//! ```

pub mod constants;
pub mod error;
pub mod result;
pub mod statistics;

pub use constants::DEFAULT_BOOTSTRAP_ITERATIONS;
pub use error::StatError;
pub use result::{BootstrapDistribution, TTestResult};
pub use statistics::{bootstrap_mean_diff, percentile, welch_t_test};

//! Statistical routines for two-sample comparison.
//!
//! - Welch's unequal-variance t-test with a matching confidence interval
//! - Deterministic bootstrap resampling of the difference in means
//! - Linear-interpolation percentiles

pub mod bootstrap;
pub mod quantile;
pub mod welch;

pub use bootstrap::bootstrap_mean_diff;
pub use quantile::{percentile, percentile_of_sorted};
pub use welch::welch_t_test;

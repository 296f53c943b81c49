//! Default configuration constants.

/// Default number of bootstrap iterations for the difference-in-means test.
pub const DEFAULT_BOOTSTRAP_ITERATIONS: usize = 10_000;

/// Confidence level shared by the Welch confidence interval and the
/// bootstrap percentile bounds.
pub const CONFIDENCE_LEVEL: f64 = 0.95;

/// Lower percentile probability of the 95% bootstrap interval.
pub const CI_LOWER_PROB: f64 = 0.025;

/// Upper percentile probability of the 95% bootstrap interval.
pub const CI_UPPER_PROB: f64 = 0.975;

//! Result types returned by the statistical routines.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CI_LOWER_PROB, CI_UPPER_PROB};
use crate::statistics::quantile::percentile_of_sorted;

/// Result of a Welch unequal-variance t-test on two samples.
///
/// Sign conventions follow the routines this wraps: `t_stat` is computed
/// from the first sample minus the second, while `diff_means` and its
/// confidence interval describe the second sample minus the first. For two
/// clearly separated groups the two fields therefore carry opposite signs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    /// Welch t-statistic, `(mean(x1) - mean(x2)) / se`.
    pub t_stat: f64,
    /// Two-sided p-value.
    pub p_value: f64,
    /// Welch–Satterthwaite degrees of freedom (fractional).
    pub df: f64,
    /// Difference in group means, `mean(x2) - mean(x1)`.
    pub diff_means: f64,
    /// Lower bound of the 95% confidence interval for `diff_means`.
    pub ci_lower: f64,
    /// Upper bound of the 95% confidence interval for `diff_means`.
    pub ci_upper: f64,
}

impl fmt::Display for TTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "t = {:.4}, p = {:.4}, df = {:.2}",
            self.t_stat, self.p_value, self.df
        )?;
        write!(
            f,
            "diff in means = {:.4}, 95% CI [{:.4}, {:.4}]",
            self.diff_means, self.ci_lower, self.ci_upper
        )
    }
}

/// Empirical bootstrap distribution of the difference in group means.
///
/// One entry per bootstrap iteration, in iteration order. Produced by
/// [`bootstrap_mean_diff`](crate::bootstrap_mean_diff) and consumed by the
/// bootstrap plot in the `meandiff` crate or by downstream analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BootstrapDistribution(Vec<f64>);

impl BootstrapDistribution {
    /// Number of bootstrap iterations recorded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the distribution holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The recorded differences, in iteration order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over the recorded differences.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Arithmetic mean of the distribution.
    ///
    /// # Panics
    ///
    /// Panics if the distribution is empty. Distributions built by
    /// [`bootstrap_mean_diff`](crate::bootstrap_mean_diff) always hold at
    /// least one entry.
    pub fn mean(&self) -> f64 {
        assert!(!self.0.is_empty(), "mean of empty bootstrap distribution");
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }

    /// Percentile at probability `p` in `[0, 1]`, by linear interpolation
    /// between order statistics.
    ///
    /// # Panics
    ///
    /// Panics if the distribution is empty or `p` is outside `[0, 1]`.
    pub fn percentile(&self, p: f64) -> f64 {
        let mut sorted = self.0.clone();
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));
        percentile_of_sorted(&sorted, p)
    }

    /// 95% percentile interval: the 2.5th and 97.5th percentiles.
    ///
    /// # Panics
    ///
    /// Panics if the distribution is empty.
    pub fn confidence_interval(&self) -> (f64, f64) {
        let mut sorted = self.0.clone();
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));
        (
            percentile_of_sorted(&sorted, CI_LOWER_PROB),
            percentile_of_sorted(&sorted, CI_UPPER_PROB),
        )
    }

    /// Consume the distribution, returning the underlying vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for BootstrapDistribution {
    fn from(diffs: Vec<f64>) -> Self {
        Self(diffs)
    }
}

impl AsRef<[f64]> for BootstrapDistribution {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

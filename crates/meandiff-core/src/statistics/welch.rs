//! Welch's unequal-variance t-test for two independent samples.
//!
//! Welch's variant does not assume the two groups share a population
//! variance; the test statistic is referred to a Student's t distribution
//! with fractional degrees of freedom from the Welch–Satterthwaite
//! approximation:
//!
//! ```text
//! t  = (m1 - m2) / sqrt(v1/n1 + v2/n2)
//! df = (v1/n1 + v2/n2)^2 / ((v1/n1)^2/(n1-1) + (v2/n2)^2/(n2-1))
//! ```
//!
//! The confidence interval for the difference in means uses the same
//! standard error and the same t distribution, so the test and the interval
//! always agree on the variance assumption.

use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;

use crate::constants::CONFIDENCE_LEVEL;
use crate::error::{check_sample, StatError};
use crate::result::TTestResult;

/// Run Welch's t-test on two independent samples.
///
/// Returns the t-statistic, two-sided p-value, Welch–Satterthwaite degrees
/// of freedom, the difference in means `mean(x2) - mean(x1)`, and a 95%
/// confidence interval for that difference. Note the sign conventions
/// described on [`TTestResult`]: `t_stat` is first-minus-second,
/// `diff_means` second-minus-first.
///
/// Fully deterministic given identical inputs.
///
/// # Errors
///
/// - [`StatError::EmptySample`] / [`StatError::NonFiniteSample`] if either
///   input is empty or contains NaN/infinity.
/// - [`StatError::Distribution`] if the computed degrees of freedom are
///   unusable (single-element or zero-variance samples drive them to NaN
///   or zero, which the t distribution constructor rejects).
pub fn welch_t_test(x1: &[f64], x2: &[f64]) -> Result<TTestResult, StatError> {
    check_sample("x1", x1)?;
    check_sample("x2", x2)?;

    let m1 = x1.mean();
    let m2 = x2.mean();
    let v1 = x1.variance();
    let v2 = x2.variance();
    let n1 = x1.len() as f64;
    let n2 = x2.len() as f64;

    let se2 = v1 / n1 + v2 / n2;
    let se = se2.sqrt();
    let t_stat = (m1 - m2) / se;

    let df = se2 * se2 / ((v1 / n1).powi(2) / (n1 - 1.0) + (v2 / n2).powi(2) / (n2 - 1.0));

    let t_dist = StudentsT::new(0.0, 1.0, df)?;
    let p_value = 2.0 * (1.0 - t_dist.cdf(t_stat.abs()));

    let diff_means = m2 - m1;
    let t_crit = t_dist.inverse_cdf(0.5 + CONFIDENCE_LEVEL / 2.0);

    Ok(TTestResult {
        t_stat,
        p_value,
        df,
        diff_means,
        ci_lower: diff_means - t_crit * se,
        ci_upper: diff_means + t_crit * se,
    })
}

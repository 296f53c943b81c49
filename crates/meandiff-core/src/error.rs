//! Error type for the statistics layer.

use thiserror::Error;

/// Errors surfaced by the statistical routines.
///
/// Input validation fails fast and names the offending argument, so a caller
/// comparing `control` against `treatment` learns which of the two was bad.
/// Degenerate statistical configurations (for example a zero-variance sample
/// driving the Welch degrees of freedom to zero) are not second-guessed
/// here; the underlying distribution constructor's error is passed through
/// as [`StatError::Distribution`].
#[derive(Debug, Error)]
pub enum StatError {
    /// A sample slice was empty.
    #[error("sample `{name}` is empty")]
    EmptySample {
        /// Which argument was empty.
        name: &'static str,
    },

    /// A sample contained a NaN or infinite value.
    #[error("sample `{name}` contains a non-finite value at index {index}")]
    NonFiniteSample {
        /// Which argument contained the value.
        name: &'static str,
        /// Position of the first offending value.
        index: usize,
    },

    /// The bootstrap was asked for zero iterations.
    #[error("bootstrap iteration count must be at least 1")]
    ZeroIterations,

    /// The Student's t distribution rejected the computed parameters.
    #[error("t distribution rejected parameters: {0}")]
    Distribution(#[from] statrs::StatsError),
}

/// Check that `sample` is non-empty and contains only finite values.
///
/// Shared by the statistics entry points and the plotting layer, so both
/// report bad input the same way.
pub fn check_sample(name: &'static str, sample: &[f64]) -> Result<(), StatError> {
    if sample.is_empty() {
        return Err(StatError::EmptySample { name });
    }
    if let Some(index) = sample.iter().position(|x| !x.is_finite()) {
        return Err(StatError::NonFiniteSample { name, index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_sample_accepts_finite_values() {
        assert!(check_sample("x1", &[1.0, -2.5, 0.0]).is_ok());
    }

    #[test]
    fn check_sample_rejects_empty() {
        let err = check_sample("x2", &[]).unwrap_err();
        assert!(matches!(err, StatError::EmptySample { name: "x2" }));
        assert_eq!(err.to_string(), "sample `x2` is empty");
    }

    #[test]
    fn check_sample_reports_first_non_finite_index() {
        let err = check_sample("x1", &[1.0, f64::NAN, f64::INFINITY]).unwrap_err();
        match err {
            StatError::NonFiniteSample { name, index } => {
                assert_eq!(name, "x1");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

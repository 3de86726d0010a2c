//! Assertion failure types.

use std::fmt;
use thiserror::Error;

/// One failed expectation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{label}: expected {expected} but found {actual}")]
pub struct Mismatch {
    /// What was checked (`status code`, `data.first_name`, ...)
    pub label: String,
    pub expected: String,
    pub actual: String,
}

impl Mismatch {
    pub fn new(
        label: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Every failure recorded by a soft assertion collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftAssertionError {
    pub failures: Vec<Mismatch>,
    /// Number of comparisons made, passing or not
    pub checks: usize,
}

impl fmt::Display for SoftAssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} soft assertion(s) failed:",
            self.failures.len(),
            self.checks
        )?;
        for (i, failure) in self.failures.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for SoftAssertionError {}

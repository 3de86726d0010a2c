//! Soft (collect-all) assertions.

use crate::mismatch::{Mismatch, SoftAssertionError};
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};
use tracing::{debug, error, warn};

/// Collects comparison failures instead of stopping at the first one.
///
/// Failures are reported only by [`assert_all`](Self::assert_all) or
/// [`finish`](Self::finish). A collector dropped before either is called
/// loses its failures (only a warning is logged); use
/// [`scoped`](Self::scoped) when that must not happen.
#[derive(Debug, Default)]
pub struct SoftAssert {
    failures: Vec<Mismatch>,
    checks: usize,
}

impl SoftAssert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `actual` against `expected`, recording a failure on mismatch.
    ///
    /// Returns whether the comparison passed.
    pub fn assert_eq<T>(&mut self, actual: T, expected: T, label: impl Into<String>) -> bool
    where
        T: PartialEq + Debug,
    {
        if actual == expected {
            self.record(Ok(()))
        } else {
            self.record(Err(Mismatch::new(
                label,
                format!("{expected:?}"),
                format!("{actual:?}"),
            )))
        }
    }

    /// Record a failure unless `condition` holds.
    pub fn assert_true(&mut self, condition: bool, label: impl Into<String>) -> bool {
        self.assert_eq(condition, true, label)
    }

    /// Record the outcome of a `check_*` call from [`crate::ResponseAssert`].
    pub fn record(&mut self, result: Result<(), Mismatch>) -> bool {
        self.checks += 1;
        match result {
            Ok(()) => true,
            Err(mismatch) => {
                debug!(%mismatch, "Soft assertion failed");
                self.failures.push(mismatch);
                false
            }
        }
    }

    /// Failures recorded since the last flush.
    pub fn failures(&self) -> &[Mismatch] {
        &self.failures
    }

    /// Comparisons made since the last flush.
    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Flush: return every recorded failure and reset the collector.
    pub fn finish(&mut self) -> Result<(), SoftAssertionError> {
        let failures = std::mem::take(&mut self.failures);
        let checks = std::mem::take(&mut self.checks);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(SoftAssertionError { failures, checks })
        }
    }

    /// Flush and panic with all recorded failures, if any.
    #[track_caller]
    pub fn assert_all(&mut self) {
        if let Err(err) = self.finish() {
            panic!("{err}");
        }
    }

    /// Wrap into a scope that flushes on drop.
    pub fn scoped(mut self) -> SoftScope {
        SoftScope {
            inner: Self {
                failures: std::mem::take(&mut self.failures),
                checks: std::mem::take(&mut self.checks),
            },
        }
    }
}

impl Drop for SoftAssert {
    fn drop(&mut self) {
        if !self.failures.is_empty() {
            warn!(
                lost = self.failures.len(),
                "Soft assertion failures dropped without assert_all"
            );
        }
    }
}

/// A [`SoftAssert`] that reports unflushed failures when it goes out of scope.
///
/// Dropping a scope with failures panics, or logs them at error level when
/// the thread is already unwinding.
#[derive(Debug, Default)]
pub struct SoftScope {
    inner: SoftAssert,
}

impl SoftScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flush explicitly and return the failures instead of panicking.
    pub fn close(mut self) -> Result<(), SoftAssertionError> {
        self.inner.finish()
    }
}

impl Deref for SoftScope {
    type Target = SoftAssert;

    fn deref(&self) -> &SoftAssert {
        &self.inner
    }
}

impl DerefMut for SoftScope {
    fn deref_mut(&mut self) -> &mut SoftAssert {
        &mut self.inner
    }
}

impl Drop for SoftScope {
    fn drop(&mut self) {
        if let Err(err) = self.inner.finish() {
            if std::thread::panicking() {
                error!(%err, "Soft assertion failures during unwind");
            } else {
                panic!("{err}");
            }
        }
    }
}

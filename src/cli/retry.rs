//! Bounded retry loop
//!
//! Runs an attempt closure up to `1 + max_retries` times. The closure decides
//! whether an attempt succeeded, should be retried, or the whole loop should
//! stop (e.g. because input ran out).

use crate::error::LibraryResult;

/// Result of a single attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt<T> {
    Done(T),
    Retry,
    Abort,
}

/// Result of the whole retry loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome<T> {
    Success(T),
    /// Every attempt asked for a retry
    Exhausted,
    /// An attempt returned [`Attempt::Abort`]
    Aborted,
}

/// Call `attempt` until it finishes, aborts, or the retries run out
pub fn retry_bounded<T, F>(max_retries: u32, mut attempt: F) -> LibraryResult<RetryOutcome<T>>
where
    F: FnMut() -> LibraryResult<Attempt<T>>,
{
    for n in 0..=max_retries {
        match attempt()? {
            Attempt::Done(value) => return Ok(RetryOutcome::Success(value)),
            Attempt::Abort => return Ok(RetryOutcome::Aborted),
            Attempt::Retry => {
                tracing::debug!(attempt = n + 1, max_retries, "attempt rejected");
            }
        }
    }
    Ok(RetryOutcome::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraryError;

    #[test]
    fn test_first_attempt_succeeds() {
        let mut calls = 0;
        let outcome = retry_bounded(3, || {
            calls += 1;
            Ok(Attempt::Done("ok"))
        })
        .unwrap();
        assert_eq!(outcome, RetryOutcome::Success("ok"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_exhausts_after_retries() {
        let mut calls = 0;
        let outcome: RetryOutcome<()> = retry_bounded(3, || {
            calls += 1;
            Ok(Attempt::Retry)
        })
        .unwrap();
        assert_eq!(outcome, RetryOutcome::Exhausted);
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_zero_retries_allows_one_attempt() {
        let mut calls = 0;
        let outcome: RetryOutcome<()> = retry_bounded(0, || {
            calls += 1;
            Ok(Attempt::Retry)
        })
        .unwrap();
        assert_eq!(outcome, RetryOutcome::Exhausted);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_succeeds_on_last_retry() {
        let mut calls = 0;
        let outcome = retry_bounded(2, || {
            calls += 1;
            Ok(if calls == 3 {
                Attempt::Done(calls)
            } else {
                Attempt::Retry
            })
        })
        .unwrap();
        assert_eq!(outcome, RetryOutcome::Success(3));
    }

    #[test]
    fn test_abort_stops_immediately() {
        let mut calls = 0;
        let outcome: RetryOutcome<()> = retry_bounded(5, || {
            calls += 1;
            Ok(Attempt::Abort)
        })
        .unwrap();
        assert_eq!(outcome, RetryOutcome::Aborted);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_error_propagates() {
        let result: LibraryResult<RetryOutcome<()>> =
            retry_bounded(3, || Err(LibraryError::Io("closed".into())));
        assert!(result.is_err());
    }
}

//! Bounded liveness polling primitive.
//!
//! A plain loop with sleep — no callbacks, no internal parallelism. The
//! driver uses it with "stats present" as the predicate for start and
//! "stats absent" for stop.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

/// Failure modes of a bounded probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The predicate never held within the configured bound.
    #[error("condition not met after waiting {} seconds", .0.as_secs())]
    Timeout(Duration),

    /// A control-plane query failed; polling does not retry query errors.
    #[error(transparent)]
    Query(#[from] anyhow::Error),
}

/// Poll `predicate` every `interval` until it holds or `timeout` elapses.
///
/// The deadline is absolute, computed once on entry; the predicate is
/// evaluated at least once even with a zero timeout.
///
/// # Errors
///
/// `ProbeError::Timeout` carrying the configured bound when the deadline
/// passes without success; `ProbeError::Query` when an attempt itself fails.
pub async fn probe<P, F>(
    mut predicate: P,
    interval: Duration,
    timeout: Duration,
) -> Result<(), ProbeError>
where
    P: FnMut() -> F,
    F: Future<Output = anyhow::Result<bool>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if predicate().await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(ProbeError::Timeout(timeout));
        }
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    const TICK: Duration = Duration::from_millis(5);

    #[tokio::test]
    async fn test_probe_returns_when_predicate_holds_immediately() {
        let result = probe(|| async { Ok(true) }, TICK, Duration::from_millis(50)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_probe_retries_until_predicate_holds() {
        let attempts = AtomicU32::new(0);
        let result = probe(
            || async {
                let n = attempts.fetch_add(1, Ordering::SeqCst);
                Ok(n >= 2)
            },
            TICK,
            Duration::from_secs(5),
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_probe_times_out_with_configured_bound() {
        let timeout = Duration::from_millis(20);
        let err = probe(|| async { Ok(false) }, TICK, timeout)
            .await
            .expect_err("must time out");
        match err {
            ProbeError::Timeout(bound) => assert_eq!(bound, timeout),
            ProbeError::Query(e) => panic!("expected timeout, got query error: {e}"),
        }
    }

    #[tokio::test]
    async fn test_probe_zero_timeout_still_attempts_once() {
        let attempts = AtomicU32::new(0);
        let result = probe(
            || async {
                attempts.fetch_add(1, Ordering::SeqCst);
                Ok(true)
            },
            TICK,
            Duration::ZERO,
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_probe_propagates_query_errors() {
        let err = probe(
            || async { anyhow::bail!("broker unreachable") },
            TICK,
            Duration::from_secs(5),
        )
        .await
        .expect_err("must fail");
        match err {
            ProbeError::Query(e) => assert!(e.to_string().contains("broker unreachable")),
            ProbeError::Timeout(_) => panic!("expected query error"),
        }
    }

    #[tokio::test]
    async fn test_probe_timeout_message_names_seconds() {
        let err = probe(|| async { Ok(false) }, TICK, Duration::from_millis(10))
            .await
            .expect_err("must time out");
        assert!(err.to_string().contains("seconds"));
    }
}

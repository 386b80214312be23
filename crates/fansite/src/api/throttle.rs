//! Minimum-interval request throttle.
//!
//! Enforces a fixed spacing between consecutive outbound API requests,
//! shared across all resource types of one client instance.

use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Default spacing between requests, slightly more than 3 requests/second
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(350);

/// Spaces out requests so consecutive send times are at least
/// `min_interval` apart.
///
/// The last-issued timestamp is shared state: the check-then-stamp sequence
/// is a critical section, so it runs under an async mutex that stays held
/// while waiting out the remainder. Concurrent callers queue on the lock and
/// each observes the stamp of the caller before it, which keeps the spacing
/// invariant across concurrently issued calls, not just sequential ones.
#[derive(Debug)]
pub struct RequestThrottle {
    /// Minimum gap between consecutive request send times
    min_interval: Duration,
    /// Timestamp of the last issued request
    last_request: Mutex<Option<Instant>>,
}

impl RequestThrottle {
    /// Create a new throttle with the given minimum interval
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Wait until the next request may be issued, then record its send time
    ///
    /// Suspends the calling task only; other tasks in the process keep
    /// running. The timestamp is stamped at the moment the caller proceeds
    /// to send, not at the moment it asked.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                tracing::debug!(
                    wait_ms = wait.as_millis() as u64,
                    "Rate limit: waiting before next request"
                );
                sleep(wait).await;
            }
        }

        *last = Some(Instant::now());
    }

    /// The configured minimum gap between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

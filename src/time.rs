//! Sleep abstraction for testability.
//!
//! The artifact poll loop waits through a [`Sleeper`] so tests can run it
//! without real delays.

use std::future::Future;
use std::time::Duration;

/// Abstraction over async sleeping.
pub trait Sleeper: Send + Sync {
    /// Suspends for the given duration.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production sleeper backed by [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately.
///
/// Poll loops count elapsed time in poll intervals rather than reading a
/// clock, so timeouts still trigger after the same number of polls.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

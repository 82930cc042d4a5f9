use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::info;

/// Enforces a minimum gap between outbound calls, shared by every symbol.
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: None,
        }
    }

    /// Time still to wait before the next call may go out.
    pub fn remaining(&self) -> Duration {
        match self.last_call {
            Some(last) => self.min_interval.saturating_sub(last.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Suspends until the minimum interval since the last call has passed.
    pub async fn wait_turn(&self) {
        let wait = self.remaining();
        if !wait.is_zero() {
            info!(
                "Waiting {}s before the next provider call (free API keys are rate limited)",
                wait.as_secs()
            );
            sleep(wait).await;
        }
    }

    /// Records an outbound call, whatever its outcome.
    pub fn mark_call(&mut self) {
        self.last_call = Some(Instant::now());
    }

    #[cfg(test)]
    pub fn last_call(&self) -> Option<Instant> {
        self.last_call
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_call_does_not_wait() {
        let limiter = RateLimiter::new(Duration::from_secs(60));
        let start = Instant::now();
        limiter.wait_turn().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_out_the_remaining_interval() {
        let mut limiter = RateLimiter::new(Duration::from_secs(60));
        limiter.mark_call();
        tokio::time::advance(Duration::from_secs(20)).await;
        assert_eq!(limiter.remaining(), Duration::from_secs(40));

        let start = Instant::now();
        limiter.wait_turn().await;
        assert!(start.elapsed() >= Duration::from_secs(40));
        assert_eq!(limiter.remaining(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn no_wait_once_interval_has_passed() {
        let mut limiter = RateLimiter::new(Duration::from_secs(60));
        limiter.mark_call();
        tokio::time::advance(Duration::from_secs(61)).await;
        let start = Instant::now();
        limiter.wait_turn().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

use std::time::Duration;

use super::endpoint::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_WAIT};

/// Retry budget and backoff base for transient failures.
///
/// The wait before retry `n` (1-based) is `base_delay × 2^(n−1)`, without
/// jitter, so schedules are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; a call makes at most `max_retries + 1` round-trips.
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// No retries: every failure is surfaced after one attempt.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Wait before `attempt` (0 is the first attempt and never waits).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let factor = 1u32.checked_shl(attempt - 1).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_RETRY_WAIT)
    }
}

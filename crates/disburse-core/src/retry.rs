//! Retry policy for rate-limited requests.

use std::time::Duration;

/// Backoff strategy between rate-limited attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed {
        /// Delay between retries.
        delay: Duration,
    },
    /// Uses an exponential delay between retries.
    ///
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The delay multiplied by the growth term.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
    },
}

impl Default for Backoff {
    /// `2^attempt` seconds, so the first retry waits 2s and the tenth 1024s.
    fn default() -> Self {
        Self::Exponential {
            base: Duration::from_secs(1),
            factor: 2.0,
            max: Duration::from_secs(1024),
        }
    }
}

impl Backoff {
    /// Delay before the next request after the `attempt`-th rate-limited one (1-based).
    pub fn delay(self, attempt: u32) -> Duration {
        match self {
            Self::Fixed { delay } => delay,
            Self::Exponential { base, factor, max } => {
                let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
                let seconds = base.as_secs_f64() * factor.powi(exponent);
                Duration::from_secs_f64(seconds.min(max.as_secs_f64()))
            }
        }
    }
}

/// Configuration for the rate-limit retry loop.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total requests allowed for one fetch, including the first.
    pub max_attempts: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// HTTP status codes that signal rate limiting.
    pub retry_on_status: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            backoff: Backoff::default(),
            retry_on_status: vec![429],
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration with fixed backoff.
    pub fn fixed(delay: Duration, max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::Fixed { delay },
            ..Self::default()
        }
    }

    /// A single attempt; a rate-limited response fails straight away.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_on_status.contains(&status)
    }

    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff.delay(attempt)
    }
}

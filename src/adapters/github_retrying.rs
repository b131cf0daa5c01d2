//! Retry wrapper for GitHub creation calls.

use std::thread;
use std::time::Duration;

use crate::domain::{AppError, SyncConfig};
use crate::ports::GitHubPort;

const DEFAULT_MAX_DELAY_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    pub fn from_config(config: &SyncConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay_ms: config.retry_delay_ms.max(1),
            max_delay_ms: DEFAULT_MAX_DELAY_MS.max(config.retry_delay_ms),
        }
    }

    fn delay_for_retry(&self, failed_attempt: u32) -> Duration {
        // attempt=1 -> base, attempt=2 -> base*2, attempt=3 -> base*4, capped.
        let exponent = failed_attempt.saturating_sub(1).min(6);
        let multiplier = 1_u64 << exponent;
        Duration::from_millis(self.base_delay_ms.saturating_mul(multiplier).min(self.max_delay_ms))
    }
}

/// Retries failed creation calls with capped exponential backoff.
///
/// Listing calls pass straight through; their failure is fatal to a sync run.
pub struct RetryingGitHub<P: GitHubPort> {
    inner: P,
    policy: RetryPolicy,
}

impl<P: GitHubPort> RetryingGitHub<P> {
    pub fn new(inner: P, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    fn with_retry<F>(&self, operation: &str, mut call: F) -> Result<(), AppError>
    where
        F: FnMut(&P) -> Result<(), AppError>,
    {
        let mut attempt = 1;
        loop {
            match call(&self.inner) {
                Ok(()) => return Ok(()),
                Err(error) if is_retryable(&error) && attempt < self.policy.max_attempts => {
                    let delay = self.policy.delay_for_retry(attempt);
                    eprintln!(
                        "{} failed (attempt {}/{}): {}. Retrying in {} ms.",
                        operation,
                        attempt,
                        self.policy.max_attempts,
                        error,
                        delay.as_millis()
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

fn is_retryable(error: &AppError) -> bool {
    matches!(error, AppError::ExternalToolError { .. })
}

impl<P: GitHubPort> GitHubPort for RetryingGitHub<P> {
    fn list_labels(&self) -> Result<Vec<String>, AppError> {
        self.inner.list_labels()
    }

    fn list_milestones(&self) -> Result<Vec<String>, AppError> {
        self.inner.list_milestones()
    }

    fn create_label(&self, name: &str, color: &str, description: &str) -> Result<(), AppError> {
        self.with_retry(&format!("Creating label '{}'", name), |inner| {
            inner.create_label(name, color, description)
        })
    }

    fn create_milestone(&self, title: &str, description: &str) -> Result<(), AppError> {
        self.with_retry(&format!("Creating milestone '{}'", title), |inner| {
            inner.create_milestone(title, description)
        })
    }
}

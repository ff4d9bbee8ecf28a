// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-method retry and timeout defaults.
//!
//! Each RPC has a default configuration: which status codes are retried, the
//! parameters for exponential backoff, and a total deadline. Applications
//! override these defaults per client with
//! [ClientBuilder::with_retry_policy][crate::client_builder::ClientBuilder::with_retry_policy],
//! or per call with the [RequestOptionsBuilder][crate::options::RequestOptionsBuilder].

use crate::backoff_policy::BackoffPolicy;
use crate::error::rpc::Code;
use crate::exponential_backoff::ExponentialBackoffBuilder;
use crate::retry_policy::{RetryPolicy, RetryPolicyExt, RetryableCodes};
use std::sync::Arc;
use std::time::Duration;

/// The default retry configuration for a method.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MethodConfig {
    /// The status codes that trigger a retry.
    pub retryable: &'static [Code],
    /// The delay before the first retry.
    pub initial_delay: Duration,
    /// The factor applied to the delay after each retry.
    pub multiplier: f64,
    /// The upper bound for any delay.
    pub maximum_delay: Duration,
    /// The total time allowed for the call, including all retries.
    pub total_timeout: Duration,
}

const RETRY_ON_TRANSIENT: &[Code] = &[Code::Unavailable, Code::DeadlineExceeded];

impl MethodConfig {
    /// The configuration for methods that retry transient failures.
    ///
    /// Retries `UNAVAILABLE` and `DEADLINE_EXCEEDED`, with delays starting at
    /// 100ms, growing by 1.3 up to 60s, and a 300s total deadline.
    pub const fn retry_transient() -> Self {
        Self {
            retryable: RETRY_ON_TRANSIENT,
            initial_delay: Duration::from_millis(100),
            multiplier: 1.3,
            maximum_delay: Duration::from_secs(60),
            total_timeout: Duration::from_secs(300),
        }
    }

    /// The configuration for methods that are never retried.
    ///
    /// The 300s total deadline still applies.
    pub const fn no_retry() -> Self {
        Self {
            retryable: &[],
            initial_delay: Duration::from_millis(100),
            multiplier: 1.3,
            maximum_delay: Duration::from_secs(60),
            total_timeout: Duration::from_secs(300),
        }
    }

    /// Returns true if the method retries any errors.
    pub fn is_retryable(&self) -> bool {
        !self.retryable.is_empty()
    }

    /// The retry policy for this configuration.
    pub fn retry_policy(&self) -> Arc<dyn RetryPolicy> {
        Arc::new(
            RetryableCodes::new(self.retryable.iter().copied()).with_time_limit(self.total_timeout),
        )
    }

    /// The backoff policy for this configuration.
    pub fn backoff_policy(&self) -> Arc<dyn BackoffPolicy> {
        Arc::new(ExponentialBackoffBuilder::from(self).clamp())
    }
}

impl Default for MethodConfig {
    fn default() -> Self {
        Self::no_retry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::error::rpc::Status;
    use crate::retry_state::RetryState;

    fn unavailable() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable))
    }

    #[test]
    fn retry_transient() {
        let config = MethodConfig::retry_transient();
        assert!(config.is_retryable());
        let policy = config.retry_policy();
        let state = RetryState::new(true).set_attempt_count(1);
        assert!(policy.on_error(&state, unavailable()).is_continue());
        let remaining = policy.remaining_time(&state);
        assert!(
            remaining.is_some_and(|d| d <= Duration::from_secs(300)),
            "{remaining:?}"
        );
    }

    #[test]
    fn no_retry() {
        let config = MethodConfig::no_retry();
        assert!(!config.is_retryable());
        let policy = config.retry_policy();
        let state = RetryState::new(true).set_attempt_count(1);
        assert!(policy.on_error(&state, unavailable()).is_permanent());
        assert_eq!(MethodConfig::default(), config);
    }

    #[test]
    fn backoff() {
        let config = MethodConfig::retry_transient();
        let backoff = config.backoff_policy();
        let state = RetryState::new(true).set_attempt_count(1);
        assert!(backoff.on_failure(&state) <= Duration::from_millis(100));
    }
}

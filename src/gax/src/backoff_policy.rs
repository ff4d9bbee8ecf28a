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

//! The delay between attempts of a retried call.
//!
//! A call is only retried when the error is retryable for the method, see
//! [MethodConfig][crate::method_config::MethodConfig]. Before each new attempt
//! the retry loop sleeps for the duration returned by the [BackoffPolicy].
//! Each method uses the [ExponentialBackoff] derived from its configuration,
//! applications can replace it per client or per call.
//!
//! # Example
//! ```
//! # use google_cloud_dlp_gax::exponential_backoff::ExponentialBackoffBuilder;
//! # use google_cloud_dlp_gax::options::RequestOptions;
//! use std::time::Duration;
//!
//! let mut options = RequestOptions::default();
//! options.set_backoff_policy(
//!     ExponentialBackoffBuilder::new()
//!         .with_initial_delay(Duration::from_millis(500))
//!         .with_maximum_delay(Duration::from_secs(10))
//!         .clamp(),
//! );
//! assert!(options.backoff_policy().is_some());
//! ```
//!
//! [ExponentialBackoff]: crate::exponential_backoff::ExponentialBackoff

use crate::retry_state::RetryState;
use std::sync::Arc;
use std::time::Duration;

/// Computes how long to wait before the next attempt.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the delay after a failed attempt.
    ///
    /// `state.attempt_count` counts the attempts made so far, including the
    /// one that just failed. It is never zero.
    fn on_failure(&self, state: &RetryState) -> Duration;
}

/// Accepts any [BackoffPolicy] in the client and request options.
#[derive(Clone, Debug)]
pub struct BackoffPolicyArg(Arc<dyn BackoffPolicy>);

impl<T: BackoffPolicy + 'static> std::convert::From<T> for BackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<BackoffPolicyArg> for Arc<dyn BackoffPolicy> {
    fn from(value: BackoffPolicyArg) -> Arc<dyn BackoffPolicy> {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed(Duration);
    impl BackoffPolicy for Fixed {
        fn on_failure(&self, _state: &RetryState) -> Duration {
            self.0
        }
    }

    #[test]
    fn arg_conversions() {
        let arg = BackoffPolicyArg::from(Fixed(Duration::from_secs(2)));
        let policy: Arc<dyn BackoffPolicy> = arg.into();
        let state = RetryState::new(true).set_attempt_count(3);
        assert_eq!(policy.on_failure(&state), Duration::from_secs(2));

        let arg = BackoffPolicyArg::from(policy);
        let policy: Arc<dyn BackoffPolicy> = arg.into();
        assert_eq!(policy.on_failure(&state), Duration::from_secs(2));
    }
}

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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries automatically retry RPCs when (1) they fail due to
//! transient errors **and** the RPC is [idempotent], (2) or failed before an
//! RPC was started. That is, when it is safe to attempt the RPC more than once.
//!
//! Applications may override the default behavior, increasing the retry
//! attempts, or changing which errors are considered safe to retry.
//!
//! This module defines the traits for retry policies and some common
//! implementations.
//!
//! To configure the default retry policy for a client, use
//! [ClientBuilder::with_retry_policy]. To configure the retry policy used for
//! a specific request, use [RequestOptionsBuilder::with_retry_policy].
//!
//! [ClientBuilder::with_retry_policy]: crate::client_builder::ClientBuilder::with_retry_policy
//! [RequestOptionsBuilder::with_retry_policy]: crate::options::RequestOptionsBuilder::with_retry_policy
//! [idempotent]: https://en.wikipedia.org/wiki/Idempotence
//!
//! # Example
//! ```
//! # use google_cloud_dlp_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = Aip194Strict.with_time_limit(Duration::from_secs(60)).with_attempt_limit(10);
//! ```

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use crate::retry_state::RetryState;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `state` - the state of the retry loop, including the idempotency of
    ///   the request, the start time and the number of attempts.
    /// * `error` - the last error when attempting the request.
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next RPC
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(&self, _state: &RetryState) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// The `remaining_time()` function returns the remaining time. This is
    /// always [Duration::ZERO] once or after the policy's expiration time is
    /// reached.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_dlp_gax::retry_policy::*;
    /// let policy = Aip194Strict.with_attempt_limit(3);
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// A retry policy that strictly follows [AIP-194].
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// The policy interprets AIP-194 **strictly**, the retry decision for
/// server-side errors are based only on the status code, and the only retryable
/// status code is "UNAVAILABLE".
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl RetryPolicy for Aip194Strict {
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if !state.idempotent {
            return RetryResult::Permanent(error);
        }
        if error.is_io() {
            return RetryResult::Continue(error);
        }
        if let Some(status) = error.status() {
            return if status.code == Code::Unavailable {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        match error.http_status_code() {
            Some(code) if code == http::StatusCode::SERVICE_UNAVAILABLE.as_u16() => {
                RetryResult::Continue(error)
            }
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that retries a fixed set of status codes.
///
/// Errors in the transport are treated as [Code::Unavailable], and attempts
/// that exceed their timeout are treated as [Code::DeadlineExceeded]. Only
/// idempotent requests are retried, unless the error happened before the RPC
/// was sent.
///
/// # Example
/// ```
/// # use google_cloud_dlp_gax::retry_policy::*;
/// # use google_cloud_dlp_gax::error::rpc::Code;
/// let policy = RetryableCodes::new([Code::Unavailable, Code::DeadlineExceeded]);
/// ```
#[derive(Clone, Debug)]
pub struct RetryableCodes {
    codes: Vec<Code>,
}

impl RetryableCodes {
    /// Creates a policy retrying the given codes.
    pub fn new<I: IntoIterator<Item = Code>>(codes: I) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    fn classify(error: &Error) -> Option<Code> {
        if let Some(status) = error.status() {
            return Some(status.code);
        }
        if error.is_io() {
            return Some(Code::Unavailable);
        }
        if error.is_timeout() {
            return Some(Code::DeadlineExceeded);
        }
        error.http_status_code().map(Code::from_http_status)
    }
}

impl RetryPolicy for RetryableCodes {
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if !state.idempotent {
            return RetryResult::Permanent(error);
        }
        match Self::classify(&error) {
            Some(code) if self.codes.contains(&code) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// The policy retries all errors. This may be useful if the service guarantees
/// idempotency, maybe through the use of request ids.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that never retries.
///
/// This policy is useful when the client already has (or may already have) a
/// retry policy configured, and you want to avoid retrying a particular method.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        RetryResult::Permanent(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. While the time spent in the retry loop (including time in backoff)
/// is less than the prescribed duration the `on_error()` method returns the
/// results of the inner policy. After that time it returns
/// [Exhausted][RetryResult::Exhausted] if the inner policy returns
/// [Continue][RetryResult::Continue].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Aip194Strict>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: Aip194Strict,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if state.start.elapsed() >= self.maximum_duration => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        let deadline = state.start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
        match self.inner.remaining_time(state) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// This policy decorates an inner policy and limits the total number of
/// attempts. Note that `on_error()` is not called before the initial
/// (non-retry) attempt. Therefore, setting the maximum number of attempts to 0
/// or 1 results in no retry attempts.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = Aip194Strict>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: Aip194Strict,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if state.attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        self.inner.remaining_time(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use crate::error::rpc::Status;
    use test_case::test_case;
    use tokio::time::Instant;

    fn from_code(code: Code) -> Error {
        Error::service(Status::default().set_code(code).set_message("test-only"))
    }

    fn idempotent_state() -> RetryState {
        RetryState::new(true)
    }

    fn non_idempotent_state() -> RetryState {
        RetryState::new(false)
    }

    #[test]
    fn aip194_strict() {
        let p = Aip194Strict;

        assert!(p.on_error(&idempotent_state(), from_code(Code::Unavailable)).is_continue());
        assert!(p.on_error(&non_idempotent_state(), from_code(Code::Unavailable)).is_permanent());
        assert!(p.on_error(&idempotent_state(), from_code(Code::PermissionDenied)).is_permanent());
        assert!(p.on_error(&idempotent_state(), Error::io("err")).is_continue());
        assert!(p.on_error(&non_idempotent_state(), Error::io("err")).is_permanent());

        let http = Error::http(503, http::HeaderMap::new(), bytes::Bytes::new());
        assert!(p.on_error(&idempotent_state(), http).is_continue());
        let http = Error::http(404, http::HeaderMap::new(), bytes::Bytes::new());
        assert!(p.on_error(&idempotent_state(), http).is_permanent());

        let auth = Error::authentication(CredentialsError::from_msg(true, "err"));
        assert!(p.on_error(&non_idempotent_state(), auth).is_continue());
        let auth = Error::authentication(CredentialsError::from_msg(false, "err"));
        assert!(p.on_error(&idempotent_state(), auth).is_permanent());

        assert!(p.remaining_time(&idempotent_state()).is_none());
    }

    #[test_case(Code::Unavailable, true)]
    #[test_case(Code::DeadlineExceeded, true)]
    #[test_case(Code::NotFound, false)]
    #[test_case(Code::InvalidArgument, false)]
    fn retryable_codes(code: Code, want: bool) {
        let p = RetryableCodes::new([Code::Unavailable, Code::DeadlineExceeded]);
        let got = p.on_error(&idempotent_state(), from_code(code));
        assert_eq!(got.is_continue(), want, "{got:?}");
        let got = p.on_error(&non_idempotent_state(), from_code(code));
        assert!(got.is_permanent(), "{got:?}");
    }

    #[test]
    fn retryable_codes_transport() {
        let p = RetryableCodes::new([Code::Unavailable, Code::DeadlineExceeded]);
        assert!(p.on_error(&idempotent_state(), Error::io("err")).is_continue());
        assert!(p.on_error(&idempotent_state(), Error::timeout("err")).is_continue());
        let http = Error::http(503, http::HeaderMap::new(), bytes::Bytes::new());
        assert!(p.on_error(&idempotent_state(), http).is_continue());

        let p = RetryableCodes::new([]);
        assert!(p.on_error(&idempotent_state(), Error::io("err")).is_permanent());
    }

    #[test]
    fn always_and_never() {
        let p = AlwaysRetry;
        assert!(p.on_error(&non_idempotent_state(), from_code(Code::NotFound)).is_continue());
        let p = NeverRetry;
        assert!(p.on_error(&idempotent_state(), from_code(Code::Unavailable)).is_permanent());
    }

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;
            fn remaining_time(&self, state: &RetryState) -> Option<Duration>;
        }
    }

    #[test]
    fn limited_time_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_remaining_time().times(1).returning(|_| None);

        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let rf = policy.on_error(&idempotent_state(), Error::io("err"));
        assert!(rf.is_continue(), "{rf:?}");

        let rt = policy.remaining_time(&idempotent_state());
        assert!(rt.is_some(), "{rt:?}");
    }

    #[test]
    fn limited_time_inner_continues() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, e| RetryResult::Continue(e));

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(10));
        let state = idempotent_state().set_start(now - Duration::from_secs(20));
        let rf = policy.on_error(&state, Error::io("err"));
        assert!(rf.is_exhausted(), "{rf:?}");
    }

    #[test]
    fn limited_time_inner_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, e| RetryResult::Permanent(e));

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(10));
        let state = idempotent_state().set_start(now - Duration::from_secs(20));
        let rf = policy.on_error(&state, Error::io("err"));
        assert!(rf.is_permanent(), "{rf:?}");
    }

    #[test]
    fn limited_time_remaining_inner_shorter() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_| Some(Duration::from_secs(5)));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(120));
        let remaining = policy.remaining_time(&idempotent_state());
        assert_eq!(remaining, Some(Duration::from_secs(5)));
    }

    #[test]
    fn limited_time_remaining_expired() {
        let policy = LimitedElapsedTime::new(Duration::from_secs(10));
        let state = idempotent_state().set_start(Instant::now() - Duration::from_secs(20));
        assert_eq!(policy.remaining_time(&state), Some(Duration::ZERO));
    }

    #[test]
    fn limited_attempt_count() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_remaining_time().returning(|_| None);
        let policy = LimitedAttemptCount::custom(mock, 3);
        let rf = policy.on_error(&idempotent_state().set_attempt_count(1), Error::io("err"));
        assert!(rf.is_continue(), "{rf:?}");
        let rf = policy.on_error(&idempotent_state().set_attempt_count(3), Error::io("err"));
        assert!(rf.is_exhausted(), "{rf:?}");
        assert!(policy.remaining_time(&idempotent_state()).is_none());
    }

    #[test]
    fn ext_composes() {
        let policy = Aip194Strict
            .with_attempt_limit(2)
            .with_time_limit(Duration::from_secs(60));
        let state = idempotent_state().set_attempt_count(2);
        let rf = policy.on_error(&state, from_code(Code::Unavailable));
        assert!(rf.is_exhausted(), "{rf:?}");
    }
}

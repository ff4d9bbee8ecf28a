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

//! The retry loop shared by all transports.
//!
//! This is an implementation detail, used by the transports in
//! `google-cloud-dlp-gax-internal`.

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::error::Error;
use crate::method_config::MethodConfig;
use crate::options::RequestOptions;
use crate::options::internal::method_config;
use crate::retry_policy::{LimitedElapsedTime, RetryPolicy};
use crate::retry_result::RetryResult;
use crate::retry_state::RetryState;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

enum RetryLoopAttempt {
    // The first attempt
    Initial,
    // (backoff delay, previous error)
    Retry(Duration, Error),
}

/// Runs `inner` until it succeeds, or the retry policy stops the loop.
///
/// `inner` receives the time remaining in the retry policy, if any. The
/// `sleep` function is used for the backoff delays, tests replace it to avoid
/// real waits.
///
/// Errors that the policy marks as [Exhausted][RetryResult::Exhausted] are
/// wrapped with [Error::exhausted], keeping the last error as the source. The
/// loop never sleeps past the policy deadline.
pub async fn retry_loop<F, S, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let mut state = RetryState::new(idempotent);
    let mut attempt = RetryLoopAttempt::Initial;
    loop {
        if let RetryLoopAttempt::Retry(delay, prev_error) = attempt {
            let remaining = retry_policy.remaining_time(&state);
            if remaining.is_some_and(|remaining| remaining < delay) {
                return Err(Error::exhausted(prev_error));
            }
            tracing::debug!(
                attempt_count = state.attempt_count,
                ?delay,
                "retrying after error: {prev_error}"
            );
            sleep(delay).await;
        }
        state.attempt_count += 1;
        let remaining = retry_policy.remaining_time(&state);
        match inner(remaining).await {
            Ok(r) => return Ok(r),
            Err(e) => match retry_policy.on_error(&state, e) {
                RetryResult::Permanent(e) => return Err(e),
                RetryResult::Exhausted(e) => return Err(Error::exhausted(e)),
                RetryResult::Continue(e) => {
                    let delay = backoff_policy.on_failure(&state);
                    attempt = RetryLoopAttempt::Retry(delay, e);
                }
            },
        }
    }
}

/// Runs `future` until it completes or `token` is cancelled.
///
/// Dropping the future aborts any in-flight attempt and any pending backoff.
pub async fn cancellable<F, T>(token: Option<&CancellationToken>, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let Some(token) = token else {
        return future.await;
    };
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(Error::cancelled()),
        r = future => r,
    }
}

/// The timeout for one attempt.
///
/// This is the smaller of the per-attempt timeout in `options` and the time
/// remaining in the retry policy.
pub fn effective_timeout(options: &RequestOptions, remaining_time: Option<Duration>) -> Option<Duration> {
    match (options.attempt_timeout(), remaining_time) {
        (None, None) => None,
        (None, Some(t)) => Some(t),
        (Some(t), None) => Some(*t),
        (Some(a), Some(r)) => Some(*std::cmp::min(a, &r)),
    }
}

/// Selects the retry and backoff policies for a call.
///
/// The request options take precedence, then the client configuration, and
/// finally the defaults for the method. An overall timeout in the request
/// options limits whichever retry policy is selected.
pub fn select_policies(
    options: &RequestOptions,
    client_retry: Option<&Arc<dyn RetryPolicy>>,
    client_backoff: Option<&Arc<dyn BackoffPolicy>>,
) -> (Arc<dyn RetryPolicy>, Arc<dyn BackoffPolicy>) {
    let defaults = method_config(options).copied().unwrap_or_default();
    let retry = options
        .retry_policy()
        .clone()
        .or_else(|| client_retry.cloned())
        .unwrap_or_else(|| defaults.retry_policy());
    let retry = match options.timeout() {
        Some(timeout) => {
            Arc::new(LimitedElapsedTime::custom(SharedPolicy(retry), *timeout)) as Arc<dyn RetryPolicy>
        }
        None => retry,
    };
    let backoff = options
        .backoff_policy()
        .clone()
        .or_else(|| client_backoff.cloned())
        .unwrap_or_else(|| defaults.backoff_policy());
    (retry, backoff)
}

/// The default idempotency for a call.
pub fn idempotency(options: &RequestOptions) -> bool {
    options
        .idempotent()
        .unwrap_or_else(|| method_config(options).is_some_and(MethodConfig::is_retryable))
}

#[derive(Debug)]
struct SharedPolicy(Arc<dyn RetryPolicy>);

impl RetryPolicy for SharedPolicy {
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        self.0.on_error(state, error)
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        self.0.remaining_time(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::options::internal::set_method_config;
    use crate::retry_policy::{AlwaysRetry, LimitedAttemptCount, RetryPolicyExt};
    use std::error::Error as _;
    use std::sync::Mutex;
    use test_case::test_case;

    #[test_case(None, None, None)]
    #[test_case(Some(Duration::from_secs(4)), Some(Duration::from_secs(4)), None)]
    #[test_case(Some(Duration::from_secs(4)), None, Some(Duration::from_secs(4)))]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4))
    )]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4)),
        Some(Duration::from_secs(2))
    )]
    fn effective_timeouts(
        want: Option<Duration>,
        remaining: Option<Duration>,
        request: Option<Duration>,
    ) {
        let options = request.into_iter().fold(RequestOptions::default(), |mut o, t| {
            o.set_attempt_timeout(t);
            o
        });
        let got = effective_timeout(&options, remaining);
        assert_eq!(want, got);
    }

    mockall::mock! {
        Call {}
        impl CallTrait for Call {
            fn call(&self, d: Option<Duration>) -> Result<String>;
        }
    }
    trait CallTrait {
        fn call(&self, d: Option<Duration>) -> Result<String>;
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;
            fn remaining_time(&self, state: &RetryState) -> Option<Duration>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        BackoffPolicy {}
        impl BackoffPolicy for BackoffPolicy {
            fn on_failure(&self, state: &RetryState) -> Duration;
        }
    }

    fn transient() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable).set_message("try-again"))
    }

    fn permanent() -> Error {
        Error::service(Status::default().set_code(Code::PermissionDenied).set_message("uh-oh"))
    }

    fn recorder() -> (Arc<Mutex<Vec<Duration>>>, impl AsyncFn(Duration) + Send) {
        let sleeps = Arc::new(Mutex::new(Vec::new()));
        let captured = sleeps.clone();
        let sleep = async move |d: Duration| {
            captured.lock().unwrap().push(d);
        };
        (sleeps, sleep)
    }

    #[tokio::test]
    async fn immediate_success() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .returning(|_| Ok("success".to_string()));
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().returning(|_| None);
        retry_policy.expect_on_error().never();
        let backoff_policy = MockBackoffPolicy::new();
        let (sleeps, sleep) = recorder();

        let got = retry_loop(
            async |d| call.call(d),
            sleep,
            true,
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await?;
        assert_eq!(got, "success");
        assert!(sleeps.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn immediate_failure() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| Err(permanent()));
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().returning(|_| None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, e| RetryResult::Permanent(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy.expect_on_failure().never();
        let (sleeps, sleep) = recorder();

        let got = retry_loop(
            async |d| call.call(d),
            sleep,
            true,
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await;
        let err = got.expect_err("permanent errors are not retried");
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
        assert!(sleeps.lock().unwrap().is_empty());
        Ok(())
    }

    #[test_case(true)]
    #[test_case(false)]
    #[tokio::test]
    async fn retry_success(idempotent: bool) -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(transient()));
        call.expect_call()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok("success".to_string()));

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().returning(|_| None);
        retry_policy
            .expect_on_error()
            .times(2)
            .withf(move |state, _| state.idempotent == idempotent)
            .returning(|_, e| RetryResult::Continue(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .times(2)
            .returning(|state| Duration::from_millis(10 * state.attempt_count as u64));
        let (sleeps, sleep) = recorder();

        let got = retry_loop(
            async |d| call.call(d),
            sleep,
            idempotent,
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await?;
        assert_eq!(got, "success");
        assert_eq!(
            sleeps.lock().unwrap().as_slice(),
            &[Duration::from_millis(10), Duration::from_millis(20)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn too_many_transients() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().times(3).returning(|_| Err(transient()));
        let retry_policy = AlwaysRetry.with_attempt_limit(3);
        let backoff_policy = ExponentialBackoffBuilder::new().clamp();
        let (sleeps, sleep) = recorder();

        let got = retry_loop(
            async |d| call.call(d),
            sleep,
            true,
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await;
        let err = got.expect_err("the attempt limit stops the loop");
        assert!(err.is_exhausted(), "{err:?}");
        let last = err.source().and_then(|e| e.downcast_ref::<Error>());
        assert_eq!(
            last.and_then(|e| e.status()).map(|s| s.code),
            Some(Code::Unavailable)
        );
        assert_eq!(sleeps.lock().unwrap().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn no_sleep_past_overall_timeout() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| Err(transient()));
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .returning(|_| Some(Duration::from_millis(50)));
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, e| RetryResult::Continue(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .once()
            .returning(|_| Duration::from_secs(1));
        let (sleeps, sleep) = recorder();

        let got = retry_loop(
            async |d| call.call(d),
            sleep,
            true,
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await;
        let err = got.expect_err("the deadline is shorter than the backoff");
        assert!(err.is_exhausted(), "{err:?}");
        assert!(sleeps.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn remaining_time_reaches_attempt() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .withf(|d| *d == Some(Duration::from_secs(7)))
            .returning(|_| Ok("success".to_string()));
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .returning(|_| Some(Duration::from_secs(7)));
        let (_, sleep) = recorder();
        let got = retry_loop(
            async |d| call.call(d),
            sleep,
            true,
            Arc::new(retry_policy),
            Arc::new(MockBackoffPolicy::new()),
        )
        .await?;
        assert_eq!(got, "success");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_during_backoff() -> anyhow::Result<()> {
        let token = CancellationToken::new();
        let retry_policy = AlwaysRetry.with_attempt_limit(100);
        let backoff_policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(10))
            .with_maximum_delay(Duration::from_secs(10))
            .with_scaling(1.0)
            .build()?;
        let inner = async |_| -> Result<String> { Err(transient()) };
        let sleep = async |d| tokio::time::sleep(d).await;
        let cancel = token.clone();
        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            cancel.cancel();
        });
        let got = cancellable(
            Some(&token),
            retry_loop(inner, sleep, true, Arc::new(retry_policy), Arc::new(backoff_policy)),
        )
        .await;
        canceller.await?;
        let err = got.expect_err("the token is cancelled");
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn cancellable_without_token() -> anyhow::Result<()> {
        let got = cancellable(None, async { Ok(42) }).await?;
        assert_eq!(got, 42);
        Ok(())
    }

    #[test]
    fn select_policies_precedence() {
        let options = set_method_config(RequestOptions::default(), MethodConfig::retry_transient());
        let state = RetryState::new(true).set_attempt_count(1);

        // Method defaults retry UNAVAILABLE.
        let (retry, _) = select_policies(&options, None, None);
        assert!(retry.on_error(&state, transient()).is_continue());

        // The client configuration overrides the method defaults.
        let client: Arc<dyn RetryPolicy> = Arc::new(LimitedAttemptCount::new(1));
        let (retry, _) = select_policies(&options, Some(&client), None);
        assert!(retry.on_error(&state, transient()).is_exhausted());

        // The request options override the client configuration.
        let mut options = options;
        options.set_retry_policy(AlwaysRetry.with_attempt_limit(5));
        let (retry, _) = select_policies(&options, Some(&client), None);
        assert!(retry.on_error(&state, permanent()).is_continue());
    }

    #[test]
    fn select_policies_timeout() {
        let mut options = RequestOptions::default();
        options.set_timeout(Duration::from_secs(5));
        let (retry, _) = select_policies(&options, None, None);
        let state = RetryState::new(true);
        let remaining = retry.remaining_time(&state);
        assert!(
            remaining.is_some_and(|d| d <= Duration::from_secs(5)),
            "{remaining:?}"
        );
    }

    #[test]
    fn default_idempotency() {
        assert!(!idempotency(&RequestOptions::default()));
        let options = set_method_config(RequestOptions::default(), MethodConfig::retry_transient());
        assert!(idempotency(&options));
        let options = set_method_config(RequestOptions::default(), MethodConfig::no_retry());
        assert!(!idempotency(&options));
        let mut options = options;
        options.set_idempotency(true);
        assert!(idempotency(&options));
    }
}

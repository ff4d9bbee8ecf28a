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

//! Client configuration and per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the configuration.
//! Applications sometimes change the timeout for a specific call, change the
//! retry configuration, attach extra metadata, or need to cancel a call that
//! is taking too long. The `*Builder` returned by each client method implements
//! the [RequestOptionsBuilder] trait where applications can override these
//! defaults.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::method_config::MethodConfig;
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    attempt_timeout: Option<Duration>,
    timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    metadata: Vec<(String, String)>,
    cancellation: Option<CancellationToken>,
    method_config: Option<MethodConfig>,
}

impl RequestOptions {
    /// Gets the idempotency.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the RPC underlying RPC in this method as idempotent.
    ///
    /// If a retry policy is configured, the policy may examine the idempotency
    /// and the error details to decide if the error is retryable. Typically
    /// idempotent RPCs are safe to retry under more error conditions
    /// than non-idempotent RPCs.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt. The
    /// overall timeout for a request is set by [Self::set_timeout].
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Sets the overall timeout for the call, including all retry attempts.
    ///
    /// This overrides the default deadline configured for each method.
    pub fn set_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.timeout = Some(v.into());
    }

    /// Gets the overall timeout.
    pub fn timeout(&self) -> &Option<Duration> {
        &self.timeout
    }

    /// Get the current retry policy override, if any.
    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Sets the retry policy configuration.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    /// Get the current backoff policy override, if any.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    /// The metadata (headers) sent with the request, in order.
    pub fn metadata(&self) -> &[(String, String)] {
        &self.metadata
    }

    /// Appends a metadata pair to the request.
    ///
    /// The transport sends each pair as a header. Keys may repeat.
    pub fn add_metadata<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata.push((key.into(), value.into()));
    }

    /// Sets a token to cancel the request.
    ///
    /// Cancelling the token aborts the current attempt, and any pending
    /// backoff, and the call returns an error where
    /// [is_cancelled()][crate::error::Error::is_cancelled] is true.
    pub fn set_cancellation_token(&mut self, token: CancellationToken) {
        self.cancellation = Some(token);
    }

    /// Gets the cancellation token, if any.
    pub fn cancellation_token(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The Google Cloud Client Libraries for Rust provide a builder for each RPC.
/// These builders can be used to set the request parameters, e.g., the name of
/// the resource targeted by the RPC, as well as any options affecting the
/// request, such as additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the RPC underlying this method as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the overall timeout, including all retry attempts.
    fn with_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the retry policy configuration.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// Appends a metadata pair, sent as a header with the request.
    fn with_metadata<K: Into<String>, V: Into<String>>(self, key: K, value: V) -> Self;

    /// Sets a token to cancel the request.
    fn with_cancellation_token(self, token: CancellationToken) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;
    use crate::method_config::MethodConfig;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    /// Sets the idempotency unless the application already set it.
    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }

    /// Replaces the request metadata.
    pub fn set_metadata(mut options: RequestOptions, metadata: Vec<(String, String)>) -> RequestOptions {
        options.metadata = metadata;
        options
    }

    /// Sets the default retry configuration for the method.
    ///
    /// The default only applies if neither the request options nor the client
    /// configuration override the policies.
    pub fn set_method_config(mut options: RequestOptions, config: MethodConfig) -> RequestOptions {
        options.method_config = Some(config);
        options
    }

    pub fn method_config(options: &RequestOptions) -> Option<&MethodConfig> {
        options.method_config.as_ref()
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_metadata<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.request_options().add_metadata(key, value);
        self
    }

    fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.request_options().set_cancellation_token(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::retry_policy::LimitedAttemptCount;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();

        assert_eq!(opts.idempotent, None);
        opts.set_idempotency(true);
        assert_eq!(opts.idempotent(), Some(true));
        opts.set_idempotency(false);
        assert_eq!(opts.idempotent(), Some(false));

        opts.set_attempt_timeout(Duration::from_secs(123));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(123)));

        opts.set_timeout(Duration::from_secs(300));
        assert_eq!(opts.timeout(), &Some(Duration::from_secs(300)));

        assert!(opts.retry_policy().is_none(), "{opts:?}");
        opts.set_retry_policy(LimitedAttemptCount::new(3));
        assert!(opts.retry_policy().is_some(), "{opts:?}");

        assert!(opts.backoff_policy().is_none(), "{opts:?}");
        opts.set_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(opts.backoff_policy().is_some(), "{opts:?}");

        opts.add_metadata("k1", "v1");
        opts.add_metadata("k1", "v2");
        assert_eq!(
            opts.metadata(),
            &[("k1".to_string(), "v1".to_string()), ("k1".to_string(), "v2".to_string())]
        );
    }

    #[test]
    fn request_options_idempotency() {
        let opts = set_default_idempotency(RequestOptions::default(), true);
        assert_eq!(opts.idempotent(), Some(true));
        let opts = set_default_idempotency(opts, false);
        assert_eq!(opts.idempotent(), Some(true));

        let opts = set_default_idempotency(RequestOptions::default(), false);
        assert_eq!(opts.idempotent(), Some(false));
        let opts = set_default_idempotency(opts, true);
        assert_eq!(opts.idempotent(), Some(false));
    }

    #[test]
    fn request_options_metadata_replace() {
        let mut opts = RequestOptions::default();
        opts.add_metadata("a", "1");
        let opts = set_metadata(opts, vec![("b".into(), "2".into())]);
        assert_eq!(opts.metadata(), &[("b".to_string(), "2".to_string())]);
    }

    #[test]
    fn request_options_method_config() {
        let opts = RequestOptions::default();
        assert!(method_config(&opts).is_none());
        let opts = set_method_config(opts, MethodConfig::default());
        assert!(method_config(&opts).is_some());
    }

    #[test]
    fn request_options_builder() {
        let token = CancellationToken::new();
        let mut builder = TestBuilder::default()
            .with_idempotency(true)
            .with_attempt_timeout(Duration::from_secs(1))
            .with_timeout(Duration::from_secs(10))
            .with_retry_policy(LimitedAttemptCount::new(5))
            .with_backoff_policy(ExponentialBackoffBuilder::new().clamp())
            .with_metadata("x-test", "v")
            .with_cancellation_token(token.clone());
        let opts = builder.request_options();
        assert_eq!(opts.idempotent(), Some(true));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(1)));
        assert_eq!(opts.timeout(), &Some(Duration::from_secs(10)));
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        assert_eq!(opts.metadata().len(), 1);
        token.cancel();
        assert!(
            opts.cancellation_token()
                .map(|t| t.is_cancelled())
                .unwrap_or(false)
        );
    }
}

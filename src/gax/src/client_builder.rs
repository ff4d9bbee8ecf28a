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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. The Google Cloud client libraries for Rust use a generic
//! builder type to provide such functionality. The types in this module
//! implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::credentials::Credentials;
use crate::endpoint::ClientCertSource;
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::path::PathBuf;
use std::sync::Arc;

/// The result type for client construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```
/// # use google_cloud_dlp_gax::client_builder::examples;
/// # use google_cloud_dlp_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_default_credentials() => {
///         println!("error during client initialization: {e}");
///         println!("troubleshoot using https://cloud.google.com/docs/authentication/client-libraries");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the client options or the environment are invalid.
    ///
    /// For example, the application supplied both credentials and a
    /// credentials file, or `CLIENT_CERT_POLICY` has an unsupported value.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    /// If true, the mutual TLS configuration is invalid.
    ///
    /// For example, `MTLS_ENDPOINT_POLICY` has an unsupported value, or the
    /// client certificate source failed.
    pub fn is_mutual_tls(&self) -> bool {
        matches!(&self.0, ErrorKind::MutualTls(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Configuration(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn mutual_tls<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::MutualTls(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("invalid client configuration: {0}")]
    Configuration(#[source] BoxError),
    #[error("invalid mutual TLS configuration: {0}")]
    MutualTls(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The wire protocol used by a client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransportKind {
    /// Binary RPCs over HTTP/2 (gRPC).
    #[default]
    Grpc,
    /// JSON payloads over HTTP/1.1.
    Rest,
}

/// A generic builder for clients.
///
/// In the Google Cloud client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use google_cloud_dlp_gax::client_builder::examples;
/// # use google_cloud_dlp_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// To create a client with the default configuration just invoke the
/// `.build()` method:
/// ```
/// # use google_cloud_dlp_gax::client_builder::examples;
/// # use google_cloud_dlp_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder().build().await?;
/// # Result::<()>::Ok(()) });
/// ```
///
/// As usual, the builder offers several method to configure the client, and a
/// `.build()` method to construct the client:
/// ```
/// # use google_cloud_dlp_gax::client_builder::examples;
/// # use google_cloud_dlp_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("http://private.googleapis.com")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    ///
    /// ```
    /// # use google_cloud_dlp_gax::client_builder::examples;
    /// # use google_cloud_dlp_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.config.validate()?;
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// An explicit endpoint is used verbatim, it takes precedence over the
    /// `MTLS_ENDPOINT_POLICY` environment variable.
    ///
    /// ```
    /// # use google_cloud_dlp_gax::client_builder::examples;
    /// # use google_cloud_dlp_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("http://private.googleapis.com")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// ```
    /// # use google_cloud_dlp_gax::client_builder::examples;
    /// # use google_cloud_dlp_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_tracing()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Most Google Cloud services require authentication, though some services
    /// allow for anonymous access, and some services provide emulators where
    /// no authentication is required.
    ///
    /// Setting both credentials and a [credentials file][Self::with_credentials_file],
    /// or credentials and an [API key][Self::with_api_key], is a
    /// [configuration error][Error::is_configuration].
    ///
    /// ```
    /// # use google_cloud_dlp_gax::client_builder::examples;
    /// # use google_cloud_dlp_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use google_cloud_dlp_gax::credentials::anonymous;
    /// let client = Client::builder()
    ///     .with_credentials(anonymous::Builder::new().build())
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Load the authentication credentials from a file.
    ///
    /// The file is read once, when the client is built.
    pub fn with_credentials_file<V: Into<PathBuf>>(mut self, v: V) -> Self {
        self.config.credentials_file = Some(v.into());
        self
    }

    /// Sets the OAuth2 scopes for the credentials.
    ///
    /// The default is `https://www.googleapis.com/auth/cloud-platform`.
    pub fn with_scopes<I, V>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.config.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the project used for quota and billing.
    pub fn with_quota_project_id<V: Into<String>>(mut self, v: V) -> Self {
        self.config.quota_project_id = Some(v.into());
        self
    }

    /// Sets the audience used by the credentials.
    ///
    /// Credentials bound to an audience, such as the credentials in Google
    /// Distributed Cloud Hosted, use this value. The default is the host of the
    /// resolved endpoint.
    pub fn with_api_audience<V: Into<String>>(mut self, v: V) -> Self {
        self.config.api_audience = Some(v.into());
        self
    }

    /// Sets the client certificate used in mutual TLS.
    ///
    /// The certificate is only used if `CLIENT_CERT_POLICY` is `true`.
    pub fn with_client_cert_source(mut self, v: ClientCertSource) -> Self {
        self.config.client_cert_source = Some(v);
        self
    }

    /// Authenticates with an API key.
    pub fn with_api_key<V: Into<String>>(mut self, v: V) -> Self {
        self.config.api_key = Some(v.into());
        self
    }

    /// Controls whether service account credentials use self-signed JWTs.
    ///
    /// The default is `true`.
    pub fn with_always_use_jwt_access(mut self, v: bool) -> Self {
        self.config.always_use_jwt_access = v;
        self
    }

    /// Selects the wire protocol.
    ///
    /// ```
    /// # use google_cloud_dlp_gax::client_builder::examples;
    /// # use google_cloud_dlp_gax::client_builder::{Result, TransportKind};
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_transport_kind(TransportKind::Rest)
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_transport_kind(mut self, v: TransportKind) -> Self {
        self.config.transport = v;
        self
    }

    /// Configure the retry policy.
    ///
    /// The client libraries can automatically retry operations that fail. The
    /// retry policy controls what errors are considered retryable, sets limits
    /// on the number of attempts or the time trying to make attempts.
    ///
    /// ```
    /// # use google_cloud_dlp_gax::client_builder::examples;
    /// # use google_cloud_dlp_gax as gax;
    /// # use google_cloud_dlp_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    /// let client = Client::builder()
    ///     .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configure the retry backoff policy.
    ///
    /// The client libraries can automatically retry operations that fail. The
    /// backoff policy controls how long to wait in between retry attempts.
    ///
    /// ```
    /// # use google_cloud_dlp_gax::client_builder::examples;
    /// # use google_cloud_dlp_gax as gax;
    /// # use google_cloud_dlp_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use gax::exponential_backoff::ExponentialBackoff;
    /// let policy = ExponentialBackoff::default();
    /// let client = Client::builder()
    ///     .with_backoff_policy(policy)
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Gives client libraries access to the factory, to add
    /// service-specific options.
    pub fn factory_mut<F>(builder: &mut super::ClientBuilder<F>) -> &mut F {
        &mut builder.factory
    }

    /// Configure a client.
    ///
    /// A client represents a connection to a Google Cloud Service. Each service
    /// has one or more client types. The default configuration for each client
    /// should work for most applications. But some applications may need to
    /// override the default endpoint, the default authentication credentials,
    /// the retry policies, and/or other behaviors of the client.
    #[derive(Clone, Debug)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub cred: Option<Credentials>,
        pub credentials_file: Option<PathBuf>,
        pub scopes: Option<Vec<String>>,
        pub quota_project_id: Option<String>,
        pub api_audience: Option<String>,
        pub client_cert_source: Option<ClientCertSource>,
        pub api_key: Option<String>,
        pub always_use_jwt_access: bool,
        pub tracing: bool,
        pub transport: TransportKind,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    }

    impl ClientConfig {
        /// Returns true if any option only makes sense for a transport built
        /// by the client library.
        ///
        /// Applications that supply their own transport must configure it
        /// directly.
        pub fn has_transport_options(&self) -> bool {
            self.cred.is_some()
                || self.credentials_file.is_some()
                || self.scopes.is_some()
                || self.api_key.is_some()
        }

        /// Rejects mutually exclusive options.
        pub fn validate(&self) -> Result<()> {
            if self.cred.is_some() && self.credentials_file.is_some() {
                return Err(Error::configuration(
                    "credentials and credentials_file are mutually exclusive",
                ));
            }
            if self.api_key.is_some() && (self.cred.is_some() || self.credentials_file.is_some()) {
                return Err(Error::configuration(
                    "api_key and credentials are mutually exclusive",
                ));
            }
            Ok(())
        }
    }

    impl std::default::Default for ClientConfig {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                credentials_file: None,
                scopes: None,
                quota_project_id: None,
                api_audience: None,
                client_cert_source: None,
                api_key: None,
                always_use_jwt_access: true,
                tracing: false,
                transport: TransportKind::default(),
                retry_policy: None,
                backoff_policy: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        #[derive(Clone, Debug)]
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(self, config: super::Config) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::super::Error;
        use super::*;
        use crate::credentials::{anonymous, api_key_credentials};
        use crate::endpoint::ClientCertSource;
        use crate::exponential_backoff::ExponentialBackoffBuilder;
        use crate::retry_policy::{AlwaysRetry, RetryPolicyExt};
        use std::time::Duration;

        #[tokio::test]
        async fn build_default() -> anyhow::Result<()> {
            let client = Client::builder().build().await?;
            let config = client.0;
            assert_eq!(config.endpoint, None);
            assert!(config.cred.is_none());
            assert!(config.always_use_jwt_access);
            assert!(!config.tracing);
            assert_eq!(config.transport, super::super::TransportKind::Grpc);
            assert!(config.retry_policy.is_none());
            assert!(config.backoff_policy.is_none());
            assert!(!config.has_transport_options());
            Ok(())
        }

        #[tokio::test]
        async fn endpoint() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .build()
                .await?;
            assert_eq!(client.0.endpoint.as_deref(), Some("http://example.com"));
            Ok(())
        }

        #[tokio::test]
        async fn options() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_tracing()
                .with_scopes(["scope1", "scope2"])
                .with_quota_project_id("my-project")
                .with_api_audience("my-audience")
                .with_client_cert_source(ClientCertSource::from_pem(vec![], vec![]))
                .with_always_use_jwt_access(false)
                .with_transport_kind(super::super::TransportKind::Rest)
                .build()
                .await?;
            let config = client.0;
            assert!(config.tracing);
            assert_eq!(
                config.scopes,
                Some(vec!["scope1".to_string(), "scope2".to_string()])
            );
            assert_eq!(config.quota_project_id.as_deref(), Some("my-project"));
            assert_eq!(config.api_audience.as_deref(), Some("my-audience"));
            assert!(config.client_cert_source.is_some());
            assert!(!config.always_use_jwt_access);
            assert_eq!(config.transport, super::super::TransportKind::Rest);
            assert!(config.has_transport_options());
            Ok(())
        }

        #[tokio::test]
        async fn credentials() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_credentials(anonymous::Builder::new().build())
                .build()
                .await?;
            assert!(client.0.cred.is_some());
            Ok(())
        }

        #[tokio::test]
        async fn credentials_and_file_conflict() {
            let err = Client::builder()
                .with_credentials(anonymous::Builder::new().build())
                .with_credentials_file("/dev/null")
                .build()
                .await
                .err();
            assert!(err.as_ref().is_some_and(Error::is_configuration), "{err:?}");
        }

        #[tokio::test]
        async fn api_key_and_credentials_conflict() {
            let err = Client::builder()
                .with_credentials(api_key_credentials::Builder::new("test-only").build())
                .with_api_key("test-only")
                .build()
                .await
                .err();
            assert!(err.as_ref().is_some_and(Error::is_configuration), "{err:?}");

            let err = Client::builder()
                .with_credentials_file("/dev/null")
                .with_api_key("test-only")
                .build()
                .await
                .err();
            assert!(err.as_ref().is_some_and(Error::is_configuration), "{err:?}");
        }

        #[tokio::test]
        async fn api_key_alone() -> anyhow::Result<()> {
            let client = Client::builder().with_api_key("test-only").build().await?;
            assert_eq!(client.0.api_key.as_deref(), Some("test-only"));
            Ok(())
        }

        #[tokio::test]
        async fn policies() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
                .with_backoff_policy(
                    ExponentialBackoffBuilder::new()
                        .with_initial_delay(Duration::from_millis(1))
                        .with_maximum_delay(Duration::from_millis(2))
                        .build()?,
                )
                .build()
                .await?;
            assert!(client.0.retry_policy.is_some());
            assert!(client.0.backoff_policy.is_some());
            Ok(())
        }

        #[test]
        fn error_predicates() {
            let e = Error::cred("test-only");
            assert!(e.is_default_credentials());
            assert!(!e.is_transport());
            let e = Error::transport("test-only");
            assert!(e.is_transport());
            let e = Error::configuration("test-only");
            assert!(e.is_configuration());
            assert!(e.to_string().contains("test-only"), "{e}");
            let e = Error::mutual_tls("test-only");
            assert!(e.is_mutual_tls());
            assert!(!e.is_configuration());
        }
    }
}

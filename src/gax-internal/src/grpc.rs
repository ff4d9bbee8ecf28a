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

mod from_status;
pub use from_status::to_gax_error;

use crate::options::{ClientConfig, Credentials, TransportConfig};
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::endpoint::Environment;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::Parts;
use gax::retry_loop_internal::{
    cancellable, effective_timeout, idempotency, retry_loop, select_policies,
};
use gax::retry_policy::RetryPolicy;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[doc(hidden)]
pub type InnerClient = tonic::client::Grpc<tonic::transport::Channel>;

/// The gRPC transport.
///
/// The channel is created once, it connects on the first request. All clones
/// share the channel, and [close][Client::close] releases it.
#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<RwLock<Option<InnerClient>>>,
    credentials: Credentials,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl Client {
    pub async fn new(config: ClientConfig, default_endpoint: &str) -> gax::client_builder::Result<Self> {
        Self::with_environment(config, default_endpoint, &Environment::from_process())
    }

    /// Creates the transport resolving the configuration against `env`.
    ///
    /// Must be called in the context of a tokio runtime.
    pub fn with_environment(
        config: ClientConfig,
        default_endpoint: &str,
        env: &Environment,
    ) -> gax::client_builder::Result<Self> {
        let resolved = crate::options::resolve(&config, env, default_endpoint)?;
        let credentials = gax::credentials::resolve_credentials(&config, &resolved.audience)?;
        let inner = Self::make_inner(&resolved)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(Some(inner))),
            credentials,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
        })
    }

    /// Sends a unary request, retrying as configured in `options`.
    ///
    /// `metadata` is sent in order, followed by the `x-goog-api-client`
    /// header.
    pub async fn execute<Request, Response>(
        &self,
        method: tonic::GrpcMethod<'static>,
        path: http::uri::PathAndQuery,
        request: Request,
        options: RequestOptions,
        api_client_header: &'static str,
        metadata: &[(String, String)],
    ) -> Result<gax::response::Response<Response>>
    where
        Request: prost::Message + Clone + Send + 'static,
        Response: prost::Message + Default + Send + 'static,
    {
        // Fail fast, without consuming the retry budget.
        self.client()?;
        let headers = Self::make_headers(api_client_header, metadata)?;
        let (retry_policy, backoff_policy) = select_policies(
            &options,
            self.retry_policy.as_ref(),
            self.backoff_policy.as_ref(),
        );
        let idempotent = idempotency(&options);
        let token = options.cancellation_token().cloned();
        let this = self.clone();
        // Captured as `Extensions` rather than `GrpcMethod<'static>`: the
        // `Send` check on the retry loop future rejects captured `'static`
        // borrows inside async closures.
        let mut extensions = tonic::Extensions::new();
        extensions.insert(method);
        let inner = async move |remaining_time: Option<Duration>| {
            this.request_attempt::<Request, Response>(
                extensions.clone(),
                path.clone(),
                request.clone(),
                &options,
                remaining_time,
                headers.clone(),
            )
            .await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        cancellable(
            token.as_ref(),
            retry_loop(inner, sleep, idempotent, retry_policy, backoff_policy),
        )
        .await
    }

    /// Releases the channel. Closing an already closed client has no effect.
    pub fn close(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.take().is_some() {
                tracing::debug!("closed gRPC transport");
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.read().map(|g| g.is_none()).unwrap_or(true)
    }

    fn client(&self) -> Result<InnerClient> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .ok_or_else(Error::closed)
    }

    async fn request_attempt<Request, Response>(
        &self,
        extensions: tonic::Extensions,
        path: http::uri::PathAndQuery,
        request: Request,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
        mut headers: HeaderMap,
    ) -> Result<gax::response::Response<Response>>
    where
        Request: prost::Message + 'static,
        Response: prost::Message + Default + 'static,
    {
        let mut inner = self.client()?;
        let auth_headers = gax::credentials::request_headers(&self.credentials).await?;
        headers.extend(auth_headers);
        let metadata = tonic::metadata::MetadataMap::from_headers(headers);
        let mut request = tonic::Request::from_parts(metadata, extensions, request);
        if let Some(timeout) = effective_timeout(options, remaining_time) {
            request.set_timeout(timeout);
        }
        let codec = tonic_prost::ProstCodec::<Request, Response>::default();
        inner.ready().await.map_err(Error::io)?;
        let response: tonic::Response<Response> = inner
            .unary(request, path, codec)
            .await
            .map_err(to_gax_error)?;
        let (metadata, body, _) = response.into_parts();
        Ok(gax::response::Response::from_parts(
            Parts::new().set_headers(metadata.into_headers()),
            body,
        ))
    }

    fn make_inner(config: &TransportConfig) -> gax::client_builder::Result<InnerClient> {
        use tonic::transport::{ClientTlsConfig, Endpoint, Identity};
        let origin = crate::host::origin(&config.endpoint)?;
        let mut endpoint =
            Endpoint::from_shared(origin.to_string()).map_err(BuilderError::transport)?;
        if origin.scheme_str() == Some("https") {
            let mut tls = ClientTlsConfig::new().with_native_roots();
            if let Some(source) = &config.client_cert_source {
                let pair = source.load().map_err(BuilderError::mutual_tls)?;
                tls = tls.identity(Identity::from_pem(pair.cert_pem, pair.key_pem));
            }
            endpoint = endpoint.tls_config(tls).map_err(BuilderError::transport)?;
        }
        tracing::debug!(
            endpoint = %origin,
            is_mtls = config.is_mtls,
            "created gRPC transport"
        );
        let channel = endpoint.connect_lazy();
        // The service defines no limits on the message sizes.
        Ok(tonic::client::Grpc::new(channel)
            .max_decoding_message_size(usize::MAX)
            .max_encoding_message_size(usize::MAX))
    }

    fn make_headers(
        api_client_header: &'static str,
        metadata: &[(String, String)],
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (key, value) in metadata {
            headers.append(
                HeaderName::from_bytes(key.as_bytes()).map_err(Error::ser)?,
                HeaderValue::from_str(value).map_err(Error::ser)?,
            );
        }
        headers.append(
            HeaderName::from_static(crate::api_header::HEADER_NAME),
            HeaderValue::from_static(api_client_header),
        );
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::credentials::anonymous;
    use gax::endpoint::ClientCertSource;

    fn test_config() -> ClientConfig {
        ClientConfig {
            endpoint: Some("http://127.0.0.1:1".into()),
            cred: Some(anonymous::Builder::new().build()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn closed() -> anyhow::Result<()> {
        let client = Client::with_environment(test_config(), "https://dlp.googleapis.com", &Environment::new())?;
        assert!(!client.is_closed());
        let clone = client.clone();
        client.close();
        client.close();
        assert!(clone.is_closed());
        let err = clone
            .execute::<(), ()>(
                tonic::GrpcMethod::new("google.privacy.dlp.v2.DlpService", "GetDlpJob"),
                http::uri::PathAndQuery::from_static("/google.privacy.dlp.v2.DlpService/GetDlpJob"),
                (),
                RequestOptions::default(),
                "test-only",
                &[],
            )
            .await
            .unwrap_err();
        assert!(err.is_closed(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn cert_source_error() {
        let config = ClientConfig {
            endpoint: None,
            client_cert_source: Some(ClientCertSource::new(|| Err("no certificate".into()))),
            ..test_config()
        };
        let env = Environment::new()
            .with_mtls_endpoint_policy("always")
            .with_client_cert_policy("true");
        let got = Client::with_environment(config, "https://dlp.googleapis.com", &env);
        assert!(matches!(&got, Err(e) if e.is_mutual_tls()), "{got:?}");
    }

    #[test]
    fn headers_in_order() -> anyhow::Result<()> {
        let metadata = vec![
            ("x-goog-request-params".to_string(), "name=projects%2Fp".to_string()),
            ("x-test".to_string(), "value".to_string()),
        ];
        let headers = Client::make_headers("test-only", &metadata)?;
        let keys: Vec<&str> = headers.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["x-goog-request-params", "x-test", "x-goog-api-client"]);
        Ok(())
    }

    #[test]
    fn bad_header() {
        let metadata = vec![("bad header".to_string(), "value".to_string())];
        let got = Client::make_headers("test-only", &metadata);
        assert!(matches!(&got, Err(e) if e.is_serialization()), "{got:?}");
    }
}

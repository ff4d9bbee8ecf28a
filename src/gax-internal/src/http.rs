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

use crate::options::{ClientConfig, Credentials};
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::endpoint::Environment;
use gax::error::Error;
use gax::error::rpc::Status;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use gax::retry_loop_internal::{
    cancellable, effective_timeout, idempotency, retry_loop, select_policies,
};
use gax::retry_policy::RetryPolicy;
use http::{HeaderName, HeaderValue};
use std::sync::{Arc, RwLock};

/// The query parameter added to every request.
///
/// Responses use the canonical JSON mapping, with enums as integers.
pub const ALT_PARAMETER: (&str, &str) = ("$alt", "json;enum-encoding=int");

/// The HTTP/JSON transport.
///
/// The underlying session is shared by all clones, and released by
/// [close][ReqwestClient::close].
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: Arc<RwLock<Option<reqwest::Client>>>,
    cred: Credentials,
    endpoint: String,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl ReqwestClient {
    pub async fn new(config: ClientConfig, default_endpoint: &str) -> gax::client_builder::Result<Self> {
        Self::with_environment(config, default_endpoint, &Environment::from_process())
    }

    /// Creates the transport resolving the configuration against `env`.
    pub fn with_environment(
        config: ClientConfig,
        default_endpoint: &str,
        env: &Environment,
    ) -> gax::client_builder::Result<Self> {
        let resolved = crate::options::resolve(&config, env, default_endpoint)?;
        let cred = gax::credentials::resolve_credentials(&config, &resolved.audience)?;
        let origin = crate::host::origin(&resolved.endpoint)?;
        let mut builder = reqwest::Client::builder();
        if let Some(source) = &resolved.client_cert_source {
            let pair = source.load().map_err(BuilderError::mutual_tls)?;
            let mut pem = pair.cert_pem;
            pem.push(b'\n');
            pem.extend_from_slice(&pair.key_pem);
            let identity = reqwest::Identity::from_pem(&pem).map_err(BuilderError::mutual_tls)?;
            builder = builder.identity(identity);
        }
        let inner = builder.build().map_err(BuilderError::transport)?;
        let endpoint = origin.to_string().trim_end_matches('/').to_string();
        tracing::debug!(endpoint, is_mtls = resolved.is_mtls, "created HTTP/JSON transport");
        Ok(Self {
            inner: Arc::new(RwLock::new(Some(inner))),
            cred,
            endpoint,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
        })
    }

    /// Starts a request for `path`, relative to the endpoint.
    ///
    /// Fails with [Error::is_closed] after [close][ReqwestClient::close].
    pub fn builder(&self, method: reqwest::Method, path: String) -> Result<reqwest::RequestBuilder> {
        let client = self.client()?;
        Ok(client
            .request(method, format!("{}{path}", &self.endpoint))
            .query(&[ALT_PARAMETER]))
    }

    /// Sends the request, retrying as configured in `options`.
    ///
    /// `metadata` is sent as request headers, in order.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
        metadata: &[(String, String)],
    ) -> Result<Response<O>> {
        for (key, value) in metadata {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(Error::ser)?;
            let value = HeaderValue::from_str(value).map_err(Error::ser)?;
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let (retry_policy, backoff_policy) = select_policies(
            &options,
            self.retry_policy.as_ref(),
            self.backoff_policy.as_ref(),
        );
        let idempotent = idempotency(&options);
        let token = options.cancellation_token().cloned();
        let this = self.clone();
        let inner = async move |remaining| {
            let builder = builder
                .try_clone()
                .ok_or_else(|| Error::io("cannot clone a request with a streaming body"))?;
            this.request_attempt(builder, &options, remaining).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        cancellable(
            token.as_ref(),
            retry_loop(inner, sleep, idempotent, retry_policy, backoff_policy),
        )
        .await
    }

    /// Releases the session. Closing an already closed client has no effect.
    pub fn close(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.take().is_some() {
                tracing::debug!(endpoint = self.endpoint, "closed HTTP/JSON transport");
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.read().map(|g| g.is_none()).unwrap_or(true)
    }

    fn client(&self) -> Result<reqwest::Client> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .ok_or_else(Error::closed)
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
        remaining_time: Option<std::time::Duration>,
    ) -> Result<Response<O>> {
        builder = effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let auth_headers = gax::credentials::request_headers(&self.cred).await?;
        builder = builder.headers(auth_headers);
        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[derive(serde::Serialize)]
pub struct NoBody;

/// Converts an unsuccessful response into an error.
///
/// Responses with a `google.rpc.Status` payload become service errors, other
/// responses keep the status code, headers, and payload.
pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;
    let error = match Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // 204 No Content has no body, serde_json fails with EOF if we try to parse it.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;
    let response = match body {
        content if content.is_empty() && no_content_status => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };
    Ok(Response::from_parts(Parts::new().set_headers(headers), response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use http::HeaderMap;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert!(err.is_invalid_argument(), "{err:?}");
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "The thing is not there, oh noes!",
            "status": "NOT_FOUND",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.LocalizedMessage",
                "locale": "en-US",
                "message": "we searched everywhere, honest",
            }]
        }});
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        let status = err.status().cloned().unwrap_or_default();
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "The thing is not there, oh noes!");
        assert_eq!(status.details.len(), 1, "{status:?}");
        assert_eq!(err.http_status_code(), Some(404_u16));
        assert!(!err.is_invalid_argument(), "{err:?}");
        Ok(())
    }

    #[test_case(400, Code::InvalidArgument; "bad request")]
    #[test_case(403, Code::PermissionDenied; "forbidden")]
    #[test_case(503, Code::Unavailable; "unavailable")]
    #[tokio::test]
    async fn client_error_code_from_http(http_code: u16, want: Code) -> TestResult {
        let body = serde_json::json!({"error": {"code": http_code, "message": "uh-oh"}});
        let http_resp = http::Response::builder()
            .status(http_code)
            .body(body.to_string())?;
        let err = super::to_http_error::<()>(http_resp.into()).await.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(want), "{err:?}");
        assert_eq!(err.is_invalid_argument(), http_code == 400, "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn empty_no_content() -> TestResult {
        let http_resp = http::Response::builder().status(204).body("")?;
        let response = super::to_http_response::<serde_json::Value>(http_resp.into()).await?;
        assert_eq!(response.body(), &serde_json::Value::Null);
        Ok(())
    }

    #[tokio::test]
    async fn response_with_headers() -> TestResult {
        let http_resp = http::Response::builder()
            .status(200)
            .header("x-test", "value")
            .body(r#"{"name": "projects/p/dlpJobs/j"}"#)?;
        let response = super::to_http_response::<serde_json::Value>(http_resp.into()).await?;
        assert_eq!(
            response.headers().get("x-test"),
            Some(&HeaderValue::from_static("value"))
        );
        assert_eq!(
            response.body(),
            &serde_json::json!({"name": "projects/p/dlpJobs/j"})
        );
        Ok(())
    }

    #[tokio::test]
    async fn bad_payload() -> TestResult {
        let http_resp = http::Response::builder().status(200).body("not json")?;
        let err = super::to_http_response::<serde_json::Value>(http_resp.into())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }
}

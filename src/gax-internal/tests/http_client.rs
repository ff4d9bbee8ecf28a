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

//! Verify the HTTP/JSON transport using a local HTTP server.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::backoff_policy::BackoffPolicy;
    use gax::credentials::access_token;
    use gax::endpoint::Environment;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptions;
    use gax::retry_policy::Aip194Strict;
    use google_cloud_dlp_gax_internal::http::ReqwestClient;
    use google_cloud_dlp_gax_internal::options::ClientConfig;
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    type Result<T> = anyhow::Result<T>;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn headers_and_query() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/projects/p/dlpJobs"),
                request::headers(contains(("x-goog-request-params", "parent=projects%2Fp"))),
                request::headers(contains(("x-test", "value"))),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                request::query(url_decoded(contains(("pageSize", "10")))),
            ])
            .respond_with(json_encoded(json!({"jobs": [], "nextPageToken": ""}))),
        );
        let client = test_client(&server)?;
        let builder = client
            .builder(reqwest::Method::GET, "/v2/projects/p/dlpJobs".into())?
            .query(&[("pageSize", "10")]);
        let metadata = vec![
            ("x-goog-request-params".to_string(), "parent=projects%2Fp".to_string()),
            ("x-test".to_string(), "value".to_string()),
        ];
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                None,
                RequestOptions::default(),
                &metadata,
            )
            .await?;
        assert_eq!(response.body(), &json!({"jobs": [], "nextPageToken": ""}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn bad_request() -> Result<()> {
        let server = start(vec![permanent()]);
        let client = test_client(&server)?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                None,
                RequestOptions::default(),
                &[],
            )
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(400));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_success() -> Result<()> {
        let server = start(vec![transient(), transient(), success()]);
        let client = test_client(&server)?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let mut options = RequestOptions::default();
        options.set_retry_policy(Aip194Strict);
        options.set_backoff_policy(test_backoff());
        options.set_idempotency(true);
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), options, &[])
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_retry_when_not_idempotent() -> Result<()> {
        let server = start(vec![transient()]);
        let client = test_client(&server)?;
        let builder = client.builder(reqwest::Method::POST, "/retry".into())?;
        let mut options = RequestOptions::default();
        options.set_retry_policy(Aip194Strict);
        options.set_backoff_policy(test_backoff());
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), options, &[])
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn closed() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server)?;
        let clone = client.clone();
        client.close();
        client.close();
        assert!(clone.is_closed());
        let err = clone
            .builder(reqwest::Method::GET, "/unused".into())
            .unwrap_err();
        assert!(err.is_closed(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn cancelled() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server)?;
        let builder = client.builder(reqwest::Method::GET, "/unused".into())?;
        let token = CancellationToken::new();
        token.cancel();
        let mut options = RequestOptions::default();
        options.set_cancellation_token(token);
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options, &[])
            .await
            .unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    fn test_client(server: &Server) -> Result<ReqwestClient> {
        let endpoint = format!("http://{}", server.addr());
        let config = ClientConfig {
            cred: Some(access_token::Builder::new("test-token").build()),
            ..Default::default()
        };
        let client = ReqwestClient::with_environment(config, &endpoint, &Environment::new())?;
        Ok(client)
    }

    fn success() -> (StatusCode, String) {
        (StatusCode::OK, json!({"status": "done"}).to_string())
    }

    fn transient() -> (StatusCode, String) {
        let status = json!({"error": {
            "code": StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            "status": "UNAVAILABLE",
            "message": "try-again",
        }});
        (StatusCode::SERVICE_UNAVAILABLE, status.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let status = json!({"error": {
            "code": StatusCode::BAD_REQUEST.as_u16(),
            "status": "INVALID_ARGUMENT",
            "message": "uh-oh",
        }});
        (StatusCode::BAD_REQUEST, status.to_string())
    }

    fn test_backoff() -> impl BackoffPolicy {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::path("/retry"))
                .times(responses.len())
                .respond_with(cycle(
                    responses
                        .into_iter()
                        .map(|(status, body)| to_responder(status, body))
                        .collect(),
                )),
        );
        server
    }

    fn to_responder(status: StatusCode, response: String) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(response),
        )
    }
}

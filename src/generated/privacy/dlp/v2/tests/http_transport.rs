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

//! Verify the HTTP/JSON transport and interceptors using a local HTTP server.

#[cfg(test)]
mod http_transport {
    use gax::client_builder::TransportKind;
    use gax::credentials::access_token;
    use google_cloud_privacy_dlp_v2 as dlp;
    use dlp::builder::dlp_service::ClientBuilderExt;
    use dlp::interceptor::{DlpServiceInterceptor, Metadata};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type Result = anyhow::Result<()>;

    #[derive(Debug, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<String>>>,
        metadata: Arc<Mutex<Vec<Metadata>>>,
    }

    impl Recorder {
        fn push(&self, event: &str) {
            self.events.lock().expect("events lock").push(event.to_string());
        }
    }

    impl DlpServiceInterceptor for Recorder {
        fn pre_list_inspect_templates(
            &self,
            mut request: dlp::model::ListInspectTemplatesRequest,
            mut metadata: Metadata,
        ) -> (dlp::model::ListInspectTemplatesRequest, Metadata) {
            self.push("pre");
            self.metadata.lock().expect("metadata lock").push(metadata.clone());
            request.page_size = 25;
            metadata.push(("x-intercepted".to_string(), "pre".to_string()));
            (request, metadata)
        }

        fn post_list_inspect_templates(
            &self,
            mut response: dlp::model::ListInspectTemplatesResponse,
        ) -> dlp::model::ListInspectTemplatesResponse {
            self.push("post");
            response.next_page_token = "from-post".to_string();
            response
        }

        fn pre_get_dlp_job(
            &self,
            request: dlp::model::GetDlpJobRequest,
            metadata: Metadata,
        ) -> (dlp::model::GetDlpJobRequest, Metadata) {
            self.push("pre");
            (request, metadata)
        }

        fn post_get_dlp_job(&self, response: dlp::model::DlpJob) -> dlp::model::DlpJob {
            self.push("post");
            response
        }
    }

    async fn test_client(
        server: &Server,
        recorder: Recorder,
    ) -> gax::client_builder::Result<dlp::client::DlpService> {
        dlp::client::DlpService::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(access_token::Builder::new("test-token").build())
            .with_transport_kind(TransportKind::Rest)
            .with_interceptor(recorder)
            .build()
            .await
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn interceptor_order() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/projects/p/locations/global/inspectTemplates"),
                request::headers(contains((
                    "x-goog-request-params",
                    "parent=projects/p/locations/global"
                ))),
                request::headers(contains(("x-test", "value"))),
                request::headers(contains(("x-intercepted", "pre"))),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::headers(contains(key("x-goog-api-client"))),
                request::query(url_decoded(contains(("pageSize", "25")))),
            ])
            .respond_with(json_encoded(json!({
                "inspectTemplates": [{"name": "projects/p/locations/global/inspectTemplates/t"}],
                "nextPageToken": "",
            }))),
        );
        let recorder = Recorder::default();
        let events = recorder.events.clone();
        let seen = recorder.metadata.clone();
        let client = test_client(&server, recorder).await?;

        let mut options = gax::options::RequestOptions::default();
        options.add_metadata("x-test", "value");
        let response = client
            .list_inspect_templates()
            .set_parent("projects/p/locations/global")
            .set_page_size(10)
            .with_options(options)
            .send()
            .await?;
        assert_eq!(response.next_page_token, "from-post");
        assert_eq!(
            response
                .inspect_templates
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>(),
            ["projects/p/locations/global/inspectTemplates/t"]
        );
        assert_eq!(*events.lock().expect("events lock"), ["pre", "post"]);

        // The routing header comes first, followed by the application metadata.
        let seen = seen.lock().expect("metadata lock");
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            [
                (
                    "x-goog-request-params".to_string(),
                    "parent=projects/p/locations/global".to_string()
                ),
                ("x-test".to_string(), "value".to_string()),
            ]
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn errors_skip_post_hook() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v2/projects/p/dlpJobs/missing"))
                .respond_with(status_code(404).body(
                    json!({"error": {"code": 404, "status": "NOT_FOUND", "message": "missing"}})
                        .to_string(),
                )),
        );
        let recorder = Recorder::default();
        let events = recorder.events.clone();
        let client = test_client(&server, recorder).await?;

        let err = client
            .get_dlp_job()
            .set_name("projects/p/dlpJobs/missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(*events.lock().expect("events lock"), ["pre"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_sends_body() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/projects/p/inspectTemplates"),
                request::body(json_decoded(|v: &serde_json::Value| {
                    v["inspectTemplate"]["displayName"] == "test-template"
                        && v["templateId"] == "t-1"
                })),
            ])
            .respond_with(json_encoded(json!({
                "name": "projects/p/inspectTemplates/t-1",
                "displayName": "test-template",
            }))),
        );
        let client = test_client(&server, Recorder::default()).await?;
        let template = client
            .create_inspect_template()
            .set_parent("projects/p")
            .set_inspect_template(dlp::model::InspectTemplate {
                display_name: "test-template".to_string(),
                ..Default::default()
            })
            .set_template_id("t-1")
            .send()
            .await?;
        assert_eq!(template.name, "projects/p/inspectTemplates/t-1");
        assert_eq!(template.display_name, "test-template");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_returns_empty() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/v2/projects/p/jobTriggers/t",
            ))
            .respond_with(json_encoded(json!({}))),
        );
        let client = test_client(&server, Recorder::default()).await?;
        let response = client
            .delete_job_trigger()
            .set_name("projects/p/jobTriggers/t")
            .send()
            .await?;
        assert_eq!(response, dlp::model::Empty::default());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn binding_error() -> Result {
        let server = Server::run();
        let recorder = Recorder::default();
        let events = recorder.events.clone();
        let client = test_client(&server, recorder).await?;
        let err = client.get_dlp_job().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(*events.lock().expect("events lock"), ["pre"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn closed() -> Result {
        let server = Server::run();
        let client = test_client(&server, Recorder::default()).await?;
        let clone = client.clone();
        client.close();
        client.close();
        let err = clone
            .get_dlp_job()
            .set_name("projects/p/dlpJobs/j")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_closed(), "{err:?}");
        Ok(())
    }
}

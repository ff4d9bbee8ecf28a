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

//! Verify the request builders using a mocked stub.

#[cfg(test)]
mod mocking {
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use gax::response::Response;
    use google_cloud_privacy_dlp_v2 as dlp;
    use pretty_assertions::assert_eq;

    type Result = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        DlpService {}
        impl dlp::stub::DlpService for DlpService {
            async fn inspect_content(&self, req: dlp::model::InspectContentRequest, _options: RequestOptions) -> dlp::Result<Response<dlp::model::InspectContentResponse>>;
            async fn list_inspect_templates(&self, req: dlp::model::ListInspectTemplatesRequest, _options: RequestOptions) -> dlp::Result<Response<dlp::model::ListInspectTemplatesResponse>>;
            async fn delete_inspect_template(&self, req: dlp::model::DeleteInspectTemplateRequest, _options: RequestOptions) -> dlp::Result<Response<dlp::model::Empty>>;
            async fn create_dlp_job(&self, req: dlp::model::CreateDlpJobRequest, _options: RequestOptions) -> dlp::Result<Response<dlp::model::DlpJob>>;
            async fn get_dlp_job(&self, req: dlp::model::GetDlpJobRequest, _options: RequestOptions) -> dlp::Result<Response<dlp::model::DlpJob>>;
        }
    }

    fn routing(value: &str) -> (String, String) {
        (
            gax::routing::ROUTING_HEADER.to_string(),
            value.to_string(),
        )
    }

    fn templates(count: usize, start: usize) -> Vec<dlp::model::InspectTemplate> {
        (start..start + count)
            .map(|i| dlp::model::InspectTemplate {
                name: format!("projects/p/inspectTemplates/t-{i}"),
                ..Default::default()
            })
            .collect()
    }

    fn page(count: usize, start: usize, token: &str) -> dlp::model::ListInspectTemplatesResponse {
        dlp::model::ListInspectTemplatesResponse {
            inspect_templates: templates(count, start),
            next_page_token: token.to_string(),
        }
    }

    // Pages of 3, 0, 1, and 2 templates, linked by the tokens abc, def and ghi.
    fn paged_mock() -> MockDlpService {
        let mut mock = MockDlpService::new();
        let mut seq = mockall::Sequence::new();
        let pages = [(3, 0, "", "abc"), (0, 3, "abc", "def"), (1, 3, "def", "ghi"), (2, 4, "ghi", "")];
        for (count, start, want, next) in pages {
            mock.expect_list_inspect_templates()
                .once()
                .in_sequence(&mut seq)
                .withf(move |r, o| {
                    r.page_token == want
                        && r.parent.is_empty()
                        && o.metadata().first() == Some(&routing("parent="))
                })
                .return_once(move |_, _| Ok(Response::from(page(count, start, next))));
        }
        mock
    }

    #[tokio::test]
    async fn list_pages() -> Result {
        let client = dlp::client::DlpService::from_stub(paged_mock());
        let mut paginator = client.list_inspect_templates().by_page();
        assert_eq!(paginator.metadata(), &[routing("parent=")]);
        let mut tokens = Vec::new();
        let mut counts = Vec::new();
        while let Some(response) = paginator.next().await {
            let response = response?;
            tokens.push(response.next_page_token);
            counts.push(response.inspect_templates.len());
        }
        assert_eq!(tokens, ["abc", "def", "ghi", ""]);
        assert_eq!(counts, [3, 0, 1, 2]);
        Ok(())
    }

    #[tokio::test]
    async fn list_items() -> Result {
        let client = dlp::client::DlpService::from_stub(paged_mock());
        let mut items = client.list_inspect_templates().by_item();
        let mut names = Vec::new();
        while let Some(item) = items.next().await {
            names.push(item?.name);
        }
        let want = templates(6, 0)
            .into_iter()
            .map(|t| t.name)
            .collect::<Vec<_>>();
        assert_eq!(names, want);
        Ok(())
    }

    #[tokio::test]
    async fn list_with_application_metadata() -> Result {
        let mut mock = MockDlpService::new();
        mock.expect_list_inspect_templates()
            .once()
            .withf(|r, o| {
                r.parent == "projects/p/locations/global"
                    && r.page_size == 10
                    && o.metadata()
                        == [
                            routing("parent=projects/p/locations/global"),
                            ("x-test".to_string(), "value".to_string()),
                        ]
            })
            .return_once(|_, _| Ok(Response::from(page(2, 0, ""))));
        let client = dlp::client::DlpService::from_stub(mock);
        let mut options = RequestOptions::default();
        options.add_metadata("x-test", "value");
        let response = client
            .list_inspect_templates()
            .set_parent("projects/p/locations/global")
            .set_page_size(10)
            .with_options(options)
            .send()
            .await?;
        assert_eq!(response, page(2, 0, ""));
        Ok(())
    }

    #[tokio::test]
    async fn request_and_flattened_conflict() -> Result {
        let client = dlp::client::DlpService::from_stub(MockDlpService::new());
        let request = dlp::model::ListInspectTemplatesRequest {
            parent: "projects/p".to_string(),
            ..Default::default()
        };

        let err = client
            .list_inspect_templates()
            .set_parent("projects/p")
            .with_request(request.clone())
            .send()
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");

        let err = client
            .list_inspect_templates()
            .with_request(request)
            .set_parent("projects/p")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn request_and_flattened_conflict_by_page() -> Result {
        let client = dlp::client::DlpService::from_stub(MockDlpService::new());
        let mut paginator = client
            .list_inspect_templates()
            .with_request(dlp::model::ListInspectTemplatesRequest::default())
            .set_parent("projects/p")
            .by_page();
        let err = paginator.next().await.transpose().unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn full_request() -> Result {
        let mut mock = MockDlpService::new();
        mock.expect_delete_inspect_template()
            .once()
            .withf(|r, o| {
                r.name == "projects/p/inspectTemplates/t"
                    && o.metadata().first() == Some(&routing("name=projects/p/inspectTemplates/t"))
            })
            .return_once(|_, _| Ok(Response::from(dlp::model::Empty::default())));
        let client = dlp::client::DlpService::from_stub(mock);
        let response = client
            .delete_inspect_template()
            .with_request(dlp::model::DeleteInspectTemplateRequest {
                name: "projects/p/inspectTemplates/t".to_string(),
            })
            .send()
            .await?;
        assert_eq!(response, dlp::model::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn empty_call() -> Result {
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .once()
            .withf(|r, o| {
                r == &dlp::model::InspectContentRequest::default()
                    && o.metadata() == [routing("parent=")]
            })
            .return_once(|_, _| Ok(Response::from(dlp::model::InspectContentResponse::default())));
        let client = dlp::client::DlpService::from_stub(mock);
        let response = client.inspect_content().send().await?;
        assert_eq!(response, dlp::model::InspectContentResponse::default());
        Ok(())
    }

    #[tokio::test]
    async fn flattened_oneof() -> Result {
        let mut mock = MockDlpService::new();
        mock.expect_create_dlp_job()
            .once()
            .withf(|r, _| {
                r.parent == "projects/p"
                    && matches!(
                        r.job,
                        Some(dlp::model::create_dlp_job_request::Job::RiskJob(_))
                    )
            })
            .return_once(|_, _| {
                Ok(Response::from(dlp::model::DlpJob {
                    name: "projects/p/dlpJobs/r-123".to_string(),
                    ..Default::default()
                }))
            });
        let client = dlp::client::DlpService::from_stub(mock);
        let job = client
            .create_dlp_job()
            .set_parent("projects/p")
            .set_inspect_job(dlp::model::InspectJobConfig::default())
            .set_risk_job(dlp::model::RiskAnalysisJobConfig::default())
            .send()
            .await?;
        assert_eq!(job.name, "projects/p/dlpJobs/r-123");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result {
        let mut mock = MockDlpService::new();
        mock.expect_get_dlp_job().once().return_once(|_, _| {
            let status = Status::default()
                .set_code(Code::NotFound)
                .set_message("job not found");
            Err(dlp::Error::service(status))
        });
        let client = dlp::client::DlpService::from_stub(mock);
        let err = client
            .get_dlp_job()
            .set_name("projects/p/dlpJobs/missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn builder_with_stub() -> Result {
        use dlp::builder::dlp_service::ClientBuilderExt;
        let mut mock = MockDlpService::new();
        mock.expect_get_dlp_job()
            .once()
            .withf(|r, _| r.name == "projects/p/dlpJobs/j")
            .return_once(|r, _| {
                Ok(Response::from(dlp::model::DlpJob {
                    name: r.name,
                    ..Default::default()
                }))
            });
        let client = dlp::client::DlpService::builder()
            .with_stub(mock)
            .build()
            .await?;
        let job = client.get_dlp_job().set_name("projects/p/dlpJobs/j").send().await?;
        assert_eq!(job.name, "projects/p/dlpJobs/j");
        Ok(())
    }
}

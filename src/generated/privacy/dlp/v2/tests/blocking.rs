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

//! Verify the blocking client using a mocked stub.

#[cfg(test)]
mod blocking {
    use gax::options::RequestOptions;
    use gax::response::Response;
    use google_cloud_privacy_dlp_v2 as dlp;
    use dlp::builder::dlp_service::ClientBuilderExt;
    use std::sync::Arc;

    mockall::mock! {
        #[derive(Debug)]
        DlpService {}
        impl dlp::stub::DlpService for DlpService {
            async fn list_dlp_jobs(&self, req: dlp::model::ListDlpJobsRequest, _options: RequestOptions) -> dlp::Result<Response<dlp::model::ListDlpJobsResponse>>;
            async fn cancel_dlp_job(&self, req: dlp::model::CancelDlpJobRequest, _options: RequestOptions) -> dlp::Result<Response<dlp::model::Empty>>;
        }
    }

    fn job(name: &str) -> dlp::model::DlpJob {
        dlp::model::DlpJob {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn items() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_dlp_jobs()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.parent == "projects/p" && r.page_token.is_empty())
            .return_once(|_, _| {
                Ok(Response::from(dlp::model::ListDlpJobsResponse {
                    jobs: vec![job("projects/p/dlpJobs/a"), job("projects/p/dlpJobs/b")],
                    next_page_token: "next".to_string(),
                }))
            });
        mock.expect_list_dlp_jobs()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.parent == "projects/p" && r.page_token == "next")
            .return_once(|_, _| {
                Ok(Response::from(dlp::model::ListDlpJobsResponse {
                    jobs: vec![job("projects/p/dlpJobs/c")],
                    next_page_token: String::new(),
                }))
            });

        let client = dlp::blocking::DlpService::new(dlp::blocking::DlpService::builder().with_stub(mock))?;
        let names = client
            .list_dlp_jobs()
            .set_parent("projects/p")
            .items()
            .map(|j| j.map(|j| j.name))
            .collect::<dlp::Result<Vec<_>>>()?;
        assert_eq!(
            names,
            ["projects/p/dlpJobs/a", "projects/p/dlpJobs/b", "projects/p/dlpJobs/c"]
        );
        Ok(())
    }

    #[test]
    fn send() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_cancel_dlp_job()
            .once()
            .withf(|r, o| {
                r.name == "projects/p/dlpJobs/j"
                    && o.metadata().first().map(|(k, v)| (k.as_str(), v.as_str()))
                        == Some(("x-goog-request-params", "name=projects/p/dlpJobs/j"))
            })
            .return_once(|_, _| Ok(Response::from(dlp::model::Empty::default())));

        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        let client = dlp::blocking::DlpService::from_client(
            dlp::client::DlpService::from_stub(mock),
            Arc::new(runtime),
        );
        let response = client
            .cancel_dlp_job()
            .with_request(dlp::model::CancelDlpJobRequest {
                name: "projects/p/dlpJobs/j".to_string(),
            })
            .send()?;
        assert_eq!(response, dlp::model::Empty::default());
        Ok(())
    }
}

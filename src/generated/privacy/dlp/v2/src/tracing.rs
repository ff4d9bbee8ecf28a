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

/// Implements a [DlpService](super::stub::DlpService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct DlpService<T>
where
    T: super::stub::DlpService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> DlpService<T>
where
    T: super::stub::DlpService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::DlpService for DlpService<T>
where
    T: super::stub::DlpService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn inspect_content(
        &self,
        req: crate::model::InspectContentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::InspectContentResponse>> {
        self.inner.inspect_content(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn deidentify_content(
        &self,
        req: crate::model::DeidentifyContentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeidentifyContentResponse>> {
        self.inner.deidentify_content(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn reidentify_content(
        &self,
        req: crate::model::ReidentifyContentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ReidentifyContentResponse>> {
        self.inner.reidentify_content(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_info_types(
        &self,
        req: crate::model::ListInfoTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListInfoTypesResponse>> {
        self.inner.list_info_types(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_inspect_template(
        &self,
        req: crate::model::CreateInspectTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::InspectTemplate>> {
        self.inner.create_inspect_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_inspect_template(
        &self,
        req: crate::model::UpdateInspectTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::InspectTemplate>> {
        self.inner.update_inspect_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_inspect_template(
        &self,
        req: crate::model::GetInspectTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::InspectTemplate>> {
        self.inner.get_inspect_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_inspect_templates(
        &self,
        req: crate::model::ListInspectTemplatesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListInspectTemplatesResponse>> {
        self.inner.list_inspect_templates(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_inspect_template(
        &self,
        req: crate::model::DeleteInspectTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Empty>> {
        self.inner.delete_inspect_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_deidentify_template(
        &self,
        req: crate::model::CreateDeidentifyTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeidentifyTemplate>> {
        self.inner.create_deidentify_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_deidentify_template(
        &self,
        req: crate::model::UpdateDeidentifyTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeidentifyTemplate>> {
        self.inner.update_deidentify_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_deidentify_template(
        &self,
        req: crate::model::GetDeidentifyTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeidentifyTemplate>> {
        self.inner.get_deidentify_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_deidentify_templates(
        &self,
        req: crate::model::ListDeidentifyTemplatesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListDeidentifyTemplatesResponse>> {
        self.inner.list_deidentify_templates(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_deidentify_template(
        &self,
        req: crate::model::DeleteDeidentifyTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Empty>> {
        self.inner.delete_deidentify_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_job_trigger(
        &self,
        req: crate::model::CreateJobTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobTrigger>> {
        self.inner.create_job_trigger(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_job_trigger(
        &self,
        req: crate::model::UpdateJobTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobTrigger>> {
        self.inner.update_job_trigger(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_job_trigger(
        &self,
        req: crate::model::GetJobTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobTrigger>> {
        self.inner.get_job_trigger(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_job_triggers(
        &self,
        req: crate::model::ListJobTriggersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListJobTriggersResponse>> {
        self.inner.list_job_triggers(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_job_trigger(
        &self,
        req: crate::model::DeleteJobTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Empty>> {
        self.inner.delete_job_trigger(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn activate_job_trigger(
        &self,
        req: crate::model::ActivateJobTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DlpJob>> {
        self.inner.activate_job_trigger(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_dlp_job(
        &self,
        req: crate::model::CreateDlpJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DlpJob>> {
        self.inner.create_dlp_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_dlp_jobs(
        &self,
        req: crate::model::ListDlpJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListDlpJobsResponse>> {
        self.inner.list_dlp_jobs(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_dlp_job(
        &self,
        req: crate::model::GetDlpJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DlpJob>> {
        self.inner.get_dlp_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_dlp_job(
        &self,
        req: crate::model::DeleteDlpJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Empty>> {
        self.inner.delete_dlp_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn cancel_dlp_job(
        &self,
        req: crate::model::CancelDlpJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Empty>> {
        self.inner.cancel_dlp_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_discovery_config(
        &self,
        req: crate::model::CreateDiscoveryConfigRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DiscoveryConfig>> {
        self.inner.create_discovery_config(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_discovery_config(
        &self,
        req: crate::model::UpdateDiscoveryConfigRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DiscoveryConfig>> {
        self.inner.update_discovery_config(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_discovery_config(
        &self,
        req: crate::model::GetDiscoveryConfigRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DiscoveryConfig>> {
        self.inner.get_discovery_config(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_discovery_configs(
        &self,
        req: crate::model::ListDiscoveryConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListDiscoveryConfigsResponse>> {
        self.inner.list_discovery_configs(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_discovery_config(
        &self,
        req: crate::model::DeleteDiscoveryConfigRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Empty>> {
        self.inner.delete_discovery_config(req, options).await
    }

    fn close(&self) {
        tracing::debug!("closing client");
        self.inner.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct FakeJobs;
    impl super::super::stub::DlpService for FakeJobs {
        async fn get_dlp_job(
            &self,
            req: crate::model::GetDlpJobRequest,
            _options: gax::options::RequestOptions,
        ) -> crate::Result<gax::response::Response<crate::model::DlpJob>> {
            Ok(gax::response::Response::from(crate::model::DlpJob {
                name: req.name,
                ..Default::default()
            }))
        }
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("capture lock").extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn logs_calls() -> anyhow::Result<()> {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let stub = DlpService::new(FakeJobs);
        let request = crate::model::GetDlpJobRequest {
            name: "projects/p/dlpJobs/j".to_string(),
        };
        let response = super::super::stub::DlpService::get_dlp_job(
            &stub,
            request,
            gax::options::RequestOptions::default(),
        )
        .await?;
        assert_eq!(response.body().name, "projects/p/dlpJobs/j");

        let logs = String::from_utf8(capture.0.lock().expect("capture lock").clone())?;
        assert!(logs.contains("get_dlp_job"), "{logs}");
        assert!(logs.contains("projects/p/dlpJobs/j"), "{logs}");
        Ok(())
    }
}

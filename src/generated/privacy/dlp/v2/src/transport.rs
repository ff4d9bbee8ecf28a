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

//! The HTTP/JSON and gRPC implementations of [super::stub::DlpService].

use crate::interceptor::DlpServiceInterceptor;
use crate::Result;
use gax::options::RequestOptions;
use gax::options::internal::set_method_config;
use gax::response::Response;
use gaxi::path_parameter::{PathTemplate, bind};
use http::Method;
use std::sync::Arc;

const INSPECT_CONTENT_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*}/content:inspect"),
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*/locations/*}/content:inspect"),
];

const DEIDENTIFY_CONTENT_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*}/content:deidentify"),
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*/locations/*}/content:deidentify"),
];

const REIDENTIFY_CONTENT_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*}/content:reidentify"),
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*/locations/*}/content:reidentify"),
];

const LIST_INFO_TYPES_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{parent=locations/*}/infoTypes"),
    PathTemplate::new(Method::GET, "/v2/infoTypes"),
];

const CREATE_INSPECT_TEMPLATE_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::POST, "/v2/{parent=organizations/*}/inspectTemplates"),
    PathTemplate::new(Method::POST, "/v2/{parent=organizations/*/locations/*}/inspectTemplates"),
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*}/inspectTemplates"),
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*/locations/*}/inspectTemplates"),
];

const UPDATE_INSPECT_TEMPLATE_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::PATCH, "/v2/{name=organizations/*/inspectTemplates/*}"),
    PathTemplate::new(Method::PATCH, "/v2/{name=organizations/*/locations/*/inspectTemplates/*}"),
    PathTemplate::new(Method::PATCH, "/v2/{name=projects/*/inspectTemplates/*}"),
    PathTemplate::new(Method::PATCH, "/v2/{name=projects/*/locations/*/inspectTemplates/*}"),
];

const GET_INSPECT_TEMPLATE_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{name=organizations/*/inspectTemplates/*}"),
    PathTemplate::new(Method::GET, "/v2/{name=organizations/*/locations/*/inspectTemplates/*}"),
    PathTemplate::new(Method::GET, "/v2/{name=projects/*/inspectTemplates/*}"),
    PathTemplate::new(Method::GET, "/v2/{name=projects/*/locations/*/inspectTemplates/*}"),
];

const LIST_INSPECT_TEMPLATES_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{parent=organizations/*}/inspectTemplates"),
    PathTemplate::new(Method::GET, "/v2/{parent=organizations/*/locations/*}/inspectTemplates"),
    PathTemplate::new(Method::GET, "/v2/{parent=projects/*}/inspectTemplates"),
    PathTemplate::new(Method::GET, "/v2/{parent=projects/*/locations/*}/inspectTemplates"),
];

const DELETE_INSPECT_TEMPLATE_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::DELETE, "/v2/{name=organizations/*/inspectTemplates/*}"),
    PathTemplate::new(Method::DELETE, "/v2/{name=organizations/*/locations/*/inspectTemplates/*}"),
    PathTemplate::new(Method::DELETE, "/v2/{name=projects/*/inspectTemplates/*}"),
    PathTemplate::new(Method::DELETE, "/v2/{name=projects/*/locations/*/inspectTemplates/*}"),
];

const CREATE_DEIDENTIFY_TEMPLATE_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::POST, "/v2/{parent=organizations/*}/deidentifyTemplates"),
    PathTemplate::new(Method::POST, "/v2/{parent=organizations/*/locations/*}/deidentifyTemplates"),
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*}/deidentifyTemplates"),
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*/locations/*}/deidentifyTemplates"),
];

const UPDATE_DEIDENTIFY_TEMPLATE_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::PATCH, "/v2/{name=organizations/*/deidentifyTemplates/*}"),
    PathTemplate::new(Method::PATCH, "/v2/{name=organizations/*/locations/*/deidentifyTemplates/*}"),
    PathTemplate::new(Method::PATCH, "/v2/{name=projects/*/deidentifyTemplates/*}"),
    PathTemplate::new(Method::PATCH, "/v2/{name=projects/*/locations/*/deidentifyTemplates/*}"),
];

const GET_DEIDENTIFY_TEMPLATE_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{name=organizations/*/deidentifyTemplates/*}"),
    PathTemplate::new(Method::GET, "/v2/{name=organizations/*/locations/*/deidentifyTemplates/*}"),
    PathTemplate::new(Method::GET, "/v2/{name=projects/*/deidentifyTemplates/*}"),
    PathTemplate::new(Method::GET, "/v2/{name=projects/*/locations/*/deidentifyTemplates/*}"),
];

const LIST_DEIDENTIFY_TEMPLATES_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{parent=organizations/*}/deidentifyTemplates"),
    PathTemplate::new(Method::GET, "/v2/{parent=organizations/*/locations/*}/deidentifyTemplates"),
    PathTemplate::new(Method::GET, "/v2/{parent=projects/*}/deidentifyTemplates"),
    PathTemplate::new(Method::GET, "/v2/{parent=projects/*/locations/*}/deidentifyTemplates"),
];

const DELETE_DEIDENTIFY_TEMPLATE_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::DELETE, "/v2/{name=organizations/*/deidentifyTemplates/*}"),
    PathTemplate::new(Method::DELETE, "/v2/{name=organizations/*/locations/*/deidentifyTemplates/*}"),
    PathTemplate::new(Method::DELETE, "/v2/{name=projects/*/deidentifyTemplates/*}"),
    PathTemplate::new(Method::DELETE, "/v2/{name=projects/*/locations/*/deidentifyTemplates/*}"),
];

const CREATE_JOB_TRIGGER_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*}/jobTriggers"),
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*/locations/*}/jobTriggers"),
    PathTemplate::new(Method::POST, "/v2/{parent=organizations/*/locations/*}/jobTriggers"),
];

const UPDATE_JOB_TRIGGER_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::PATCH, "/v2/{name=projects/*/jobTriggers/*}"),
    PathTemplate::new(Method::PATCH, "/v2/{name=projects/*/locations/*/jobTriggers/*}"),
    PathTemplate::new(Method::PATCH, "/v2/{name=organizations/*/locations/*/jobTriggers/*}"),
];

const GET_JOB_TRIGGER_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{name=projects/*/jobTriggers/*}"),
    PathTemplate::new(Method::GET, "/v2/{name=projects/*/locations/*/jobTriggers/*}"),
    PathTemplate::new(Method::GET, "/v2/{name=organizations/*/locations/*/jobTriggers/*}"),
];

const LIST_JOB_TRIGGERS_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{parent=projects/*}/jobTriggers"),
    PathTemplate::new(Method::GET, "/v2/{parent=projects/*/locations/*}/jobTriggers"),
    PathTemplate::new(Method::GET, "/v2/{parent=organizations/*/locations/*}/jobTriggers"),
];

const DELETE_JOB_TRIGGER_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::DELETE, "/v2/{name=projects/*/jobTriggers/*}"),
    PathTemplate::new(Method::DELETE, "/v2/{name=projects/*/locations/*/jobTriggers/*}"),
    PathTemplate::new(Method::DELETE, "/v2/{name=organizations/*/locations/*/jobTriggers/*}"),
];

const ACTIVATE_JOB_TRIGGER_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::POST, "/v2/{name=projects/*/jobTriggers/*}:activate"),
    PathTemplate::new(Method::POST, "/v2/{name=projects/*/locations/*/jobTriggers/*}:activate"),
];

const CREATE_DLP_JOB_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*}/dlpJobs"),
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*/locations/*}/dlpJobs"),
];

const LIST_DLP_JOBS_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{parent=projects/*}/dlpJobs"),
    PathTemplate::new(Method::GET, "/v2/{parent=projects/*/locations/*}/dlpJobs"),
    PathTemplate::new(Method::GET, "/v2/{parent=organizations/*/locations/*}/dlpJobs"),
];

const GET_DLP_JOB_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{name=projects/*/dlpJobs/*}"),
    PathTemplate::new(Method::GET, "/v2/{name=projects/*/locations/*/dlpJobs/*}"),
];

const DELETE_DLP_JOB_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::DELETE, "/v2/{name=projects/*/dlpJobs/*}"),
    PathTemplate::new(Method::DELETE, "/v2/{name=projects/*/locations/*/dlpJobs/*}"),
];

const CANCEL_DLP_JOB_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::POST, "/v2/{name=projects/*/dlpJobs/*}:cancel"),
    PathTemplate::new(Method::POST, "/v2/{name=projects/*/locations/*/dlpJobs/*}:cancel"),
];

const CREATE_DISCOVERY_CONFIG_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::POST, "/v2/{parent=projects/*/locations/*}/discoveryConfigs"),
    PathTemplate::new(Method::POST, "/v2/{parent=organizations/*/locations/*}/discoveryConfigs"),
];

const UPDATE_DISCOVERY_CONFIG_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::PATCH, "/v2/{name=projects/*/locations/*/discoveryConfigs/*}"),
    PathTemplate::new(Method::PATCH, "/v2/{name=organizations/*/locations/*/discoveryConfigs/*}"),
];

const GET_DISCOVERY_CONFIG_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{name=projects/*/locations/*/discoveryConfigs/*}"),
    PathTemplate::new(Method::GET, "/v2/{name=organizations/*/locations/*/discoveryConfigs/*}"),
];

const LIST_DISCOVERY_CONFIGS_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::GET, "/v2/{parent=projects/*/locations/*}/discoveryConfigs"),
    PathTemplate::new(Method::GET, "/v2/{parent=organizations/*/locations/*}/discoveryConfigs"),
];

const DELETE_DISCOVERY_CONFIG_PATHS: &[PathTemplate] = &[
    PathTemplate::new(Method::DELETE, "/v2/{name=projects/*/locations/*/discoveryConfigs/*}"),
    PathTemplate::new(Method::DELETE, "/v2/{name=organizations/*/locations/*/discoveryConfigs/*}"),
];

/// Implements [DlpService](super::stub::DlpService) using HTTP/JSON.
#[derive(Clone, Debug)]
pub struct DlpService {
    inner: gaxi::http::ReqwestClient,
    interceptor: Arc<dyn DlpServiceInterceptor>,
}

impl DlpService {
    pub async fn new(
        config: gaxi::options::ClientConfig,
        interceptor: Option<Arc<dyn DlpServiceInterceptor>>,
    ) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        let interceptor =
            interceptor.unwrap_or_else(|| Arc::new(crate::interceptor::NoopInterceptor));
        Ok(Self { inner, interceptor })
    }

    fn builder(&self, method: Method, path: String) -> Result<reqwest::RequestBuilder> {
        let builder = self.inner.builder(method, path)?;
        Ok(builder.header(
            gaxi::api_header::HEADER_NAME,
            crate::info::X_GOOG_API_CLIENT_HEADER.as_str(),
        ))
    }
}

impl super::stub::DlpService for DlpService {
    async fn inspect_content(
        &self,
        req: crate::model::InspectContentRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::InspectContentResponse>> {
        let options = set_method_config(options, crate::method_config::INSPECT_CONTENT);
        let (req, metadata) = self
            .interceptor
            .pre_inspect_content(req, options.metadata().to_vec());
        let (method, path) = bind(INSPECT_CONTENT_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::InspectContentResponse> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_inspect_content(body)))
    }

    async fn deidentify_content(
        &self,
        req: crate::model::DeidentifyContentRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeidentifyContentResponse>> {
        let options = set_method_config(options, crate::method_config::DEIDENTIFY_CONTENT);
        let (req, metadata) = self
            .interceptor
            .pre_deidentify_content(req, options.metadata().to_vec());
        let (method, path) = bind(DEIDENTIFY_CONTENT_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::DeidentifyContentResponse> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_deidentify_content(body)))
    }

    async fn reidentify_content(
        &self,
        req: crate::model::ReidentifyContentRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ReidentifyContentResponse>> {
        let options = set_method_config(options, crate::method_config::REIDENTIFY_CONTENT);
        let (req, metadata) = self
            .interceptor
            .pre_reidentify_content(req, options.metadata().to_vec());
        let (method, path) = bind(REIDENTIFY_CONTENT_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::ReidentifyContentResponse> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_reidentify_content(body)))
    }

    async fn list_info_types(
        &self,
        req: crate::model::ListInfoTypesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListInfoTypesResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_INFO_TYPES);
        let (req, metadata) = self
            .interceptor
            .pre_list_info_types(req, options.metadata().to_vec());
        let (method, path) = bind(LIST_INFO_TYPES_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["parent"])?;
        let response: Response<crate::model::ListInfoTypesResponse> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_list_info_types(body)))
    }

    async fn create_inspect_template(
        &self,
        req: crate::model::CreateInspectTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::InspectTemplate>> {
        let options = set_method_config(options, crate::method_config::CREATE_INSPECT_TEMPLATE);
        let (req, metadata) = self
            .interceptor
            .pre_create_inspect_template(req, options.metadata().to_vec());
        let (method, path) = bind(CREATE_INSPECT_TEMPLATE_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::InspectTemplate> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_create_inspect_template(body)))
    }

    async fn update_inspect_template(
        &self,
        req: crate::model::UpdateInspectTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::InspectTemplate>> {
        let options = set_method_config(options, crate::method_config::UPDATE_INSPECT_TEMPLATE);
        let (req, metadata) = self
            .interceptor
            .pre_update_inspect_template(req, options.metadata().to_vec());
        let (method, path) = bind(UPDATE_INSPECT_TEMPLATE_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::InspectTemplate> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_update_inspect_template(body)))
    }

    async fn get_inspect_template(
        &self,
        req: crate::model::GetInspectTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::InspectTemplate>> {
        let options = set_method_config(options, crate::method_config::GET_INSPECT_TEMPLATE);
        let (req, metadata) = self
            .interceptor
            .pre_get_inspect_template(req, options.metadata().to_vec());
        let (method, path) = bind(GET_INSPECT_TEMPLATE_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["name"])?;
        let response: Response<crate::model::InspectTemplate> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_get_inspect_template(body)))
    }

    async fn list_inspect_templates(
        &self,
        req: crate::model::ListInspectTemplatesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListInspectTemplatesResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_INSPECT_TEMPLATES);
        let (req, metadata) = self
            .interceptor
            .pre_list_inspect_templates(req, options.metadata().to_vec());
        let (method, path) = bind(LIST_INSPECT_TEMPLATES_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["parent"])?;
        let response: Response<crate::model::ListInspectTemplatesResponse> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_list_inspect_templates(body)))
    }

    async fn delete_inspect_template(
        &self,
        req: crate::model::DeleteInspectTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::DELETE_INSPECT_TEMPLATE);
        let (req, metadata) = self
            .interceptor
            .pre_delete_inspect_template(req, options.metadata().to_vec());
        let (method, path) = bind(DELETE_INSPECT_TEMPLATE_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["name"])?;
        let response: Response<crate::model::Empty> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_delete_inspect_template(body)))
    }

    async fn create_deidentify_template(
        &self,
        req: crate::model::CreateDeidentifyTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeidentifyTemplate>> {
        let options = set_method_config(options, crate::method_config::CREATE_DEIDENTIFY_TEMPLATE);
        let (req, metadata) = self
            .interceptor
            .pre_create_deidentify_template(req, options.metadata().to_vec());
        let (method, path) = bind(CREATE_DEIDENTIFY_TEMPLATE_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::DeidentifyTemplate> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_create_deidentify_template(body)))
    }

    async fn update_deidentify_template(
        &self,
        req: crate::model::UpdateDeidentifyTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeidentifyTemplate>> {
        let options = set_method_config(options, crate::method_config::UPDATE_DEIDENTIFY_TEMPLATE);
        let (req, metadata) = self
            .interceptor
            .pre_update_deidentify_template(req, options.metadata().to_vec());
        let (method, path) = bind(UPDATE_DEIDENTIFY_TEMPLATE_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::DeidentifyTemplate> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_update_deidentify_template(body)))
    }

    async fn get_deidentify_template(
        &self,
        req: crate::model::GetDeidentifyTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeidentifyTemplate>> {
        let options = set_method_config(options, crate::method_config::GET_DEIDENTIFY_TEMPLATE);
        let (req, metadata) = self
            .interceptor
            .pre_get_deidentify_template(req, options.metadata().to_vec());
        let (method, path) = bind(GET_DEIDENTIFY_TEMPLATE_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["name"])?;
        let response: Response<crate::model::DeidentifyTemplate> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_get_deidentify_template(body)))
    }

    async fn list_deidentify_templates(
        &self,
        req: crate::model::ListDeidentifyTemplatesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListDeidentifyTemplatesResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_DEIDENTIFY_TEMPLATES);
        let (req, metadata) = self
            .interceptor
            .pre_list_deidentify_templates(req, options.metadata().to_vec());
        let (method, path) = bind(LIST_DEIDENTIFY_TEMPLATES_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["parent"])?;
        let response: Response<crate::model::ListDeidentifyTemplatesResponse> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_list_deidentify_templates(body)))
    }

    async fn delete_deidentify_template(
        &self,
        req: crate::model::DeleteDeidentifyTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::DELETE_DEIDENTIFY_TEMPLATE);
        let (req, metadata) = self
            .interceptor
            .pre_delete_deidentify_template(req, options.metadata().to_vec());
        let (method, path) = bind(DELETE_DEIDENTIFY_TEMPLATE_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["name"])?;
        let response: Response<crate::model::Empty> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_delete_deidentify_template(body)))
    }

    async fn create_job_trigger(
        &self,
        req: crate::model::CreateJobTriggerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::JobTrigger>> {
        let options = set_method_config(options, crate::method_config::CREATE_JOB_TRIGGER);
        let (req, metadata) = self
            .interceptor
            .pre_create_job_trigger(req, options.metadata().to_vec());
        let (method, path) = bind(CREATE_JOB_TRIGGER_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::JobTrigger> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_create_job_trigger(body)))
    }

    async fn update_job_trigger(
        &self,
        req: crate::model::UpdateJobTriggerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::JobTrigger>> {
        let options = set_method_config(options, crate::method_config::UPDATE_JOB_TRIGGER);
        let (req, metadata) = self
            .interceptor
            .pre_update_job_trigger(req, options.metadata().to_vec());
        let (method, path) = bind(UPDATE_JOB_TRIGGER_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::JobTrigger> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_update_job_trigger(body)))
    }

    async fn get_job_trigger(
        &self,
        req: crate::model::GetJobTriggerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::JobTrigger>> {
        let options = set_method_config(options, crate::method_config::GET_JOB_TRIGGER);
        let (req, metadata) = self
            .interceptor
            .pre_get_job_trigger(req, options.metadata().to_vec());
        let (method, path) = bind(GET_JOB_TRIGGER_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["name"])?;
        let response: Response<crate::model::JobTrigger> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_get_job_trigger(body)))
    }

    async fn list_job_triggers(
        &self,
        req: crate::model::ListJobTriggersRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListJobTriggersResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_JOB_TRIGGERS);
        let (req, metadata) = self
            .interceptor
            .pre_list_job_triggers(req, options.metadata().to_vec());
        let (method, path) = bind(LIST_JOB_TRIGGERS_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["parent"])?;
        let response: Response<crate::model::ListJobTriggersResponse> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_list_job_triggers(body)))
    }

    async fn delete_job_trigger(
        &self,
        req: crate::model::DeleteJobTriggerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::DELETE_JOB_TRIGGER);
        let (req, metadata) = self
            .interceptor
            .pre_delete_job_trigger(req, options.metadata().to_vec());
        let (method, path) = bind(DELETE_JOB_TRIGGER_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["name"])?;
        let response: Response<crate::model::Empty> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_delete_job_trigger(body)))
    }

    async fn activate_job_trigger(
        &self,
        req: crate::model::ActivateJobTriggerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DlpJob>> {
        let options = set_method_config(options, crate::method_config::ACTIVATE_JOB_TRIGGER);
        let (req, metadata) = self
            .interceptor
            .pre_activate_job_trigger(req, options.metadata().to_vec());
        let (method, path) = bind(ACTIVATE_JOB_TRIGGER_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::DlpJob> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_activate_job_trigger(body)))
    }

    async fn create_dlp_job(
        &self,
        req: crate::model::CreateDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DlpJob>> {
        let options = set_method_config(options, crate::method_config::CREATE_DLP_JOB);
        let (req, metadata) = self
            .interceptor
            .pre_create_dlp_job(req, options.metadata().to_vec());
        let (method, path) = bind(CREATE_DLP_JOB_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::DlpJob> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_create_dlp_job(body)))
    }

    async fn list_dlp_jobs(
        &self,
        req: crate::model::ListDlpJobsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListDlpJobsResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_DLP_JOBS);
        let (req, metadata) = self
            .interceptor
            .pre_list_dlp_jobs(req, options.metadata().to_vec());
        let (method, path) = bind(LIST_DLP_JOBS_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["parent"])?;
        let response: Response<crate::model::ListDlpJobsResponse> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_list_dlp_jobs(body)))
    }

    async fn get_dlp_job(
        &self,
        req: crate::model::GetDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DlpJob>> {
        let options = set_method_config(options, crate::method_config::GET_DLP_JOB);
        let (req, metadata) = self
            .interceptor
            .pre_get_dlp_job(req, options.metadata().to_vec());
        let (method, path) = bind(GET_DLP_JOB_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["name"])?;
        let response: Response<crate::model::DlpJob> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_get_dlp_job(body)))
    }

    async fn delete_dlp_job(
        &self,
        req: crate::model::DeleteDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::DELETE_DLP_JOB);
        let (req, metadata) = self
            .interceptor
            .pre_delete_dlp_job(req, options.metadata().to_vec());
        let (method, path) = bind(DELETE_DLP_JOB_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["name"])?;
        let response: Response<crate::model::Empty> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_delete_dlp_job(body)))
    }

    async fn cancel_dlp_job(
        &self,
        req: crate::model::CancelDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::CANCEL_DLP_JOB);
        let (req, metadata) = self
            .interceptor
            .pre_cancel_dlp_job(req, options.metadata().to_vec());
        let (method, path) = bind(CANCEL_DLP_JOB_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::Empty> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_cancel_dlp_job(body)))
    }

    async fn create_discovery_config(
        &self,
        req: crate::model::CreateDiscoveryConfigRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DiscoveryConfig>> {
        let options = set_method_config(options, crate::method_config::CREATE_DISCOVERY_CONFIG);
        let (req, metadata) = self
            .interceptor
            .pre_create_discovery_config(req, options.metadata().to_vec());
        let (method, path) = bind(CREATE_DISCOVERY_CONFIG_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::DiscoveryConfig> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_create_discovery_config(body)))
    }

    async fn update_discovery_config(
        &self,
        req: crate::model::UpdateDiscoveryConfigRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DiscoveryConfig>> {
        let options = set_method_config(options, crate::method_config::UPDATE_DISCOVERY_CONFIG);
        let (req, metadata) = self
            .interceptor
            .pre_update_discovery_config(req, options.metadata().to_vec());
        let (method, path) = bind(UPDATE_DISCOVERY_CONFIG_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let response: Response<crate::model::DiscoveryConfig> = self
            .inner
            .execute(builder, Some(req), options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_update_discovery_config(body)))
    }

    async fn get_discovery_config(
        &self,
        req: crate::model::GetDiscoveryConfigRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DiscoveryConfig>> {
        let options = set_method_config(options, crate::method_config::GET_DISCOVERY_CONFIG);
        let (req, metadata) = self
            .interceptor
            .pre_get_discovery_config(req, options.metadata().to_vec());
        let (method, path) = bind(GET_DISCOVERY_CONFIG_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["name"])?;
        let response: Response<crate::model::DiscoveryConfig> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_get_discovery_config(body)))
    }

    async fn list_discovery_configs(
        &self,
        req: crate::model::ListDiscoveryConfigsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListDiscoveryConfigsResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_DISCOVERY_CONFIGS);
        let (req, metadata) = self
            .interceptor
            .pre_list_discovery_configs(req, options.metadata().to_vec());
        let (method, path) = bind(LIST_DISCOVERY_CONFIGS_PATHS, &req.parent)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["parent"])?;
        let response: Response<crate::model::ListDiscoveryConfigsResponse> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_list_discovery_configs(body)))
    }

    async fn delete_discovery_config(
        &self,
        req: crate::model::DeleteDiscoveryConfigRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::DELETE_DISCOVERY_CONFIG);
        let (req, metadata) = self
            .interceptor
            .pre_delete_discovery_config(req, options.metadata().to_vec());
        let (method, path) = bind(DELETE_DISCOVERY_CONFIG_PATHS, &req.name)?;
        let builder = self.builder(method, path)?;
        let builder = gaxi::query_parameter::add_request(builder, &req, &["name"])?;
        let response: Response<crate::model::Empty> = self
            .inner
            .execute(builder, None::<gaxi::http::NoBody>, options, &metadata)
            .await?;
        Ok(response.map(|body| self.interceptor.post_delete_discovery_config(body)))
    }

    fn close(&self) {
        self.inner.close()
    }
}

/// Implements [DlpService](super::stub::DlpService) using gRPC.
#[derive(Clone, Debug)]
pub struct DlpServiceGrpc {
    inner: gaxi::grpc::Client,
}

const SERVICE: &str = "google.privacy.dlp.v2.DlpService";

impl DlpServiceGrpc {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }

    async fn execute<Req, Resp>(
        &self,
        rpc: &'static str,
        path: &'static str,
        req: Req,
        options: RequestOptions,
    ) -> Result<Response<Resp>>
    where
        Req: prost::Message + Clone + Send + 'static,
        Resp: prost::Message + Default + Send + 'static,
    {
        let metadata = options.metadata().to_vec();
        self.inner
            .execute(
                tonic::GrpcMethod::new(SERVICE, rpc),
                http::uri::PathAndQuery::from_static(path),
                req,
                options,
                crate::info::X_GOOG_API_CLIENT_GRPC_HEADER.as_str(),
                &metadata,
            )
            .await
    }
}

impl super::stub::DlpService for DlpServiceGrpc {
    async fn inspect_content(
        &self,
        req: crate::model::InspectContentRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::InspectContentResponse>> {
        let options = set_method_config(options, crate::method_config::INSPECT_CONTENT);
        self.execute(
            "InspectContent",
            "/google.privacy.dlp.v2.DlpService/InspectContent",
            req,
            options,
        )
        .await
    }

    async fn deidentify_content(
        &self,
        req: crate::model::DeidentifyContentRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeidentifyContentResponse>> {
        let options = set_method_config(options, crate::method_config::DEIDENTIFY_CONTENT);
        self.execute(
            "DeidentifyContent",
            "/google.privacy.dlp.v2.DlpService/DeidentifyContent",
            req,
            options,
        )
        .await
    }

    async fn reidentify_content(
        &self,
        req: crate::model::ReidentifyContentRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ReidentifyContentResponse>> {
        let options = set_method_config(options, crate::method_config::REIDENTIFY_CONTENT);
        self.execute(
            "ReidentifyContent",
            "/google.privacy.dlp.v2.DlpService/ReidentifyContent",
            req,
            options,
        )
        .await
    }

    async fn list_info_types(
        &self,
        req: crate::model::ListInfoTypesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListInfoTypesResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_INFO_TYPES);
        self.execute(
            "ListInfoTypes",
            "/google.privacy.dlp.v2.DlpService/ListInfoTypes",
            req,
            options,
        )
        .await
    }

    async fn create_inspect_template(
        &self,
        req: crate::model::CreateInspectTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::InspectTemplate>> {
        let options = set_method_config(options, crate::method_config::CREATE_INSPECT_TEMPLATE);
        self.execute(
            "CreateInspectTemplate",
            "/google.privacy.dlp.v2.DlpService/CreateInspectTemplate",
            req,
            options,
        )
        .await
    }

    async fn update_inspect_template(
        &self,
        req: crate::model::UpdateInspectTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::InspectTemplate>> {
        let options = set_method_config(options, crate::method_config::UPDATE_INSPECT_TEMPLATE);
        self.execute(
            "UpdateInspectTemplate",
            "/google.privacy.dlp.v2.DlpService/UpdateInspectTemplate",
            req,
            options,
        )
        .await
    }

    async fn get_inspect_template(
        &self,
        req: crate::model::GetInspectTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::InspectTemplate>> {
        let options = set_method_config(options, crate::method_config::GET_INSPECT_TEMPLATE);
        self.execute(
            "GetInspectTemplate",
            "/google.privacy.dlp.v2.DlpService/GetInspectTemplate",
            req,
            options,
        )
        .await
    }

    async fn list_inspect_templates(
        &self,
        req: crate::model::ListInspectTemplatesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListInspectTemplatesResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_INSPECT_TEMPLATES);
        self.execute(
            "ListInspectTemplates",
            "/google.privacy.dlp.v2.DlpService/ListInspectTemplates",
            req,
            options,
        )
        .await
    }

    async fn delete_inspect_template(
        &self,
        req: crate::model::DeleteInspectTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::DELETE_INSPECT_TEMPLATE);
        self.execute(
            "DeleteInspectTemplate",
            "/google.privacy.dlp.v2.DlpService/DeleteInspectTemplate",
            req,
            options,
        )
        .await
    }

    async fn create_deidentify_template(
        &self,
        req: crate::model::CreateDeidentifyTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeidentifyTemplate>> {
        let options = set_method_config(options, crate::method_config::CREATE_DEIDENTIFY_TEMPLATE);
        self.execute(
            "CreateDeidentifyTemplate",
            "/google.privacy.dlp.v2.DlpService/CreateDeidentifyTemplate",
            req,
            options,
        )
        .await
    }

    async fn update_deidentify_template(
        &self,
        req: crate::model::UpdateDeidentifyTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeidentifyTemplate>> {
        let options = set_method_config(options, crate::method_config::UPDATE_DEIDENTIFY_TEMPLATE);
        self.execute(
            "UpdateDeidentifyTemplate",
            "/google.privacy.dlp.v2.DlpService/UpdateDeidentifyTemplate",
            req,
            options,
        )
        .await
    }

    async fn get_deidentify_template(
        &self,
        req: crate::model::GetDeidentifyTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeidentifyTemplate>> {
        let options = set_method_config(options, crate::method_config::GET_DEIDENTIFY_TEMPLATE);
        self.execute(
            "GetDeidentifyTemplate",
            "/google.privacy.dlp.v2.DlpService/GetDeidentifyTemplate",
            req,
            options,
        )
        .await
    }

    async fn list_deidentify_templates(
        &self,
        req: crate::model::ListDeidentifyTemplatesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListDeidentifyTemplatesResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_DEIDENTIFY_TEMPLATES);
        self.execute(
            "ListDeidentifyTemplates",
            "/google.privacy.dlp.v2.DlpService/ListDeidentifyTemplates",
            req,
            options,
        )
        .await
    }

    async fn delete_deidentify_template(
        &self,
        req: crate::model::DeleteDeidentifyTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::DELETE_DEIDENTIFY_TEMPLATE);
        self.execute(
            "DeleteDeidentifyTemplate",
            "/google.privacy.dlp.v2.DlpService/DeleteDeidentifyTemplate",
            req,
            options,
        )
        .await
    }

    async fn create_job_trigger(
        &self,
        req: crate::model::CreateJobTriggerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::JobTrigger>> {
        let options = set_method_config(options, crate::method_config::CREATE_JOB_TRIGGER);
        self.execute(
            "CreateJobTrigger",
            "/google.privacy.dlp.v2.DlpService/CreateJobTrigger",
            req,
            options,
        )
        .await
    }

    async fn update_job_trigger(
        &self,
        req: crate::model::UpdateJobTriggerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::JobTrigger>> {
        let options = set_method_config(options, crate::method_config::UPDATE_JOB_TRIGGER);
        self.execute(
            "UpdateJobTrigger",
            "/google.privacy.dlp.v2.DlpService/UpdateJobTrigger",
            req,
            options,
        )
        .await
    }

    async fn get_job_trigger(
        &self,
        req: crate::model::GetJobTriggerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::JobTrigger>> {
        let options = set_method_config(options, crate::method_config::GET_JOB_TRIGGER);
        self.execute(
            "GetJobTrigger",
            "/google.privacy.dlp.v2.DlpService/GetJobTrigger",
            req,
            options,
        )
        .await
    }

    async fn list_job_triggers(
        &self,
        req: crate::model::ListJobTriggersRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListJobTriggersResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_JOB_TRIGGERS);
        self.execute(
            "ListJobTriggers",
            "/google.privacy.dlp.v2.DlpService/ListJobTriggers",
            req,
            options,
        )
        .await
    }

    async fn delete_job_trigger(
        &self,
        req: crate::model::DeleteJobTriggerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::DELETE_JOB_TRIGGER);
        self.execute(
            "DeleteJobTrigger",
            "/google.privacy.dlp.v2.DlpService/DeleteJobTrigger",
            req,
            options,
        )
        .await
    }

    async fn activate_job_trigger(
        &self,
        req: crate::model::ActivateJobTriggerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DlpJob>> {
        let options = set_method_config(options, crate::method_config::ACTIVATE_JOB_TRIGGER);
        self.execute(
            "ActivateJobTrigger",
            "/google.privacy.dlp.v2.DlpService/ActivateJobTrigger",
            req,
            options,
        )
        .await
    }

    async fn create_dlp_job(
        &self,
        req: crate::model::CreateDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DlpJob>> {
        let options = set_method_config(options, crate::method_config::CREATE_DLP_JOB);
        self.execute(
            "CreateDlpJob",
            "/google.privacy.dlp.v2.DlpService/CreateDlpJob",
            req,
            options,
        )
        .await
    }

    async fn list_dlp_jobs(
        &self,
        req: crate::model::ListDlpJobsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListDlpJobsResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_DLP_JOBS);
        self.execute(
            "ListDlpJobs",
            "/google.privacy.dlp.v2.DlpService/ListDlpJobs",
            req,
            options,
        )
        .await
    }

    async fn get_dlp_job(
        &self,
        req: crate::model::GetDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DlpJob>> {
        let options = set_method_config(options, crate::method_config::GET_DLP_JOB);
        self.execute(
            "GetDlpJob",
            "/google.privacy.dlp.v2.DlpService/GetDlpJob",
            req,
            options,
        )
        .await
    }

    async fn delete_dlp_job(
        &self,
        req: crate::model::DeleteDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::DELETE_DLP_JOB);
        self.execute(
            "DeleteDlpJob",
            "/google.privacy.dlp.v2.DlpService/DeleteDlpJob",
            req,
            options,
        )
        .await
    }

    async fn cancel_dlp_job(
        &self,
        req: crate::model::CancelDlpJobRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::CANCEL_DLP_JOB);
        self.execute(
            "CancelDlpJob",
            "/google.privacy.dlp.v2.DlpService/CancelDlpJob",
            req,
            options,
        )
        .await
    }

    async fn create_discovery_config(
        &self,
        req: crate::model::CreateDiscoveryConfigRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DiscoveryConfig>> {
        let options = set_method_config(options, crate::method_config::CREATE_DISCOVERY_CONFIG);
        self.execute(
            "CreateDiscoveryConfig",
            "/google.privacy.dlp.v2.DlpService/CreateDiscoveryConfig",
            req,
            options,
        )
        .await
    }

    async fn update_discovery_config(
        &self,
        req: crate::model::UpdateDiscoveryConfigRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DiscoveryConfig>> {
        let options = set_method_config(options, crate::method_config::UPDATE_DISCOVERY_CONFIG);
        self.execute(
            "UpdateDiscoveryConfig",
            "/google.privacy.dlp.v2.DlpService/UpdateDiscoveryConfig",
            req,
            options,
        )
        .await
    }

    async fn get_discovery_config(
        &self,
        req: crate::model::GetDiscoveryConfigRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DiscoveryConfig>> {
        let options = set_method_config(options, crate::method_config::GET_DISCOVERY_CONFIG);
        self.execute(
            "GetDiscoveryConfig",
            "/google.privacy.dlp.v2.DlpService/GetDiscoveryConfig",
            req,
            options,
        )
        .await
    }

    async fn list_discovery_configs(
        &self,
        req: crate::model::ListDiscoveryConfigsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListDiscoveryConfigsResponse>> {
        let options = set_method_config(options, crate::method_config::LIST_DISCOVERY_CONFIGS);
        self.execute(
            "ListDiscoveryConfigs",
            "/google.privacy.dlp.v2.DlpService/ListDiscoveryConfigs",
            req,
            options,
        )
        .await
    }

    async fn delete_discovery_config(
        &self,
        req: crate::model::DeleteDiscoveryConfigRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Empty>> {
        let options = set_method_config(options, crate::method_config::DELETE_DISCOVERY_CONFIG);
        self.execute(
            "DeleteDiscoveryConfig",
            "/google.privacy.dlp.v2.DlpService/DeleteDiscoveryConfig",
            req,
            options,
        )
        .await
    }

    fn close(&self) {
        self.inner.close()
    }
}

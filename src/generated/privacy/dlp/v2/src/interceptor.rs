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

//! Hooks to observe and modify HTTP/JSON requests and responses.
//!
//! Each RPC has a pre-hook, which receives the request and its metadata before
//! the request is encoded, and a post-hook, which receives the decoded
//! response. Both hooks run exactly once per call, errors bypass the
//! post-hook. The default implementation of every hook returns its inputs
//! unchanged.
//!
//! # Example
//! ```
//! # use google_cloud_privacy_dlp_v2 as dlp;
//! use dlp::interceptor::{DlpServiceInterceptor, Metadata};
//! use dlp::model::InspectContentRequest;
//!
//! #[derive(Debug)]
//! struct AddTag;
//! impl DlpServiceInterceptor for AddTag {
//!     fn pre_inspect_content(
//!         &self,
//!         request: InspectContentRequest,
//!         mut metadata: Metadata,
//!     ) -> (InspectContentRequest, Metadata) {
//!         metadata.push(("x-my-tag".to_string(), "inspect".to_string()));
//!         (request, metadata)
//!     }
//! }
//! ```
//!
//! Interceptors are installed with
//! [ClientBuilderExt::with_interceptor][crate::builder::dlp_service::ClientBuilderExt::with_interceptor].
//! They are only supported by the HTTP/JSON transport.

/// The request metadata, sent as headers in this order.
pub type Metadata = std::vec::Vec<(std::string::String, std::string::String)>;

/// Intercepts the calls made by the HTTP/JSON transport.
pub trait DlpServiceInterceptor: std::fmt::Debug + Send + Sync {
    /// Runs before `inspect_content` is sent.
    fn pre_inspect_content(&self, request: crate::model::InspectContentRequest, metadata: Metadata) -> (crate::model::InspectContentRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `inspect_content` response is decoded.
    fn post_inspect_content(&self, response: crate::model::InspectContentResponse) -> crate::model::InspectContentResponse {
        response
    }

    /// Runs before `deidentify_content` is sent.
    fn pre_deidentify_content(&self, request: crate::model::DeidentifyContentRequest, metadata: Metadata) -> (crate::model::DeidentifyContentRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `deidentify_content` response is decoded.
    fn post_deidentify_content(&self, response: crate::model::DeidentifyContentResponse) -> crate::model::DeidentifyContentResponse {
        response
    }

    /// Runs before `reidentify_content` is sent.
    fn pre_reidentify_content(&self, request: crate::model::ReidentifyContentRequest, metadata: Metadata) -> (crate::model::ReidentifyContentRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `reidentify_content` response is decoded.
    fn post_reidentify_content(&self, response: crate::model::ReidentifyContentResponse) -> crate::model::ReidentifyContentResponse {
        response
    }

    /// Runs before `list_info_types` is sent.
    fn pre_list_info_types(&self, request: crate::model::ListInfoTypesRequest, metadata: Metadata) -> (crate::model::ListInfoTypesRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `list_info_types` response is decoded.
    fn post_list_info_types(&self, response: crate::model::ListInfoTypesResponse) -> crate::model::ListInfoTypesResponse {
        response
    }

    /// Runs before `create_inspect_template` is sent.
    fn pre_create_inspect_template(&self, request: crate::model::CreateInspectTemplateRequest, metadata: Metadata) -> (crate::model::CreateInspectTemplateRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `create_inspect_template` response is decoded.
    fn post_create_inspect_template(&self, response: crate::model::InspectTemplate) -> crate::model::InspectTemplate {
        response
    }

    /// Runs before `update_inspect_template` is sent.
    fn pre_update_inspect_template(&self, request: crate::model::UpdateInspectTemplateRequest, metadata: Metadata) -> (crate::model::UpdateInspectTemplateRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `update_inspect_template` response is decoded.
    fn post_update_inspect_template(&self, response: crate::model::InspectTemplate) -> crate::model::InspectTemplate {
        response
    }

    /// Runs before `get_inspect_template` is sent.
    fn pre_get_inspect_template(&self, request: crate::model::GetInspectTemplateRequest, metadata: Metadata) -> (crate::model::GetInspectTemplateRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `get_inspect_template` response is decoded.
    fn post_get_inspect_template(&self, response: crate::model::InspectTemplate) -> crate::model::InspectTemplate {
        response
    }

    /// Runs before `list_inspect_templates` is sent.
    fn pre_list_inspect_templates(&self, request: crate::model::ListInspectTemplatesRequest, metadata: Metadata) -> (crate::model::ListInspectTemplatesRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `list_inspect_templates` response is decoded.
    fn post_list_inspect_templates(&self, response: crate::model::ListInspectTemplatesResponse) -> crate::model::ListInspectTemplatesResponse {
        response
    }

    /// Runs before `delete_inspect_template` is sent.
    fn pre_delete_inspect_template(&self, request: crate::model::DeleteInspectTemplateRequest, metadata: Metadata) -> (crate::model::DeleteInspectTemplateRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `delete_inspect_template` response is decoded.
    fn post_delete_inspect_template(&self, response: crate::model::Empty) -> crate::model::Empty {
        response
    }

    /// Runs before `create_deidentify_template` is sent.
    fn pre_create_deidentify_template(&self, request: crate::model::CreateDeidentifyTemplateRequest, metadata: Metadata) -> (crate::model::CreateDeidentifyTemplateRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `create_deidentify_template` response is decoded.
    fn post_create_deidentify_template(&self, response: crate::model::DeidentifyTemplate) -> crate::model::DeidentifyTemplate {
        response
    }

    /// Runs before `update_deidentify_template` is sent.
    fn pre_update_deidentify_template(&self, request: crate::model::UpdateDeidentifyTemplateRequest, metadata: Metadata) -> (crate::model::UpdateDeidentifyTemplateRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `update_deidentify_template` response is decoded.
    fn post_update_deidentify_template(&self, response: crate::model::DeidentifyTemplate) -> crate::model::DeidentifyTemplate {
        response
    }

    /// Runs before `get_deidentify_template` is sent.
    fn pre_get_deidentify_template(&self, request: crate::model::GetDeidentifyTemplateRequest, metadata: Metadata) -> (crate::model::GetDeidentifyTemplateRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `get_deidentify_template` response is decoded.
    fn post_get_deidentify_template(&self, response: crate::model::DeidentifyTemplate) -> crate::model::DeidentifyTemplate {
        response
    }

    /// Runs before `list_deidentify_templates` is sent.
    fn pre_list_deidentify_templates(&self, request: crate::model::ListDeidentifyTemplatesRequest, metadata: Metadata) -> (crate::model::ListDeidentifyTemplatesRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `list_deidentify_templates` response is decoded.
    fn post_list_deidentify_templates(&self, response: crate::model::ListDeidentifyTemplatesResponse) -> crate::model::ListDeidentifyTemplatesResponse {
        response
    }

    /// Runs before `delete_deidentify_template` is sent.
    fn pre_delete_deidentify_template(&self, request: crate::model::DeleteDeidentifyTemplateRequest, metadata: Metadata) -> (crate::model::DeleteDeidentifyTemplateRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `delete_deidentify_template` response is decoded.
    fn post_delete_deidentify_template(&self, response: crate::model::Empty) -> crate::model::Empty {
        response
    }

    /// Runs before `create_job_trigger` is sent.
    fn pre_create_job_trigger(&self, request: crate::model::CreateJobTriggerRequest, metadata: Metadata) -> (crate::model::CreateJobTriggerRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `create_job_trigger` response is decoded.
    fn post_create_job_trigger(&self, response: crate::model::JobTrigger) -> crate::model::JobTrigger {
        response
    }

    /// Runs before `update_job_trigger` is sent.
    fn pre_update_job_trigger(&self, request: crate::model::UpdateJobTriggerRequest, metadata: Metadata) -> (crate::model::UpdateJobTriggerRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `update_job_trigger` response is decoded.
    fn post_update_job_trigger(&self, response: crate::model::JobTrigger) -> crate::model::JobTrigger {
        response
    }

    /// Runs before `get_job_trigger` is sent.
    fn pre_get_job_trigger(&self, request: crate::model::GetJobTriggerRequest, metadata: Metadata) -> (crate::model::GetJobTriggerRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `get_job_trigger` response is decoded.
    fn post_get_job_trigger(&self, response: crate::model::JobTrigger) -> crate::model::JobTrigger {
        response
    }

    /// Runs before `list_job_triggers` is sent.
    fn pre_list_job_triggers(&self, request: crate::model::ListJobTriggersRequest, metadata: Metadata) -> (crate::model::ListJobTriggersRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `list_job_triggers` response is decoded.
    fn post_list_job_triggers(&self, response: crate::model::ListJobTriggersResponse) -> crate::model::ListJobTriggersResponse {
        response
    }

    /// Runs before `delete_job_trigger` is sent.
    fn pre_delete_job_trigger(&self, request: crate::model::DeleteJobTriggerRequest, metadata: Metadata) -> (crate::model::DeleteJobTriggerRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `delete_job_trigger` response is decoded.
    fn post_delete_job_trigger(&self, response: crate::model::Empty) -> crate::model::Empty {
        response
    }

    /// Runs before `activate_job_trigger` is sent.
    fn pre_activate_job_trigger(&self, request: crate::model::ActivateJobTriggerRequest, metadata: Metadata) -> (crate::model::ActivateJobTriggerRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `activate_job_trigger` response is decoded.
    fn post_activate_job_trigger(&self, response: crate::model::DlpJob) -> crate::model::DlpJob {
        response
    }

    /// Runs before `create_dlp_job` is sent.
    fn pre_create_dlp_job(&self, request: crate::model::CreateDlpJobRequest, metadata: Metadata) -> (crate::model::CreateDlpJobRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `create_dlp_job` response is decoded.
    fn post_create_dlp_job(&self, response: crate::model::DlpJob) -> crate::model::DlpJob {
        response
    }

    /// Runs before `list_dlp_jobs` is sent.
    fn pre_list_dlp_jobs(&self, request: crate::model::ListDlpJobsRequest, metadata: Metadata) -> (crate::model::ListDlpJobsRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `list_dlp_jobs` response is decoded.
    fn post_list_dlp_jobs(&self, response: crate::model::ListDlpJobsResponse) -> crate::model::ListDlpJobsResponse {
        response
    }

    /// Runs before `get_dlp_job` is sent.
    fn pre_get_dlp_job(&self, request: crate::model::GetDlpJobRequest, metadata: Metadata) -> (crate::model::GetDlpJobRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `get_dlp_job` response is decoded.
    fn post_get_dlp_job(&self, response: crate::model::DlpJob) -> crate::model::DlpJob {
        response
    }

    /// Runs before `delete_dlp_job` is sent.
    fn pre_delete_dlp_job(&self, request: crate::model::DeleteDlpJobRequest, metadata: Metadata) -> (crate::model::DeleteDlpJobRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `delete_dlp_job` response is decoded.
    fn post_delete_dlp_job(&self, response: crate::model::Empty) -> crate::model::Empty {
        response
    }

    /// Runs before `cancel_dlp_job` is sent.
    fn pre_cancel_dlp_job(&self, request: crate::model::CancelDlpJobRequest, metadata: Metadata) -> (crate::model::CancelDlpJobRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `cancel_dlp_job` response is decoded.
    fn post_cancel_dlp_job(&self, response: crate::model::Empty) -> crate::model::Empty {
        response
    }

    /// Runs before `create_discovery_config` is sent.
    fn pre_create_discovery_config(&self, request: crate::model::CreateDiscoveryConfigRequest, metadata: Metadata) -> (crate::model::CreateDiscoveryConfigRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `create_discovery_config` response is decoded.
    fn post_create_discovery_config(&self, response: crate::model::DiscoveryConfig) -> crate::model::DiscoveryConfig {
        response
    }

    /// Runs before `update_discovery_config` is sent.
    fn pre_update_discovery_config(&self, request: crate::model::UpdateDiscoveryConfigRequest, metadata: Metadata) -> (crate::model::UpdateDiscoveryConfigRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `update_discovery_config` response is decoded.
    fn post_update_discovery_config(&self, response: crate::model::DiscoveryConfig) -> crate::model::DiscoveryConfig {
        response
    }

    /// Runs before `get_discovery_config` is sent.
    fn pre_get_discovery_config(&self, request: crate::model::GetDiscoveryConfigRequest, metadata: Metadata) -> (crate::model::GetDiscoveryConfigRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `get_discovery_config` response is decoded.
    fn post_get_discovery_config(&self, response: crate::model::DiscoveryConfig) -> crate::model::DiscoveryConfig {
        response
    }

    /// Runs before `list_discovery_configs` is sent.
    fn pre_list_discovery_configs(&self, request: crate::model::ListDiscoveryConfigsRequest, metadata: Metadata) -> (crate::model::ListDiscoveryConfigsRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `list_discovery_configs` response is decoded.
    fn post_list_discovery_configs(&self, response: crate::model::ListDiscoveryConfigsResponse) -> crate::model::ListDiscoveryConfigsResponse {
        response
    }

    /// Runs before `delete_discovery_config` is sent.
    fn pre_delete_discovery_config(&self, request: crate::model::DeleteDiscoveryConfigRequest, metadata: Metadata) -> (crate::model::DeleteDiscoveryConfigRequest, Metadata) {
        (request, metadata)
    }

    /// Runs after the `delete_discovery_config` response is decoded.
    fn post_delete_discovery_config(&self, response: crate::model::Empty) -> crate::model::Empty {
        response
    }
}

/// An interceptor where all the hooks return their inputs.
#[derive(Clone, Debug, Default)]
pub struct NoopInterceptor;

impl DlpServiceInterceptor for NoopInterceptor {}

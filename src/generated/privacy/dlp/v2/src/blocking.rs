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

//! A blocking client for the Sensitive Data Protection (DLP) API.
//!
//! The client in this module wraps the asynchronous [DlpService][crate::client::DlpService]
//! and drives it on a Tokio runtime it owns. Use it from synchronous code
//! only. Calling these methods from within an async context panics.
//!
//! # Example
//! ```no_run
//! # use google_cloud_privacy_dlp_v2::blocking::DlpService;
//! # fn sample() -> anyhow::Result<()> {
//! let client = DlpService::new(DlpService::builder())?;
//! for template in client
//!     .list_inspect_templates()
//!     .set_parent("projects/my-project/locations/global")
//!     .items()
//! {
//!     println!("{:?}", template?);
//! }
//! # Ok(()) }
//! ```

use gax::client_builder::Error as BuilderError;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Implements a blocking client for the Sensitive Data Protection (DLP) API.
///
/// Cloning this client is cheap: clones share the connection pool and the
/// runtime.
#[derive(Clone, Debug)]
pub struct DlpService {
    inner: crate::client::DlpService,
    runtime: Arc<Runtime>,
}

impl DlpService {
    /// Returns a builder for the underlying asynchronous client.
    pub fn builder() -> crate::builder::dlp_service::ClientBuilder {
        crate::client::DlpService::builder()
    }

    /// Creates a blocking client from a configured builder.
    ///
    /// The client owns a single-threaded Tokio runtime used for all its calls.
    pub fn new(
        builder: crate::builder::dlp_service::ClientBuilder,
    ) -> gax::client_builder::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(BuilderError::transport)?;
        let inner = runtime.block_on(builder.build())?;
        Ok(Self::from_client(inner, Arc::new(runtime)))
    }

    /// Wraps an existing asynchronous client.
    ///
    /// The runtime must be able to drive the client's transport.
    pub fn from_client(inner: crate::client::DlpService, runtime: Arc<Runtime>) -> Self {
        Self { inner, runtime }
    }

    /// Finds potentially sensitive info in content.
    /// This method has limits on input size, processing time, and output size.
    pub fn inspect_content(&self) -> dlp_service::InspectContent {
        dlp_service::InspectContent::new(self.inner.inspect_content(), self.runtime.clone())
    }

    /// De-identifies potentially sensitive info from a ContentItem.
    /// This method has limits on input size and output size.
    pub fn deidentify_content(&self) -> dlp_service::DeidentifyContent {
        dlp_service::DeidentifyContent::new(self.inner.deidentify_content(), self.runtime.clone())
    }

    /// Re-identifies content that has been de-identified.
    pub fn reidentify_content(&self) -> dlp_service::ReidentifyContent {
        dlp_service::ReidentifyContent::new(self.inner.reidentify_content(), self.runtime.clone())
    }

    /// Returns a list of the sensitive information types that the DLP API
    /// supports.
    pub fn list_info_types(&self) -> dlp_service::ListInfoTypes {
        dlp_service::ListInfoTypes::new(self.inner.list_info_types(), self.runtime.clone())
    }

    /// Creates an InspectTemplate.
    pub fn create_inspect_template(&self) -> dlp_service::CreateInspectTemplate {
        dlp_service::CreateInspectTemplate::new(self.inner.create_inspect_template(), self.runtime.clone())
    }

    /// Updates an InspectTemplate.
    pub fn update_inspect_template(&self) -> dlp_service::UpdateInspectTemplate {
        dlp_service::UpdateInspectTemplate::new(self.inner.update_inspect_template(), self.runtime.clone())
    }

    /// Gets an InspectTemplate.
    pub fn get_inspect_template(&self) -> dlp_service::GetInspectTemplate {
        dlp_service::GetInspectTemplate::new(self.inner.get_inspect_template(), self.runtime.clone())
    }

    /// Lists InspectTemplates.
    pub fn list_inspect_templates(&self) -> dlp_service::ListInspectTemplates {
        dlp_service::ListInspectTemplates::new(self.inner.list_inspect_templates(), self.runtime.clone())
    }

    /// Deletes an InspectTemplate.
    pub fn delete_inspect_template(&self) -> dlp_service::DeleteInspectTemplate {
        dlp_service::DeleteInspectTemplate::new(self.inner.delete_inspect_template(), self.runtime.clone())
    }

    /// Creates a DeidentifyTemplate.
    pub fn create_deidentify_template(&self) -> dlp_service::CreateDeidentifyTemplate {
        dlp_service::CreateDeidentifyTemplate::new(self.inner.create_deidentify_template(), self.runtime.clone())
    }

    /// Updates a DeidentifyTemplate.
    pub fn update_deidentify_template(&self) -> dlp_service::UpdateDeidentifyTemplate {
        dlp_service::UpdateDeidentifyTemplate::new(self.inner.update_deidentify_template(), self.runtime.clone())
    }

    /// Gets a DeidentifyTemplate.
    pub fn get_deidentify_template(&self) -> dlp_service::GetDeidentifyTemplate {
        dlp_service::GetDeidentifyTemplate::new(self.inner.get_deidentify_template(), self.runtime.clone())
    }

    /// Lists DeidentifyTemplates.
    pub fn list_deidentify_templates(&self) -> dlp_service::ListDeidentifyTemplates {
        dlp_service::ListDeidentifyTemplates::new(self.inner.list_deidentify_templates(), self.runtime.clone())
    }

    /// Deletes a DeidentifyTemplate.
    pub fn delete_deidentify_template(&self) -> dlp_service::DeleteDeidentifyTemplate {
        dlp_service::DeleteDeidentifyTemplate::new(self.inner.delete_deidentify_template(), self.runtime.clone())
    }

    /// Creates a JobTrigger.
    pub fn create_job_trigger(&self) -> dlp_service::CreateJobTrigger {
        dlp_service::CreateJobTrigger::new(self.inner.create_job_trigger(), self.runtime.clone())
    }

    /// Updates a JobTrigger.
    pub fn update_job_trigger(&self) -> dlp_service::UpdateJobTrigger {
        dlp_service::UpdateJobTrigger::new(self.inner.update_job_trigger(), self.runtime.clone())
    }

    /// Gets a JobTrigger.
    pub fn get_job_trigger(&self) -> dlp_service::GetJobTrigger {
        dlp_service::GetJobTrigger::new(self.inner.get_job_trigger(), self.runtime.clone())
    }

    /// Lists JobTriggers.
    pub fn list_job_triggers(&self) -> dlp_service::ListJobTriggers {
        dlp_service::ListJobTriggers::new(self.inner.list_job_triggers(), self.runtime.clone())
    }

    /// Deletes a JobTrigger.
    pub fn delete_job_trigger(&self) -> dlp_service::DeleteJobTrigger {
        dlp_service::DeleteJobTrigger::new(self.inner.delete_job_trigger(), self.runtime.clone())
    }

    /// Activates a job trigger. Causes the immediate execute of a trigger
    /// instead of waiting on the trigger event to occur.
    pub fn activate_job_trigger(&self) -> dlp_service::ActivateJobTrigger {
        dlp_service::ActivateJobTrigger::new(self.inner.activate_job_trigger(), self.runtime.clone())
    }

    /// Creates a new job to inspect storage or calculate risk metrics.
    pub fn create_dlp_job(&self) -> dlp_service::CreateDlpJob {
        dlp_service::CreateDlpJob::new(self.inner.create_dlp_job(), self.runtime.clone())
    }

    /// Lists DlpJobs that match the specified filter in the request.
    pub fn list_dlp_jobs(&self) -> dlp_service::ListDlpJobs {
        dlp_service::ListDlpJobs::new(self.inner.list_dlp_jobs(), self.runtime.clone())
    }

    /// Gets the latest state of a long-running DlpJob.
    pub fn get_dlp_job(&self) -> dlp_service::GetDlpJob {
        dlp_service::GetDlpJob::new(self.inner.get_dlp_job(), self.runtime.clone())
    }

    /// Deletes a long-running DlpJob. This method indicates that the client is
    /// no longer interested in the DlpJob result. The job will be canceled if
    /// possible.
    pub fn delete_dlp_job(&self) -> dlp_service::DeleteDlpJob {
        dlp_service::DeleteDlpJob::new(self.inner.delete_dlp_job(), self.runtime.clone())
    }

    /// Starts asynchronous cancellation on a long-running DlpJob. The server
    /// makes a best effort to cancel the DlpJob, but success is not
    /// guaranteed.
    pub fn cancel_dlp_job(&self) -> dlp_service::CancelDlpJob {
        dlp_service::CancelDlpJob::new(self.inner.cancel_dlp_job(), self.runtime.clone())
    }

    /// Creates a DiscoveryConfig.
    pub fn create_discovery_config(&self) -> dlp_service::CreateDiscoveryConfig {
        dlp_service::CreateDiscoveryConfig::new(self.inner.create_discovery_config(), self.runtime.clone())
    }

    /// Updates a DiscoveryConfig.
    pub fn update_discovery_config(&self) -> dlp_service::UpdateDiscoveryConfig {
        dlp_service::UpdateDiscoveryConfig::new(self.inner.update_discovery_config(), self.runtime.clone())
    }

    /// Gets a DiscoveryConfig.
    pub fn get_discovery_config(&self) -> dlp_service::GetDiscoveryConfig {
        dlp_service::GetDiscoveryConfig::new(self.inner.get_discovery_config(), self.runtime.clone())
    }

    /// Lists DiscoveryConfigs.
    pub fn list_discovery_configs(&self) -> dlp_service::ListDiscoveryConfigs {
        dlp_service::ListDiscoveryConfigs::new(self.inner.list_discovery_configs(), self.runtime.clone())
    }

    /// Deletes a DiscoveryConfig.
    pub fn delete_discovery_config(&self) -> dlp_service::DeleteDiscoveryConfig {
        dlp_service::DeleteDiscoveryConfig::new(self.inner.delete_discovery_config(), self.runtime.clone())
    }

    /// Releases the underlying channel or session. See
    /// [close()][crate::client::DlpService::close].
    pub fn close(&self) {
        self.inner.close()
    }
}

/// Request builders for the blocking [DlpService].
pub mod dlp_service {
    use crate::Result;
    use gax::paginator::blocking::{Items, Pages};
    use std::sync::Arc;
    use tokio::runtime::Runtime;

    /// The blocking request builder for [DlpService::inspect_content][super::DlpService::inspect_content] calls.
    #[derive(Debug)]
    pub struct InspectContent {
        inner: crate::builder::dlp_service::InspectContent,
        runtime: Arc<Runtime>,
    }

    impl InspectContent {
        pub(crate) fn new(inner: crate::builder::dlp_service::InspectContent, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::InspectContentRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::InspectContentResponse> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [InspectContent::set_parent][crate::builder::dlp_service::InspectContent::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [InspectContent::set_inspect_config][crate::builder::dlp_service::InspectContent::set_inspect_config].
        pub fn set_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(self, v: T) -> Self {
            Self::new(self.inner.set_inspect_config(v), self.runtime)
        }

        /// See [InspectContent::set_or_clear_inspect_config][crate::builder::dlp_service::InspectContent::set_or_clear_inspect_config].
        pub fn set_or_clear_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_inspect_config(v), self.runtime)
        }

        /// See [InspectContent::set_item][crate::builder::dlp_service::InspectContent::set_item].
        pub fn set_item<T: std::convert::Into<crate::model::ContentItem>>(self, v: T) -> Self {
            Self::new(self.inner.set_item(v), self.runtime)
        }

        /// See [InspectContent::set_or_clear_item][crate::builder::dlp_service::InspectContent::set_or_clear_item].
        pub fn set_or_clear_item<T: std::convert::Into<crate::model::ContentItem>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_item(v), self.runtime)
        }

        /// See [InspectContent::set_inspect_template_name][crate::builder::dlp_service::InspectContent::set_inspect_template_name].
        pub fn set_inspect_template_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_inspect_template_name(v), self.runtime)
        }

        /// See [InspectContent::set_location_id][crate::builder::dlp_service::InspectContent::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InspectContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::deidentify_content][super::DlpService::deidentify_content] calls.
    #[derive(Debug)]
    pub struct DeidentifyContent {
        inner: crate::builder::dlp_service::DeidentifyContent,
        runtime: Arc<Runtime>,
    }

    impl DeidentifyContent {
        pub(crate) fn new(inner: crate::builder::dlp_service::DeidentifyContent, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeidentifyContentRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::DeidentifyContentResponse> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [DeidentifyContent::set_parent][crate::builder::dlp_service::DeidentifyContent::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [DeidentifyContent::set_deidentify_config][crate::builder::dlp_service::DeidentifyContent::set_deidentify_config].
        pub fn set_deidentify_config<T: std::convert::Into<crate::model::DeidentifyConfig>>(self, v: T) -> Self {
            Self::new(self.inner.set_deidentify_config(v), self.runtime)
        }

        /// See [DeidentifyContent::set_or_clear_deidentify_config][crate::builder::dlp_service::DeidentifyContent::set_or_clear_deidentify_config].
        pub fn set_or_clear_deidentify_config<T: std::convert::Into<crate::model::DeidentifyConfig>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_deidentify_config(v), self.runtime)
        }

        /// See [DeidentifyContent::set_inspect_config][crate::builder::dlp_service::DeidentifyContent::set_inspect_config].
        pub fn set_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(self, v: T) -> Self {
            Self::new(self.inner.set_inspect_config(v), self.runtime)
        }

        /// See [DeidentifyContent::set_or_clear_inspect_config][crate::builder::dlp_service::DeidentifyContent::set_or_clear_inspect_config].
        pub fn set_or_clear_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_inspect_config(v), self.runtime)
        }

        /// See [DeidentifyContent::set_item][crate::builder::dlp_service::DeidentifyContent::set_item].
        pub fn set_item<T: std::convert::Into<crate::model::ContentItem>>(self, v: T) -> Self {
            Self::new(self.inner.set_item(v), self.runtime)
        }

        /// See [DeidentifyContent::set_or_clear_item][crate::builder::dlp_service::DeidentifyContent::set_or_clear_item].
        pub fn set_or_clear_item<T: std::convert::Into<crate::model::ContentItem>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_item(v), self.runtime)
        }

        /// See [DeidentifyContent::set_inspect_template_name][crate::builder::dlp_service::DeidentifyContent::set_inspect_template_name].
        pub fn set_inspect_template_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_inspect_template_name(v), self.runtime)
        }

        /// See [DeidentifyContent::set_deidentify_template_name][crate::builder::dlp_service::DeidentifyContent::set_deidentify_template_name].
        pub fn set_deidentify_template_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_deidentify_template_name(v), self.runtime)
        }

        /// See [DeidentifyContent::set_location_id][crate::builder::dlp_service::DeidentifyContent::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeidentifyContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::reidentify_content][super::DlpService::reidentify_content] calls.
    #[derive(Debug)]
    pub struct ReidentifyContent {
        inner: crate::builder::dlp_service::ReidentifyContent,
        runtime: Arc<Runtime>,
    }

    impl ReidentifyContent {
        pub(crate) fn new(inner: crate::builder::dlp_service::ReidentifyContent, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReidentifyContentRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::ReidentifyContentResponse> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [ReidentifyContent::set_parent][crate::builder::dlp_service::ReidentifyContent::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [ReidentifyContent::set_reidentify_config][crate::builder::dlp_service::ReidentifyContent::set_reidentify_config].
        pub fn set_reidentify_config<T: std::convert::Into<crate::model::DeidentifyConfig>>(self, v: T) -> Self {
            Self::new(self.inner.set_reidentify_config(v), self.runtime)
        }

        /// See [ReidentifyContent::set_or_clear_reidentify_config][crate::builder::dlp_service::ReidentifyContent::set_or_clear_reidentify_config].
        pub fn set_or_clear_reidentify_config<T: std::convert::Into<crate::model::DeidentifyConfig>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_reidentify_config(v), self.runtime)
        }

        /// See [ReidentifyContent::set_inspect_config][crate::builder::dlp_service::ReidentifyContent::set_inspect_config].
        pub fn set_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(self, v: T) -> Self {
            Self::new(self.inner.set_inspect_config(v), self.runtime)
        }

        /// See [ReidentifyContent::set_or_clear_inspect_config][crate::builder::dlp_service::ReidentifyContent::set_or_clear_inspect_config].
        pub fn set_or_clear_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_inspect_config(v), self.runtime)
        }

        /// See [ReidentifyContent::set_item][crate::builder::dlp_service::ReidentifyContent::set_item].
        pub fn set_item<T: std::convert::Into<crate::model::ContentItem>>(self, v: T) -> Self {
            Self::new(self.inner.set_item(v), self.runtime)
        }

        /// See [ReidentifyContent::set_or_clear_item][crate::builder::dlp_service::ReidentifyContent::set_or_clear_item].
        pub fn set_or_clear_item<T: std::convert::Into<crate::model::ContentItem>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_item(v), self.runtime)
        }

        /// See [ReidentifyContent::set_inspect_template_name][crate::builder::dlp_service::ReidentifyContent::set_inspect_template_name].
        pub fn set_inspect_template_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_inspect_template_name(v), self.runtime)
        }

        /// See [ReidentifyContent::set_reidentify_template_name][crate::builder::dlp_service::ReidentifyContent::set_reidentify_template_name].
        pub fn set_reidentify_template_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_reidentify_template_name(v), self.runtime)
        }

        /// See [ReidentifyContent::set_location_id][crate::builder::dlp_service::ReidentifyContent::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ReidentifyContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::list_info_types][super::DlpService::list_info_types] calls.
    #[derive(Debug)]
    pub struct ListInfoTypes {
        inner: crate::builder::dlp_service::ListInfoTypes,
        runtime: Arc<Runtime>,
    }

    impl ListInfoTypes {
        pub(crate) fn new(inner: crate::builder::dlp_service::ListInfoTypes, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListInfoTypesRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::ListInfoTypesResponse> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [ListInfoTypes::set_parent][crate::builder::dlp_service::ListInfoTypes::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [ListInfoTypes::set_language_code][crate::builder::dlp_service::ListInfoTypes::set_language_code].
        pub fn set_language_code<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_language_code(v), self.runtime)
        }

        /// See [ListInfoTypes::set_filter][crate::builder::dlp_service::ListInfoTypes::set_filter].
        pub fn set_filter<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_filter(v), self.runtime)
        }

        /// See [ListInfoTypes::set_location_id][crate::builder::dlp_service::ListInfoTypes::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListInfoTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::create_inspect_template][super::DlpService::create_inspect_template] calls.
    #[derive(Debug)]
    pub struct CreateInspectTemplate {
        inner: crate::builder::dlp_service::CreateInspectTemplate,
        runtime: Arc<Runtime>,
    }

    impl CreateInspectTemplate {
        pub(crate) fn new(inner: crate::builder::dlp_service::CreateInspectTemplate, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateInspectTemplateRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::InspectTemplate> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [CreateInspectTemplate::set_parent][crate::builder::dlp_service::CreateInspectTemplate::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [CreateInspectTemplate::set_inspect_template][crate::builder::dlp_service::CreateInspectTemplate::set_inspect_template].
        pub fn set_inspect_template<T: std::convert::Into<crate::model::InspectTemplate>>(self, v: T) -> Self {
            Self::new(self.inner.set_inspect_template(v), self.runtime)
        }

        /// See [CreateInspectTemplate::set_or_clear_inspect_template][crate::builder::dlp_service::CreateInspectTemplate::set_or_clear_inspect_template].
        pub fn set_or_clear_inspect_template<T: std::convert::Into<crate::model::InspectTemplate>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_inspect_template(v), self.runtime)
        }

        /// See [CreateInspectTemplate::set_template_id][crate::builder::dlp_service::CreateInspectTemplate::set_template_id].
        pub fn set_template_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_template_id(v), self.runtime)
        }

        /// See [CreateInspectTemplate::set_location_id][crate::builder::dlp_service::CreateInspectTemplate::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateInspectTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::update_inspect_template][super::DlpService::update_inspect_template] calls.
    #[derive(Debug)]
    pub struct UpdateInspectTemplate {
        inner: crate::builder::dlp_service::UpdateInspectTemplate,
        runtime: Arc<Runtime>,
    }

    impl UpdateInspectTemplate {
        pub(crate) fn new(inner: crate::builder::dlp_service::UpdateInspectTemplate, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateInspectTemplateRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::InspectTemplate> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [UpdateInspectTemplate::set_name][crate::builder::dlp_service::UpdateInspectTemplate::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }

        /// See [UpdateInspectTemplate::set_inspect_template][crate::builder::dlp_service::UpdateInspectTemplate::set_inspect_template].
        pub fn set_inspect_template<T: std::convert::Into<crate::model::InspectTemplate>>(self, v: T) -> Self {
            Self::new(self.inner.set_inspect_template(v), self.runtime)
        }

        /// See [UpdateInspectTemplate::set_or_clear_inspect_template][crate::builder::dlp_service::UpdateInspectTemplate::set_or_clear_inspect_template].
        pub fn set_or_clear_inspect_template<T: std::convert::Into<crate::model::InspectTemplate>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_inspect_template(v), self.runtime)
        }

        /// See [UpdateInspectTemplate::set_update_mask][crate::builder::dlp_service::UpdateInspectTemplate::set_update_mask].
        pub fn set_update_mask<T: std::convert::Into<prost_types::FieldMask>>(self, v: T) -> Self {
            Self::new(self.inner.set_update_mask(v), self.runtime)
        }

        /// See [UpdateInspectTemplate::set_or_clear_update_mask][crate::builder::dlp_service::UpdateInspectTemplate::set_or_clear_update_mask].
        pub fn set_or_clear_update_mask<T: std::convert::Into<prost_types::FieldMask>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_update_mask(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateInspectTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::get_inspect_template][super::DlpService::get_inspect_template] calls.
    #[derive(Debug)]
    pub struct GetInspectTemplate {
        inner: crate::builder::dlp_service::GetInspectTemplate,
        runtime: Arc<Runtime>,
    }

    impl GetInspectTemplate {
        pub(crate) fn new(inner: crate::builder::dlp_service::GetInspectTemplate, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetInspectTemplateRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::InspectTemplate> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [GetInspectTemplate::set_name][crate::builder::dlp_service::GetInspectTemplate::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetInspectTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::list_inspect_templates][super::DlpService::list_inspect_templates] calls.
    #[derive(Debug)]
    pub struct ListInspectTemplates {
        inner: crate::builder::dlp_service::ListInspectTemplates,
        runtime: Arc<Runtime>,
    }

    impl ListInspectTemplates {
        pub(crate) fn new(inner: crate::builder::dlp_service::ListInspectTemplates, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListInspectTemplatesRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::ListInspectTemplatesResponse> {
            self.runtime.block_on(self.inner.send())
        }

        /// Iterates over the pages in the collection.
        pub fn pages(self) -> Pages<crate::model::ListInspectTemplatesResponse, gax::error::Error> {
            Pages::new(self.runtime, self.inner.by_page())
        }

        /// Iterates over the items in the collection.
        pub fn items(self) -> Items<crate::model::ListInspectTemplatesResponse, gax::error::Error> {
            self.pages().items()
        }

        /// See [ListInspectTemplates::set_parent][crate::builder::dlp_service::ListInspectTemplates::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [ListInspectTemplates::set_page_token][crate::builder::dlp_service::ListInspectTemplates::set_page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_page_token(v), self.runtime)
        }

        /// See [ListInspectTemplates::set_page_size][crate::builder::dlp_service::ListInspectTemplates::set_page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(self, v: T) -> Self {
            Self::new(self.inner.set_page_size(v), self.runtime)
        }

        /// See [ListInspectTemplates::set_order_by][crate::builder::dlp_service::ListInspectTemplates::set_order_by].
        pub fn set_order_by<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_order_by(v), self.runtime)
        }

        /// See [ListInspectTemplates::set_location_id][crate::builder::dlp_service::ListInspectTemplates::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListInspectTemplates {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::delete_inspect_template][super::DlpService::delete_inspect_template] calls.
    #[derive(Debug)]
    pub struct DeleteInspectTemplate {
        inner: crate::builder::dlp_service::DeleteInspectTemplate,
        runtime: Arc<Runtime>,
    }

    impl DeleteInspectTemplate {
        pub(crate) fn new(inner: crate::builder::dlp_service::DeleteInspectTemplate, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteInspectTemplateRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::Empty> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [DeleteInspectTemplate::set_name][crate::builder::dlp_service::DeleteInspectTemplate::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteInspectTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::create_deidentify_template][super::DlpService::create_deidentify_template] calls.
    #[derive(Debug)]
    pub struct CreateDeidentifyTemplate {
        inner: crate::builder::dlp_service::CreateDeidentifyTemplate,
        runtime: Arc<Runtime>,
    }

    impl CreateDeidentifyTemplate {
        pub(crate) fn new(inner: crate::builder::dlp_service::CreateDeidentifyTemplate, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDeidentifyTemplateRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::DeidentifyTemplate> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [CreateDeidentifyTemplate::set_parent][crate::builder::dlp_service::CreateDeidentifyTemplate::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [CreateDeidentifyTemplate::set_deidentify_template][crate::builder::dlp_service::CreateDeidentifyTemplate::set_deidentify_template].
        pub fn set_deidentify_template<T: std::convert::Into<crate::model::DeidentifyTemplate>>(self, v: T) -> Self {
            Self::new(self.inner.set_deidentify_template(v), self.runtime)
        }

        /// See [CreateDeidentifyTemplate::set_or_clear_deidentify_template][crate::builder::dlp_service::CreateDeidentifyTemplate::set_or_clear_deidentify_template].
        pub fn set_or_clear_deidentify_template<T: std::convert::Into<crate::model::DeidentifyTemplate>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_deidentify_template(v), self.runtime)
        }

        /// See [CreateDeidentifyTemplate::set_template_id][crate::builder::dlp_service::CreateDeidentifyTemplate::set_template_id].
        pub fn set_template_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_template_id(v), self.runtime)
        }

        /// See [CreateDeidentifyTemplate::set_location_id][crate::builder::dlp_service::CreateDeidentifyTemplate::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDeidentifyTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::update_deidentify_template][super::DlpService::update_deidentify_template] calls.
    #[derive(Debug)]
    pub struct UpdateDeidentifyTemplate {
        inner: crate::builder::dlp_service::UpdateDeidentifyTemplate,
        runtime: Arc<Runtime>,
    }

    impl UpdateDeidentifyTemplate {
        pub(crate) fn new(inner: crate::builder::dlp_service::UpdateDeidentifyTemplate, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateDeidentifyTemplateRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::DeidentifyTemplate> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [UpdateDeidentifyTemplate::set_name][crate::builder::dlp_service::UpdateDeidentifyTemplate::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }

        /// See [UpdateDeidentifyTemplate::set_deidentify_template][crate::builder::dlp_service::UpdateDeidentifyTemplate::set_deidentify_template].
        pub fn set_deidentify_template<T: std::convert::Into<crate::model::DeidentifyTemplate>>(self, v: T) -> Self {
            Self::new(self.inner.set_deidentify_template(v), self.runtime)
        }

        /// See [UpdateDeidentifyTemplate::set_or_clear_deidentify_template][crate::builder::dlp_service::UpdateDeidentifyTemplate::set_or_clear_deidentify_template].
        pub fn set_or_clear_deidentify_template<T: std::convert::Into<crate::model::DeidentifyTemplate>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_deidentify_template(v), self.runtime)
        }

        /// See [UpdateDeidentifyTemplate::set_update_mask][crate::builder::dlp_service::UpdateDeidentifyTemplate::set_update_mask].
        pub fn set_update_mask<T: std::convert::Into<prost_types::FieldMask>>(self, v: T) -> Self {
            Self::new(self.inner.set_update_mask(v), self.runtime)
        }

        /// See [UpdateDeidentifyTemplate::set_or_clear_update_mask][crate::builder::dlp_service::UpdateDeidentifyTemplate::set_or_clear_update_mask].
        pub fn set_or_clear_update_mask<T: std::convert::Into<prost_types::FieldMask>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_update_mask(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateDeidentifyTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::get_deidentify_template][super::DlpService::get_deidentify_template] calls.
    #[derive(Debug)]
    pub struct GetDeidentifyTemplate {
        inner: crate::builder::dlp_service::GetDeidentifyTemplate,
        runtime: Arc<Runtime>,
    }

    impl GetDeidentifyTemplate {
        pub(crate) fn new(inner: crate::builder::dlp_service::GetDeidentifyTemplate, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDeidentifyTemplateRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::DeidentifyTemplate> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [GetDeidentifyTemplate::set_name][crate::builder::dlp_service::GetDeidentifyTemplate::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDeidentifyTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::list_deidentify_templates][super::DlpService::list_deidentify_templates] calls.
    #[derive(Debug)]
    pub struct ListDeidentifyTemplates {
        inner: crate::builder::dlp_service::ListDeidentifyTemplates,
        runtime: Arc<Runtime>,
    }

    impl ListDeidentifyTemplates {
        pub(crate) fn new(inner: crate::builder::dlp_service::ListDeidentifyTemplates, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDeidentifyTemplatesRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::ListDeidentifyTemplatesResponse> {
            self.runtime.block_on(self.inner.send())
        }

        /// Iterates over the pages in the collection.
        pub fn pages(self) -> Pages<crate::model::ListDeidentifyTemplatesResponse, gax::error::Error> {
            Pages::new(self.runtime, self.inner.by_page())
        }

        /// Iterates over the items in the collection.
        pub fn items(self) -> Items<crate::model::ListDeidentifyTemplatesResponse, gax::error::Error> {
            self.pages().items()
        }

        /// See [ListDeidentifyTemplates::set_parent][crate::builder::dlp_service::ListDeidentifyTemplates::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [ListDeidentifyTemplates::set_page_token][crate::builder::dlp_service::ListDeidentifyTemplates::set_page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_page_token(v), self.runtime)
        }

        /// See [ListDeidentifyTemplates::set_page_size][crate::builder::dlp_service::ListDeidentifyTemplates::set_page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(self, v: T) -> Self {
            Self::new(self.inner.set_page_size(v), self.runtime)
        }

        /// See [ListDeidentifyTemplates::set_order_by][crate::builder::dlp_service::ListDeidentifyTemplates::set_order_by].
        pub fn set_order_by<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_order_by(v), self.runtime)
        }

        /// See [ListDeidentifyTemplates::set_location_id][crate::builder::dlp_service::ListDeidentifyTemplates::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDeidentifyTemplates {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::delete_deidentify_template][super::DlpService::delete_deidentify_template] calls.
    #[derive(Debug)]
    pub struct DeleteDeidentifyTemplate {
        inner: crate::builder::dlp_service::DeleteDeidentifyTemplate,
        runtime: Arc<Runtime>,
    }

    impl DeleteDeidentifyTemplate {
        pub(crate) fn new(inner: crate::builder::dlp_service::DeleteDeidentifyTemplate, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDeidentifyTemplateRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::Empty> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [DeleteDeidentifyTemplate::set_name][crate::builder::dlp_service::DeleteDeidentifyTemplate::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDeidentifyTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::create_job_trigger][super::DlpService::create_job_trigger] calls.
    #[derive(Debug)]
    pub struct CreateJobTrigger {
        inner: crate::builder::dlp_service::CreateJobTrigger,
        runtime: Arc<Runtime>,
    }

    impl CreateJobTrigger {
        pub(crate) fn new(inner: crate::builder::dlp_service::CreateJobTrigger, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateJobTriggerRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::JobTrigger> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [CreateJobTrigger::set_parent][crate::builder::dlp_service::CreateJobTrigger::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [CreateJobTrigger::set_job_trigger][crate::builder::dlp_service::CreateJobTrigger::set_job_trigger].
        pub fn set_job_trigger<T: std::convert::Into<crate::model::JobTrigger>>(self, v: T) -> Self {
            Self::new(self.inner.set_job_trigger(v), self.runtime)
        }

        /// See [CreateJobTrigger::set_or_clear_job_trigger][crate::builder::dlp_service::CreateJobTrigger::set_or_clear_job_trigger].
        pub fn set_or_clear_job_trigger<T: std::convert::Into<crate::model::JobTrigger>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_job_trigger(v), self.runtime)
        }

        /// See [CreateJobTrigger::set_trigger_id][crate::builder::dlp_service::CreateJobTrigger::set_trigger_id].
        pub fn set_trigger_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_trigger_id(v), self.runtime)
        }

        /// See [CreateJobTrigger::set_location_id][crate::builder::dlp_service::CreateJobTrigger::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateJobTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::update_job_trigger][super::DlpService::update_job_trigger] calls.
    #[derive(Debug)]
    pub struct UpdateJobTrigger {
        inner: crate::builder::dlp_service::UpdateJobTrigger,
        runtime: Arc<Runtime>,
    }

    impl UpdateJobTrigger {
        pub(crate) fn new(inner: crate::builder::dlp_service::UpdateJobTrigger, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateJobTriggerRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::JobTrigger> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [UpdateJobTrigger::set_name][crate::builder::dlp_service::UpdateJobTrigger::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }

        /// See [UpdateJobTrigger::set_job_trigger][crate::builder::dlp_service::UpdateJobTrigger::set_job_trigger].
        pub fn set_job_trigger<T: std::convert::Into<crate::model::JobTrigger>>(self, v: T) -> Self {
            Self::new(self.inner.set_job_trigger(v), self.runtime)
        }

        /// See [UpdateJobTrigger::set_or_clear_job_trigger][crate::builder::dlp_service::UpdateJobTrigger::set_or_clear_job_trigger].
        pub fn set_or_clear_job_trigger<T: std::convert::Into<crate::model::JobTrigger>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_job_trigger(v), self.runtime)
        }

        /// See [UpdateJobTrigger::set_update_mask][crate::builder::dlp_service::UpdateJobTrigger::set_update_mask].
        pub fn set_update_mask<T: std::convert::Into<prost_types::FieldMask>>(self, v: T) -> Self {
            Self::new(self.inner.set_update_mask(v), self.runtime)
        }

        /// See [UpdateJobTrigger::set_or_clear_update_mask][crate::builder::dlp_service::UpdateJobTrigger::set_or_clear_update_mask].
        pub fn set_or_clear_update_mask<T: std::convert::Into<prost_types::FieldMask>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_update_mask(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateJobTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::get_job_trigger][super::DlpService::get_job_trigger] calls.
    #[derive(Debug)]
    pub struct GetJobTrigger {
        inner: crate::builder::dlp_service::GetJobTrigger,
        runtime: Arc<Runtime>,
    }

    impl GetJobTrigger {
        pub(crate) fn new(inner: crate::builder::dlp_service::GetJobTrigger, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetJobTriggerRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::JobTrigger> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [GetJobTrigger::set_name][crate::builder::dlp_service::GetJobTrigger::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetJobTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::list_job_triggers][super::DlpService::list_job_triggers] calls.
    #[derive(Debug)]
    pub struct ListJobTriggers {
        inner: crate::builder::dlp_service::ListJobTriggers,
        runtime: Arc<Runtime>,
    }

    impl ListJobTriggers {
        pub(crate) fn new(inner: crate::builder::dlp_service::ListJobTriggers, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListJobTriggersRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::ListJobTriggersResponse> {
            self.runtime.block_on(self.inner.send())
        }

        /// Iterates over the pages in the collection.
        pub fn pages(self) -> Pages<crate::model::ListJobTriggersResponse, gax::error::Error> {
            Pages::new(self.runtime, self.inner.by_page())
        }

        /// Iterates over the items in the collection.
        pub fn items(self) -> Items<crate::model::ListJobTriggersResponse, gax::error::Error> {
            self.pages().items()
        }

        /// See [ListJobTriggers::set_parent][crate::builder::dlp_service::ListJobTriggers::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [ListJobTriggers::set_page_token][crate::builder::dlp_service::ListJobTriggers::set_page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_page_token(v), self.runtime)
        }

        /// See [ListJobTriggers::set_page_size][crate::builder::dlp_service::ListJobTriggers::set_page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(self, v: T) -> Self {
            Self::new(self.inner.set_page_size(v), self.runtime)
        }

        /// See [ListJobTriggers::set_order_by][crate::builder::dlp_service::ListJobTriggers::set_order_by].
        pub fn set_order_by<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_order_by(v), self.runtime)
        }

        /// See [ListJobTriggers::set_filter][crate::builder::dlp_service::ListJobTriggers::set_filter].
        pub fn set_filter<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_filter(v), self.runtime)
        }

        /// See [ListJobTriggers::set_type][crate::builder::dlp_service::ListJobTriggers::set_type].
        pub fn set_type<T: std::convert::Into<crate::model::DlpJobType>>(self, v: T) -> Self {
            Self::new(self.inner.set_type(v), self.runtime)
        }

        /// See [ListJobTriggers::set_location_id][crate::builder::dlp_service::ListJobTriggers::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListJobTriggers {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::delete_job_trigger][super::DlpService::delete_job_trigger] calls.
    #[derive(Debug)]
    pub struct DeleteJobTrigger {
        inner: crate::builder::dlp_service::DeleteJobTrigger,
        runtime: Arc<Runtime>,
    }

    impl DeleteJobTrigger {
        pub(crate) fn new(inner: crate::builder::dlp_service::DeleteJobTrigger, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteJobTriggerRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::Empty> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [DeleteJobTrigger::set_name][crate::builder::dlp_service::DeleteJobTrigger::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteJobTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::activate_job_trigger][super::DlpService::activate_job_trigger] calls.
    #[derive(Debug)]
    pub struct ActivateJobTrigger {
        inner: crate::builder::dlp_service::ActivateJobTrigger,
        runtime: Arc<Runtime>,
    }

    impl ActivateJobTrigger {
        pub(crate) fn new(inner: crate::builder::dlp_service::ActivateJobTrigger, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ActivateJobTriggerRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::DlpJob> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [ActivateJobTrigger::set_name][crate::builder::dlp_service::ActivateJobTrigger::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ActivateJobTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::create_dlp_job][super::DlpService::create_dlp_job] calls.
    #[derive(Debug)]
    pub struct CreateDlpJob {
        inner: crate::builder::dlp_service::CreateDlpJob,
        runtime: Arc<Runtime>,
    }

    impl CreateDlpJob {
        pub(crate) fn new(inner: crate::builder::dlp_service::CreateDlpJob, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDlpJobRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::DlpJob> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [CreateDlpJob::set_parent][crate::builder::dlp_service::CreateDlpJob::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [CreateDlpJob::set_inspect_job][crate::builder::dlp_service::CreateDlpJob::set_inspect_job].
        pub fn set_inspect_job<T: std::convert::Into<crate::model::InspectJobConfig>>(self, v: T) -> Self {
            Self::new(self.inner.set_inspect_job(v), self.runtime)
        }

        /// See [CreateDlpJob::set_risk_job][crate::builder::dlp_service::CreateDlpJob::set_risk_job].
        pub fn set_risk_job<T: std::convert::Into<crate::model::RiskAnalysisJobConfig>>(self, v: T) -> Self {
            Self::new(self.inner.set_risk_job(v), self.runtime)
        }

        /// See [CreateDlpJob::set_job_id][crate::builder::dlp_service::CreateDlpJob::set_job_id].
        pub fn set_job_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_job_id(v), self.runtime)
        }

        /// See [CreateDlpJob::set_location_id][crate::builder::dlp_service::CreateDlpJob::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::list_dlp_jobs][super::DlpService::list_dlp_jobs] calls.
    #[derive(Debug)]
    pub struct ListDlpJobs {
        inner: crate::builder::dlp_service::ListDlpJobs,
        runtime: Arc<Runtime>,
    }

    impl ListDlpJobs {
        pub(crate) fn new(inner: crate::builder::dlp_service::ListDlpJobs, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDlpJobsRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::ListDlpJobsResponse> {
            self.runtime.block_on(self.inner.send())
        }

        /// Iterates over the pages in the collection.
        pub fn pages(self) -> Pages<crate::model::ListDlpJobsResponse, gax::error::Error> {
            Pages::new(self.runtime, self.inner.by_page())
        }

        /// Iterates over the items in the collection.
        pub fn items(self) -> Items<crate::model::ListDlpJobsResponse, gax::error::Error> {
            self.pages().items()
        }

        /// See [ListDlpJobs::set_parent][crate::builder::dlp_service::ListDlpJobs::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [ListDlpJobs::set_filter][crate::builder::dlp_service::ListDlpJobs::set_filter].
        pub fn set_filter<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_filter(v), self.runtime)
        }

        /// See [ListDlpJobs::set_page_size][crate::builder::dlp_service::ListDlpJobs::set_page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(self, v: T) -> Self {
            Self::new(self.inner.set_page_size(v), self.runtime)
        }

        /// See [ListDlpJobs::set_page_token][crate::builder::dlp_service::ListDlpJobs::set_page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_page_token(v), self.runtime)
        }

        /// See [ListDlpJobs::set_type][crate::builder::dlp_service::ListDlpJobs::set_type].
        pub fn set_type<T: std::convert::Into<crate::model::DlpJobType>>(self, v: T) -> Self {
            Self::new(self.inner.set_type(v), self.runtime)
        }

        /// See [ListDlpJobs::set_order_by][crate::builder::dlp_service::ListDlpJobs::set_order_by].
        pub fn set_order_by<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_order_by(v), self.runtime)
        }

        /// See [ListDlpJobs::set_location_id][crate::builder::dlp_service::ListDlpJobs::set_location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_location_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDlpJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::get_dlp_job][super::DlpService::get_dlp_job] calls.
    #[derive(Debug)]
    pub struct GetDlpJob {
        inner: crate::builder::dlp_service::GetDlpJob,
        runtime: Arc<Runtime>,
    }

    impl GetDlpJob {
        pub(crate) fn new(inner: crate::builder::dlp_service::GetDlpJob, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDlpJobRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::DlpJob> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [GetDlpJob::set_name][crate::builder::dlp_service::GetDlpJob::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::delete_dlp_job][super::DlpService::delete_dlp_job] calls.
    #[derive(Debug)]
    pub struct DeleteDlpJob {
        inner: crate::builder::dlp_service::DeleteDlpJob,
        runtime: Arc<Runtime>,
    }

    impl DeleteDlpJob {
        pub(crate) fn new(inner: crate::builder::dlp_service::DeleteDlpJob, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDlpJobRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::Empty> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [DeleteDlpJob::set_name][crate::builder::dlp_service::DeleteDlpJob::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::cancel_dlp_job][super::DlpService::cancel_dlp_job] calls.
    #[derive(Debug)]
    pub struct CancelDlpJob {
        inner: crate::builder::dlp_service::CancelDlpJob,
        runtime: Arc<Runtime>,
    }

    impl CancelDlpJob {
        pub(crate) fn new(inner: crate::builder::dlp_service::CancelDlpJob, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CancelDlpJobRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::Empty> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [CancelDlpJob::set_name][crate::builder::dlp_service::CancelDlpJob::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::create_discovery_config][super::DlpService::create_discovery_config] calls.
    #[derive(Debug)]
    pub struct CreateDiscoveryConfig {
        inner: crate::builder::dlp_service::CreateDiscoveryConfig,
        runtime: Arc<Runtime>,
    }

    impl CreateDiscoveryConfig {
        pub(crate) fn new(inner: crate::builder::dlp_service::CreateDiscoveryConfig, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDiscoveryConfigRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::DiscoveryConfig> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [CreateDiscoveryConfig::set_parent][crate::builder::dlp_service::CreateDiscoveryConfig::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [CreateDiscoveryConfig::set_discovery_config][crate::builder::dlp_service::CreateDiscoveryConfig::set_discovery_config].
        pub fn set_discovery_config<T: std::convert::Into<crate::model::DiscoveryConfig>>(self, v: T) -> Self {
            Self::new(self.inner.set_discovery_config(v), self.runtime)
        }

        /// See [CreateDiscoveryConfig::set_or_clear_discovery_config][crate::builder::dlp_service::CreateDiscoveryConfig::set_or_clear_discovery_config].
        pub fn set_or_clear_discovery_config<T: std::convert::Into<crate::model::DiscoveryConfig>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_discovery_config(v), self.runtime)
        }

        /// See [CreateDiscoveryConfig::set_config_id][crate::builder::dlp_service::CreateDiscoveryConfig::set_config_id].
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_config_id(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDiscoveryConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::update_discovery_config][super::DlpService::update_discovery_config] calls.
    #[derive(Debug)]
    pub struct UpdateDiscoveryConfig {
        inner: crate::builder::dlp_service::UpdateDiscoveryConfig,
        runtime: Arc<Runtime>,
    }

    impl UpdateDiscoveryConfig {
        pub(crate) fn new(inner: crate::builder::dlp_service::UpdateDiscoveryConfig, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateDiscoveryConfigRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::DiscoveryConfig> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [UpdateDiscoveryConfig::set_name][crate::builder::dlp_service::UpdateDiscoveryConfig::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }

        /// See [UpdateDiscoveryConfig::set_discovery_config][crate::builder::dlp_service::UpdateDiscoveryConfig::set_discovery_config].
        pub fn set_discovery_config<T: std::convert::Into<crate::model::DiscoveryConfig>>(self, v: T) -> Self {
            Self::new(self.inner.set_discovery_config(v), self.runtime)
        }

        /// See [UpdateDiscoveryConfig::set_or_clear_discovery_config][crate::builder::dlp_service::UpdateDiscoveryConfig::set_or_clear_discovery_config].
        pub fn set_or_clear_discovery_config<T: std::convert::Into<crate::model::DiscoveryConfig>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_discovery_config(v), self.runtime)
        }

        /// See [UpdateDiscoveryConfig::set_update_mask][crate::builder::dlp_service::UpdateDiscoveryConfig::set_update_mask].
        pub fn set_update_mask<T: std::convert::Into<prost_types::FieldMask>>(self, v: T) -> Self {
            Self::new(self.inner.set_update_mask(v), self.runtime)
        }

        /// See [UpdateDiscoveryConfig::set_or_clear_update_mask][crate::builder::dlp_service::UpdateDiscoveryConfig::set_or_clear_update_mask].
        pub fn set_or_clear_update_mask<T: std::convert::Into<prost_types::FieldMask>>(self, v: std::option::Option<T>) -> Self {
            Self::new(self.inner.set_or_clear_update_mask(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateDiscoveryConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::get_discovery_config][super::DlpService::get_discovery_config] calls.
    #[derive(Debug)]
    pub struct GetDiscoveryConfig {
        inner: crate::builder::dlp_service::GetDiscoveryConfig,
        runtime: Arc<Runtime>,
    }

    impl GetDiscoveryConfig {
        pub(crate) fn new(inner: crate::builder::dlp_service::GetDiscoveryConfig, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDiscoveryConfigRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::DiscoveryConfig> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [GetDiscoveryConfig::set_name][crate::builder::dlp_service::GetDiscoveryConfig::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDiscoveryConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::list_discovery_configs][super::DlpService::list_discovery_configs] calls.
    #[derive(Debug)]
    pub struct ListDiscoveryConfigs {
        inner: crate::builder::dlp_service::ListDiscoveryConfigs,
        runtime: Arc<Runtime>,
    }

    impl ListDiscoveryConfigs {
        pub(crate) fn new(inner: crate::builder::dlp_service::ListDiscoveryConfigs, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDiscoveryConfigsRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::ListDiscoveryConfigsResponse> {
            self.runtime.block_on(self.inner.send())
        }

        /// Iterates over the pages in the collection.
        pub fn pages(self) -> Pages<crate::model::ListDiscoveryConfigsResponse, gax::error::Error> {
            Pages::new(self.runtime, self.inner.by_page())
        }

        /// Iterates over the items in the collection.
        pub fn items(self) -> Items<crate::model::ListDiscoveryConfigsResponse, gax::error::Error> {
            self.pages().items()
        }

        /// See [ListDiscoveryConfigs::set_parent][crate::builder::dlp_service::ListDiscoveryConfigs::set_parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_parent(v), self.runtime)
        }

        /// See [ListDiscoveryConfigs::set_page_token][crate::builder::dlp_service::ListDiscoveryConfigs::set_page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_page_token(v), self.runtime)
        }

        /// See [ListDiscoveryConfigs::set_page_size][crate::builder::dlp_service::ListDiscoveryConfigs::set_page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(self, v: T) -> Self {
            Self::new(self.inner.set_page_size(v), self.runtime)
        }

        /// See [ListDiscoveryConfigs::set_order_by][crate::builder::dlp_service::ListDiscoveryConfigs::set_order_by].
        pub fn set_order_by<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_order_by(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDiscoveryConfigs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }

    /// The blocking request builder for [DlpService::delete_discovery_config][super::DlpService::delete_discovery_config] calls.
    #[derive(Debug)]
    pub struct DeleteDiscoveryConfig {
        inner: crate::builder::dlp_service::DeleteDiscoveryConfig,
        runtime: Arc<Runtime>,
    }

    impl DeleteDiscoveryConfig {
        pub(crate) fn new(inner: crate::builder::dlp_service::DeleteDiscoveryConfig, runtime: Arc<Runtime>) -> Self {
            Self { inner, runtime }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDiscoveryConfigRequest>>(self, v: V) -> Self {
            Self::new(self.inner.with_request(v), self.runtime)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(self, v: V) -> Self {
            Self::new(self.inner.with_options(v), self.runtime)
        }

        /// Sends the request, blocking until the response is received.
        pub fn send(self) -> Result<crate::model::Empty> {
            self.runtime.block_on(self.inner.send())
        }

        /// See [DeleteDiscoveryConfig::set_name][crate::builder::dlp_service::DeleteDiscoveryConfig::set_name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(self, v: T) -> Self {
            Self::new(self.inner.set_name(v), self.runtime)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDiscoveryConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            gax::options::internal::RequestBuilder::request_options(&mut self.inner)
        }
    }
}

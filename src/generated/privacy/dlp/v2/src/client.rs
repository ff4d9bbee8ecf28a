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

use crate::interceptor::DlpServiceInterceptor;
use gax::client_builder::{Error as BuilderError, TransportKind};
use std::sync::Arc;

/// Implements a client for the Sensitive Data Protection (DLP) API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_privacy_dlp_v2::client::DlpService;
/// let client = DlpService::builder().build().await?;
/// // use `client` to make requests to the Sensitive Data Protection (DLP) API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Sensitive Data Protection provides access to a powerful sensitive data
/// inspection, classification, and de-identification platform that works
/// on text, images, and Google Cloud storage repositories.
/// To learn more about concepts and find how-to guides see
/// <https://cloud.google.com/sensitive-data-protection/docs/>.
///
/// # Configuration
///
/// To configure `DlpService` use the `with_*` methods in the type returned
/// by [builder()][DlpService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://dlp.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks may want to override this
///   default. The `MTLS_ENDPOINT_POLICY` and `CLIENT_CERT_POLICY` environment
///   variables select the mutual TLS endpoint when no endpoint is set.
/// * [with_credentials()]: by default this client uses
///   [application default credentials]. Applications using custom
///   authentication may need to override this default.
/// * [with_transport_kind()]: by default this client uses gRPC. Interceptors
///   require the HTTP/JSON transport.
///
/// [with_endpoint()]: super::builder::dlp_service::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::dlp_service::ClientBuilder::with_credentials
/// [with_transport_kind()]: super::builder::dlp_service::ClientBuilder::with_transport_kind
/// [application default credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `DlpService` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `DlpService` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DlpService {
    inner: Arc<dyn super::stub::dynamic::DlpService>,
}

impl DlpService {
    /// Returns a builder for [DlpService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_privacy_dlp_v2::client::DlpService;
    /// let client = DlpService::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::dlp_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::dlp_service::client::Factory::default(),
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::DlpService + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
        factory: super::builder::dlp_service::client::Factory,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config, factory).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
        factory: super::builder::dlp_service::client::Factory,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::DlpService>> {
        if let Some(stub) = factory.stub {
            if conf.has_transport_options() {
                return Err(BuilderError::configuration(
                    "a custom stub cannot be combined with credentials, scopes, or an API key",
                ));
            }
            return Ok(stub);
        }
        Self::build_transport(conf, factory.interceptor).await
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
        interceptor: Option<Arc<dyn DlpServiceInterceptor>>,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::DlpService>> {
        let tracing = gaxi::options::tracing_enabled(&conf);
        match conf.transport {
            TransportKind::Rest => {
                let stub = super::transport::DlpService::new(conf, interceptor).await?;
                Ok(Self::decorate(stub, tracing))
            }
            TransportKind::Grpc => {
                if interceptor.is_some() {
                    return Err(BuilderError::configuration(
                        "interceptors require the HTTP/JSON transport",
                    ));
                }
                let stub = super::transport::DlpServiceGrpc::new(conf).await?;
                Ok(Self::decorate(stub, tracing))
            }
        }
    }

    fn decorate<T>(stub: T, tracing: bool) -> Arc<dyn super::stub::dynamic::DlpService>
    where
        T: super::stub::DlpService + 'static,
    {
        if tracing {
            return Arc::new(super::tracing::DlpService::new(stub));
        }
        Arc::new(stub)
    }

    /// Finds potentially sensitive info in content.
    /// This method has limits on input size, processing time, and output size.
    pub fn inspect_content(&self) -> super::builder::dlp_service::InspectContent {
        super::builder::dlp_service::InspectContent::new(self.inner.clone())
    }

    /// De-identifies potentially sensitive info from a ContentItem.
    /// This method has limits on input size and output size.
    pub fn deidentify_content(&self) -> super::builder::dlp_service::DeidentifyContent {
        super::builder::dlp_service::DeidentifyContent::new(self.inner.clone())
    }

    /// Re-identifies content that has been de-identified.
    pub fn reidentify_content(&self) -> super::builder::dlp_service::ReidentifyContent {
        super::builder::dlp_service::ReidentifyContent::new(self.inner.clone())
    }

    /// Returns a list of the sensitive information types that the DLP API
    /// supports.
    ///
    /// The flattened parameters are `parent`.
    pub fn list_info_types(&self) -> super::builder::dlp_service::ListInfoTypes {
        super::builder::dlp_service::ListInfoTypes::new(self.inner.clone())
    }

    /// Creates an InspectTemplate.
    ///
    /// The flattened parameters are `parent`, `inspect_template`.
    pub fn create_inspect_template(&self) -> super::builder::dlp_service::CreateInspectTemplate {
        super::builder::dlp_service::CreateInspectTemplate::new(self.inner.clone())
    }

    /// Updates an InspectTemplate.
    ///
    /// The flattened parameters are `name`, `inspect_template`, `update_mask`.
    pub fn update_inspect_template(&self) -> super::builder::dlp_service::UpdateInspectTemplate {
        super::builder::dlp_service::UpdateInspectTemplate::new(self.inner.clone())
    }

    /// Gets an InspectTemplate.
    ///
    /// The flattened parameters are `name`.
    pub fn get_inspect_template(&self) -> super::builder::dlp_service::GetInspectTemplate {
        super::builder::dlp_service::GetInspectTemplate::new(self.inner.clone())
    }

    /// Lists InspectTemplates.
    ///
    /// The flattened parameters are `parent`.
    pub fn list_inspect_templates(&self) -> super::builder::dlp_service::ListInspectTemplates {
        super::builder::dlp_service::ListInspectTemplates::new(self.inner.clone())
    }

    /// Deletes an InspectTemplate.
    ///
    /// The flattened parameters are `name`.
    pub fn delete_inspect_template(&self) -> super::builder::dlp_service::DeleteInspectTemplate {
        super::builder::dlp_service::DeleteInspectTemplate::new(self.inner.clone())
    }

    /// Creates a DeidentifyTemplate.
    ///
    /// The flattened parameters are `parent`, `deidentify_template`.
    pub fn create_deidentify_template(&self) -> super::builder::dlp_service::CreateDeidentifyTemplate {
        super::builder::dlp_service::CreateDeidentifyTemplate::new(self.inner.clone())
    }

    /// Updates a DeidentifyTemplate.
    ///
    /// The flattened parameters are `name`, `deidentify_template`, `update_mask`.
    pub fn update_deidentify_template(&self) -> super::builder::dlp_service::UpdateDeidentifyTemplate {
        super::builder::dlp_service::UpdateDeidentifyTemplate::new(self.inner.clone())
    }

    /// Gets a DeidentifyTemplate.
    ///
    /// The flattened parameters are `name`.
    pub fn get_deidentify_template(&self) -> super::builder::dlp_service::GetDeidentifyTemplate {
        super::builder::dlp_service::GetDeidentifyTemplate::new(self.inner.clone())
    }

    /// Lists DeidentifyTemplates.
    ///
    /// The flattened parameters are `parent`.
    pub fn list_deidentify_templates(&self) -> super::builder::dlp_service::ListDeidentifyTemplates {
        super::builder::dlp_service::ListDeidentifyTemplates::new(self.inner.clone())
    }

    /// Deletes a DeidentifyTemplate.
    ///
    /// The flattened parameters are `name`.
    pub fn delete_deidentify_template(&self) -> super::builder::dlp_service::DeleteDeidentifyTemplate {
        super::builder::dlp_service::DeleteDeidentifyTemplate::new(self.inner.clone())
    }

    /// Creates a JobTrigger.
    ///
    /// The flattened parameters are `parent`, `job_trigger`.
    pub fn create_job_trigger(&self) -> super::builder::dlp_service::CreateJobTrigger {
        super::builder::dlp_service::CreateJobTrigger::new(self.inner.clone())
    }

    /// Updates a JobTrigger.
    ///
    /// The flattened parameters are `name`, `job_trigger`, `update_mask`.
    pub fn update_job_trigger(&self) -> super::builder::dlp_service::UpdateJobTrigger {
        super::builder::dlp_service::UpdateJobTrigger::new(self.inner.clone())
    }

    /// Gets a JobTrigger.
    ///
    /// The flattened parameters are `name`.
    pub fn get_job_trigger(&self) -> super::builder::dlp_service::GetJobTrigger {
        super::builder::dlp_service::GetJobTrigger::new(self.inner.clone())
    }

    /// Lists JobTriggers.
    ///
    /// The flattened parameters are `parent`.
    pub fn list_job_triggers(&self) -> super::builder::dlp_service::ListJobTriggers {
        super::builder::dlp_service::ListJobTriggers::new(self.inner.clone())
    }

    /// Deletes a JobTrigger.
    ///
    /// The flattened parameters are `name`.
    pub fn delete_job_trigger(&self) -> super::builder::dlp_service::DeleteJobTrigger {
        super::builder::dlp_service::DeleteJobTrigger::new(self.inner.clone())
    }

    /// Activates a job trigger. Causes the immediate execute of a trigger
    /// instead of waiting on the trigger event to occur.
    pub fn activate_job_trigger(&self) -> super::builder::dlp_service::ActivateJobTrigger {
        super::builder::dlp_service::ActivateJobTrigger::new(self.inner.clone())
    }

    /// Creates a new job to inspect storage or calculate risk metrics.
    ///
    /// The flattened parameters are `parent`, `inspect_job`, `risk_job`.
    pub fn create_dlp_job(&self) -> super::builder::dlp_service::CreateDlpJob {
        super::builder::dlp_service::CreateDlpJob::new(self.inner.clone())
    }

    /// Lists DlpJobs that match the specified filter in the request.
    ///
    /// The flattened parameters are `parent`.
    pub fn list_dlp_jobs(&self) -> super::builder::dlp_service::ListDlpJobs {
        super::builder::dlp_service::ListDlpJobs::new(self.inner.clone())
    }

    /// Gets the latest state of a long-running DlpJob.
    ///
    /// The flattened parameters are `name`.
    pub fn get_dlp_job(&self) -> super::builder::dlp_service::GetDlpJob {
        super::builder::dlp_service::GetDlpJob::new(self.inner.clone())
    }

    /// Deletes a long-running DlpJob. This method indicates that the client is
    /// no longer interested in the DlpJob result. The job will be canceled if
    /// possible.
    ///
    /// The flattened parameters are `name`.
    pub fn delete_dlp_job(&self) -> super::builder::dlp_service::DeleteDlpJob {
        super::builder::dlp_service::DeleteDlpJob::new(self.inner.clone())
    }

    /// Starts asynchronous cancellation on a long-running DlpJob. The server
    /// makes a best effort to cancel the DlpJob, but success is not
    /// guaranteed.
    pub fn cancel_dlp_job(&self) -> super::builder::dlp_service::CancelDlpJob {
        super::builder::dlp_service::CancelDlpJob::new(self.inner.clone())
    }

    /// Creates a DiscoveryConfig.
    ///
    /// The flattened parameters are `parent`, `discovery_config`.
    pub fn create_discovery_config(&self) -> super::builder::dlp_service::CreateDiscoveryConfig {
        super::builder::dlp_service::CreateDiscoveryConfig::new(self.inner.clone())
    }

    /// Updates a DiscoveryConfig.
    ///
    /// The flattened parameters are `name`, `discovery_config`, `update_mask`.
    pub fn update_discovery_config(&self) -> super::builder::dlp_service::UpdateDiscoveryConfig {
        super::builder::dlp_service::UpdateDiscoveryConfig::new(self.inner.clone())
    }

    /// Gets a DiscoveryConfig.
    ///
    /// The flattened parameters are `name`.
    pub fn get_discovery_config(&self) -> super::builder::dlp_service::GetDiscoveryConfig {
        super::builder::dlp_service::GetDiscoveryConfig::new(self.inner.clone())
    }

    /// Lists DiscoveryConfigs.
    ///
    /// The flattened parameters are `parent`.
    pub fn list_discovery_configs(&self) -> super::builder::dlp_service::ListDiscoveryConfigs {
        super::builder::dlp_service::ListDiscoveryConfigs::new(self.inner.clone())
    }

    /// Deletes a DiscoveryConfig.
    ///
    /// The flattened parameters are `name`.
    pub fn delete_discovery_config(&self) -> super::builder::dlp_service::DeleteDiscoveryConfig {
        super::builder::dlp_service::DeleteDiscoveryConfig::new(self.inner.clone())
    }

    /// Releases the underlying channel or session.
    ///
    /// Closing is idempotent. Any call made after `close()`, including calls
    /// on clones of this client, fails with an error where
    /// [is_closed()][gax::error::Error::is_closed] is true.
    pub fn close(&self) {
        self.inner.close()
    }
}

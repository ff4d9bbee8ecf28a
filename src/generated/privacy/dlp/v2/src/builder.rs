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

pub mod dlp_service {
    use crate::Result;
    use crate::interceptor::DlpServiceInterceptor;
    use std::sync::Arc;

    /// A builder for [DlpService][crate::client::DlpService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_privacy_dlp_v2::*;
    /// # use builder::dlp_service::ClientBuilder;
    /// # use client::DlpService;
    /// let builder : ClientBuilder = DlpService::builder();
    /// let client = builder
    ///     .with_endpoint("https://dlp.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::DlpService;
        use std::sync::Arc;

        /// Creates the client, holding the service-specific options.
        #[derive(Clone, Debug, Default)]
        pub struct Factory {
            pub(crate) interceptor: Option<Arc<dyn crate::interceptor::DlpServiceInterceptor>>,
            pub(crate) stub: Option<Arc<dyn crate::stub::dynamic::DlpService>>,
        }

        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DlpService;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config, self).await
            }
        }
    }

    /// Options for [ClientBuilder] that only apply to `DlpService`.
    pub trait ClientBuilderExt {
        /// Installs `v` as the interceptor for all calls.
        ///
        /// Interceptors require the HTTP/JSON transport, building a gRPC client
        /// with an interceptor fails with a configuration error.
        fn with_interceptor<T: DlpServiceInterceptor + 'static>(self, v: T) -> Self;

        /// Uses `v` to make all calls, instead of a transport created by the
        /// client library.
        ///
        /// Building the client fails with a configuration error if the builder
        /// also sets options that only apply to a transport, such as the
        /// credentials or scopes.
        fn with_stub<T: crate::stub::DlpService + 'static>(self, v: T) -> Self;
    }

    impl ClientBuilderExt for ClientBuilder {
        fn with_interceptor<T: DlpServiceInterceptor + 'static>(mut self, v: T) -> Self {
            gax::client_builder::internal::factory_mut(&mut self).interceptor = Some(Arc::new(v));
            self
        }

        fn with_stub<T: crate::stub::DlpService + 'static>(mut self, v: T) -> Self {
            gax::client_builder::internal::factory_mut(&mut self).stub = Some(Arc::new(v));
            self
        }
    }

    /// Common implementation for [crate::client::DlpService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::DlpService>,
        request: R,
        options: gax::options::RequestOptions,
        has_request: bool,
        flattened: Vec<&'static str>,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::DlpService>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
                has_request: false,
                flattened: Vec::new(),
            }
        }

        fn flatten(&mut self, name: &'static str) {
            if !self.flattened.contains(&name) {
                self.flattened.push(name);
            }
        }

        fn check(&self) -> Result<()> {
            gax::flattened::check(self.has_request, &self.flattened)
        }
    }

    // Prepends the routing header to the application metadata.
    fn routed(
        params: &[(&str, &str)],
        options: gax::options::RequestOptions,
    ) -> gax::options::RequestOptions {
        let metadata = gax::routing::with_routing_header(params, options.metadata());
        gax::options::internal::set_metadata(options, metadata)
    }

    /// The request builder for [DlpService::inspect_content][crate::client::DlpService::inspect_content] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::InspectContent;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> InspectContent {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct InspectContent(RequestBuilder<crate::model::InspectContentRequest>);

    impl InspectContent {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::InspectContentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::InspectContentResponse> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .inspect_content(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::InspectContentRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [inspect_config][crate::model::InspectContentRequest::inspect_config].
        pub fn set_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(mut self, v: T) -> Self {
            self.0.request.inspect_config = Some(v.into());
            self
        }

        /// Sets or clears the value of [inspect_config][crate::model::InspectContentRequest::inspect_config].
        pub fn set_or_clear_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.inspect_config = v.map(|x| x.into());
            self
        }

        /// Sets the value of [item][crate::model::InspectContentRequest::item].
        pub fn set_item<T: std::convert::Into<crate::model::ContentItem>>(mut self, v: T) -> Self {
            self.0.request.item = Some(v.into());
            self
        }

        /// Sets or clears the value of [item][crate::model::InspectContentRequest::item].
        pub fn set_or_clear_item<T: std::convert::Into<crate::model::ContentItem>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.item = v.map(|x| x.into());
            self
        }

        /// Sets the value of [inspect_template_name][crate::model::InspectContentRequest::inspect_template_name].
        pub fn set_inspect_template_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.inspect_template_name = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::InspectContentRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InspectContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::deidentify_content][crate::client::DlpService::deidentify_content] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::DeidentifyContent;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeidentifyContent {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeidentifyContent(RequestBuilder<crate::model::DeidentifyContentRequest>);

    impl DeidentifyContent {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::DeidentifyContentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeidentifyContentResponse> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .deidentify_content(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::DeidentifyContentRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [deidentify_config][crate::model::DeidentifyContentRequest::deidentify_config].
        pub fn set_deidentify_config<T: std::convert::Into<crate::model::DeidentifyConfig>>(mut self, v: T) -> Self {
            self.0.request.deidentify_config = Some(v.into());
            self
        }

        /// Sets or clears the value of [deidentify_config][crate::model::DeidentifyContentRequest::deidentify_config].
        pub fn set_or_clear_deidentify_config<T: std::convert::Into<crate::model::DeidentifyConfig>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.deidentify_config = v.map(|x| x.into());
            self
        }

        /// Sets the value of [inspect_config][crate::model::DeidentifyContentRequest::inspect_config].
        pub fn set_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(mut self, v: T) -> Self {
            self.0.request.inspect_config = Some(v.into());
            self
        }

        /// Sets or clears the value of [inspect_config][crate::model::DeidentifyContentRequest::inspect_config].
        pub fn set_or_clear_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.inspect_config = v.map(|x| x.into());
            self
        }

        /// Sets the value of [item][crate::model::DeidentifyContentRequest::item].
        pub fn set_item<T: std::convert::Into<crate::model::ContentItem>>(mut self, v: T) -> Self {
            self.0.request.item = Some(v.into());
            self
        }

        /// Sets or clears the value of [item][crate::model::DeidentifyContentRequest::item].
        pub fn set_or_clear_item<T: std::convert::Into<crate::model::ContentItem>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.item = v.map(|x| x.into());
            self
        }

        /// Sets the value of [inspect_template_name][crate::model::DeidentifyContentRequest::inspect_template_name].
        pub fn set_inspect_template_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.inspect_template_name = v.into();
            self
        }

        /// Sets the value of [deidentify_template_name][crate::model::DeidentifyContentRequest::deidentify_template_name].
        pub fn set_deidentify_template_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.deidentify_template_name = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::DeidentifyContentRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeidentifyContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::reidentify_content][crate::client::DlpService::reidentify_content] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::ReidentifyContent;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ReidentifyContent {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ReidentifyContent(RequestBuilder<crate::model::ReidentifyContentRequest>);

    impl ReidentifyContent {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::ReidentifyContentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ReidentifyContentResponse> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .reidentify_content(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::ReidentifyContentRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [reidentify_config][crate::model::ReidentifyContentRequest::reidentify_config].
        pub fn set_reidentify_config<T: std::convert::Into<crate::model::DeidentifyConfig>>(mut self, v: T) -> Self {
            self.0.request.reidentify_config = Some(v.into());
            self
        }

        /// Sets or clears the value of [reidentify_config][crate::model::ReidentifyContentRequest::reidentify_config].
        pub fn set_or_clear_reidentify_config<T: std::convert::Into<crate::model::DeidentifyConfig>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.reidentify_config = v.map(|x| x.into());
            self
        }

        /// Sets the value of [inspect_config][crate::model::ReidentifyContentRequest::inspect_config].
        pub fn set_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(mut self, v: T) -> Self {
            self.0.request.inspect_config = Some(v.into());
            self
        }

        /// Sets or clears the value of [inspect_config][crate::model::ReidentifyContentRequest::inspect_config].
        pub fn set_or_clear_inspect_config<T: std::convert::Into<crate::model::InspectConfig>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.inspect_config = v.map(|x| x.into());
            self
        }

        /// Sets the value of [item][crate::model::ReidentifyContentRequest::item].
        pub fn set_item<T: std::convert::Into<crate::model::ContentItem>>(mut self, v: T) -> Self {
            self.0.request.item = Some(v.into());
            self
        }

        /// Sets or clears the value of [item][crate::model::ReidentifyContentRequest::item].
        pub fn set_or_clear_item<T: std::convert::Into<crate::model::ContentItem>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.item = v.map(|x| x.into());
            self
        }

        /// Sets the value of [inspect_template_name][crate::model::ReidentifyContentRequest::inspect_template_name].
        pub fn set_inspect_template_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.inspect_template_name = v.into();
            self
        }

        /// Sets the value of [reidentify_template_name][crate::model::ReidentifyContentRequest::reidentify_template_name].
        pub fn set_reidentify_template_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.reidentify_template_name = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::ReidentifyContentRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ReidentifyContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::list_info_types][crate::client::DlpService::list_info_types] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::ListInfoTypes;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListInfoTypes {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListInfoTypes(RequestBuilder<crate::model::ListInfoTypesRequest>);

    impl ListInfoTypes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::ListInfoTypesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListInfoTypesResponse> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            (*stub)
                .list_info_types(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::ListInfoTypesRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [language_code][crate::model::ListInfoTypesRequest::language_code].
        pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.language_code = v.into();
            self
        }

        /// Sets the value of [filter][crate::model::ListInfoTypesRequest::filter].
        pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::ListInfoTypesRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListInfoTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::create_inspect_template][crate::client::DlpService::create_inspect_template] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::CreateInspectTemplate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateInspectTemplate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateInspectTemplate(RequestBuilder<crate::model::CreateInspectTemplateRequest>);

    impl CreateInspectTemplate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::CreateInspectTemplateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::InspectTemplate> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .create_inspect_template(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateInspectTemplateRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [inspect_template][crate::model::CreateInspectTemplateRequest::inspect_template].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_inspect_template<T: std::convert::Into<crate::model::InspectTemplate>>(mut self, v: T) -> Self {
            self.0.request.inspect_template = Some(v.into());
            self.0.flatten("inspect_template");
            self
        }

        /// Sets or clears the value of [inspect_template][crate::model::CreateInspectTemplateRequest::inspect_template].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_inspect_template<T: std::convert::Into<crate::model::InspectTemplate>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.inspect_template = v.map(|x| x.into());
            self.0.flatten("inspect_template");
            self
        }

        /// Sets the value of [template_id][crate::model::CreateInspectTemplateRequest::template_id].
        pub fn set_template_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.template_id = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::CreateInspectTemplateRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateInspectTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::update_inspect_template][crate::client::DlpService::update_inspect_template] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::UpdateInspectTemplate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UpdateInspectTemplate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateInspectTemplate(RequestBuilder<crate::model::UpdateInspectTemplateRequest>);

    impl UpdateInspectTemplate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::UpdateInspectTemplateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::InspectTemplate> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .update_inspect_template(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::UpdateInspectTemplateRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }

        /// Sets the value of [inspect_template][crate::model::UpdateInspectTemplateRequest::inspect_template].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_inspect_template<T: std::convert::Into<crate::model::InspectTemplate>>(mut self, v: T) -> Self {
            self.0.request.inspect_template = Some(v.into());
            self.0.flatten("inspect_template");
            self
        }

        /// Sets or clears the value of [inspect_template][crate::model::UpdateInspectTemplateRequest::inspect_template].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_inspect_template<T: std::convert::Into<crate::model::InspectTemplate>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.inspect_template = v.map(|x| x.into());
            self.0.flatten("inspect_template");
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateInspectTemplateRequest::update_mask].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_update_mask<T: std::convert::Into<prost_types::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self.0.flatten("update_mask");
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateInspectTemplateRequest::update_mask].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_update_mask<T: std::convert::Into<prost_types::FieldMask>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.update_mask = v.map(|x| x.into());
            self.0.flatten("update_mask");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateInspectTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::get_inspect_template][crate::client::DlpService::get_inspect_template] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::GetInspectTemplate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetInspectTemplate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetInspectTemplate(RequestBuilder<crate::model::GetInspectTemplateRequest>);

    impl GetInspectTemplate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::GetInspectTemplateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::InspectTemplate> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .get_inspect_template(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetInspectTemplateRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetInspectTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::list_inspect_templates][crate::client::DlpService::list_inspect_templates] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::ListInspectTemplates;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListInspectTemplates {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListInspectTemplates(RequestBuilder<crate::model::ListInspectTemplatesRequest>);

    impl ListInspectTemplates {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::ListInspectTemplatesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListInspectTemplatesResponse> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .list_inspect_templates(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        ///
        /// The routing header is computed once, and sent with every page
        /// request.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListInspectTemplatesResponse, gax::error::Error> {
            let RequestBuilder {
                stub,
                request,
                options,
                has_request,
                flattened,
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            let metadata = options.metadata().to_vec();
            let token = request.page_token.clone();
            let execute = move |token: String| {
                let mut request = request.clone();
                request.page_token = token;
                let stub = stub.clone();
                let options = options.clone();
                let flattened = flattened.clone();
                async move {
                    gax::flattened::check(has_request, &flattened)?;
                    stub.list_inspect_templates(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };
            gax::paginator::Paginator::new(token, metadata, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListInspectTemplatesResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListInspectTemplatesRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [page_token][crate::model::ListInspectTemplatesRequest::page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListInspectTemplatesRequest::page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [order_by][crate::model::ListInspectTemplatesRequest::order_by].
        pub fn set_order_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::ListInspectTemplatesRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListInspectTemplates {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::delete_inspect_template][crate::client::DlpService::delete_inspect_template] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::DeleteInspectTemplate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteInspectTemplate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteInspectTemplate(RequestBuilder<crate::model::DeleteInspectTemplateRequest>);

    impl DeleteInspectTemplate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::DeleteInspectTemplateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Empty> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .delete_inspect_template(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DeleteInspectTemplateRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteInspectTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::create_deidentify_template][crate::client::DlpService::create_deidentify_template] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::CreateDeidentifyTemplate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateDeidentifyTemplate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateDeidentifyTemplate(RequestBuilder<crate::model::CreateDeidentifyTemplateRequest>);

    impl CreateDeidentifyTemplate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::CreateDeidentifyTemplateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeidentifyTemplate> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .create_deidentify_template(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateDeidentifyTemplateRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [deidentify_template][crate::model::CreateDeidentifyTemplateRequest::deidentify_template].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_deidentify_template<T: std::convert::Into<crate::model::DeidentifyTemplate>>(mut self, v: T) -> Self {
            self.0.request.deidentify_template = Some(v.into());
            self.0.flatten("deidentify_template");
            self
        }

        /// Sets or clears the value of [deidentify_template][crate::model::CreateDeidentifyTemplateRequest::deidentify_template].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_deidentify_template<T: std::convert::Into<crate::model::DeidentifyTemplate>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.deidentify_template = v.map(|x| x.into());
            self.0.flatten("deidentify_template");
            self
        }

        /// Sets the value of [template_id][crate::model::CreateDeidentifyTemplateRequest::template_id].
        pub fn set_template_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.template_id = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::CreateDeidentifyTemplateRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDeidentifyTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::update_deidentify_template][crate::client::DlpService::update_deidentify_template] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::UpdateDeidentifyTemplate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UpdateDeidentifyTemplate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateDeidentifyTemplate(RequestBuilder<crate::model::UpdateDeidentifyTemplateRequest>);

    impl UpdateDeidentifyTemplate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::UpdateDeidentifyTemplateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeidentifyTemplate> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .update_deidentify_template(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::UpdateDeidentifyTemplateRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }

        /// Sets the value of [deidentify_template][crate::model::UpdateDeidentifyTemplateRequest::deidentify_template].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_deidentify_template<T: std::convert::Into<crate::model::DeidentifyTemplate>>(mut self, v: T) -> Self {
            self.0.request.deidentify_template = Some(v.into());
            self.0.flatten("deidentify_template");
            self
        }

        /// Sets or clears the value of [deidentify_template][crate::model::UpdateDeidentifyTemplateRequest::deidentify_template].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_deidentify_template<T: std::convert::Into<crate::model::DeidentifyTemplate>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.deidentify_template = v.map(|x| x.into());
            self.0.flatten("deidentify_template");
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateDeidentifyTemplateRequest::update_mask].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_update_mask<T: std::convert::Into<prost_types::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self.0.flatten("update_mask");
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateDeidentifyTemplateRequest::update_mask].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_update_mask<T: std::convert::Into<prost_types::FieldMask>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.update_mask = v.map(|x| x.into());
            self.0.flatten("update_mask");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateDeidentifyTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::get_deidentify_template][crate::client::DlpService::get_deidentify_template] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::GetDeidentifyTemplate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetDeidentifyTemplate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetDeidentifyTemplate(RequestBuilder<crate::model::GetDeidentifyTemplateRequest>);

    impl GetDeidentifyTemplate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::GetDeidentifyTemplateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeidentifyTemplate> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .get_deidentify_template(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetDeidentifyTemplateRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDeidentifyTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::list_deidentify_templates][crate::client::DlpService::list_deidentify_templates] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::ListDeidentifyTemplates;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListDeidentifyTemplates {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListDeidentifyTemplates(RequestBuilder<crate::model::ListDeidentifyTemplatesRequest>);

    impl ListDeidentifyTemplates {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::ListDeidentifyTemplatesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListDeidentifyTemplatesResponse> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .list_deidentify_templates(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        ///
        /// The routing header is computed once, and sent with every page
        /// request.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListDeidentifyTemplatesResponse, gax::error::Error> {
            let RequestBuilder {
                stub,
                request,
                options,
                has_request,
                flattened,
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            let metadata = options.metadata().to_vec();
            let token = request.page_token.clone();
            let execute = move |token: String| {
                let mut request = request.clone();
                request.page_token = token;
                let stub = stub.clone();
                let options = options.clone();
                let flattened = flattened.clone();
                async move {
                    gax::flattened::check(has_request, &flattened)?;
                    stub.list_deidentify_templates(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };
            gax::paginator::Paginator::new(token, metadata, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListDeidentifyTemplatesResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListDeidentifyTemplatesRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [page_token][crate::model::ListDeidentifyTemplatesRequest::page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListDeidentifyTemplatesRequest::page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [order_by][crate::model::ListDeidentifyTemplatesRequest::order_by].
        pub fn set_order_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::ListDeidentifyTemplatesRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDeidentifyTemplates {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::delete_deidentify_template][crate::client::DlpService::delete_deidentify_template] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::DeleteDeidentifyTemplate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteDeidentifyTemplate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteDeidentifyTemplate(RequestBuilder<crate::model::DeleteDeidentifyTemplateRequest>);

    impl DeleteDeidentifyTemplate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::DeleteDeidentifyTemplateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Empty> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .delete_deidentify_template(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DeleteDeidentifyTemplateRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDeidentifyTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::create_job_trigger][crate::client::DlpService::create_job_trigger] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::CreateJobTrigger;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateJobTrigger {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateJobTrigger(RequestBuilder<crate::model::CreateJobTriggerRequest>);

    impl CreateJobTrigger {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::CreateJobTriggerRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::JobTrigger> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .create_job_trigger(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateJobTriggerRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [job_trigger][crate::model::CreateJobTriggerRequest::job_trigger].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_job_trigger<T: std::convert::Into<crate::model::JobTrigger>>(mut self, v: T) -> Self {
            self.0.request.job_trigger = Some(v.into());
            self.0.flatten("job_trigger");
            self
        }

        /// Sets or clears the value of [job_trigger][crate::model::CreateJobTriggerRequest::job_trigger].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_job_trigger<T: std::convert::Into<crate::model::JobTrigger>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.job_trigger = v.map(|x| x.into());
            self.0.flatten("job_trigger");
            self
        }

        /// Sets the value of [trigger_id][crate::model::CreateJobTriggerRequest::trigger_id].
        pub fn set_trigger_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.trigger_id = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::CreateJobTriggerRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateJobTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::update_job_trigger][crate::client::DlpService::update_job_trigger] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::UpdateJobTrigger;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UpdateJobTrigger {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateJobTrigger(RequestBuilder<crate::model::UpdateJobTriggerRequest>);

    impl UpdateJobTrigger {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::UpdateJobTriggerRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::JobTrigger> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .update_job_trigger(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::UpdateJobTriggerRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }

        /// Sets the value of [job_trigger][crate::model::UpdateJobTriggerRequest::job_trigger].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_job_trigger<T: std::convert::Into<crate::model::JobTrigger>>(mut self, v: T) -> Self {
            self.0.request.job_trigger = Some(v.into());
            self.0.flatten("job_trigger");
            self
        }

        /// Sets or clears the value of [job_trigger][crate::model::UpdateJobTriggerRequest::job_trigger].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_job_trigger<T: std::convert::Into<crate::model::JobTrigger>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.job_trigger = v.map(|x| x.into());
            self.0.flatten("job_trigger");
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateJobTriggerRequest::update_mask].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_update_mask<T: std::convert::Into<prost_types::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self.0.flatten("update_mask");
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateJobTriggerRequest::update_mask].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_update_mask<T: std::convert::Into<prost_types::FieldMask>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.update_mask = v.map(|x| x.into());
            self.0.flatten("update_mask");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateJobTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::get_job_trigger][crate::client::DlpService::get_job_trigger] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::GetJobTrigger;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetJobTrigger {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetJobTrigger(RequestBuilder<crate::model::GetJobTriggerRequest>);

    impl GetJobTrigger {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::GetJobTriggerRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::JobTrigger> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .get_job_trigger(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetJobTriggerRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetJobTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::list_job_triggers][crate::client::DlpService::list_job_triggers] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::ListJobTriggers;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListJobTriggers {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListJobTriggers(RequestBuilder<crate::model::ListJobTriggersRequest>);

    impl ListJobTriggers {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::ListJobTriggersRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListJobTriggersResponse> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .list_job_triggers(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        ///
        /// The routing header is computed once, and sent with every page
        /// request.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListJobTriggersResponse, gax::error::Error> {
            let RequestBuilder {
                stub,
                request,
                options,
                has_request,
                flattened,
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            let metadata = options.metadata().to_vec();
            let token = request.page_token.clone();
            let execute = move |token: String| {
                let mut request = request.clone();
                request.page_token = token;
                let stub = stub.clone();
                let options = options.clone();
                let flattened = flattened.clone();
                async move {
                    gax::flattened::check(has_request, &flattened)?;
                    stub.list_job_triggers(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };
            gax::paginator::Paginator::new(token, metadata, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListJobTriggersResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListJobTriggersRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [page_token][crate::model::ListJobTriggersRequest::page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListJobTriggersRequest::page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [order_by][crate::model::ListJobTriggersRequest::order_by].
        pub fn set_order_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }

        /// Sets the value of [filter][crate::model::ListJobTriggersRequest::filter].
        pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [type][crate::model::ListJobTriggersRequest::r#type].
        pub fn set_type<T: std::convert::Into<crate::model::DlpJobType>>(mut self, v: T) -> Self {
            let v: crate::model::DlpJobType = v.into();
            self.0.request.r#type = v as i32;
            self
        }

        /// Sets the value of [location_id][crate::model::ListJobTriggersRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListJobTriggers {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::delete_job_trigger][crate::client::DlpService::delete_job_trigger] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::DeleteJobTrigger;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteJobTrigger {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteJobTrigger(RequestBuilder<crate::model::DeleteJobTriggerRequest>);

    impl DeleteJobTrigger {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::DeleteJobTriggerRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Empty> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .delete_job_trigger(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DeleteJobTriggerRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteJobTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::activate_job_trigger][crate::client::DlpService::activate_job_trigger] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::ActivateJobTrigger;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ActivateJobTrigger {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ActivateJobTrigger(RequestBuilder<crate::model::ActivateJobTriggerRequest>);

    impl ActivateJobTrigger {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::ActivateJobTriggerRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DlpJob> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .activate_job_trigger(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::ActivateJobTriggerRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ActivateJobTrigger {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::create_dlp_job][crate::client::DlpService::create_dlp_job] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::CreateDlpJob;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateDlpJob {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateDlpJob(RequestBuilder<crate::model::CreateDlpJobRequest>);

    impl CreateDlpJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::CreateDlpJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DlpJob> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .create_dlp_job(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateDlpJobRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [job][crate::model::CreateDlpJobRequest::job]
        /// to hold a `InspectJob`.
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_inspect_job<T: std::convert::Into<crate::model::InspectJobConfig>>(mut self, v: T) -> Self {
            self.0.request.job = Some(crate::model::create_dlp_job_request::Job::InspectJob(v.into()));
            self.0.flatten("inspect_job");
            self
        }

        /// Sets the value of [job][crate::model::CreateDlpJobRequest::job]
        /// to hold a `RiskJob`.
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_risk_job<T: std::convert::Into<crate::model::RiskAnalysisJobConfig>>(mut self, v: T) -> Self {
            self.0.request.job = Some(crate::model::create_dlp_job_request::Job::RiskJob(v.into()));
            self.0.flatten("risk_job");
            self
        }

        /// Sets the value of [job_id][crate::model::CreateDlpJobRequest::job_id].
        pub fn set_job_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::CreateDlpJobRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::list_dlp_jobs][crate::client::DlpService::list_dlp_jobs] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::ListDlpJobs;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListDlpJobs {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListDlpJobs(RequestBuilder<crate::model::ListDlpJobsRequest>);

    impl ListDlpJobs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::ListDlpJobsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListDlpJobsResponse> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .list_dlp_jobs(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        ///
        /// The routing header is computed once, and sent with every page
        /// request.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListDlpJobsResponse, gax::error::Error> {
            let RequestBuilder {
                stub,
                request,
                options,
                has_request,
                flattened,
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            let metadata = options.metadata().to_vec();
            let token = request.page_token.clone();
            let execute = move |token: String| {
                let mut request = request.clone();
                request.page_token = token;
                let stub = stub.clone();
                let options = options.clone();
                let flattened = flattened.clone();
                async move {
                    gax::flattened::check(has_request, &flattened)?;
                    stub.list_dlp_jobs(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };
            gax::paginator::Paginator::new(token, metadata, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListDlpJobsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListDlpJobsRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [filter][crate::model::ListDlpJobsRequest::filter].
        pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListDlpJobsRequest::page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListDlpJobsRequest::page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [type][crate::model::ListDlpJobsRequest::r#type].
        pub fn set_type<T: std::convert::Into<crate::model::DlpJobType>>(mut self, v: T) -> Self {
            let v: crate::model::DlpJobType = v.into();
            self.0.request.r#type = v as i32;
            self
        }

        /// Sets the value of [order_by][crate::model::ListDlpJobsRequest::order_by].
        pub fn set_order_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }

        /// Sets the value of [location_id][crate::model::ListDlpJobsRequest::location_id].
        pub fn set_location_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDlpJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::get_dlp_job][crate::client::DlpService::get_dlp_job] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::GetDlpJob;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetDlpJob {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetDlpJob(RequestBuilder<crate::model::GetDlpJobRequest>);

    impl GetDlpJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::GetDlpJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DlpJob> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .get_dlp_job(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetDlpJobRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::delete_dlp_job][crate::client::DlpService::delete_dlp_job] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::DeleteDlpJob;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteDlpJob {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteDlpJob(RequestBuilder<crate::model::DeleteDlpJobRequest>);

    impl DeleteDlpJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::DeleteDlpJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Empty> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .delete_dlp_job(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DeleteDlpJobRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::cancel_dlp_job][crate::client::DlpService::cancel_dlp_job] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::CancelDlpJob;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CancelDlpJob {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CancelDlpJob(RequestBuilder<crate::model::CancelDlpJobRequest>);

    impl CancelDlpJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::CancelDlpJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Empty> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .cancel_dlp_job(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::CancelDlpJobRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelDlpJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::create_discovery_config][crate::client::DlpService::create_discovery_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::CreateDiscoveryConfig;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateDiscoveryConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateDiscoveryConfig(RequestBuilder<crate::model::CreateDiscoveryConfigRequest>);

    impl CreateDiscoveryConfig {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::CreateDiscoveryConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DiscoveryConfig> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .create_discovery_config(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateDiscoveryConfigRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [discovery_config][crate::model::CreateDiscoveryConfigRequest::discovery_config].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_discovery_config<T: std::convert::Into<crate::model::DiscoveryConfig>>(mut self, v: T) -> Self {
            self.0.request.discovery_config = Some(v.into());
            self.0.flatten("discovery_config");
            self
        }

        /// Sets or clears the value of [discovery_config][crate::model::CreateDiscoveryConfigRequest::discovery_config].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_discovery_config<T: std::convert::Into<crate::model::DiscoveryConfig>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.discovery_config = v.map(|x| x.into());
            self.0.flatten("discovery_config");
            self
        }

        /// Sets the value of [config_id][crate::model::CreateDiscoveryConfigRequest::config_id].
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDiscoveryConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::update_discovery_config][crate::client::DlpService::update_discovery_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::UpdateDiscoveryConfig;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UpdateDiscoveryConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateDiscoveryConfig(RequestBuilder<crate::model::UpdateDiscoveryConfigRequest>);

    impl UpdateDiscoveryConfig {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::UpdateDiscoveryConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DiscoveryConfig> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .update_discovery_config(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::UpdateDiscoveryConfigRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }

        /// Sets the value of [discovery_config][crate::model::UpdateDiscoveryConfigRequest::discovery_config].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_discovery_config<T: std::convert::Into<crate::model::DiscoveryConfig>>(mut self, v: T) -> Self {
            self.0.request.discovery_config = Some(v.into());
            self.0.flatten("discovery_config");
            self
        }

        /// Sets or clears the value of [discovery_config][crate::model::UpdateDiscoveryConfigRequest::discovery_config].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_discovery_config<T: std::convert::Into<crate::model::DiscoveryConfig>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.discovery_config = v.map(|x| x.into());
            self.0.flatten("discovery_config");
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateDiscoveryConfigRequest::update_mask].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_update_mask<T: std::convert::Into<prost_types::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self.0.flatten("update_mask");
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateDiscoveryConfigRequest::update_mask].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_or_clear_update_mask<T: std::convert::Into<prost_types::FieldMask>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.update_mask = v.map(|x| x.into());
            self.0.flatten("update_mask");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateDiscoveryConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::get_discovery_config][crate::client::DlpService::get_discovery_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::GetDiscoveryConfig;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetDiscoveryConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetDiscoveryConfig(RequestBuilder<crate::model::GetDiscoveryConfigRequest>);

    impl GetDiscoveryConfig {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::GetDiscoveryConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DiscoveryConfig> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .get_discovery_config(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetDiscoveryConfigRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDiscoveryConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::list_discovery_configs][crate::client::DlpService::list_discovery_configs] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::ListDiscoveryConfigs;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListDiscoveryConfigs {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListDiscoveryConfigs(RequestBuilder<crate::model::ListDiscoveryConfigsRequest>);

    impl ListDiscoveryConfigs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::ListDiscoveryConfigsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListDiscoveryConfigsResponse> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            (*stub)
                .list_discovery_configs(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        ///
        /// The routing header is computed once, and sent with every page
        /// request.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListDiscoveryConfigsResponse, gax::error::Error> {
            let RequestBuilder {
                stub,
                request,
                options,
                has_request,
                flattened,
            } = self.0;
            let options = routed(&[("parent", request.parent.as_str())], options);
            let metadata = options.metadata().to_vec();
            let token = request.page_token.clone();
            let execute = move |token: String| {
                let mut request = request.clone();
                request.page_token = token;
                let stub = stub.clone();
                let options = options.clone();
                let flattened = flattened.clone();
                async move {
                    gax::flattened::check(has_request, &flattened)?;
                    stub.list_discovery_configs(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };
            gax::paginator::Paginator::new(token, metadata, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> gax::paginator::ItemPaginator<crate::model::ListDiscoveryConfigsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListDiscoveryConfigsRequest::parent].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self.0.flatten("parent");
            self
        }

        /// Sets the value of [page_token][crate::model::ListDiscoveryConfigsRequest::page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListDiscoveryConfigsRequest::page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [order_by][crate::model::ListDiscoveryConfigsRequest::order_by].
        pub fn set_order_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDiscoveryConfigs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DlpService::delete_discovery_config][crate::client::DlpService::delete_discovery_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_privacy_dlp_v2::builder::dlp_service::DeleteDiscoveryConfig;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteDiscoveryConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteDiscoveryConfig(RequestBuilder<crate::model::DeleteDiscoveryConfigRequest>);

    impl DeleteDiscoveryConfig {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DlpService>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        ///
        /// The request cannot be combined with the flattened parameters, `send()`
        /// fails with an invalid argument error if both are set.
        pub fn with_request<V: Into<crate::model::DeleteDiscoveryConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self.0.has_request = true;
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Empty> {
            self.0.check()?;
            let RequestBuilder {
                stub,
                request,
                options,
                ..
            } = self.0;
            let options = routed(&[("name", request.name.as_str())], options);
            (*stub)
                .delete_discovery_config(request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DeleteDiscoveryConfigRequest::name].
        ///
        /// This is a flattened parameter, it cannot be combined with
        /// [with_request][Self::with_request].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self.0.flatten("name");
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDiscoveryConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

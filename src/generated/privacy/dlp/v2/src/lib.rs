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

//! Google Cloud Client Libraries for Rust - Sensitive Data Protection (DLP)
//!
//! This crate contains traits, types, and functions to interact with the
//! Sensitive Data Protection (DLP) API. Most applications will use the structs
//! defined in the [client] module. Applications that cannot use `async`
//! functions can use the [blocking] module.
//!
//! The client reaches the service over gRPC by default. Use
//! [with_transport_kind][gax::client_builder::ClientBuilder::with_transport_kind]
//! to select the HTTP/JSON transport.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use google_cloud_privacy_dlp_v2::client::DlpService;
//! use google_cloud_privacy_dlp_v2::model::{ContentItem, content_item::DataItem};
//!
//! let client = DlpService::builder().build().await?;
//! let response = client
//!     .inspect_content()
//!     .set_parent("projects/my-project/locations/global")
//!     .set_item(ContentItem {
//!         data_item: Some(DataItem::Value("My phone number is (206) 555-0123".into())),
//!     })
//!     .send()
//!     .await?;
//! println!("{response:?}");
//! # Ok(()) }
//! ```

/// The error type and result alias used by all the RPCs.
pub use gax::Result;
pub use gax::error::Error;

pub mod model;

pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

pub mod blocking;

pub mod interceptor;

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

mod method_config;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://dlp.googleapis.com";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GAPIC,
            };
            ac.rest_header_value()
        };
        pub(crate) static ref X_GOOG_API_CLIENT_GRPC_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GAPIC,
            };
            ac.grpc_header_value()
        };
    }
}

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

//! The error types used by the DLP client library.
//!
//! Every RPC wrapper returns [Error]. The variants are not exposed directly,
//! applications use the `is_*()` predicates and accessors such as
//! [Error::status] to classify a failure.

mod core_error;
pub use core_error::*;
pub use auth::errors::CredentialsError;

/// Errors and error details related to local path validation.
///
/// These errors occur when the fields needed to build the request URI are
/// missing, or are set to a value that does not match any of the templates.
/// The client fails these requests locally, they never reach the service.
pub mod binding;

/// Errors and error details returned by the service.
///
/// # Examples
///
/// ```
/// # use google_cloud_dlp_gax::error;
/// use error::Error;
/// use error::rpc::Code;
/// fn handle_error(e: Error) {
///     if let Some(status) = e.status() {
///         if status.code == Code::NotFound {
///             println!("the resource is gone: {}", status.message);
///         }
///     }
/// }
/// ```
pub mod rpc;

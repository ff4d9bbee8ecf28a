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

//! Google APIs helpers for the DLP client library.
//!
//! This crate contains the transport-independent runtime used by the
//! generated DLP client: error types, request options, retry and backoff
//! policies, paginators, the routing header builder, endpoint and credentials
//! resolution, and the client builder.
//!
//! <div class="warning">
//! Types and functions in modules named <code>internal</code>, and modules
//! marked as hidden, are <b>not</b> intended for general use. They support the
//! client library implementation and may change without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

pub mod backoff_policy;
pub mod client_builder;
pub mod credentials;
pub mod endpoint;
pub mod exponential_backoff;
pub mod flattened;
pub mod method_config;
pub mod options;

/// Defines some types and traits to convert and use List RPCs as a Stream.
pub mod paginator;

pub mod response;
pub mod retry_policy;
pub mod retry_result;
pub mod retry_state;
pub mod routing;

/// The retry loop and its helpers, used by the transports.
#[doc(hidden)]
pub mod retry_loop_internal;

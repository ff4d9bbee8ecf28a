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

//! Default retry configuration for each RPC.
//!
//! Methods that read state, or that do not change state on the service,
//! retry `UNAVAILABLE` and `DEADLINE_EXCEEDED`. Methods that create, modify,
//! or start resources are not retried. All methods have a 300s deadline.

use gax::method_config::MethodConfig;

pub(crate) const INSPECT_CONTENT: MethodConfig = MethodConfig::retry_transient();
pub(crate) const DEIDENTIFY_CONTENT: MethodConfig = MethodConfig::retry_transient();
pub(crate) const REIDENTIFY_CONTENT: MethodConfig = MethodConfig::retry_transient();
pub(crate) const LIST_INFO_TYPES: MethodConfig = MethodConfig::retry_transient();
pub(crate) const CREATE_INSPECT_TEMPLATE: MethodConfig = MethodConfig::no_retry();
pub(crate) const UPDATE_INSPECT_TEMPLATE: MethodConfig = MethodConfig::no_retry();
pub(crate) const GET_INSPECT_TEMPLATE: MethodConfig = MethodConfig::retry_transient();
pub(crate) const LIST_INSPECT_TEMPLATES: MethodConfig = MethodConfig::retry_transient();
pub(crate) const DELETE_INSPECT_TEMPLATE: MethodConfig = MethodConfig::retry_transient();
pub(crate) const CREATE_DEIDENTIFY_TEMPLATE: MethodConfig = MethodConfig::no_retry();
pub(crate) const UPDATE_DEIDENTIFY_TEMPLATE: MethodConfig = MethodConfig::no_retry();
pub(crate) const GET_DEIDENTIFY_TEMPLATE: MethodConfig = MethodConfig::retry_transient();
pub(crate) const LIST_DEIDENTIFY_TEMPLATES: MethodConfig = MethodConfig::retry_transient();
pub(crate) const DELETE_DEIDENTIFY_TEMPLATE: MethodConfig = MethodConfig::retry_transient();
pub(crate) const CREATE_JOB_TRIGGER: MethodConfig = MethodConfig::no_retry();
pub(crate) const UPDATE_JOB_TRIGGER: MethodConfig = MethodConfig::no_retry();
pub(crate) const GET_JOB_TRIGGER: MethodConfig = MethodConfig::retry_transient();
pub(crate) const LIST_JOB_TRIGGERS: MethodConfig = MethodConfig::retry_transient();
pub(crate) const DELETE_JOB_TRIGGER: MethodConfig = MethodConfig::retry_transient();
pub(crate) const ACTIVATE_JOB_TRIGGER: MethodConfig = MethodConfig::no_retry();
pub(crate) const CREATE_DLP_JOB: MethodConfig = MethodConfig::no_retry();
pub(crate) const LIST_DLP_JOBS: MethodConfig = MethodConfig::retry_transient();
pub(crate) const GET_DLP_JOB: MethodConfig = MethodConfig::retry_transient();
pub(crate) const DELETE_DLP_JOB: MethodConfig = MethodConfig::retry_transient();
pub(crate) const CANCEL_DLP_JOB: MethodConfig = MethodConfig::no_retry();
pub(crate) const CREATE_DISCOVERY_CONFIG: MethodConfig = MethodConfig::no_retry();
pub(crate) const UPDATE_DISCOVERY_CONFIG: MethodConfig = MethodConfig::no_retry();
pub(crate) const GET_DISCOVERY_CONFIG: MethodConfig = MethodConfig::retry_transient();
pub(crate) const LIST_DISCOVERY_CONFIGS: MethodConfig = MethodConfig::retry_transient();
pub(crate) const DELETE_DISCOVERY_CONFIG: MethodConfig = MethodConfig::retry_transient();

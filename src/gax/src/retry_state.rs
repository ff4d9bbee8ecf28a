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

//! The state of a retry loop, as seen by retry and backoff policies.

use tokio::time::Instant;

/// The input to [RetryPolicy][crate::retry_policy::RetryPolicy] and
/// [BackoffPolicy][crate::backoff_policy::BackoffPolicy] decisions.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct RetryState {
    /// If true, the request is idempotent and safe to retry on most errors.
    pub idempotent: bool,
    /// When the retry loop started.
    pub start: Instant,
    /// The number of attempts made so far, including the current one.
    pub attempt_count: u32,
}

impl RetryState {
    /// Creates a state for a loop starting now.
    pub fn new(idempotent: bool) -> Self {
        Self {
            idempotent,
            start: Instant::now(),
            attempt_count: 0,
        }
    }

    /// Changes the start time, used in tests.
    pub fn set_start(mut self, v: Instant) -> Self {
        self.start = v;
        self
    }

    /// Changes the attempt count, used in tests.
    pub fn set_attempt_count(mut self, v: u32) -> Self {
        self.attempt_count = v;
        self
    }
}

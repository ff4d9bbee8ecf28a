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

//! Retry loop control types.

use crate::error::Error;

/// The result of a retry policy decision.
///
/// If the retry loop should continue the policy returns
/// [Continue][RetryResult::Continue]. If the error is not retryable it returns
/// [Permanent][RetryResult::Permanent], and if the policy ran out of attempts
/// or time it returns [Exhausted][RetryResult::Exhausted]. In all cases the
/// result carries the error from the last attempt.
#[derive(Debug)]
pub enum RetryResult {
    /// The error is not retryable, the loop stops.
    Permanent(Error),
    /// The policy has no more attempts or time left, the loop stops.
    Exhausted(Error),
    /// The loop should make another attempt.
    Continue(Error),
}

impl RetryResult {
    /// Returns true if the result indicates a permanent error.
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }
    /// Returns true if the result indicates the policy is exhausted.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
    /// Returns true if the loop should continue.
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_error() -> Error {
        Error::invalid_argument("test-only")
    }

    #[test]
    fn predicates() {
        let flow = RetryResult::Permanent(test_error());
        assert!(flow.is_permanent(), "{flow:?}");
        assert!(!flow.is_exhausted(), "{flow:?}");
        assert!(!flow.is_continue(), "{flow:?}");

        let flow = RetryResult::Exhausted(test_error());
        assert!(!flow.is_permanent(), "{flow:?}");
        assert!(flow.is_exhausted(), "{flow:?}");
        assert!(!flow.is_continue(), "{flow:?}");

        let flow = RetryResult::Continue(test_error());
        assert!(!flow.is_permanent(), "{flow:?}");
        assert!(!flow.is_exhausted(), "{flow:?}");
        assert!(flow.is_continue(), "{flow:?}");
    }
}

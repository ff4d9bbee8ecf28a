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

//! Validation for methods with flattened parameters.
//!
//! Client methods accept either a complete request message, or a few
//! top-level fields ("flattened" parameters) from which the request is built.
//! Mixing both forms in one call is ambiguous and rejected.

use crate::Result;
use crate::error::Error;

/// Rejects calls that combine a request message and flattened parameters.
///
/// `flattened` lists the names of the flattened parameters set in the call.
///
/// # Example
/// ```
/// # use google_cloud_dlp_gax::flattened;
/// assert!(flattened::check(false, &["parent"]).is_ok());
/// assert!(flattened::check(true, &[]).is_ok());
/// let err = flattened::check(true, &["parent"]).unwrap_err();
/// assert!(err.is_invalid_argument());
/// ```
pub fn check(has_request: bool, flattened: &[&str]) -> Result<()> {
    if has_request && !flattened.is_empty() {
        return Err(Error::invalid_argument(FlattenedError {
            fields: flattened.join(", "),
        }));
    }
    Ok(())
}

#[derive(thiserror::Error, Debug)]
#[error("if the `request` argument is set, then none of the individual field arguments should be set, found: {fields}")]
struct FlattenedError {
    fields: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(false, &[], true)]
    #[test_case(false, &["parent"], true)]
    #[test_case(true, &[], true)]
    #[test_case(true, &["parent"], false)]
    #[test_case(true, &["parent", "inspect_template"], false)]
    fn combinations(has_request: bool, flattened: &[&str], ok: bool) {
        let got = check(has_request, flattened);
        assert_eq!(got.is_ok(), ok, "{got:?}");
        if let Err(e) = got {
            assert!(e.is_invalid_argument(), "{e:?}");
            assert!(e.to_string().contains(flattened[0]), "{e}");
        }
    }
}

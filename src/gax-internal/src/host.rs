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

//! Helpers to compute the origin of an endpoint.

use gax::client_builder::Error as BuilderError;
use gax::client_builder::Result;
use http::Uri;
use std::str::FromStr;

/// Returns the origin for `endpoint`.
///
/// Endpoints without a scheme, such as `dlp.googleapis.com` or
/// `squid.clam.whelk`, use `https`. Any trailing `/` is removed.
///
/// # Example
/// ```
/// # use google_cloud_dlp_gax_internal::host::origin;
/// let origin = origin("dlp.googleapis.com").unwrap();
/// assert_eq!(origin.scheme_str(), Some("https"));
/// assert_eq!(origin.host(), Some("dlp.googleapis.com"));
/// ```
pub fn origin(endpoint: &str) -> Result<Uri> {
    let endpoint = endpoint.trim_end_matches('/');
    let uri = if endpoint.contains("://") {
        Uri::from_str(endpoint)
    } else {
        Uri::from_str(&format!("https://{endpoint}"))
    }
    .map_err(BuilderError::transport)?;
    if uri.authority().is_none() {
        return Err(BuilderError::transport(format!(
            "missing authority in endpoint {endpoint}"
        )));
    }
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("dlp.googleapis.com", "https", "dlp.googleapis.com"; "no scheme")]
    #[test_case("https://dlp.googleapis.com/", "https", "dlp.googleapis.com"; "trailing slash")]
    #[test_case("http://localhost:5678", "http", "localhost:5678"; "emulator")]
    #[test_case("squid.clam.whelk", "https", "squid.clam.whelk"; "custom")]
    fn origin_from_endpoint(endpoint: &str, scheme: &str, authority: &str) -> anyhow::Result<()> {
        let got = origin(endpoint)?;
        assert_eq!(got.scheme_str(), Some(scheme), "{got}");
        assert_eq!(got.authority().map(|a| a.as_str()), Some(authority), "{got}");
        Ok(())
    }

    #[test]
    fn origin_error() {
        let err = origin("https://bad endpoint");
        assert!(matches!(&err, Err(e) if e.is_transport()), "{err:?}");
    }
}

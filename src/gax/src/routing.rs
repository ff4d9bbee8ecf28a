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

//! Builds the `x-goog-request-params` routing header.
//!
//! Google Cloud services use this header to route requests to the right
//! backend. The value is a URL-encoded list of `key=value` pairs, taken from
//! the request fields bound in the URI template.
//!
//! # Example
//! ```
//! # use google_cloud_dlp_gax::routing::*;
//! let header = routing_header(&[("parent", "projects/p/locations/us")]);
//! assert_eq!(
//!     header,
//!     Some((ROUTING_HEADER.to_string(), "parent=projects/p/locations/us".to_string()))
//! );
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The name of the routing header.
pub const ROUTING_HEADER: &str = "x-goog-request-params";

// Unreserved characters and `/` are sent verbatim. Spaces are handled by
// `form_encode`.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Encodes `params` as the value of the routing header.
///
/// The pairs keep their order. Keys and values are form-encoded: spaces
/// become `+`, unreserved characters and `/` are sent verbatim, and
/// everything else is percent-encoded.
pub fn encode(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn form_encode(s: &str) -> String {
    s.split(' ')
        .map(|part| utf8_percent_encode(part, ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Returns the routing header for `params`.
///
/// Returns `None` when there are no parameters. Parameters with empty values
/// are still included, the service needs the key to route the request.
pub fn routing_header(params: &[(&str, &str)]) -> Option<(String, String)> {
    if params.is_empty() {
        return None;
    }
    Some((ROUTING_HEADER.to_string(), encode(params)))
}

/// Prepends the routing header for `params` to the application metadata.
///
/// The routing header is the first entry, followed by the application
/// metadata in its original order. If `params` is empty the metadata is
/// returned unchanged.
pub fn with_routing_header(
    params: &[(&str, &str)],
    metadata: &[(String, String)],
) -> Vec<(String, String)> {
    routing_header(params)
        .into_iter()
        .chain(metadata.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[("parent", "projects/p")], "parent=projects/p")]
    #[test_case(&[("parent", "")], "parent=")]
    #[test_case(&[("name", "projects/p/dlpJobs/j 1")], "name=projects/p/dlpJobs/j+1")]
    #[test_case(&[("name", "a+b c")], "name=a%2Bb+c")]
    #[test_case(&[("name", "  ")], "name=++")]
    #[test_case(&[("name", "100%")], "name=100%25")]
    #[test_case(&[("name", "a&b=c")], "name=a%26b%3Dc")]
    #[test_case(&[("a", "1"), ("b", "2")], "a=1&b=2")]
    fn encoding(params: &[(&str, &str)], want: &str) {
        assert_eq!(encode(params), want);
    }

    #[test]
    fn no_params() {
        assert_eq!(routing_header(&[]), None);
        let metadata = vec![("k".to_string(), "v".to_string())];
        assert_eq!(with_routing_header(&[], &metadata), metadata);
    }

    #[test]
    fn routing_header_first() {
        let metadata = vec![
            ("x-test".to_string(), "1".to_string()),
            ("x-test".to_string(), "2".to_string()),
        ];
        let got = with_routing_header(&[("parent", "projects/p")], &metadata);
        let want = vec![
            (ROUTING_HEADER.to_string(), "parent=projects/p".to_string()),
            ("x-test".to_string(), "1".to_string()),
            ("x-test".to_string(), "2".to_string()),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn empty_value_present() {
        let got = with_routing_header(&[("parent", "")], &[]);
        assert_eq!(got, vec![(ROUTING_HEADER.to_string(), "parent=".to_string())]);
    }
}

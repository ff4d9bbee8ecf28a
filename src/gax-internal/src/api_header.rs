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

//! The `x-goog-api-client` header.

/// Identifies a client library in the `x-goog-api-client` header.
///
/// Generated clients create one static instance of this struct and compute
/// the header value once, in a `lazy_static!` block.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

pub const GAPIC: &str = "gapic";

/// The header name.
pub const HEADER_NAME: &str = "x-goog-api-client";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// The header value for HTTP/JSON requests.
    pub fn rest_header_value(&self) -> String {
        self.header_value("rest", "reqwest")
    }

    /// The header value for gRPC requests.
    pub fn grpc_header_value(&self) -> String {
        self.header_value("grpc", "tonic")
    }

    fn header_value(&self, transport: &str, implementation: &str) -> String {
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(rustc_version);
        let gax_version = build_info::PKG_VERSION;
        format!(
            "gl-rust/{rustc_version} gax/{gax_version} {transport}/{gax_version}-{implementation} {}/{}",
            self.library_type, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    const CLIENT: XGoogApiClient = XGoogApiClient {
        name: "unused",
        version: "1.2.3",
        library_type: GAPIC,
    };

    fn breakdown(formatted: &str) -> HashMap<&str, &str> {
        formatted
            .split(' ')
            .filter_map(|v| v.split_once('/'))
            .collect()
    }

    #[test_case(CLIENT.rest_header_value(), "rest", "grpc"; "rest")]
    #[test_case(CLIENT.grpc_header_value(), "grpc", "rest"; "grpc")]
    fn format(value: String, present: &str, absent: &str) {
        let fields = breakdown(&value);
        assert_eq!(fields.get(GAPIC), Some(&"1.2.3"), "{value}");
        assert_eq!(fields.get("gax"), Some(&build_info::PKG_VERSION), "{value}");
        assert!(fields.contains_key(present), "{value}");
        assert!(!fields.contains_key(absent), "{value}");
        let rustc = fields.get("gl-rust").copied().unwrap_or_default();
        assert!(
            !rustc.is_empty() && build_info::RUSTC_VERSION.contains(rustc),
            "{value}"
        );
    }
}

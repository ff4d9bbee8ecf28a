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

//! The result of a successful call: the decoded message and the response
//! metadata.
//!
//! Request builders return only the message. The stub traits return the full
//! [Response], so mocks and interceptors can observe the headers.
//!
//! # Example
//! ```
//! # use google_cloud_dlp_gax::response::{Parts, Response};
//! let mut headers = http::HeaderMap::new();
//! headers.insert("x-goog-request-id", http::HeaderValue::from_static("abc"));
//! let response = Response::from_parts(Parts::new().set_headers(headers), "job-123");
//! assert!(response.headers().contains_key("x-goog-request-id"));
//! assert_eq!(response.into_body(), "job-123");
//! ```

/// A decoded response message with its metadata.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_dlp_gax::response::Response;
    /// let response = Response::from("body".to_string());
    /// assert!(response.headers().is_empty());
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, keeping the metadata.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_dlp_gax::response::Response;
    /// let response = Response::from(21).map(|v| v * 2);
    /// assert_eq!(response.body(), &42);
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// Component parts of a response.
///
/// The response metadata: the headers returned by the service.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// HTTP headers or gRPC metadata.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_headers() -> http::HeaderMap {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.into_body().as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let headers = json_headers();
        let response = Response::from_parts(Parts::new().set_headers(headers.clone()), "abc123");
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(body, "abc123");
        assert_eq!(parts.headers, headers);
    }

    #[test]
    fn map_keeps_headers() {
        let headers = json_headers();
        let response = Response::from_parts(Parts::new().set_headers(headers.clone()), 2)
            .map(|v| v.to_string());
        assert_eq!(response.body().as_str(), "2");
        assert_eq!(response.headers(), &headers);
    }
}

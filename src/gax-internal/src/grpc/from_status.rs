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

use gax::error::Error;
use gax::error::rpc::Status;
use std::error::Error as _;

// Bounds the walk over `source()`, chains with cycles would never end.
const MAX_SOURCE_DEPTH: usize = 32;

/// Returns true if any error in the source chain of `status` is a `T`.
fn caused_by<T>(status: &tonic::Status) -> bool
where
    T: std::error::Error + 'static,
{
    std::iter::successors(status.source(), |e| (*e).source())
        .take(MAX_SOURCE_DEPTH)
        .any(|e| e.is::<T>())
}

fn is_grpc_content(headers: &http::HeaderMap) -> bool {
    match headers.get(http::header::CONTENT_TYPE) {
        None => true,
        Some(v) => v.as_bytes().starts_with(b"application/grpc"),
    }
}

/// Converts a gRPC status into an error.
///
/// Deadlines enforced by the client become [Error::is_timeout], failures in
/// the channel become [Error::is_transport], and anything else is a service
/// error. A response that is not gRPC at all, typically from a misconfigured
/// endpoint, is also a transport error.
pub fn to_gax_error(status: tonic::Status) -> Error {
    if caused_by::<tonic::TimeoutExpired>(&status) {
        return Error::timeout(status);
    }
    let headers = status.metadata().clone().into_headers();
    if caused_by::<tonic::transport::Error>(&status) {
        return Error::transport(headers, status);
    }
    if !is_grpc_content(&headers) {
        return Error::transport(headers, NotGrpc(status));
    }
    let service = Status::default()
        .set_code(status.code() as i32)
        .set_message(status.message());
    Error::service_with_http_metadata(service, None, Some(headers))
}

#[derive(Debug, thiserror::Error)]
#[error(
    "the response content-type is not application/grpc, verify the endpoint serves the DLP gRPC API"
)]
struct NotGrpc(#[source] tonic::Status);

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use test_case::test_case;

    fn with_content_type(mut status: tonic::Status, value: &'static str) -> tonic::Status {
        status.metadata_mut().append(
            "content-type",
            tonic::metadata::AsciiMetadataValue::from_static(value),
        );
        status
    }

    #[test_case(tonic::Status::invalid_argument("bad"), Code::InvalidArgument)]
    #[test_case(tonic::Status::not_found("missing"), Code::NotFound)]
    #[test_case(tonic::Status::resource_exhausted("quota"), Code::ResourceExhausted)]
    #[test_case(tonic::Status::unavailable("try again"), Code::Unavailable)]
    #[test_case(tonic::Status::unauthenticated("who"), Code::Unauthenticated)]
    fn service_codes(input: tonic::Status, want: Code) {
        let message = input.message().to_string();
        let got = to_gax_error(with_content_type(input, "application/grpc"));
        let status = got.status().cloned().unwrap_or_default();
        assert_eq!(status.code, want, "{got:?}");
        assert_eq!(status.message, message);
        assert!(got.http_headers().is_some_and(|h| h.contains_key("content-type")), "{got:?}");
    }

    #[test]
    fn missing_content_type() {
        let got = to_gax_error(tonic::Status::unavailable("try again"));
        assert_eq!(got.status().map(|s| s.code), Some(Code::Unavailable), "{got:?}");
    }

    #[test]
    fn not_grpc() {
        let input = with_content_type(
            tonic::Status::internal("html error page"),
            "text/html; charset=UTF-8",
        );
        let got = to_gax_error(input);
        assert!(got.is_transport(), "{got:?}");
        assert!(got.status().is_none(), "{got:?}");
        let inner = got
            .source()
            .and_then(|e| e.source())
            .and_then(|e| e.downcast_ref::<tonic::Status>());
        assert_eq!(inner.map(|s| s.code()), Some(tonic::Code::Internal));
        assert!(format!("{got}").contains("not application/grpc"), "{got}");
    }
}

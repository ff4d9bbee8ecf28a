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
use gax::error::rpc::{Code, Status};

/// The default implementation for every stub method.
///
/// The stub traits provide default implementations of each method so that
/// services can gain new RPCs without breaking changes. The client library
/// transports override all methods, so this error only appears in test code
/// mocking the client. If that is how you got this error, verify that you
/// have mocked all methods used in your test.
pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    Err(Error::service(
        Status::default()
            .set_code(Code::Unimplemented)
            .set_message("the stub does not implement this method"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_unimplemented() {
        let got = unimplemented_stub::<String>().await;
        let status = got.as_ref().err().and_then(|e| e.status());
        assert_eq!(status.map(|s| s.code), Some(Code::Unimplemented), "{got:?}");
    }
}

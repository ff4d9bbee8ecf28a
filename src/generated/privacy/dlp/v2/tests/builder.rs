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

//! Verify how the client builder combines its options.

#[cfg(test)]
mod builder {
    use gax::client_builder::{Error, TransportKind};
    use gax::credentials::anonymous;
    use gax::error::rpc::Code;
    use google_cloud_privacy_dlp_v2 as dlp;
    use dlp::builder::dlp_service::ClientBuilderExt;
    use dlp::interceptor::NoopInterceptor;
    use test_case::test_case;

    #[derive(Debug)]
    struct EmptyStub;
    impl dlp::stub::DlpService for EmptyStub {}

    #[tokio::test]
    async fn stub_with_credentials() {
        let err = dlp::client::DlpService::builder()
            .with_stub(EmptyStub)
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await
            .err();
        assert!(err.as_ref().is_some_and(Error::is_configuration), "{err:?}");
    }

    #[tokio::test]
    async fn stub_with_scopes() {
        let err = dlp::client::DlpService::builder()
            .with_stub(EmptyStub)
            .with_scopes(["https://www.googleapis.com/auth/cloud-platform"])
            .build()
            .await
            .err();
        assert!(err.as_ref().is_some_and(Error::is_configuration), "{err:?}");
    }

    #[tokio::test]
    async fn interceptor_requires_http() {
        let err = dlp::client::DlpService::builder()
            .with_credentials(anonymous::Builder::new().build())
            .with_transport_kind(TransportKind::Grpc)
            .with_interceptor(NoopInterceptor)
            .build()
            .await
            .err();
        assert!(err.as_ref().is_some_and(Error::is_configuration), "{err:?}");
    }

    #[test_case(TransportKind::Grpc)]
    #[test_case(TransportKind::Rest)]
    #[tokio::test]
    async fn transports(kind: TransportKind) -> anyhow::Result<()> {
        let client = dlp::client::DlpService::builder()
            .with_endpoint("http://127.0.0.1:1")
            .with_credentials(anonymous::Builder::new().build())
            .with_transport_kind(kind)
            .with_tracing()
            .build()
            .await?;
        client.close();
        Ok(())
    }

    #[tokio::test]
    async fn unimplemented_stub_method() -> anyhow::Result<()> {
        let client = dlp::client::DlpService::from_stub(EmptyStub);
        let err = client.cancel_dlp_job().send().await.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unimplemented), "{err:?}");
        Ok(())
    }
}

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

use gax::client_builder::Result;
use gax::credentials::{CredentialsSource, select_source};
use gax::endpoint::{ClientCertSource, Environment};

pub use gax::credentials::Credentials;

/// The client configuration for [crate::http::ReqwestClient] and [crate::grpc::Client].
pub type ClientConfig = gax::client_builder::internal::ClientConfig;

pub(crate) const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// The configuration used to create a transport.
///
/// This is the result of resolving the client options against the
/// environment. The transports are created from it.
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// The endpoint, as configured or as selected by the mTLS policy.
    pub endpoint: String,
    /// True if `endpoint` is the mTLS variant of the default endpoint.
    pub is_mtls: bool,
    /// The audience bound to the credentials: the API audience, or the host
    /// of `endpoint`.
    pub audience: String,
    pub credentials_source: CredentialsSource,
    pub scopes: Option<Vec<String>>,
    pub always_use_jwt_access: bool,
    pub client_cert_source: Option<ClientCertSource>,
}

/// Resolves the client configuration.
///
/// Fails if the options are mutually exclusive, or if the environment
/// contains invalid values.
pub fn resolve(
    config: &ClientConfig,
    env: &Environment,
    default_endpoint: &str,
) -> Result<TransportConfig> {
    let credentials_source = select_source(config)?;
    let resolved = gax::endpoint::resolve(
        config.endpoint.as_deref(),
        default_endpoint,
        config.client_cert_source.as_ref(),
        env,
    )?;
    let audience = config
        .api_audience
        .clone()
        .unwrap_or_else(|| gax::endpoint::host(&resolved.endpoint).to_string());
    tracing::debug!(
        endpoint = resolved.endpoint,
        is_mtls = resolved.is_mtls,
        audience,
        ?credentials_source,
        "resolved transport configuration"
    );
    Ok(TransportConfig {
        endpoint: resolved.endpoint,
        is_mtls: resolved.is_mtls,
        audience,
        credentials_source,
        scopes: config.scopes.clone(),
        always_use_jwt_access: config.always_use_jwt_access,
        client_cert_source: resolved.client_cert_source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    const DEFAULT_ENDPOINT: &str = "https://dlp.googleapis.com";

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let config = ClientConfig {
            tracing: true,
            ..Default::default()
        };
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test]
    fn custom_endpoint() -> anyhow::Result<()> {
        let config = ClientConfig {
            endpoint: Some("squid.clam.whelk".into()),
            ..Default::default()
        };
        let got = resolve(&config, &Environment::new(), DEFAULT_ENDPOINT)?;
        assert_eq!(got.endpoint, "squid.clam.whelk");
        assert!(!got.is_mtls, "{got:?}");
        assert_eq!(got.audience, "squid.clam.whelk");
        assert_eq!(got.credentials_source, CredentialsSource::ApplicationDefault);
        assert_eq!(got.scopes, None);
        assert!(got.always_use_jwt_access, "{got:?}");
        assert!(got.client_cert_source.is_none(), "{got:?}");
        Ok(())
    }

    #[test_case(None, None, "dlp.googleapis.com"; "default")]
    #[test_case(Some("https://dlp.us-central1.rep.googleapis.com"), None, "dlp.us-central1.rep.googleapis.com"; "regional")]
    #[test_case(Some("http://localhost:5678"), None, "localhost"; "emulator")]
    #[test_case(None, Some("my-audience"), "my-audience"; "api audience")]
    #[test_case(Some("squid.clam.whelk"), Some("my-audience"), "my-audience"; "api audience and endpoint")]
    fn audience(endpoint: Option<&str>, api_audience: Option<&str>, want: &str) -> anyhow::Result<()> {
        let config = ClientConfig {
            endpoint: endpoint.map(str::to_string),
            api_audience: api_audience.map(str::to_string),
            ..Default::default()
        };
        let got = resolve(&config, &Environment::new(), DEFAULT_ENDPOINT)?;
        assert_eq!(got.audience, want, "{got:?}");
        Ok(())
    }

    #[test]
    fn mtls_always() -> anyhow::Result<()> {
        let env = Environment::new().with_mtls_endpoint_policy("always");
        let got = resolve(&ClientConfig::default(), &env, DEFAULT_ENDPOINT)?;
        assert_eq!(got.endpoint, "https://dlp.mtls.googleapis.com");
        assert!(got.is_mtls, "{got:?}");
        assert_eq!(got.audience, "dlp.mtls.googleapis.com");
        assert!(got.client_cert_source.is_none(), "{got:?}");
        Ok(())
    }

    #[test]
    fn mtls_auto_with_cert() -> anyhow::Result<()> {
        let env = Environment::new()
            .with_mtls_endpoint_policy("auto")
            .with_client_cert_policy("true");
        let config = ClientConfig {
            client_cert_source: Some(ClientCertSource::from_pem(
                b"cert bytes".to_vec(),
                b"key bytes".to_vec(),
            )),
            ..Default::default()
        };
        let got = resolve(&config, &env, DEFAULT_ENDPOINT)?;
        assert_eq!(got.endpoint, "https://dlp.mtls.googleapis.com");
        let pair = got
            .client_cert_source
            .as_ref()
            .map(|s| s.load())
            .transpose()
            .map_err(anyhow::Error::from_boxed)?;
        assert_eq!(pair.map(|p| p.cert_pem), Some(b"cert bytes".to_vec()));
        Ok(())
    }

    #[test]
    fn invalid_environment() {
        let env = Environment::new().with_mtls_endpoint_policy("Unsupported");
        let got = resolve(&ClientConfig::default(), &env, DEFAULT_ENDPOINT);
        assert!(matches!(&got, Err(e) if e.is_mutual_tls()), "{got:?}");

        let env = Environment::new().with_client_cert_policy("Unsupported");
        let got = resolve(&ClientConfig::default(), &env, DEFAULT_ENDPOINT);
        assert!(matches!(&got, Err(e) if e.is_configuration()), "{got:?}");
    }

    #[test]
    fn conflicting_options() {
        let config = ClientConfig {
            api_key: Some("test-only".into()),
            credentials_file: Some("/dev/null".into()),
            ..Default::default()
        };
        let got = resolve(&config, &Environment::new(), DEFAULT_ENDPOINT);
        assert!(matches!(&got, Err(e) if e.is_configuration()), "{got:?}");
    }
}

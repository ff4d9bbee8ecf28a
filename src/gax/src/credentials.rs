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

//! Types and functions to work with Google Cloud authentication [Credentials].
//!
//! The credential types are provided by the [google-cloud-auth] crate. This
//! module selects and configures them from the client options:
//!
//! * Explicit credentials are used as-is.
//! * A credentials file is loaded once, when the client is built. Service
//!   account keys, authorized user files, impersonated service accounts and
//!   external accounts are supported.
//! * An API key uses the `x-goog-api-key` header.
//! * Otherwise the client uses [application default credentials], including
//!   the metadata server on Google Cloud.
//!
//! [application default credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
//! [google-cloud-auth]: https://docs.rs/google-cloud-auth

use crate::client_builder::internal::ClientConfig;
use crate::client_builder::{Error, Result};
use crate::error::CredentialsError;
use auth::credentials::service_account::AccessSpecifier;
use http::header::{HeaderName, HeaderValue};
use http::{Extensions, HeaderMap};
use std::path::{Path, PathBuf};

pub use auth::credentials::{
    CacheableResource, Credentials, CredentialsProvider, EntityTag, anonymous,
    api_key_credentials, external_account, impersonated, service_account, user_account,
};

pub mod access_token;

/// The default OAuth2 scope for Google Cloud services.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

const QUOTA_PROJECT_KEY: &str = "x-goog-user-project";

/// Where the credentials for a client come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialsSource {
    /// Credentials supplied by the application.
    Explicit,
    /// A credentials file supplied by the application.
    File(PathBuf),
    /// An API key supplied by the application.
    ApiKey,
    /// The application default credentials.
    ApplicationDefault,
}

/// Determines the credentials source for a client configuration.
///
/// Explicit credentials are preferred over a credentials file, which is
/// preferred over application default credentials. Credentials and a file, or
/// an API key and any credentials, are mutually exclusive.
pub fn select_source(config: &ClientConfig) -> Result<CredentialsSource> {
    config.validate()?;
    let source = match (&config.cred, &config.credentials_file, &config.api_key) {
        (Some(_), _, _) => CredentialsSource::Explicit,
        (None, Some(path), _) => CredentialsSource::File(path.clone()),
        (None, None, Some(_)) => CredentialsSource::ApiKey,
        (None, None, None) => CredentialsSource::ApplicationDefault,
    };
    Ok(source)
}

/// Resolves the credentials for a client.
///
/// `audience` is the API audience, or the host of the resolved endpoint if
/// the configuration does not set one. Service account keys loaded from a
/// file use it for self-signed JWTs, unless the configuration sets scopes or
/// disables self-signed JWTs.
pub fn resolve_credentials(config: &ClientConfig, audience: &str) -> Result<Credentials> {
    let credentials = match select_source(config)? {
        CredentialsSource::Explicit => config
            .cred
            .clone()
            .ok_or_else(|| Error::cred("missing credentials"))?,
        CredentialsSource::File(path) => {
            let json = load_json(&path)?;
            return from_json(json, config, audience);
        }
        CredentialsSource::ApiKey => {
            let key = config.api_key.clone().unwrap_or_default();
            let credentials = api_key_credentials::Builder::new(key).build();
            return Ok(match &config.quota_project_id {
                Some(project) => with_quota_project_id(credentials, project),
                None => credentials,
            });
        }
        CredentialsSource::ApplicationDefault => {
            let mut builder = auth::credentials::Builder::default();
            if let Some(scopes) = &config.scopes {
                builder = builder.with_scopes(scopes.clone());
            }
            if let Some(project) = &config.quota_project_id {
                builder = builder.with_quota_project_id(project);
            }
            return builder.build().map_err(Error::cred);
        }
    };
    Ok(match &config.quota_project_id {
        Some(project) => with_quota_project_id(credentials, project),
        None => credentials,
    })
}

fn load_json(path: &Path) -> Result<serde_json::Value> {
    let contents = std::fs::read(path).map_err(|e| {
        Error::cred(format!(
            "cannot read credentials file {}: {e}",
            path.display()
        ))
    })?;
    serde_json::from_slice(&contents).map_err(Error::cred)
}

/// Creates credentials from the contents of a credentials file.
pub fn from_json(
    json: serde_json::Value,
    config: &ClientConfig,
    audience: &str,
) -> Result<Credentials> {
    let kind = json
        .get("type")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| Error::cred("missing `type` field in credentials file"))?
        .to_string();
    let scopes = config.scopes.clone();
    let project = config.quota_project_id.clone();
    match kind.as_str() {
        "service_account" => {
            let access = match (scopes, config.always_use_jwt_access) {
                (Some(scopes), _) => AccessSpecifier::from_scopes(scopes),
                (None, true) => AccessSpecifier::from_audience(jwt_audience(audience)),
                (None, false) => AccessSpecifier::from_scopes([CLOUD_PLATFORM_SCOPE]),
            };
            let mut builder = service_account::Builder::new(json).with_access_specifier(access);
            if let Some(project) = project {
                builder = builder.with_quota_project_id(project);
            }
            builder.build().map_err(Error::cred)
        }
        "authorized_user" => {
            let mut builder = user_account::Builder::new(json);
            if let Some(scopes) = scopes {
                builder = builder.with_scopes(scopes);
            }
            if let Some(project) = project {
                builder = builder.with_quota_project_id(project);
            }
            builder.build().map_err(Error::cred)
        }
        "impersonated_service_account" => {
            let mut builder = impersonated::Builder::new(json);
            if let Some(scopes) = scopes {
                builder = builder.with_scopes(scopes);
            }
            if let Some(project) = project {
                builder = builder.with_quota_project_id(project);
            }
            builder.build().map_err(Error::cred)
        }
        "external_account" => {
            let mut builder = external_account::Builder::new(json);
            if let Some(scopes) = scopes {
                builder = builder.with_scopes(scopes);
            }
            if let Some(project) = project {
                builder = builder.with_quota_project_id(project);
            }
            builder.build().map_err(Error::cred)
        }
        other => Err(Error::cred(format!(
            "unsupported credentials type `{other}`"
        ))),
    }
}

/// Returns the `aud` claim for self-signed JWTs.
///
/// A bare host becomes `https://{host}/`, other values are used as-is.
pub(crate) fn jwt_audience(audience: &str) -> String {
    if audience.contains("://") {
        audience.to_string()
    } else {
        format!("https://{audience}/")
    }
}

/// Returns credentials that also send the `x-goog-user-project` header.
pub fn with_quota_project_id<V: Into<String>>(credentials: Credentials, project: V) -> Credentials {
    Credentials::from(QuotaProject {
        inner: credentials,
        project: project.into(),
    })
}

#[derive(Debug)]
struct QuotaProject {
    inner: Credentials,
    project: String,
}

impl CredentialsProvider for QuotaProject {
    async fn headers(
        &self,
        extensions: Extensions,
    ) -> std::result::Result<CacheableResource<HeaderMap>, CredentialsError> {
        match self.inner.headers(extensions).await? {
            CacheableResource::NotModified => Ok(CacheableResource::NotModified),
            CacheableResource::New {
                entity_tag,
                mut data,
            } => {
                let value = HeaderValue::from_str(&self.project)
                    .map_err(|e| CredentialsError::from_msg(false, e.to_string()))?;
                data.insert(HeaderName::from_static(QUOTA_PROJECT_KEY), value);
                Ok(CacheableResource::New { entity_tag, data })
            }
        }
    }

    async fn universe_domain(&self) -> Option<String> {
        self.inner.universe_domain().await
    }
}

/// Returns the authentication headers for a request.
///
/// The transports do not cache the headers, the credentials must return new
/// headers on each call.
pub async fn request_headers(credentials: &Credentials) -> crate::Result<HeaderMap> {
    match credentials
        .headers(Extensions::new())
        .await
        .map_err(crate::error::Error::authentication)?
    {
        CacheableResource::New { data, .. } => Ok(data),
        CacheableResource::NotModified => Err(crate::error::Error::authentication(
            CredentialsError::from_msg(false, "credentials returned cached headers"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    const AUDIENCE: &str = "dlp.googleapis.com";

    fn authorized_user_json() -> serde_json::Value {
        serde_json::json!({
            "type": "authorized_user",
            "client_id": "test-client-id",
            "client_secret": "test-client-secret",
            "refresh_token": "test-refresh-token",
        })
    }

    fn write_json(json: serde_json::Value) -> anyhow::Result<(tempfile::TempDir, PathBuf)> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, json.to_string())?;
        Ok((dir, path))
    }

    #[tokio::test]
    async fn quota_project_header() -> anyhow::Result<()> {
        let creds = with_quota_project_id(anonymous::Builder::new().build(), "my-project");
        let headers = request_headers(&creds).await?;
        assert_eq!(
            headers.get(QUOTA_PROJECT_KEY),
            Some(&HeaderValue::from_static("my-project"))
        );
        Ok(())
    }

    #[test]
    fn audience_for_jwt() {
        assert_eq!(jwt_audience(AUDIENCE), "https://dlp.googleapis.com/");
        assert_eq!(jwt_audience("squid.clam.whelk"), "https://squid.clam.whelk/");
        assert_eq!(jwt_audience("https://my-audience/"), "https://my-audience/");
    }

    #[test]
    fn select_source_precedence() -> anyhow::Result<()> {
        let config = ClientConfig::default();
        assert_eq!(select_source(&config)?, CredentialsSource::ApplicationDefault);

        let config = ClientConfig {
            credentials_file: Some("key.json".into()),
            ..ClientConfig::default()
        };
        assert_eq!(select_source(&config)?, CredentialsSource::File("key.json".into()));

        let config = ClientConfig {
            cred: Some(anonymous::Builder::new().build()),
            ..ClientConfig::default()
        };
        assert_eq!(select_source(&config)?, CredentialsSource::Explicit);

        let config = ClientConfig {
            api_key: Some("test-only".into()),
            ..ClientConfig::default()
        };
        assert_eq!(select_source(&config)?, CredentialsSource::ApiKey);
        Ok(())
    }

    #[test]
    fn select_source_conflicts() {
        let config = ClientConfig {
            cred: Some(anonymous::Builder::new().build()),
            credentials_file: Some("key.json".into()),
            ..ClientConfig::default()
        };
        let err = select_source(&config).err();
        assert!(err.as_ref().is_some_and(|e| e.is_configuration()), "{err:?}");

        let config = ClientConfig {
            cred: Some(anonymous::Builder::new().build()),
            api_key: Some("test-only".into()),
            ..ClientConfig::default()
        };
        let err = select_source(&config).err();
        assert!(err.as_ref().is_some_and(|e| e.is_configuration()), "{err:?}");
    }

    #[tokio::test]
    async fn resolve_api_key() -> anyhow::Result<()> {
        let config = ClientConfig {
            api_key: Some("test-api-key".into()),
            ..ClientConfig::default()
        };
        let creds = resolve_credentials(&config, AUDIENCE)?;
        let headers = request_headers(&creds).await?;
        assert_eq!(
            headers.get("x-goog-api-key"),
            Some(&HeaderValue::from_static("test-api-key"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn resolve_explicit() -> anyhow::Result<()> {
        let config = ClientConfig {
            cred: Some(access_token::Builder::new("test-token").build()),
            quota_project_id: Some("my-project".into()),
            ..ClientConfig::default()
        };
        let creds = resolve_credentials(&config, AUDIENCE)?;
        let headers = request_headers(&creds).await?;
        assert_eq!(
            headers.get(http::header::AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-token"))
        );
        assert_eq!(
            headers.get(QUOTA_PROJECT_KEY),
            Some(&HeaderValue::from_static("my-project"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn resolve_authorized_user_file() -> anyhow::Result<()> {
        let (_dir, path) = write_json(authorized_user_json())?;
        let config = ClientConfig {
            credentials_file: Some(path),
            scopes: Some(vec![CLOUD_PLATFORM_SCOPE.to_string()]),
            ..ClientConfig::default()
        };
        let creds = resolve_credentials(&config, AUDIENCE);
        assert!(creds.is_ok(), "{creds:?}");
        Ok(())
    }

    #[test]
    fn resolve_file_errors() -> anyhow::Result<()> {
        let config = ClientConfig {
            credentials_file: Some("/does-not-exist/key.json".into()),
            ..ClientConfig::default()
        };
        let err = resolve_credentials(&config, AUDIENCE).err();
        assert!(err.as_ref().is_some_and(|e| e.is_default_credentials()), "{err:?}");

        let (_dir, path) = write_json(serde_json::json!({"type": "unknown_type"}))?;
        let config = ClientConfig {
            credentials_file: Some(path),
            ..ClientConfig::default()
        };
        let err = resolve_credentials(&config, AUDIENCE).err();
        assert!(
            err.as_ref()
                .is_some_and(|e| format!("{e:?}").contains("unknown_type")),
            "{err:?}"
        );

        let (_dir, path) = write_json(serde_json::json!({}))?;
        let config = ClientConfig {
            credentials_file: Some(path),
            ..ClientConfig::default()
        };
        let err = resolve_credentials(&config, AUDIENCE).err();
        assert!(err.as_ref().is_some_and(|e| e.is_default_credentials()), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn adc_authorized_user() -> anyhow::Result<()> {
        let (_dir, path) = write_json(authorized_user_json())?;
        let _env = ScopedEnv::set("GOOGLE_APPLICATION_CREDENTIALS", path.to_str().unwrap());
        let creds = resolve_credentials(&ClientConfig::default(), AUDIENCE);
        assert!(creds.is_ok(), "{creds:?}");
        Ok(())
    }

    #[test]
    #[serial]
    fn adc_bad_file() {
        let _env = ScopedEnv::set("GOOGLE_APPLICATION_CREDENTIALS", "/does-not-exist/adc.json");
        let err = resolve_credentials(&ClientConfig::default(), AUDIENCE).err();
        assert!(err.as_ref().is_some_and(|e| e.is_default_credentials()), "{err:?}");
    }
}

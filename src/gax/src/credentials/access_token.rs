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

//! Credentials using a pre-fetched OAuth2 access token.
//!
//! The token is not refreshed. Applications are responsible for creating new
//! clients before the token expires.

use super::{CacheableResource, Credentials, CredentialsProvider, EntityTag};
use crate::error::CredentialsError;
use http::header::{AUTHORIZATION, HeaderValue};
use http::{Extensions, HeaderMap};

struct AccessTokenCredentials {
    token: String,
    entity_tag: EntityTag,
}

impl std::fmt::Debug for AccessTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenCredentials")
            .field("token", &"[censored]")
            .finish()
    }
}

/// Creates [Credentials] from an access token.
#[derive(Debug)]
pub struct Builder {
    token: String,
}

impl Builder {
    /// Creates a builder for the given `token`.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> Credentials {
        Credentials::from(AccessTokenCredentials {
            token: self.token,
            entity_tag: EntityTag::default(),
        })
    }
}

impl CredentialsProvider for AccessTokenCredentials {
    async fn headers(
        &self,
        _extensions: Extensions,
    ) -> Result<CacheableResource<HeaderMap>, CredentialsError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| CredentialsError::from_msg(false, e.to_string()))?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(CacheableResource::New {
            entity_tag: self.entity_tag.clone(),
            data: headers,
        })
    }

    async fn universe_domain(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bearer() -> anyhow::Result<()> {
        let creds = Builder::new("test-token").build();
        let headers = crate::credentials::request_headers(&creds).await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-token"))
        );
        assert!(!format!("{creds:?}").contains("test-token"), "{creds:?}");
        Ok(())
    }

    #[test]
    fn invalid_token() {
        let creds = Builder::new("bad\ntoken").build();
        let err = tokio_test::block_on(crate::credentials::request_headers(&creds)).err();
        assert!(err.as_ref().is_some_and(|e| e.is_authentication()), "{err:?}");
    }
}

//! HTTP artifact fetching.
//!
//! Artifacts are served as static files under a base URL:
//! `GET {base_url}/{file}`. Any non-2xx status is an error carrying the
//! status code.

use std::time::Duration;

use async_trait::async_trait;
use shield_core::CircuitId;
use url::Url;

use crate::config::{ArtifactConfig, ConfigError};
use crate::error::ArtifactError;
use crate::provider::{ArtifactBytes, ArtifactKind, ArtifactProvider};

/// Fetches artifacts from a static file server or CDN.
#[derive(Debug, Clone)]
pub struct HttpArtifactProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpArtifactProvider {
    /// Create a provider for `base_url` with the given request timeout.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ArtifactError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ArtifactError::Http {
                url: base_url.to_string(),
                source: e,
            })?;
        Ok(Self { client, base_url })
    }

    /// # Errors
    ///
    /// Returns `ConfigError::MissingBaseUrl` if the config has no base URL.
    pub fn from_config(config: &ArtifactConfig) -> Result<Self, ArtifactError> {
        let base_url = config.base_url.clone().ok_or(ConfigError::MissingBaseUrl)?;
        Self::new(base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of `file`.
    pub fn artifact_url(&self, file: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), file)
    }
}

#[async_trait]
impl ArtifactProvider for HttpArtifactProvider {
    async fn fetch(
        &self,
        circuit: CircuitId,
        kind: ArtifactKind,
    ) -> Result<ArtifactBytes, ArtifactError> {
        let url = self.artifact_url(kind.file_name(circuit));
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ArtifactError::Http {
                url: url.clone(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "artifact fetch failed");
            return Err(ArtifactError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| ArtifactError::Http {
            url: url.clone(),
            source: e,
        })?;
        tracing::debug!(
            circuit = %circuit,
            kind = %kind,
            url = %url,
            size = body.len(),
            "fetched artifact"
        );
        Ok(ArtifactBytes::from(body.as_ref()))
    }
}

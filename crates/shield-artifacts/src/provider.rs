//! # Artifact Provider Capability
//!
//! The orchestrator depends on this trait only. Concrete strategies live
//! in sibling modules; [`default_provider`] wires one up from an explicit
//! [`ArtifactEnvironment`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use shield_core::CircuitId;

use crate::config::{ArtifactConfig, ConfigError};
use crate::error::ArtifactError;
use crate::http::HttpArtifactProvider;
use crate::local::LocalArtifactProvider;

/// Raw artifact contents, shared without copying.
pub type ArtifactBytes = Arc<[u8]>;

/// The two artifacts a circuit needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Witness-generator WebAssembly module.
    Wasm,
    /// Groth16 proving key in zkey format.
    ProvingKey,
}

impl ArtifactKind {
    /// Relative filename of this artifact for `circuit`.
    pub fn file_name(self, circuit: CircuitId) -> &'static str {
        let config = circuit.config();
        match self {
            Self::Wasm => config.wasm_artifact_key,
            Self::ProvingKey => config.proving_key_artifact_key,
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wasm => f.write_str("wasm"),
            Self::ProvingKey => f.write_str("zkey"),
        }
    }
}

/// Source of circuit artifacts.
///
/// Implementations must be `Send + Sync`; the orchestrator fetches both
/// artifacts of a circuit concurrently.
#[async_trait]
pub trait ArtifactProvider: Send + Sync {
    /// Fetch one artifact.
    async fn fetch(
        &self,
        circuit: CircuitId,
        kind: ArtifactKind,
    ) -> Result<ArtifactBytes, ArtifactError>;

    /// The witness-generator module for `circuit`.
    async fn circuit_wasm(&self, circuit: CircuitId) -> Result<ArtifactBytes, ArtifactError> {
        self.fetch(circuit, ArtifactKind::Wasm).await
    }

    /// The proving key for `circuit`.
    async fn circuit_zkey(&self, circuit: CircuitId) -> Result<ArtifactBytes, ArtifactError> {
        self.fetch(circuit, ArtifactKind::ProvingKey).await
    }
}

#[async_trait]
impl<P: ArtifactProvider + ?Sized> ArtifactProvider for Arc<P> {
    async fn fetch(
        &self,
        circuit: CircuitId,
        kind: ArtifactKind,
    ) -> Result<ArtifactBytes, ArtifactError> {
        (**self).fetch(circuit, kind).await
    }
}

/// Host environment the default provider is chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactEnvironment {
    /// Process with filesystem access.
    Native,
    /// Sandboxed host that can only reach artifacts over the network.
    Browser,
}

impl Default for ArtifactEnvironment {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Browser
        } else {
            Self::Native
        }
    }
}

/// Build the default provider for `environment`.
///
/// Native hosts search the local filesystem; browser hosts fetch from
/// `config.base_url`.
///
/// # Errors
///
/// Returns `ConfigError::MissingBaseUrl` when `Browser` is selected without
/// a base URL, or an HTTP error if the client cannot be built.
pub fn default_provider(
    environment: ArtifactEnvironment,
    config: &ArtifactConfig,
) -> Result<Arc<dyn ArtifactProvider>, ArtifactError> {
    match environment {
        ArtifactEnvironment::Native => {
            tracing::debug!(root = %config.local_root.display(), "using local artifact provider");
            Ok(Arc::new(LocalArtifactProvider::from_config(config)))
        }
        ArtifactEnvironment::Browser => {
            let base_url = config.base_url.clone().ok_or(ConfigError::MissingBaseUrl)?;
            tracing::debug!(base_url = %base_url, "using HTTP artifact provider");
            Ok(Arc::new(HttpArtifactProvider::new(
                base_url,
                Duration::from_secs(config.timeout_secs),
            )?))
        }
    }
}

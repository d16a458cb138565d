//! Artifact provider configuration.
//!
//! Defaults suit a checkout with compiled circuits under `circuits/` at the
//! workspace root. Override via environment variables or explicit
//! construction.

use std::path::PathBuf;

use url::Url;

use crate::local::DEFAULT_SEARCH_DIRS;

/// Default HTTP timeout. Proving keys run to tens of megabytes.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// `circuits/` at the workspace root, independent of the working directory.
pub fn default_circuits_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // shield-artifacts
    dir.pop(); // crates
    dir.join("circuits")
}

/// Where circuit artifacts come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConfig {
    /// Root directory for local lookups.
    pub local_root: PathBuf,
    /// Subdirectories of `local_root` searched in order.
    pub search_dirs: Vec<PathBuf>,
    /// Base URL for network fetches. Required only when the network
    /// strategy is selected.
    pub base_url: Option<Url>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            local_root: default_circuits_dir(),
            search_dirs: DEFAULT_SEARCH_DIRS.iter().map(PathBuf::from).collect(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ArtifactConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SHIELD_CIRCUITS_DIR` (default: `circuits/` at the workspace root)
    /// - `SHIELD_ARTIFACT_SEARCH_DIRS` comma-separated (default: `build,circuits/build,artifacts,.`)
    /// - `SHIELD_ARTIFACT_BASE_URL` (optional)
    /// - `SHIELD_ARTIFACT_TIMEOUT_SECS` (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let local_root = std::env::var("SHIELD_CIRCUITS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.local_root);
        let search_dirs = match std::env::var("SHIELD_ARTIFACT_SEARCH_DIRS") {
            Ok(raw) => parse_search_dirs(&raw),
            Err(_) => defaults.search_dirs,
        };
        let base_url = match std::env::var("SHIELD_ARTIFACT_BASE_URL") {
            Ok(raw) => Some(parse_url("SHIELD_ARTIFACT_BASE_URL", &raw)?),
            Err(_) => None,
        };
        let timeout_secs = match std::env::var("SHIELD_ARTIFACT_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                ConfigError::InvalidNumber("SHIELD_ARTIFACT_TIMEOUT_SECS".to_string(), raw.clone())
            })?,
            Err(_) => defaults.timeout_secs,
        };
        Ok(Self {
            local_root,
            search_dirs,
            base_url,
            timeout_secs,
        })
    }

    /// Local-only configuration rooted at `root`.
    pub fn local(root: impl Into<PathBuf>) -> Self {
        Self {
            local_root: root.into(),
            ..Self::default()
        }
    }

    /// Network configuration for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` does not parse.
    pub fn remote(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Some(parse_url("base_url", base_url)?),
            ..Self::default()
        })
    }
}

fn parse_search_dirs(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid number for {0}: {1:?}")]
    InvalidNumber(String, String),
    #[error("network artifact provider selected but no base URL is configured")]
    MissingBaseUrl,
}

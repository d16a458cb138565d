//! Artifact retrieval error types.

use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Errors from fetching circuit artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// The file is absent from every candidate directory.
    #[error("{file} not found, searched: [{}]", join_paths(.searched))]
    NotFound { file: String, searched: Vec<PathBuf> },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// HTTP transport error.
    #[error("HTTP error fetching {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    /// The artifact server returned a non-2xx status.
    #[error("fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ArtifactError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

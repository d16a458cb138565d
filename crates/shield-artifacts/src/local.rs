//! Filesystem artifact lookup.
//!
//! Candidates are `{root}/{dir}/{file}` for each search directory in order.
//! The first regular file wins.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shield_core::CircuitId;

use crate::config::ArtifactConfig;
use crate::error::ArtifactError;
use crate::provider::{ArtifactBytes, ArtifactKind, ArtifactProvider};

/// Search order used when none is configured.
pub const DEFAULT_SEARCH_DIRS: [&str; 4] = ["build", "circuits/build", "artifacts", "."];

/// Reads artifacts from the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalArtifactProvider {
    root: PathBuf,
    search_dirs: Vec<PathBuf>,
}

impl LocalArtifactProvider {
    /// Provider rooted at `root` with the default search order.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_search_dirs(root, DEFAULT_SEARCH_DIRS.iter().map(PathBuf::from).collect())
    }

    pub fn with_search_dirs(root: impl Into<PathBuf>, search_dirs: Vec<PathBuf>) -> Self {
        Self {
            root: root.into(),
            search_dirs,
        }
    }

    pub fn from_config(config: &ArtifactConfig) -> Self {
        Self::with_search_dirs(config.local_root.clone(), config.search_dirs.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directories searched, in order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        self.search_dirs.iter().map(|d| self.root.join(d)).collect()
    }

    /// Path of the first candidate holding `file`.
    pub async fn locate(&self, file: &str) -> Result<PathBuf, ArtifactError> {
        let dirs = self.candidates();
        for dir in &dirs {
            let candidate = dir.join(file);
            match tokio::fs::metadata(&candidate).await {
                Ok(meta) if meta.is_file() => return Ok(candidate),
                Ok(_) => continue,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(ArtifactError::io(&candidate, e)),
            }
        }
        Err(ArtifactError::NotFound {
            file: file.to_string(),
            searched: dirs,
        })
    }
}

#[async_trait]
impl ArtifactProvider for LocalArtifactProvider {
    async fn fetch(
        &self,
        circuit: CircuitId,
        kind: ArtifactKind,
    ) -> Result<ArtifactBytes, ArtifactError> {
        let file = kind.file_name(circuit);
        let path = self.locate(file).await?;
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| ArtifactError::io(&path, e))?;
        tracing::debug!(
            circuit = %circuit,
            kind = %kind,
            path = %path.display(),
            size = bytes.len(),
            "loaded artifact from disk"
        );
        Ok(ArtifactBytes::from(bytes))
    }
}

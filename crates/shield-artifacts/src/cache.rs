//! # Single-Flight Artifact Cache
//!
//! Wraps any provider so that each `(circuit, kind)` pair is fetched at
//! most once per cache. Concurrent requests for the same artifact await
//! the same in-flight fetch. A failed fetch leaves the slot empty so the
//! next caller retries.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shield_core::CircuitId;
use tokio::sync::OnceCell;

use crate::error::ArtifactError;
use crate::provider::{ArtifactBytes, ArtifactKind, ArtifactProvider};

type Slot = Arc<OnceCell<ArtifactBytes>>;

/// In-memory cache in front of another provider.
pub struct CachingArtifactProvider<P> {
    inner: P,
    slots: Mutex<HashMap<(CircuitId, ArtifactKind), Slot>>,
}

impl<P: ArtifactProvider> CachingArtifactProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of artifacts currently held.
    pub fn cached(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    /// Drop every cached artifact.
    pub fn clear(&self) {
        self.slots.lock().clear();
    }

    fn slot(&self, circuit: CircuitId, kind: ArtifactKind) -> Slot {
        self.slots.lock().entry((circuit, kind)).or_default().clone()
    }
}

#[async_trait]
impl<P: ArtifactProvider> ArtifactProvider for CachingArtifactProvider<P> {
    async fn fetch(
        &self,
        circuit: CircuitId,
        kind: ArtifactKind,
    ) -> Result<ArtifactBytes, ArtifactError> {
        let slot = self.slot(circuit, kind);
        let bytes = slot
            .get_or_try_init(|| async {
                tracing::debug!(circuit = %circuit, kind = %kind, "artifact cache miss");
                self.inner.fetch(circuit, kind).await
            })
            .await?;
        Ok(bytes.clone())
    }
}

impl<P> std::fmt::Debug for CachingArtifactProvider<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingArtifactProvider")
            .field("slots", &self.slots.lock().len())
            .finish_non_exhaustive()
    }
}

//! # shield-artifacts: Circuit Artifact Retrieval
//!
//! Every proof needs two artifacts per circuit: the witness-generator
//! WebAssembly module (`{name}.wasm`) and the Groth16 proving key
//! (`{name}_pk.zkey`). This crate defines the [`ArtifactProvider`]
//! capability the orchestrator consumes and three strategies:
//!
//! - [`LocalArtifactProvider`] searches an ordered list of directories.
//! - [`HttpArtifactProvider`] fetches `{base_url}/{file}` over HTTP.
//! - [`CachingArtifactProvider`] wraps either with a single-flight
//!   in-memory cache.
//!
//! ## Strategy Selection
//!
//! Callers either pass a provider explicitly or let
//! [`default_provider`] pick one from an [`ArtifactEnvironment`] chosen at
//! the composition root. There is no runtime environment sniffing.
//!
//! ## Retries
//!
//! None. A failed fetch is returned immediately; callers embedding the
//! prover in a service apply their own retry policy around the whole proof.

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod local;
pub mod provider;

// Re-export primary types.
pub use cache::CachingArtifactProvider;
pub use config::{default_circuits_dir, ArtifactConfig, ConfigError};
pub use error::ArtifactError;
pub use http::HttpArtifactProvider;
pub use local::LocalArtifactProvider;
pub use provider::{
    default_provider, ArtifactBytes, ArtifactEnvironment, ArtifactKind, ArtifactProvider,
};

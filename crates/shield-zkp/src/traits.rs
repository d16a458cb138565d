//! # Prover and Compressor Traits
//!
//! The two heavy external capabilities the orchestrator drives. Witness
//! calculation, Groth16 proving, and point compression live behind these
//! traits so that the circom-backed prover and the mock are
//! interchangeable.
//!
//! ## Threading
//!
//! Both traits are synchronous and require `Send + Sync`. The orchestrator
//! calls them from tokio's blocking pool, never on an async worker.

use shield_core::{CircuitConfig, FormattedInputs};
use thiserror::Error;

use crate::proof::{CompressedProof, NativeProof, ProofArtifact};

/// Error raised by a prover or compressor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProverError {
    /// The proving key could not be parsed.
    #[error("proving key error: {0}")]
    ProvingKey(String),
    /// The witness generator rejected the inputs or crashed.
    #[error("witness error: {0}")]
    Witness(String),
    /// Groth16 proving failed.
    #[error("prover error: {0}")]
    Proving(String),
    /// A proof coordinate is not a valid curve point.
    #[error("malformed proof: {0}")]
    MalformedProof(String),
    /// Point compression failed.
    #[error("compression error: {0}")]
    Compression(String),
}

/// Produces a native Groth16 proof and ordered public signals.
pub trait WitnessProver: Send + Sync {
    /// Prove `circuit` for `inputs` using its witness-generator module and
    /// proving key.
    fn prove(
        &self,
        circuit: &CircuitConfig,
        inputs: &FormattedInputs,
        wasm: &[u8],
        zkey: &[u8],
    ) -> Result<ProofArtifact, ProverError>;
}

/// Turns a native proof into its fixed 128-byte canonical encoding.
pub trait ProofCompressor: Send + Sync {
    fn compress(&self, proof: &NativeProof) -> Result<CompressedProof, ProverError>;
}

//! # Proof Pipeline Errors
//!
//! One error kind per failure class a caller can act on. Lower-level
//! errors are mapped at stage boundaries in the orchestrator; the
//! underlying message is always preserved.

use shield_artifacts::ArtifactError;
use shield_core::{CircuitId, FieldError, InputError};
use thiserror::Error;

/// Errors surfaced by `generate_proof` and the disclosure protocol.
#[derive(Error, Debug)]
pub enum ProofError {
    /// Input bundle missing a value, malformed, or too deeply nested.
    /// Detected before any I/O.
    #[error("invalid inputs: {0}")]
    InvalidInputs(#[from] InputError),

    /// A public signal is outside `[0, PRIME)`.
    #[error("public signal {index} out of field range: {source}")]
    FieldRange {
        index: usize,
        #[source]
        source: FieldError,
    },

    /// The wasm or proving key for the circuit could not be obtained,
    /// whatever the underlying cause.
    #[error("circuit artifacts for {circuit} not found: {source}")]
    CircuitNotFound {
        circuit: CircuitId,
        #[source]
        source: ArtifactError,
    },

    /// The prover or compressor failed, or their output violated the
    /// proof-size or signal-count contract.
    #[error("proof generation failed: {0}")]
    ProofGeneration(String),

    /// A disclosure request revealed nothing.
    #[error("disclosure mask must reveal at least one field")]
    DisclosureMask,
}

impl ProofError {
    /// Short machine-readable kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInputs(_) => "invalid_inputs",
            Self::FieldRange { .. } => "field_range",
            Self::CircuitNotFound { .. } => "circuit_not_found",
            Self::ProofGeneration(_) => "proof_generation",
            Self::DisclosureMask => "disclosure_mask",
        }
    }
}

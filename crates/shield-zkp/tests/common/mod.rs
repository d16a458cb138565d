//! Shared fixtures for shield-zkp integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use shield_artifacts::{ArtifactBytes, ArtifactError, ArtifactKind, ArtifactProvider};
use shield_core::{CircuitConfig, CircuitId, CircuitInputs, FormattedInputs, InputValue};
use shield_zkp::{MockProver, ProofArtifact, ProverError, WitnessProver};

/// Serves each artifact's file name as its contents and counts calls.
#[derive(Default)]
pub struct MemoryProvider {
    calls: AtomicUsize,
}

impl MemoryProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArtifactProvider for MemoryProvider {
    async fn fetch(
        &self,
        circuit: CircuitId,
        kind: ArtifactKind,
    ) -> Result<ArtifactBytes, ArtifactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ArtifactBytes::from(kind.file_name(circuit).as_bytes()))
    }
}

/// Serves the wasm but fails on the proving key.
pub struct MissingZkeyProvider;

#[async_trait]
impl ArtifactProvider for MissingZkeyProvider {
    async fn fetch(
        &self,
        circuit: CircuitId,
        kind: ArtifactKind,
    ) -> Result<ArtifactBytes, ArtifactError> {
        match kind {
            ArtifactKind::Wasm => Ok(ArtifactBytes::from(&b"\0asm"[..])),
            ArtifactKind::ProvingKey => Err(ArtifactError::Status {
                url: format!("https://cdn.example/{}", kind.file_name(circuit)),
                status: 404,
            }),
        }
    }
}

/// Mock prover that counts invocations.
#[derive(Default)]
pub struct CountingProver {
    calls: AtomicUsize,
}

impl CountingProver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WitnessProver for CountingProver {
    fn prove(
        &self,
        circuit: &CircuitConfig,
        inputs: &FormattedInputs,
        wasm: &[u8],
        zkey: &[u8],
    ) -> Result<ProofArtifact, ProverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        MockProver.prove(circuit, inputs, wasm, zkey)
    }
}

/// Mock prover whose output drops the last public signal.
pub struct ShortProver;

impl WitnessProver for ShortProver {
    fn prove(
        &self,
        circuit: &CircuitConfig,
        inputs: &FormattedInputs,
        wasm: &[u8],
        zkey: &[u8],
    ) -> Result<ProofArtifact, ProverError> {
        let mut artifact = MockProver.prove(circuit, inputs, wasm, zkey)?;
        artifact.public_signals.pop();
        Ok(artifact)
    }
}

/// Prover that always fails the way an unsatisfied constraint does.
pub struct UnsatisfiedProver;

impl WitnessProver for UnsatisfiedProver {
    fn prove(
        &self,
        _circuit: &CircuitConfig,
        _inputs: &FormattedInputs,
        _wasm: &[u8],
        _zkey: &[u8],
    ) -> Result<ProofArtifact, ProverError> {
        Err(ProverError::Witness(
            "Assert Failed. Error in template Unshield line: 42".to_string(),
        ))
    }
}

pub fn memory_provider() -> Arc<MemoryProvider> {
    Arc::new(MemoryProvider::default())
}

/// Unshield bundle from the reference scenario, with private note fields
/// and a depth-4 Merkle path.
pub fn unshield_inputs() -> CircuitInputs {
    CircuitInputs::new()
        .with("merkle_root", "123")
        .with("nullifier", "456")
        .with("amount", "100")
        .with("recipient", "789")
        .with("asset_id", "0")
        .with("value", "100")
        .with("owner_secret", "0x2a")
        .with("blinding", 99i64)
        .with("leaf_index", 5u32)
        .with("path_elements", InputValue::list(["11", "12", "13", "14"]))
        .with("path_indices", InputValue::list([1i64, 0, 1, 0]))
}

/// Transfer bundle with per-input Merkle paths as a matrix.
pub fn transfer_inputs() -> CircuitInputs {
    CircuitInputs::new()
        .with("merkle_root", "1000")
        .with("input_nullifier_1", "2001")
        .with("input_nullifier_2", "2002")
        .with("output_commitment_1", "3001")
        .with("output_commitment_2", "0x0bba")
        .with("input_values", InputValue::list(["60", "40"]))
        .with("output_values", InputValue::list(["70", "30"]))
        .with(
            "path_elements",
            InputValue::matrix([["1", "2", "3"], ["4", "5", "6"]]),
        )
}

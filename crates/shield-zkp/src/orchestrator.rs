//! # Proof Orchestrator
//!
//! The `generate_proof` pipeline. Stages run in a fixed order and the
//! first failure ends the request:
//!
//! 1. Resolve the artifact provider (caller override or environment default).
//! 2. Resolve the circuit configuration.
//! 3. Validate and normalize the inputs. No I/O happens before this passes.
//! 4. Fetch the wasm and proving key concurrently.
//! 5. Prove on the blocking pool.
//! 6. Compress to 128 bytes and re-check the encoded length.
//! 7. Encode public signals as little-endian field elements.
//! 8. Check the signal count against the circuit.
//! 9. Return the wire-form result.
//!
//! Nothing is retried and no partial result is ever returned.

use std::sync::Arc;
use std::time::Instant;

use num_bigint::BigInt;
use shield_artifacts::{
    default_provider, ArtifactConfig, ArtifactEnvironment, ArtifactError, ArtifactProvider,
};
use shield_core::{encode_signal_le, CircuitId, CircuitInputs, FieldValue};

use crate::compress::ArkworksCompressor;
use crate::error::ProofError;
use crate::proof::{CompressedProof, ProofArtifact, ProofResult, COMPRESSED_PROOF_HEX_DIGITS};
use crate::traits::{ProofCompressor, WitnessProver};

/// Emit a stage event at `info` when verbose, `debug` otherwise.
macro_rules! stage {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

/// Per-call options.
#[derive(Clone, Default)]
pub struct ProofOptions {
    /// Log each stage at `info` instead of `debug`.
    pub verbose: bool,
    /// Artifact source for this call. When absent the orchestrator builds
    /// the default for its environment.
    pub provider: Option<Arc<dyn ArtifactProvider>>,
}

impl ProofOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn provider(mut self, provider: Arc<dyn ArtifactProvider>) -> Self {
        self.provider = Some(provider);
        self
    }
}

impl std::fmt::Debug for ProofOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProofOptions")
            .field("verbose", &self.verbose)
            .field("provider", &self.provider.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Drives a prover and compressor over artifacts from a provider.
#[derive(Clone)]
pub struct ProofOrchestrator {
    prover: Arc<dyn WitnessProver>,
    compressor: Arc<dyn ProofCompressor>,
    artifacts: ArtifactConfig,
    environment: ArtifactEnvironment,
}

impl ProofOrchestrator {
    /// Orchestrator with the arkworks compressor, default artifact config,
    /// and the platform's default environment.
    pub fn new(prover: Arc<dyn WitnessProver>) -> Self {
        Self {
            prover,
            compressor: Arc::new(ArkworksCompressor),
            artifacts: ArtifactConfig::default(),
            environment: ArtifactEnvironment::default(),
        }
    }

    pub fn with_compressor(mut self, compressor: Arc<dyn ProofCompressor>) -> Self {
        self.compressor = compressor;
        self
    }

    /// Configuration used to build the default provider.
    pub fn with_artifact_config(mut self, config: ArtifactConfig) -> Self {
        self.artifacts = config;
        self
    }

    pub fn with_environment(mut self, environment: ArtifactEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> ArtifactEnvironment {
        self.environment
    }

    /// Generate a proof for `circuit` from `inputs`.
    ///
    /// # Errors
    ///
    /// - `InvalidInputs` when an input is null, malformed, or nested too
    ///   deeply; the provider is never called.
    /// - `CircuitNotFound` when either artifact cannot be obtained.
    /// - `ProofGeneration` when proving or compression fails, or the result
    ///   violates the size or signal-count contract.
    /// - `FieldRange` when a public signal is outside the field.
    pub async fn generate_proof(
        &self,
        circuit: CircuitId,
        inputs: CircuitInputs,
        options: ProofOptions,
    ) -> Result<ProofResult, ProofError> {
        let verbose = options.verbose;
        let started = Instant::now();

        let provider = match options.provider {
            Some(provider) => provider,
            None => default_provider(self.environment, &self.artifacts)
                .map_err(|source| ProofError::CircuitNotFound { circuit, source })?,
        };

        let config = circuit.config();

        let formatted = inputs.format()?;
        stage!(verbose, circuit = %circuit, stage = "inputs", fields = formatted.len(), "inputs validated");

        let (wasm, zkey) = tokio::try_join!(
            provider.circuit_wasm(circuit),
            provider.circuit_zkey(circuit)
        )
        .map_err(|source: ArtifactError| {
            tracing::warn!(circuit = %circuit, error = %source, "artifact fetch failed");
            ProofError::CircuitNotFound { circuit, source }
        })?;
        stage!(
            verbose,
            circuit = %circuit,
            stage = "artifacts",
            wasm_bytes = wasm.len(),
            zkey_bytes = zkey.len(),
            "artifacts loaded"
        );

        let prover = Arc::clone(&self.prover);
        let compressor = Arc::clone(&self.compressor);
        let proving_started = Instant::now();
        let (artifact, compressed) = tokio::task::spawn_blocking(
            move || -> Result<(ProofArtifact, CompressedProof), ProofError> {
                let artifact = prover
                    .prove(config, &formatted, &wasm, &zkey)
                    .map_err(|e| ProofError::ProofGeneration(e.to_string()))?;
                let compressed = compressor
                    .compress(&artifact.proof)
                    .map_err(|e| ProofError::ProofGeneration(format!("compression failed: {e}")))?;
                Ok((artifact, compressed))
            },
        )
        .await
        .map_err(|e| ProofError::ProofGeneration(format!("prover task failed: {e}")))??;
        stage!(
            verbose,
            circuit = %circuit,
            stage = "prove",
            elapsed_ms = proving_started.elapsed().as_millis() as u64,
            "proof generated"
        );

        let proof = compressed.to_hex();
        if proof.len() != 2 + COMPRESSED_PROOF_HEX_DIGITS {
            return Err(ProofError::ProofGeneration(format!(
                "compressed proof has {} hex digits, expected {COMPRESSED_PROOF_HEX_DIGITS}",
                proof.len().saturating_sub(2)
            )));
        }

        let public_signals = encode_public_signals(&artifact.public_signals)?;

        let expected = config.expected_public_signal_count();
        if public_signals.len() != expected {
            return Err(ProofError::ProofGeneration(format!(
                "{circuit} proof has {} public signals, expected {expected}",
                public_signals.len()
            )));
        }

        stage!(
            verbose,
            circuit = %circuit,
            stage = "done",
            signals = public_signals.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "proof ready"
        );
        Ok(ProofResult {
            proof,
            public_signals,
            circuit_type: circuit,
        })
    }
}

impl std::fmt::Debug for ProofOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProofOrchestrator")
            .field("artifacts", &self.artifacts)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Decimal prover signals to little-endian wire form.
fn encode_public_signals(signals: &[String]) -> Result<Vec<String>, ProofError> {
    signals
        .iter()
        .enumerate()
        .map(|(index, signal)| {
            let n: BigInt = FieldValue::decimal(signal.as_str())
                .to_bigint()
                .map_err(|e| {
                    ProofError::ProofGeneration(format!("prover signal {index} is malformed: {e}"))
                })?;
            encode_signal_le(&n).map_err(|source| ProofError::FieldRange { index, source })
        })
        .collect()
}

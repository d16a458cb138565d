//! # Mock Prover
//!
//! A deterministic stand-in for witness calculation and Groth16 proving.
//! It echoes the circuit's public inputs, in circuit order, as the public
//! signals and returns the curve generators as the proof points.
//!
//! ## Security Notice
//!
//! The proof attests to nothing. Use it for development and tests of the
//! orchestration layer only; real proofs come from `CircomProver`.

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_groth16::Proof;
use shield_core::{CircuitConfig, FormattedInputs};

use crate::proof::{NativeProof, ProofArtifact};
use crate::traits::{ProverError, WitnessProver};

/// Deterministic prover that ignores the circuit artifacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProver;

impl WitnessProver for MockProver {
    fn prove(
        &self,
        circuit: &CircuitConfig,
        inputs: &FormattedInputs,
        _wasm: &[u8],
        _zkey: &[u8],
    ) -> Result<ProofArtifact, ProverError> {
        let public_signals = circuit
            .public_signals
            .iter()
            .map(|name| {
                inputs.scalar(name).map(str::to_string).ok_or_else(|| {
                    ProverError::Witness(format!(
                        "{} circuit has no scalar public input {name:?}",
                        circuit.name
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let proof = Proof::<Bn254> {
            a: G1Affine::generator(),
            b: G2Affine::generator(),
            c: G1Affine::generator(),
        };
        Ok(ProofArtifact {
            proof: NativeProof::from_ark(&proof),
            public_signals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shield_core::{CircuitId, CircuitInputs};

    #[test]
    fn echoes_public_inputs_in_circuit_order() {
        let inputs = CircuitInputs::new()
            .with("asset_id", "0")
            .with("recipient", "789")
            .with("amount", "100")
            .with("nullifier", "0x1c8")
            .with("merkle_root", 123i64)
            .with("secret", "42")
            .format()
            .unwrap();
        let artifact = MockProver
            .prove(CircuitId::Unshield.config(), &inputs, b"", b"")
            .unwrap();
        assert_eq!(artifact.public_signals, vec!["123", "456", "100", "789", "0"]);
        assert_eq!(artifact.proof.pi_a[0], "1");
    }

    #[test]
    fn missing_public_input_is_witness_error() {
        let inputs = CircuitInputs::new()
            .with("merkle_root", "1")
            .format()
            .unwrap();
        let err = MockProver
            .prove(CircuitId::Transfer.config(), &inputs, b"", b"")
            .unwrap_err();
        assert!(matches!(err, ProverError::Witness(ref m) if m.contains("input_nullifier_1")));
    }
}

//! # Proof Types
//!
//! - [`NativeProof`]: the prover's output in snarkjs JSON shape, decimal
//!   projective coordinates.
//! - [`ProofArtifact`]: a native proof plus decimal public signals.
//! - [`CompressedProof`]: the 128-byte canonical encoding.
//! - [`ProofResult`]: what callers receive, in wire form.

use serde::{Deserialize, Serialize};
use shield_core::CircuitId;

use crate::traits::ProverError;

/// Size of a compressed Groth16/BN254 proof: G1 (32) + G2 (64) + G1 (32).
pub const COMPRESSED_PROOF_BYTES: usize = 128;

/// Hex digits of a compressed proof, without the `0x` prefix.
pub const COMPRESSED_PROOF_HEX_DIGITS: usize = COMPRESSED_PROOF_BYTES * 2;

/// Groth16 proof with decimal-string projective coordinates.
///
/// `pi_a` and `pi_c` are `[x, y, z]`; `pi_b` is `[[x.c0, x.c1], [y.c0,
/// y.c1], [z.c0, z.c1]]`. Finite points have `z = 1`, the point at
/// infinity has `z = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeProof {
    pub pi_a: [String; 3],
    pub pi_b: [[String; 2]; 3],
    pub pi_c: [String; 3],
    #[serde(default = "groth16_protocol")]
    pub protocol: String,
    #[serde(default = "bn128_curve")]
    pub curve: String,
}

fn groth16_protocol() -> String {
    "groth16".to_string()
}

fn bn128_curve() -> String {
    "bn128".to_string()
}

impl NativeProof {
    pub fn new(pi_a: [String; 3], pi_b: [[String; 2]; 3], pi_c: [String; 3]) -> Self {
        Self {
            pi_a,
            pi_b,
            pi_c,
            protocol: groth16_protocol(),
            curve: bn128_curve(),
        }
    }
}

/// Native prover output for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofArtifact {
    pub proof: NativeProof,
    /// Public signals as decimal strings, in circuit order.
    pub public_signals: Vec<String>,
}

/// Canonical compressed proof.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CompressedProof([u8; COMPRESSED_PROOF_BYTES]);

impl CompressedProof {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProverError> {
        let array: [u8; COMPRESSED_PROOF_BYTES] = bytes.try_into().map_err(|_| {
            ProverError::Compression(format!(
                "compressed proof must be {COMPRESSED_PROOF_BYTES} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; COMPRESSED_PROOF_BYTES] {
        &self.0
    }

    /// `0x` + 256 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse the boundary form.
    pub fn from_hex(text: &str) -> Result<Self, ProverError> {
        let digits = text.strip_prefix("0x").unwrap_or(text);
        let bytes =
            hex::decode(digits).map_err(|e| ProverError::Compression(format!("bad hex: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

impl std::fmt::Debug for CompressedProof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompressedProof({})", self.to_hex())
    }
}

/// Successful `generate_proof` result in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofResult {
    /// `0x` + 256 hex digits.
    pub proof: String,
    /// Little-endian `0x` + 64 hex digit signals, in circuit order.
    pub public_signals: Vec<String>,
    pub circuit_type: CircuitId,
}

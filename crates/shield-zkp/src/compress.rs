//! # Proof Compression (arkworks)
//!
//! Converts between snarkjs-shaped [`NativeProof`] coordinates and
//! arkworks points, and produces the 128-byte compressed encoding with
//! `CanonicalSerialize::serialize_compressed`.
//!
//! ## Validation
//!
//! Every coordinate must be a canonical decimal below the base-field
//! modulus. Finite points must lie on the curve and in the prime-order
//! subgroup; G2 has a non-trivial cofactor so the subgroup check matters.

use ark_bn254::{Bn254, Fq, Fq2, G1Affine, G2Affine};
use ark_ff::{PrimeField, Zero};
use ark_groth16::Proof;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use num_bigint::BigUint;

use crate::proof::{CompressedProof, NativeProof, COMPRESSED_PROOF_BYTES};
use crate::traits::{ProofCompressor, ProverError};

fn parse_fq(text: &str, what: &str) -> Result<Fq, ProverError> {
    let value = BigUint::parse_bytes(text.trim().as_bytes(), 10).ok_or_else(|| {
        ProverError::MalformedProof(format!("{what} is not a decimal integer: {text:?}"))
    })?;
    if value >= BigUint::from(Fq::MODULUS) {
        return Err(ProverError::MalformedProof(format!(
            "{what} exceeds the base-field modulus"
        )));
    }
    Ok(Fq::from(value))
}

fn fq_to_decimal(f: &Fq) -> String {
    BigUint::from(f.into_bigint()).to_string()
}

/// Whether a normalized G1 `z` denotes a finite point.
fn is_finite(z: Fq, what: &str) -> Result<bool, ProverError> {
    if z.is_zero() {
        Ok(false)
    } else if z == Fq::from(1u64) {
        Ok(true)
    } else {
        Err(ProverError::MalformedProof(format!(
            "{what} is not normalized: z must be 0 or 1"
        )))
    }
}

fn g1_from_coords(coords: &[String; 3], what: &str) -> Result<G1Affine, ProverError> {
    let z = parse_fq(&coords[2], what)?;
    if !is_finite(z, what)? {
        return Ok(G1Affine::identity());
    }
    let point = G1Affine::new_unchecked(parse_fq(&coords[0], what)?, parse_fq(&coords[1], what)?);
    if !point.is_on_curve() {
        return Err(ProverError::MalformedProof(format!("{what} is not on G1")));
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(ProverError::MalformedProof(format!(
            "{what} is not in the G1 subgroup"
        )));
    }
    Ok(point)
}

fn g2_from_coords(coords: &[[String; 2]; 3], what: &str) -> Result<G2Affine, ProverError> {
    let fq2 = |pair: &[String; 2]| -> Result<Fq2, ProverError> {
        Ok(Fq2::new(parse_fq(&pair[0], what)?, parse_fq(&pair[1], what)?))
    };
    let z = fq2(&coords[2])?;
    if z.is_zero() {
        return Ok(G2Affine::identity());
    }
    if z != Fq2::new(Fq::from(1u64), Fq::zero()) {
        return Err(ProverError::MalformedProof(format!(
            "{what} is not normalized: z must be 0 or 1"
        )));
    }
    let point = G2Affine::new_unchecked(fq2(&coords[0])?, fq2(&coords[1])?);
    if !point.is_on_curve() {
        return Err(ProverError::MalformedProof(format!("{what} is not on G2")));
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(ProverError::MalformedProof(format!(
            "{what} is not in the G2 subgroup"
        )));
    }
    Ok(point)
}

fn g1_to_coords(p: &G1Affine) -> [String; 3] {
    if p.infinity {
        return ["0".to_string(), "1".to_string(), "0".to_string()];
    }
    [fq_to_decimal(&p.x), fq_to_decimal(&p.y), "1".to_string()]
}

fn g2_to_coords(p: &G2Affine) -> [[String; 2]; 3] {
    let pair = |f: &Fq2| [fq_to_decimal(&f.c0), fq_to_decimal(&f.c1)];
    if p.infinity {
        return [
            ["0".to_string(), "0".to_string()],
            ["1".to_string(), "0".to_string()],
            ["0".to_string(), "0".to_string()],
        ];
    }
    [
        pair(&p.x),
        pair(&p.y),
        ["1".to_string(), "0".to_string()],
    ]
}

impl NativeProof {
    /// Snarkjs-shaped coordinates of an arkworks proof.
    pub fn from_ark(proof: &Proof<Bn254>) -> Self {
        Self::new(
            g1_to_coords(&proof.a),
            g2_to_coords(&proof.b),
            g1_to_coords(&proof.c),
        )
    }

    /// Validated arkworks proof.
    pub fn to_ark(&self) -> Result<Proof<Bn254>, ProverError> {
        Ok(Proof {
            a: g1_from_coords(&self.pi_a, "pi_a")?,
            b: g2_from_coords(&self.pi_b, "pi_b")?,
            c: g1_from_coords(&self.pi_c, "pi_c")?,
        })
    }
}

/// Compressor backed by arkworks canonical serialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArkworksCompressor;

impl ArkworksCompressor {
    /// Inverse of `compress`, with full point validation.
    pub fn decompress(&self, proof: &CompressedProof) -> Result<NativeProof, ProverError> {
        let ark = Proof::<Bn254>::deserialize_compressed(&proof.as_bytes()[..])
            .map_err(|e| ProverError::Compression(e.to_string()))?;
        Ok(NativeProof::from_ark(&ark))
    }
}

impl ProofCompressor for ArkworksCompressor {
    fn compress(&self, proof: &NativeProof) -> Result<CompressedProof, ProverError> {
        let ark = proof.to_ark()?;
        let mut bytes = Vec::with_capacity(COMPRESSED_PROOF_BYTES);
        ark.serialize_compressed(&mut bytes)
            .map_err(|e| ProverError::Compression(e.to_string()))?;
        CompressedProof::from_bytes(&bytes)
    }
}

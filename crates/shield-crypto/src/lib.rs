//! # shield-crypto: Cryptographic Primitives
//!
//! The proving pipeline owns exactly one hash computation of its own: the
//! Disclosure circuit's viewing key, `Poseidon(owner_pubkey)`. It must use
//! the same Poseidon instance as the circuit (circom parameters, BN254
//! scalar field, single input) or the resulting proofs will not verify.
//!
//! Everything else cryptographic (witness calculation, Groth16) lives behind
//! the prover boundary in `shield-zkp`.

pub mod error;
pub mod poseidon;

// Re-export primary types.
pub use error::CryptoError;
pub use poseidon::{derive_viewing_key, poseidon_hash};

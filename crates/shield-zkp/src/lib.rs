//! # shield-zkp: Proof Orchestration for Shielded Assets
//!
//! Produces Groth16/BN254 proofs for the three circuits of the shielded
//! asset protocol (Unshield, Transfer, Disclosure) and returns them in a
//! fixed wire encoding.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): `WitnessProver` and `ProofCompressor`, the
//!   heavy external capabilities. Both are synchronous and run on tokio's
//!   blocking pool.
//!
//! - **Orchestrator** (`orchestrator.rs`): the `generate_proof` pipeline.
//!   Validates inputs, fetches artifacts concurrently through an
//!   `ArtifactProvider`, proves, compresses, and encodes public signals as
//!   little-endian field elements.
//!
//! - **Disclosure** (`disclosure.rs`): masked inputs for selective reveal,
//!   viewing-key derivation, and decoding of the revealed fields.
//!
//! - **Compression** (`compress.rs`): snarkjs coordinates to arkworks
//!   points to the 128-byte canonical encoding.
//!
//! - **Signals** (`signals.rs`): named views of positional public signals.
//!
//! ## Provers (Feature-Gated)
//!
//! - `mock` (default): `MockProver`, deterministic and insecure.
//! - `circom`: `CircomProver`, witness calculation with `ark-circom` and
//!   proving with `ark-groth16`.
//!
//! ## Crate Policy
//!
//! - Depends on `shield-core`, `shield-crypto`, and `shield-artifacts`.
//! - Installs no tracing subscriber.
//! - Nothing is retried; callers own retry and timeout policy.

pub mod compress;
pub mod disclosure;
pub mod error;
pub mod orchestrator;
pub mod proof;
pub mod signals;
pub mod traits;

#[cfg(feature = "circom")]
pub mod circom;
#[cfg(feature = "mock")]
pub mod mock;

pub use compress::ArkworksCompressor;
pub use disclosure::{
    build_disclosure_inputs, decode_revealed_data, DisclosureMask, DisclosureProof,
    DisclosureRequest, RevealedData,
};
pub use error::ProofError;
pub use orchestrator::{ProofOptions, ProofOrchestrator};
pub use proof::{CompressedProof, NativeProof, ProofArtifact, ProofResult};
pub use signals::{DisclosureSignals, PublicSignals, TransferSignals, UnshieldSignals};
pub use traits::{ProofCompressor, ProverError, WitnessProver};

#[cfg(feature = "circom")]
pub use circom::CircomProver;
#[cfg(feature = "mock")]
pub use mock::MockProver;

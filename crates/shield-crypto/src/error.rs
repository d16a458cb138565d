//! # Cryptographic Error Types

use thiserror::Error;

/// Errors from hashing operations in `shield-crypto`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Poseidon was called with an input count it has no parameters for.
    #[error("poseidon supports 1 to {max} inputs, got {actual}")]
    Arity { actual: usize, max: usize },

    /// The Poseidon backend rejected the call.
    #[error("poseidon hash failed: {0}")]
    Poseidon(String),
}

//! Typed views of a proof's public signals.
//!
//! Wire signals are positional; these structs name them. Each view checks
//! the circuit type and count before decoding.

use num_bigint::BigUint;
use shield_core::{decode_signal_le, CircuitId};

use crate::error::ProofError;
use crate::proof::ProofResult;

/// A circuit's public signals decoded by name.
pub trait PublicSignals: Sized {
    const CIRCUIT: CircuitId;

    /// Build from decoded values in circuit order. `values` has exactly the
    /// circuit's signal count.
    fn from_values(values: Vec<BigUint>) -> Self;

    /// Decode little-endian wire signals.
    fn from_wire(signals: &[String]) -> Result<Self, ProofError> {
        let expected = Self::CIRCUIT.config().expected_public_signal_count();
        if signals.len() != expected {
            return Err(ProofError::ProofGeneration(format!(
                "{} expects {expected} public signals, got {}",
                Self::CIRCUIT,
                signals.len()
            )));
        }
        let values = signals
            .iter()
            .enumerate()
            .map(|(index, s)| {
                decode_signal_le(s).map_err(|e| {
                    ProofError::ProofGeneration(format!("public signal {index}: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_values(values))
    }
}

impl ProofResult {
    /// Decode this result's signals as `T`.
    ///
    /// # Errors
    ///
    /// `ProofGeneration` if the result belongs to a different circuit or a
    /// signal does not decode.
    pub fn signals<T: PublicSignals>(&self) -> Result<T, ProofError> {
        if self.circuit_type != T::CIRCUIT {
            return Err(ProofError::ProofGeneration(format!(
                "{} result cannot be read as {} signals",
                self.circuit_type,
                T::CIRCUIT
            )));
        }
        T::from_wire(&self.public_signals)
    }
}

macro_rules! signal_view {
    ($(#[$doc:meta])* $name:ident, $circuit:expr, [$($field:ident),+ $(,)?]) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: BigUint,)+
        }

        impl PublicSignals for $name {
            const CIRCUIT: CircuitId = $circuit;

            fn from_values(values: Vec<BigUint>) -> Self {
                let mut values = values.into_iter();
                Self {
                    $($field: values.next().unwrap_or_default(),)+
                }
            }
        }
    };
}

signal_view!(
    /// Unshield: withdrawal of `amount` of `asset_id` to `recipient`.
    UnshieldSignals,
    CircuitId::Unshield,
    [merkle_root, nullifier, amount, recipient, asset_id]
);

signal_view!(
    /// Transfer: two notes spent, two created.
    TransferSignals,
    CircuitId::Transfer,
    [
        merkle_root,
        input_nullifier_1,
        input_nullifier_2,
        output_commitment_1,
        output_commitment_2,
    ]
);

signal_view!(
    /// Disclosure: withheld fields read as zero.
    DisclosureSignals,
    CircuitId::Disclosure,
    [commitment, revealed_value, revealed_asset_id, revealed_owner_hash]
);

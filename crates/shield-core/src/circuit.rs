//! # Circuit Registry
//!
//! The three circuits of the shielded-asset protocol and their static
//! configuration. Lookup is total: every [`CircuitId`] has exactly one
//! [`CircuitConfig`], and configs never change at runtime.
//!
//! ## Public-Signal Layout
//!
//! | Circuit | Signals (index 0..n) |
//! |---------|----------------------|
//! | Unshield | merkle_root, nullifier, amount, recipient, asset_id |
//! | Transfer | merkle_root, input_nullifier_1, input_nullifier_2, output_commitment_1, output_commitment_2 |
//! | Disclosure | commitment, revealed_value, revealed_asset_id, revealed_owner_hash |
//!
//! Order is positional and must never be rearranged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownCircuit;

/// Identifier of one of the fixed circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircuitId {
    /// Withdraw a note to a public address.
    Unshield,
    /// Private 2-in/2-out transfer.
    Transfer,
    /// Selective reveal of note fields to an auditor.
    Disclosure,
}

impl CircuitId {
    pub const ALL: [CircuitId; 3] = [Self::Unshield, Self::Transfer, Self::Disclosure];

    /// Static configuration for this circuit.
    pub fn config(self) -> &'static CircuitConfig {
        match self {
            Self::Unshield => &UNSHIELD,
            Self::Transfer => &TRANSFER,
            Self::Disclosure => &DISCLOSURE,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.config().name
    }
}

impl fmt::Display for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CircuitId {
    type Err = UnknownCircuit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCircuit(s.to_string()))
    }
}

/// Static description of a circuit's artifacts and public interface.
#[derive(Debug, PartialEq, Eq)]
pub struct CircuitConfig {
    pub id: CircuitId,
    /// Base name shared by the circuit's artifacts.
    pub name: &'static str,
    /// File name of the witness-generator WebAssembly module.
    pub wasm_artifact_key: &'static str,
    /// File name of the Groth16 proving key.
    pub proving_key_artifact_key: &'static str,
    /// Public signal names in wire order.
    pub public_signals: &'static [&'static str],
}

impl CircuitConfig {
    /// Number of public signals a successful proof must carry.
    pub fn expected_public_signal_count(&self) -> usize {
        self.public_signals.len()
    }

    /// Wire position of a named public signal.
    pub fn signal_index(&self, name: &str) -> Option<usize> {
        self.public_signals.iter().position(|s| *s == name)
    }
}

static UNSHIELD: CircuitConfig = CircuitConfig {
    id: CircuitId::Unshield,
    name: "unshield",
    wasm_artifact_key: "unshield.wasm",
    proving_key_artifact_key: "unshield_pk.zkey",
    public_signals: &["merkle_root", "nullifier", "amount", "recipient", "asset_id"],
};

static TRANSFER: CircuitConfig = CircuitConfig {
    id: CircuitId::Transfer,
    name: "transfer",
    wasm_artifact_key: "transfer.wasm",
    proving_key_artifact_key: "transfer_pk.zkey",
    public_signals: &[
        "merkle_root",
        "input_nullifier_1",
        "input_nullifier_2",
        "output_commitment_1",
        "output_commitment_2",
    ],
};

static DISCLOSURE: CircuitConfig = CircuitConfig {
    id: CircuitId::Disclosure,
    name: "disclosure",
    wasm_artifact_key: "disclosure.wasm",
    proving_key_artifact_key: "disclosure_pk.zkey",
    public_signals: &[
        "commitment",
        "revealed_value",
        "revealed_asset_id",
        "revealed_owner_hash",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_counts() {
        assert_eq!(CircuitId::Unshield.config().expected_public_signal_count(), 5);
        assert_eq!(CircuitId::Transfer.config().expected_public_signal_count(), 5);
        assert_eq!(CircuitId::Disclosure.config().expected_public_signal_count(), 4);
    }

    #[test]
    fn lookup_is_total_and_consistent() {
        for id in CircuitId::ALL {
            let config = id.config();
            assert_eq!(config.id, id);
            assert_eq!(config.wasm_artifact_key, format!("{}.wasm", config.name));
            assert_eq!(
                config.proving_key_artifact_key,
                format!("{}_pk.zkey", config.name)
            );
        }
    }

    #[test]
    fn parse_round_trips_display() {
        for id in CircuitId::ALL {
            assert_eq!(id.to_string().parse::<CircuitId>().unwrap(), id);
        }
        assert_eq!("UNSHIELD".parse::<CircuitId>().unwrap(), CircuitId::Unshield);
        assert!("shield".parse::<CircuitId>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&CircuitId::Disclosure).unwrap();
        assert_eq!(json, "\"disclosure\"");
        let back: CircuitId = serde_json::from_str("\"transfer\"").unwrap();
        assert_eq!(back, CircuitId::Transfer);
    }

    #[test]
    fn signal_positions_are_fixed() {
        let unshield = CircuitId::Unshield.config();
        assert_eq!(unshield.signal_index("merkle_root"), Some(0));
        assert_eq!(unshield.signal_index("asset_id"), Some(4));
        let disclosure = CircuitId::Disclosure.config();
        assert_eq!(disclosure.signal_index("revealed_owner_hash"), Some(3));
        assert_eq!(disclosure.signal_index("nullifier"), None);
    }
}

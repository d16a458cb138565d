//! # Selective Disclosure
//!
//! Proves facts about a note to an auditor while revealing only the fields
//! the owner chooses. The disclosure circuit takes the full note privately
//! and exposes four public signals:
//!
//! | index | signal                | value when disclosed | otherwise |
//! |-------|-----------------------|----------------------|-----------|
//! | 0     | `commitment`          | always               | n/a       |
//! | 1     | `revealed_value`      | `value`              | 0         |
//! | 2     | `revealed_asset_id`   | `asset_id`           | 0         |
//! | 3     | `revealed_owner_hash` | `viewing_key`        | 0         |
//!
//! `viewing_key = Poseidon(owner_pubkey)` with the circom single-input
//! parameters. The circuit recomputes it, so any other hash or arity
//! yields proofs that never verify.
//!
//! Decoding is driven by the mask, not by the signal values: a disclosed
//! zero is present as `"0"`, a withheld field is absent.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use shield_core::{
    decode_signal_le, field_to_hex_be, CircuitConfig, CircuitId, CircuitInputs, FieldValue,
    InputError,
};
use shield_crypto::derive_viewing_key;

use crate::error::ProofError;
use crate::orchestrator::{ProofOptions, ProofOrchestrator};
use crate::proof::ProofResult;

/// Which note fields a disclosure proof reveals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureMask {
    pub disclose_value: bool,
    pub disclose_asset_id: bool,
    pub disclose_owner: bool,
}

impl DisclosureMask {
    pub fn new(disclose_value: bool, disclose_asset_id: bool, disclose_owner: bool) -> Self {
        Self {
            disclose_value,
            disclose_asset_id,
            disclose_owner,
        }
    }

    /// Reveal every field.
    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    /// The seven masks that reveal at least one field.
    pub fn nonempty() -> impl Iterator<Item = Self> {
        (1u8..8).map(|bits| Self::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
    }

    pub fn is_empty(&self) -> bool {
        !(self.disclose_value || self.disclose_asset_id || self.disclose_owner)
    }

    /// # Errors
    ///
    /// `ProofError::DisclosureMask` when nothing would be revealed.
    pub fn validate(&self) -> Result<(), ProofError> {
        if self.is_empty() {
            return Err(ProofError::DisclosureMask);
        }
        Ok(())
    }
}

/// A note and the fields to reveal from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureRequest {
    pub value: FieldValue,
    pub owner_pubkey: FieldValue,
    pub blinding: FieldValue,
    pub asset_id: FieldValue,
    pub commitment: FieldValue,
    pub mask: DisclosureMask,
}

/// Fields recovered from a disclosure proof's public signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealedData {
    /// Commitment in wire form (little-endian hex).
    pub commitment: String,
    /// Decimal note value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Disclosed asset id. An id of `2^64` or more fails the whole call
    /// with `ProofError::ProofGeneration`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<u64>,
    /// Owner viewing key as big-endian `0x` hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_hash: Option<String>,
}

/// A disclosure proof together with what it reveals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureProof {
    #[serde(flatten)]
    pub result: ProofResult,
    pub revealed_data: RevealedData,
}

fn field(name: &str, value: &FieldValue) -> Result<BigInt, ProofError> {
    value.to_bigint().map_err(|source| {
        ProofError::InvalidInputs(InputError::Field {
            field: name.to_string(),
            source,
        })
    })
}

fn flag(on: bool) -> FieldValue {
    FieldValue::decimal(if on { "1" } else { "0" })
}

fn zero() -> FieldValue {
    FieldValue::Integer(0)
}

/// Masked inputs for the disclosure circuit.
///
/// # Errors
///
/// `DisclosureMask` for an all-false mask, checked first. `InvalidInputs`
/// if the owner key does not parse.
pub fn build_disclosure_inputs(request: &DisclosureRequest) -> Result<CircuitInputs, ProofError> {
    request.mask.validate()?;
    let mask = request.mask;

    let owner_pubkey = field("owner_pubkey", &request.owner_pubkey)?;
    let viewing_key = derive_viewing_key(&owner_pubkey)
        .map_err(|e| ProofError::ProofGeneration(format!("viewing key derivation failed: {e}")))?;
    let viewing_key = FieldValue::from(viewing_key);

    let revealed_value = if mask.disclose_value {
        request.value.clone()
    } else {
        zero()
    };
    let revealed_asset_id = if mask.disclose_asset_id {
        request.asset_id.clone()
    } else {
        zero()
    };
    let revealed_owner_hash = if mask.disclose_owner {
        viewing_key.clone()
    } else {
        zero()
    };

    Ok(CircuitInputs::new()
        .with("commitment", request.commitment.clone())
        .with("revealed_value", revealed_value)
        .with("revealed_asset_id", revealed_asset_id)
        .with("revealed_owner_hash", revealed_owner_hash)
        .with("value", request.value.clone())
        .with("asset_id", request.asset_id.clone())
        .with("owner_pubkey", request.owner_pubkey.clone())
        .with("blinding", request.blinding.clone())
        .with("viewing_key", viewing_key)
        .with("disclose_value", flag(mask.disclose_value))
        .with("disclose_asset_id", flag(mask.disclose_asset_id))
        .with("disclose_owner", flag(mask.disclose_owner)))
}

fn signal<'a>(
    config: &CircuitConfig,
    signals: &'a [String],
    name: &str,
) -> Result<&'a str, ProofError> {
    config
        .signal_index(name)
        .and_then(|i| signals.get(i))
        .map(String::as_str)
        .ok_or_else(|| ProofError::ProofGeneration(format!("disclosure proof lacks {name}")))
}

fn decode(text: &str, name: &str) -> Result<num_bigint::BigUint, ProofError> {
    decode_signal_le(text)
        .map_err(|e| ProofError::ProofGeneration(format!("cannot decode {name}: {e}")))
}

/// Recover revealed fields from disclosure public signals.
///
/// # Errors
///
/// `ProofGeneration` if the signal count is wrong, a revealed signal does
/// not decode, or a revealed asset id exceeds `u64`.
pub fn decode_revealed_data(
    public_signals: &[String],
    mask: DisclosureMask,
) -> Result<RevealedData, ProofError> {
    let config = CircuitId::Disclosure.config();
    let expected = config.expected_public_signal_count();
    if public_signals.len() != expected {
        return Err(ProofError::ProofGeneration(format!(
            "disclosure proof has {} public signals, expected {expected}",
            public_signals.len()
        )));
    }

    let commitment = signal(config, public_signals, "commitment")?.to_string();

    let value = if mask.disclose_value {
        let raw = signal(config, public_signals, "revealed_value")?;
        Some(decode(raw, "revealed_value")?.to_string())
    } else {
        None
    };

    let asset_id = if mask.disclose_asset_id {
        let raw = signal(config, public_signals, "revealed_asset_id")?;
        let decoded = decode(raw, "revealed_asset_id")?;
        Some(u64::try_from(&decoded).map_err(|_| {
            ProofError::ProofGeneration(format!("revealed asset id {decoded} exceeds u64"))
        })?)
    } else {
        None
    };

    let owner_hash = if mask.disclose_owner {
        let raw = signal(config, public_signals, "revealed_owner_hash")?;
        Some(field_to_hex_be(&decode(raw, "revealed_owner_hash")?))
    } else {
        None
    };

    Ok(RevealedData {
        commitment,
        value,
        asset_id,
        owner_hash,
    })
}

impl ProofOrchestrator {
    /// Build masked inputs, prove with the disclosure circuit, and decode
    /// the revealed fields.
    ///
    /// An all-false mask is rejected before any hashing, I/O, or proving.
    pub async fn generate_disclosure_proof(
        &self,
        request: DisclosureRequest,
        options: ProofOptions,
    ) -> Result<DisclosureProof, ProofError> {
        let inputs = build_disclosure_inputs(&request)?;
        tracing::debug!(
            disclose_value = request.mask.disclose_value,
            disclose_asset_id = request.mask.disclose_asset_id,
            disclose_owner = request.mask.disclose_owner,
            "disclosure inputs built"
        );
        let result = self
            .generate_proof(CircuitId::Disclosure, inputs, options)
            .await?;
        let revealed_data = decode_revealed_data(&result.public_signals, request.mask)?;
        Ok(DisclosureProof {
            result,
            revealed_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shield_core::encode_signal_le;
    use shield_crypto::poseidon_hash;

    fn request(mask: DisclosureMask) -> DisclosureRequest {
        DisclosureRequest {
            value: FieldValue::from(100i64),
            owner_pubkey: FieldValue::decimal("987654321"),
            blinding: FieldValue::hex("0xdeadbeef"),
            asset_id: FieldValue::from(7u64),
            commitment: FieldValue::decimal("5555"),
            mask,
        }
    }

    fn wire(n: i64) -> String {
        encode_signal_le(&BigInt::from(n)).unwrap()
    }

    #[test]
    fn seven_nonempty_masks() {
        let masks: Vec<_> = DisclosureMask::nonempty().collect();
        assert_eq!(masks.len(), 7);
        assert!(masks.iter().all(|m| !m.is_empty()));
        assert!(DisclosureMask::default().is_empty());
    }

    #[test]
    fn empty_mask_rejected_before_hashing() {
        let mut req = request(DisclosureMask::default());
        req.owner_pubkey = FieldValue::decimal("not a number");
        assert!(matches!(
            build_disclosure_inputs(&req),
            Err(ProofError::DisclosureMask)
        ));
    }

    #[test]
    fn withheld_fields_are_zeroed() {
        let inputs = build_disclosure_inputs(&request(DisclosureMask::new(true, false, false)))
            .unwrap()
            .format()
            .unwrap();
        assert_eq!(inputs.scalar("revealed_value"), Some("100"));
        assert_eq!(inputs.scalar("revealed_asset_id"), Some("0"));
        assert_eq!(inputs.scalar("revealed_owner_hash"), Some("0"));
        assert_eq!(inputs.scalar("asset_id"), Some("7"));
        assert_eq!(inputs.scalar("blinding"), Some("3735928559"));
        assert_eq!(inputs.scalar("disclose_value"), Some("1"));
        assert_eq!(inputs.scalar("disclose_asset_id"), Some("0"));
        assert_eq!(inputs.scalar("disclose_owner"), Some("0"));
        assert_eq!(inputs.len(), 12);
    }

    #[test]
    fn owner_hash_is_single_input_poseidon() {
        let inputs = build_disclosure_inputs(&request(DisclosureMask::new(false, false, true)))
            .unwrap()
            .format()
            .unwrap();
        let expected = poseidon_hash(&[BigInt::from(987654321u64)]).unwrap().to_string();
        assert_eq!(inputs.scalar("viewing_key"), Some(expected.as_str()));
        assert_eq!(inputs.scalar("revealed_owner_hash"), Some(expected.as_str()));
        assert_eq!(inputs.scalar("revealed_value"), Some("0"));
    }

    #[test]
    fn bad_owner_key_is_invalid_input() {
        let mut req = request(DisclosureMask::all());
        req.owner_pubkey = FieldValue::decimal("abc");
        assert!(matches!(
            build_disclosure_inputs(&req),
            Err(ProofError::InvalidInputs(_))
        ));
    }

    #[test]
    fn decode_respects_mask_presence() {
        let signals = vec![wire(5555), wire(0), wire(7), wire(256)];
        for mask in DisclosureMask::nonempty() {
            let revealed = decode_revealed_data(&signals, mask).unwrap();
            assert_eq!(revealed.commitment, signals[0]);
            assert_eq!(revealed.value.is_some(), mask.disclose_value);
            assert_eq!(revealed.asset_id.is_some(), mask.disclose_asset_id);
            assert_eq!(revealed.owner_hash.is_some(), mask.disclose_owner);
        }
        let all = decode_revealed_data(&signals, DisclosureMask::all()).unwrap();
        assert_eq!(all.value.as_deref(), Some("0"));
        assert_eq!(all.asset_id, Some(7));
        assert_eq!(
            all.owner_hash.as_deref(),
            Some(format!("0x{}0100", "0".repeat(60)).as_str())
        );
    }

    #[test]
    fn decode_rejects_wrong_count() {
        let err = decode_revealed_data(&[wire(1)], DisclosureMask::all()).unwrap_err();
        assert!(matches!(err, ProofError::ProofGeneration(_)));
    }

    #[test]
    fn oversized_asset_id_rejected() {
        let big = BigInt::from(u64::MAX) + 1;
        let signals = vec![wire(1), wire(0), encode_signal_le(&big).unwrap(), wire(0)];
        let err = decode_revealed_data(&signals, DisclosureMask::new(false, true, false));
        assert!(matches!(err, Err(ProofError::ProofGeneration(ref m)) if m.contains("exceeds u64")));

        // Withheld, the same signal is never decoded.
        let revealed = decode_revealed_data(&signals, DisclosureMask::new(true, false, false))
            .unwrap();
        assert_eq!(revealed.asset_id, None);
    }

    #[test]
    fn revealed_data_omits_absent_fields() {
        let revealed = RevealedData {
            commitment: wire(1),
            value: Some("100".to_string()),
            asset_id: None,
            owner_hash: None,
        };
        let json = serde_json::to_value(&revealed).unwrap();
        assert_eq!(json["value"], "100");
        assert!(json.get("assetId").is_none());
        assert!(json.get("ownerHash").is_none());
    }
}

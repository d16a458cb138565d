//! # Integration Tests for Selective Disclosure
//!
//! Runs `generate_disclosure_proof` through the full pipeline with the
//! mock prover, which echoes the masked public inputs back as signals, so
//! the decoded `RevealedData` reflects exactly what the circuit would
//! expose.

#![cfg(feature = "mock")]

mod common;

use std::sync::Arc;

use common::{memory_provider, CountingProver};
use num_bigint::{BigInt, BigUint};
use shield_core::{encode_signal_le, field_to_hex_be, CircuitId, FieldValue};
use shield_crypto::poseidon_hash;
use shield_zkp::{
    DisclosureMask, DisclosureRequest, DisclosureSignals, MockProver, ProofError, ProofOptions,
    ProofOrchestrator,
};

const OWNER_PUBKEY: &str =
    "12345678901234567890123456789012345678901234567890123456789012345678901234";

fn request(mask: DisclosureMask) -> DisclosureRequest {
    DisclosureRequest {
        value: FieldValue::decimal("100"),
        owner_pubkey: FieldValue::decimal(OWNER_PUBKEY),
        blinding: FieldValue::hex("0x1f2e3d4c"),
        asset_id: FieldValue::Integer(3),
        commitment: FieldValue::decimal("777"),
        mask,
    }
}

fn orchestrator() -> ProofOrchestrator {
    ProofOrchestrator::new(Arc::new(MockProver))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn value_only_reveals_value() {
    let proof = orchestrator()
        .generate_disclosure_proof(
            request(DisclosureMask::new(true, false, false)),
            ProofOptions::new().provider(memory_provider()),
        )
        .await
        .expect("disclosure proof");

    let revealed = &proof.revealed_data;
    assert_eq!(revealed.value.as_deref(), Some("100"));
    assert_eq!(revealed.asset_id, None);
    assert_eq!(revealed.owner_hash, None);
    assert_eq!(
        revealed.commitment,
        encode_signal_le(&BigInt::from(777)).expect("encode")
    );
    assert_eq!(proof.result.public_signals.len(), 4);
    assert_eq!(proof.result.circuit_type, CircuitId::Disclosure);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn every_nonempty_mask_reveals_exactly_its_fields() {
    let orchestrator = orchestrator();
    for mask in DisclosureMask::nonempty() {
        let proof = orchestrator
            .generate_disclosure_proof(
                request(mask),
                ProofOptions::new().provider(memory_provider()),
            )
            .await
            .expect("disclosure proof");
        let revealed = &proof.revealed_data;

        assert_eq!(revealed.commitment, proof.result.public_signals[0]);
        assert_eq!(revealed.value.is_some(), mask.disclose_value, "{mask:?}");
        assert_eq!(revealed.asset_id.is_some(), mask.disclose_asset_id, "{mask:?}");
        assert_eq!(revealed.owner_hash.is_some(), mask.disclose_owner, "{mask:?}");

        let signals: DisclosureSignals = proof.result.signals().expect("typed signals");
        if !mask.disclose_value {
            assert_eq!(signals.revealed_value, BigUint::from(0u32));
        }
        if !mask.disclose_asset_id {
            assert_eq!(signals.revealed_asset_id, BigUint::from(0u32));
        }
        if !mask.disclose_owner {
            assert_eq!(signals.revealed_owner_hash, BigUint::from(0u32));
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn owner_hash_matches_independent_poseidon() {
    let proof = orchestrator()
        .generate_disclosure_proof(
            request(DisclosureMask::new(false, false, true)),
            ProofOptions::new().provider(memory_provider()),
        )
        .await
        .expect("disclosure proof");

    let pk: BigInt = OWNER_PUBKEY.parse().expect("decimal");
    let expected = field_to_hex_be(&poseidon_hash(&[pk]).expect("poseidon"));
    assert_eq!(proof.revealed_data.owner_hash.as_deref(), Some(expected.as_str()));
    assert_eq!(proof.revealed_data.value, None);
    assert_eq!(proof.revealed_data.asset_id, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn full_mask_reveals_asset_as_integer() {
    let proof = orchestrator()
        .generate_disclosure_proof(
            request(DisclosureMask::all()),
            ProofOptions::new().provider(memory_provider()),
        )
        .await
        .expect("disclosure proof");
    assert_eq!(proof.revealed_data.asset_id, Some(3));

    let json = serde_json::to_value(&proof).expect("json");
    assert_eq!(json["circuitType"], "disclosure");
    assert_eq!(json["revealedData"]["assetId"], 3);
    assert_eq!(json["revealedData"]["value"], "100");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn empty_mask_rejected_before_proving() {
    let provider = memory_provider();
    let prover = Arc::new(CountingProver::default());

    let err = ProofOrchestrator::new(prover.clone())
        .generate_disclosure_proof(
            request(DisclosureMask::new(false, false, false)),
            ProofOptions::new().provider(provider.clone()),
        )
        .await
        .expect_err("empty mask must fail");

    assert!(matches!(err, ProofError::DisclosureMask));
    assert_eq!(provider.calls(), 0);
    assert_eq!(prover.calls(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn disclosed_zero_is_present() {
    let mut req = request(DisclosureMask::new(true, true, false));
    req.value = FieldValue::Integer(0);
    req.asset_id = FieldValue::Integer(0);
    let proof = orchestrator()
        .generate_disclosure_proof(req, ProofOptions::new().provider(memory_provider()))
        .await
        .expect("disclosure proof");
    assert_eq!(proof.revealed_data.value.as_deref(), Some("0"));
    assert_eq!(proof.revealed_data.asset_id, Some(0));
}

//! # Circom Prover
//!
//! Real witness calculation and Groth16 proving from circom build
//! artifacts:
//!
//! 1. Parse the zkey into a proving key and constraint matrices.
//! 2. Instantiate the witness-generator module with wasmer.
//! 3. Calculate the full assignment from the flattened inputs.
//! 4. Prove with the circom QAP reduction and fresh randomness.
//!
//! Public signals are assignment entries `1..num_instance_variables`; entry
//! 0 is the constant one wire.

use std::collections::HashMap;
use std::io::Cursor;

use ark_bn254::{Bn254, Fr};
use ark_circom::{read_zkey, CircomReduction, WitnessCalculator};
use ark_ff::{PrimeField, UniformRand};
use ark_groth16::Groth16;
use num_bigint::{BigInt, BigUint};
use shield_core::{CircuitConfig, FormattedInputs};
use wasmer::{Module, Store};

use crate::proof::{NativeProof, ProofArtifact};
use crate::traits::{ProverError, WitnessProver};

/// Prover backed by `ark-circom` and `ark-groth16`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircomProver;

fn fr_to_decimal(f: &Fr) -> String {
    BigUint::from(f.into_bigint()).to_string()
}

impl WitnessProver for CircomProver {
    fn prove(
        &self,
        circuit: &CircuitConfig,
        inputs: &FormattedInputs,
        wasm: &[u8],
        zkey: &[u8],
    ) -> Result<ProofArtifact, ProverError> {
        let mut cursor = Cursor::new(zkey);
        let (pk, matrices) =
            read_zkey(&mut cursor).map_err(|e| ProverError::ProvingKey(e.to_string()))?;

        let mut store = Store::default();
        let module = Module::new(&store, wasm)
            .map_err(|e| ProverError::Witness(format!("wasm compile: {e}")))?;
        let mut calculator = WitnessCalculator::from_module(&mut store, module)
            .map_err(|e| ProverError::Witness(e.to_string()))?;

        let witness_inputs: HashMap<String, Vec<BigInt>> = inputs
            .flatten()
            .map_err(|e| ProverError::Witness(e.to_string()))?
            .into_iter()
            .collect();
        let assignment = calculator
            .calculate_witness_element::<Fr, _>(&mut store, witness_inputs, false)
            .map_err(|e| ProverError::Witness(e.to_string()))?;

        let num_instance = matrices.num_instance_variables;
        if num_instance == 0 || assignment.len() < num_instance {
            return Err(ProverError::Witness(format!(
                "witness has {} wires, proving key expects at least {num_instance}",
                assignment.len()
            )));
        }
        tracing::debug!(
            circuit = circuit.name,
            wires = assignment.len(),
            constraints = matrices.num_constraints,
            "witness calculated"
        );

        let mut rng = rand::thread_rng();
        let r = Fr::rand(&mut rng);
        let s = Fr::rand(&mut rng);
        let proof = Groth16::<Bn254, CircomReduction>::create_proof_with_reduction_and_matrices(
            &pk,
            r,
            s,
            &matrices,
            num_instance,
            matrices.num_constraints,
            assignment.as_slice(),
        )
        .map_err(|e| ProverError::Proving(e.to_string()))?;

        Ok(ProofArtifact {
            proof: NativeProof::from_ark(&proof),
            public_signals: assignment[1..num_instance].iter().map(fr_to_decimal).collect(),
        })
    }
}

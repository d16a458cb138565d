//! # Poseidon Hash (circom parameters)
//!
//! Poseidon over the BN254 scalar field with the parameter set used by
//! circomlib, provided by `light-poseidon`. Inputs are reduced modulo the
//! scalar-field order before hashing, the same reduction the witness
//! generator applies to circuit inputs.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use light_poseidon::{Poseidon, PoseidonHasher};
use num_bigint::{BigInt, BigUint};
use shield_core::field::bn254_scalar_order;

use crate::error::CryptoError;

/// Largest input count circomlib Poseidon is parameterized for.
pub const MAX_POSEIDON_INPUTS: usize = 12;

/// Reduce an arbitrary integer into `Fr`, mapping negatives to `r - |n| mod r`.
pub fn to_scalar(n: &BigInt) -> Fr {
    let order = BigInt::from(bn254_scalar_order().clone());
    let reduced = ((n % &order) + &order) % &order;
    Fr::from(reduced.magnitude().clone())
}

/// Canonical integer value of a scalar.
pub fn from_scalar(f: &Fr) -> BigUint {
    BigUint::from_bytes_be(&f.into_bigint().to_bytes_be())
}

/// `Poseidon(inputs)` with circom parameters for `inputs.len()` elements.
pub fn poseidon_hash(inputs: &[BigInt]) -> Result<BigUint, CryptoError> {
    if inputs.is_empty() || inputs.len() > MAX_POSEIDON_INPUTS {
        return Err(CryptoError::Arity {
            actual: inputs.len(),
            max: MAX_POSEIDON_INPUTS,
        });
    }
    let scalars: Vec<Fr> = inputs.iter().map(to_scalar).collect();
    let mut hasher = Poseidon::<Fr>::new_circom(inputs.len())
        .map_err(|e| CryptoError::Poseidon(e.to_string()))?;
    let digest = hasher
        .hash(&scalars)
        .map_err(|e| CryptoError::Poseidon(e.to_string()))?;
    Ok(from_scalar(&digest))
}

/// Viewing key for selective disclosure: single-input Poseidon of the
/// owner's public key.
pub fn derive_viewing_key(owner_pubkey: &BigInt) -> Result<BigUint, CryptoError> {
    poseidon_hash(std::slice::from_ref(owner_pubkey))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> BigUint {
        BigUint::parse_bytes(text.as_bytes(), 10).unwrap()
    }

    #[test]
    fn circomlib_vector_one_input() {
        let h = poseidon_hash(&[BigInt::from(1)]).unwrap();
        assert_eq!(
            h,
            dec("18586133768512220936620570745912940619677854269274689475585506675881198879027")
        );
    }

    #[test]
    fn circomlib_vector_two_inputs() {
        let h = poseidon_hash(&[BigInt::from(1), BigInt::from(2)]).unwrap();
        assert_eq!(
            h,
            dec("7853200120776062878684798364095072458815029376092732009249414926327459813530")
        );
    }

    #[test]
    fn viewing_key_is_single_input_poseidon() {
        let pk = BigInt::from(123456789u64);
        assert_eq!(
            derive_viewing_key(&pk).unwrap(),
            poseidon_hash(&[pk.clone()]).unwrap()
        );
    }

    #[test]
    fn inputs_are_reduced_mod_r() {
        let r = BigInt::from(bn254_scalar_order().clone());
        assert_eq!(
            poseidon_hash(&[&r + 1]).unwrap(),
            poseidon_hash(&[BigInt::from(1)]).unwrap()
        );
        assert_eq!(
            poseidon_hash(&[BigInt::from(-1)]).unwrap(),
            poseidon_hash(&[&r - 1]).unwrap()
        );
    }

    #[test]
    fn arity_limits() {
        assert!(matches!(
            poseidon_hash(&[]),
            Err(CryptoError::Arity { actual: 0, .. })
        ));
        let too_many = vec![BigInt::from(1); MAX_POSEIDON_INPUTS + 1];
        assert!(matches!(
            poseidon_hash(&too_many),
            Err(CryptoError::Arity { actual: 13, .. })
        ));
    }

    #[test]
    fn digest_is_below_scalar_order() {
        let h = derive_viewing_key(&BigInt::from(42)).unwrap();
        assert!(&h < bn254_scalar_order());
    }

    #[test]
    fn scalar_conversion_round_trips() {
        let n = dec("9876543210987654321098765432109876543210");
        assert_eq!(from_scalar(&to_scalar(&BigInt::from(n.clone()))), n);
    }
}

//! # BN254 Field Codec
//!
//! Pure conversions between integer representations of BN254 field
//! elements. Two hex conventions coexist and must never be conflated:
//!
//! | Function | Byte order | Use |
//! |----------|-----------|-----|
//! | [`encode_signal_le`] / [`decode_signal_le`] | little-endian | public-signal wire format |
//! | [`field_to_hex_be`] | big-endian | human-facing hashes (owner hash) |
//!
//! Range checks are asymmetric: input formatting ([`decimal_to_field_string`])
//! does not check against the prime, signal encoding does, and signal
//! decoding trusts its producer.

use std::sync::OnceLock;

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::FieldError;
use crate::value::FieldValue;

/// Upper bound (exclusive) for values encoded as public signals.
pub const BN254_PRIME_DECIMAL: &str =
    "21888242871839275222246405745257275088696311157297823662689037894645226208583";

/// Order of the BN254 scalar field `Fr`, the field Poseidon and the
/// witness generator reduce into.
pub const BN254_SCALAR_ORDER_DECIMAL: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// Width of a serialized field element.
pub const FIELD_BYTES: usize = 32;

/// Hex digits in a serialized field element, without the `0x` prefix.
pub const FIELD_HEX_DIGITS: usize = FIELD_BYTES * 2;

/// The public-signal range bound as a big integer.
pub fn bn254_prime() -> &'static BigUint {
    static PRIME: OnceLock<BigUint> = OnceLock::new();
    PRIME.get_or_init(|| parse_constant(BN254_PRIME_DECIMAL))
}

/// The scalar-field order as a big integer.
pub fn bn254_scalar_order() -> &'static BigUint {
    static ORDER: OnceLock<BigUint> = OnceLock::new();
    ORDER.get_or_init(|| parse_constant(BN254_SCALAR_ORDER_DECIMAL))
}

fn parse_constant(decimal: &str) -> BigUint {
    BigUint::parse_bytes(decimal.as_bytes(), 10).unwrap_or_default()
}

/// Render any accepted input representation as a decimal string.
///
/// Hex input is read big-endian. No range check against the prime.
pub fn decimal_to_field_string(value: &FieldValue) -> Result<String, FieldError> {
    Ok(value.to_bigint()?.to_str_radix(10))
}

/// Fixed 32-byte big-endian encoding of a non-negative integer below `2^256`.
pub fn field_element_to_bytes32_be(n: &BigInt) -> Result<[u8; FIELD_BYTES], FieldError> {
    if n.sign() == Sign::Minus {
        return Err(FieldError::Negative(n.to_string()));
    }
    let be = n.magnitude().to_bytes_be();
    if be.len() > FIELD_BYTES {
        return Err(FieldError::Overflow(n.to_string()));
    }
    let mut out = [0u8; FIELD_BYTES];
    out[FIELD_BYTES - be.len()..].copy_from_slice(&be);
    Ok(out)
}

/// Inverse of [`field_element_to_bytes32_be`].
pub fn bytes32_be_to_field_element(bytes: &[u8; FIELD_BYTES]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encode a field element in the public-signal wire format: `0x` followed by
/// 64 lowercase hex digits, least significant byte first.
///
/// # Errors
///
/// [`FieldError::OutOfRange`] unless `0 <= n < p`.
pub fn encode_signal_le(n: &BigInt) -> Result<String, FieldError> {
    if n.sign() == Sign::Minus || n.magnitude() >= bn254_prime() {
        return Err(FieldError::OutOfRange {
            value: n.to_string(),
        });
    }
    let mut bytes = field_element_to_bytes32_be(n)?;
    bytes.reverse();
    Ok(format!("0x{}", hex::encode(bytes)))
}

/// Decode a wire-format signal back to an integer.
///
/// Short input is left-padded with zeros to 64 digits before the byte order
/// is reversed. The result is not checked against the prime.
pub fn decode_signal_le(signal: &str) -> Result<BigUint, FieldError> {
    let digits = signal
        .strip_prefix("0x")
        .or_else(|| signal.strip_prefix("0X"))
        .unwrap_or(signal);
    if digits.len() > FIELD_HEX_DIGITS {
        return Err(FieldError::SignalLength {
            actual: digits.len(),
            max: FIELD_HEX_DIGITS,
        });
    }
    let padded = format!("{digits:0>width$}", width = FIELD_HEX_DIGITS);
    let mut bytes = hex::decode(&padded).map_err(|e| FieldError::Parse {
        input: signal.to_string(),
        reason: e.to_string(),
    })?;
    bytes.reverse();
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Big-endian `0x` + 64-digit rendering for human-facing hash values.
pub fn field_to_hex_be(n: &BigUint) -> String {
    format!(
        "0x{:0>width$}",
        n.to_str_radix(16),
        width = FIELD_HEX_DIGITS
    )
}

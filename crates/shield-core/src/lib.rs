//! # shield-core: Foundational Types for the Shielded-Asset Prover
//!
//! This crate holds everything the proving pipeline needs before any I/O or
//! cryptography happens:
//!
//! - **Field codec** ([`field`]): lossless conversion between decimal,
//!   hexadecimal, machine-integer and big-integer representations of BN254
//!   field elements, plus the little-endian public-signal wire format.
//! - **Tagged input values** ([`value`]): [`FieldValue`] replaces the
//!   duck-typed `string | number | bigint` inputs callers hand us.
//! - **Circuit inputs** ([`inputs`]): structural validation and
//!   normalization of a named input bundle into the decimal-string form the
//!   witness generator consumes.
//! - **Circuit registry** ([`circuit`]): the closed set of circuits and their
//!   static configuration (artifact names, public-signal layout).
//!
//! ## Crate Policy
//!
//! - No I/O, no async, no cryptographic backends. Those live in
//!   `shield-artifacts`, `shield-crypto` and `shield-zkp`.
//! - All fallible operations return typed errors from [`error`].

pub mod circuit;
pub mod error;
pub mod field;
pub mod inputs;
pub mod value;

// Re-export primary types.
pub use circuit::{CircuitConfig, CircuitId};
pub use error::{FieldError, InputError, UnknownCircuit};
pub use field::{
    bn254_prime, bn254_scalar_order, bytes32_be_to_field_element, decimal_to_field_string,
    decode_signal_le, encode_signal_le, field_element_to_bytes32_be, field_to_hex_be,
};
pub use inputs::{CircuitInputs, FormattedInputs, FormattedValue, InputValue};
pub use value::FieldValue;

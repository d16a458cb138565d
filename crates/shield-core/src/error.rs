//! # Error Types
//!
//! Structured errors for field encoding and input normalization. Higher
//! layers (`shield-zkp`) map these onto the caller-facing error kinds.

use thiserror::Error;

/// Error converting or encoding a field element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The text is not a decimal or `0x`-prefixed hexadecimal integer.
    #[error("cannot parse {input:?} as an integer: {reason}")]
    Parse { input: String, reason: String },

    /// The value lies outside `[0, p)` where a field element is required.
    #[error("value {value} is outside the BN254 field range [0, p)")]
    OutOfRange { value: String },

    /// Negative values have no unsigned 32-byte encoding.
    #[error("negative value {0} has no 32-byte encoding")]
    Negative(String),

    /// The value needs more than 32 bytes.
    #[error("value {0} does not fit in 32 bytes")]
    Overflow(String),

    /// A wire-format signal carries more hex digits than a 32-byte element.
    #[error("signal has {actual} hex digits, at most {max} allowed")]
    SignalLength { actual: usize, max: usize },
}

/// Error validating or normalizing a circuit input bundle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The bundle is not a name → value mapping.
    #[error("circuit inputs must be an object of named values, got {0}")]
    NotAMapping(String),

    /// A named input is null or missing its value.
    #[error("input {0:?} is null or undefined")]
    MissingValue(String),

    /// A list input nests deeper than the witness generator accepts.
    #[error("input {field:?} nests {depth} levels deep, at most {max} are supported")]
    TooDeep {
        field: String,
        depth: usize,
        max: usize,
    },

    /// The value has a JSON type that cannot denote an integer.
    #[error("input {field:?} has an unsupported value: {reason}")]
    Unsupported { field: String, reason: String },

    /// A scalar could not be normalized to a decimal string.
    #[error("input {field:?}: {source}")]
    Field {
        field: String,
        #[source]
        source: FieldError,
    },
}

/// A circuit name that is not part of the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown circuit {0:?}; expected one of unshield, transfer, disclosure")]
pub struct UnknownCircuit(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display_names_value() {
        let err = FieldError::OutOfRange {
            value: "12345".to_string(),
        };
        assert!(format!("{err}").contains("12345"));
    }

    #[test]
    fn too_deep_display_has_limits() {
        let err = InputError::TooDeep {
            field: "path".to_string(),
            depth: 3,
            max: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("path"));
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn field_error_is_source_of_input_error() {
        use std::error::Error as _;
        let err = InputError::Field {
            field: "amount".to_string(),
            source: FieldError::Negative("-1".to_string()),
        };
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("-1"));
    }

    #[test]
    fn unknown_circuit_lists_choices() {
        let err = UnknownCircuit("shield".to_string());
        assert!(format!("{err}").contains("disclosure"));
    }
}

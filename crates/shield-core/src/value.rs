//! # Tagged Input Values
//!
//! Callers describe field elements in several ways: decimal text, `0x` hex
//! text, machine integers, and arbitrary-precision integers. [`FieldValue`]
//! is the closed set of those shapes, normalized through a single function,
//! [`FieldValue::to_bigint`].

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::FieldError;

/// One integer-valued input in any of the accepted representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Base-10 text with an optional leading sign. Text carrying a `0x`
    /// prefix is read as hexadecimal, matching the dynamic caller contract.
    Decimal(String),
    /// Big-endian hexadecimal text, with or without a `0x` prefix.
    Hex(String),
    /// A machine integer.
    Integer(i64),
    /// An arbitrary-precision integer.
    BigInteger(BigInt),
}

impl FieldValue {
    /// Decimal text value.
    pub fn decimal(text: impl Into<String>) -> Self {
        Self::Decimal(text.into())
    }

    /// Hexadecimal text value.
    pub fn hex(text: impl Into<String>) -> Self {
        Self::Hex(text.into())
    }

    /// Normalize to an arbitrary-precision integer.
    ///
    /// No field-range check is applied; negative and oversized values are
    /// returned as-is. Range is enforced only where a value is bound for a
    /// public-signal position.
    pub fn to_bigint(&self) -> Result<BigInt, FieldError> {
        match self {
            Self::Decimal(text) => {
                let trimmed = text.trim();
                match strip_hex_prefix(trimmed) {
                    Some(digits) => parse_hex(text, digits),
                    None => parse_decimal(text, trimmed),
                }
            }
            Self::Hex(text) => {
                let trimmed = text.trim();
                parse_hex(text, strip_hex_prefix(trimmed).unwrap_or(trimmed))
            }
            Self::Integer(n) => Ok(BigInt::from(*n)),
            Self::BigInteger(n) => Ok(n.clone()),
        }
    }
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

fn parse_decimal(original: &str, text: &str) -> Result<BigInt, FieldError> {
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &text[1..]),
        Some(b'+') => (Sign::Plus, &text[1..]),
        _ => (Sign::Plus, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::Parse {
            input: original.to_string(),
            reason: "expected decimal digits".to_string(),
        });
    }
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| FieldError::Parse {
        input: original.to_string(),
        reason: "expected decimal digits".to_string(),
    })?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

fn parse_hex(original: &str, digits: &str) -> Result<BigInt, FieldError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FieldError::Parse {
            input: original.to_string(),
            reason: "expected hexadecimal digits".to_string(),
        });
    }
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| FieldError::Parse {
        input: original.to_string(),
        reason: "expected hexadecimal digits".to_string(),
    })?;
    Ok(BigInt::from(magnitude))
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(text) | Self::Hex(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            Self::BigInteger(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        if strip_hex_prefix(text.trim()).is_some() {
            Self::Hex(text.to_string())
        } else {
            Self::Decimal(text.to_string())
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        if strip_hex_prefix(text.trim()).is_some() {
            Self::Hex(text)
        } else {
            Self::Decimal(text)
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(small) => Self::Integer(small),
            Err(_) => Self::BigInteger(BigInt::from(n)),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        Self::Integer(i64::from(flag))
    }
}

impl From<BigInt> for FieldValue {
    fn from(n: BigInt) -> Self {
        Self::BigInteger(n)
    }
}

impl From<BigUint> for FieldValue {
    fn from(n: BigUint) -> Self {
        Self::BigInteger(BigInt::from(n))
    }
}

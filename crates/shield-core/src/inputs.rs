//! # Circuit Inputs
//!
//! A circuit input bundle maps signal names to scalars or lists of scalars.
//! Lists nest at most two levels (matrix-shaped inputs such as per-note
//! Merkle paths). Normalization ([`CircuitInputs::format`]) renders every
//! scalar as a decimal string and preserves names and shape exactly; it does
//! not check which names a circuit expects. Unknown or missing signals
//! surface later as witness-generation failures.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::Serialize;
use serde_json::Value;

use crate::error::{FieldError, InputError};
use crate::field::decimal_to_field_string;
use crate::value::FieldValue;

/// Deepest list nesting the witness generator accepts.
pub const MAX_NESTING_DEPTH: usize = 2;

/// A named input before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    /// An explicitly unset value (JSON `null`). Always rejected.
    Null,
    /// A single field element.
    Scalar(FieldValue),
    /// An ordered list of values.
    List(Vec<InputValue>),
}

impl InputValue {
    /// A scalar input.
    pub fn scalar(value: impl Into<FieldValue>) -> Self {
        Self::Scalar(value.into())
    }

    /// A flat list of scalars.
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<FieldValue>,
    {
        Self::List(values.into_iter().map(Self::scalar).collect())
    }

    /// A two-level list of scalars, one row per inner iterator.
    pub fn matrix<I, R, T>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: Into<FieldValue>,
    {
        Self::List(rows.into_iter().map(Self::list).collect())
    }

    /// List nesting depth: 0 for scalars, 1 for flat lists, 2 for matrices.
    pub fn depth(&self) -> usize {
        match self {
            Self::Null | Self::Scalar(_) => 0,
            Self::List(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    fn from_json(field: &str, value: &Value) -> Result<Self, InputError> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(flag) => Ok(Self::scalar(*flag)),
            Value::String(text) => Ok(Self::scalar(text.as_str())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::scalar(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::scalar(u))
                } else {
                    Err(InputError::Unsupported {
                        field: field.to_string(),
                        reason: format!("non-integer number {n}"),
                    })
                }
            }
            Value::Array(items) => items
                .iter()
                .map(|item| Self::from_json(field, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Object(_) => Err(InputError::Unsupported {
                field: field.to_string(),
                reason: "nested objects are not circuit signals".to_string(),
            }),
        }
    }

    fn format(&self, field: &str) -> Result<FormattedValue, InputError> {
        match self {
            Self::Null => Err(InputError::MissingValue(field.to_string())),
            Self::Scalar(value) => decimal_to_field_string(value)
                .map(FormattedValue::Scalar)
                .map_err(|source| InputError::Field {
                    field: field.to_string(),
                    source,
                }),
            Self::List(items) => items
                .iter()
                .map(|item| item.format(field))
                .collect::<Result<Vec<_>, _>>()
                .map(FormattedValue::List),
        }
    }
}

impl From<FieldValue> for InputValue {
    fn from(value: FieldValue) -> Self {
        Self::Scalar(value)
    }
}

macro_rules! scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for InputValue {
            fn from(value: $ty) -> Self {
                Self::scalar(value)
            }
        })*
    };
}

scalar_from!(&str, String, i64, i32, u32, u64, bool, num_bigint::BigInt, num_bigint::BigUint);

impl From<Vec<InputValue>> for InputValue {
    fn from(items: Vec<InputValue>) -> Self {
        Self::List(items)
    }
}

/// A named input bundle for one proof request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CircuitInputs {
    fields: BTreeMap<String, InputValue>,
}

impl CircuitInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<InputValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a named input.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<InputValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build a bundle from a JSON object.
    ///
    /// Strings become decimal or hex scalars by prefix, integers become
    /// machine or big integers, booleans become 0/1, `null` is kept so that
    /// [`validate`](Self::validate) can reject it with the field name.
    pub fn from_json(value: &Value) -> Result<Self, InputError> {
        let object = value
            .as_object()
            .ok_or_else(|| InputError::NotAMapping(json_kind(value).to_string()))?;
        let fields = object
            .iter()
            .map(|(name, v)| InputValue::from_json(name, v).map(|iv| (name.clone(), iv)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self { fields })
    }

    /// Structural checks performed before any I/O: no direct value may be
    /// null and no list may nest deeper than [`MAX_NESTING_DEPTH`].
    pub fn validate(&self) -> Result<(), InputError> {
        for (name, value) in &self.fields {
            if matches!(value, InputValue::Null) {
                return Err(InputError::MissingValue(name.clone()));
            }
            let depth = value.depth();
            if depth > MAX_NESTING_DEPTH {
                return Err(InputError::TooDeep {
                    field: name.clone(),
                    depth,
                    max: MAX_NESTING_DEPTH,
                });
            }
        }
        Ok(())
    }

    /// Normalize every scalar to a decimal string.
    pub fn format(&self) -> Result<FormattedInputs, InputError> {
        self.validate()?;
        let fields = self
            .fields
            .iter()
            .map(|(name, value)| value.format(name).map(|f| (name.clone(), f)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(FormattedInputs { fields })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A normalized input: decimal strings in the original shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormattedValue {
    Scalar(String),
    List(Vec<FormattedValue>),
}

impl FormattedValue {
    /// Scalar text, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text.as_str()),
            Self::List(_) => None,
        }
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Scalar(text) => out.push(text.as_str()),
            Self::List(items) => items.iter().for_each(|item| item.collect_leaves(out)),
        }
    }
}

/// The bundle handed to the witness generator.
///
/// Serializes to the JSON object the Circom witness calculator reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormattedInputs {
    fields: BTreeMap<String, FormattedValue>,
}

impl FormattedInputs {
    pub fn get(&self, name: &str) -> Option<&FormattedValue> {
        self.fields.get(name)
    }

    /// Scalar text for `name`, if present and scalar.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FormattedValue::as_scalar)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormattedValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as the witness generator's JSON input document.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Row-major flattening of each signal into integers, the layout the
    /// Circom witness calculator expects for array signals.
    pub fn flatten(&self) -> Result<Vec<(String, Vec<BigInt>)>, FieldError> {
        self.fields
            .iter()
            .map(|(name, value)| {
                let mut leaves = Vec::new();
                value.collect_leaves(&mut leaves);
                leaves
                    .into_iter()
                    .map(|leaf| {
                        BigInt::parse_bytes(leaf.as_bytes(), 10).ok_or_else(|| FieldError::Parse {
                            input: leaf.to_string(),
                            reason: "expected decimal digits".to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(|ints| (name.clone(), ints))
            })
            .collect()
    }
}

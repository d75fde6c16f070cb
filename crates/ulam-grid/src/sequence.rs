//! The input sequence.

use crate::{Error, Result, Value};

/// An ordered, non-empty, immutable list of values. Index `i` decides the
/// spiral position of element `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T> {
    values: Vec<T>,
}

impl<T> Sequence<T> {
    /// Wrap `values`, rejecting an empty list before any coordinate is computed.
    pub fn new(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidSequence("sequence is empty".to_string()));
        }
        Ok(Self { values })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> TryFrom<Vec<T>> for Sequence<T> {
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Self::new(values)
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Sequence<Value> {
    /// Integers `start..=end`.
    pub fn range(start: i64, end: i64) -> Result<Self> {
        Self::new((start..=end).map(Value::Int).collect())
    }

    /// Parse a JSON array of numbers and strings.
    #[cfg(feature = "serde")]
    pub fn from_json(input: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(input)?;
        if !raw.is_array() {
            return Err(Error::InvalidSequence(format!(
                "expected a JSON array, found {}",
                json_kind(&raw)
            )));
        }
        let values: Vec<Value> = serde_json::from_value(raw)
            .map_err(|e| Error::InvalidSequence(format!("unsupported element: {}", e)))?;
        Self::new(values)
    }
}

#[cfg(feature = "serde")]
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
